use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::error::TableError;
use super::filter::matches_filter;
use super::pagination::Pagination;
use super::projection::{blank_row, project_records, to_save_record};
use super::row::{CellValue, Row, RowId, RowMode};
use super::save::{select_dirty, SavePlan, SaveReport};
use super::schema::{FieldKind, KeyStrategy, SaveScope, TableSchema};
use super::sort::{sort_rows, SortState};

/// Identifies one issued fetch. Only the latest ticket may replace the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Row state captured when editing starts.
#[derive(Debug, Clone, PartialEq)]
struct EditSnapshot {
    values: BTreeMap<String, CellValue>,
    was_new: bool,
    was_updated: bool,
}

/// State of one editable table screen.
#[derive(Debug, Clone)]
pub struct TableController {
    schema: &'static TableSchema,
    rows: Vec<Row>,
    snapshots: HashMap<RowId, EditSnapshot>,
    rejections: HashMap<RowId, String>,
    search: String,
    sort: Option<SortState>,
    pagination: Pagination,
    save_enabled: bool,
    issued: u64,
    loading: bool,
}

impl TableController {
    pub fn new(schema: &'static TableSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
            snapshots: HashMap::new(),
            rejections: HashMap::new(),
            search: String::new(),
            sort: None,
            pagination: Pagination::new(schema.default_page_size),
            save_enabled: false,
            issued: 0,
            loading: false,
        }
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Full working set, filter ignored.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|r| &r.id == id)
    }

    fn row_mut(&mut self, id: &RowId) -> Result<&mut Row, TableError> {
        self.rows
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| TableError::UnknownRow(id.clone()))
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.loading = true;
        LoadTicket(self.issued)
    }

    /// Replaces the collection with a fetched response.
    ///
    /// Returns `false` and leaves everything untouched when a newer fetch
    /// has been issued since `ticket`.
    pub fn finish_load(&mut self, ticket: LoadTicket, records: &[Value]) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.rows = project_records(self.schema, records);
        self.snapshots.clear();
        self.rejections.clear();
        self.save_enabled = false;
        self.loading = false;
        self.pagination.page = 0;
        true
    }

    /// A failed fetch keeps the previous rows on screen.
    pub fn fail_load(&mut self, ticket: LoadTicket) -> bool {
        if ticket.0 != self.issued {
            return false;
        }
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ------------------------------------------------------------------
    // View: search, sort, paging
    // ------------------------------------------------------------------

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
        self.pagination.page = 0;
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn toggle_sort(&mut self, field: &str) {
        if !self.schema.sortable || self.schema.column(field).is_none() {
            return;
        }
        self.sort = Some(SortState::toggled(self.sort.as_ref(), field));
    }

    /// Rows passing the filter, sorted. Rows being edited always stay visible.
    pub fn visible_rows(&self) -> Vec<&Row> {
        let mut rows: Vec<&Row> = self
            .rows
            .iter()
            .filter(|r| r.is_editing() || matches_filter(r, self.schema, &self.search))
            .collect();
        if let Some(sort) = &self.sort {
            sort_rows(&mut rows, self.schema, sort);
        }
        rows
    }

    fn clamped_pagination(&self, total: usize) -> Pagination {
        let mut pagination = self.pagination;
        pagination.clamp(total);
        pagination
    }

    pub fn page(&self) -> usize {
        self.clamped_pagination(self.visible_rows().len()).page
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages(self.visible_rows().len())
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.page = page;
        let total = self.visible_rows().len();
        self.pagination.clamp(total);
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.pagination = Pagination::new(self.schema.page_size_or_default(size));
    }

    pub fn page_rows(&self) -> Vec<&Row> {
        let visible = self.visible_rows();
        let range = self.clamped_pagination(visible.len()).range(visible.len());
        visible[range].to_vec()
    }

    // ------------------------------------------------------------------
    // Editing
    // ------------------------------------------------------------------

    fn ensure_editable(&self) -> Result<(), TableError> {
        if self.schema.is_editable() {
            Ok(())
        } else {
            Err(TableError::Validation(format!(
                "{} is read-only",
                self.schema.title
            )))
        }
    }

    fn unique_temp_id(&self) -> RowId {
        loop {
            let id = RowId::generate();
            if self.row(&id).is_none() {
                return id;
            }
        }
    }

    /// Inserts an empty draft row at the top, already in edit mode.
    pub fn add_row(&mut self) -> Result<RowId, TableError> {
        self.ensure_editable()?;
        if !self.schema.allow_add {
            return Err(TableError::Validation(format!(
                "rows cannot be added to {}",
                self.schema.title
            )));
        }
        let id = self.unique_temp_id();
        let mut row = blank_row(self.schema, id.clone());
        row.mode = RowMode::Edit;
        self.snapshots.insert(
            id.clone(),
            EditSnapshot {
                values: row.values().clone(),
                was_new: true,
                was_updated: false,
            },
        );
        self.rows.insert(0, row);
        self.pagination.page = 0;
        Ok(id)
    }

    pub fn begin_edit(&mut self, id: &RowId) -> Result<(), TableError> {
        self.ensure_editable()?;
        let row = self.row_mut(id)?;
        if row.is_editing() {
            return Ok(());
        }
        row.mode = RowMode::Edit;
        let snapshot = EditSnapshot {
            values: row.values().clone(),
            was_new: row.is_new,
            was_updated: row.is_updated,
        };
        self.snapshots.insert(id.clone(), snapshot);
        Ok(())
    }

    /// Writes one field. A row whose business key is filled in counts as an
    /// update from here on; a row without one stays a draft.
    pub fn commit_field(
        &mut self,
        id: &RowId,
        field: &str,
        value: CellValue,
    ) -> Result<(), TableError> {
        self.ensure_editable()?;
        let schema = self.schema;
        let row = self.row_mut(id)?;
        if !schema.can_edit_field(field, row.is_new) {
            return Err(TableError::Validation(format!("{} is read-only", field)));
        }
        if let Some(column) = schema.column(field) {
            if column.kind == FieldKind::Select
                && !value.is_blank()
                && !column.options.contains(&value.to_string().as_str())
            {
                return Err(TableError::Validation(format!(
                    "'{}' is not a valid {}",
                    value, column.header
                )));
            }
        }

        row.set(field, value);
        let has_key = row
            .get(schema.key_field())
            .map(|v| !v.is_blank())
            .unwrap_or(false);
        if has_key {
            row.is_updated = true;
            row.is_new = false;
        }
        self.rejections.remove(id);
        self.save_enabled = true;
        Ok(())
    }

    /// Parses editor text by column kind, then commits it.
    pub fn commit_input(&mut self, id: &RowId, field: &str, raw: &str) -> Result<(), TableError> {
        let kind = self
            .schema
            .column(field)
            .map(|c| c.kind)
            .unwrap_or_default();
        let value = CellValue::from_input(kind, raw)?;
        self.commit_field(id, field, value)
    }

    /// Leaves edit mode keeping the committed values.
    pub fn save_row(&mut self, id: &RowId) -> Result<(), TableError> {
        let row = self.row_mut(id)?;
        row.mode = RowMode::View;
        self.snapshots.remove(id);
        Ok(())
    }

    /// Leaves edit mode discarding the edit. Never-saved rows are removed.
    pub fn cancel_edit(&mut self, id: &RowId) -> Result<(), TableError> {
        let snapshot = self.snapshots.remove(id);
        let row = self.row_mut(id)?;
        let was_new = snapshot.as_ref().map(|s| s.was_new).unwrap_or(false);

        if row.is_new || was_new {
            self.rows.retain(|r| &r.id != id);
            self.rejections.remove(id);
            return Ok(());
        }

        if let Some(snapshot) = snapshot {
            row.replace_values(snapshot.values);
            row.is_updated = snapshot.was_updated;
            row.is_new = snapshot.was_new;
        }
        row.mode = RowMode::View;
        Ok(())
    }

    /// Removes a row from the local collection only.
    pub fn delete_row(&mut self, id: &RowId) -> Result<Row, TableError> {
        let index = self
            .rows
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| TableError::UnknownRow(id.clone()))?;
        self.snapshots.remove(id);
        self.rejections.remove(id);
        Ok(self.rows.remove(index))
    }

    pub fn is_editing(&self, id: &RowId) -> bool {
        self.row(id).map(Row::is_editing).unwrap_or(false)
    }

    // ------------------------------------------------------------------
    // Bulk save
    // ------------------------------------------------------------------

    pub fn dirty_rows(&self) -> Vec<&Row> {
        match self.schema.save_scope {
            SaveScope::WorkingSet => select_dirty(&self.rows),
            SaveScope::Visible => select_dirty(
                self.rows
                    .iter()
                    .filter(|r| r.is_editing() || matches_filter(r, self.schema, &self.search)),
            ),
        }
    }

    pub fn can_save(&self) -> bool {
        self.save_enabled && self.schema.save_path.is_some() && !self.dirty_rows().is_empty()
    }

    pub fn plan_save(&self) -> Result<SavePlan, TableError> {
        self.ensure_editable()?;
        let dirty = self.dirty_rows();
        if dirty.is_empty() {
            return Err(TableError::Validation(
                "There are no changes to save".to_string(),
            ));
        }
        Ok(SavePlan {
            ids: dirty.iter().map(|r| r.id.clone()).collect(),
            records: dirty.iter().map(|r| to_save_record(r)).collect(),
            revisions: dirty.iter().map(|r| r.revision()).collect(),
        })
    }

    /// Clears dirty flags of accepted rows only; rejected rows keep theirs
    /// and remember the reason.
    ///
    /// An accepted row edited after `plan` was built stays dirty: the backend
    /// only received the planned values.
    pub fn apply_save_report(&mut self, plan: &SavePlan, report: &SaveReport) -> usize {
        let mut cleared = 0;
        for id in &report.accepted {
            let Some(planned) = plan.planned_revision(id) else {
                continue;
            };
            let rekey = self.accepted_id(id);
            let Ok(row) = self.row_mut(id) else {
                continue;
            };
            // Сервер уже знает строку, но правки после плана ещё не отправлены
            let unsent = row.revision() != planned;
            row.is_new = false;
            row.is_updated = unsent;
            if let (false, Some(new_id)) = (unsent, rekey) {
                row.id = new_id;
            }
            let saved_values = row.values().clone();
            self.rejections.remove(id);
            // Отмена правки вернёт снимок; он грязный, если расходится с тем, что сохранено
            if let Some(snapshot) = self.snapshots.get_mut(id) {
                snapshot.was_new = false;
                snapshot.was_updated = unsent || snapshot.values != saved_values;
            }
            if !unsent {
                cleared += 1;
            }
        }
        for rejected in &report.rejected {
            if self.row(&rejected.id).is_some() {
                self.rejections
                    .insert(rejected.id.clone(), rejected.reason.clone());
            }
        }
        self.save_enabled = !self.dirty_rows().is_empty();
        cleared
    }

    /// A saved draft takes its business key as id when that key is free.
    fn accepted_id(&self, id: &RowId) -> Option<RowId> {
        let KeyStrategy::Field(key_field) = self.schema.key else {
            return None;
        };
        let row = self.row(id)?;
        if self.snapshots.contains_key(id) {
            return None;
        }
        let key = row.get(key_field).filter(|v| !v.is_blank())?.to_string();
        let candidate = RowId::new(key);
        if &candidate == id || self.row(&candidate).is_some() {
            return None;
        }
        Some(candidate)
    }

    pub fn rejection(&self, id: &RowId) -> Option<&str> {
        self.rejections.get(id).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EMPLOYEE_SCHEMA;
    use crate::domain::a002_stock_balance::STOCK_BALANCE_SCHEMA;
    use crate::shared::table::save::RejectedRow;
    use serde_json::json;

    fn loaded() -> TableController {
        let mut table = TableController::new(&EMPLOYEE_SCHEMA);
        let ticket = table.begin_load();
        assert!(table.finish_load(
            ticket,
            &[
                json!({ "ServiceNo": "E1", "FirstName": "Nimal", "LastName": "Perera", "Status": "Active" }),
                json!({ "ServiceNo": "E2", "FirstName": "Sunil", "LastName": "Silva", "Status": "Active" }),
            ],
        ));
        table
    }

    #[test]
    fn test_add_row_is_new_with_unique_id() {
        let mut table = loaded();
        let first = table.add_row().unwrap();
        let second = table.add_row().unwrap();
        assert_ne!(first, second);

        let row = table.row(&first).unwrap();
        assert!(row.is_new);
        assert!(row.is_editing());
        assert!(table.rows().iter().filter(|r| r.id == first).count() == 1);
        assert_eq!(table.rows()[0].id, second);
    }

    #[test]
    fn test_cancel_new_row_removes_it() {
        let mut table = loaded();
        let id = table.add_row().unwrap();
        table.commit_input(&id, "FirstName", "Draft").unwrap();
        table.cancel_edit(&id).unwrap();
        assert!(table.row(&id).is_none());
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_cancel_draft_with_key_typed_still_removes_it() {
        let mut table = loaded();
        let id = table.add_row().unwrap();
        table.commit_input(&id, "ServiceNo", "E9").unwrap();
        assert!(!table.row(&id).unwrap().is_new);
        table.cancel_edit(&id).unwrap();
        assert!(table.row(&id).is_none());
    }

    #[test]
    fn test_commit_on_keyed_row_marks_updated() {
        let mut table = loaded();
        let id = RowId::from("E1");
        table.begin_edit(&id).unwrap();
        table.commit_input(&id, "MobileNo", "0771234567").unwrap();
        let row = table.row(&id).unwrap();
        assert!(row.is_updated);
        assert!(!row.is_new);
        assert!(table.can_save());
    }

    #[test]
    fn test_commit_without_key_stays_new() {
        let mut table = loaded();
        let id = table.add_row().unwrap();
        table.commit_input(&id, "FirstName", "Kamal").unwrap();
        let row = table.row(&id).unwrap();
        assert!(row.is_new);
        assert!(!row.is_updated);
    }

    #[test]
    fn test_business_key_is_read_only_on_persisted_rows() {
        let mut table = loaded();
        let id = RowId::from("E1");
        table.begin_edit(&id).unwrap();
        let err = table.commit_input(&id, "ServiceNo", "X").unwrap_err();
        assert!(matches!(err, TableError::Validation(_)));
        assert_eq!(table.row(&id).unwrap().text("ServiceNo"), "E1");
    }

    #[test]
    fn test_select_column_rejects_unknown_option() {
        let mut table = loaded();
        let id = RowId::from("E2");
        assert!(table.commit_input(&id, "Status", "Retired").is_err());
        table.commit_input(&id, "Status", "Inactive").unwrap();
        assert_eq!(table.row(&id).unwrap().text("Status"), "Inactive");
    }

    #[test]
    fn test_cancel_restores_values_of_persisted_row() {
        let mut table = loaded();
        let id = RowId::from("E1");
        table.begin_edit(&id).unwrap();
        table.commit_input(&id, "FirstName", "Changed").unwrap();
        table.cancel_edit(&id).unwrap();

        let row = table.row(&id).unwrap();
        assert_eq!(row.text("FirstName"), "Nimal");
        assert!(!row.is_updated);
        assert_eq!(row.mode, RowMode::View);
        assert!(!table.can_save());
    }

    #[test]
    fn test_save_row_keeps_values_and_leaves_edit_mode() {
        let mut table = loaded();
        let id = RowId::from("E1");
        table.begin_edit(&id).unwrap();
        table.commit_input(&id, "FirstName", "Changed").unwrap();
        table.save_row(&id).unwrap();
        table.cancel_edit(&id).unwrap();
        assert_eq!(table.row(&id).unwrap().text("FirstName"), "Changed");
    }

    #[test]
    fn test_plan_save_submits_only_the_draft() {
        let mut table = TableController::new(&EMPLOYEE_SCHEMA);
        let ticket = table.begin_load();
        table.finish_load(ticket, &[json!({ "ServiceNo": "E1" })]);
        let draft = table.add_row().unwrap();
        table.commit_input(&draft, "FirstName", "New").unwrap();

        let plan = table.plan_save().unwrap();
        assert_eq!(plan.ids, vec![draft]);
        assert_eq!(plan.records[0]["ServiceNo"], json!(""));
        assert_eq!(plan.records[0]["isNew"], json!(true));
    }

    #[test]
    fn test_plan_save_without_changes_is_a_validation_error() {
        let table = loaded();
        assert_eq!(
            table.plan_save().unwrap_err().kind(),
            crate::shared::table::ErrorKind::Validation
        );
    }

    #[test]
    fn test_save_scope_working_set_ignores_filter() {
        let mut table = loaded();
        table.commit_input(&RowId::from("E1"), "FirstName", "Amal").unwrap();
        table.set_search("silva");
        let ids: Vec<&str> = table.dirty_rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["E1"]);
    }

    #[test]
    fn test_only_accepted_rows_are_cleared() {
        let mut table = loaded();
        let e1 = RowId::from("E1");
        let e2 = RowId::from("E2");
        table.commit_input(&e1, "FirstName", "A").unwrap();
        table.commit_input(&e2, "FirstName", "B").unwrap();

        let plan = table.plan_save().unwrap();
        let report = SaveReport {
            accepted: vec![e1.clone()],
            rejected: vec![RejectedRow { id: e2.clone(), reason: "duplicate NIC".into() }],
        };
        assert_eq!(table.apply_save_report(&plan, &report), 1);
        assert!(!table.row(&e1).unwrap().is_dirty());
        assert!(table.row(&e2).unwrap().is_updated);
        assert_eq!(table.rejection(&e2), Some("duplicate NIC"));
        assert!(table.can_save());

        let retry = table.plan_save().unwrap();
        assert_eq!(retry.ids, vec![e2.clone()]);
        table.apply_save_report(&retry, &SaveReport::all_accepted(&retry.ids));
        assert!(!table.can_save());
        assert_eq!(table.rejection(&e2), None);
    }

    #[test]
    fn test_accepted_draft_takes_business_key_as_id() {
        let mut table = loaded();
        let draft = table.add_row().unwrap();
        table.commit_input(&draft, "ServiceNo", "E3").unwrap();
        table.save_row(&draft).unwrap();
        let plan = table.plan_save().unwrap();
        table.apply_save_report(&plan, &SaveReport::all_accepted(&plan.ids));
        assert!(table.row(&RowId::from("E3")).is_some());
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut table = TableController::new(&EMPLOYEE_SCHEMA);
        let first = table.begin_load();
        let second = table.begin_load();
        assert!(table.finish_load(second, &[json!({ "ServiceNo": "NEW" })]));
        assert!(!table.finish_load(first, &[json!({ "ServiceNo": "OLD" })]));
        assert_eq!(table.rows()[0].id.as_str(), "NEW");
        assert!(!table.is_loading());
    }

    #[test]
    fn test_failed_load_keeps_previous_rows() {
        let mut table = loaded();
        let ticket = table.begin_load();
        assert!(table.fail_load(ticket));
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_filter_does_not_touch_collection() {
        let mut table = loaded();
        table.set_search("sunil");
        assert_eq!(table.visible_rows().len(), 1);
        table.set_search("sunil");
        assert_eq!(table.visible_rows().len(), 1);
        assert_eq!(table.rows().len(), 2);
    }

    #[test]
    fn test_row_in_edit_mode_stays_visible() {
        let mut table = loaded();
        table.set_search("sunil");
        let id = table.add_row().unwrap();
        assert!(table.visible_rows().iter().any(|r| r.id == id));
    }

    #[test]
    fn test_pagination_clamps_when_filter_shrinks_view() {
        let mut table = TableController::new(&STOCK_BALANCE_SCHEMA);
        let records: Vec<Value> = (0..12)
            .map(|i| json!({ "Warehouse": "STM", "MatCode": format!("M{:02}", i) }))
            .collect();
        let ticket = table.begin_load();
        table.finish_load(ticket, &records);
        assert_eq!(table.page_size(), 5);
        assert_eq!(table.total_pages(), 3);

        table.set_page(2);
        assert_eq!(table.page_rows().len(), 2);
        table.set_page(10);
        assert_eq!(table.page(), 2);

        table.set_search("M0");
        assert_eq!(table.page(), 0);
        assert_eq!(table.page_rows().len(), 5);
    }

    #[test]
    fn test_page_size_must_be_offered() {
        let mut table = TableController::new(&STOCK_BALANCE_SCHEMA);
        table.set_page_size(20);
        assert_eq!(table.page_size(), 20);
        table.set_page_size(7);
        assert_eq!(table.page_size(), 5);
    }

    #[test]
    fn test_read_only_schema_rejects_edits() {
        let mut table = TableController::new(&STOCK_BALANCE_SCHEMA);
        assert!(table.add_row().is_err());
        assert!(table.plan_save().is_err());
    }

    #[test]
    fn test_delete_removes_row_locally() {
        let mut table = loaded();
        let removed = table.delete_row(&RowId::from("E2")).unwrap();
        assert_eq!(removed.text("FirstName"), "Sunil");
        assert_eq!(table.rows().len(), 1);
        assert!(matches!(
            table.delete_row(&RowId::from("E2")),
            Err(TableError::UnknownRow(_))
        ));
    }

    #[test]
    fn test_edit_made_while_saving_stays_dirty() {
        let mut table = loaded();
        let id = RowId::from("E1");
        table.commit_input(&id, "FirstName", "A").unwrap();
        let plan = table.plan_save().unwrap();
        assert_eq!(plan.records[0]["FirstName"], json!("A"));

        table.commit_input(&id, "FirstName", "B").unwrap();
        assert_eq!(table.apply_save_report(&plan, &SaveReport::all_accepted(&plan.ids)), 0);

        let row = table.row(&id).unwrap();
        assert!(row.is_dirty());
        assert!(!row.is_new);
        assert!(table.can_save());
        let retry = table.plan_save().unwrap();
        assert_eq!(retry.records[0]["FirstName"], json!("B"));
    }

    #[test]
    fn test_draft_edited_while_saving_is_resent_as_update() {
        let mut table = loaded();
        let draft = table.add_row().unwrap();
        table.commit_input(&draft, "FirstName", "Kamal").unwrap();
        let plan = table.plan_save().unwrap();
        table.commit_input(&draft, "LastName", "Fernando").unwrap();
        table.apply_save_report(&plan, &SaveReport::all_accepted(&plan.ids));

        let row = table.row(&draft).unwrap();
        assert!(!row.is_new);
        assert!(row.is_updated);
    }

    #[test]
    fn test_accepted_id_outside_plan_is_ignored() {
        let mut table = loaded();
        let e1 = RowId::from("E1");
        let e2 = RowId::from("E2");
        table.commit_input(&e1, "FirstName", "A").unwrap();
        let plan = table.plan_save().unwrap();
        table.commit_input(&e2, "FirstName", "B").unwrap();

        let report = SaveReport::all_accepted(&[e1.clone(), e2.clone()]);
        assert_eq!(table.apply_save_report(&plan, &report), 1);
        assert!(table.row(&e2).unwrap().is_dirty());
    }

    const VISIBLE_EMPLOYEES: TableSchema = TableSchema {
        save_scope: SaveScope::Visible,
        sortable: true,
        ..EMPLOYEE_SCHEMA
    };

    fn visible_scope() -> TableController {
        let mut table = TableController::new(&VISIBLE_EMPLOYEES);
        let ticket = table.begin_load();
        table.finish_load(
            ticket,
            &[
                json!({ "ServiceNo": "E1", "FirstName": "Nimal", "LastName": "Perera" }),
                json!({ "ServiceNo": "E2", "FirstName": "Sunil", "LastName": "Silva" }),
                json!({ "ServiceNo": "E3", "FirstName": "Ruwan", "LastName": "Silva" }),
            ],
        );
        table
    }

    #[test]
    fn test_save_scope_visible_skips_filtered_out_rows() {
        let mut table = visible_scope();
        for id in ["E1", "E2", "E3"] {
            table.commit_input(&RowId::from(id), "MobileNo", "0771234567").unwrap();
        }
        table.set_search("silva");
        let plan = table.plan_save().unwrap();
        assert_eq!(plan.ids, vec![RowId::from("E2"), RowId::from("E3")]);

        table.apply_save_report(&plan, &SaveReport::all_accepted(&plan.ids));
        assert!(table.row(&RowId::from("E1")).unwrap().is_dirty());
    }

    #[test]
    fn test_save_scope_visible_keeps_collection_order_when_sorted() {
        let mut table = visible_scope();
        table.commit_input(&RowId::from("E1"), "FirstName", "Zed").unwrap();
        table.commit_input(&RowId::from("E2"), "FirstName", "Amy").unwrap();
        table.toggle_sort("FirstName");
        assert_eq!(table.visible_rows()[0].id.as_str(), "E2");

        let ids: Vec<&str> = table.dirty_rows().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["E1", "E2"]);
    }
}

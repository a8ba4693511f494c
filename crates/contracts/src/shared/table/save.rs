use serde_json::Value;

use super::row::{Row, RowId};

/// Rows flagged new or updated, in collection order.
pub fn select_dirty<'a, I>(rows: I) -> Vec<&'a Row>
where
    I: IntoIterator<Item = &'a Row>,
{
    rows.into_iter().filter(|row| row.is_dirty()).collect()
}

/// One bulk save request, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePlan {
    pub ids: Vec<RowId>,
    pub records: Vec<Value>,
    /// Row revisions at planning time, parallel to `ids`.
    pub revisions: Vec<u64>,
}

impl SavePlan {
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Revision the row had when it was put into this plan.
    pub fn planned_revision(&self, id: &RowId) -> Option<u64> {
        self.ids
            .iter()
            .position(|planned| planned == id)
            .and_then(|i| self.revisions.get(i).copied())
    }

    pub fn body(&self) -> Value {
        Value::Array(self.records.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    pub id: RowId,
    pub reason: String,
}

/// Per-row outcome of a bulk save.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SaveReport {
    pub accepted: Vec<RowId>,
    pub rejected: Vec<RejectedRow>,
}

impl SaveReport {
    pub fn all_accepted(ids: &[RowId]) -> Self {
        Self {
            accepted: ids.to_vec(),
            rejected: Vec::new(),
        }
    }

    pub fn all_rejected(ids: &[RowId], reason: &str) -> Self {
        Self {
            accepted: Vec::new(),
            rejected: ids
                .iter()
                .map(|id| RejectedRow {
                    id: id.clone(),
                    reason: reason.to_string(),
                })
                .collect(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee::EMPLOYEE_SCHEMA;
    use crate::shared::table::projection::{blank_row, project_records};
    use serde_json::json;

    #[test]
    fn test_only_new_or_updated_rows_are_selected() {
        let mut rows = project_records(
            &EMPLOYEE_SCHEMA,
            &[
                json!({ "ServiceNo": "E1" }),
                json!({ "ServiceNo": "E2" }),
                json!({ "ServiceNo": "E3" }),
            ],
        );
        rows[2].is_updated = true;
        rows.insert(1, blank_row(&EMPLOYEE_SCHEMA, RowId::new("tmp1")));

        let ids: Vec<&str> = select_dirty(&rows).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["tmp1", "E3"]);
    }

    #[test]
    fn test_clean_persisted_row_is_not_submitted() {
        let mut rows = project_records(&EMPLOYEE_SCHEMA, &[json!({ "ServiceNo": "E1" })]);
        rows.push(blank_row(&EMPLOYEE_SCHEMA, RowId::new("tmp1")));

        let selected = select_dirty(&rows);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id.as_str(), "tmp1");
        assert_eq!(selected[0].text("ServiceNo"), "");
    }
}

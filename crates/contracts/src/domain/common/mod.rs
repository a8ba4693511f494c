//! Header and save request shared by the MRQ and MTN documents

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::table::{Row, SavePlan, TableError, TableSchema};

/// Static description of one material document type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDocumentKind {
    pub code: &'static str,
    pub title: &'static str,
    pub lines: &'static TableSchema,
    /// Editable quantity column of a line.
    pub quantity_field: &'static str,
    pub default_warehouse: &'static str,
}

impl MaterialDocumentKind {
    /// Query selecting the material lines of a warehouse.
    pub fn warehouse_query(&self, warehouse: &str) -> Vec<(&'static str, String)> {
        vec![("whCode", warehouse.trim().to_string())]
    }

    /// A line may not move more than the warehouse holds.
    pub fn validate_line(&self, row: &Row) -> Result<(), TableError> {
        let code = row.text("MatCode");
        let Some(quantity) = row.get(self.quantity_field).and_then(|v| v.as_f64()) else {
            return Err(TableError::Validation(format!(
                "{}: quantity is required",
                code
            )));
        };
        if quantity <= 0.0 {
            return Err(TableError::Validation(format!(
                "{}: quantity must be greater than zero",
                code
            )));
        }
        if let Some(balance) = row.get("BalQty").and_then(|v| v.as_f64()) {
            if quantity > balance {
                return Err(TableError::Validation(format!(
                    "{}: quantity {} exceeds the balance {}",
                    code, quantity, balance
                )));
            }
        }
        Ok(())
    }
}

/// Input fields of the document header, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    DocumentNo,
    DocumentDate,
    RequestedBy,
    Warehouse,
    Project,
    Remarks,
}

impl HeaderField {
    pub const ALL: [HeaderField; 6] = [
        Self::DocumentNo,
        Self::DocumentDate,
        Self::RequestedBy,
        Self::Warehouse,
        Self::Project,
        Self::Remarks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::DocumentNo => "NO",
            Self::DocumentDate => "DATE",
            Self::RequestedBy => "REQUESTED BY",
            Self::Warehouse => "WAREHOUSE",
            Self::Project => "PROJECT",
            Self::Remarks => "REMARKS",
        }
    }

    pub fn input_type(&self) -> &'static str {
        match self {
            Self::DocumentDate => "date",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DocumentHeader {
    pub document_no: String,
    /// YYYY-MM-DD
    pub document_date: String,
    pub requested_by: String,
    pub warehouse: String,
    pub project: String,
    pub remarks: String,
}

impl DocumentHeader {
    pub fn new(kind: &MaterialDocumentKind, today: NaiveDate) -> Self {
        Self {
            document_no: String::new(),
            document_date: today.format("%Y-%m-%d").to_string(),
            requested_by: String::new(),
            warehouse: kind.default_warehouse.to_string(),
            project: String::new(),
            remarks: String::new(),
        }
    }

    pub fn field(&self, field: HeaderField) -> &str {
        match field {
            HeaderField::DocumentNo => &self.document_no,
            HeaderField::DocumentDate => &self.document_date,
            HeaderField::RequestedBy => &self.requested_by,
            HeaderField::Warehouse => &self.warehouse,
            HeaderField::Project => &self.project,
            HeaderField::Remarks => &self.remarks,
        }
    }

    pub fn set_field(&mut self, field: HeaderField, value: String) {
        let slot = match field {
            HeaderField::DocumentNo => &mut self.document_no,
            HeaderField::DocumentDate => &mut self.document_date,
            HeaderField::RequestedBy => &mut self.requested_by,
            HeaderField::Warehouse => &mut self.warehouse,
            HeaderField::Project => &mut self.project,
            HeaderField::Remarks => &mut self.remarks,
        };
        *slot = value;
    }

    pub fn validate(&self) -> Result<(), TableError> {
        if self.warehouse.trim().is_empty() {
            return Err(TableError::Validation("Warehouse is required".to_string()));
        }
        NaiveDate::parse_from_str(&self.document_date, "%Y-%m-%d").map_err(|_| {
            TableError::Validation(format!(
                "'{}' is not a valid document date",
                self.document_date
            ))
        })?;
        Ok(())
    }
}

/// Body of `SaveMRQDetails` / `SaveMTNDetails`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaterialDocumentRequest {
    pub document_type: String,
    pub header: DocumentHeader,
    pub materials: Vec<Value>,
}

impl MaterialDocumentRequest {
    /// Validates the header and every planned line before anything is sent.
    ///
    /// `loaded_warehouse` is the warehouse the lines and their balances were
    /// fetched for; it must still match the header.
    pub fn build(
        kind: &MaterialDocumentKind,
        header: &DocumentHeader,
        loaded_warehouse: Option<&str>,
        plan: &SavePlan,
        lines: &[&Row],
    ) -> Result<Self, TableError> {
        header.validate()?;
        let current = header.warehouse.trim();
        match loaded_warehouse.map(str::trim) {
            None => {
                return Err(TableError::Validation(format!(
                    "Load materials for warehouse {} before saving",
                    current
                )))
            }
            Some(loaded) if !loaded.eq_ignore_ascii_case(current) => {
                return Err(TableError::Validation(format!(
                    "Materials were loaded for warehouse {}; load them for {} before saving",
                    loaded, current
                )))
            }
            Some(_) => {}
        }
        for row in lines {
            kind.validate_line(row)?;
        }
        Ok(Self {
            document_type: kind.code.to_string(),
            header: header.clone(),
            materials: plan.records.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a006_mrq::MRQ_DOCUMENT;
    use crate::shared::table::{RowId, TableController};
    use serde_json::json;

    fn controller() -> TableController {
        let mut table = TableController::new(MRQ_DOCUMENT.lines);
        let ticket = table.begin_load();
        table.finish_load(
            ticket,
            &[
                json!({ "MatCode": "M001", "MatDesc": "Cement", "UOM": "BAG", "BalQty": 40 }),
                json!({ "MatCode": "M002", "MatDesc": "Sand", "UOM": "CUBE", "BalQty": 3 }),
            ],
        );
        table
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 2).unwrap()
    }

    #[test]
    fn test_header_defaults() {
        let header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        assert_eq!(header.warehouse, "STM");
        assert_eq!(header.document_date, "2024-05-02");
        assert!(header.validate().is_ok());
        assert_eq!(
            MRQ_DOCUMENT.warehouse_query(" KDY "),
            vec![("whCode", "KDY".to_string())]
        );
    }

    #[test]
    fn test_request_contains_only_quantified_lines() {
        let mut table = controller();
        let id = RowId::from("M001-0");
        table.commit_input(&id, "IssuedQty", "12").unwrap();

        let plan = table.plan_save().unwrap();
        let header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        let request = MaterialDocumentRequest::build(
            &MRQ_DOCUMENT,
            &header,
            Some("STM"),
            &plan,
            &table.dirty_rows(),
        )
        .unwrap();
        assert_eq!(request.document_type, "MRQ");
        assert_eq!(request.materials.len(), 1);
        assert_eq!(request.materials[0]["IssuedQty"], json!(12));

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["Header"]["Warehouse"], json!("STM"));
    }

    #[test]
    fn test_quantity_above_balance_is_rejected() {
        let mut table = controller();
        table
            .commit_input(&RowId::from("M002-1"), "IssuedQty", "5")
            .unwrap();
        let plan = table.plan_save().unwrap();
        let header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        let err = MaterialDocumentRequest::build(
            &MRQ_DOCUMENT,
            &header,
            Some("STM"),
            &plan,
            &table.dirty_rows(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("exceeds the balance"));
    }

    #[test]
    fn test_set_field_by_id() {
        let mut header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        header.set_field(HeaderField::Project, "Kandy Bridge".to_string());
        assert_eq!(header.field(HeaderField::Project), "Kandy Bridge");
        assert_eq!(header.field(HeaderField::Warehouse), "STM");
        assert_eq!(HeaderField::DocumentDate.input_type(), "date");
    }

    #[test]
    fn test_missing_warehouse_is_rejected() {
        let mut header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        header.warehouse.clear();
        assert!(header.validate().is_err());
    }

    #[test]
    fn test_lines_of_another_warehouse_are_rejected() {
        let mut table = controller();
        table
            .commit_input(&RowId::from("M001-0"), "IssuedQty", "2")
            .unwrap();
        let plan = table.plan_save().unwrap();
        let mut header = DocumentHeader::new(&MRQ_DOCUMENT, today());
        header.set_field(HeaderField::Warehouse, "KDY".to_string());

        let err = MaterialDocumentRequest::build(
            &MRQ_DOCUMENT,
            &header,
            Some("STM"),
            &plan,
            &table.dirty_rows(),
        )
        .unwrap_err();
        assert!(matches!(err, TableError::Validation(_)));
        assert!(err.to_string().contains("KDY"));

        let never_loaded =
            MaterialDocumentRequest::build(&MRQ_DOCUMENT, &header, None, &plan, &table.dirty_rows());
        assert!(never_loaded.is_err());

        assert!(MaterialDocumentRequest::build(
            &MRQ_DOCUMENT,
            &header,
            Some(" kdy "),
            &plan,
            &table.dirty_rows(),
        )
        .is_ok());
    }
}

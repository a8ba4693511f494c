//! Response shapes of the stores backend
//!
//! Listing endpoints answer either with a bare JSON array or with an
//! envelope `{ "StatusCode": 200, "Message": "...", "resultSet": [...] }`.
//! Save endpoints answer with an envelope that may carry per-row results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared::table::{RejectedRow, RowId, SaveReport, TableError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiEnvelope {
    #[serde(rename = "StatusCode", default)]
    pub status_code: Option<u16>,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "resultSet", alias = "ResultSet", alias = "data", default)]
    pub result_set: Option<Value>,
    #[serde(default)]
    pub success: Option<bool>,
}

impl ApiEnvelope {
    fn failed(&self) -> bool {
        self.success == Some(false)
            || self
                .status_code
                .map(|code| !(200..300).contains(&code))
                .unwrap_or(false)
    }

    fn failure_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| "request was not accepted".to_string())
    }
}

/// Per-row entry of a save response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowResult {
    pub id: String,
    #[serde(alias = "accepted")]
    pub success: bool,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

/// Extracts the record list from a listing response.
pub fn extract_records(body: Value) -> Result<Vec<Value>, TableError> {
    match body {
        Value::Array(items) => Ok(items),
        Value::Object(_) => {
            let envelope: ApiEnvelope =
                serde_json::from_value(body).map_err(|e| TableError::Decode(e.to_string()))?;
            if envelope.failed() {
                return Err(TableError::Backend {
                    status: envelope.status_code.unwrap_or(200),
                    message: envelope.failure_message(),
                });
            }
            match envelope.result_set {
                Some(Value::Array(items)) => Ok(items),
                Some(Value::Null) | None => Ok(Vec::new()),
                Some(other) => Err(TableError::Decode(format!(
                    "resultSet is not a list: {}",
                    other
                ))),
            }
        }
        Value::Null => Ok(Vec::new()),
        other => Err(TableError::Decode(format!(
            "expected a list of records, got {}",
            other
        ))),
    }
}

/// Reduces a save response to per-row acceptance.
///
/// With per-row results only rows reported successful are accepted and rows
/// the backend did not mention count as rejected. Without them the whole
/// request succeeds or fails together.
pub fn interpret_save_response(submitted: &[RowId], body: &Value) -> SaveReport {
    let envelope: ApiEnvelope = match body {
        Value::Object(_) => serde_json::from_value(body.clone()).unwrap_or_default(),
        _ => ApiEnvelope::default(),
    };
    if envelope.failed() {
        return SaveReport::all_rejected(submitted, &envelope.failure_message());
    }

    let results = body
        .get("results")
        .or_else(|| envelope.result_set.as_ref())
        .and_then(|v| serde_json::from_value::<Vec<RowResult>>(v.clone()).ok());
    let Some(results) = results else {
        return SaveReport::all_accepted(submitted);
    };

    let mut report = SaveReport::default();
    for id in submitted {
        match results.iter().find(|r| r.id == id.as_str()) {
            Some(result) if result.success => report.accepted.push(id.clone()),
            Some(result) => report.rejected.push(RejectedRow {
                id: id.clone(),
                reason: result
                    .message
                    .clone()
                    .unwrap_or_else(|| "rejected by the server".to_string()),
            }),
            None => report.rejected.push(RejectedRow {
                id: id.clone(),
                reason: "not confirmed by the server".to_string(),
            }),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(values: &[&str]) -> Vec<RowId> {
        values.iter().map(|v| RowId::from(*v)).collect()
    }

    #[test]
    fn test_bare_array_and_envelope() {
        assert_eq!(extract_records(json!([{ "a": 1 }])).unwrap().len(), 1);
        let body = json!({ "StatusCode": 200, "resultSet": [{ "LocCode": "STM" }, { "LocCode": "KDY" }] });
        assert_eq!(extract_records(body).unwrap().len(), 2);
        assert!(extract_records(json!({ "StatusCode": 200 })).unwrap().is_empty());
    }

    #[test]
    fn test_failed_envelope_is_backend_error() {
        let body = json!({ "StatusCode": 500, "Message": "db down" });
        assert_eq!(
            extract_records(body).unwrap_err(),
            TableError::Backend { status: 500, message: "db down".into() }
        );
        assert!(matches!(extract_records(json!("x")), Err(TableError::Decode(_))));
    }

    #[test]
    fn test_plain_success_accepts_everything() {
        let report = interpret_save_response(&ids(&["E1", "tmp-1"]), &json!({ "StatusCode": 200 }));
        assert_eq!(report.accepted.len(), 2);
        assert!(report.is_complete());
    }

    #[test]
    fn test_failure_rejects_everything() {
        let report = interpret_save_response(&ids(&["E1"]), &json!({ "success": false }));
        assert!(report.accepted.is_empty());
        assert_eq!(report.rejected[0].reason, "request was not accepted");
    }

    #[test]
    fn test_per_row_results() {
        let body = json!({
            "StatusCode": 200,
            "results": [
                { "id": "E1", "success": true },
                { "id": "E2", "success": false, "message": "NIC already registered" }
            ]
        });
        let report = interpret_save_response(&ids(&["E1", "E2", "E3"]), &body);
        assert_eq!(report.accepted, ids(&["E1"]));
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].reason, "NIC already registered");
        assert_eq!(report.rejected[1].id.as_str(), "E3");
    }
}

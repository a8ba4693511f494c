use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use super::error::TableError;
use super::schema::FieldKind;

/// Stable row identifier, unique inside one collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(String);

impl RowId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Temporary key for a row that has never been saved.
    pub fn generate() -> Self {
        Self(format!("tmp-{}", uuid::Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Scalar cell value. Dates travel as `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Nested arrays and objects are kept as their JSON text.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Empty),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Empty => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => {
                if is_integral(*n) {
                    Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(Value::Number)
                        .unwrap_or(Value::Null)
                }
            }
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    /// Parses raw input from an editor cell according to the column kind.
    pub fn from_input(kind: FieldKind, raw: &str) -> Result<Self, TableError> {
        match kind {
            FieldKind::Number => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(Self::Empty);
                }
                trimmed
                    .parse::<f64>()
                    .map(Self::Number)
                    .map_err(|_| TableError::Validation(format!("'{}' is not a number", raw)))
            }
            FieldKind::Date => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Ok(Self::Empty);
                }
                chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                    .map(|_| Self::Text(trimmed.to_string()))
                    .map_err(|_| {
                        TableError::Validation(format!("'{}' is not a YYYY-MM-DD date", raw))
                    })
            }
            FieldKind::Text | FieldKind::Select => Ok(Self::Text(raw.to_string())),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0 && n.abs() < 9.0e15
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) if is_integral(*n) => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    #[default]
    View,
    Edit,
}

/// One record of an editable table plus its transient dirty state.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    values: BTreeMap<String, CellValue>,
    /// Never saved to the backend.
    pub is_new: bool,
    /// Edited since the last load or save.
    pub is_updated: bool,
    pub mode: RowMode,
    /// Bumped on every value change.
    revision: u64,
}

impl Row {
    pub fn new(id: RowId, values: BTreeMap<String, CellValue>) -> Self {
        Self {
            id,
            values,
            is_new: false,
            is_updated: false,
            mode: RowMode::View,
            revision: 0,
        }
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.values.get(field)
    }

    /// Field value as display text; missing fields read as empty.
    pub fn text(&self, field: &str) -> String {
        self.values
            .get(field)
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn set(&mut self, field: &str, value: CellValue) {
        self.values.insert(field.to_string(), value);
        self.revision += 1;
    }

    pub fn values(&self) -> &BTreeMap<String, CellValue> {
        &self.values
    }

    pub(crate) fn replace_values(&mut self, values: BTreeMap<String, CellValue>) {
        self.values = values;
        self.revision += 1;
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_dirty(&self) -> bool {
        self.is_new || self.is_updated
    }

    pub fn is_editing(&self) -> bool {
        self.mode == RowMode::Edit
    }
}

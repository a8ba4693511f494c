//! Start/end date pair that gates range-scoped fetches

use chrono::NaiveDate;

use crate::shared::table::TableError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated, inclusive date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Query parameters understood by the backend.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("startDate", self.start.format(DATE_FORMAT).to_string()),
            ("endDate", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Date inputs of a screen. Values are stored trimmed and parsed only on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRangeLoader {
    start: String,
    end: String,
}

impl DateRangeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn set_start(&mut self, value: &str) {
        self.start = value.trim().to_string();
    }

    pub fn set_end(&mut self, value: &str) {
        self.end = value.trim().to_string();
    }

    pub fn is_complete(&self) -> bool {
        !self.start.is_empty() && !self.end.is_empty()
    }

    /// Range for a "Load" click. Nothing may be fetched on error.
    pub fn submit(&self) -> Result<DateRange, TableError> {
        if !self.is_complete() {
            return Err(TableError::Validation(
                "Please select both a start date and an end date".to_string(),
            ));
        }
        let start = parse_date(&self.start, "start")?;
        let end = parse_date(&self.end, "end")?;
        if start > end {
            return Err(TableError::Validation(
                "The start date must not be after the end date".to_string(),
            ));
        }
        Ok(DateRange { start, end })
    }

    /// Range for a "Reload" click: the same fetch with the dates held now.
    pub fn reload(&self) -> Result<DateRange, TableError> {
        self.submit()
    }
}

fn parse_date(value: &str, which: &str) -> Result<NaiveDate, TableError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        TableError::Validation(format!(
            "The {} date '{}' is not a valid YYYY-MM-DD date",
            which, value
        ))
    })
}

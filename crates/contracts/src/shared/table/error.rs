use super::row::RowId;

/// Errors returned to screens instead of alerts and console output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),
    #[error("row {0} not found")]
    UnknownRow(RowId),
    #[error("request failed: {0}")]
    Network(String),
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("export failed: {0}")]
    Export(String),
}

/// Presentation bucket for a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Network,
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) | Self::UnknownRow(_) | Self::Export(_) => ErrorKind::Validation,
            Self::Network(_) | Self::Backend { .. } | Self::Decode(_) => ErrorKind::Network,
        }
    }
}

//! Explicit per-entity table description
//!
//! All types use 'static data so every entity schema is a compile-time constant.

/// How a column is edited and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Number,
    /// `YYYY-MM-DD`
    Date,
    /// One of [`ColumnSchema::options`]
    Select,
}

impl FieldKind {
    /// `type` attribute of the editor input.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Select => "text",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSchema {
    /// Backend field name
    pub field: &'static str,
    pub header: &'static str,
    pub kind: FieldKind,
    pub editable: bool,
    pub width: Option<u32>,
    pub options: &'static [&'static str],
}

impl ColumnSchema {
    pub const fn text(field: &'static str, header: &'static str) -> Self {
        Self {
            field,
            header,
            kind: FieldKind::Text,
            editable: false,
            width: None,
            options: &[],
        }
    }

    pub const fn number(field: &'static str, header: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(field, header)
        }
    }

    pub const fn date(field: &'static str, header: &'static str) -> Self {
        Self {
            kind: FieldKind::Date,
            ..Self::text(field, header)
        }
    }

    pub const fn select(
        field: &'static str,
        header: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            kind: FieldKind::Select,
            options,
            ..Self::text(field, header)
        }
    }

    pub const fn editable(self) -> Self {
        Self {
            editable: true,
            ..self
        }
    }

    pub const fn width(self, px: u32) -> Self {
        Self {
            width: Some(px),
            ..self
        }
    }
}

/// Where a row id comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStrategy {
    /// The business key is unique on its own (service number, warehouse code).
    Field(&'static str),
    /// The business key repeats across records; the id is `{key}-{index}`.
    FieldWithIndex(&'static str),
}

impl KeyStrategy {
    pub fn field(&self) -> &'static str {
        match self {
            Self::Field(f) | Self::FieldWithIndex(f) => f,
        }
    }
}

/// Which rows "Save All" looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveScope {
    /// Every dirty row, whatever the current filter shows.
    #[default]
    WorkingSet,
    /// Only dirty rows that pass the current filter.
    Visible,
}

/// What triggers a fetch of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Fetch once when the screen opens; reload on demand.
    OnOpen,
    /// Fetch for a `startDate`/`endDate` pair.
    DateRange,
    /// Fetch material lines for a warehouse code (`whCode`).
    Warehouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportTarget {
    pub file_name: &'static str,
    pub sheet_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSchema {
    pub entity: &'static str,
    pub title: &'static str,
    pub key: KeyStrategy,
    pub columns: &'static [ColumnSchema],
    /// Non-empty initial values of a freshly added row.
    pub row_defaults: &'static [(&'static str, &'static str)],
    pub page_sizes: &'static [usize],
    pub default_page_size: usize,
    pub load: LoadMode,
    pub list_path: &'static str,
    pub save_path: Option<&'static str>,
    pub save_scope: SaveScope,
    pub export: Option<ExportTarget>,
    pub search_placeholder: &'static str,
    pub sortable: bool,
    pub allow_add: bool,
}

impl TableSchema {
    pub fn column(&self, field: &str) -> Option<&'static ColumnSchema> {
        self.columns.iter().find(|c| c.field == field)
    }

    pub fn key_field(&self) -> &'static str {
        self.key.field()
    }

    /// Whether any row action (edit, delete, save) is offered.
    pub fn is_editable(&self) -> bool {
        self.save_path.is_some() && (self.allow_add || self.columns.iter().any(|c| c.editable))
    }

    /// The business key can only be typed while a row is still a draft.
    pub fn can_edit_field(&self, field: &str, row_is_new: bool) -> bool {
        if field == self.key_field() {
            return row_is_new;
        }
        self.column(field).map(|c| c.editable).unwrap_or(false)
    }

    /// Page size to use for a requested value, falling back to the default.
    pub fn page_size_or_default(&self, requested: usize) -> usize {
        if self.page_sizes.contains(&requested) {
            requested
        } else {
            self.default_page_size
        }
    }
}

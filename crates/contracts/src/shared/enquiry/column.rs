/// How a cell is rendered by the enquiry table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Running row number across pages
    Serial,
    Text,
    Date,
    Number,
    /// `Y`/`N` toggle button bound to the row field
    Flag,
    /// Editable `good_qty` / `defective_qty` input
    Quantity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: ColumnKind,
}

impl ColumnDef {
    pub const fn new(key: &'static str, label: &'static str, kind: ColumnKind) -> Self {
        Self { key, label, kind }
    }

    pub const fn serial(label: &'static str) -> Self {
        Self::new("index", label, ColumnKind::Serial)
    }

    pub const fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Text)
    }

    pub const fn date(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Date)
    }

    pub const fn number(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Number)
    }

    pub const fn flag(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Flag)
    }

    pub const fn quantity(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, ColumnKind::Quantity)
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, ColumnKind::Number | ColumnKind::Quantity)
    }
}

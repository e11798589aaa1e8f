use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const GOOD_QTY: &str = "good_qty";
pub const DEFECTIVE_QTY: &str = "defective_qty";
pub const ACTUAL_PENDING_QTY: &str = "actual_pending_qty";
pub const INVOICE: &str = "invoice";

/// Yes/No marker as the backend spells it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "Y",
            YesNo::No => "N",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            YesNo::Yes => "Yes",
            YesNo::No => "No",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            YesNo::Yes => YesNo::No,
            YesNo::No => YesNo::Yes,
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, YesNo::Yes)
    }

    /// Anything but a trimmed `Y` counts as `N`
    pub fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str).map(str::trim) {
            Some("Y") => YesNo::Yes,
            _ => YesNo::No,
        }
    }
}

/// One backend record, kept as an opaque column map. UI-only flags
/// (`export_flag`, `indent`, `invoice`, `select`) are written into the same
/// map so they travel with the row to the submit step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnquiryRow(pub Map<String, Value>);

impl EnquiryRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Text of a cell; null or missing renders as `-`
    pub fn display(&self, key: &str) -> String {
        match self.0.get(key) {
            None | Some(Value::Null) => "-".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => (if *b { "Yes" } else { "No" }).to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// String value, empty when missing or null
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        }
    }

    /// Numeric value; numeric strings are accepted, anything else is 0
    pub fn number(&self, key: &str) -> f64 {
        match self.0.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    pub fn flag(&self, key: &str) -> YesNo {
        YesNo::from_value(self.0.get(key))
    }

    pub fn set_flag(&mut self, key: &str, flag: YesNo) {
        self.set(key, flag.as_str());
    }

    pub fn normalize_flag(&mut self, key: &str) {
        let flag = self.flag(key);
        self.set_flag(key, flag);
    }

    pub fn toggle_flag(&mut self, key: &str) -> YesNo {
        let flag = self.flag(key).toggled();
        self.set_flag(key, flag);
        flag
    }

    pub fn is_invoiced(&self) -> bool {
        self.flag(INVOICE).is_yes()
    }

    /// Invoiced rows cannot carry good/defective quantities
    pub fn toggle_invoice(&mut self) -> YesNo {
        let flag = self.toggle_flag(INVOICE);
        if flag.is_yes() {
            self.set(GOOD_QTY, Value::Null);
            self.set(DEFECTIVE_QTY, Value::Null);
        }
        flag
    }

    /// Edits `good_qty` or `defective_qty`. The edit is rejected and the row
    /// left untouched when the row is invoiced or when the two quantities
    /// together would exceed `actual_pending_qty`. `None` clears the field.
    pub fn set_quantity(&mut self, key: &str, value: Option<u32>) -> bool {
        let other_key = match key {
            GOOD_QTY => DEFECTIVE_QTY,
            DEFECTIVE_QTY => GOOD_QTY,
            _ => return false,
        };
        if self.is_invoiced() {
            return false;
        }
        let new_value = value.map(f64::from).unwrap_or(0.0);
        let ceiling = self.number(ACTUAL_PENDING_QTY);
        if new_value + self.number(other_key) > ceiling {
            return false;
        }
        match value {
            Some(v) => self.set(key, v),
            None => self.set(key, Value::Null),
        }
        true
    }
}

impl From<Value> for EnquiryRow {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => EnquiryRow(map),
            _ => EnquiryRow::default(),
        }
    }
}

/// Flips one flag on exactly one row; out-of-range indexes are ignored
pub fn toggle_row_flag(rows: &mut [EnquiryRow], index: usize, key: &str) -> Option<YesNo> {
    rows.get_mut(index).map(|row| row.toggle_flag(key))
}

/// Quantity edit on one row. A rejected edit (over the pending quantity,
/// invoiced row, bad index) changes nothing and reports nothing.
pub fn set_row_quantity(rows: &mut [EnquiryRow], index: usize, key: &str, qty: Option<u32>) {
    if let Some(row) = rows.get_mut(index) {
        row.set_quantity(key, qty);
    }
}

pub fn normalize_rows(rows: &mut [EnquiryRow], key: &str) {
    rows.iter_mut().for_each(|row| row.normalize_flag(key));
}

pub fn flagged<'a>(rows: &'a [EnquiryRow], key: &str) -> Vec<&'a EnquiryRow> {
    rows.iter().filter(|row| row.flag(key).is_yes()).collect()
}

pub fn count_flagged(rows: &[EnquiryRow], key: &str) -> usize {
    rows.iter().filter(|row| row.flag(key).is_yes()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn grc_row() -> EnquiryRow {
        EnquiryRow::from(json!({
            "grc_number": 1042,
            "spare_code": "FN-CAP-25",
            "actual_pending_qty": 10,
            "good_qty": 4,
            "defective_qty": 3,
            "invoice": "N"
        }))
    }

    #[test]
    fn test_display_null_and_numbers() {
        let row = grc_row().with("remarks", Value::Null);
        assert_eq!(row.display("grc_number"), "1042");
        assert_eq!(row.display("remarks"), "-");
        assert_eq!(row.display("missing"), "-");
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut rows = vec![grc_row(), grc_row().with("export_flag", "Y")];
        let original = rows.clone();
        toggle_row_flag(&mut rows, 1, "export_flag");
        assert_eq!(rows[1].flag("export_flag"), YesNo::No);
        assert_eq!(rows[0], original[0]);
        toggle_row_flag(&mut rows, 1, "export_flag");
        assert_eq!(rows, original);
        assert_eq!(toggle_row_flag(&mut rows, 9, "export_flag"), None);
    }

    #[test]
    fn test_rejected_quantity_edit_is_noop() {
        let mut rows = vec![grc_row(), grc_row().with(INVOICE, "Y")];
        let original = rows.clone();

        set_row_quantity(&mut rows, 0, GOOD_QTY, Some(8));
        set_row_quantity(&mut rows, 1, DEFECTIVE_QTY, Some(1));
        set_row_quantity(&mut rows, 7, GOOD_QTY, Some(1));
        assert_eq!(rows, original);

        set_row_quantity(&mut rows, 0, GOOD_QTY, Some(7));
        assert_eq!(rows[0].number(GOOD_QTY), 7.0);
    }

    #[test]
    fn test_normalize_flag_values() {
        let mut rows = vec![
            EnquiryRow::new().with("invoice", " Y "),
            EnquiryRow::new().with("invoice", "maybe"),
            EnquiryRow::new(),
        ];
        normalize_rows(&mut rows, INVOICE);
        let flags: Vec<&str> = rows.iter().map(|r| r.flag(INVOICE).as_str()).collect();
        assert_eq!(flags, ["Y", "N", "N"]);
        assert_eq!(rows[0].text(INVOICE), "Y");
        assert_eq!(count_flagged(&rows, INVOICE), 1);
    }

    #[test]
    fn test_quantity_over_pending_is_rejected() {
        let mut row = grc_row();
        let before = row.clone();
        assert!(!row.set_quantity(GOOD_QTY, Some(8)));
        assert_eq!(row, before);
        assert!(!row.set_quantity(DEFECTIVE_QTY, Some(7)));
        assert_eq!(row, before);
    }

    #[test]
    fn test_quantity_within_pending_is_applied() {
        let mut row = grc_row();
        assert!(row.set_quantity(GOOD_QTY, Some(7)));
        assert_eq!(row.number(GOOD_QTY), 7.0);
        assert!(row.set_quantity(DEFECTIVE_QTY, None));
        assert_eq!(row.get(DEFECTIVE_QTY), Some(&Value::Null));
        assert!(!row.set_quantity("issue_qty", Some(1)));
    }

    #[test]
    fn test_invoice_cascade_clears_quantities() {
        let mut row = grc_row();
        assert_eq!(row.toggle_invoice(), YesNo::Yes);
        assert_eq!(row.get(GOOD_QTY), Some(&Value::Null));
        assert_eq!(row.get(DEFECTIVE_QTY), Some(&Value::Null));
        assert!(!row.set_quantity(GOOD_QTY, Some(1)));

        assert_eq!(row.toggle_invoice(), YesNo::No);
        assert!(row.set_quantity(GOOD_QTY, Some(1)));
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Single,
    #[default]
    Multiple,
}

/// Checkbox selection over row ids, in click order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    ids: Vec<String>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ids: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Deselects a selected id; otherwise selects it (replacing the current
    /// selection in single mode)
    pub fn toggle(&mut self, id: &str) {
        if self.contains(id) {
            self.ids.retain(|s| s != id);
            return;
        }
        if self.mode == SelectionMode::Single {
            self.ids.clear();
        }
        self.ids.push(id.to_string());
    }

    pub fn select_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.clear();
        for id in ids {
            let id = id.into();
            if id.is_empty() || self.contains(&id) {
                continue;
            }
            self.ids.push(id);
            if self.mode == SelectionMode::Single {
                break;
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single {
            self.ids.truncate(1);
        }
    }

    /// True when every id of the current list is selected
    pub fn covers(&self, all_ids: &[String]) -> bool {
        !all_ids.is_empty() && all_ids.iter().all(|id| self.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiple_toggle() {
        let mut sel = Selection::new(SelectionMode::Multiple);
        sel.toggle("C-1");
        sel.toggle("C-2");
        assert_eq!(sel.ids(), ["C-1", "C-2"]);
        sel.toggle("C-1");
        assert_eq!(sel.ids(), ["C-2"]);
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut sel = Selection::new(SelectionMode::Single);
        sel.toggle("C-1");
        sel.toggle("C-2");
        assert_eq!(sel.ids(), ["C-2"]);

        sel.select_all(vec!["C-7", "C-8", "C-9"]);
        assert_eq!(sel.ids(), ["C-7"]);
    }

    #[test]
    fn test_switch_to_single_trims() {
        let mut sel = Selection::default();
        sel.select_all(vec!["C-1", "C-2", "C-3"]);
        assert!(sel.covers(&["C-1".to_string(), "C-3".to_string()]));
        sel.set_mode(SelectionMode::Single);
        assert_eq!(sel.ids(), ["C-1"]);
    }
}

//! Identity-keyed selection.
//!
//! Rows are selected by their string identity rather than their position, so
//! a selection survives re-sorting. Identities that disappear from the record
//! set are left in place and simply stop matching anything.

use std::collections::HashSet;

/// Set of selected row identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    selected: HashSet<String>,
}

impl SelectionSet {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected identities (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an identity is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Number of stored identities, including ones no longer displayed.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Add or remove a single identity.
    /// Returns true if the set changed.
    pub fn set(&mut self, id: &str, selected: bool) -> bool {
        if selected {
            self.selected.insert(id.to_string())
        } else {
            self.selected.remove(id)
        }
    }

    /// Replace the selection with exactly the given identities.
    pub fn select_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        self.selected = ids.into_iter().map(str::to_string).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all_replaces_stale_ids() {
        let mut selection = SelectionSet::new();
        selection.set("gone", true);
        selection.select_all(["a", "b"]);
        assert_eq!(selection.selected(), vec!["a".to_string(), "b".to_string()]);
        assert!(!selection.is_selected("gone"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_set_reports_change() {
        let mut selection = SelectionSet::new();
        assert!(selection.set("a", true));
        assert!(!selection.set("a", true));
        assert!(selection.set("a", false));
        assert!(!selection.set("a", false));
    }
}

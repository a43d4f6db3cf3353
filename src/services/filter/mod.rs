//! Person filter: which owners' events are visible.

use std::collections::BTreeSet;

/// Set of selected owner ids.
///
/// Ids are not checked against the roster; selecting an unknown id is
/// harmless and simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    selected: BTreeSet<String>,
}

impl PersonFilter {
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            selected: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Flip one owner in or out of the selection.
    pub fn toggle_owner(&mut self, owner_id: &str) {
        if !self.selected.remove(owner_id) {
            self.selected.insert(owner_id.to_string());
        }
    }

    pub fn set_selected<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected = ids.into_iter().map(Into::into).collect();
    }

    pub fn is_selected(&self, owner_id: &str) -> bool {
        self.selected.contains(owner_id)
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut filter = PersonFilter::default();
        filter.toggle_owner("d1");
        assert!(filter.is_selected("d1"));

        filter.toggle_owner("d1");
        assert!(!filter.is_selected("d1"));
        assert!(filter.selected().is_empty());
    }

    #[test]
    fn test_toggle_leaves_others_alone() {
        let mut filter = PersonFilter::new(["d1", "d2"]);
        filter.toggle_owner("d2");

        assert!(filter.is_selected("d1"));
        assert!(!filter.is_selected("d2"));
    }

    #[test]
    fn test_unknown_owner_accepted() {
        let mut filter = PersonFilter::default();
        filter.toggle_owner("nobody");
        assert!(filter.is_selected("nobody"));
    }

    #[test]
    fn test_set_selected_replaces() {
        let mut filter = PersonFilter::new(["d1"]);
        filter.set_selected(vec!["d2".to_string(), "d3".to_string()]);
        assert!(!filter.is_selected("d1"));
        assert_eq!(filter.selected().len(), 2);
    }
}

//! Selected-tab state for the buy section
//!
//! A single flat state: the selected index within `[0, count)`. No terminal
//! state, resettable indefinitely, scoped to the lifetime of the rendered
//! section.

/// Which edition tab is active.
///
/// Pure value type; the view holds it in a signal and re-renders from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditionTabs {
    count: usize,
    selected: usize,
}

impl EditionTabs {
    /// State for `count` tabs with the first one selected.
    pub fn new(count: usize) -> Self {
        Self { count, selected: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a tab by index. Out-of-range indices are ignored; selecting
    /// the already-active tab changes nothing.
    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.selected = index;
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_selection_is_first_tab() {
        let tabs = EditionTabs::new(2);
        assert_eq!(tabs.selected(), 0);
        assert!(tabs.is_selected(0));
        assert!(!tabs.is_selected(1));
    }

    #[test]
    fn test_select_switches_active_tab() {
        let mut tabs = EditionTabs::new(2);
        tabs.select(1);
        assert_eq!(tabs.selected(), 1);
        assert!(!tabs.is_selected(0));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = EditionTabs::new(3);
        tabs.select(1);
        let before = tabs;
        tabs.select(1);
        assert_eq!(tabs, before);
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut tabs = EditionTabs::new(2);
        tabs.select(5);
        assert_eq!(tabs.selected(), 0);
        tabs.select(1);
        tabs.select(2);
        assert_eq!(tabs.selected(), 1);
    }
}

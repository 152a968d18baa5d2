//! Interaction state of a data table and the actions that change it.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort order of the active sort column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// Value for `aria-sort`.
    #[must_use]
    pub const fn aria_sort(self) -> &'static str {
        match self {
            Self::Asc => "ascending",
            Self::Desc => "descending",
        }
    }
}

/// Next step of the sort cycle: unsorted, ascending, descending, unsorted.
#[must_use]
pub const fn next_sort(current: Option<SortDirection>) -> Option<SortDirection> {
    match current {
        None => Some(SortDirection::Asc),
        Some(SortDirection::Asc) => Some(SortDirection::Desc),
        Some(SortDirection::Desc) => None,
    }
}

/// The single active sort key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    /// Column id.
    pub column: String,
    /// Direction.
    pub direction: SortDirection,
}

/// Whether "Next" may step past the last page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextPagePolicy {
    /// Next is disabled on the last page.
    #[default]
    Bounded,
    /// Next is always enabled and may land on empty pages.
    Unbounded,
}

/// Everything the user can change about a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableState {
    /// Active sort, at most one.
    pub sorting: Option<SortState>,
    /// Filter text per column id; absent means unfiltered.
    pub filters: BTreeMap<String, String>,
    /// Visibility per column id; absent means visible.
    pub visibility: BTreeMap<String, bool>,
    /// Selected row ids.
    pub selection: BTreeSet<String>,
    /// Zero-based page.
    pub page_index: usize,
    /// Rows per page, at least one.
    pub page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sorting: None,
            filters: BTreeMap::new(),
            visibility: BTreeMap::new(),
            selection: BTreeSet::new(),
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    /// Fresh state with a custom page size.
    #[must_use]
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Column visibility; unknown ids read as visible.
    #[must_use]
    pub fn is_visible(&self, column: &str) -> bool {
        self.visibility.get(column).copied().unwrap_or(true)
    }

    /// Whether a row id is selected.
    #[must_use]
    pub fn is_selected(&self, row_id: &str) -> bool {
        self.selection.contains(row_id)
    }

    /// Filter text for a column, or `""`.
    #[must_use]
    pub fn filter_value(&self, column: &str) -> &str {
        self.filters.get(column).map_or("", String::as_str)
    }

    /// Sort direction for a column, if it is the active sort key.
    #[must_use]
    pub fn sort_direction(&self, column: &str) -> Option<SortDirection> {
        self.sorting
            .as_ref()
            .filter(|sort| sort.column == column)
            .map(|sort| sort.direction)
    }
}

/// A user intent applied through `DataTable::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableAction {
    /// Replace the filter text of a column; empty removes it.
    SetFilter {
        /// Column id.
        column: String,
        /// Filter text.
        value: String,
    },
    /// Advance the sort cycle of a column.
    ToggleSort {
        /// Column id.
        column: String,
    },
    /// Select or deselect one row.
    SetRowSelected {
        /// Row id.
        row_id: String,
        /// Desired membership.
        selected: bool,
    },
    /// Flip one row's membership.
    ToggleRow {
        /// Row id.
        row_id: String,
    },
    /// Header checkbox: select the page unless it is fully selected.
    TogglePageSelection,
    /// Drop every selection.
    ClearSelection,
    /// Show or hide a column.
    SetColumnVisible {
        /// Column id.
        column: String,
        /// Desired visibility.
        visible: bool,
    },
    /// One page back.
    PreviousPage,
    /// One page forward.
    NextPage,
    /// Change rows per page; resets to the first page.
    SetPageSize(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_cycle_returns_to_unsorted() {
        let mut direction = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            direction = next_sort(direction);
            seen.push(direction);
        }
        assert_eq!(
            seen,
            vec![
                Some(SortDirection::Asc),
                Some(SortDirection::Desc),
                None,
                Some(SortDirection::Asc)
            ]
        );
    }

    #[test]
    fn defaults_are_visible_and_unfiltered() {
        let state = TableState::default();
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.is_visible("anything"));
        assert_eq!(state.filter_value("email"), "");
        assert_eq!(state.sort_direction("email"), None);
        assert_eq!(TableState::with_page_size(0).page_size, 1);
    }

    #[test]
    fn policy_deserializes_snake_case() {
        let policy: NextPagePolicy = serde_json::from_str("\"unbounded\"").expect("policy");
        assert_eq!(policy, NextPagePolicy::Unbounded);
        assert_eq!(SortDirection::Desc.aria_sort(), "descending");
    }
}

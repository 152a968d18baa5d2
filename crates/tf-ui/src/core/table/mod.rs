//! Data-grid engine: column definitions, interaction state and the derived
//! row model.
//!
//! The rendered rows are a pure function of the base rows, the filters, the
//! sort directive and the page. Selection and visibility only decorate them.

pub mod column;
pub mod payments;
pub mod row_model;
pub mod state;

pub use column::{Accessor, Align, CellKind, CellValue, ColumnDef, HeaderKind, TextCase};
pub use row_model::{RowModel, compare_values, natural_cmp};
pub use state::{
    DEFAULT_PAGE_SIZE, NextPagePolicy, SortDirection, SortState, TableAction, TableState,
    next_sort,
};

use crate::core::primitives::CheckedState;

/// A row that can live in a [`DataTable`].
pub trait TableRecord {
    /// Stable unique key used for selection.
    fn row_id(&self) -> &str;
}

/// Borrowed view binding columns and rows to the engine operations.
#[derive(Debug)]
pub struct DataTable<'a, R> {
    columns: &'a [ColumnDef<R>],
    rows: &'a [R],
    policy: NextPagePolicy,
}

impl<R> Clone for DataTable<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for DataTable<'_, R> {}

impl<'a, R: TableRecord> DataTable<'a, R> {
    /// Bind columns and rows with the default paging policy.
    #[must_use]
    pub const fn new(columns: &'a [ColumnDef<R>], rows: &'a [R]) -> Self {
        Self {
            columns,
            rows,
            policy: NextPagePolicy::Bounded,
        }
    }

    /// Override how "Next" behaves on the last page.
    #[must_use]
    pub const fn with_policy(mut self, policy: NextPagePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Every column in definition order.
    #[must_use]
    pub const fn columns(&self) -> &'a [ColumnDef<R>] {
        self.columns
    }

    /// Column by id.
    #[must_use]
    pub fn column(&self, id: &str) -> Option<&'a ColumnDef<R>> {
        self.columns.iter().find(|column| column.id == id)
    }

    /// Columns currently shown.
    #[must_use]
    pub fn visible_columns(&self, state: &TableState) -> Vec<&'a ColumnDef<R>> {
        self.columns
            .iter()
            .filter(|column| state.is_visible(&column.id))
            .collect()
    }

    /// Columns the visibility menu lists.
    #[must_use]
    pub fn hideable_columns(&self) -> Vec<&'a ColumnDef<R>> {
        self.columns
            .iter()
            .filter(|column| column.enable_hiding)
            .collect()
    }

    /// Derive the rows to render.
    #[must_use]
    pub fn row_model(&self, state: &TableState) -> RowModel<'a, R> {
        RowModel::build(self.rows, self.columns, state)
    }

    /// Header checkbox state for the current page.
    #[must_use]
    pub fn page_selection_state(&self, state: &TableState) -> CheckedState {
        let model = self.row_model(state);
        let (total, selected) = model.page_rows().fold((0_usize, 0_usize), |(total, selected), row| {
            (total + 1, selected + usize::from(state.is_selected(row.row_id())))
        });
        if total > 0 && selected == total {
            CheckedState::Checked
        } else if selected > 0 {
            CheckedState::Indeterminate
        } else {
            CheckedState::Unchecked
        }
    }

    /// Selected rows among those passing the filters.
    #[must_use]
    pub fn filtered_selected_count(&self, state: &TableState) -> usize {
        self.row_model(state)
            .filtered_rows()
            .filter(|row| state.is_selected(row.row_id()))
            .count()
    }

    /// Footer text such as `"1 of 3 row(s) selected."`.
    #[must_use]
    pub fn selection_summary(&self, state: &TableState) -> String {
        format!(
            "{} of {} row(s) selected.",
            self.filtered_selected_count(state),
            self.row_model(state).filtered_len()
        )
    }

    /// Whether "Previous" is enabled.
    #[must_use]
    pub const fn can_previous_page(&self, state: &TableState) -> bool {
        state.page_index > 0
    }

    /// Whether "Next" is enabled under the configured policy.
    #[must_use]
    pub fn can_next_page(&self, state: &TableState) -> bool {
        match self.policy {
            NextPagePolicy::Unbounded => true,
            NextPagePolicy::Bounded => state.page_index + 1 < self.row_model(state).page_count(),
        }
    }

    fn has_row(&self, row_id: &str) -> bool {
        self.rows.iter().any(|row| row.row_id() == row_id)
    }

    /// Apply an action. Returns whether the state changed.
    pub fn apply(&self, state: &mut TableState, action: TableAction) -> bool {
        tracing::debug!(?action, "table action");
        match action {
            TableAction::SetFilter { column, value } => self.set_filter(state, column, value),
            TableAction::ToggleSort { column } => self.toggle_sort(state, &column),
            TableAction::SetRowSelected { row_id, selected } => {
                self.set_row_selected(state, row_id, selected)
            }
            TableAction::ToggleRow { row_id } => {
                let selected = !state.is_selected(&row_id);
                self.set_row_selected(state, row_id, selected)
            }
            TableAction::TogglePageSelection => self.toggle_page_selection(state),
            TableAction::ClearSelection => {
                let changed = !state.selection.is_empty();
                state.selection.clear();
                changed
            }
            TableAction::SetColumnVisible { column, visible } => {
                self.set_column_visible(state, column, visible)
            }
            TableAction::PreviousPage => {
                if !self.can_previous_page(state) {
                    return false;
                }
                state.page_index -= 1;
                true
            }
            TableAction::NextPage => {
                if !self.can_next_page(state) {
                    return false;
                }
                state.page_index += 1;
                true
            }
            TableAction::SetPageSize(size) => {
                let size = size.max(1);
                if size == state.page_size {
                    return false;
                }
                state.page_size = size;
                state.page_index = 0;
                true
            }
        }
    }

    fn set_filter(&self, state: &mut TableState, column: String, value: String) -> bool {
        if self.column(&column).is_none_or(|def| def.accessor.is_none()) {
            tracing::debug!(column = %column, "filter on unknown column ignored");
            return false;
        }
        if state.filter_value(&column) == value {
            return false;
        }
        if value.is_empty() {
            state.filters.remove(&column);
        } else {
            state.filters.insert(column, value);
        }
        state.page_index = 0;
        true
    }

    fn toggle_sort(&self, state: &mut TableState, column: &str) -> bool {
        if !self.column(column).is_some_and(ColumnDef::can_sort) {
            tracing::debug!(column, "sort on ineligible column ignored");
            return false;
        }
        state.sorting = next_sort(state.sort_direction(column)).map(|direction| SortState {
            column: column.to_string(),
            direction,
        });
        state.page_index = 0;
        true
    }

    fn set_row_selected(&self, state: &mut TableState, row_id: String, selected: bool) -> bool {
        if !self.has_row(&row_id) {
            tracing::debug!(row_id = %row_id, "selection of unknown row ignored");
            return false;
        }
        if selected {
            state.selection.insert(row_id)
        } else {
            state.selection.remove(&row_id)
        }
    }

    fn toggle_page_selection(&self, state: &mut TableState) -> bool {
        let page_ids: Vec<String> = self
            .row_model(state)
            .page_rows()
            .map(|row| row.row_id().to_string())
            .collect();
        if page_ids.is_empty() {
            return false;
        }
        let all_selected = page_ids.iter().all(|id| state.is_selected(id));
        for id in page_ids {
            if all_selected {
                state.selection.remove(&id);
            } else {
                state.selection.insert(id);
            }
        }
        true
    }

    fn set_column_visible(&self, state: &mut TableState, column: String, visible: bool) -> bool {
        if !self.column(&column).is_some_and(|def| def.enable_hiding) {
            tracing::debug!(column = %column, "visibility of unknown or fixed column ignored");
            return false;
        }
        if state.is_visible(&column) == visible {
            return false;
        }
        state.visibility.insert(column, visible);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::payments::{demo_payments, payment_columns};

    fn select(table: &DataTable<'_, payments::Payment>, state: &mut TableState, id: &str) {
        assert!(table.apply(
            state,
            TableAction::SetRowSelected {
                row_id: id.into(),
                selected: true
            }
        ));
    }

    #[test]
    fn header_checkbox_tracks_page_selection() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows);
        let mut state = TableState::default();
        assert_eq!(table.page_selection_state(&state), CheckedState::Unchecked);
        select(&table, &mut state, "m5gr84i9");
        assert_eq!(table.page_selection_state(&state), CheckedState::Indeterminate);
        assert!(table.apply(&mut state, TableAction::TogglePageSelection));
        assert_eq!(table.page_selection_state(&state), CheckedState::Checked);
        assert!(table.apply(&mut state, TableAction::TogglePageSelection));
        assert_eq!(table.page_selection_state(&state), CheckedState::Unchecked);
    }

    #[test]
    fn unknown_ids_are_no_ops() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows);
        let mut state = TableState::default();
        let before = state.clone();
        assert!(!table.apply(&mut state, TableAction::ToggleRow { row_id: "nope".into() }));
        assert!(!table.apply(
            &mut state,
            TableAction::SetColumnVisible {
                column: "nope".into(),
                visible: false
            }
        ));
        assert!(!table.apply(
            &mut state,
            TableAction::SetColumnVisible {
                column: "select".into(),
                visible: false
            }
        ));
        assert!(!table.apply(&mut state, TableAction::ToggleSort { column: "actions".into() }));
        assert_eq!(state, before);
    }

    #[test]
    fn filter_and_sort_reset_the_page() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows).with_policy(NextPagePolicy::Unbounded);
        let mut state = TableState::default();
        assert!(table.apply(&mut state, TableAction::NextPage));
        assert_eq!(state.page_index, 1);
        table.apply(
            &mut state,
            TableAction::SetFilter {
                column: "email".into(),
                value: "pix".into(),
            },
        );
        assert_eq!(state.page_index, 0);
        table.apply(&mut state, TableAction::NextPage);
        table.apply(&mut state, TableAction::ToggleSort { column: "email".into() });
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn bounded_policy_stops_on_last_page() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows);
        let mut state = TableState::with_page_size(2);
        assert!(!table.can_previous_page(&state));
        assert!(table.apply(&mut state, TableAction::NextPage));
        assert!(!table.can_next_page(&state));
        assert!(!table.apply(&mut state, TableAction::NextPage));
        assert_eq!(table.row_model(&state).page_rows().count(), 1);
        assert!(table.apply(&mut state, TableAction::PreviousPage));
        assert!(!table.apply(&mut state, TableAction::PreviousPage));
    }

    #[test]
    fn unbounded_policy_reaches_empty_pages() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows).with_policy(NextPagePolicy::Unbounded);
        let mut state = TableState::default();
        assert!(table.apply(&mut state, TableAction::NextPage));
        assert!(table.row_model(&state).page_is_empty());
        assert!(table.can_next_page(&state));
    }

    #[test]
    fn summary_counts_only_filtered_selection() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows);
        let mut state = TableState::default();
        select(&table, &mut state, "m5gr84i9");
        select(&table, &mut state, "3u1reuv4");
        assert_eq!(table.selection_summary(&state), "2 of 3 row(s) selected.");
        table.apply(
            &mut state,
            TableAction::SetFilter {
                column: "email".into(),
                value: "KHA".into(),
            },
        );
        assert_eq!(table.selection_summary(&state), "1 of 1 row(s) selected.");
        assert_eq!(table.filtered_selected_count(&state), 1);
        assert!(table.apply(&mut state, TableAction::ClearSelection));
        assert_eq!(table.selection_summary(&state), "0 of 1 row(s) selected.");
    }

    #[test]
    fn page_size_change_resets_page() {
        let columns = payment_columns();
        let rows = demo_payments();
        let table = DataTable::new(&columns, &rows);
        let mut state = TableState::with_page_size(1);
        table.apply(&mut state, TableAction::NextPage);
        assert!(table.apply(&mut state, TableAction::SetPageSize(5)));
        assert_eq!(state.page_index, 0);
        assert!(!table.apply(&mut state, TableAction::SetPageSize(5)));
    }
}

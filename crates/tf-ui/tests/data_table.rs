//! End-to-end behaviour of the payments table engine.

use tf_ui::core::primitives::CheckedState;
use tf_ui::core::table::payments::{EMAIL_COLUMN, Payment, demo_payments, payment_columns};
use tf_ui::core::table::{ColumnDef, DataTable, SortDirection, TableAction, TableState};

fn page_ids(table: &DataTable<'_, Payment>, state: &TableState) -> Vec<String> {
    table
        .row_model(state)
        .page_rows()
        .map(|row| row.id.clone())
        .collect()
}

fn filter(value: &str) -> TableAction {
    TableAction::SetFilter {
        column: EMAIL_COLUMN.to_string(),
        value: value.to_string(),
    }
}

fn toggle_sort(column: &str) -> TableAction {
    TableAction::ToggleSort {
        column: column.to_string(),
    }
}

#[test]
fn filter_matches_email_substring_case_insensitively() {
    let columns = payment_columns();
    let rows = demo_payments();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();

    assert!(table.apply(&mut state, filter("kha")));
    assert_eq!(page_ids(&table, &state), vec!["3u1reuv4"]);

    table.apply(&mut state, filter("PIXSELLZ"));
    assert_eq!(page_ids(&table, &state).len(), 3);

    table.apply(&mut state, filter("nobody"));
    assert!(table.row_model(&state).page_is_empty());
    assert_eq!(table.selection_summary(&state), "0 of 0 row(s) selected.");

    table.apply(&mut state, filter(""));
    assert!(state.filters.is_empty());
    assert_eq!(page_ids(&table, &state).len(), 3);
}

#[test]
fn amount_sort_cycles_through_three_states() {
    let columns = payment_columns();
    let rows = demo_payments();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();

    table.apply(&mut state, toggle_sort("amount"));
    assert_eq!(state.sort_direction("amount"), Some(SortDirection::Asc));
    assert_eq!(
        page_ids(&table, &state),
        vec!["derv1ws0", "m5gr84i9", "3u1reuv4"]
    );

    table.apply(&mut state, toggle_sort("amount"));
    assert_eq!(state.sort_direction("amount"), Some(SortDirection::Desc));
    assert_eq!(
        page_ids(&table, &state),
        vec!["3u1reuv4", "m5gr84i9", "derv1ws0"]
    );

    table.apply(&mut state, toggle_sort("amount"));
    assert_eq!(state.sorting, None);
    assert_eq!(
        page_ids(&table, &state),
        vec!["m5gr84i9", "3u1reuv4", "derv1ws0"]
    );
}

#[test]
fn sorting_another_column_replaces_the_key() {
    let columns = payment_columns();
    let rows = demo_payments();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();

    table.apply(&mut state, toggle_sort("amount"));
    table.apply(&mut state, toggle_sort(EMAIL_COLUMN));
    assert_eq!(state.sort_direction("amount"), None);
    assert_eq!(state.sort_direction(EMAIL_COLUMN), Some(SortDirection::Asc));
    assert_eq!(
        page_ids(&table, &state),
        vec!["3u1reuv4", "m5gr84i9", "derv1ws0"]
    );
}

#[test]
fn header_checkbox_follows_row_selection() {
    let columns = payment_columns();
    let rows = demo_payments();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();

    table.apply(&mut state, TableAction::TogglePageSelection);
    assert_eq!(table.page_selection_state(&state), CheckedState::Checked);
    assert_eq!(table.selection_summary(&state), "3 of 3 row(s) selected.");

    table.apply(
        &mut state,
        TableAction::ToggleRow {
            row_id: "derv1ws0".to_string(),
        },
    );
    assert_eq!(
        table.page_selection_state(&state),
        CheckedState::Indeterminate
    );

    for id in ["m5gr84i9", "3u1reuv4"] {
        table.apply(
            &mut state,
            TableAction::SetRowSelected {
                row_id: id.to_string(),
                selected: false,
            },
        );
    }
    assert_eq!(table.page_selection_state(&state), CheckedState::Unchecked);
}

#[test]
fn hiding_a_column_leaves_other_state_alone() {
    let columns = payment_columns();
    let rows = demo_payments();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();
    table.apply(&mut state, filter("s"));
    table.apply(&mut state, toggle_sort("amount"));
    table.apply(&mut state, TableAction::TogglePageSelection);
    let before_rows = page_ids(&table, &state);

    let ids = |state: &TableState| -> Vec<String> {
        table
            .visible_columns(state)
            .into_iter()
            .map(|column: &ColumnDef<Payment>| column.id.clone())
            .collect()
    };

    assert!(table.apply(
        &mut state,
        TableAction::SetColumnVisible {
            column: "amount".to_string(),
            visible: false,
        },
    ));
    assert_eq!(ids(&state), vec!["select", "status", "email", "actions"]);
    assert_eq!(page_ids(&table, &state), before_rows);
    assert_eq!(state.sort_direction("amount"), Some(SortDirection::Asc));
    assert_eq!(state.selection.len(), before_rows.len());

    table.apply(
        &mut state,
        TableAction::SetColumnVisible {
            column: "amount".to_string(),
            visible: true,
        },
    );
    assert_eq!(
        ids(&state),
        vec!["select", "status", "email", "amount", "actions"]
    );
}

#[test]
fn table_is_generic_over_records() {
    use tf_ui::core::table::{CellValue, TableRecord};

    struct Task {
        key: String,
        title: &'static str,
    }

    impl TableRecord for Task {
        fn row_id(&self) -> &str {
            &self.key
        }
    }

    fn title(task: &Task) -> CellValue {
        task.title.into()
    }

    let columns = vec![ColumnDef::accessor("title", "Title", title)];
    let rows: Vec<Task> = ["task10", "Task2", "task1"]
        .into_iter()
        .enumerate()
        .map(|(idx, label)| Task {
            key: idx.to_string(),
            title: label,
        })
        .collect();
    let table = DataTable::new(&columns, &rows);
    let mut state = TableState::default();
    table.apply(
        &mut state,
        TableAction::ToggleSort {
            column: "title".to_string(),
        },
    );
    let order: Vec<_> = table
        .row_model(&state)
        .page_rows()
        .map(|task| task.title)
        .collect();
    assert_eq!(order, vec!["task1", "Task2", "task10"]);
}

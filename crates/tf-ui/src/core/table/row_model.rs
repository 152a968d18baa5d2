//! Filter, sort and paginate rows into the list a table renders.

use std::cmp::Ordering;

use crate::core::table::column::{CellValue, ColumnDef};
use crate::core::table::state::{SortDirection, TableState};

/// Rows surviving the filters, in display order, plus the current page.
#[derive(Debug)]
pub struct RowModel<'a, R> {
    rows: &'a [R],
    ordered: Vec<usize>,
    page_index: usize,
    page_size: usize,
}

impl<'a, R> RowModel<'a, R> {
    /// Run filter then sort over `rows` for `state`.
    #[must_use]
    pub fn build(rows: &'a [R], columns: &[ColumnDef<R>], state: &TableState) -> Self {
        let filters: Vec<(&ColumnDef<R>, String)> = state
            .filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(id, value)| {
                columns
                    .iter()
                    .find(|column| column.id == *id && column.accessor.is_some())
                    .map(|column| (column, value.to_lowercase()))
            })
            .collect();

        let mut ordered: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                filters.iter().all(|(column, needle)| {
                    column
                        .value(row)
                        .filter_text()
                        .to_lowercase()
                        .contains(needle.as_str())
                })
            })
            .map(|(idx, _)| idx)
            .collect();

        if let Some(sort) = &state.sorting {
            if let Some(column) = columns
                .iter()
                .find(|column| column.id == sort.column && column.can_sort())
            {
                let keys: Vec<CellValue> = rows.iter().map(|row| column.value(row)).collect();
                // `sort_by` is stable, so ties keep base order in both directions.
                ordered.sort_by(|left, right| {
                    let ordering = compare_values(&keys[*left], &keys[*right]);
                    match sort.direction {
                        SortDirection::Asc => ordering,
                        SortDirection::Desc => ordering.reverse(),
                    }
                });
            }
        }

        Self {
            rows,
            ordered,
            page_index: state.page_index,
            page_size: state.page_size.max(1),
        }
    }

    /// Number of rows passing the filters.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.ordered.len()
    }

    /// Every filtered row in display order.
    pub fn filtered_rows(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.ordered.iter().map(|idx| &self.rows[*idx])
    }

    /// Pages needed for the filtered rows; zero when nothing matches.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.ordered.len().div_ceil(self.page_size)
    }

    /// Page being shown.
    #[must_use]
    pub const fn page_index(&self) -> usize {
        self.page_index
    }

    /// Rows of the current page; empty past the last page.
    pub fn page_rows(&self) -> impl Iterator<Item = &'a R> + '_ {
        let start = self.page_index.saturating_mul(self.page_size);
        self.ordered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|idx| &self.rows[*idx])
    }

    /// True when the current page has no rows.
    #[must_use]
    pub fn page_is_empty(&self) -> bool {
        self.page_rows().next().is_none()
    }
}

/// Order two cell values: numbers numerically, text naturally and
/// case-insensitively, numbers before text, empty values last.
#[must_use]
pub fn compare_values(left: &CellValue, right: &CellValue) -> Ordering {
    match (left, right) {
        (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
        (CellValue::Text(a), CellValue::Text(b)) => natural_cmp(a, b),
        (CellValue::Number(_), CellValue::Text(_)) => Ordering::Less,
        (CellValue::Text(_), CellValue::Number(_)) => Ordering::Greater,
        (CellValue::Empty, CellValue::Empty) => Ordering::Equal,
        (CellValue::Empty, _) => Ordering::Greater,
        (_, CellValue::Empty) => Ordering::Less,
    }
}

/// Case-insensitive comparison treating digit runs as numbers, so `item2`
/// sorts before `item10`.
#[must_use]
pub fn natural_cmp(left: &str, right: &str) -> Ordering {
    let left_chunks = chunks(left);
    let right_chunks = chunks(right);
    for (a, b) in left_chunks.iter().zip(&right_chunks) {
        let ordering = match (a, b) {
            (Chunk::Digits(a), Chunk::Digits(b)) => compare_digits(a, b),
            (Chunk::Text(a), Chunk::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Chunk::Digits(_), Chunk::Text(_)) => Ordering::Less,
            (Chunk::Text(_), Chunk::Digits(_)) => Ordering::Greater,
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    left_chunks.len().cmp(&right_chunks.len())
}

enum Chunk<'a> {
    Digits(&'a str),
    Text(&'a str),
}

fn chunks(value: &str) -> Vec<Chunk<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;
    for (idx, ch) in value.char_indices() {
        let is_digit = ch.is_ascii_digit();
        match in_digits {
            Some(current) if current != is_digit => {
                out.push(make_chunk(&value[start..idx], current));
                start = idx;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if let Some(current) = in_digits {
        out.push(make_chunk(&value[start..], current));
    }
    out
}

const fn make_chunk(text: &str, digits: bool) -> Chunk<'_> {
    if digits { Chunk::Digits(text) } else { Chunk::Text(text) }
}

fn compare_digits(left: &str, right: &str) -> Ordering {
    let left = left.trim_start_matches('0');
    let right = right.trim_start_matches('0');
    left.len().cmp(&right.len()).then_with(|| left.cmp(right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::state::SortState;

    fn label(row: &(&'static str, f64)) -> CellValue {
        row.0.into()
    }

    fn amount(row: &(&'static str, f64)) -> CellValue {
        row.1.into()
    }

    fn columns() -> Vec<ColumnDef<(&'static str, f64)>> {
        vec![
            ColumnDef::accessor("label", "Label", label),
            ColumnDef::accessor("amount", "Amount", amount),
        ]
    }

    #[test]
    fn natural_ordering() {
        assert_eq!(natural_cmp("item2", "item10"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Equal);
        assert_eq!(natural_cmp("b", "A"), Ordering::Greater);
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
        assert_eq!(natural_cmp("x007", "x7"), Ordering::Equal);
    }

    #[test]
    fn mixed_values_order() {
        assert_eq!(
            compare_values(&CellValue::Number(1.0), &CellValue::Text("a".into())),
            Ordering::Less
        );
        assert_eq!(
            compare_values(&CellValue::Empty, &CellValue::Number(1.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn descending_sort_keeps_ties_in_base_order() {
        let rows = [("b", 1.0), ("a", 2.0), ("c", 1.0)];
        let state = TableState {
            sorting: Some(SortState {
                column: "amount".into(),
                direction: SortDirection::Desc,
            }),
            ..TableState::default()
        };
        let model = RowModel::build(&rows, &columns(), &state);
        let order: Vec<_> = model.filtered_rows().map(|row| row.0).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn pages_slice_the_filtered_rows() {
        let rows: Vec<(&'static str, f64)> = vec![("r", 0.0); 25];
        let mut state = TableState::default();
        let model = RowModel::build(&rows, &columns(), &state);
        assert_eq!(model.page_count(), 3);
        assert_eq!(model.page_rows().count(), 10);
        state.page_index = 2;
        assert_eq!(RowModel::build(&rows, &columns(), &state).page_rows().count(), 5);
        state.page_index = 3;
        assert!(RowModel::build(&rows, &columns(), &state).page_is_empty());
    }

    #[test]
    fn filters_on_unknown_columns_are_ignored() {
        let rows = [("a", 1.0)];
        let mut state = TableState::default();
        state.filters.insert("missing".into(), "zzz".into());
        assert_eq!(RowModel::build(&rows, &columns(), &state).filtered_len(), 1);
    }
}

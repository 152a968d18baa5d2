//! Column definitions: how a header and its cells render and what the engine
//! may do with the column.

use std::fmt;

use crate::core::format::{capitalize, format_usd};

/// Value extracted from a row for sorting, filtering and display.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    /// Free text.
    Text(String),
    /// Numeric value.
    Number(f64),
    /// Nothing to show.
    Empty,
}

impl CellValue {
    /// Text used for substring filtering.
    #[must_use]
    pub fn filter_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) => value.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Reads a cell value from a row.
pub type Accessor<R> = fn(&R) -> CellValue;

/// Case transform applied to text cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextCase {
    /// Render as stored.
    #[default]
    AsIs,
    /// Lower-case everything.
    Lower,
    /// Upper-case the first letter.
    Capitalize,
}

/// What the header cell renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderKind {
    /// Static label.
    Label(String),
    /// Ghost button that cycles the column sort.
    SortButton(String),
    /// Tri-state checkbox selecting the current page.
    SelectAll,
    /// Nothing.
    Empty,
}

/// What each body cell renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Accessor text with a case transform.
    Text(TextCase),
    /// Accessor number formatted as US dollars, right-aligned.
    Currency,
    /// Checkbox toggling the row's selection.
    SelectRow,
    /// Row action menu.
    Actions,
}

/// Horizontal alignment of header and cell content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left in LTR.
    #[default]
    Start,
    /// Right in LTR.
    End,
}

/// A single table column. Built once and shared across renders.
pub struct ColumnDef<R> {
    /// Stable identifier, also shown in the visibility menu.
    pub id: String,
    /// Header rendering.
    pub header: HeaderKind,
    /// Body cell rendering.
    pub cell: CellKind,
    /// Value source; display-only columns have none.
    pub accessor: Option<Accessor<R>>,
    /// Whether the engine may sort by this column.
    pub enable_sorting: bool,
    /// Whether the visibility menu lists this column.
    pub enable_hiding: bool,
    /// Content alignment.
    pub align: Align,
}

impl<R> Clone for ColumnDef<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            cell: self.cell,
            accessor: self.accessor,
            enable_sorting: self.enable_sorting,
            enable_hiding: self.enable_hiding,
            align: self.align,
        }
    }
}

impl<R> fmt::Debug for ColumnDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("cell", &self.cell)
            .field("has_accessor", &self.accessor.is_some())
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_hiding", &self.enable_hiding)
            .finish_non_exhaustive()
    }
}

impl<R> ColumnDef<R> {
    /// Data column with a plain label header; sortable and hideable.
    #[must_use]
    pub fn accessor(id: impl Into<String>, label: impl Into<String>, accessor: Accessor<R>) -> Self {
        Self {
            id: id.into(),
            header: HeaderKind::Label(label.into()),
            cell: CellKind::Text(TextCase::AsIs),
            accessor: Some(accessor),
            enable_sorting: true,
            enable_hiding: true,
            align: Align::Start,
        }
    }

    /// Column without data (selection, actions); never sorted or hidden.
    #[must_use]
    pub fn display(id: impl Into<String>, header: HeaderKind, cell: CellKind) -> Self {
        Self {
            id: id.into(),
            header,
            cell,
            accessor: None,
            enable_sorting: false,
            enable_hiding: false,
            align: Align::Start,
        }
    }

    /// Replace the header.
    #[must_use]
    pub fn with_header(mut self, header: HeaderKind) -> Self {
        self.header = header;
        self
    }

    /// Replace the cell kind; currency cells align to the end.
    #[must_use]
    pub fn with_cell(mut self, cell: CellKind) -> Self {
        if cell == CellKind::Currency {
            self.align = Align::End;
        }
        self.cell = cell;
        self
    }

    /// Override hiding.
    #[must_use]
    pub const fn hideable(mut self, enable: bool) -> Self {
        self.enable_hiding = enable;
        self
    }

    /// Override sorting.
    #[must_use]
    pub const fn sortable(mut self, enable: bool) -> Self {
        self.enable_sorting = enable;
        self
    }

    /// Whether the engine can sort by this column.
    #[must_use]
    pub const fn can_sort(&self) -> bool {
        self.enable_sorting && self.accessor.is_some()
    }

    /// Raw value for a row.
    #[must_use]
    pub fn value(&self, row: &R) -> CellValue {
        self.accessor.map_or(CellValue::Empty, |accessor| accessor(row))
    }

    /// Display text for text and currency cells.
    #[must_use]
    pub fn display_text(&self, row: &R) -> Option<String> {
        let value = self.value(row);
        match self.cell {
            CellKind::Text(case) => {
                let text = value.filter_text();
                Some(match case {
                    TextCase::AsIs => text,
                    TextCase::Lower => text.to_lowercase(),
                    TextCase::Capitalize => capitalize(&text),
                })
            }
            CellKind::Currency => match value {
                CellValue::Number(amount) => Some(format_usd(amount)),
                CellValue::Text(text) => text.trim().parse::<f64>().ok().map(format_usd),
                CellValue::Empty => None,
            },
            CellKind::SelectRow | CellKind::Actions => None,
        }
    }

    /// Header label, when the header shows text.
    #[must_use]
    pub fn header_label(&self) -> Option<&str> {
        match &self.header {
            HeaderKind::Label(label) | HeaderKind::SortButton(label) => Some(label),
            HeaderKind::SelectAll | HeaderKind::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        total: f64,
    }

    fn name(row: &Row) -> CellValue {
        row.name.into()
    }

    fn total(row: &Row) -> CellValue {
        row.total.into()
    }

    #[test]
    fn text_case_transforms() {
        let row = Row {
            name: "Mixed Case",
            total: 1.0,
        };
        let lower = ColumnDef::accessor("name", "Name", name).with_cell(CellKind::Text(TextCase::Lower));
        let cap = ColumnDef::accessor("name", "Name", name)
            .with_cell(CellKind::Text(TextCase::Capitalize));
        assert_eq!(lower.display_text(&row).as_deref(), Some("mixed case"));
        assert_eq!(cap.display_text(&row).as_deref(), Some("Mixed Case"));
    }

    #[test]
    fn currency_cells_align_end() {
        let row = Row {
            name: "x",
            total: 1234.5,
        };
        let column = ColumnDef::accessor("total", "Total", total).with_cell(CellKind::Currency);
        assert_eq!(column.align, Align::End);
        assert_eq!(column.display_text(&row).as_deref(), Some("$1,234.50"));
    }

    #[test]
    fn display_columns_are_inert() {
        let column: ColumnDef<Row> =
            ColumnDef::display("select", HeaderKind::SelectAll, CellKind::SelectRow);
        assert!(!column.can_sort());
        assert!(!column.enable_hiding);
        assert_eq!(column.header_label(), None);
        let row = Row {
            name: "x",
            total: 0.0,
        };
        assert_eq!(column.value(&row), CellValue::Empty);
        assert_eq!(column.display_text(&row), None);
    }
}

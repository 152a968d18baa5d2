//! Payments data set driving the data-table demo.

use serde::{Deserialize, Serialize};

use crate::core::table::TableRecord;
use crate::core::table::column::{CellKind, CellValue, ColumnDef, HeaderKind, TextCase};

/// Column the toolbar filter input is bound to.
pub const EMAIL_COLUMN: &str = "email";

/// Settlement status of a payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    /// Awaiting processing.
    Pending,
    /// In flight.
    Processing,
    /// Settled.
    Success,
    /// Rejected.
    Failed,
}

impl PaymentStatus {
    /// Lower-case wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }
}

/// One payment row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Unique key.
    pub id: String,
    /// Amount in US dollars.
    pub amount: f64,
    /// Settlement status.
    pub status: PaymentStatus,
    /// Customer email.
    pub email: String,
}

impl TableRecord for Payment {
    fn row_id(&self) -> &str {
        &self.id
    }
}

/// Entries of the per-row actions menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// Hand the payment id to the host (clipboard is the host's call).
    CopyId,
    /// Open the customer.
    ViewCustomer,
    /// Open the payment.
    ViewDetails,
}

impl RowAction {
    /// Menu order.
    pub const ALL: [Self; 3] = [Self::CopyId, Self::ViewCustomer, Self::ViewDetails];

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CopyId => "Copy payment ID",
            Self::ViewCustomer => "View customer",
            Self::ViewDetails => "View payment details",
        }
    }

    /// Text a host should place on the clipboard for this action.
    #[must_use]
    pub fn clipboard_text(self, row_id: &str) -> Option<&str> {
        matches!(self, Self::CopyId).then_some(row_id)
    }
}

fn payment(id: &str, amount: f64, status: PaymentStatus, email: &str) -> Payment {
    Payment {
        id: id.to_string(),
        amount,
        status,
        email: email.to_string(),
    }
}

/// The three demo payments.
#[must_use]
pub fn demo_payments() -> Vec<Payment> {
    vec![
        payment("m5gr84i9", 48.0, PaymentStatus::Success, "komol@pixsellz.io"),
        payment("3u1reuv4", 68.0, PaymentStatus::Success, "khasan@pixsellz.io"),
        payment("derv1ws0", 8.0, PaymentStatus::Failed, "sab@pixsellz.io"),
    ]
}

fn status(row: &Payment) -> CellValue {
    row.status.as_str().into()
}

fn email(row: &Payment) -> CellValue {
    row.email.as_str().into()
}

fn amount(row: &Payment) -> CellValue {
    row.amount.into()
}

/// Columns: select, status, email, amount, actions.
#[must_use]
pub fn payment_columns() -> Vec<ColumnDef<Payment>> {
    vec![
        ColumnDef::display("select", HeaderKind::SelectAll, CellKind::SelectRow),
        ColumnDef::accessor("status", "Status", status)
            .with_cell(CellKind::Text(TextCase::Capitalize)),
        ColumnDef::accessor(EMAIL_COLUMN, "Email", email)
            .with_header(HeaderKind::SortButton("Email".to_string()))
            .with_cell(CellKind::Text(TextCase::Lower)),
        ColumnDef::accessor("amount", "Amount", amount)
            .with_header(HeaderKind::SortButton("Amount".to_string()))
            .with_cell(CellKind::Currency),
        ColumnDef::display("actions", HeaderKind::Empty, CellKind::Actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_layout() {
        let columns = payment_columns();
        let ids: Vec<_> = columns.iter().map(|column| column.id.as_str()).collect();
        assert_eq!(ids, vec!["select", "status", "email", "amount", "actions"]);
        let hideable: Vec<_> = columns
            .iter()
            .filter(|column| column.enable_hiding)
            .map(|column| column.id.as_str())
            .collect();
        assert_eq!(hideable, vec!["status", "email", "amount"]);
    }

    #[test]
    fn cells_render_formatted_text() {
        let columns = payment_columns();
        let rows = demo_payments();
        let row = &rows[0];
        let text: Vec<_> = columns.iter().map(|column| column.display_text(row)).collect();
        assert_eq!(
            text,
            vec![
                None,
                Some("Success".to_string()),
                Some("komol@pixsellz.io".to_string()),
                Some("$48.00".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn payments_deserialize_from_json() {
        let payment: Payment = serde_json::from_str(
            r#"{"id":"x1","amount":12.5,"status":"processing","email":"a@b.io"}"#,
        )
        .expect("payment");
        assert_eq!(payment.status, PaymentStatus::Processing);
        assert_eq!(payment.row_id(), "x1");
    }

    #[test]
    fn action_labels() {
        let labels: Vec<_> = RowAction::ALL.iter().map(|action| action.label()).collect();
        assert_eq!(
            labels,
            vec!["Copy payment ID", "View customer", "View payment details"]
        );
    }

    #[test]
    fn only_copy_id_carries_clipboard_text() {
        assert_eq!(RowAction::CopyId.clipboard_text("m5gr84i9"), Some("m5gr84i9"));
        assert_eq!(RowAction::ViewCustomer.clipboard_text("m5gr84i9"), None);
        assert_eq!(RowAction::ViewDetails.clipboard_text("m5gr84i9"), None);
    }
}

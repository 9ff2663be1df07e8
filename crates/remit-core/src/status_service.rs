//! Read-time status projection for invoices.

use chrono::NaiveDate;

use remit_domain::{Invoice, InvoiceStatus};

/// Computes display status without touching the stored record.
pub struct StatusService;

impl StatusService {
    /// Overlays `Overdue` on a `Sent` invoice whose due date has passed.
    /// Every other stored status, including an already-stored `Overdue`,
    /// is returned unchanged. The result is never written back.
    pub fn resolve(invoice: &Invoice, today: NaiveDate) -> InvoiceStatus {
        match invoice.status {
            InvoiceStatus::Sent if invoice.due_date < today => InvoiceStatus::Overdue,
            stored => stored,
        }
    }
}

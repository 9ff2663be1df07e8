//! Scans document due dates and emits deadline reminders.

use chrono::NaiveDate;

use remit_domain::{EntityKind, Expense, Invoice, InvoiceStatus, Notification};

use crate::status_service::StatusService;

/// Days ahead of a due date within which a reminder fires.
pub const DEFAULT_HORIZON_DAYS: u32 = 3;

/// Stateless reminder pass over document snapshots. Read-only and safely
/// re-entrant.
pub struct ReminderService;

impl ReminderService {
    /// Emits one reminder per document due within `horizon_days` of
    /// `today` (inclusive on both edges; past-due documents are not
    /// reminded). Paid invoices never remind. Expenses without a due date
    /// are skipped. Output is sorted ascending by due date; the sort is
    /// stable, so ties keep scan order: invoices before expenses, input
    /// order within each.
    pub fn scan(
        invoices: &[Invoice],
        expenses: &[Expense],
        today: NaiveDate,
        horizon_days: u32,
    ) -> Vec<Notification> {
        let mut reminders = Vec::new();

        for invoice in invoices {
            if StatusService::resolve(invoice, today) == InvoiceStatus::Paid {
                continue;
            }
            if !within_horizon(invoice.due_date, today, horizon_days) {
                continue;
            }
            reminders.push(Notification::reminder(
                EntityKind::Invoice,
                invoice.id,
                format!(
                    "Invoice for {} ({:.2}) is due on {}",
                    invoice.client, invoice.amount, invoice.due_date
                ),
                invoice.due_date,
            ));
        }

        for expense in expenses {
            let due_date = match expense.due_date {
                Some(due_date) => due_date,
                None => continue,
            };
            // TODO: decide whether paid expenses should stop reminding,
            // matching the invoice rule.
            if !within_horizon(due_date, today, horizon_days) {
                continue;
            }
            reminders.push(Notification::reminder(
                EntityKind::Expense,
                expense.id,
                format!(
                    "{} payment of {:.2} is due on {}",
                    expense.description, expense.amount, due_date
                ),
                due_date,
            ));
        }

        reminders.sort_by_key(|notification| notification.date);
        reminders
    }
}

fn within_horizon(due_date: NaiveDate, today: NaiveDate, horizon_days: u32) -> bool {
    let days_until = (due_date - today).num_days();
    days_until >= 0 && days_until <= i64::from(horizon_days)
}

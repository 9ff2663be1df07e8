//! remit-domain
//!
//! Record types and calendar primitives for the Remit evaluation core:
//! recurring billing templates, the documents they spawn, budget
//! hierarchies, and the derived report/notification shapes. Pure data,
//! no services, no I/O.

pub mod budget;
pub mod common;
pub mod document;
pub mod notification;
pub mod template;

pub use budget::{
    Budget, BudgetHealth, BudgetItem, BudgetLine, BudgetReport, ItemReport, LineReport,
};
pub use common::{Amounted, AmountError, Frequency, Identifiable};
pub use document::{Expense, ExpenseStatus, Invoice, InvoiceStatus};
pub use notification::{EntityKind, Notification};
pub use template::{RecurringTemplate, TemplateKind};

//! Concrete invoice and expense documents produced by users or the
//! recurrence pass.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{ensure_non_negative, AmountError, Amounted, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// An issued invoice. `recurring_source` back-references the template
/// that spawned it, lookup-only; the engine appends invoices but never
/// mutates existing ones.
pub struct Invoice {
    pub id: Uuid,
    pub client: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_source: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Invoice lifecycle states as stored; `Overdue` can also be overlaid at
/// read time without being written back.
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    PartiallyPaid,
    Overdue,
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Sent => "Sent",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::PartiallyPaid => "Partially Paid",
            InvoiceStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

impl Invoice {
    pub fn new(
        client: impl Into<String>,
        amount: f64,
        due_date: NaiveDate,
    ) -> Result<Self, AmountError> {
        Ok(Self {
            id: Uuid::new_v4(),
            client: client.into(),
            amount: ensure_non_negative(amount)?,
            due_date,
            status: InvoiceStatus::Draft,
            recurring_source: None,
            paid_date: None,
            paid_amount: None,
        })
    }

    /// Records a payment against the invoice. A payment covering the full
    /// amount settles it; anything less marks it partially paid.
    pub fn record_payment(&mut self, date: NaiveDate, amount: f64) {
        self.paid_date = Some(date);
        self.paid_amount = Some(amount);
        self.status = if amount >= self.amount {
            InvoiceStatus::Paid
        } else {
            InvoiceStatus::PartiallyPaid
        };
    }
}

impl Identifiable for Invoice {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Invoice {
    fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A recorded expense. `budget_item_id` links it to at most one budget
/// item; the link is a plain reference, so deleting a budget detaches
/// expenses rather than deleting them.
pub struct Expense {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub status: ExpenseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_source: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_item_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExpenseStatus {
    Unpaid,
    Paid,
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseStatus::Unpaid => "Unpaid",
            ExpenseStatus::Paid => "Paid",
        };
        f.write_str(label)
    }
}

impl Expense {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
    ) -> Result<Self, AmountError> {
        Ok(Self {
            id: Uuid::new_v4(),
            category: category.into(),
            description: description.into(),
            amount: ensure_non_negative(amount)?,
            due_date: None,
            status: ExpenseStatus::Unpaid,
            recurring_source: None,
            budget_item_id: None,
        })
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_budget_item(mut self, item_id: Uuid) -> Self {
        self.budget_item_id = Some(item_id);
        self
    }

    pub fn mark_paid(&mut self) {
        self.status = ExpenseStatus::Paid;
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

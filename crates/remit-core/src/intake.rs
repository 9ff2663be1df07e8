//! Decodes wire-shaped rows from the host store into typed records.
//!
//! The dashboard persists dates as ISO `%Y-%m-%d` strings. Rows that fail
//! to decode are skipped and reported as faults; the rest of the batch
//! decodes normally.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use remit_domain::{
    Expense, ExpenseStatus, Frequency, Invoice, InvoiceStatus, RecurringTemplate, TemplateKind,
};

use crate::error::Fault;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Serialize, Deserialize)]
/// A recurring template as stored by the host.
pub struct TemplateRow {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: TemplateKind,
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: String,
    #[serde(default)]
    pub last_generated: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub client: String,
    pub amount: f64,
    pub due_date: String,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub recurring_source: Option<Uuid>,
    #[serde(default)]
    pub paid_date: Option<String>,
    #[serde(default)]
    pub paid_amount: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRow {
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<String>,
    pub status: ExpenseStatus,
    #[serde(default)]
    pub recurring_source: Option<Uuid>,
    #[serde(default)]
    pub budget_item_id: Option<Uuid>,
}

/// Decoded records plus the faults for every row that had to be skipped.
#[derive(Debug, Clone)]
pub struct Intake<T> {
    pub records: Vec<T>,
    pub faults: Vec<Fault>,
}

impl<T> Default for Intake<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            faults: Vec::new(),
        }
    }
}

pub fn decode_templates(rows: &[TemplateRow]) -> Intake<RecurringTemplate> {
    let mut intake = Intake::default();
    for row in rows {
        if row.amount < 0.0 {
            intake.faults.push(Fault::NegativeAmount {
                record: row.id,
                value: row.amount,
            });
            continue;
        }
        let start_date = match parse_date(row.id, "start", &row.start_date) {
            Ok(date) => date,
            Err(fault) => {
                intake.faults.push(fault);
                continue;
            }
        };
        let last_generated = match &row.last_generated {
            Some(raw) => match parse_date(row.id, "last_generated", raw) {
                Ok(date) => date,
                Err(fault) => {
                    intake.faults.push(fault);
                    continue;
                }
            },
            None => start_date,
        };
        let end_date = match &row.end_date {
            Some(raw) => match parse_date(row.id, "end", raw) {
                Ok(date) => Some(date),
                Err(fault) => {
                    intake.faults.push(fault);
                    continue;
                }
            },
            None => None,
        };
        intake.records.push(RecurringTemplate {
            id: row.id,
            kind: row.kind.clone(),
            amount: row.amount,
            frequency: row.frequency,
            start_date,
            last_generated,
            end_date,
        });
    }
    intake
}

pub fn decode_invoices(rows: &[InvoiceRow]) -> Intake<Invoice> {
    let mut intake = Intake::default();
    for row in rows {
        if row.amount < 0.0 {
            intake.faults.push(Fault::NegativeAmount {
                record: row.id,
                value: row.amount,
            });
            continue;
        }
        let due_date = match parse_date(row.id, "due", &row.due_date) {
            Ok(date) => date,
            Err(fault) => {
                intake.faults.push(fault);
                continue;
            }
        };
        let paid_date = match &row.paid_date {
            Some(raw) => match parse_date(row.id, "paid", raw) {
                Ok(date) => Some(date),
                Err(fault) => {
                    intake.faults.push(fault);
                    continue;
                }
            },
            None => None,
        };
        intake.records.push(Invoice {
            id: row.id,
            client: row.client.clone(),
            amount: row.amount,
            due_date,
            status: row.status,
            recurring_source: row.recurring_source,
            paid_date,
            paid_amount: row.paid_amount,
        });
    }
    intake
}

pub fn decode_expenses(rows: &[ExpenseRow]) -> Intake<Expense> {
    let mut intake = Intake::default();
    for row in rows {
        if row.amount < 0.0 {
            intake.faults.push(Fault::NegativeAmount {
                record: row.id,
                value: row.amount,
            });
            continue;
        }
        let due_date = match &row.due_date {
            Some(raw) => match parse_date(row.id, "due", raw) {
                Ok(date) => Some(date),
                Err(fault) => {
                    intake.faults.push(fault);
                    continue;
                }
            },
            None => None,
        };
        intake.records.push(Expense {
            id: row.id,
            category: row.category.clone(),
            description: row.description.clone(),
            amount: row.amount,
            due_date,
            status: row.status,
            recurring_source: row.recurring_source,
            budget_item_id: row.budget_item_id,
        });
    }
    intake
}

fn parse_date(record: Uuid, field: &'static str, raw: &str) -> Result<NaiveDate, Fault> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| Fault::MalformedDate {
        record,
        field,
        value: raw.to_string(),
    })
}

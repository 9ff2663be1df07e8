//! Recurring billing templates and their document variants.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{ensure_non_negative, AmountError, Frequency, Identifiable};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// A recurring-billing definition that periodically spawns concrete
/// invoices or expenses. `last_generated` only ever moves forward and is
/// advanced exclusively by the recurrence pass.
pub struct RecurringTemplate {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: TemplateKind,
    pub amount: f64,
    pub frequency: Frequency,
    pub start_date: NaiveDate,
    pub last_generated: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Distinguishes what a template materializes and carries the
/// variant-specific descriptive fields.
pub enum TemplateKind {
    Invoice { client: String },
    Expense { category: String, description: String },
}

impl RecurringTemplate {
    pub fn new(
        kind: TemplateKind,
        amount: f64,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Result<Self, AmountError> {
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            amount: ensure_non_negative(amount)?,
            frequency,
            start_date,
            last_generated: start_date,
            end_date: None,
        })
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// The next date a document becomes due, one period past the last
    /// generation bookmark.
    pub fn next_due(&self) -> NaiveDate {
        self.frequency.advance(self.last_generated)
    }

    /// Whether the template is still billable on the given date.
    pub fn active_on(&self, date: NaiveDate) -> bool {
        self.end_date.map_or(true, |end| date <= end)
    }
}

impl Identifiable for RecurringTemplate {
    fn id(&self) -> Uuid {
        self.id
    }
}

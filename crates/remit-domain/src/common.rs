//! Shared traits and calendar utilities for billing cadences.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for records handled by the engine.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Enumerates the cadences a recurring template can bill on.
pub enum Frequency {
    Monthly,
    Quarterly,
    Annually,
}

impl Frequency {
    /// Advances `from` by exactly one billing period. Month-based steps
    /// clamp the day to the last valid day of the target month, so
    /// Jan 31 + one month lands on Feb 29 or Feb 28.
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        match self {
            Frequency::Monthly => shift_month(from, 1),
            Frequency::Quarterly => shift_month(from, 3),
            Frequency::Annually => shift_year(from, 1),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
            Frequency::Annually => "Annually",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Errors raised when constructing amount-bearing records.
pub enum AmountError {
    Negative(f64),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountError::Negative(value) => {
                write!(f, "amount must not be negative: {value}")
            }
        }
    }
}

impl std::error::Error for AmountError {}

/// Validates that an amount is non-negative, returning it unchanged.
pub fn ensure_non_negative(value: f64) -> Result<f64, AmountError> {
    if value < 0.0 {
        return Err(AmountError::Negative(value));
    }
    Ok(value)
}

fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let month = date.month();
    let day = date.day().min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

use thiserror::Error;
use uuid::Uuid;

use remit_domain::AmountError;

/// A per-record defect observed while evaluating a batch. Faults are
/// collected and returned alongside results; a fault in one record never
/// blocks evaluation of the others.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Fault {
    #[error("record {record}: unparsable {field} date `{value}`")]
    MalformedDate {
        record: Uuid,
        field: &'static str,
        value: String,
    },
    #[error("record {record}: negative amount {value}")]
    NegativeAmount { record: Uuid, value: f64 },
    #[error("expense {expense}: unknown budget item {item}")]
    DanglingReference { expense: Uuid, item: Uuid },
}

/// Errors for host-facing operations that fail as a whole rather than
/// per record.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<AmountError> for CoreError {
    fn from(err: AmountError) -> Self {
        CoreError::Validation(err.to_string())
    }
}

//! One-call evaluation cycle combining the recurrence, reconciliation,
//! and reminder passes.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use remit_domain::{Budget, BudgetReport, Expense, Invoice, Notification, RecurringTemplate};

use crate::{
    budget_service::BudgetService, error::Fault, recurrence_service::RecurrenceService,
    reminder_service::ReminderService,
};

/// A snapshot of host records for one evaluation cycle.
#[derive(Debug, Clone)]
pub struct EvaluationInput {
    pub templates: Vec<RecurringTemplate>,
    pub invoices: Vec<Invoice>,
    pub expenses: Vec<Expense>,
    pub budgets: Vec<Budget>,
    pub today: NaiveDate,
    pub horizon_days: u32,
}

/// Everything one cycle produces. The host persists the new documents and
/// updated templates, renders the reports, and merges read markers into
/// the regenerated reminders.
#[derive(Debug, Clone)]
pub struct EvaluationOutput {
    pub new_invoices: Vec<Invoice>,
    pub new_expenses: Vec<Expense>,
    pub updated_templates: Vec<RecurringTemplate>,
    pub reports: Vec<BudgetReport>,
    pub reminders: Vec<Notification>,
    pub faults: Vec<Fault>,
}

/// Drives the full evaluation cycle the host triggers at session start
/// and on every record or horizon change.
pub struct Engine;

impl Engine {
    /// Runs the recurrence pass first, folds the newly materialized
    /// documents into the working snapshot, then reconciles budgets and
    /// scans for reminders against the combined record set.
    pub fn run(input: &EvaluationInput) -> EvaluationOutput {
        let recurrence = RecurrenceService::evaluate(&input.templates, input.today);
        debug!(
            new_invoices = recurrence.invoices.len(),
            new_expenses = recurrence.expenses.len(),
            "recurrence pass complete"
        );

        let mut invoices = input.invoices.clone();
        invoices.extend(recurrence.invoices.iter().cloned());
        let mut expenses = input.expenses.clone();
        expenses.extend(recurrence.expenses.iter().cloned());

        let reconciliation = BudgetService::reconcile(&input.budgets, &expenses);
        let reminders =
            ReminderService::scan(&invoices, &expenses, input.today, input.horizon_days);
        debug!(
            reports = reconciliation.reports.len(),
            reminders = reminders.len(),
            faults = reconciliation.faults.len(),
            "evaluation cycle complete"
        );

        EvaluationOutput {
            new_invoices: recurrence.invoices,
            new_expenses: recurrence.expenses,
            updated_templates: recurrence.templates,
            reports: reconciliation.reports,
            reminders,
            faults: reconciliation.faults,
        }
    }

    /// Carries read markers from the previous cycle's notifications onto
    /// freshly regenerated ones, matching by derived id.
    pub fn merge_read_flags(fresh: &mut [Notification], previous: &[Notification]) {
        let read: HashSet<&str> = previous
            .iter()
            .filter(|notification| notification.is_read)
            .map(|notification| notification.id.as_str())
            .collect();
        for notification in fresh.iter_mut() {
            if read.contains(notification.id.as_str()) {
                notification.is_read = true;
            }
        }
    }
}

//! Materializes due documents from recurring billing templates.

use chrono::NaiveDate;
use uuid::Uuid;

use remit_domain::{
    Expense, ExpenseStatus, Invoice, InvoiceStatus, RecurringTemplate, TemplateKind,
};

/// Documents materialized by one evaluation pass, plus the templates
/// whose bookkeeping advanced. Only the returned templates changed; the
/// host persists both alongside its existing records.
#[derive(Debug, Clone, Default)]
pub struct RecurrenceOutcome {
    pub invoices: Vec<Invoice>,
    pub expenses: Vec<Expense>,
    pub templates: Vec<RecurringTemplate>,
}

/// Stateless recurrence pass over template snapshots.
pub struct RecurrenceService;

impl RecurrenceService {
    /// Evaluates every template against `today` and materializes at most
    /// one document per template, regardless of how many periods have
    /// elapsed; missed periods collapse into the newest one. A generated
    /// document is due on the computed period date, while the template's
    /// bookmark advances to `today`.
    ///
    /// The pass is pure: same inputs, same outcome. Callers must
    /// serialize read-evaluate-persist around it so two concurrent
    /// evaluations cannot observe the same stale bookmark and generate
    /// the same period twice.
    pub fn evaluate(templates: &[RecurringTemplate], today: NaiveDate) -> RecurrenceOutcome {
        let mut outcome = RecurrenceOutcome::default();
        for template in templates {
            let next_due = template.next_due();
            if today < next_due || !template.active_on(today) {
                continue;
            }
            match &template.kind {
                TemplateKind::Invoice { client } => {
                    outcome.invoices.push(Invoice {
                        id: Uuid::new_v4(),
                        client: client.clone(),
                        amount: template.amount,
                        due_date: next_due,
                        status: InvoiceStatus::Sent,
                        recurring_source: Some(template.id),
                        paid_date: None,
                        paid_amount: None,
                    });
                }
                TemplateKind::Expense {
                    category,
                    description,
                } => {
                    outcome.expenses.push(Expense {
                        id: Uuid::new_v4(),
                        category: category.clone(),
                        description: description.clone(),
                        amount: template.amount,
                        due_date: Some(next_due),
                        status: ExpenseStatus::Unpaid,
                        recurring_source: Some(template.id),
                        budget_item_id: None,
                    });
                }
            }
            let mut updated = template.clone();
            updated.last_generated = today;
            outcome.templates.push(updated);
        }
        outcome
    }
}

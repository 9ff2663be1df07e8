//! Reconciles planned budget hierarchies against recorded expenses.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use remit_domain::{Budget, BudgetReport, Expense, ItemReport, LineReport};

use crate::error::{CoreError, Fault};

/// Reports for every budget in the snapshot, plus faults for expenses
/// whose item reference did not resolve.
#[derive(Debug, Clone, Default)]
pub struct ReconciliationOutcome {
    pub reports: Vec<BudgetReport>,
    pub faults: Vec<Fault>,
}

/// Stateless budgeting pass over budget/expense snapshots. Read-only and
/// safely re-entrant.
pub struct BudgetService;

impl BudgetService {
    /// Links expenses to budget items through their flat item-id
    /// reference and rolls the figures up item → line → budget. An
    /// expense contributes to at most one item; unlinked expenses are
    /// ignored and expenses pointing at an unknown item are excluded
    /// from every total and reported as faults.
    pub fn reconcile(budgets: &[Budget], expenses: &[Expense]) -> ReconciliationOutcome {
        let known: HashSet<Uuid> = budgets.iter().flat_map(|b| b.item_ids()).collect();
        let mut spent_by_item: HashMap<Uuid, f64> = HashMap::new();
        let mut faults = Vec::new();

        for expense in expenses {
            let item_id = match expense.budget_item_id {
                Some(item_id) => item_id,
                None => continue,
            };
            if !known.contains(&item_id) {
                faults.push(Fault::DanglingReference {
                    expense: expense.id,
                    item: item_id,
                });
                continue;
            }
            *spent_by_item.entry(item_id).or_default() += expense.amount;
        }

        let reports = budgets
            .iter()
            .map(|budget| {
                let mut total_spent = 0.0;
                let lines: Vec<LineReport> = budget
                    .lines
                    .iter()
                    .map(|line| {
                        let items: Vec<ItemReport> = line
                            .items
                            .iter()
                            .map(|item| {
                                let spent = spent_by_item.get(&item.id).copied().unwrap_or(0.0);
                                ItemReport::from_parts(item, spent)
                            })
                            .collect();
                        let spent = items.iter().map(|item| item.spent).sum();
                        total_spent += spent;
                        LineReport {
                            line_id: line.id,
                            title: line.title.clone(),
                            spent,
                            items,
                        }
                    })
                    .collect();
                BudgetReport::from_parts(budget, total_spent, lines)
            })
            .collect();

        ReconciliationOutcome { reports, faults }
    }

    /// Clears the item reference on every expense pointing into the given
    /// budget, returning how many were detached. Must run before the host
    /// deletes a budget; the expenses themselves are kept.
    pub fn detach_expenses(
        budgets: &[Budget],
        budget_id: Uuid,
        expenses: &mut [Expense],
    ) -> Result<usize, CoreError> {
        let budget = budgets
            .iter()
            .find(|budget| budget.id == budget_id)
            .ok_or(CoreError::BudgetNotFound(budget_id))?;
        let owned: HashSet<Uuid> = budget.item_ids().collect();
        let mut detached = 0usize;
        for expense in expenses.iter_mut() {
            if expense
                .budget_item_id
                .map_or(false, |item_id| owned.contains(&item_id))
            {
                expense.budget_item_id = None;
                detached += 1;
            }
        }
        Ok(detached)
    }
}

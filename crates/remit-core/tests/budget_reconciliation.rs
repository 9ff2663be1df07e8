use chrono::NaiveDate;
use uuid::Uuid;

use remit_core::{BudgetService, Fault};
use remit_domain::{Budget, BudgetHealth, BudgetItem, BudgetLine, Expense};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn year_budget(amount: f64) -> Budget {
    Budget::new(amount, date(2024, 1, 1), date(2024, 12, 31)).unwrap()
}

fn linked_expense(description: &str, amount: f64, item_id: Uuid) -> Expense {
    Expense::new("Ops", description, amount)
        .unwrap()
        .with_budget_item(item_id)
}

#[test]
fn item_spent_and_remaining_roll_up_to_the_budget() {
    let mut budget = year_budget(5000.0);
    let mut line = BudgetLine::new("Infrastructure");
    let item_id = line.push_item(BudgetItem::new("Hosting", 2000.0).unwrap());
    budget.push_line(line);

    let expenses = vec![
        linked_expense("Server bill", 500.0, item_id),
        linked_expense("CDN bill", 700.0, item_id),
    ];

    let outcome = BudgetService::reconcile(std::slice::from_ref(&budget), &expenses);
    assert!(outcome.faults.is_empty());

    let report = &outcome.reports[0];
    let item = &report.lines[0].items[0];
    assert_eq!(item.spent, 1200.0);
    assert_eq!(item.remaining, 800.0);
    assert_eq!(report.total_spent, 1200.0);
    assert_eq!(report.utilization, 24.0);
    assert_eq!(report.health, BudgetHealth::UnderBudget);
}

#[test]
fn line_totals_conserve_item_totals() {
    let mut budget = year_budget(10_000.0);

    let mut first_line = BudgetLine::new("Infrastructure");
    let hosting = first_line.push_item(BudgetItem::new("Hosting", 2000.0).unwrap());
    let tooling = first_line.push_item(BudgetItem::new("Tooling", 1000.0).unwrap());
    budget.push_line(first_line);

    let mut second_line = BudgetLine::new("People");
    let training = second_line.push_item(BudgetItem::new("Training", 3000.0).unwrap());
    budget.push_line(second_line);

    let expenses = vec![
        linked_expense("Server bill", 400.0, hosting),
        linked_expense("IDE licenses", 250.0, tooling),
        linked_expense("Conference", 900.0, training),
        linked_expense("Workshop", 100.0, training),
    ];

    let outcome = BudgetService::reconcile(std::slice::from_ref(&budget), &expenses);
    let report = &outcome.reports[0];

    let item_sum: f64 = report
        .lines
        .iter()
        .flat_map(|line| line.items.iter())
        .map(|item| item.spent)
        .sum();
    let line_sum: f64 = report.lines.iter().map(|line| line.spent).sum();
    assert_eq!(item_sum, report.total_spent);
    assert_eq!(line_sum, report.total_spent);
    assert_eq!(report.total_spent, 1650.0);
}

#[test]
fn unlinked_and_dangling_expenses_stay_out_of_totals() {
    let mut budget = year_budget(1000.0);
    let mut line = BudgetLine::new("Ops");
    let item_id = line.push_item(BudgetItem::new("Hosting", 500.0).unwrap());
    budget.push_line(line);

    let unlinked = Expense::new("Ops", "Untracked", 50.0).unwrap();
    let dangling_item = Uuid::new_v4();
    let dangling = linked_expense("Orphaned", 75.0, dangling_item);
    let linked = linked_expense("Server bill", 200.0, item_id);

    let outcome =
        BudgetService::reconcile(std::slice::from_ref(&budget), &[unlinked, dangling.clone(), linked]);

    let report = &outcome.reports[0];
    assert_eq!(report.total_spent, 200.0);
    assert_eq!(
        outcome.faults,
        vec![Fault::DanglingReference {
            expense: dangling.id,
            item: dangling_item,
        }]
    );
}

#[test]
fn an_expense_contributes_to_exactly_one_budget() {
    let mut first = year_budget(1000.0);
    let mut first_line = BudgetLine::new("Ops");
    let first_item = first_line.push_item(BudgetItem::new("Hosting", 500.0).unwrap());
    first.push_line(first_line);

    let mut second = year_budget(2000.0);
    let mut second_line = BudgetLine::new("Marketing");
    second_line.push_item(BudgetItem::new("Ads", 800.0).unwrap());
    second.push_line(second_line);

    let expenses = vec![linked_expense("Server bill", 300.0, first_item)];
    let outcome = BudgetService::reconcile(&[first, second], &expenses);

    assert_eq!(outcome.reports[0].total_spent, 300.0);
    assert_eq!(outcome.reports[1].total_spent, 0.0);
}

#[test]
fn zero_allocation_budget_reports_zero_utilization() {
    let mut budget = year_budget(0.0);
    let mut line = BudgetLine::new("Ops");
    let item_id = line.push_item(BudgetItem::new("Hosting", 0.0).unwrap());
    budget.push_line(line);

    let expenses = vec![linked_expense("Server bill", 10.0, item_id)];
    let outcome = BudgetService::reconcile(std::slice::from_ref(&budget), &expenses);
    assert_eq!(outcome.reports[0].utilization, 0.0);
    assert_eq!(outcome.reports[0].health, BudgetHealth::OverBudget);
}

#[test]
fn detaching_before_deletion_preserves_expenses() {
    let mut budget = year_budget(1000.0);
    let mut line = BudgetLine::new("Ops");
    let item_id = line.push_item(BudgetItem::new("Hosting", 500.0).unwrap());
    budget.push_line(line);

    let mut expenses = vec![
        linked_expense("Server bill", 120.0, item_id),
        linked_expense("CDN bill", 60.0, item_id),
    ];

    let budgets = vec![budget.clone()];
    let detached = BudgetService::detach_expenses(&budgets, budget.id, &mut expenses).unwrap();
    assert_eq!(detached, 2);
    assert_eq!(expenses.len(), 2);
    assert!(expenses.iter().all(|expense| expense.budget_item_id.is_none()));

    // Reconciling the surviving budgets finds nothing linked anymore.
    let outcome = BudgetService::reconcile(&[], &expenses);
    assert!(outcome.reports.is_empty());
    assert!(outcome.faults.is_empty());
}

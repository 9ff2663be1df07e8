use chrono::NaiveDate;

use remit_core::{ReminderService, DEFAULT_HORIZON_DAYS};
use remit_domain::{EntityKind, Expense, ExpenseStatus, Invoice, InvoiceStatus};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sent_invoice(client: &str, due: NaiveDate) -> Invoice {
    let mut invoice = Invoice::new(client, 100.0, due).unwrap();
    invoice.status = InvoiceStatus::Sent;
    invoice
}

fn due_expense(description: &str, due: NaiveDate) -> Expense {
    Expense::new("Ops", description, 40.0)
        .unwrap()
        .with_due_date(due)
}

#[test]
fn invoice_inside_horizon_emits_one_reminder() {
    let today = date(2024, 11, 1);
    let invoice = sent_invoice("Acme", date(2024, 11, 4));
    let reminders = ReminderService::scan(&[invoice.clone()], &[], today, DEFAULT_HORIZON_DAYS);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].entity, EntityKind::Invoice);
    assert_eq!(reminders[0].entity_id, invoice.id);
    assert_eq!(reminders[0].date, date(2024, 11, 4));
    assert!(!reminders[0].is_read);
}

#[test]
fn horizon_edges_are_inclusive_below_and_exclusive_above() {
    let today = date(2024, 11, 1);
    let at_edge = sent_invoice("Edge", date(2024, 11, 4));
    let past_edge = sent_invoice("Past", date(2024, 11, 5));
    let due_today = sent_invoice("Today", today);
    let yesterday = sent_invoice("Late", date(2024, 10, 31));

    let reminders = ReminderService::scan(
        &[at_edge, past_edge, due_today, yesterday],
        &[],
        today,
        3,
    );

    let clients: Vec<&str> = reminders
        .iter()
        .map(|reminder| reminder.message.split_whitespace().nth(2).unwrap())
        .collect();
    assert_eq!(clients, vec!["Today", "Edge"]);
}

#[test]
fn paid_invoices_never_remind() {
    let today = date(2024, 11, 1);
    let mut invoice = sent_invoice("Acme", date(2024, 11, 4));
    let reminders = ReminderService::scan(std::slice::from_ref(&invoice), &[], today, 3);
    assert_eq!(reminders.len(), 1);

    invoice.status = InvoiceStatus::Paid;
    let reminders = ReminderService::scan(std::slice::from_ref(&invoice), &[], today, 3);
    assert!(reminders.is_empty());
}

#[test]
fn paid_expenses_still_remind() {
    let today = date(2024, 11, 1);
    let mut expense = due_expense("Hosting", date(2024, 11, 3));
    expense.status = ExpenseStatus::Paid;
    let reminders = ReminderService::scan(&[], std::slice::from_ref(&expense), today, 3);
    assert_eq!(reminders.len(), 1);
}

#[test]
fn expenses_without_due_dates_are_skipped() {
    let today = date(2024, 11, 1);
    let undated = Expense::new("Ops", "No deadline", 10.0).unwrap();
    let dated = due_expense("Hosting", date(2024, 11, 2));
    let reminders = ReminderService::scan(&[], &[undated, dated], today, 3);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].date, date(2024, 11, 2));
}

#[test]
fn zero_horizon_only_reminds_documents_due_today() {
    let today = date(2024, 11, 1);
    let due_today = sent_invoice("Today", today);
    let tomorrow = sent_invoice("Tomorrow", date(2024, 11, 2));
    let reminders = ReminderService::scan(&[due_today, tomorrow], &[], today, 0);
    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].date, today);
}

#[test]
fn output_is_date_ordered_with_invoices_winning_ties() {
    let today = date(2024, 11, 1);
    let invoices = vec![
        sent_invoice("Later", date(2024, 11, 3)),
        sent_invoice("Sooner", date(2024, 11, 2)),
    ];
    let expenses = vec![
        due_expense("Tie with invoice", date(2024, 11, 3)),
        due_expense("First", date(2024, 11, 1)),
    ];

    let reminders = ReminderService::scan(&invoices, &expenses, today, 3);

    let dates: Vec<NaiveDate> = reminders.iter().map(|reminder| reminder.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2024, 11, 1),
            date(2024, 11, 2),
            date(2024, 11, 3),
            date(2024, 11, 3),
        ]
    );
    // Stable sort: the invoice due Nov 3 precedes the expense due Nov 3.
    assert_eq!(reminders[2].entity, EntityKind::Invoice);
    assert_eq!(reminders[3].entity, EntityKind::Expense);
}

#[test]
fn overdue_stored_status_does_not_suppress_future_reminders() {
    // A record stored as Overdue but with a due date back inside the
    // window still reminds; only Paid suppresses.
    let today = date(2024, 11, 1);
    let mut invoice = sent_invoice("Acme", date(2024, 11, 2));
    invoice.status = InvoiceStatus::Overdue;
    let reminders = ReminderService::scan(std::slice::from_ref(&invoice), &[], today, 3);
    assert_eq!(reminders.len(), 1);
}

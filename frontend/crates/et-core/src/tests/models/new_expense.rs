use crate::{Category, NewExpense, SetBudget, BudgetPeriod};

use chrono::NaiveDate;
use rust_decimal::Decimal;

fn coffee() -> NewExpense {
    NewExpense::new(
        "Coffee",
        Decimal::new(450, 2),
        Category::Food,
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
    )
}

#[test]
fn test_new_expense_serializes_wire_shape() {
    let body = serde_json::to_value(coffee()).unwrap();

    assert_eq!(body["title"], "Coffee");
    assert_eq!(body["amount"], 4.5);
    assert_eq!(body["category"], "Food");
    assert_eq!(body["date"], "2024-03-05");
    assert!(body.get("notes").is_none());
}

#[test]
fn test_new_expense_blank_notes_dropped() {
    assert!(coffee().with_notes("   ").notes.is_none());
    assert_eq!(coffee().with_notes("latte").notes.as_deref(), Some("latte"));
}

#[test]
fn test_new_expense_validate() {
    assert!(coffee().validate().is_ok());

    let mut blank = coffee();
    blank.title = "  ".into();
    assert_eq!(blank.validate().unwrap_err().field(), Some("title"));

    let mut free = coffee();
    free.amount = Decimal::ZERO;
    assert_eq!(free.validate().unwrap_err().field(), Some("amount"));
}

#[test]
fn test_set_budget_validate() {
    let period = BudgetPeriod::new(3, 2024).unwrap();

    assert!(SetBudget::new(period, Decimal::ZERO).validate().is_ok());
    assert!(SetBudget::new(period, Decimal::from(-1)).validate().is_err());

    let body = serde_json::to_value(SetBudget::new(period, Decimal::from(250))).unwrap();
    assert_eq!(body["month"], 3);
    assert_eq!(body["year"], 2024);
    assert_eq!(body["limit"], 250.0);
}

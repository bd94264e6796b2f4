use crate::{BudgetPeriod, Category, Expense};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::json;

#[test]
fn test_expense_deserializes_backend_payload() {
    let expense: Expense = serde_json::from_value(json!({
        "id": 7,
        "userId": 3,
        "title": "Coffee",
        "amount": 4.5,
        "category": "Food",
        "date": "2024-03-05",
        "notes": "oat milk"
    }))
    .unwrap();

    assert_eq!(expense.id, 7);
    assert_eq!(expense.user_id, 3);
    assert_eq!(expense.amount, Decimal::new(45, 1));
    assert_eq!(expense.category, Category::Food);
    assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(expense.notes.as_deref(), Some("oat milk"));
}

#[test]
fn test_expense_date_time_is_truncated_to_date() {
    let expense: Expense = serde_json::from_value(json!({
        "id": 1,
        "userId": 1,
        "title": "Bus",
        "amount": 2,
        "category": "Transport",
        "date": "2024-03-05T00:00:00"
    }))
    .unwrap();

    assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert!(expense.notes.is_none());
}

#[test]
fn test_expense_rejects_garbage_date() {
    let result = serde_json::from_value::<Expense>(json!({
        "id": 1,
        "userId": 1,
        "title": "Bus",
        "amount": 2,
        "category": "Transport",
        "date": "yesterday"
    }));

    assert!(result.is_err());
}

#[test]
fn test_expense_is_in_period() {
    let expense = crate::tests::expense(1, Category::Food, 450, (2024, 3, 5));

    assert!(expense.is_in(&BudgetPeriod::new(3, 2024).unwrap()));
    assert!(!expense.is_in(&BudgetPeriod::new(3, 2023).unwrap()));
    assert!(!expense.is_in(&BudgetPeriod::new(4, 2024).unwrap()));
}

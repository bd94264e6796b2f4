use crate::BudgetPeriod;

use chrono::NaiveDate;

#[test]
fn test_budget_period_rejects_month_out_of_range() {
    assert!(BudgetPeriod::new(0, 2024).is_err());
    assert!(BudgetPeriod::new(13, 2024).is_err());
    assert!(BudgetPeriod::new(12, 2024).is_ok());
}

#[test]
fn test_budget_period_rejects_year_out_of_range() {
    assert!(BudgetPeriod::new(1, 1969).is_err());
    assert!(BudgetPeriod::new(1, 10000).is_err());
}

#[test]
fn test_budget_period_display() {
    assert_eq!(BudgetPeriod::new(3, 2024).unwrap().to_string(), "March 2024");
}

#[test]
fn test_budget_period_with_month_keeps_year() {
    let period = BudgetPeriod::new(3, 2024).unwrap().with_month(11).unwrap();
    assert_eq!(period.month(), 11);
    assert_eq!(period.year(), 2024);
}

#[test]
fn test_budget_period_of_date() {
    let period = BudgetPeriod::of(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    assert_eq!(period, BudgetPeriod::new(1, 2025).unwrap());
}

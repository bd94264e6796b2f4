use crate::{Budget, BudgetLookup};

use rust_decimal::Decimal;

fn budget(limit: i64) -> Budget {
    Budget {
        id: 1,
        user_id: 1,
        month: 3,
        year: 2024,
        limit: Decimal::from(limit),
    }
}

#[test]
fn test_budget_lookup_not_set() {
    let lookup = BudgetLookup::NotSet;
    assert!(!lookup.is_set());
    assert_eq!(lookup.limit(), None);
}

#[test]
fn test_budget_lookup_found() {
    let lookup = BudgetLookup::Found(budget(500));
    assert!(lookup.is_set());
    assert_eq!(lookup.limit(), Some(Decimal::from(500)));
}

#[test]
fn test_budget_lookup_from_option() {
    assert_eq!(BudgetLookup::from(None), BudgetLookup::NotSet);
    assert_eq!(
        BudgetLookup::from(Some(budget(10))),
        BudgetLookup::Found(budget(10))
    );
}

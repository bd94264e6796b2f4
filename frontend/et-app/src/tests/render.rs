use super::expense;
use crate::Renderer;
use crate::render::{NOT_SET, progress_bar};

use et_core::{Budget, BudgetLookup, BudgetPeriod, SpendingSummary, UserProfile};

use googletest::prelude::*;
use rust_decimal::Decimal;

fn march() -> BudgetPeriod {
    BudgetPeriod::new(3, 2024).unwrap()
}

fn budget(limit: i64) -> BudgetLookup {
    BudgetLookup::Found(Budget {
        id: 1,
        user_id: 1,
        month: 3,
        year: 2024,
        limit: Decimal::from(limit),
    })
}

#[test]
fn given_amounts_when_formatted_then_two_decimals_with_symbol() {
    let renderer = Renderer::new("₹");

    assert_that!(renderer.amount(Decimal::new(45, 1)).as_str(), eq("₹4.50"));
    assert_that!(renderer.amount(Decimal::from(1200)).as_str(), eq("₹1200.00"));
    assert_that!(renderer.amount(Decimal::new(-2005, 2)).as_str(), eq("-₹20.05"));
    assert_that!(renderer.amount(Decimal::ZERO).as_str(), eq("₹0.00"));
}

#[test]
fn given_progress_values_when_drawn_then_bar_is_clamped() {
    assert_that!(progress_bar(Decimal::ZERO).as_str(), eq("[....................]"));
    assert_that!(progress_bar(Decimal::from(50)).as_str(), eq("[##########..........]"));
    assert_that!(progress_bar(Decimal::from(100)).as_str(), eq("[####################]"));
    assert_that!(progress_bar(Decimal::from(250)).as_str(), eq("[####################]"));
    assert_that!(progress_bar(Decimal::from(-5)).as_str(), eq("[....................]"));
}

#[test]
fn given_no_budget_when_rendering_dashboard_then_shows_not_set_and_zero_progress() {
    let renderer = Renderer::new("$");
    let expenses = vec![expense(1, "Coffee", 450, (2024, 3, 5))];
    let summary = SpendingSummary::compute(&expenses, &BudgetLookup::NotSet);

    let out = renderer.dashboard(march(), &summary, None);

    assert_that!(out.as_str(), contains_substring(format!("Budget:       {NOT_SET}")));
    assert_that!(out.as_str(), contains_substring("Remaining:    -$4.50"));
    assert_that!(out.as_str(), contains_substring("[....................] 0%"));
    assert_that!(out.as_str(), contains_substring("05 Mar  $4.50"));
    assert_that!(out.contains("over budget"), eq(false));
}

#[test]
fn given_overspent_budget_when_rendering_dashboard_then_bar_full_and_flagged() {
    let renderer = Renderer::new("$");
    let expenses = vec![
        expense(1, "Rent", 90000, (2024, 3, 1)),
        expense(2, "Food", 30000, (2024, 3, 2)),
    ];
    let summary = SpendingSummary::compute(&expenses, &budget(1000));

    let out = renderer.dashboard(march(), &summary, None);

    assert_that!(out.as_str(), contains_substring("[####################] 100%"));
    assert_that!(out.as_str(), contains_substring("(over budget)"));
    assert_that!(out.as_str(), contains_substring("Remaining:    -$200.00"));
}

#[test]
fn given_profile_when_rendering_dashboard_then_greets_by_name() {
    let renderer = Renderer::new("₹");
    let summary = SpendingSummary::compute(&[], &budget(500));
    let profile = UserProfile::new(Some("Asha".to_string()), "asha@example.com");

    let out = renderer.dashboard(march(), &summary, Some(&profile));

    assert_that!(out.as_str(), contains_substring("Welcome, Asha"));
    assert_that!(out.as_str(), contains_substring("Dashboard for March 2024"));
    assert_that!(out.as_str(), contains_substring("Budget:       ₹500.00"));
}

#[test]
fn given_expenses_when_listed_then_one_line_each_with_notes() {
    let renderer = Renderer::new("₹");
    let mut coffee = expense(9, "Coffee", 450, (2024, 3, 5));
    coffee.notes = Some("oat milk".to_string());

    let out = renderer.expenses("March 2024", &[coffee, expense(10, "Lunch", 1200, (2024, 3, 6))]);

    assert_that!(out.lines().count(), eq(3));
    assert_that!(out.as_str(), contains_substring("Coffee (oat milk)"));
    assert_that!(out.as_str(), contains_substring("2024-03-06"));
}

#[test]
fn given_no_expenses_when_listed_then_says_so() {
    let renderer = Renderer::new("₹");

    assert_that!(
        renderer.expenses("March 2024", &[]).as_str(),
        eq("No expenses for March 2024")
    );
}

#[test]
fn given_budget_lookup_when_rendered_then_shows_limit_or_not_set() {
    let renderer = Renderer::new("₹");

    assert_that!(
        renderer.budget(march(), &budget(800)).as_str(),
        eq("Budget for March 2024: ₹800.00")
    );
    assert_that!(
        renderer.budget(march(), &BudgetLookup::NotSet).as_str(),
        eq("Budget for March 2024: Not Set")
    );
}

use crate::Category;

use std::str::FromStr;

#[test]
fn test_category_as_str() {
    assert_eq!(Category::Food.as_str(), "Food");
    assert_eq!(Category::Entertainment.as_str(), "Entertainment");
    assert_eq!(Category::Others.as_str(), "Others");
}

#[test]
fn test_category_from_str_is_case_insensitive() {
    assert_eq!(Category::from_str("Food").unwrap(), Category::Food);
    assert_eq!(Category::from_str("transport").unwrap(), Category::Transport);
    assert_eq!(Category::from_str(" HEALTH ").unwrap(), Category::Health);
}

#[test]
fn test_category_from_str_invalid() {
    let err = Category::from_str("Groceries").unwrap_err();
    assert!(err.to_string().contains("Groceries"));
}

#[test]
fn test_category_all_round_trips_through_from_str() {
    for category in Category::ALL {
        assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
    }
}

#[test]
fn test_unknown_wire_category_folds_into_others() {
    let category: Category = serde_json::from_str("\"Travel\"").unwrap();
    assert_eq!(category, Category::Others);

    let category: Category = serde_json::from_str("\"Shopping\"").unwrap();
    assert_eq!(category, Category::Shopping);
}

#[test]
fn test_wire_category_is_case_insensitive() {
    let category: Category = serde_json::from_str("\"food\"").unwrap();
    assert_eq!(category, Category::Food);

    let category: Category = serde_json::from_str("\"HEALTH\"").unwrap();
    assert_eq!(category, Category::Health);

    let category: Category = serde_json::from_str("\"Pets\"").unwrap();
    assert_eq!(category, Category::Others);
}

#[test]
fn test_wire_category_rejects_non_string() {
    assert!(serde_json::from_str::<Category>("3").is_err());
}

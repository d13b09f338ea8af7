#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_new() {
    let cat = Category::new("Food".into(), dec!(3000), "orange".into());
    assert_eq!(cat.name, "Food");
    assert_eq!(cat.limit, dec!(3000));
    assert_eq!(cat.spent, Decimal::ZERO);
    assert_eq!(cat.color, "orange");
}

#[test]
fn test_category_over_budget() {
    let mut cat = Category::new("Rent".into(), dec!(4000), "blue".into());
    assert!(!cat.is_over_budget());
    assert_eq!(cat.overspend(), Decimal::ZERO);

    cat.spent = dec!(4000);
    // At the limit is not over it
    assert!(!cat.is_over_budget());

    cat.spent = dec!(4200);
    assert!(cat.is_over_budget());
    assert_eq!(cat.overspend(), dec!(200));
}

#[test]
fn test_category_find_by_name() {
    let cats = vec![
        Category::new("Food".into(), dec!(3000), "orange".into()),
        Category::new("Travel".into(), dec!(2000), "green".into()),
    ];
    assert_eq!(Category::find_by_name(&cats, "Travel").unwrap().limit, dec!(2000));
    assert!(Category::find_by_name(&cats, "travel").is_none());
    assert!(Category::find_by_name(&cats, "Gym").is_none());
}

#[test]
fn test_category_display() {
    let cat = Category::new("Shopping".into(), dec!(1500), "pink".into());
    assert_eq!(format!("{cat}"), "Shopping");
}

// ── Expense ───────────────────────────────────────────────────

#[test]
fn test_expense_new() {
    let e = Expense::new(
        dec!(250),
        "Food".into(),
        "orange".into(),
        "2025-09-28".into(),
        "Lunch".into(),
    );
    assert_eq!(e.amount, dec!(250));
    assert_eq!(e.category, "Food");
    assert_eq!(e.category_color, "orange");
    assert_eq!(e.date, "2025-09-28");
    assert_eq!(e.notes, "Lunch");
}

#[test]
fn test_expense_today_date_format() {
    let e = Expense::today(dec!(10), "Food".into(), "orange".into(), String::new());
    // YYYY-MM-DD
    assert_eq!(e.date.len(), 10);
    assert_eq!(e.date.as_bytes()[4], b'-');
    assert_eq!(e.date.as_bytes()[7], b'-');
}

// ── Alert ─────────────────────────────────────────────────────

#[test]
fn test_alert_over_budget_message() {
    let mut cat = Category::new("Entertainment".into(), dec!(2000), "purple".into());
    cat.spent = dec!(2300);
    let alert = Alert::over_budget(&cat);
    assert!(alert.mentions("Entertainment"));
    assert!(alert.message.contains("300"));
}

// ── UserData serde shape ──────────────────────────────────────

fn sample_data() -> UserData {
    let mut food = Category::new("Food".into(), dec!(3000), "orange".into());
    food.spent = dec!(250);
    UserData {
        schema_version: SCHEMA_VERSION,
        monthly_income: dec!(15000),
        total_budget: dec!(12000),
        spent: dec!(250),
        categories: vec![food],
        expenses: vec![Expense::new(
            dec!(250),
            "Food".into(),
            "orange".into(),
            "2025-09-28".into(),
            "Lunch".into(),
        )],
        alerts: vec![],
        ai_suggestions: vec!["tip".into()],
        badges: vec!["Smart Saver".into()],
        savings_goal: dec!(5000),
        current_savings: dec!(2300),
    }
}

#[test]
fn test_user_data_json_field_names() {
    let json = serde_json::to_string(&sample_data()).unwrap();
    assert!(json.contains("\"monthlyIncome\""));
    assert!(json.contains("\"totalBudget\""));
    assert!(json.contains("\"aiSuggestions\""));
    assert!(json.contains("\"savingsGoal\""));
    assert!(json.contains("\"currentSavings\""));
    assert!(json.contains("\"categoryColor\""));
    assert!(json.contains("\"schemaVersion\""));
}

#[test]
fn test_user_data_roundtrip() {
    let data = sample_data();
    let json = serde_json::to_string(&data).unwrap();
    let back: UserData = serde_json::from_str(&json).unwrap();
    assert_eq!(back, data);
}

#[test]
fn test_user_data_missing_schema_version_defaults() {
    // Documents written before the version field existed still load.
    let mut value = serde_json::to_value(sample_data()).unwrap();
    value.as_object_mut().unwrap().remove("schemaVersion");
    let back: UserData = serde_json::from_value(value).unwrap();
    assert_eq!(back.schema_version, SCHEMA_VERSION);
}

#[test]
fn test_user_data_category_lookup() {
    let data = sample_data();
    assert!(data.category("Food").is_some());
    assert!(data.category("Gym").is_none());
}

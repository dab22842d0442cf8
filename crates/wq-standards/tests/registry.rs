//! Tests for the built-in guideline registry.

use wq_model::Limit;
use wq_standards::{GuidelineRegistry, guidelines};

#[test]
fn builtin_table_has_eleven_parameters() {
    let registry = GuidelineRegistry::builtin();
    assert_eq!(registry.len(), 11);
    assert!(!registry.is_empty());
}

#[test]
fn table_order_is_preserved() {
    let names: Vec<&str> = guidelines().names().collect();
    assert_eq!(names.first(), Some(&"BOD5 (mg/L)"));
    assert_eq!(names.get(2), Some(&"pH (-)"));
    assert_eq!(names.last(), Some(&"Cobalt (mg/L)"));
}

#[test]
fn ph_is_the_only_range_limit() {
    let range_named: Vec<&str> = guidelines()
        .iter()
        .filter(|entry| matches!(entry.who, Limit::Range { .. }))
        .map(|entry| entry.name)
        .collect();
    assert_eq!(range_named, vec!["pH (-)"]);
}

#[test]
fn lookup_by_exact_name() {
    let registry = guidelines();
    let cod = registry.get("COD (mg/L)").expect("COD entry");
    assert_eq!(cod.who, Limit::scalar(10.0));
    assert_eq!(cod.ecr, Limit::scalar(4.0));
    assert!(registry.get("Lead (mg/L)").is_none());
    assert!(registry.contains("Free ammonia (mg/L)"));
}

#[test]
fn who_and_ecr_limits_match_the_published_values() {
    let registry = guidelines();
    let temperature = registry.get("Temperature (°C)").expect("temperature");
    assert_eq!(temperature.who, Limit::scalar(25.0));
    assert_eq!(temperature.ecr, Limit::scalar(30.0));

    let cobalt = registry.get("Cobalt (mg/L)").expect("cobalt");
    assert_eq!(cobalt.who, Limit::scalar(0.01));
    assert_eq!(cobalt.ecr, Limit::scalar(0.01));
}

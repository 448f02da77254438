//! Service bodies validated against the generated JSON Schema, then taken
//! through validation and evaluation the way a controller and renderer would.

use peek_core::evaluator;
use peek_core::{Comparison, ComparisonResponse, ContractError, Platform};
use pretty_assertions::assert_eq;
use schemars::schema_for;

fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn response_schema() -> serde_json::Value {
    serde_json::to_value(schema_for!(ComparisonResponse)).unwrap()
}

#[test]
fn success_body_matches_schema() {
    let body = serde_json::json!({
        "product_name": "Samsung Galaxy S24 Ultra 512GB Phantom Black",
        "amazon_url": "https://www.amazon.in/dp/B0CS5XW6TN",
        "flipkart_url": "https://www.flipkart.com/samsung-galaxy-s24-ultra/p/itm12ef5ea0212ed",
        "amazon_price": 139999,
        "flipkart_price": 141999,
        "cheaper_platform": "Amazon",
        "message": "Prices fetched just now",
        "error": null
    });

    let errors = validate_against_schema(&response_schema(), &body);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let parsed: ComparisonResponse = serde_json::from_value(body).unwrap();
    let comparison = Comparison::try_from(parsed).unwrap();
    let facts = evaluator::facts(&comparison);

    assert_eq!(facts.cheaper_platform, Platform::Amazon);
    assert_eq!(facts.cheaper_price, 139_999.0);
    assert_eq!(facts.savings_amount, 2000.0);
    assert!(facts.is_best_price(Platform::Amazon));
    assert!(!facts.is_best_price(Platform::Flipkart));
}

#[test]
fn error_body_matches_schema() {
    let body = serde_json::json!({ "error": "No matching product found" });

    let errors = validate_against_schema(&response_schema(), &body);
    assert!(errors.is_empty(), "schema errors: {errors:?}");

    let parsed: ComparisonResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.failure(), Some("No matching product found"));
}

#[test]
fn string_price_violates_schema() {
    let body = serde_json::json!({ "amazon_price": "79,900" });
    let errors = validate_against_schema(&response_schema(), &body);
    assert!(!errors.is_empty());
}

#[test]
fn price_free_success_body_is_a_contract_violation() {
    let body: ComparisonResponse = serde_json::from_value(serde_json::json!({
        "product_name": "Mystery box",
        "cheaper_platform": "Amazon",
        "error": null
    }))
    .unwrap();

    assert!(body.failure().is_none());
    assert_eq!(
        Comparison::try_from(body).unwrap_err(),
        ContractError::MissingPrice {
            field: "amazon_price"
        }
    );
}

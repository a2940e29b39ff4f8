// Wire-contract checks for the bills surface.

use chrono::Utc;
use rust_decimal_macros::dec;
use serde_json::json;
use utility_billing::core::BillingMonth;
use utility_billing::modules::bills::models::{Bill, CreateBillRequest};
use uuid::Uuid;

fn sample_bill() -> Bill {
    Bill {
        id: Uuid::new_v4(),
        house_id: "H1".to_string(),
        billing_month: BillingMonth::parse("2024-06").unwrap(),
        water_unit: dec!(55),
        water_usage: dec!(90),
        electricity_unit: dec!(230),
        electricity_usage: dec!(300),
        rent: dec!(3000),
        internet: Some(dec!(500)),
        total: dec!(3890),
        created_at: Utc::now(),
    }
}

#[test]
fn test_bill_keeps_stored_column_names() {
    let value = serde_json::to_value(sample_bill()).unwrap();

    for field in [
        "id",
        "house_id",
        "billing_month",
        "water_unit",
        "water_usage",
        "electricity_unit",
        "electricity_usage",
        "rent",
        "internet",
        "total",
        "created_at",
    ] {
        assert!(value.get(field).is_some(), "Bill must include '{}'", field);
    }
}

#[test]
fn test_billing_month_serializes_as_first_of_month() {
    let value = serde_json::to_value(sample_bill()).unwrap();

    assert_eq!(value["billing_month"], json!("2024-06-01"));
}

#[test]
fn test_bill_amounts_travel_as_json_numbers() {
    let value = serde_json::to_value(sample_bill()).unwrap();

    assert!(value["id"].is_string(), "id must be a uuid string");
    assert!(value["water_usage"].is_number(), "charges must be numbers");
    assert!(value["total"].is_number(), "total must be a number");
    assert!(
        value["created_at"].is_string(),
        "created_at must be a timestamp string"
    );
}

#[test]
fn test_bill_round_trips_exact_amounts() {
    let value = serde_json::to_value(sample_bill()).unwrap();
    let back: Bill = serde_json::from_value(value).unwrap();

    assert_eq!(back.water_usage, dec!(90));
    assert_eq!(back.electricity_usage, dec!(300));
    assert_eq!(back.total, dec!(3890));
}

#[test]
fn test_create_request_accepts_browser_payload() {
    // The form client posts a Date serialization for the month plus fields
    // the server recomputes anyway. Unknown keys must be ignored, not
    // rejected.
    let request: CreateBillRequest = serde_json::from_value(json!({
        "water": 55,
        "electricity": 230,
        "rent": 3000,
        "internet": 500,
        "billing_month": "2024-06-15T07:21:00.000Z",
        "updateAt": "2024-06-15T07:21:00.000Z",
        "total": 9999
    }))
    .unwrap();

    let input = request.into_input().unwrap();

    assert_eq!(input.water, dec!(55));
    assert_eq!(input.electricity, dec!(230));
    assert_eq!(input.rent, dec!(3000));
    assert_eq!(input.internet, Some(dec!(500)));
    assert_eq!(
        input.billing_month,
        BillingMonth::parse("2024-06").unwrap()
    );
}

#[test]
fn test_create_request_tolerates_minimal_payload() {
    let request: CreateBillRequest = serde_json::from_value(json!({
        "water": 55,
        "electricity": 230,
        "rent": 3000,
        "billing_month": "2024-06"
    }))
    .unwrap();

    let input = request.into_input().unwrap();
    assert_eq!(input.internet, None);
}

#[test]
fn test_validation_messages_are_pinned() {
    let missing_month: CreateBillRequest =
        serde_json::from_value(json!({"water": 55, "electricity": 230, "rent": 3000})).unwrap();
    assert_eq!(
        missing_month.into_input().unwrap_err().to_string(),
        "billing_month is required"
    );

    let missing_water: CreateBillRequest =
        serde_json::from_value(json!({"electricity": 230, "rent": 3000, "billing_month": "2024-06"}))
            .unwrap();
    assert_eq!(
        missing_water.into_input().unwrap_err().to_string(),
        "water is required"
    );
}

#[test]
fn test_prev_bill_miss_is_a_json_null() {
    // GET /api/bills/prev-bill answers 200 with a null body when no prior
    // cycle exists; clients branch on that, not on a 404.
    let body = serde_json::to_string(&Option::<Bill>::None).unwrap();

    assert_eq!(body, "null");
}

#[test]
fn test_error_body_shape() {
    let error_body = json!({"error": "Invalid houseId"});

    assert!(
        error_body["error"].is_string(),
        "error responses carry a single 'error' string"
    );
}

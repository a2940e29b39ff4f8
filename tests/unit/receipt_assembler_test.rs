// Receipt shaping: line ordering, labels, and presentation rounding.

use chrono::Utc;
use rust_decimal_macros::dec;
use utility_billing::core::{AppError, BillingMonth};
use utility_billing::modules::bills::models::Bill;
use utility_billing::modules::houses::models::House;
use utility_billing::modules::receipts::services::ReceiptAssembler;
use uuid::Uuid;

fn house(id: &str) -> House {
    House {
        id: id.to_string(),
        name: "Front house".to_string(),
        rent_base: dec!(3000),
        internet_base: Some(dec!(500)),
        water_unit_base: Some(dec!(6)),
        electricity_unit_base: Some(dec!(10)),
        created_at: Utc::now(),
    }
}

/// May cycle for H1: first bill, charges cover the whole readings
fn may_bill() -> Bill {
    Bill {
        id: Uuid::new_v4(),
        house_id: "H1".to_string(),
        billing_month: BillingMonth::parse("2024-05").unwrap(),
        water_unit: dec!(40),
        water_usage: dec!(240),
        electricity_unit: dec!(200),
        electricity_usage: dec!(2000),
        rent: dec!(3000),
        internet: Some(dec!(500)),
        total: dec!(5740),
        created_at: Utc::now(),
    }
}

/// June cycle for H1, derived against the May bill
fn june_bill() -> Bill {
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
fn test_receipt_for_cycle_with_history() {
    let assembler = ReceiptAssembler::new();
    let previous = may_bill();
    let current = june_bill();

    let receipt = assembler
        .assemble(&house("H1"), &current, Some(&previous))
        .unwrap();

    assert_eq!(receipt.house_number, "H1");
    assert_eq!(receipt.month, "June");
    assert_eq!(receipt.year, "2024");

    let water = &receipt.items[0];
    assert_eq!(water.name, "ค่าน้ำ");
    assert_eq!(water.previous, "40");
    assert_eq!(water.current, "55");
    assert_eq!(water.units, "15");
    assert_eq!(water.price, "6.00");
    assert_eq!(water.amount, "90.00");

    let electricity = &receipt.items[1];
    assert_eq!(electricity.name, "ค่าไฟ");
    assert_eq!(electricity.previous, "200");
    assert_eq!(electricity.current, "230");
    assert_eq!(electricity.units, "30");
    assert_eq!(electricity.price, "10.00");
    assert_eq!(electricity.amount, "300.00");

    assert_eq!(receipt.house_rent, "3000.00");
    assert_eq!(receipt.internet, "500.00");
    assert_eq!(receipt.total, "3890.00");
}

#[test]
fn test_first_cycle_shows_zero_previous_readings() {
    let assembler = ReceiptAssembler::new();

    let receipt = assembler
        .assemble(&house("H1"), &may_bill(), None)
        .unwrap();

    assert_eq!(receipt.items[0].previous, "0");
    assert_eq!(receipt.items[0].current, "40");
    assert_eq!(receipt.items[0].units, "40");
    assert_eq!(receipt.items[1].previous, "0");
    assert_eq!(receipt.items[1].units, "200");
}

#[test]
fn test_water_line_always_comes_first() {
    let assembler = ReceiptAssembler::new();

    let receipt = assembler
        .assemble(&house("H1"), &june_bill(), Some(&may_bill()))
        .unwrap();

    let names: Vec<&str> = receipt.items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["ค่าน้ำ", "ค่าไฟ"]);
}

#[test]
fn test_readings_keep_recorded_precision() {
    let assembler = ReceiptAssembler::new();
    let mut previous = may_bill();
    previous.water_unit = dec!(40.2);
    let mut current = june_bill();
    current.water_unit = dec!(55.50);
    current.water_usage = dec!(91.8);

    let receipt = assembler
        .assemble(&house("H1"), &current, Some(&previous))
        .unwrap();

    // Meter readings stay untruncated; only money gets the two-decimal form.
    assert_eq!(receipt.items[0].previous, "40.2");
    assert_eq!(receipt.items[0].current, "55.5");
    assert_eq!(receipt.items[0].units, "15.3");
    assert_eq!(receipt.items[0].amount, "91.80");
}

#[test]
fn test_missing_internet_prints_as_zero() {
    let assembler = ReceiptAssembler::new();
    let mut current = june_bill();
    current.internet = None;
    current.total = dec!(3390);

    let receipt = assembler.assemble(&house("H1"), &current, None).unwrap();

    assert_eq!(receipt.internet, "0.00");
    assert_eq!(receipt.total, "3390.00");
}

#[test]
fn test_house_without_rate_cannot_be_receipted() {
    let assembler = ReceiptAssembler::new();
    let mut house = house("H1");
    house.water_unit_base = None;

    let err = assembler
        .assemble(&house, &june_bill(), None)
        .unwrap_err();

    assert!(matches!(err, AppError::Configuration(_)));
}

#[test]
fn test_filename_replaces_spaces_in_house_number() {
    let assembler = ReceiptAssembler::new();
    let mut current = june_bill();
    current.house_id = "Bldg A".to_string();

    let receipt = assembler
        .assemble(&house("Bldg A"), &current, None)
        .unwrap();

    assert_eq!(receipt.filename(), "receipt_Bldg_A_June_2024.pdf");
}

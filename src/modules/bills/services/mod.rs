pub mod billing_service;
pub mod usage_calculator;

pub use billing_service::BillingService;
pub use usage_calculator::UsageCalculator;

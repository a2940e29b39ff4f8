pub mod billing_month;
pub mod error;

pub use billing_month::BillingMonth;
pub use error::{AppError, Result};

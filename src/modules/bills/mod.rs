// Bills module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Bill, CreateBillRequest, NewBill};
pub use repositories::{BillStore, PgBillStore};
pub use services::{BillingService, UsageCalculator};

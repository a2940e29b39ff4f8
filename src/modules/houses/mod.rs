// Houses module

pub mod controllers;
pub mod models;
pub mod repositories;

pub use models::House;
pub use repositories::{HouseStore, PgHouseStore};

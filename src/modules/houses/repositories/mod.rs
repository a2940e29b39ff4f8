pub mod house_repository;

pub use house_repository::{HouseStore, PgHouseStore};

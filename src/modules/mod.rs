pub mod bills;
pub mod health;
pub mod houses;
pub mod receipts;

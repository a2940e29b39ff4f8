//! Household utility billing service library.
//!
//! Records monthly water and electricity readings per house, derives each
//! cycle's charges against the previous bill, and shapes the printable
//! receipt handed to the client-side PDF renderer.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used types
pub use modules::bills;
pub use modules::health;
pub use modules::houses;
pub use modules::receipts;

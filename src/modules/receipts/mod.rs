// Receipts module
//
// Receipts are derived documents, shaped here and rendered by the client's
// PDF painter. Nothing in this module is persisted or served directly.

pub mod models;
pub mod services;

pub use models::{Receipt, ReceiptItem};
pub use services::ReceiptAssembler;

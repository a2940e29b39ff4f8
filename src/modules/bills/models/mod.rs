pub mod bill;

pub use bill::{Bill, BillInput, CreateBillRequest, NewBill};

pub mod receipt_assembler;

pub use receipt_assembler::ReceiptAssembler;

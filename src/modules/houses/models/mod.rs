pub mod house;

pub use house::House;

pub mod house_controller;

pub use house_controller::configure;

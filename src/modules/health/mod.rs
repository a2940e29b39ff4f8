// Health module

pub mod controllers;

pub mod error;
pub mod generator;

pub mod calculate;
pub mod config;

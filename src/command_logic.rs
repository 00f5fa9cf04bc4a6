pub mod browse;
pub mod config;
pub mod search;

pub mod analysis;
pub mod config;
pub mod dictionary;
pub mod report;

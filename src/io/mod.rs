pub mod config;
pub mod reporting;
pub mod summary;

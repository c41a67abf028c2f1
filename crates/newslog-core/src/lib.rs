pub mod config;
pub mod errors;
pub mod model;
pub mod query;
pub mod questions;
pub mod report;
pub mod storage;
pub mod views;

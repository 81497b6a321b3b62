pub mod assembler;
pub mod config;
pub mod details;
pub mod error;
pub mod fetcher;
pub mod metrics;
pub mod names;
pub mod roster;
pub mod types;
pub mod utils;
pub mod web;

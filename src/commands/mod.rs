pub mod config;
pub mod log;
pub mod search;
pub mod workload;

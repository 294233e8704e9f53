pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod filtering;
pub mod format;
pub mod latency;
pub mod options;
pub mod paging;
pub mod service;

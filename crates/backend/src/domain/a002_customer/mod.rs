pub mod options;
pub mod repository;
pub mod service;

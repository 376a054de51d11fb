pub mod config;
pub mod data;
pub mod dialect;
pub mod err;

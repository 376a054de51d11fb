pub mod args;
pub mod commands;
pub mod conf;
pub mod session;

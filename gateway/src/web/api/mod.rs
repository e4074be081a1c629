pub mod config;
pub mod detect;
pub mod log;
pub mod upload;

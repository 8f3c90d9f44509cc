pub mod api;
pub mod app_errors;
pub mod config;
pub mod modules;
pub mod utils;
pub mod validation;

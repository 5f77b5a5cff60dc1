pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod services;
pub mod utils;

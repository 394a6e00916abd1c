//! Maps UI service errors to tenki_core::AppError for consistent user-facing messages.

mod jma;
mod service;

pub use jma::{app_error_from_jma, catalog_app_error_from_jma};

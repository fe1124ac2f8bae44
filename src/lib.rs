pub mod api;
pub mod config;
pub mod database;
pub mod error;
pub mod lifecycle;
pub mod selection;
pub mod service;

#[cfg(test)]
mod test_support;

pub use error::{ConfigError, ErrorCode, ReviewError};
pub use service::ReviewService;

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod github;
pub mod http;
pub mod render;
pub mod teams;
pub mod types;

#[cfg(test)]
mod fake;

pub use error::{ApiError, Error, Result};

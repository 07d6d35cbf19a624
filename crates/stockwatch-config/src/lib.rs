//! # Stockwatch Config
//!
//! Configuration management for the stockwatch monitor: a TOML file with
//! `${VAR}` substitution, so paths, phone numbers and credentials never live
//! in code.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};

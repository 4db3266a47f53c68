//! Core library components.
//!
//! Configuration, the secret store facade, prefix grouping, and env-file
//! serialization. Nothing in here prints to the terminal.

pub mod config;
pub mod constants;
pub mod env;
pub mod prefix;
pub mod secrets;
pub mod store;
pub mod types;
pub mod validation;

//! Shared runtime helpers: logging setup and filesystem preparation.

pub mod utils;
pub mod env;

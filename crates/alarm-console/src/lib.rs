//! Command-line front end for the home security controller

pub mod cli;
pub mod commands;

pub use cli::{Args, Command};
pub use commands::{MAX_SENSORS, execute};

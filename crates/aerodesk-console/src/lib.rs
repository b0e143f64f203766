//! AeroDesk operator console.
//!
//! A line-oriented front end over the assistant session and the flight and
//! cargo record views. Each input line is parsed into a [`Command`] and run
//! by a [`Console`] against the configured backend.

pub mod command;
pub mod config;
pub mod console;
pub mod render;

pub use command::{Command, CommandError};
pub use config::{load_config, Config, ConfigError, LoggingConfig};
pub use console::Console;

//! fingerbox Settings Crate
//!
//! Job files describing one box: its parameters plus sheet layout and laser
//! settings, stored as JSON or TOML.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{SettingsError, SettingsResult};

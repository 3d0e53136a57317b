//! Settings module
//!
//! This module contains components for loading and validating settings.

mod loader;
mod model;

pub use loader::{load_settings, locate_settings, read_settings};
pub use model::Settings;

// src/lib.rs - Library interface for internal module access

pub mod app;
pub mod config;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use error::LogError;

// Crate version, preferring VERGEN_GIT_SEMVER when the build environment sets it.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}

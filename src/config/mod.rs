//! Client configuration (`credhub.toml` plus environment overrides).

pub mod settings;

pub use settings::{Settings, SERVER_ENV_VAR};

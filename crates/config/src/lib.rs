//! Configuration loading for gitrelay.
//!
//! TOML config with `${ENV_VAR}` substitution, discovered project-local
//! first and then in the user config dir. Environment variables override
//! file values so containerized deploys need no file at all.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{apply_env_overrides, discover_and_load, load_config},
    schema::{GitrelayConfig, ServerConfig, SlackSettings},
};

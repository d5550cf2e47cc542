//! HTTP boundary for the bridge: webhook intake and health check.

pub mod server;
pub mod webhook;

pub use server::{AppState, build_app, start_gateway};

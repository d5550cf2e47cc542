use std::path::{Path, PathBuf};

use {secrecy::Secret, tracing::{debug, warn}};

use crate::{env_subst::substitute_env, schema::GitrelayConfig};

/// Config file name, checked project-local then user-global.
const CONFIG_FILENAME: &str = "gitrelay.toml";

/// Load config from an explicit path.
pub fn load_config(path: &Path) -> anyhow::Result<GitrelayConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./gitrelay.toml` (project-local)
/// 2. `~/.config/gitrelay/gitrelay.toml` (user-global)
///
/// Returns defaults if no config file is found or a found file fails to
/// parse; env overrides still apply on top.
pub fn discover_and_load() -> GitrelayConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    GitrelayConfig::default()
}

/// Apply environment variable overrides on top of file values.
///
/// `GITRELAY_BIND`, `GITRELAY_PORT` and `SLACK_BOT_TOKEN` win over anything
/// in the config file.
pub fn apply_env_overrides(config: &mut GitrelayConfig) {
    if let Ok(bind) = std::env::var("GITRELAY_BIND")
        && !bind.is_empty()
    {
        config.server.bind = bind;
    }
    if let Ok(port) = std::env::var("GITRELAY_PORT")
        && let Ok(port) = port.parse()
    {
        config.server.port = port;
    }
    if let Ok(token) = std::env::var("SLACK_BOT_TOKEN")
        && !token.is_empty()
    {
        config.slack.bot_token = Some(Secret::new(token));
    }
}

fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "gitrelay") {
        let global = dirs.config_dir().join(CONFIG_FILENAME);
        if global.exists() {
            return Some(global);
        }
    }

    None
}

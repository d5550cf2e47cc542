use {secrecy::Secret, serde::Deserialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GitrelayConfig {
    pub server: ServerConfig,
    pub slack: SlackSettings,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to. Defaults to "127.0.0.1".
    pub bind: String,
    /// Port to listen on. Defaults to 3000.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: 3000,
        }
    }
}

/// Slack credentials and posting options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SlackSettings {
    /// Bot token (`xoxb-…`). Usually injected via `${SLACK_BOT_TOKEN}` or
    /// the env override rather than written into the file.
    pub bot_token: Option<Secret<String>>,
}

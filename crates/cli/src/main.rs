use std::{path::PathBuf, sync::Arc};

use {
    anyhow::Context,
    clap::Parser,
    tracing::info,
    tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt},
};

use {gitrelay_events::Dispatcher, gitrelay_slack::SlackClient};

#[derive(Parser)]
#[command(name = "gitrelay", about = "gitrelay — GitHub to Slack notification bridge")]
struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON instead of human-readable.
    #[arg(long, default_value_t = false)]
    json_logs: bool,

    /// Address to bind to (overrides config value).
    #[arg(long)]
    bind: Option<String>,

    /// Port to listen on (overrides config value).
    #[arg(long)]
    port: Option<u16>,

    /// Path to the config file (overrides discovery).
    #[arg(long, env = "GITRELAY_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli);

    let mut config = match &cli.config {
        Some(path) => gitrelay_config::load_config(path)?,
        None => gitrelay_config::discover_and_load(),
    };
    gitrelay_config::apply_env_overrides(&mut config);
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let bot_token = config
        .slack
        .bot_token
        .clone()
        .context("slack bot token not configured (set SLACK_BOT_TOKEN or slack.bot_token)")?;

    let poster = Arc::new(SlackClient::new(bot_token));
    let dispatcher = Arc::new(Dispatcher::new(poster));

    info!(
        bind = %config.server.bind,
        port = config.server.port,
        "starting gitrelay"
    );
    gitrelay_gateway::start_gateway(&config.server.bind, config.server.port, dispatcher).await
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone()));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }
}

//! FoodTrax CLI binary.
//!
//! This binary provides:
//! - `serve`: the Slack webhook server
//! - `status`: a one-shot database check reported to Slack

use clap::Parser;
use foodtrax::{
    ApiState, ConfigError, FoodtraxConfig, ObservabilityConfig, build_context,
    init_observability, send_status, serve,
};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands};

    // Load .env before clap and config read the environment
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = FoodtraxConfig::load(cli.config.as_deref())?;

    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging().level().clone()
    };
    init_observability(
        &ObservabilityConfig::new(log_level).with_format(*config.logging().format()),
    )?;

    let context = build_context(&config)?;

    match cli.command {
        Commands::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server().bind().clone());
            serve(&bind, ApiState::new(context)).await?;
        }

        Commands::Status { notify_user } => {
            let notify_user = notify_user.unwrap_or_else(|| config.slack().notify_user().clone());
            if notify_user.is_empty() {
                return Err(ConfigError::new("slack.notify_user is not set").into());
            }
            let report = send_status(&context, &notify_user).await?;
            println!("{}", report.message());
        }
    }

    Ok(())
}

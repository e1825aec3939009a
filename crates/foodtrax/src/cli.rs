//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// FoodTrax - Slack bot for finding food trucks
#[derive(Parser, Debug)]
#[command(name = "foodtrax")]
#[command(about = "Slack bot answering questions about FoodTrax food trucks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true, env = "FOODTRAX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the webhook server
    Serve {
        /// Listen address, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Check the database and message the tracked truck count to a user
    Status {
        /// Display name to notify, overriding `slack.notify_user`
        #[arg(long)]
        notify_user: Option<String>,
    },
}

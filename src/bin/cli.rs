//! subtraffic CLI
//!
//! Generates the monthly subreddit traffic report and optionally delivers
//! it as private messages.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subtraffic::{
    error::Result,
    models::Config,
    pipeline,
    services::{MessageSink, RedditMessenger},
};

/// subtraffic - Subreddit Traffic Report Generator
#[derive(Parser, Debug)]
#[command(
    name = "subtraffic",
    version,
    about = "Monthly traffic report generator for the Elite Dangerous subreddit network"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch traffic data, write the reports, and send the messages
    Run {
        /// Write the report files but do not send any messages
        #[arg(long)]
        skip_send: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Print the configured forum roster
    Roster,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run { skip_send } => {
            config.validate()?;

            if skip_send {
                log::info!("Running in report-only mode (--skip-send)");
                pipeline::run_pipeline(&config, None).await?;
            } else {
                config.validate_for_send()?;
                let messenger =
                    RedditMessenger::login(&config.reddit, &config.fetch.user_agent).await?;
                pipeline::run_pipeline(&config, Some(&messenger as &dyn MessageSink)).await?;
            }

            log::info!("Report run complete!");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK (roster, powerplay, and exclusion list)");

            match config.validate_for_send() {
                Ok(()) => log::info!("✓ Messaging credentials present"),
                Err(e) => log::warn!("Messaging not configured: {}", e),
            }

            log::info!("All validations passed!");
        }

        Command::Roster => {
            config.validate()?;
            log::info!(
                "{} forums, {} powerplay, {} without traffic data",
                config.forums.len(),
                config.powerplay.len(),
                config.no_traffic.len()
            );
            for forum in &config.forums {
                let mut tags = Vec::new();
                if config.powerplay.iter().any(|pp| pp.name == forum.name) {
                    tags.push("powerplay");
                }
                if config.is_excluded(&forum.name) {
                    tags.push("no traffic");
                }
                if tags.is_empty() {
                    println!("r/{} - {}", forum.name, forum.description);
                } else {
                    println!("r/{} [{}] - {}", forum.name, tags.join(", "), forum.description);
                }
            }
        }
    }

    Ok(())
}

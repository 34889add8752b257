//! amz-sentiment - Amazon product review sentiment analysis
//!
//! Serves a small web UI (or runs once on the command line) that fetches a
//! product page and scores the polarity of its reviews.

use amz_sentiment::commands::AnalyzeCommand;
use amz_sentiment::config::{Config, OutputFormat};
use amz_sentiment::web::Server;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-sentiment",
    version,
    about = "Amazon product review sentiment analysis",
    long_about = "Fetches an Amazon product page, extracts title, rating, price and reviews, and scores the polarity of every review."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "AMZ_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "AMZ_TIMEOUT")]
    timeout: Option<u64>,

    /// Emulate a real browser's TLS fingerprint
    #[arg(long, global = true)]
    impersonate: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the web UI (default)
    Serve {
        /// Address to listen on
        #[arg(short, long, env = "AMZ_BIND")]
        bind: Option<String>,
    },

    /// Analyze one product page and print the report
    #[command(alias = "a")]
    Analyze {
        /// Product page URL
        url: String,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = Some(timeout);
    }
    if cli.impersonate {
        config.impersonate = true;
    }

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.bind = bind;
            }
            eprintln!("Serving on http://{}", config.bind);
            Server::new(config).run().await?;
        }

        Commands::Analyze { url, format } => {
            if let Some(format) = format {
                config.format = format;
            }
            let cmd = AnalyzeCommand::new(config);
            let output = cmd.execute(&url).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

//! Main entry point for Edge Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use edge_translator::cli::commands::{self, Commands};

/// Edge Translator - translate text through the Microsoft Edge translation API
#[derive(Parser, Debug)]
#[command(name = "edge-translator", version, about, long_about = None)]
struct Args {
    /// Configuration file (JSON or YAML); defaults to environment variables
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("edge_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate {
            from,
            to,
            text_type,
            options,
            json,
            text,
        }) => {
            let config = commands::load_config(args.config)?;
            commands::handle_translate(config, from, to, text_type, options, json, text).await?;
        }
        Some(Commands::Langs { json }) => {
            commands::handle_langs(json)?;
        }
        Some(Commands::Resolve { identifiers }) => {
            commands::handle_resolve(identifiers)?;
        }
        Some(Commands::GenerateLangs { output }) => {
            let config = commands::load_config(args.config)?;
            commands::handle_generate_langs(config, output).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}

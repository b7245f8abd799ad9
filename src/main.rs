// src/main.rs

use clap::Parser;
use devreplay::answer::PlaceholderAnswer;
use devreplay::api::ApiClient;
use devreplay::cli::{Cli, Commands};
use devreplay::commands;
use devreplay::config::Config;
use devreplay::error::Result;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.api_url.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands, config: &Config) -> Result<()> {
    let client = ApiClient::new(config);
    let mut out = io::stdout();
    match command {
        Commands::List { search, tag, sort } => {
            commands::handle_list(&client, &mut out, search, tag, sort).await
        }
        Commands::Tags => commands::handle_tags(&client, &mut out).await,
        Commands::Show { id, no_answer } => {
            let answers = PlaceholderAnswer::default();
            commands::handle_show(&client, &answers, &mut out, id, no_answer).await
        }
        Commands::New {
            title,
            message,
            tags,
            suggest,
        } => commands::handle_new(&client, &mut out, title, message, tags, suggest).await,
        Commands::Suggest { title } => commands::handle_suggest(&mut out, title),
    }
}

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use camara_api::{Client, DEFAULT_BASE_URL};
use clap::{Parser, Subcommand};

use crate::commands::QueryArgs;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "camara")]
#[command(about = "Query the open-data API of the Brazilian Chamber of Deputies")]
struct Cli {
    /// Output format: json, table, csv or md
    #[arg(long, default_value = "json", global = true)]
    output: String,

    /// Write the output to this file instead of stdout
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Party blocs (blocos)
    Blocs(QueryArgs),
    /// Legislators (deputados)
    Legislators(QueryArgs),
    /// Sessions, hearings and meetings (eventos)
    Events(QueryArgs),
    /// Parliamentary fronts (frentes)
    Fronts(QueryArgs),
    /// Legislative terms (legislaturas)
    Legislatures(QueryArgs),
    /// Committees and other organs (orgaos)
    Organs(QueryArgs),
    /// Parties (partidos)
    Parties(QueryArgs),
    /// Bills (proposicoes)
    Bills(QueryArgs),
    /// Roll-call votes (votacoes)
    Votes(QueryArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("camara=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format: OutputFormat = cli.output.parse()?;

    let base_url = std::env::var("CAMARA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = Client::with_base_url(&base_url)
        .with_context(|| format!("Cannot create a client for {}", base_url))?;

    let data = match &cli.command {
        Commands::Blocs(args) => commands::blocs::run(args, &client).await?,
        Commands::Legislators(args) => commands::legislators::run(args, &client).await?,
        Commands::Events(args) => commands::events::run(args, &client).await?,
        Commands::Fronts(args) => commands::fronts::run(args, &client).await?,
        Commands::Legislatures(args) => commands::legislatures::run(args, &client).await?,
        Commands::Organs(args) => commands::organs::run(args, &client).await?,
        Commands::Parties(args) => commands::parties::run(args, &client).await?,
        Commands::Bills(args) => commands::bills::run(args, &client).await?,
        Commands::Votes(args) => commands::votes::run(args, &client).await?,
    };

    if let Some(count) = data.as_array().map(Vec::len) {
        tracing::info!("{} result(s)", count);
    }

    let rendered = output::render(&data, &format)?;
    match &cli.file {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Cannot write {}", path.display()))?,
        None => println!("{}", rendered),
    }

    Ok(())
}

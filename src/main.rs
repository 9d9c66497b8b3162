// src/main.rs
// redsona CLI entry point

use std::path::PathBuf;

use clap::Parser;
use dialoguer::Input;
use tracing::{info, Level};

use redsona::config::Config;
use redsona::generator::GenerationConfig;
use redsona::llm::OpenAiClient;
use redsona::pipeline;
use redsona::reddit::RedditClient;
use redsona::store::PersonaStore;
use redsona::PersonaError;

/// How many posts and how many comments to retrieve by default
const DEFAULT_ITEM_LIMIT: u32 = 50;

#[derive(Parser)]
#[command(
    name = "redsona",
    version,
    about = "Generate a persona from a Reddit user's public activity"
)]
struct Cli {
    /// Reddit profile URL, e.g. https://www.reddit.com/user/spez
    /// (prompted for when omitted)
    url: Option<String>,

    /// Maximum posts and comments to retrieve, per kind
    #[arg(long, default_value_t = DEFAULT_ITEM_LIMIT)]
    limit: u32,

    /// Completion model override
    #[arg(long)]
    model: Option<String>,

    /// Directory the persona file is written to
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

/// Load ~/.redsona/.env first, then a local .env. Values already in the
/// process environment win either way.
fn load_env() {
    if let Some(home) = dirs::home_dir() {
        let global = home.join(".redsona").join(".env");
        if global.exists() {
            let _ = dotenvy::from_path(&global);
        }
    }
    let _ = dotenvy::dotenv();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();

    // Logs go to stderr so the saved-path line on stdout stays scriptable
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(model) = cli.model {
        config.model = model;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    let reference = match cli.url {
        Some(url) => url,
        None => Input::<String>::new()
            .with_prompt("Reddit profile URL")
            .interact_text()?,
    };

    let reddit = RedditClient::new(config.reddit.clone())?;
    let openai = OpenAiClient::new(config.openai_api_key.clone(), config.openai_base_url.clone());
    let store = PersonaStore::new(config.output_dir.clone());
    let generation = GenerationConfig {
        model: config.model.clone(),
        temperature: config.temperature,
        ..GenerationConfig::default()
    };

    match pipeline::run(
        &reference,
        &reddit,
        &openai,
        &store,
        generation,
        cli.limit,
    )
    .await
    {
        Ok(document) => {
            info!(user = %document.username, "persona generation complete");
            println!("Persona saved to {}", document.path.display());
            Ok(())
        }
        Err(error @ PersonaError::InvalidReference(_)) => {
            eprintln!("{error}");
            eprintln!("Expected a profile URL like https://www.reddit.com/user/<name>");
            std::process::exit(2);
        }
        Err(error) => Err(error.into()),
    }
}

mod cache;
mod commands;
mod compare;
mod config;
mod favorites;
mod filters;
mod logging;
mod messages;
mod pagination;
mod pokeapi;
mod sort;
mod type_chart;

use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

use cache::{KeyValueStore, MemoryStorage, SqliteStorage};
use commands::{App, Command};
use messages::Locale;
use pokeapi::client::PokeApiClient;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse and search Pokémon from PokeAPI")]
#[command(version)]
struct Args {
  /// Path to config file (default: $XDG_CONFIG_HOME/pokedex/config.yaml)
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Language for descriptions and messages
  #[arg(short, long, value_enum)]
  locale: Option<Locale>,

  #[command(subcommand)]
  command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
  color_eyre::install()?;

  let args = Args::parse();

  let data_dir = config::data_dir().ok();
  let log_dir = data_dir.as_ref().map(|dir| dir.join("logs"));
  let _log_guard = logging::init_best_effort(log_dir.as_deref());

  // Load configuration
  let mut config = config::Config::load(args.config.as_deref())?;

  // Override locale if specified on command line
  if let Some(locale) = args.locale {
    config.locale = locale;
  }

  let storage: Arc<dyn KeyValueStore> = match data_dir.map(|dir| SqliteStorage::open(&dir.join("store.db"))) {
    Some(Ok(storage)) => Arc::new(storage),
    Some(Err(e)) => {
      warn!(error = %e, "Falling back to in-memory storage");
      Arc::new(MemoryStorage::new())
    }
    None => {
      warn!("No data directory, falling back to in-memory storage");
      Arc::new(MemoryStorage::new())
    }
  };

  let client = PokeApiClient::new(&config)?;
  let mut app = App::new(config, client, storage);

  for line in app.run(args.command).await? {
    println!("{}", line);
  }

  Ok(())
}

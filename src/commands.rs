//! Command-line subcommands and the handlers that run them.
//!
//! Handlers return the lines to print; `main` writes them to stdout.

use clap::{Args, Subcommand};
use color_eyre::{eyre::eyre, Report, Result};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};
use url::Url;

use crate::cache::{KeyValueStore, ListCache};
use crate::compare::{compare_stats, total_base_stats, StatComparison};
use crate::config::Config;
use crate::favorites::{favorites_param_from_input, Favorites};
use crate::filters::{apply_filters, generation, PokemonFilters};
use crate::messages::{self, Message};
use crate::pagination::{page_slice, Pagination};
use crate::pokeapi::error::ApiError;
use crate::pokeapi::search::{fetch_and_cache_all, search_pokemon, SearchSource};
use crate::pokeapi::source::PokemonSource;
use crate::pokeapi::types::{EntityId, PokemonDetails, PokemonSpecies, PokemonSummary};
use crate::sort::{sort_pokemons, SortMode};
use crate::type_chart::{classify, effectiveness_of_names, PokemonType, TypeMatchups, UnknownType};

/// Page numbers shown around the current page
const PAGE_BUTTONS: u32 = 5;

#[derive(Subcommand, Debug)]
pub enum Command {
  /// List one page of Pokémon
  #[command(visible_alias = "ls")]
  List(ListArgs),

  /// Search by name or id
  #[command(visible_alias = "s")]
  Search {
    /// Name, part of a name, or national dex number
    query: String,

    /// default, id-asc, id-desc, name-asc, name-desc
    #[arg(long, default_value = "default", value_parser = parse_sort)]
    sort: SortMode,
  },

  /// Show details, description and type matchups
  Show {
    /// Name or national dex number
    id_or_name: String,
  },

  /// Compare base stats of two Pokémon
  Compare { left: String, right: String },

  /// Weaknesses, resistances and immunities of a type combination
  Types {
    /// One or two defending types
    #[arg(required = true, num_args = 1..=2, value_parser = parse_type)]
    types: Vec<PokemonType>,
  },

  /// Manage favorites
  #[command(subcommand)]
  Fav(FavCommand),

  /// Manage the local list cache
  #[command(subcommand)]
  Cache(CacheCommand),
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
  /// Page number, starting at 1
  #[arg(short, long, default_value_t = 1)]
  pub page: u32,

  /// Entries per page (default from config)
  #[arg(long)]
  pub page_size: Option<u32>,

  /// Only this generation (1-8)
  #[arg(short, long)]
  pub generation: Option<u8>,

  /// Only favorites
  #[arg(short, long)]
  pub favorites: bool,

  /// Only names containing this text
  #[arg(short, long)]
  pub search: Option<String>,

  /// default, id-asc, id-desc, name-asc, name-desc
  #[arg(long, default_value = "default", value_parser = parse_sort)]
  pub sort: SortMode,
}

#[derive(Subcommand, Debug)]
pub enum FavCommand {
  /// List favorites
  #[command(visible_alias = "ls")]
  List,
  /// Add a favorite
  Add {
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    id: u32,
  },
  /// Remove a favorite
  #[command(visible_alias = "rm")]
  Remove {
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    id: u32,
  },
  /// Add or remove a favorite
  Toggle {
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    id: u32,
  },
  /// Remove every favorite
  Clear,
  /// Merge favorites from a share link or a `1,4,7` list
  Import { param: String },
  /// Print a link that shares the current favorites
  Share {
    /// Origin of the link
    #[arg(long, default_value = "http://localhost:3000")]
    origin: String,
  },
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
  /// Delete the cached Pokémon list
  Clear,
}

/// Lenient: unknown modes fall back to the default order.
fn parse_sort(s: &str) -> Result<SortMode, String> {
  Ok(SortMode::parse_lenient(s))
}

fn parse_type(s: &str) -> Result<PokemonType, String> {
  s.parse().map_err(|e: UnknownType| e.to_string())
}

/// Everything a command needs: remote source, list cache and favorites.
pub struct App<P: PokemonSource> {
  config: Config,
  source: P,
  cache: ListCache<dyn KeyValueStore>,
  favorites: Favorites<dyn KeyValueStore>,
}

impl<P: PokemonSource> App<P> {
  pub fn new(config: Config, source: P, storage: Arc<dyn KeyValueStore>) -> Self {
    let cache = ListCache::new(Arc::clone(&storage)).with_ttl(config.cache.duration());
    let favorites = Favorites::load(storage);

    Self {
      config,
      source,
      cache,
      favorites,
    }
  }

  pub async fn run(&mut self, command: Command) -> Result<Vec<String>> {
    match command {
      Command::List(args) => self.list(args).await,
      Command::Search { query, sort } => self.search(&query, sort).await,
      Command::Show { id_or_name } => self.show(&id_or_name).await,
      Command::Compare { left, right } => self.compare(&left, &right).await,
      Command::Types { types } => {
        let names: Vec<&str> = types.iter().map(|t| t.as_str()).collect();
        Ok(format_matchups(&names, &classify(&types)))
      }
      Command::Fav(fav) => self.fav(fav),
      Command::Cache(CacheCommand::Clear) => {
        self.cache.clear();
        info!("Cleared list cache");
        Ok(vec!["List cache cleared".to_string()])
      }
    }
  }

  async fn list(&self, args: ListArgs) -> Result<Vec<String>> {
    let page_size = args.page_size.unwrap_or(self.config.page_size).max(1);
    let filters = PokemonFilters {
      generation: args.generation,
      favorites: args.favorites,
      search: args.search,
    };

    let (pokemons, pagination) = if filters.is_active() {
      // Filters work on the whole collection, so page locally
      let all = self.full_list().await?;
      let filtered = apply_filters(&all, &filters, self.favorites.ids());
      let sorted = sort_pokemons(&filtered, args.sort);
      let pagination = Pagination::new(args.page, sorted.len() as u64, page_size);
      (page_slice(&sorted, &pagination, page_size).to_vec(), pagination)
    } else {
      let page = self
        .source
        .list_page(args.page, page_size)
        .await
        .map_err(|e| self.api_error(e))?;
      let sorted = sort_pokemons(&page.pokemons, args.sort).into_owned();
      (sorted, page.pagination)
    };

    let mut lines = Vec::new();
    if let Some(g) = filters.generation.and_then(generation) {
      lines.push(g.label());
    }
    if args.sort != SortMode::Default {
      lines.push(args.sort.label().to_string());
    }
    lines.extend(self.summary_lines(&pokemons));
    lines.push(format_pagination(&pagination));
    Ok(lines)
  }

  async fn search(&self, query: &str, sort: SortMode) -> Result<Vec<String>> {
    let result = search_pokemon(&self.source, &self.cache, query)
      .await
      .map_err(|e| self.api_error(e))?;

    if result.source == SearchSource::Empty {
      return Ok(Vec::new());
    }
    info!(query, source = ?result.source, count = result.pokemons.len(), "Search");

    let sorted = sort_pokemons(&result.pokemons, sort);
    let mut lines = Vec::new();
    if sort != SortMode::Default {
      lines.push(sort.label().to_string());
    }
    lines.extend(self.summary_lines(&sorted));
    lines.push(format_pagination(&Pagination::search_mode()));
    Ok(lines)
  }

  async fn show(&self, id_or_name: &str) -> Result<Vec<String>> {
    let query = id_or_name.trim().to_lowercase();
    let (details, species) = self
      .source
      .get_with_species(&query)
      .await
      .map_err(|e| self.api_error(e))?;

    let favorite = self.favorites.contains(details.id);
    Ok(self.format_details(&details, &species, favorite))
  }

  async fn compare(&self, left: &str, right: &str) -> Result<Vec<String>> {
    let left_query = left.trim().to_lowercase();
    let right_query = right.trim().to_lowercase();
    let (left, right) = futures::try_join!(
      self.source.get_details(&left_query),
      self.source.get_details(&right_query),
    )
    .map_err(|e| self.api_error(e))?;

    Ok(format_comparison(&left, &right, &compare_stats(&left, &right)))
  }

  fn fav(&mut self, command: FavCommand) -> Result<Vec<String>> {
    let line = match command {
      FavCommand::List => {
        if self.favorites.is_empty() {
          return Ok(vec![self.text(Message::EmptyFavorites).to_string()]);
        }
        // Names are only known if the list is cached
        let names: BTreeMap<EntityId, String> = self
          .cache
          .read()
          .unwrap_or_default()
          .into_iter()
          .map(|p| (p.id, p.name))
          .collect();
        return Ok(
          self
            .favorites
            .ids()
            .iter()
            .map(|id| match names.get(id) {
              Some(name) => format!("#{:<5} {}", id.get(), name),
              None => format!("#{}", id.get()),
            })
            .collect(),
        );
      }
      FavCommand::Add { id } => {
        if self.favorites.add(EntityId(id)) {
          format!("Added #{} to favorites", id)
        } else {
          format!("#{} is already a favorite", id)
        }
      }
      FavCommand::Remove { id } => {
        if self.favorites.remove(EntityId(id)) {
          format!("Removed #{} from favorites", id)
        } else {
          format!("#{} is not a favorite", id)
        }
      }
      FavCommand::Toggle { id } => {
        if self.favorites.toggle(EntityId(id)) {
          format!("Added #{} to favorites", id)
        } else {
          format!("Removed #{} from favorites", id)
        }
      }
      FavCommand::Clear => {
        self.favorites.clear();
        "Cleared favorites".to_string()
      }
      FavCommand::Import { param } => {
        let added = self.favorites.import_param(&favorites_param_from_input(&param));
        format!("Imported {} new favorites ({} total)", added, self.favorites.len())
      }
      FavCommand::Share { origin } => {
        let origin =
          Url::parse(&origin).map_err(|e| eyre!("Invalid origin {}: {}", origin, e))?;
        match self.favorites.share_url(&origin) {
          Some(url) => url.to_string(),
          None => self.text(Message::NoFavorites).to_string(),
        }
      }
    };
    Ok(vec![line])
  }

  /// The complete list, from the cache when valid, otherwise fetched and cached.
  async fn full_list(&self) -> Result<Vec<PokemonSummary>> {
    if let Some(cached) = self.cache.read() {
      return Ok(cached);
    }
    fetch_and_cache_all(&self.source, &self.cache)
      .await
      .map_err(|e| self.api_error(e))
  }

  fn summary_lines(&self, pokemons: &[PokemonSummary]) -> Vec<String> {
    if pokemons.is_empty() {
      return vec![self.text(Message::NoResults).to_string()];
    }
    pokemons
      .iter()
      .map(|p| format_summary(p, self.favorites.contains(p.id)))
      .collect()
  }

  fn format_details(
    &self,
    details: &PokemonDetails,
    species: &PokemonSpecies,
    favorite: bool,
  ) -> Vec<String> {
    let mut lines = vec![format!(
      "#{} {}{}",
      details.id.get(),
      details.name,
      if favorite { " ★" } else { "" }
    )];

    if let Some(genus) = &species.genus {
      lines.push(genus.clone());
    }
    if let Some(generation) = &species.generation {
      lines.push(format!("Introduced in {}", generation));
    }
    if species.is_legendary {
      lines.push("Legendary".to_string());
    }
    if species.is_mythical {
      lines.push("Mythical".to_string());
    }
    lines.push(
      species
        .flavor_text
        .clone()
        .unwrap_or_else(|| self.text(Message::NoDescription).to_string()),
    );

    let types: Vec<&str> = details.types.iter().map(|t| t.name.as_str()).collect();
    lines.push(format!("Types: {}", types.join(", ")));
    lines.push(format!(
      "Height: {:.1} m  Weight: {:.1} kg",
      f64::from(details.height) / 10.0,
      f64::from(details.weight) / 10.0
    ));

    let abilities: Vec<String> = details
      .abilities
      .iter()
      .map(|a| {
        if a.is_hidden {
          format!("{} (hidden)", a.name)
        } else {
          a.name.clone()
        }
      })
      .collect();
    lines.push(format!("Abilities: {}", abilities.join(", ")));
    if let Some(experience) = details.base_experience {
      lines.push(format!("Base experience: {}", experience));
    }
    if let Some(artwork) = details
      .sprites
      .official_artwork
      .as_ref()
      .or(details.sprites.front_default.as_ref())
    {
      lines.push(format!("Artwork: {}", artwork));
    }

    for stat in &details.stats {
      lines.push(format!("  {:<16}{:>4}", stat.name, stat.base_value));
    }
    lines.push(format!("  {:<16}{:>4}", "total", total_base_stats(details)));

    lines.extend(format_matchups(&types, &classify(&details.defending_types())));
    lines
  }

  fn text(&self, message: Message) -> &'static str {
    messages::text(message, self.config.locale)
  }

  fn api_error(&self, err: ApiError) -> Report {
    warn!(error = %err, "Request failed");
    eyre!("{}", err.user_message(self.config.locale))
  }
}

/// `#25    pikachu ★`
pub fn format_summary(pokemon: &PokemonSummary, favorite: bool) -> String {
  format!(
    "#{:<5} {}{}",
    pokemon.id.get(),
    pokemon.name,
    if favorite { " ★" } else { "" }
  )
}

/// `Page 2 of 66  < 1 [2] 3 4 5 >`
pub fn format_pagination(pagination: &Pagination) -> String {
  let mut parts = Vec::new();
  if pagination.has_prev_page {
    parts.push("<".to_string());
  }
  for page in pagination.visible_pages(PAGE_BUTTONS) {
    if page == pagination.current_page {
      parts.push(format!("[{}]", page));
    } else {
      parts.push(page.to_string());
    }
  }
  if pagination.has_next_page {
    parts.push(">".to_string());
  }

  format!(
    "Page {} of {}  {}",
    pagination.current_page,
    pagination.total_pages,
    parts.join(" ")
  )
}

/// `x4`, `x0.5`, `x0`
pub fn format_multiplier(multiplier: f64) -> String {
  format!("x{}", multiplier)
}

/// Matchup lines for a defender with the given type names.
pub fn format_matchups(defending: &[&str], matchups: &TypeMatchups) -> Vec<String> {
  let group = |label: &str, types: &[PokemonType]| {
    let entries: Vec<String> = types
      .iter()
      .map(|t| {
        let multiplier = effectiveness_of_names(t.as_str(), defending);
        format!("{} {}", t, format_multiplier(multiplier))
      })
      .collect();
    if entries.is_empty() {
      format!("{}: none", label)
    } else {
      format!("{}: {}", label, entries.join(", "))
    }
  };

  vec![
    group("Weak to", &matchups.weak),
    group("Resists", &matchups.resistant),
    group("Immune to", &matchups.immune),
  ]
}

pub fn format_comparison(
  left: &PokemonDetails,
  right: &PokemonDetails,
  rows: &[StatComparison],
) -> Vec<String> {
  let mut lines = vec![format!("{:<16}{:>12}{:>12}", "", left.name, right.name)];
  for row in rows {
    let marker = match row.winner() {
      std::cmp::Ordering::Greater => "<",
      std::cmp::Ordering::Less => ">",
      std::cmp::Ordering::Equal => "=",
    };
    lines.push(format!(
      "{:<16}{:>12}{:>12}  {} {:+}",
      row.name,
      row.left,
      row.right,
      marker,
      row.difference()
    ));
  }
  lines.push(format!(
    "{:<16}{:>12}{:>12}",
    "total",
    total_base_stats(left),
    total_base_stats(right)
  ));
  lines
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::MemoryStorage;
  use crate::pokeapi::types::{BaseStat, PokemonPage, TypeSlot};
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicUsize, Ordering};

  struct FakeSource {
    all: Vec<PokemonSummary>,
    list_all_calls: AtomicUsize,
  }

  impl FakeSource {
    fn new() -> Self {
      Self {
        all: vec![
          pokemon(1, "bulbasaur"),
          pokemon(4, "charmander"),
          pokemon(6, "charizard"),
          pokemon(25, "pikachu"),
          pokemon(152, "chikorita"),
          pokemon(386, "deoxys-normal"),
        ],
        list_all_calls: AtomicUsize::new(0),
      }
    }
  }

  #[async_trait]
  impl PokemonSource for FakeSource {
    async fn list_page(&self, page: u32, page_size: u32) -> Result<PokemonPage, ApiError> {
      let pagination = Pagination::new(page, self.all.len() as u64, page_size);
      Ok(PokemonPage {
        pokemons: page_slice(&self.all, &pagination, page_size).to_vec(),
        pagination,
      })
    }

    async fn list_all(&self) -> Result<Vec<PokemonSummary>, ApiError> {
      self.list_all_calls.fetch_add(1, Ordering::SeqCst);
      Ok(self.all.clone())
    }

    async fn get_details(&self, id_or_name: &str) -> Result<PokemonDetails, ApiError> {
      let summary = self
        .all
        .iter()
        .find(|p| p.name == id_or_name || p.id.to_string() == id_or_name)
        .ok_or_else(|| ApiError::NotFound(id_or_name.to_string()))?;
      Ok(details(summary))
    }

    /// Answers species names only, as the real endpoint does.
    async fn get_species(&self, id_or_name: &str) -> Result<PokemonSpecies, ApiError> {
      let summary = self
        .all
        .iter()
        .find(|p| species_name(&p.name) == id_or_name)
        .ok_or_else(|| ApiError::NotFound(id_or_name.to_string()))?;
      Ok(PokemonSpecies {
        id: summary.id,
        name: species_name(&summary.name).to_string(),
        genus: None,
        flavor_text: None,
        generation: None,
        is_legendary: false,
        is_mythical: false,
      })
    }
  }

  fn pokemon(id: u32, name: &str) -> PokemonSummary {
    PokemonSummary::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
  }

  /// "deoxys-normal" belongs to species "deoxys"
  fn species_name(name: &str) -> &str {
    name.split('-').next().unwrap_or(name)
  }

  fn details(summary: &PokemonSummary) -> PokemonDetails {
    let type_name = if summary.name == "pikachu" { "electric" } else { "grass" };
    PokemonDetails {
      id: summary.id,
      name: summary.name.clone(),
      url: summary.url.clone(),
      species: species_name(&summary.name).to_string(),
      height: 4,
      weight: 60,
      base_experience: Some(112),
      types: vec![TypeSlot {
        slot: 1,
        name: type_name.to_string(),
      }],
      abilities: Vec::new(),
      stats: vec![BaseStat {
        name: "hp".to_string(),
        base_value: summary.id.get() * 10,
      }],
      sprites: Default::default(),
    }
  }

  fn app() -> App<FakeSource> {
    App::new(
      Config::default(),
      FakeSource::new(),
      Arc::new(MemoryStorage::new()),
    )
  }

  fn list_args() -> ListArgs {
    ListArgs {
      page: 1,
      page_size: Some(2),
      generation: None,
      favorites: false,
      search: None,
      sort: SortMode::Default,
    }
  }

  #[tokio::test]
  async fn test_list_unfiltered_uses_remote_pages() {
    let mut app = app();
    let lines = app.run(Command::List(list_args())).await.unwrap();
    assert_eq!(
      lines,
      vec![
        "#1     bulbasaur",
        "#4     charmander",
        "Page 1 of 3  [1] 2 3 >",
      ]
    );
    assert_eq!(app.source.list_all_calls.load(Ordering::SeqCst), 0);
  }

  #[tokio::test]
  async fn test_list_with_filters_pages_locally() {
    let mut app = app();
    app.run(Command::Fav(FavCommand::Add { id: 6 })).await.unwrap();
    app.run(Command::Fav(FavCommand::Add { id: 152 })).await.unwrap();

    let args = ListArgs {
      generation: Some(1),
      favorites: true,
      ..list_args()
    };
    let lines = app.run(Command::List(args)).await.unwrap();
    assert_eq!(
      lines,
      vec!["Gen 1 - Kanto", "#6     charizard ★", "Page 1 of 1  [1]"]
    );

    // Full list was cached by the first filtered listing
    let args = ListArgs {
      search: Some("char".to_string()),
      sort: SortMode::NameAsc,
      ..list_args()
    };
    let lines = app.run(Command::List(args)).await.unwrap();
    assert_eq!(lines[0], "Name: A-Z");
    assert_eq!(lines[1], "#6     charizard ★");
    assert_eq!(lines[2], "#4     charmander");
    assert_eq!(app.source.list_all_calls.load(Ordering::SeqCst), 1);
  }

  #[tokio::test]
  async fn test_search_and_no_results() {
    let mut app = app();
    let lines = app
      .run(Command::Search {
        query: "pikachu".to_string(),
        sort: SortMode::Default,
      })
      .await
      .unwrap();
    assert_eq!(lines, vec!["#25    pikachu", "Page 1 of 1  [1]"]);

    let lines = app
      .run(Command::Search {
        query: "zzz".to_string(),
        sort: SortMode::Default,
      })
      .await
      .unwrap();
    assert_eq!(lines[0], "No Pokémon found");
  }

  #[tokio::test]
  async fn test_show_not_found_uses_user_message() {
    let mut app = app();
    let err = app
      .run(Command::Show {
        id_or_name: "missingno".to_string(),
      })
      .await
      .unwrap_err();
    assert_eq!(err.to_string(), "Could not find that Pokémon");
  }

  #[tokio::test]
  async fn test_show_details() {
    let mut app = app();
    let lines = app
      .run(Command::Show {
        id_or_name: " Pikachu ".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(lines[0], "#25 pikachu");
    assert!(lines.contains(&"No description available.".to_string()));
    assert!(lines.contains(&"Types: electric".to_string()));
    assert!(lines.contains(&"Weak to: ground x2".to_string()));
  }

  #[tokio::test]
  async fn test_show_form_uses_species_from_details() {
    let mut app = app();
    let lines = app
      .run(Command::Show {
        id_or_name: "deoxys-normal".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(lines[0], "#386 deoxys-normal");
  }

  #[tokio::test]
  async fn test_compare() {
    let mut app = app();
    let lines = app
      .run(Command::Compare {
        left: "pikachu".to_string(),
        right: "bulbasaur".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(lines.len(), 8);
    assert!(lines[1].starts_with("hp"));
    assert!(lines[1].ends_with("< +240"));
    assert!(lines[2].ends_with("= +0"));
  }

  #[tokio::test]
  async fn test_fav_commands() {
    let mut app = app();
    let lines = app.run(Command::Fav(FavCommand::List)).await.unwrap();
    assert_eq!(lines, vec!["You have no favorites yet"]);
    let lines = app
      .run(Command::Fav(FavCommand::Share {
        origin: "http://localhost:3000".to_string(),
      }))
      .await
      .unwrap();
    assert_eq!(lines, vec!["You have no favorites to share"]);

    app
      .run(Command::Fav(FavCommand::Import {
        param: "http://localhost:3000/?favorites=25,1".to_string(),
      }))
      .await
      .unwrap();
    let lines = app.run(Command::Fav(FavCommand::List)).await.unwrap();
    assert_eq!(lines, vec!["#1", "#25"]);

    let lines = app
      .run(Command::Fav(FavCommand::Share {
        origin: "http://localhost:3000".to_string(),
      }))
      .await
      .unwrap();
    assert_eq!(lines, vec!["http://localhost:3000/?favorites=1%2C25"]);

    let lines = app
      .run(Command::Fav(FavCommand::Toggle { id: 25 }))
      .await
      .unwrap();
    assert_eq!(lines, vec!["Removed #25 from favorites"]);
  }

  #[tokio::test]
  async fn test_cache_clear() {
    let mut app = app();
    app.cache.save(&[pokemon(1, "bulbasaur")]);
    app.run(Command::Cache(CacheCommand::Clear)).await.unwrap();
    assert_eq!(app.cache.read(), None);
  }

  #[test]
  fn test_format_pagination() {
    assert_eq!(
      format_pagination(&Pagination::new(4, 200, 20)),
      "Page 4 of 10  < 2 3 [4] 5 6 >"
    );
    assert_eq!(
      format_pagination(&Pagination::search_mode()),
      "Page 1 of 1  [1]"
    );
  }

  #[test]
  fn test_format_multiplier() {
    assert_eq!(format_multiplier(4.0), "x4");
    assert_eq!(format_multiplier(0.25), "x0.25");
    assert_eq!(format_multiplier(0.0), "x0");
  }

  #[test]
  fn test_format_matchups() {
    let lines = format_matchups(&["ground"], &classify(&[PokemonType::Ground]));
    assert_eq!(lines[0], "Weak to: water x2, grass x2, ice x2");
    assert_eq!(lines[1], "Resists: poison x0.5, rock x0.5");
    assert_eq!(lines[2], "Immune to: electric x0");
  }

  #[test]
  fn test_parse_type_rejects_unknown() {
    assert_eq!(parse_type("Fire"), Ok(PokemonType::Fire));
    assert!(parse_type("shadow").is_err());
  }
}

//! Three-tier Pokémon search: exact lookup, cached substring match, full fetch.

use tracing::{debug, info, warn};

use super::error::ApiError;
use super::source::PokemonSource;
use super::types::PokemonSummary;
use crate::cache::{KeyValueStore, ListCache};
use crate::filters::name_contains;

/// Most results a single search returns
pub const SEARCH_RESULT_LIMIT: usize = 20;

/// Where a search result came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
  /// Blank query, nothing was looked up
  Empty,
  /// The query named a Pokémon exactly
  Exact,
  /// Substring match over the cached list
  Cache,
  /// Substring match over a freshly fetched list
  Network,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
  pub pokemons: Vec<PokemonSummary>,
  pub source: SearchSource,
}

impl SearchResult {
  fn new(pokemons: Vec<PokemonSummary>, source: SearchSource) -> Self {
    Self { pokemons, source }
  }
}

/// Fetch the complete collection and store it in the list cache.
pub async fn fetch_and_cache_all<P, S>(
  source: &P,
  cache: &ListCache<S>,
) -> Result<Vec<PokemonSummary>, ApiError>
where
  P: PokemonSource + ?Sized,
  S: KeyValueStore + ?Sized,
{
  let pokemons = source.list_all().await?;
  cache.save(&pokemons);
  info!(count = pokemons.len(), "Cached full Pokémon list");
  Ok(pokemons)
}

/// Search by name or id.
///
/// 1. An exact details lookup on the lowercased query. A hit returns that one
///    Pokémon. Any failure here falls through to the next step.
/// 2. A substring match over the cached list, if a valid cache exists.
/// 3. Otherwise the full list is fetched, cached and matched.
///
/// Results are capped at [`SEARCH_RESULT_LIMIT`]. Only a failure of the full
/// fetch is returned as an error.
pub async fn search_pokemon<P, S>(
  source: &P,
  cache: &ListCache<S>,
  query: &str,
) -> Result<SearchResult, ApiError>
where
  P: PokemonSource + ?Sized,
  S: KeyValueStore + ?Sized,
{
  let query = query.trim();
  if query.is_empty() {
    return Ok(SearchResult::new(Vec::new(), SearchSource::Empty));
  }
  let needle = query.to_lowercase();

  match source.get_details(&needle).await {
    Ok(details) => {
      debug!(query, id = %details.id, "Exact match");
      return Ok(SearchResult::new(vec![details.summary()], SearchSource::Exact));
    }
    Err(e) if e.is_not_found() => debug!(query, "No exact match"),
    Err(e) if e.is_transport() => warn!(query, error = %e, "Exact lookup failed, trying cache"),
    Err(e) => warn!(query, error = %e, "Unexpected exact lookup response, trying cache"),
  }

  if let Some(mut matches) = cache.search_substring(&needle) {
    matches.truncate(SEARCH_RESULT_LIMIT);
    debug!(query, count = matches.len(), "Served search from cache");
    return Ok(SearchResult::new(matches, SearchSource::Cache));
  }

  let all = fetch_and_cache_all(source, cache).await?;
  let matches = all
    .into_iter()
    .filter(|p| name_contains(&p.name, &needle))
    .take(SEARCH_RESULT_LIMIT)
    .collect();

  Ok(SearchResult::new(matches, SearchSource::Network))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::MemoryStorage;
  use crate::pagination::Pagination;
  use crate::pokeapi::types::{EntityId, PokemonDetails, PokemonPage, PokemonSpecies, Sprites};
  use async_trait::async_trait;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::sync::Arc;
  use std::time::Duration;

  /// Canned source: `details` answers exact lookups, `all` answers full fetches.
  struct FakeSource {
    all: Result<Vec<PokemonSummary>, ApiError>,
    details_error: Option<ApiError>,
    details_calls: AtomicUsize,
    list_all_calls: AtomicUsize,
  }

  impl FakeSource {
    fn new(all: Vec<PokemonSummary>) -> Self {
      Self {
        all: Ok(all),
        details_error: None,
        details_calls: AtomicUsize::new(0),
        list_all_calls: AtomicUsize::new(0),
      }
    }

    fn failing_full_fetch(mut self, err: ApiError) -> Self {
      self.all = Err(err);
      self
    }

    fn failing_details(mut self, err: ApiError) -> Self {
      self.details_error = Some(err);
      self
    }

    fn details_calls(&self) -> usize {
      self.details_calls.load(Ordering::SeqCst)
    }

    fn list_all_calls(&self) -> usize {
      self.list_all_calls.load(Ordering::SeqCst)
    }
  }

  #[async_trait]
  impl PokemonSource for FakeSource {
    async fn list_page(&self, page: u32, page_size: u32) -> Result<PokemonPage, ApiError> {
      Ok(PokemonPage {
        pokemons: Vec::new(),
        pagination: Pagination::new(page, 0, page_size),
      })
    }

    async fn list_all(&self) -> Result<Vec<PokemonSummary>, ApiError> {
      self.list_all_calls.fetch_add(1, Ordering::SeqCst);
      self.all.clone()
    }

    async fn get_details(&self, id_or_name: &str) -> Result<PokemonDetails, ApiError> {
      self.details_calls.fetch_add(1, Ordering::SeqCst);
      if let Some(err) = &self.details_error {
        return Err(err.clone());
      }

      let all = self.all.clone().unwrap_or_default();
      all
        .into_iter()
        .find(|p| p.name == id_or_name || p.id.to_string() == id_or_name)
        .map(|p| PokemonDetails {
          id: p.id,
          name: p.name,
          url: p.url,
          species: p.id.to_string(),
          height: 4,
          weight: 60,
          base_experience: None,
          types: Vec::new(),
          abilities: Vec::new(),
          stats: Vec::new(),
          sprites: Sprites::default(),
        })
        .ok_or_else(|| ApiError::NotFound(id_or_name.to_string()))
    }

    async fn get_species(&self, id_or_name: &str) -> Result<PokemonSpecies, ApiError> {
      Err(ApiError::NotFound(id_or_name.to_string()))
    }
  }

  fn pokemon(id: u32, name: &str) -> PokemonSummary {
    PokemonSummary::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
  }

  fn dex() -> Vec<PokemonSummary> {
    vec![
      pokemon(1, "bulbasaur"),
      pokemon(4, "charmander"),
      pokemon(5, "charmeleon"),
      pokemon(6, "charizard"),
      pokemon(25, "pikachu"),
    ]
  }

  fn empty_cache() -> ListCache<MemoryStorage> {
    ListCache::new(Arc::new(MemoryStorage::new()))
  }

  fn names(result: &SearchResult) -> Vec<&str> {
    result.pokemons.iter().map(|p| p.name.as_str()).collect()
  }

  #[tokio::test]
  async fn test_blank_query_does_no_io() {
    let source = FakeSource::new(dex());
    let cache = empty_cache();

    let result = search_pokemon(&source, &cache, "   ").await.unwrap();
    assert_eq!(result.source, SearchSource::Empty);
    assert!(result.pokemons.is_empty());
    assert_eq!(source.details_calls(), 0);
    assert_eq!(source.list_all_calls(), 0);
  }

  #[tokio::test]
  async fn test_exact_match_wins() {
    let source = FakeSource::new(dex());
    let cache = empty_cache();

    let result = search_pokemon(&source, &cache, " Pikachu ").await.unwrap();
    assert_eq!(result.source, SearchSource::Exact);
    assert_eq!(names(&result), vec!["pikachu"]);
    assert_eq!(result.pokemons[0].id, EntityId(25));
    assert_eq!(source.list_all_calls(), 0);
  }

  #[tokio::test]
  async fn test_exact_match_by_id() {
    let source = FakeSource::new(dex());
    let result = search_pokemon(&source, &empty_cache(), "6").await.unwrap();
    assert_eq!(names(&result), vec!["charizard"]);
  }

  #[tokio::test]
  async fn test_cache_hit_avoids_full_fetch() {
    let source = FakeSource::new(dex());
    let cache = empty_cache();
    cache.save(&dex());

    let result = search_pokemon(&source, &cache, "CHAR").await.unwrap();
    assert_eq!(result.source, SearchSource::Cache);
    assert_eq!(names(&result), vec!["charmander", "charmeleon", "charizard"]);
    assert_eq!(source.list_all_calls(), 0);
  }

  #[tokio::test]
  async fn test_cache_hit_without_matches() {
    let source = FakeSource::new(dex());
    let cache = empty_cache();
    cache.save(&dex());

    let result = search_pokemon(&source, &cache, "zzz").await.unwrap();
    assert_eq!(result.source, SearchSource::Cache);
    assert!(result.pokemons.is_empty());
    assert_eq!(source.list_all_calls(), 0);
  }

  #[tokio::test]
  async fn test_missing_cache_fetches_and_fills() {
    let source = FakeSource::new(dex());
    let cache = empty_cache();

    let result = search_pokemon(&source, &cache, "char").await.unwrap();
    assert_eq!(result.source, SearchSource::Network);
    assert_eq!(result.pokemons.len(), 3);
    assert_eq!(source.list_all_calls(), 1);
    assert_eq!(cache.read(), Some(dex()));

    // Second search is served from the cache
    let again = search_pokemon(&source, &cache, "char").await.unwrap();
    assert_eq!(again.source, SearchSource::Cache);
    assert_eq!(source.list_all_calls(), 1);
  }

  #[tokio::test]
  async fn test_results_are_capped() {
    let many: Vec<_> = (1..=50).map(|i| pokemon(i, &format!("mon{}", i))).collect();
    let source = FakeSource::new(many);
    let cache = empty_cache();

    let result = search_pokemon(&source, &cache, "mon").await.unwrap();
    assert_eq!(result.pokemons.len(), SEARCH_RESULT_LIMIT);
    assert_eq!(result.pokemons[0].name, "mon1");

    let cached = search_pokemon(&source, &cache, "mon").await.unwrap();
    assert_eq!(cached.source, SearchSource::Cache);
    assert_eq!(cached.pokemons.len(), SEARCH_RESULT_LIMIT);
  }

  #[tokio::test]
  async fn test_full_fetch_failure_is_returned() {
    let timeout = ApiError::Timeout(Duration::from_secs(10));
    let source = FakeSource::new(Vec::new()).failing_full_fetch(timeout);
    let cache = empty_cache();

    let err = search_pokemon(&source, &cache, "char").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)));
    assert_eq!(cache.read(), None);
  }

  #[tokio::test]
  async fn test_exact_lookup_failure_falls_back_to_cache() {
    let source = FakeSource::new(dex())
      .failing_details(ApiError::Network("connection refused".to_string()));
    let cache = empty_cache();
    cache.save(&dex());

    let result = search_pokemon(&source, &cache, "pika").await.unwrap();
    assert_eq!(result.source, SearchSource::Cache);
    assert_eq!(names(&result), vec!["pikachu"]);
    assert_eq!(source.details_calls(), 1);
  }
}

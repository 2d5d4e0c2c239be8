//! TTL cache for the full Pokémon summary list.

use chrono::Duration;
use std::sync::Arc;
use tracing::{debug, warn};

use super::storage::KeyValueStore;
use super::traits::{CacheRecord, Clock, SystemClock};
use crate::filters::name_contains;
use crate::pokeapi::types::PokemonSummary;

/// Storage key for the cached summary list.
pub const LIST_CACHE_KEY: &str = "pokedex_list";

/// Single-slot cache holding the complete summary list.
///
/// Expiry is lazy: a read that finds a record older than the TTL deletes it
/// and reports a miss. Every failure (storage, serialization, corrupt JSON)
/// is logged and treated as "no cache", never returned to the caller.
pub struct ListCache<S: KeyValueStore + ?Sized> {
  storage: Arc<S>,
  clock: Arc<dyn Clock>,
  /// How long a saved list stays valid
  ttl: Duration,
}

impl<S: KeyValueStore + ?Sized> ListCache<S> {
  /// Create a new cache over the given storage backend with a 24h TTL.
  pub fn new(storage: Arc<S>) -> Self {
    Self {
      storage,
      clock: Arc::new(SystemClock),
      ttl: Duration::hours(24),
    }
  }

  /// Set the time-to-live for saved lists.
  pub fn with_ttl(mut self, ttl: Duration) -> Self {
    self.ttl = ttl;
    self
  }

  /// Replace the clock used for timestamps and expiry checks.
  #[cfg(test)]
  pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  /// Save the list, replacing whatever was cached before.
  pub fn save(&self, pokemons: &[PokemonSummary]) {
    let record = CacheRecord {
      data: pokemons,
      timestamp: self.clock.now_millis(),
    };

    let json = match serde_json::to_string(&record) {
      Ok(json) => json,
      Err(e) => {
        warn!(error = %e, "Failed to serialize list cache");
        return;
      }
    };

    match self.storage.set(LIST_CACHE_KEY, &json) {
      Ok(()) => debug!(count = pokemons.len(), "Saved list cache"),
      Err(e) => warn!(error = %e, "Failed to save list cache"),
    }
  }

  /// Read the cached list if present and not expired.
  pub fn read(&self) -> Option<Vec<PokemonSummary>> {
    let raw = match self.storage.get(LIST_CACHE_KEY) {
      Ok(Some(raw)) => raw,
      Ok(None) => return None,
      Err(e) => {
        warn!(error = %e, "Failed to read list cache");
        return None;
      }
    };

    let record: CacheRecord<Vec<PokemonSummary>> = match serde_json::from_str(&raw) {
      Ok(record) => record,
      Err(e) => {
        warn!(error = %e, "Ignoring malformed list cache");
        return None;
      }
    };

    if self.is_expired(record.timestamp) {
      debug!(timestamp = record.timestamp, "List cache expired");
      self.clear();
      return None;
    }

    Some(record.data)
  }

  /// Delete the cached list. Safe to call when nothing is cached.
  pub fn clear(&self) {
    if let Err(e) = self.storage.delete(LIST_CACHE_KEY) {
      warn!(error = %e, "Failed to clear list cache");
    }
  }

  /// Case-insensitive substring search over the cached names.
  ///
  /// Returns `None` when there is no valid cache, `Some(vec![])` for a blank
  /// query, otherwise the matches in cache order.
  pub fn search_substring(&self, query: &str) -> Option<Vec<PokemonSummary>> {
    let cached = self.read()?;

    if query.trim().is_empty() {
      return Some(Vec::new());
    }

    let needle = query.to_lowercase();
    Some(
      cached
        .into_iter()
        .filter(|pokemon| name_contains(&pokemon.name, &needle))
        .collect(),
    )
  }

  /// A timestamp too far from now to subtract counts as expired.
  fn is_expired(&self, timestamp: i64) -> bool {
    match self.clock.now_millis().checked_sub(timestamp) {
      Some(age) => age > self.ttl.num_milliseconds(),
      None => true,
    }
  }
}

impl<S: KeyValueStore + ?Sized> Clone for ListCache<S> {
  fn clone(&self) -> Self {
    Self {
      storage: Arc::clone(&self.storage),
      clock: Arc::clone(&self.clock),
      ttl: self.ttl,
    }
  }
}

//! Favorite Pokémon, persisted in the key-value store and shareable as a link.

use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};
use url::Url;

use crate::cache::KeyValueStore;
use crate::pokeapi::types::EntityId;

/// Storage key for the favorites list.
pub const FAVORITES_KEY: &str = "pokedex_favorites";

/// Query parameter carrying favorites in a share link.
pub const FAVORITES_PARAM: &str = "favorites";

/// Set of favorite ids, written through to storage on every change.
///
/// Storage failures are logged; the in-memory set stays authoritative for
/// the rest of the session.
pub struct Favorites<S: KeyValueStore + ?Sized> {
  storage: Arc<S>,
  ids: BTreeSet<EntityId>,
}

impl<S: KeyValueStore + ?Sized> Favorites<S> {
  /// Load favorites from storage. Missing or corrupt data loads as empty.
  pub fn load(storage: Arc<S>) -> Self {
    let ids = match storage.get(FAVORITES_KEY) {
      Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring malformed favorites");
        BTreeSet::new()
      }),
      Ok(None) => BTreeSet::new(),
      Err(e) => {
        warn!(error = %e, "Failed to read favorites");
        BTreeSet::new()
      }
    };

    Self { storage, ids }
  }

  pub fn ids(&self) -> &BTreeSet<EntityId> {
    &self.ids
  }

  pub fn contains(&self, id: EntityId) -> bool {
    self.ids.contains(&id)
  }

  pub fn len(&self) -> usize {
    self.ids.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ids.is_empty()
  }

  /// Add `id`. Returns false if it was already a favorite.
  pub fn add(&mut self, id: EntityId) -> bool {
    let added = self.ids.insert(id);
    if added {
      self.persist();
    }
    added
  }

  /// Remove `id`. Returns false if it wasn't a favorite.
  pub fn remove(&mut self, id: EntityId) -> bool {
    let removed = self.ids.remove(&id);
    if removed {
      self.persist();
    }
    removed
  }

  /// Flip membership of `id` and return whether it is now a favorite.
  pub fn toggle(&mut self, id: EntityId) -> bool {
    if self.remove(id) {
      false
    } else {
      self.add(id)
    }
  }

  pub fn clear(&mut self) {
    self.ids.clear();
    self.persist();
  }

  /// Comma-separated ids for a share link; empty when there are none.
  pub fn export_param(&self) -> String {
    self
      .ids
      .iter()
      .map(|id| id.to_string())
      .collect::<Vec<_>>()
      .join(",")
  }

  /// Merge ids from a share-link parameter. Returns how many were new.
  pub fn import_param(&mut self, param: &str) -> usize {
    let before = self.ids.len();
    self.ids.extend(parse_favorites_param(param));
    let added = self.ids.len() - before;
    if added > 0 {
      self.persist();
    }
    debug!(added, "Imported favorites");
    added
  }

  /// `<base>/?favorites=1,4,7`, or `None` when there is nothing to share.
  pub fn share_url(&self, base: &Url) -> Option<Url> {
    if self.ids.is_empty() {
      return None;
    }
    let mut url = base.clone();
    url.set_path("/");
    url
      .query_pairs_mut()
      .clear()
      .append_pair(FAVORITES_PARAM, &self.export_param());
    Some(url)
  }

  fn persist(&self) {
    let json = match serde_json::to_string(&self.ids) {
      Ok(json) => json,
      Err(e) => {
        warn!(error = %e, "Failed to serialize favorites");
        return;
      }
    };
    if let Err(e) = self.storage.set(FAVORITES_KEY, &json) {
      warn!(error = %e, "Failed to save favorites");
    }
  }
}

/// Parse `1,4,7` into ids. Tokens that aren't positive integers are dropped.
pub fn parse_favorites_param(param: &str) -> Vec<EntityId> {
  param
    .split(',')
    .filter_map(|token| token.trim().parse::<u32>().ok())
    .filter(|&id| id > 0)
    .map(EntityId)
    .collect()
}

/// Accept either a bare parameter value or a whole share link.
pub fn favorites_param_from_input(input: &str) -> String {
  match Url::parse(input.trim()) {
    Ok(url) => url
      .query_pairs()
      .find(|(key, _)| key == FAVORITES_PARAM)
      .map(|(_, value)| value.into_owned())
      .unwrap_or_default(),
    Err(_) => input.to_string(),
  }
}

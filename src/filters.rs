//! List filters: name search, generation range and favorites.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use crate::pokeapi::types::{EntityId, PokemonSummary};

/// A named, contiguous range of national dex ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
  pub id: u8,
  pub name: &'static str,
  pub first: u32,
  pub last: u32,
}

impl Generation {
  pub fn range(&self) -> RangeInclusive<u32> {
    self.first..=self.last
  }

  pub fn contains(&self, id: EntityId) -> bool {
    self.range().contains(&id.get())
  }

  /// "Gen 1 - Kanto"
  pub fn label(&self) -> String {
    format!("Gen {} - {}", self.id, self.name)
  }
}

pub const GENERATIONS: &[Generation] = &[
  Generation {
    id: 1,
    name: "Kanto",
    first: 1,
    last: 151,
  },
  Generation {
    id: 2,
    name: "Johto",
    first: 152,
    last: 251,
  },
  Generation {
    id: 3,
    name: "Hoenn",
    first: 252,
    last: 386,
  },
  Generation {
    id: 4,
    name: "Sinnoh",
    first: 387,
    last: 493,
  },
  Generation {
    id: 5,
    name: "Unova",
    first: 494,
    last: 649,
  },
  Generation {
    id: 6,
    name: "Kalos",
    first: 650,
    last: 721,
  },
  Generation {
    id: 7,
    name: "Alola",
    first: 722,
    last: 809,
  },
  Generation {
    id: 8,
    name: "Galar",
    first: 810,
    last: 905,
  },
];

/// Look up a generation by its number.
pub fn generation(id: u8) -> Option<&'static Generation> {
  GENERATIONS.iter().find(|g| g.id == id)
}

/// Active list filters. Unset fields don't filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PokemonFilters {
  pub generation: Option<u8>,
  pub favorites: bool,
  pub search: Option<String>,
}

impl PokemonFilters {
  pub fn is_active(&self) -> bool {
    self.generation.is_some()
      || self.favorites
      || self
        .search
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty())
  }
}

/// Case-insensitive substring check. `needle_lower` must already be lowercase.
pub fn name_contains(name: &str, needle_lower: &str) -> bool {
  name.to_lowercase().contains(needle_lower)
}

/// Apply every active filter in one pass: name, then generation, then favorites.
///
/// An unknown generation number filters nothing.
pub fn apply_filters(
  pokemons: &[PokemonSummary],
  filters: &PokemonFilters,
  favorite_ids: &BTreeSet<EntityId>,
) -> Vec<PokemonSummary> {
  let needle = filters
    .search
    .as_deref()
    .map(|s| s.trim().to_lowercase())
    .filter(|s| !s.is_empty());
  let generation = filters.generation.and_then(generation);

  pokemons
    .iter()
    .filter(|p| {
      needle
        .as_deref()
        .map_or(true, |needle| name_contains(&p.name, needle))
    })
    .filter(|p| generation.map_or(true, |g| g.contains(p.id)))
    .filter(|p| !filters.favorites || favorite_ids.contains(&p.id))
    .cloned()
    .collect()
}

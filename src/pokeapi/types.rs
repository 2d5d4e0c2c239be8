use serde::{Deserialize, Serialize};
use std::fmt;

use crate::pagination::Pagination;
use crate::type_chart::PokemonType;

/// Numeric Pokémon id, taken from the resource URL once and carried from then on.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntityId(pub u32);

impl EntityId {
  /// Parse the trailing numeric path segment of a resource URL.
  ///
  /// `https://pokeapi.co/api/v2/pokemon/25/` yields 25. Malformed URLs yield 0.
  pub fn from_resource_url(url: &str) -> Self {
    let id = url
      .split('/')
      .filter(|segment| !segment.is_empty())
      .next_back()
      .and_then(|segment| segment.parse().ok())
      .unwrap_or(0);
    Self(id)
  }

  pub fn get(self) -> u32 {
    self.0
  }
}

impl fmt::Display for EntityId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Summary of a Pokémon for list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSummary {
  pub id: EntityId,
  pub name: String,
  pub url: String,
}

impl PokemonSummary {
  /// Build a summary from a name and resource URL, deriving the id from the URL.
  pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
    let url = url.into();
    Self {
      id: EntityId::from_resource_url(&url),
      name: name.into(),
      url,
    }
  }
}

/// Full Pokémon details
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetails {
  pub id: EntityId,
  pub name: String,
  /// Canonical resource URL (`.../pokemon/{id}/`)
  pub url: String,
  /// Key for the species endpoint. Differs from `name` for forms.
  pub species: String,
  /// Decimetres
  pub height: u32,
  /// Hectograms
  pub weight: u32,
  pub base_experience: Option<u32>,
  pub types: Vec<TypeSlot>,
  pub abilities: Vec<AbilitySlot>,
  pub stats: Vec<BaseStat>,
  pub sprites: Sprites,
}

impl PokemonDetails {
  pub fn summary(&self) -> PokemonSummary {
    PokemonSummary {
      id: self.id,
      name: self.name.clone(),
      url: self.url.clone(),
    }
  }

  /// Base value of the named stat, if the record has it.
  pub fn stat(&self, name: &str) -> Option<u32> {
    self
      .stats
      .iter()
      .find(|s| s.name == name)
      .map(|s| s.base_value)
  }

  /// Types in slot order, skipping names the type chart doesn't know.
  pub fn defending_types(&self) -> Vec<PokemonType> {
    self
      .types
      .iter()
      .filter_map(|t| t.name.parse().ok())
      .collect()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSlot {
  pub slot: u8,
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbilitySlot {
  pub name: String,
  pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseStat {
  pub name: String,
  pub base_value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sprites {
  pub front_default: Option<String>,
  pub official_artwork: Option<String>,
}

/// Species record, with localized text already picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonSpecies {
  pub id: EntityId,
  pub name: String,
  pub genus: Option<String>,
  pub flavor_text: Option<String>,
  /// Generation resource name, e.g. "generation-i"
  pub generation: Option<String>,
  pub is_legendary: bool,
  pub is_mythical: bool,
}

/// One page of the summary collection
#[derive(Debug, Clone)]
pub struct PokemonPage {
  pub pokemons: Vec<PokemonSummary>,
  pub pagination: Pagination,
}

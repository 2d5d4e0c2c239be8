//! Serde-deserializable types matching PokeAPI responses.
//!
//! These types are separate from domain types to allow clean deserialization
//! while keeping domain types focused on application needs.

use serde::Deserialize;

use super::types::{
  AbilitySlot, BaseStat, EntityId, PokemonDetails, PokemonSpecies, PokemonSummary, Sprites,
  TypeSlot,
};
use crate::messages::Locale;

// ============================================================================
// Common nested field types
// ============================================================================

/// `{ name, url }` reference used all over the API
#[derive(Debug, Deserialize)]
pub struct ApiNamedResource {
  pub name: String,
  #[serde(default)]
  pub url: String,
}

impl From<ApiNamedResource> for PokemonSummary {
  fn from(resource: ApiNamedResource) -> Self {
    PokemonSummary::new(resource.name, resource.url)
  }
}

// ============================================================================
// Collection endpoint response (/pokemon?limit&offset)
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApiListResponse {
  #[serde(default)]
  pub count: u64,
  #[serde(default)]
  pub results: Vec<ApiNamedResource>,
}

// ============================================================================
// Detail endpoint response (/pokemon/{id})
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApiTypeSlot {
  pub slot: u8,
  #[serde(rename = "type")]
  pub type_ref: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiAbilitySlot {
  pub ability: ApiNamedResource,
  #[serde(default)]
  pub is_hidden: bool,
}

#[derive(Debug, Deserialize)]
pub struct ApiStat {
  pub base_stat: u32,
  pub stat: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiArtwork {
  pub front_default: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiOtherSprites {
  #[serde(rename = "official-artwork")]
  pub official_artwork: Option<ApiArtwork>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ApiSprites {
  pub front_default: Option<String>,
  #[serde(default)]
  pub other: Option<ApiOtherSprites>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPokemon {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub height: u32,
  #[serde(default)]
  pub weight: u32,
  pub base_experience: Option<u32>,
  #[serde(default)]
  pub types: Vec<ApiTypeSlot>,
  #[serde(default)]
  pub abilities: Vec<ApiAbilitySlot>,
  #[serde(default)]
  pub stats: Vec<ApiStat>,
  #[serde(default)]
  pub sprites: ApiSprites,
  /// Species this Pokémon (or form) belongs to
  pub species: Option<ApiNamedResource>,
}

impl ApiPokemon {
  /// Convert to domain details. `url` is the canonical resource URL.
  pub fn into_details(self, url: String) -> PokemonDetails {
    // Form names like "deoxys-normal" are not species names; key on the species id
    let species = match &self.species {
      Some(resource) => match EntityId::from_resource_url(&resource.url).get() {
        0 => resource.name.clone(),
        id => id.to_string(),
      },
      None => self.id.to_string(),
    };

    let mut types: Vec<TypeSlot> = self
      .types
      .into_iter()
      .map(|t| TypeSlot {
        slot: t.slot,
        name: t.type_ref.name,
      })
      .collect();
    types.sort_by_key(|t| t.slot);

    let official_artwork = self
      .sprites
      .other
      .and_then(|other| other.official_artwork)
      .and_then(|artwork| artwork.front_default);

    PokemonDetails {
      id: EntityId(self.id),
      name: self.name,
      url,
      species,
      height: self.height,
      weight: self.weight,
      base_experience: self.base_experience,
      types,
      abilities: self
        .abilities
        .into_iter()
        .map(|a| AbilitySlot {
          name: a.ability.name,
          is_hidden: a.is_hidden,
        })
        .collect(),
      stats: self
        .stats
        .into_iter()
        .map(|s| BaseStat {
          name: s.stat.name,
          base_value: s.base_stat,
        })
        .collect(),
      sprites: Sprites {
        front_default: self.sprites.front_default,
        official_artwork,
      },
    }
  }
}

// ============================================================================
// Species endpoint response (/pokemon-species/{id})
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ApiGenus {
  pub genus: String,
  pub language: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiFlavorText {
  pub flavor_text: String,
  pub language: ApiNamedResource,
}

#[derive(Debug, Deserialize)]
pub struct ApiSpecies {
  pub id: u32,
  pub name: String,
  #[serde(default)]
  pub genera: Vec<ApiGenus>,
  #[serde(default)]
  pub flavor_text_entries: Vec<ApiFlavorText>,
  pub generation: Option<ApiNamedResource>,
  #[serde(default)]
  pub is_legendary: bool,
  #[serde(default)]
  pub is_mythical: bool,
}

impl ApiSpecies {
  /// Convert to a domain species, picking text for `locale` with English fallback.
  pub fn into_species(self, locale: Locale) -> PokemonSpecies {
    let genus = pick_localized(&self.genera, locale, |g| &g.language.name)
      .map(|g| g.genus.clone());
    let flavor_text = pick_localized(&self.flavor_text_entries, locale, |f| &f.language.name)
      .map(|f| clean_flavor_text(&f.flavor_text));

    PokemonSpecies {
      id: EntityId(self.id),
      name: self.name,
      genus,
      flavor_text,
      generation: self.generation.map(|g| g.name),
      is_legendary: self.is_legendary,
      is_mythical: self.is_mythical,
    }
  }
}

/// First entry in `locale`, else the first English one.
fn pick_localized<T>(
  entries: &[T],
  locale: Locale,
  language: impl Fn(&T) -> &String,
) -> Option<&T> {
  entries
    .iter()
    .find(|e| language(e) == locale.language_code())
    .or_else(|| entries.iter().find(|e| language(e) == "en"))
}

/// Flavor text comes with form feeds and hard line breaks from the game data.
fn clean_flavor_text(raw: &str) -> String {
  raw
    .split(['\u{c}', '\n', '\r'])
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

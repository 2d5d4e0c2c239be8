//! Sort orders for summary lists.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use crate::pokeapi::types::PokemonSummary;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
  /// Keep the order the API returned
  #[default]
  Default,
  IdAsc,
  IdDesc,
  NameAsc,
  NameDesc,
}

impl SortMode {
  pub const ALL: [SortMode; 5] = [
    SortMode::Default,
    SortMode::IdAsc,
    SortMode::IdDesc,
    SortMode::NameAsc,
    SortMode::NameDesc,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      SortMode::Default => "default",
      SortMode::IdAsc => "id-asc",
      SortMode::IdDesc => "id-desc",
      SortMode::NameAsc => "name-asc",
      SortMode::NameDesc => "name-desc",
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      SortMode::Default => "Default order",
      SortMode::IdAsc => "ID: low to high",
      SortMode::IdDesc => "ID: high to low",
      SortMode::NameAsc => "Name: A-Z",
      SortMode::NameDesc => "Name: Z-A",
    }
  }

  /// Parse a mode name. Anything unrecognised means `Default`.
  pub fn parse_lenient(s: &str) -> Self {
    let lower = s.trim().to_lowercase();
    SortMode::ALL
      .into_iter()
      .find(|mode| mode.as_str() == lower)
      .unwrap_or_default()
  }
}

impl From<&str> for SortMode {
  fn from(s: &str) -> Self {
    SortMode::parse_lenient(s)
  }
}

impl fmt::Display for SortMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sort `pokemons` by `mode` without touching the input.
///
/// `Default` hands back the input slice itself. Every other mode returns a
/// new, stably sorted vector, so equal keys keep their relative order.
pub fn sort_pokemons(pokemons: &[PokemonSummary], mode: SortMode) -> Cow<'_, [PokemonSummary]> {
  let compare: fn(&PokemonSummary, &PokemonSummary) -> Ordering = match mode {
    SortMode::Default => return Cow::Borrowed(pokemons),
    SortMode::IdAsc => |a, b| a.id.cmp(&b.id),
    SortMode::IdDesc => |a, b| b.id.cmp(&a.id),
    SortMode::NameAsc => |a, b| compare_names(&a.name, &b.name),
    SortMode::NameDesc => |a, b| compare_names(&b.name, &a.name),
  };

  let mut sorted = pokemons.to_vec();
  sorted.sort_by(compare);
  Cow::Owned(sorted)
}

/// Case-folded comparison, falling back to the raw strings to keep it total.
fn compare_names(a: &str, b: &str) -> Ordering {
  a.to_lowercase()
    .cmp(&b.to_lowercase())
    .then_with(|| a.cmp(b))
}

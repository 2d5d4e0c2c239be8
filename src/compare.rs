//! Side-by-side base stat comparison of two Pokémon.

use std::cmp::Ordering;

use crate::pokeapi::types::PokemonDetails;

/// The six base stats, in the order they are shown
pub const CANONICAL_STATS: [&str; 6] = [
  "hp",
  "attack",
  "defense",
  "special-attack",
  "special-defense",
  "speed",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatComparison {
  pub name: &'static str,
  pub left: u32,
  pub right: u32,
}

impl StatComparison {
  /// `Greater` when the left Pokémon has the higher stat.
  pub fn winner(&self) -> Ordering {
    self.left.cmp(&self.right)
  }

  pub fn difference(&self) -> i64 {
    i64::from(self.left) - i64::from(self.right)
  }
}

/// Compare the canonical stats. A stat missing from a record counts as 0.
pub fn compare_stats(left: &PokemonDetails, right: &PokemonDetails) -> Vec<StatComparison> {
  CANONICAL_STATS
    .iter()
    .map(|&name| StatComparison {
      name,
      left: left.stat(name).unwrap_or(0),
      right: right.stat(name).unwrap_or(0),
    })
    .collect()
}

/// Sum of every base stat on the record.
pub fn total_base_stats(details: &PokemonDetails) -> u32 {
  details.stats.iter().map(|s| s.base_value).sum()
}

//! Type effectiveness chart and the weakness/resistance/immunity queries built on it.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PokemonType {
  Normal,
  Fire,
  Water,
  Electric,
  Grass,
  Ice,
  Fighting,
  Poison,
  Ground,
  Flying,
  Psychic,
  Bug,
  Rock,
  Ghost,
  Dragon,
  Dark,
  Steel,
  Fairy,
}

impl PokemonType {
  pub const ALL: [PokemonType; 18] = [
    PokemonType::Normal,
    PokemonType::Fire,
    PokemonType::Water,
    PokemonType::Electric,
    PokemonType::Grass,
    PokemonType::Ice,
    PokemonType::Fighting,
    PokemonType::Poison,
    PokemonType::Ground,
    PokemonType::Flying,
    PokemonType::Psychic,
    PokemonType::Bug,
    PokemonType::Rock,
    PokemonType::Ghost,
    PokemonType::Dragon,
    PokemonType::Dark,
    PokemonType::Steel,
    PokemonType::Fairy,
  ];

  /// Lowercase API name
  pub fn as_str(self) -> &'static str {
    match self {
      PokemonType::Normal => "normal",
      PokemonType::Fire => "fire",
      PokemonType::Water => "water",
      PokemonType::Electric => "electric",
      PokemonType::Grass => "grass",
      PokemonType::Ice => "ice",
      PokemonType::Fighting => "fighting",
      PokemonType::Poison => "poison",
      PokemonType::Ground => "ground",
      PokemonType::Flying => "flying",
      PokemonType::Psychic => "psychic",
      PokemonType::Bug => "bug",
      PokemonType::Rock => "rock",
      PokemonType::Ghost => "ghost",
      PokemonType::Dragon => "dragon",
      PokemonType::Dark => "dark",
      PokemonType::Steel => "steel",
      PokemonType::Fairy => "fairy",
    }
  }
}

impl fmt::Display for PokemonType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown type: {0}")]
pub struct UnknownType(pub String);

impl FromStr for PokemonType {
  type Err = UnknownType;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let lower = s.trim().to_lowercase();
    PokemonType::ALL
      .into_iter()
      .find(|t| t.as_str() == lower)
      .ok_or_else(|| UnknownType(s.to_string()))
  }
}

/// Multiplier for one attacking type hitting one defending type.
///
/// Only non-neutral pairs are listed; everything else is 1.
pub fn multiplier(attacking: PokemonType, defending: PokemonType) -> f64 {
  use PokemonType::*;

  match (attacking, defending) {
    // Normal
    (Normal, Ghost) => 0.0,
    (Normal, Rock) | (Normal, Steel) => 0.5,

    // Fire
    (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
    (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,

    // Water
    (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
    (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,

    // Electric
    (Electric, Ground) => 0.0,
    (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 0.5,
    (Electric, Water) | (Electric, Flying) => 2.0,

    // Grass
    (Grass, Fire)
    | (Grass, Grass)
    | (Grass, Poison)
    | (Grass, Flying)
    | (Grass, Bug)
    | (Grass, Dragon)
    | (Grass, Steel) => 0.5,
    (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,

    // Ice
    (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
    (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,

    // Fighting
    (Fighting, Ghost) => 0.0,
    (Fighting, Poison)
    | (Fighting, Flying)
    | (Fighting, Psychic)
    | (Fighting, Bug)
    | (Fighting, Fairy) => 0.5,
    (Fighting, Normal)
    | (Fighting, Ice)
    | (Fighting, Rock)
    | (Fighting, Dark)
    | (Fighting, Steel) => 2.0,

    // Poison
    (Poison, Steel) => 0.0,
    (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
    (Poison, Grass) | (Poison, Fairy) => 2.0,

    // Ground
    (Ground, Flying) => 0.0,
    (Ground, Grass) | (Ground, Bug) => 0.5,
    (Ground, Fire) | (Ground, Electric) | (Ground, Poison) | (Ground, Rock) | (Ground, Steel) => {
      2.0
    }

    // Flying
    (Flying, Electric) | (Flying, Rock) | (Flying, Steel) => 0.5,
    (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,

    // Psychic
    (Psychic, Dark) => 0.0,
    (Psychic, Psychic) | (Psychic, Steel) => 0.5,
    (Psychic, Fighting) | (Psychic, Poison) => 2.0,

    // Bug
    (Bug, Fire)
    | (Bug, Fighting)
    | (Bug, Poison)
    | (Bug, Flying)
    | (Bug, Ghost)
    | (Bug, Steel)
    | (Bug, Fairy) => 0.5,
    (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,

    // Rock
    (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
    (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,

    // Ghost
    (Ghost, Normal) => 0.0,
    (Ghost, Dark) => 0.5,
    (Ghost, Psychic) | (Ghost, Ghost) => 2.0,

    // Dragon
    (Dragon, Fairy) => 0.0,
    (Dragon, Steel) => 0.5,
    (Dragon, Dragon) => 2.0,

    // Dark
    (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
    (Dark, Psychic) | (Dark, Ghost) => 2.0,

    // Steel
    (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
    (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,

    // Fairy
    (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
    (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,

    _ => 1.0,
  }
}

/// Combined multiplier of `attacking` against every type in `defending`.
pub fn effectiveness_of(attacking: PokemonType, defending: &[PokemonType]) -> f64 {
  defending
    .iter()
    .map(|&d| multiplier(attacking, d))
    .product()
}

/// Name-based variant. Unknown type names count as neutral.
pub fn effectiveness_of_names(attacking: &str, defending: &[&str]) -> f64 {
  let Ok(attacking) = attacking.parse::<PokemonType>() else {
    return 1.0;
  };
  defending
    .iter()
    .filter_map(|d| d.parse::<PokemonType>().ok())
    .map(|d| multiplier(attacking, d))
    .product()
}

/// Attacking types grouped by how they fare against a defending combination.
///
/// The groups are disjoint; neutral types appear in none of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMatchups {
  /// Effectiveness of at least 2
  pub weak: Vec<PokemonType>,
  /// Effectiveness above 0 and at most 0.5
  pub resistant: Vec<PokemonType>,
  /// Effectiveness of exactly 0
  pub immune: Vec<PokemonType>,
}

/// Evaluate every attacking type against `defending` and partition the results.
pub fn classify(defending: &[PokemonType]) -> TypeMatchups {
  let mut matchups = TypeMatchups::default();

  for attacking in PokemonType::ALL {
    let effectiveness = effectiveness_of(attacking, defending);
    if effectiveness == 0.0 {
      matchups.immune.push(attacking);
    } else if effectiveness <= 0.5 {
      matchups.resistant.push(attacking);
    } else if effectiveness >= 2.0 {
      matchups.weak.push(attacking);
    }
  }

  matchups
}

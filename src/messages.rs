//! User-facing text in the supported locales.

use clap::ValueEnum;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
  #[default]
  En,
  Es,
}

impl Locale {
  /// PokeAPI language name for localized entries
  pub fn language_code(self) -> &'static str {
    match self {
      Locale::En => "en",
      Locale::Es => "es",
    }
  }
}

/// Messages shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
  NotFound,
  NetworkError,
  TimeoutError,
  GeneralError,
  NoResults,
  NoFavorites,
  EmptyFavorites,
  NoDescription,
}

pub fn text(message: Message, locale: Locale) -> &'static str {
  match (message, locale) {
    (Message::NotFound, Locale::En) => "Could not find that Pokémon",
    (Message::NotFound, Locale::Es) => "No se pudo encontrar el Pokémon",
    (Message::NetworkError, Locale::En) => "Network error. Please check your connection",
    (Message::NetworkError, Locale::Es) => "Error de red. Por favor verifica tu conexión",
    (Message::TimeoutError, Locale::En) => "The request took too long. Try again",
    (Message::TimeoutError, Locale::Es) => "La petición tardó demasiado. Intenta de nuevo",
    (Message::GeneralError, Locale::En) => "Something went wrong. Please try again",
    (Message::GeneralError, Locale::Es) => "Ocurrió un error. Por favor intenta de nuevo",
    (Message::NoResults, Locale::En) => "No Pokémon found",
    (Message::NoResults, Locale::Es) => "No se encontraron Pokémon",
    (Message::NoFavorites, Locale::En) => "You have no favorites to share",
    (Message::NoFavorites, Locale::Es) => "No tienes favoritos para compartir",
    (Message::EmptyFavorites, Locale::En) => "You have no favorites yet",
    (Message::EmptyFavorites, Locale::Es) => "Todavía no tienes favoritos",
    (Message::NoDescription, Locale::En) => "No description available.",
    (Message::NoDescription, Locale::Es) => "No hay descripción disponible.",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_language_codes() {
    assert_eq!(Locale::En.language_code(), "en");
    assert_eq!(Locale::Es.language_code(), "es");
  }

  #[test]
  fn test_locale_from_yaml() {
    let locale: Locale = serde_yaml::from_str("es").unwrap();
    assert_eq!(locale, Locale::Es);
  }

  #[test]
  fn test_text_differs_by_locale() {
    assert_ne!(
      text(Message::TimeoutError, Locale::En),
      text(Message::TimeoutError, Locale::Es)
    );
  }
}

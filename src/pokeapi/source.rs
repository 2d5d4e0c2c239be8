use async_trait::async_trait;

use super::error::ApiError;
use super::types::{PokemonDetails, PokemonPage, PokemonSpecies, PokemonSummary};

/// Anything that can answer Pokémon queries: the HTTP client in production,
/// a canned fake in tests.
#[async_trait]
pub trait PokemonSource: Send + Sync {
  /// One page of the summary collection. Pages start at 1.
  async fn list_page(&self, page: u32, page_size: u32) -> Result<PokemonPage, ApiError>;

  /// The complete summary collection.
  async fn list_all(&self) -> Result<Vec<PokemonSummary>, ApiError>;

  /// Details by numeric id or lowercase name.
  async fn get_details(&self, id_or_name: &str) -> Result<PokemonDetails, ApiError>;

  /// Species data by numeric id or lowercase name.
  async fn get_species(&self, id_or_name: &str) -> Result<PokemonSpecies, ApiError>;

  /// Details, then the species they reference.
  ///
  /// Sequential because a form name (`deoxys-normal`) is not a species name.
  async fn get_with_species(
    &self,
    id_or_name: &str,
  ) -> Result<(PokemonDetails, PokemonSpecies), ApiError> {
    let details = self.get_details(id_or_name).await?;
    let species = self.get_species(&details.species).await?;
    Ok((details, species))
  }
}

use async_trait::async_trait;
use color_eyre::{eyre::eyre, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::messages::Locale;
use crate::pagination::{self, Pagination};
use crate::pokeapi::api_types::{ApiListResponse, ApiPokemon, ApiSpecies};
use crate::pokeapi::error::ApiError;
use crate::pokeapi::source::PokemonSource;
use crate::pokeapi::types::{PokemonDetails, PokemonPage, PokemonSpecies, PokemonSummary};

/// PokeAPI client wrapper
#[derive(Clone)]
pub struct PokeApiClient {
  http: reqwest::Client,
  base_url: Url,
  timeout: Duration,
  /// `limit` used when fetching the complete collection
  full_list_limit: u32,
  locale: Locale,
}

impl PokeApiClient {
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = config.api.timeout();

    let http = reqwest::Client::builder()
      .timeout(timeout)
      .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| eyre!("Failed to create HTTP client: {}", e))?;

    let base_url = Url::parse(&config.api.base_url)
      .map_err(|e| eyre!("Invalid API base URL {}: {}", config.api.base_url, e))?;
    if base_url.cannot_be_a_base() {
      return Err(eyre!("Invalid API base URL {}", config.api.base_url));
    }

    Ok(Self {
      http,
      base_url,
      timeout,
      full_list_limit: config.api.full_list_limit,
      locale: config.locale,
    })
  }

  /// Build `{base}/{segments...}`, escaping each segment.
  fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = self.base_url.clone();
    url
      .path_segments_mut()
      .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
      .pop_if_empty()
      .extend(segments);
    Ok(url)
  }

  /// Canonical resource URL with the trailing slash the API itself uses.
  fn resource_url(&self, resource: &str, id: u32) -> Result<Url, ApiError> {
    self.endpoint(&[resource, &id.to_string(), ""])
  }

  fn collection_url(&self, limit: u32, offset: u32) -> Result<Url, ApiError> {
    let mut url = self.endpoint(&["pokemon"])?;
    url
      .query_pairs_mut()
      .append_pair("limit", &limit.to_string())
      .append_pair("offset", &offset.to_string());
    Ok(url)
  }

  async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
    debug!(%url, "GET");

    let response = self
      .http
      .get(url.clone())
      .send()
      .await
      .map_err(|e| self.transport_error(e))?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
      return Err(ApiError::NotFound(url.to_string()));
    }
    if !status.is_success() {
      return Err(ApiError::Status {
        status: status.as_u16(),
        url: url.to_string(),
      });
    }

    let body = response
      .bytes()
      .await
      .map_err(|e| self.transport_error(e))?;

    serde_json::from_slice(&body).map_err(|e| ApiError::Decode {
      url: url.to_string(),
      message: e.to_string(),
    })
  }

  fn transport_error(&self, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
      ApiError::Timeout(self.timeout)
    } else {
      ApiError::Network(err.to_string())
    }
  }
}

#[async_trait]
impl PokemonSource for PokeApiClient {
  async fn list_page(&self, page: u32, page_size: u32) -> Result<PokemonPage, ApiError> {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let url = self.collection_url(page_size, pagination::offset(page, page_size))?;

    let response: ApiListResponse = self.get_json(url).await?;

    Ok(PokemonPage {
      pagination: Pagination::new(page, response.count, page_size),
      pokemons: response.results.into_iter().map(Into::into).collect(),
    })
  }

  async fn list_all(&self) -> Result<Vec<PokemonSummary>, ApiError> {
    let url = self.collection_url(self.full_list_limit, 0)?;
    let response: ApiListResponse = self.get_json(url).await?;

    debug!(
      fetched = response.results.len(),
      total = response.count,
      "Fetched full collection"
    );

    Ok(response.results.into_iter().map(Into::into).collect())
  }

  async fn get_details(&self, id_or_name: &str) -> Result<PokemonDetails, ApiError> {
    let url = self.endpoint(&["pokemon", id_or_name])?;
    let pokemon: ApiPokemon = self.get_json(url).await?;
    let canonical = self.resource_url("pokemon", pokemon.id)?;
    Ok(pokemon.into_details(canonical.to_string()))
  }

  async fn get_species(&self, id_or_name: &str) -> Result<PokemonSpecies, ApiError> {
    let url = self.endpoint(&["pokemon-species", id_or_name])?;
    let species: ApiSpecies = self.get_json(url).await?;
    Ok(species.into_species(self.locale))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client_for(base_url: &str) -> PokeApiClient {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    PokeApiClient::new(&config).unwrap()
  }

  #[test]
  fn test_endpoint_without_trailing_slash() {
    let client = client_for("https://pokeapi.co/api/v2");
    let url = client.endpoint(&["pokemon", "pikachu"]).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/pikachu");
  }

  #[test]
  fn test_endpoint_with_trailing_slash() {
    let client = client_for("https://pokeapi.co/api/v2/");
    let url = client.endpoint(&["pokemon-species", "25"]).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon-species/25");
  }

  #[test]
  fn test_endpoint_escapes_segments() {
    let client = client_for("https://pokeapi.co/api/v2");
    let url = client.endpoint(&["pokemon", "../type"]).unwrap();
    assert!(url.as_str().starts_with("https://pokeapi.co/api/v2/pokemon/"));
    assert!(!url.as_str().ends_with("/type"));
  }

  #[test]
  fn test_resource_url_round_trips_id() {
    let client = client_for("https://pokeapi.co/api/v2");
    let url = client.resource_url("pokemon", 25).unwrap();
    assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon/25/");
  }

  #[test]
  fn test_collection_url() {
    let client = client_for("https://pokeapi.co/api/v2");
    let url = client.collection_url(20, 40).unwrap();
    assert_eq!(
      url.as_str(),
      "https://pokeapi.co/api/v2/pokemon?limit=20&offset=40"
    );
  }

  #[tokio::test]
  async fn test_unanswered_request_is_a_timeout() {
    // Accepts connections and never writes a response
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
      let mut held = Vec::new();
      while let Ok((socket, _)) = listener.accept().await {
        held.push(socket);
      }
    });

    let mut config = Config::default();
    config.api.base_url = format!("http://{}/api/v2", addr);
    config.api.timeout_ms = 200;
    let client = PokeApiClient::new(&config).unwrap();

    let err = client.get_details("pikachu").await.unwrap_err();
    assert!(matches!(err, ApiError::Timeout(_)), "got {:?}", err);
    assert_eq!(err.to_string(), "request timed out after 200ms");

    server.abort();
  }

  #[test]
  fn test_invalid_base_url_is_rejected() {
    let mut config = Config::default();
    config.api.base_url = "not a url".to_string();
    assert!(PokeApiClient::new(&config).is_err());
  }
}

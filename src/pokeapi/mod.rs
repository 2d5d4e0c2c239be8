//! PokeAPI access: HTTP client, wire types, domain types and search.

pub mod api_types;
pub mod client;
pub mod error;
pub mod search;
pub mod source;
pub mod types;

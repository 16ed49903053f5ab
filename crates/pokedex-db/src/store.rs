//! Store traits and error type shared by the Postgres and in-memory backends.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use crate::types::{MoveDoc, PokemonDoc};

#[derive(Debug)]
pub enum StoreError {
    /// Query or connection failure reported by the database driver
    Database(sqlx::Error),
    /// Store unreachable (connection-level failure)
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Database(e) => write!(f, "store query failed: {}", e),
            Self::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Database(e) => Some(e),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self::Database(e)
    }
}

/// Lookup operations over the `pokemon` collection.
///
/// Single-document lookups resolve ties by the store's own scan order; for
/// the in-memory store that is insertion order.
#[async_trait]
pub trait PokemonStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PokemonDoc>, StoreError>;

    async fn find_by_surrogate_id(&self, id: Uuid) -> Result<Option<PokemonDoc>, StoreError>;

    /// Public-id lookup matching only string-typed `id` payload values
    /// (composite forms like `"3-mega-venusaur"`).
    async fn find_by_public_id_text(&self, public_id: &str)
        -> Result<Option<PokemonDoc>, StoreError>;

    /// Public-id lookup matching only number-typed `id` payload values.
    async fn find_by_public_id_number(&self, public_id: i64)
        -> Result<Option<PokemonDoc>, StoreError>;

    /// One query matching the `name` field against any of `names`.
    async fn find_by_name_any(&self, names: &[String]) -> Result<Option<PokemonDoc>, StoreError>;
}

/// Lookup operations over the `pokemon_moves` collection.
#[async_trait]
pub trait MoveStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<MoveDoc>, StoreError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<MoveDoc>, StoreError>;
}

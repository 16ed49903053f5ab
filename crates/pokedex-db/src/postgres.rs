//! PostgreSQL-backed document store.
//!
//! Each collection is a `(id uuid, data jsonb)` table. Public-id matching
//! compares the `jsonb` value itself, not a text cast, so string and numeric
//! forms stay type-strict.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::store::{MoveStore, PokemonStore, StoreError};
use crate::types::{MoveDoc, PokemonDoc};

/// Shared store handle over the connection pool. Cheap to clone; constructed
/// once at startup and injected into the resolver and joiner.
#[derive(Clone)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PokemonStore for PgCatalog {
    async fn find_all(&self) -> Result<Vec<PokemonDoc>, StoreError> {
        let docs = sqlx::query_as::<_, PokemonDoc>("SELECT id, data FROM pokemon")
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    async fn find_by_surrogate_id(&self, id: Uuid) -> Result<Option<PokemonDoc>, StoreError> {
        let doc = sqlx::query_as::<_, PokemonDoc>("SELECT id, data FROM pokemon WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(doc)
    }

    async fn find_by_public_id_text(
        &self,
        public_id: &str,
    ) -> Result<Option<PokemonDoc>, StoreError> {
        let doc = sqlx::query_as::<_, PokemonDoc>(
            "SELECT id, data FROM pokemon WHERE data->'id' = to_jsonb($1::text) LIMIT 1",
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }

    async fn find_by_public_id_number(
        &self,
        public_id: i64,
    ) -> Result<Option<PokemonDoc>, StoreError> {
        let doc = sqlx::query_as::<_, PokemonDoc>(
            "SELECT id, data FROM pokemon WHERE data->'id' = to_jsonb($1::bigint) LIMIT 1",
        )
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }

    async fn find_by_name_any(&self, names: &[String]) -> Result<Option<PokemonDoc>, StoreError> {
        let doc = sqlx::query_as::<_, PokemonDoc>(
            "SELECT id, data FROM pokemon WHERE data->>'name' = ANY($1) LIMIT 1",
        )
        .bind(names)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }
}

#[async_trait]
impl MoveStore for PgCatalog {
    async fn find_all(&self) -> Result<Vec<MoveDoc>, StoreError> {
        let docs = sqlx::query_as::<_, MoveDoc>("SELECT id, data FROM pokemon_moves")
            .fetch_all(&self.pool)
            .await?;
        Ok(docs)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MoveDoc>, StoreError> {
        let doc = sqlx::query_as::<_, MoveDoc>(
            "SELECT id, data FROM pokemon_moves WHERE data->>'name' = $1 LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(doc)
    }
}

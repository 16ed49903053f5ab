//! In-memory document store.
//!
//! Mirrors the Postgres store's matching semantics with insertion-order
//! scans. Used by tests, which also flip `set_unavailable` to exercise the
//! store-failure paths.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::store::{MoveStore, PokemonStore, StoreError};
use crate::types::{MoveDoc, PokemonDoc};

#[derive(Default)]
pub struct MemoryStore {
    pokemon: Vec<PokemonDoc>,
    moves: Vec<MoveDoc>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a Pokémon payload, returning its store-assigned surrogate id.
    pub fn seed_pokemon(&mut self, data: Value) -> Uuid {
        let id = Uuid::new_v4();
        self.pokemon.push(PokemonDoc { id, data });
        id
    }

    /// Insert a move payload, returning its store-assigned surrogate id.
    pub fn seed_move(&mut self, data: Value) -> Uuid {
        let id = Uuid::new_v4();
        self.moves.push(MoveDoc { id, data });
        id
    }

    /// Make every subsequent call fail as if the connection dropped.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("connection refused".into()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<PokemonDoc>, StoreError> {
        self.check()?;
        Ok(self.pokemon.clone())
    }

    async fn find_by_surrogate_id(&self, id: Uuid) -> Result<Option<PokemonDoc>, StoreError> {
        self.check()?;
        Ok(self.pokemon.iter().find(|doc| doc.id == id).cloned())
    }

    async fn find_by_public_id_text(
        &self,
        public_id: &str,
    ) -> Result<Option<PokemonDoc>, StoreError> {
        self.check()?;
        Ok(self
            .pokemon
            .iter()
            .find(|doc| doc.data.get("id").and_then(Value::as_str) == Some(public_id))
            .cloned())
    }

    async fn find_by_public_id_number(
        &self,
        public_id: i64,
    ) -> Result<Option<PokemonDoc>, StoreError> {
        self.check()?;
        Ok(self
            .pokemon
            .iter()
            .find(|doc| doc.data.get("id").and_then(Value::as_i64) == Some(public_id))
            .cloned())
    }

    async fn find_by_name_any(&self, names: &[String]) -> Result<Option<PokemonDoc>, StoreError> {
        self.check()?;
        Ok(self
            .pokemon
            .iter()
            .find(|doc| doc.name().is_some_and(|n| names.iter().any(|v| v == n)))
            .cloned())
    }
}

#[async_trait]
impl MoveStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<MoveDoc>, StoreError> {
        self.check()?;
        Ok(self.moves.clone())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<MoveDoc>, StoreError> {
        self.check()?;
        Ok(self
            .moves
            .iter()
            .find(|doc| doc.name() == Some(name))
            .cloned())
    }
}

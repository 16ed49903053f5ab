use std::sync::Arc;

use pokedex_db::{MoveStore, PokemonStore};

/// Shared application state passed to all route handlers.
///
/// Both handles usually point at the same backing store; they are kept as
/// separate trait objects so tests can inject either collection on its own.
#[derive(Clone)]
pub struct AppState {
    pub pokemon: Arc<dyn PokemonStore>,
    pub moves: Arc<dyn MoveStore>,
}

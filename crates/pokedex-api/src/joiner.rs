//! Read-time join from a Pokémon's move list to move documents.

use pokedex_db::{MoveStore, PokemonDoc, StoreError};
use serde_json::Value;
use tracing::{debug, warn};

/// Expand `pokemon`'s move-name list into full move documents, in list order.
///
/// Move lists are short and order must match the input, so lookups run
/// sequentially. A name with no matching document is dropped from the result
/// and recorded as a data-quality diagnostic.
pub async fn join_moves(
    store: &dyn MoveStore,
    pokemon: &PokemonDoc,
) -> Result<Vec<Value>, StoreError> {
    let names = pokemon.move_names();
    if names.is_empty() {
        return Ok(Vec::new());
    }

    let mut moves = Vec::with_capacity(names.len());
    for name in names {
        match store.find_by_name(name).await? {
            Some(doc) => moves.push(doc.into_wire()),
            None => warn!(
                move_name = name,
                pokemon = pokemon.name().unwrap_or("unknown"),
                "referenced move not found in store"
            ),
        }
    }

    debug!(
        pokemon = pokemon.name().unwrap_or("unknown"),
        count = moves.len(),
        "joined moves"
    );
    Ok(moves)
}

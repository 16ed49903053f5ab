use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::joiner;
use crate::resolver::{self, MOVES_LOOKUP, SINGLE_LOOKUP};
use crate::state::AppState;

pub async fn list_pokemon(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let docs = state.pokemon.find_all().await?;
    Ok(Json(docs.into_iter().map(|doc| doc.into_wire()).collect()))
}

pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doc = resolver::resolve(state.pokemon.as_ref(), &SINGLE_LOOKUP, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pokémon not found".into()))?;
    Ok(Json(doc.into_wire()))
}

pub async fn get_pokemon_moves(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Value>>, AppError> {
    let pokemon = resolver::resolve(state.pokemon.as_ref(), &MOVES_LOOKUP, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pokémon not found".into()))?;

    let moves = joiner::join_moves(state.moves.as_ref(), &pokemon).await?;
    Ok(Json(moves))
}

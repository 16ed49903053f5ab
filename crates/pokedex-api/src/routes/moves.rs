use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::state::AppState;

pub async fn list_moves(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let docs = state.moves.find_all().await?;
    Ok(Json(docs.into_iter().map(|doc| doc.into_wire()).collect()))
}

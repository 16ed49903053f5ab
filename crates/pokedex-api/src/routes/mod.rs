pub mod health;
pub mod moves;
pub mod pokemon;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::state::AppState;

/// Create the HTTP router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/pokemon", get(pokemon::list_pokemon))
        .route("/pokemon/{id}", get(pokemon::get_pokemon))
        .route("/pokemon/{id}/moves", get(pokemon::get_pokemon_moves))
        .route("/moves", get(moves::list_moves))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pokedex_db::memory::MemoryStore;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn seeded_app() -> (Router, Arc<MemoryStore>, Uuid) {
        let mut store = MemoryStore::new();
        let pikachu_id = store.seed_pokemon(json!({
            "id": 25,
            "name": "Pikachu",
            "moves": ["Thunder Shock", "Quick Attack", "Lost Move"],
        }));
        store.seed_pokemon(json!({"id": 132, "name": "Ditto"}));
        store.seed_move(json!({"name": "Quick Attack", "type": "Normal"}));
        store.seed_move(json!({"name": "Thunder Shock", "type": "Electric"}));

        let store = Arc::new(store);
        let state = AppState {
            pokemon: store.clone(),
            moves: store.clone(),
        };
        (create_router(state), store, pikachu_id)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (router, _, _) = seeded_app();
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn list_pokemon_renders_surrogate_ids_as_strings() {
        let (router, _, pikachu_id) = seeded_app();
        let (status, body) = get_json(router, "/pokemon").await;
        assert_eq!(status, StatusCode::OK);

        let docs = body.as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["_id"], json!(pikachu_id.to_string()));
        assert_eq!(docs[0]["name"], "Pikachu");
    }

    #[tokio::test]
    async fn get_pokemon_by_numeric_id_name_and_surrogate_id() {
        let (router, _, pikachu_id) = seeded_app();

        let (status, body) = get_json(router.clone(), "/pokemon/25").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Pikachu");

        let (status, body) = get_json(router.clone(), "/pokemon/pikachu").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Pikachu");

        let uri = format!("/pokemon/{}", pikachu_id);
        let (status, body) = get_json(router, &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["_id"], json!(pikachu_id.to_string()));
    }

    #[tokio::test]
    async fn unknown_pokemon_returns_404_with_fixed_message() {
        let (router, _, _) = seeded_app();

        let (status, body) = get_json(router.clone(), "/pokemon/no-such-creature-zzz").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Pokémon not found"}));

        let (status, _) = get_json(router, "/pokemon/no-such-creature-zzz/moves").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn pokemon_moves_join_preserves_order_and_skips_misses() {
        let (router, _, _) = seeded_app();
        let (status, body) = get_json(router, "/pokemon/25/moves").await;
        assert_eq!(status, StatusCode::OK);

        let names: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["name"].as_str().unwrap())
            .collect();
        // "Lost Move" has no document and is dropped; stored order is kept.
        assert_eq!(names, vec!["Thunder Shock", "Quick Attack"]);
    }

    #[tokio::test]
    async fn pokemon_without_moves_joins_to_empty_list() {
        let (router, _, _) = seeded_app();
        let (status, body) = get_json(router, "/pokemon/ditto/moves").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn list_moves_returns_all_documents() {
        let (router, _, _) = seeded_app();
        let (status, body) = get_json(router, "/moves").await;
        assert_eq!(status, StatusCode::OK);

        let docs = body.as_array().unwrap();
        assert_eq!(docs.len(), 2);
        assert!(docs.iter().all(|d| d["_id"].is_string()));
    }

    #[tokio::test]
    async fn store_failure_returns_500_without_internal_detail() {
        let (router, store, _) = seeded_app();
        store.set_unavailable(true);

        for uri in ["/pokemon", "/pokemon/25", "/moves", "/pokemon/25/moves"] {
            let (status, body) = get_json(router.clone(), uri).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "uri {uri}");
            assert_eq!(body, json!({"error": "Internal server error"}), "uri {uri}");
        }
    }
}

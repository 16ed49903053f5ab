pub mod memory;
pub mod migrate;
pub mod postgres;
pub mod store;
pub mod types;

pub use sqlx::postgres::PgPool;
pub use store::{MoveStore, PokemonStore, StoreError};
pub use types::{MoveDoc, PokemonDoc};

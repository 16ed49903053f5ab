use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;
use uuid::Uuid;

/// A document from the `pokemon` collection: the store-assigned surrogate id
/// plus the seeded JSON payload, passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PokemonDoc {
    pub id: Uuid,
    pub data: Value,
}

impl PokemonDoc {
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }

    /// Move names referenced by this Pokémon, in stored order.
    /// An absent or non-array `moves` field reads as empty.
    pub fn move_names(&self) -> Vec<&str> {
        self.data
            .get("moves")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Wire form: the payload object with `_id` set to the surrogate id
    /// rendered as a string.
    pub fn into_wire(self) -> Value {
        with_wire_id(self.data, self.id)
    }
}

/// A document from the `pokemon_moves` collection. `name` is the exact-match
/// join key; everything else is opaque payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MoveDoc {
    pub id: Uuid,
    pub data: Value,
}

impl MoveDoc {
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(Value::as_str)
    }

    pub fn into_wire(self) -> Value {
        with_wire_id(self.data, self.id)
    }
}

// Seeded payloads are JSON objects; anything else degrades to just the id.
fn with_wire_id(data: Value, id: Uuid) -> Value {
    let mut map = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    map.insert("_id".to_string(), Value::String(id.to_string()));
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_form_carries_stringified_surrogate_id() {
        let id = Uuid::new_v4();
        let doc = PokemonDoc {
            id,
            data: json!({"id": 1, "name": "Bulbasaur", "types": ["Grass", "Poison"]}),
        };

        let wire = doc.into_wire();
        assert_eq!(wire["_id"], json!(id.to_string()));
        assert_eq!(wire["name"], json!("Bulbasaur"));
        assert_eq!(wire["types"], json!(["Grass", "Poison"]));
    }

    #[test]
    fn move_names_read_in_stored_order() {
        let doc = PokemonDoc {
            id: Uuid::new_v4(),
            data: json!({"name": "Bulbasaur", "moves": ["Tackle", "Vine Whip", "Growl"]}),
        };
        assert_eq!(doc.move_names(), vec!["Tackle", "Vine Whip", "Growl"]);
    }

    #[test]
    fn missing_moves_field_reads_as_empty() {
        let doc = PokemonDoc {
            id: Uuid::new_v4(),
            data: json!({"name": "Ditto"}),
        };
        assert!(doc.move_names().is_empty());

        let doc = PokemonDoc {
            id: Uuid::new_v4(),
            data: json!({"name": "Ditto", "moves": "Transform"}),
        };
        assert!(doc.move_names().is_empty());
    }
}

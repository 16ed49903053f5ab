//! Multi-strategy Pokémon identifier resolution.
//!
//! Path parameters arrive loosely typed: surrogate ids, numeric public ids,
//! composite variant ids like `3-mega-venusaur`, and names in whatever casing
//! the caller guessed. Each endpoint walks an ordered strategy list and the
//! first store hit wins. Surrogate id runs before public id, public id before
//! name guessing, so a token that parses as an id never falls into name
//! matching.

use pokedex_db::{PokemonDoc, PokemonStore, StoreError};
use uuid::Uuid;

/// Literal casing rewrites tried against the `name` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameVariant {
    Verbatim,
    /// First character upper, rest lower
    Capitalized,
    /// First letter of every alphabetic run upper, rest of the run lower
    TitleCased,
    UpperCased,
    LowerCased,
    HyphensToSpaces,
    HyphensToSpacesTitleCased,
    HyphensStrippedTitleCased,
}

impl NameVariant {
    pub fn apply(self, token: &str) -> String {
        match self {
            Self::Verbatim => token.to_string(),
            Self::Capitalized => capitalize(token),
            Self::TitleCased => title_case(token),
            Self::UpperCased => token.to_uppercase(),
            Self::LowerCased => token.to_lowercase(),
            Self::HyphensToSpaces => token.replace('-', " "),
            Self::HyphensToSpacesTitleCased => title_case(&token.replace('-', " ")),
            Self::HyphensStrippedTitleCased => title_case(&token.replace('-', "")),
        }
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn title_case(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut in_word = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// One resolution step: a pure parse attempt gating at most one store query.
/// A failed parse falls through to the next strategy without touching the
/// store.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Token parses as a surrogate-id literal
    SurrogateId,
    /// Payload `id` equals the token verbatim (composite variant forms)
    PublicIdVerbatim,
    /// Hyphenated token with a leading digit run, matched by its numeric prefix
    NumericPrefix,
    /// All-digit token matched as a numeric public id
    PublicIdNumeric,
    /// One store query over the set's literal casing rewrites of the token
    NameVariants(&'static [NameVariant]),
}

impl Strategy {
    async fn run(
        self,
        store: &dyn PokemonStore,
        token: &str,
    ) -> Result<Option<PokemonDoc>, StoreError> {
        match self {
            Self::SurrogateId => match Uuid::parse_str(token) {
                Ok(id) => store.find_by_surrogate_id(id).await,
                Err(_) => Ok(None),
            },
            Self::PublicIdVerbatim => store.find_by_public_id_text(token).await,
            Self::NumericPrefix => match numeric_prefix(token) {
                Some(id) => store.find_by_public_id_number(id).await,
                None => Ok(None),
            },
            Self::PublicIdNumeric => match numeric_token(token) {
                Some(id) => store.find_by_public_id_number(id).await,
                None => Ok(None),
            },
            Self::NameVariants(variants) => {
                let names: Vec<String> = variants.iter().map(|v| v.apply(token)).collect();
                store.find_by_name_any(&names).await
            }
        }
    }
}

fn numeric_prefix(token: &str) -> Option<i64> {
    if !token.contains('-') || !token.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    token[..end].parse().ok()
}

fn numeric_token(token: &str) -> Option<i64> {
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    // A digit run too long for i64 cannot be a real public id
    token.parse().ok()
}

/// Ordered strategy list used by one endpoint.
///
/// The two sets below evolved independently against different input corpora
/// and must stay separate; merging them would change matching behavior for
/// edge-case names.
pub struct StrategySet {
    pub name: &'static str,
    strategies: &'static [Strategy],
}

const SINGLE_LOOKUP_VARIANTS: &[NameVariant] = &[
    NameVariant::Verbatim,
    NameVariant::Capitalized,
    NameVariant::TitleCased,
    NameVariant::UpperCased,
    NameVariant::LowerCased,
    NameVariant::HyphensToSpaces,
    NameVariant::HyphensToSpacesTitleCased,
    NameVariant::HyphensStrippedTitleCased,
];

const MOVES_LOOKUP_VARIANTS: &[NameVariant] = &[
    NameVariant::Verbatim,
    NameVariant::Capitalized,
    NameVariant::TitleCased,
    NameVariant::HyphensToSpaces,
    NameVariant::HyphensToSpacesTitleCased,
];

/// Strategy set for `GET /pokemon/{id}`
pub const SINGLE_LOOKUP: StrategySet = StrategySet {
    name: "single-lookup",
    strategies: &[
        Strategy::SurrogateId,
        Strategy::PublicIdVerbatim,
        Strategy::PublicIdNumeric,
        Strategy::NameVariants(SINGLE_LOOKUP_VARIANTS),
    ],
};

/// Strategy set for `GET /pokemon/{id}/moves`
pub const MOVES_LOOKUP: StrategySet = StrategySet {
    name: "moves-lookup",
    strategies: &[
        Strategy::SurrogateId,
        Strategy::PublicIdVerbatim,
        Strategy::NumericPrefix,
        Strategy::PublicIdNumeric,
        Strategy::NameVariants(MOVES_LOOKUP_VARIANTS),
    ],
};

/// Walk the set in order; the first store hit wins.
pub async fn resolve(
    store: &dyn PokemonStore,
    set: &StrategySet,
    token: &str,
) -> Result<Option<PokemonDoc>, StoreError> {
    for strategy in set.strategies {
        if let Some(doc) = strategy.run(store, token).await? {
            return Ok(Some(doc));
        }
    }
    tracing::debug!(token, set = set.name, "no resolution strategy matched");
    Ok(None)
}

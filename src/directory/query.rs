/// List query for tokens: filter → sort → paginate
use serde::{Deserialize, Serialize};

use super::types::Token;
use crate::errors::{DirectoryError, DirectoryResult};

/// Token list query parameters
///
/// Deserialized straight from the HTTP query string. `limit` is optional
/// here; the service substitutes its configured default. Negative values are
/// accepted and resolved by [`window_bounds`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default)]
    pub limit: Option<i64>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub symbol_filter: Option<String>,
}

impl TokenListQuery {
    pub fn page(skip: i64, limit: i64) -> Self {
        Self {
            skip,
            limit: Some(limit),
            ..Default::default()
        }
    }

    pub fn sorted_by(mut self, field: impl Into<String>) -> Self {
        self.sort_by = Some(field.into());
        self
    }

    pub fn filtered_by(mut self, symbol: impl Into<String>) -> Self {
        self.symbol_filter = Some(symbol.into());
        self
    }
}

/// Token fields a list can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSortKey {
    Id,
    Symbol,
    BlockchainId,
}

impl TokenSortKey {
    /// Field name → key; `None` for anything that isn't a token field
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(TokenSortKey::Id),
            "symbol" => Some(TokenSortKey::Symbol),
            "blockchain_id" => Some(TokenSortKey::BlockchainId),
            _ => None,
        }
    }
}

/// Resolve `sort_by` into a key.
///
/// Blank means no sort. Unknown names are ignored unless `strict`.
pub fn resolve_sort_key(sort_by: Option<&str>, strict: bool) -> DirectoryResult<Option<TokenSortKey>> {
    let Some(raw) = sort_by.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match TokenSortKey::parse(raw) {
        Some(key) => Ok(Some(key)),
        None if strict => Err(DirectoryError::InvalidSortField(raw.to_string())),
        None => Ok(None),
    }
}

/// Case-insensitive substring match on the symbol
pub fn matches_symbol(token: &Token, needle_lower: &str) -> bool {
    token.symbol.to_lowercase().contains(needle_lower)
}

/// Stable ascending sort, ties keep insertion order
pub fn sort_tokens(items: &mut [Token], sort_key: TokenSortKey) {
    match sort_key {
        TokenSortKey::Id => items.sort_by_key(|t| t.id),
        TokenSortKey::Symbol => items.sort_by(|a, b| a.symbol.cmp(&b.symbol)),
        TokenSortKey::BlockchainId => items.sort_by_key(|t| t.blockchain_id),
    }
}

/// Resolve the half-open window `[skip, skip + limit)` against `len` items.
///
/// Bounds follow slice-index rules: a negative bound counts back from the end,
/// both bounds are clamped to `0..=len`, and `start >= end` is an empty window.
pub fn window_bounds(len: usize, skip: i64, limit: i64) -> (usize, usize) {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let resolve = |bound: i64| -> usize {
        let bound = if bound < 0 {
            bound.saturating_add(len_i).max(0)
        } else {
            bound.min(len_i)
        };
        usize::try_from(bound).unwrap_or(len)
    };

    let start = resolve(skip);
    let end = resolve(skip.saturating_add(limit));
    if start >= end {
        (0, 0)
    } else {
        (start, end)
    }
}

pub fn paginate(items: Vec<Token>, skip: i64, limit: i64) -> Vec<Token> {
    let (start, end) = window_bounds(items.len(), skip, limit);
    items.into_iter().skip(start).take(end - start).collect()
}

/// Run the full pipeline over a snapshot of the token collection
pub fn apply_query(
    tokens: Vec<Token>,
    skip: i64,
    limit: i64,
    sort_key: Option<TokenSortKey>,
    symbol_filter: Option<&str>,
) -> Vec<Token> {
    let mut result = match symbol_filter.filter(|s| !s.is_empty()) {
        Some(needle) => {
            let needle = needle.to_lowercase();
            tokens
                .into_iter()
                .filter(|t| matches_symbol(t, &needle))
                .collect()
        }
        None => tokens,
    };

    if let Some(key) = sort_key {
        sort_tokens(&mut result, key);
    }

    paginate(result, skip, limit)
}

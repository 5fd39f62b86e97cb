/// Token directory record types
///
/// These are the wire shapes as well: field names match the JSON the HTTP
/// API accepts and returns.
use serde::{Deserialize, Serialize};

/// A chain tokens are issued on (seed data, read-only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blockchain {
    pub id: i64,
    pub name: String,
}

/// Fields a client supplies when creating or replacing a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInput {
    pub symbol: String,
    pub blockchain_id: i64,
}

impl TokenInput {
    pub fn new(symbol: impl Into<String>, blockchain_id: i64) -> Self {
        Self {
            symbol: symbol.into(),
            blockchain_id,
        }
    }

    pub fn with_id(self, id: i64) -> Token {
        Token {
            id,
            symbol: self.symbol,
            blockchain_id: self.blockchain_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub id: i64,
    pub symbol: String,
    /// Not checked against the blockchain list unless configured to be
    pub blockchain_id: i64,
}

/// Post-launch performance figures for a token (seed data, read-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchMetric {
    pub id: i64,
    pub roi: f64,
    pub community_allocation: f64,
    pub token_id: i64,
}

/// A token together with every launch metric that references it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDetail {
    pub token: Token,
    pub metrics: Vec<LaunchMetric>,
}

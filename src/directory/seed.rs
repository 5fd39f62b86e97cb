/// Rows every fresh directory starts with
use super::types::{Blockchain, LaunchMetric, Token};

pub fn seed_blockchains() -> Vec<Blockchain> {
    vec![
        Blockchain {
            id: 1,
            name: "Ethereum".to_string(),
        },
        Blockchain {
            id: 2,
            name: "Solana".to_string(),
        },
    ]
}

pub fn seed_tokens() -> Vec<Token> {
    [(1, "ETH", 1), (2, "UNI", 1), (3, "SOL", 2)]
        .into_iter()
        .map(|(id, symbol, blockchain_id)| Token {
            id,
            symbol: symbol.to_string(),
            blockchain_id,
        })
        .collect()
}

pub fn seed_metrics() -> Vec<LaunchMetric> {
    vec![
        LaunchMetric {
            id: 1,
            roi: 150.5,
            community_allocation: 15.0,
            token_id: 1,
        },
        LaunchMetric {
            id: 2,
            roi: 300.0,
            community_allocation: 5.0,
            token_id: 2,
        },
    ]
}

//! Token repository abstraction and its in-memory implementation.
//!
//! The service only talks to [`TokenRepository`], so a persistent backend can
//! replace [`InMemoryStore`] without touching request handling. The in-memory
//! store keeps all three collections behind one lock; each method holds it for
//! its whole read-modify-write, so id assignment never races.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::seed;
use super::types::{Blockchain, LaunchMetric, Token, TokenInput};
use crate::config::IdStrategy;
use crate::errors::DirectoryResult;

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Snapshot of all tokens in insertion order
    async fn all_tokens(&self) -> DirectoryResult<Vec<Token>>;

    async fn find_token(&self, id: i64) -> DirectoryResult<Option<Token>>;

    /// Assign an id and append
    async fn insert_token(&self, input: TokenInput) -> DirectoryResult<Token>;

    /// Replace symbol and blockchain_id, keeping the id. `None` when absent.
    async fn replace_token(&self, id: i64, input: TokenInput) -> DirectoryResult<Option<Token>>;

    /// Remove every token with this id, returning how many were removed
    async fn remove_token(&self, id: i64) -> DirectoryResult<usize>;

    async fn token_count(&self) -> DirectoryResult<usize>;

    /// Metrics whose `token_id` matches, in stored order
    async fn metrics_for_token(&self, token_id: i64) -> DirectoryResult<Vec<LaunchMetric>>;

    async fn all_blockchains(&self) -> DirectoryResult<Vec<Blockchain>>;

    async fn find_blockchain(&self, id: i64) -> DirectoryResult<Option<Blockchain>>;
}

#[derive(Debug, Default)]
struct Collections {
    blockchains: Vec<Blockchain>,
    tokens: Vec<Token>,
    metrics: Vec<LaunchMetric>,
    /// Highest id handed out so far (monotonic strategy)
    last_token_id: i64,
}

impl Collections {
    fn next_token_id(&mut self, strategy: IdStrategy) -> i64 {
        match strategy {
            IdStrategy::MaxPlusOne => self.tokens.iter().map(|t| t.id).max().map_or(1, |max| max + 1),
            IdStrategy::Monotonic => {
                self.last_token_id += 1;
                self.last_token_id
            }
        }
    }
}

/// Process-local token store; all state is lost when it is dropped
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Collections>,
    id_strategy: IdStrategy,
}

impl InMemoryStore {
    /// Empty store
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self::with_data(id_strategy, Vec::new(), Vec::new(), Vec::new())
    }

    /// Store pre-filled with the standard seed rows
    pub fn seeded(id_strategy: IdStrategy) -> Self {
        Self::with_data(
            id_strategy,
            seed::seed_blockchains(),
            seed::seed_tokens(),
            seed::seed_metrics(),
        )
    }

    pub fn with_data(
        id_strategy: IdStrategy,
        blockchains: Vec<Blockchain>,
        tokens: Vec<Token>,
        metrics: Vec<LaunchMetric>,
    ) -> Self {
        let last_token_id = tokens.iter().map(|t| t.id).max().unwrap_or(0);
        Self {
            inner: RwLock::new(Collections {
                blockchains,
                tokens,
                metrics,
                last_token_id,
            }),
            id_strategy,
        }
    }
}

#[async_trait]
impl TokenRepository for InMemoryStore {
    async fn all_tokens(&self) -> DirectoryResult<Vec<Token>> {
        Ok(self.inner.read().tokens.clone())
    }

    async fn find_token(&self, id: i64) -> DirectoryResult<Option<Token>> {
        Ok(self.inner.read().tokens.iter().find(|t| t.id == id).cloned())
    }

    async fn insert_token(&self, input: TokenInput) -> DirectoryResult<Token> {
        let mut inner = self.inner.write();
        let id = inner.next_token_id(self.id_strategy);
        let token = input.with_id(id);
        inner.tokens.push(token.clone());
        Ok(token)
    }

    async fn replace_token(&self, id: i64, input: TokenInput) -> DirectoryResult<Option<Token>> {
        let mut inner = self.inner.write();
        Ok(inner.tokens.iter_mut().find(|t| t.id == id).map(|slot| {
            *slot = input.with_id(id);
            slot.clone()
        }))
    }

    async fn remove_token(&self, id: i64) -> DirectoryResult<usize> {
        let mut inner = self.inner.write();
        let before = inner.tokens.len();
        inner.tokens.retain(|t| t.id != id);
        Ok(before - inner.tokens.len())
    }

    async fn token_count(&self) -> DirectoryResult<usize> {
        Ok(self.inner.read().tokens.len())
    }

    async fn metrics_for_token(&self, token_id: i64) -> DirectoryResult<Vec<LaunchMetric>> {
        Ok(self
            .inner
            .read()
            .metrics
            .iter()
            .filter(|m| m.token_id == token_id)
            .cloned()
            .collect())
    }

    async fn all_blockchains(&self) -> DirectoryResult<Vec<Blockchain>> {
        Ok(self.inner.read().blockchains.clone())
    }

    async fn find_blockchain(&self, id: i64) -> DirectoryResult<Option<Blockchain>> {
        Ok(self.inner.read().blockchains.iter().find(|b| b.id == id).cloned())
    }
}

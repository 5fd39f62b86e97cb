/// Token directory service
///
/// Holds the repository and the directory settings, and implements the
/// token operations exposed over HTTP. Every operation is a single repository
/// round trip (plus one lookup for referential checks when enabled).
use std::sync::Arc;

use super::query::{self, TokenListQuery};
use super::store::{InMemoryStore, TokenRepository};
use super::types::{Blockchain, Token, TokenDetail, TokenInput};
use crate::config::DirectoryConfig;
use crate::errors::{DirectoryError, DirectoryResult};
use crate::logger::{self, LogTag};

#[derive(Clone)]
pub struct TokenDirectory {
    repo: Arc<dyn TokenRepository>,
    config: DirectoryConfig,
}

impl TokenDirectory {
    pub fn new(repo: Arc<dyn TokenRepository>, config: DirectoryConfig) -> Self {
        Self { repo, config }
    }

    /// Directory over a freshly seeded in-memory store
    pub fn in_memory(config: DirectoryConfig) -> Self {
        let store = InMemoryStore::seeded(config.id_strategy);
        Self::new(Arc::new(store), config)
    }

    pub async fn create_token(&self, input: TokenInput) -> DirectoryResult<Token> {
        self.check_blockchain_ref(input.blockchain_id).await?;

        let token = self.repo.insert_token(input).await?;
        logger::info(
            LogTag::Directory,
            &format!("Token {} created ({})", token.id, token.symbol),
        );
        Ok(token)
    }

    /// Filter → sort → paginate over the current token collection
    pub async fn list_tokens(&self, query: &TokenListQuery) -> DirectoryResult<Vec<Token>> {
        let sort_key = query::resolve_sort_key(query.sort_by.as_deref(), self.config.strict_sort)?;
        let limit = self.effective_limit(query.limit);

        let tokens = self.repo.all_tokens().await?;
        let total = tokens.len();
        let result = query::apply_query(
            tokens,
            query.skip,
            limit,
            sort_key,
            query.symbol_filter.as_deref(),
        );

        logger::debug(
            LogTag::Directory,
            &format!(
                "list_tokens skip={} limit={} sort={:?} filter={:?} → {}/{}",
                query.skip,
                limit,
                sort_key,
                query.symbol_filter,
                result.len(),
                total
            ),
        );
        logger::verbose(
            LogTag::Directory,
            &format!(
                "list_tokens ids={:?}",
                result.iter().map(|t| t.id).collect::<Vec<_>>()
            ),
        );
        Ok(result)
    }

    pub async fn get_token(&self, token_id: i64) -> DirectoryResult<TokenDetail> {
        let token = self
            .repo
            .find_token(token_id)
            .await?
            .ok_or_else(|| DirectoryError::token_not_found(token_id))?;
        let metrics = self.repo.metrics_for_token(token_id).await?;
        Ok(TokenDetail { token, metrics })
    }

    /// Full replacement of symbol and blockchain_id; the id is preserved
    pub async fn update_token(&self, token_id: i64, input: TokenInput) -> DirectoryResult<Token> {
        self.check_blockchain_ref(input.blockchain_id).await?;

        let token = self
            .repo
            .replace_token(token_id, input)
            .await?
            .ok_or_else(|| DirectoryError::token_not_found(token_id))?;
        logger::info(
            LogTag::Directory,
            &format!("Token {} updated ({})", token.id, token.symbol),
        );
        Ok(token)
    }

    pub async fn delete_token(&self, token_id: i64) -> DirectoryResult<()> {
        let removed = self.repo.remove_token(token_id).await?;
        if removed == 0 {
            return Err(DirectoryError::token_not_found(token_id));
        }
        logger::info(LogTag::Directory, &format!("Token {} deleted", token_id));
        Ok(())
    }

    pub async fn list_blockchains(&self) -> DirectoryResult<Vec<Blockchain>> {
        self.repo.all_blockchains().await
    }

    pub async fn get_blockchain(&self, id: i64) -> DirectoryResult<Blockchain> {
        self.repo
            .find_blockchain(id)
            .await?
            .ok_or_else(|| DirectoryError::blockchain_not_found(id))
    }

    pub async fn token_count(&self) -> DirectoryResult<usize> {
        self.repo.token_count().await
    }

    /// Requested limit (or the default), capped by `max_limit` when it is set
    fn effective_limit(&self, requested: Option<i64>) -> i64 {
        let limit = requested.unwrap_or_else(|| to_i64(self.config.default_limit));
        match self.config.max_limit {
            0 => limit,
            max => limit.min(to_i64(max)),
        }
    }

    async fn check_blockchain_ref(&self, blockchain_id: i64) -> DirectoryResult<()> {
        if !self.config.enforce_blockchain_refs {
            return Ok(());
        }
        match self.repo.find_blockchain(blockchain_id).await? {
            Some(_) => Ok(()),
            None => Err(DirectoryError::UnknownBlockchain(blockchain_id)),
        }
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdStrategy;
    use crate::directory::types::LaunchMetric;

    fn directory() -> TokenDirectory {
        TokenDirectory::in_memory(DirectoryConfig::default())
    }

    fn directory_with(f: impl FnOnce(&mut DirectoryConfig)) -> TokenDirectory {
        let mut config = DirectoryConfig::default();
        f(&mut config);
        TokenDirectory::in_memory(config)
    }

    #[tokio::test]
    async fn test_seed_token_detail() {
        let detail = directory().get_token(1).await.unwrap();
        assert_eq!(detail.token, TokenInput::new("ETH", 1).with_id(1));
        assert_eq!(
            detail.metrics,
            vec![LaunchMetric {
                id: 1,
                roi: 150.5,
                community_allocation: 15.0,
                token_id: 1,
            }]
        );
    }

    #[tokio::test]
    async fn test_token_without_metrics() {
        let detail = directory().get_token(3).await.unwrap();
        assert_eq!(detail.token.symbol, "SOL");
        assert!(detail.metrics.is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_echoes_fields() {
        let dir = directory();
        let created = dir.create_token(TokenInput::new("ARB", 7)).await.unwrap();
        let detail = dir.get_token(created.id).await.unwrap();
        assert_eq!(detail.token.symbol, "ARB");
        assert_eq!(detail.token.blockchain_id, 7);
    }

    #[tokio::test]
    async fn test_created_ids_strictly_increase() {
        let dir = directory();
        let mut last = 3;
        for symbol in ["A", "B", "C", "D"] {
            let token = dir.create_token(TokenInput::new(symbol, 1)).await.unwrap();
            assert!(token.id > last);
            last = token.id;
        }
    }

    #[tokio::test]
    async fn test_update_then_get() {
        let dir = directory();
        let updated = dir.update_token(2, TokenInput::new("UNI2", 2)).await.unwrap();
        assert_eq!(updated, TokenInput::new("UNI2", 2).with_id(2));

        let detail = dir.get_token(2).await.unwrap();
        assert_eq!(detail.token, updated);
        assert_eq!(detail.metrics.len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let err = directory()
            .update_token(99, TokenInput::new("X", 1))
            .await
            .unwrap_err();
        assert_eq!(err, DirectoryError::token_not_found(99));
    }

    #[tokio::test]
    async fn test_delete_then_get_fails() {
        let dir = directory();
        dir.delete_token(3).await.unwrap();
        assert!(dir.get_token(3).await.unwrap_err().is_not_found());
        assert!(dir.delete_token(3).await.unwrap_err().is_not_found());
        assert_eq!(dir.token_count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_default_limit_and_filter() {
        let dir = directory();
        for i in 0..12 {
            dir.create_token(TokenInput::new(format!("META{}", i), 1)).await.unwrap();
        }

        let page = dir.list_tokens(&TokenListQuery::default()).await.unwrap();
        assert_eq!(page.len(), 10);
        assert_eq!(page[0].id, 1);

        let filtered = dir
            .list_tokens(&TokenListQuery::page(0, 50).filtered_by("et"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 13);
        assert!(filtered.iter().all(|t| t.symbol.to_lowercase().contains("et")));
    }

    #[tokio::test]
    async fn test_large_limit_uncapped_by_default() {
        let dir = directory();
        for i in 0..150 {
            dir.create_token(TokenInput::new(format!("BULK{}", i), 1)).await.unwrap();
        }

        let page = dir.list_tokens(&TokenListQuery::page(0, 200)).await.unwrap();
        assert_eq!(page.len(), 153);
    }

    #[tokio::test]
    async fn test_limit_clamped_to_max() {
        let dir = directory_with(|c| c.max_limit = 2);
        let page = dir.list_tokens(&TokenListQuery::page(0, 50)).await.unwrap();
        assert_eq!(page.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_sort_ignored_by_default() {
        let page = directory()
            .list_tokens(&TokenListQuery::page(0, 10).sorted_by("market_cap"))
            .await
            .unwrap();
        let ids: Vec<i64> = page.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_unknown_sort_rejected_when_strict() {
        let dir = directory_with(|c| c.strict_sort = true);
        let err = dir
            .list_tokens(&TokenListQuery::page(0, 10).sorted_by("market_cap"))
            .await
            .unwrap_err();
        assert_eq!(err, DirectoryError::InvalidSortField("market_cap".to_string()));
    }

    #[tokio::test]
    async fn test_blockchain_refs_permissive_by_default() {
        let token = directory().create_token(TokenInput::new("GHOST", 99)).await.unwrap();
        assert_eq!(token.blockchain_id, 99);
    }

    #[tokio::test]
    async fn test_blockchain_refs_enforced() {
        let dir = directory_with(|c| c.enforce_blockchain_refs = true);
        assert_eq!(
            dir.create_token(TokenInput::new("GHOST", 99)).await.unwrap_err(),
            DirectoryError::UnknownBlockchain(99)
        );
        assert_eq!(
            dir.update_token(1, TokenInput::new("ETH", 99)).await.unwrap_err(),
            DirectoryError::UnknownBlockchain(99)
        );
        assert!(dir.create_token(TokenInput::new("JUP", 2)).await.is_ok());
    }

    #[tokio::test]
    async fn test_max_plus_one_strategy_from_config() {
        let dir = directory_with(|c| c.id_strategy = IdStrategy::MaxPlusOne);
        dir.delete_token(3).await.unwrap();
        let token = dir.create_token(TokenInput::new("SOL", 2)).await.unwrap();
        assert_eq!(token.id, 3);
    }

    #[tokio::test]
    async fn test_blockchain_lookups() {
        let dir = directory();
        let chains = dir.list_blockchains().await.unwrap();
        assert_eq!(chains.len(), 2);
        assert_eq!(dir.get_blockchain(2).await.unwrap().name, "Solana");
        assert!(dir.get_blockchain(5).await.unwrap_err().is_not_found());
    }
}

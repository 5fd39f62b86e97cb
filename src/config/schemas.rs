/// Configuration schemas - all config structures defined once with defaults
use crate::config_struct;
use serde::{Deserialize, Serialize};

// ============================================================================
// WEBSERVER CONFIGURATION
// ============================================================================

config_struct! {
    /// HTTP listener configuration
    pub struct WebserverConfig {
        host: String = "127.0.0.1".to_string(),
        port: u16 = 8000,

        /// gzip responses when the client accepts it
        compression: bool = true,

        /// Permissive CORS (any origin)
        cors_permissive: bool = true,
    }
}

// ============================================================================
// DIRECTORY CONFIGURATION
// ============================================================================

/// How new token ids are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Counter starting at the highest seeded id; ids are never reused
    Monotonic,
    /// Highest existing id + 1 (1 when empty); ids of deleted tail records come back
    MaxPlusOne,
}

config_struct! {
    /// Token directory behaviour
    pub struct DirectoryConfig {
        /// `limit` used by list requests that don't pass one
        default_limit: usize = 10,

        /// Upper bound applied to `limit` (0 = unbounded)
        max_limit: usize = 0,

        id_strategy: IdStrategy = IdStrategy::Monotonic,

        /// Reject unknown `sort_by` fields instead of ignoring them
        strict_sort: bool = false,

        /// Reject tokens whose `blockchain_id` is not a known blockchain
        enforce_blockchain_refs: bool = false,
    }
}

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        webserver: WebserverConfig = WebserverConfig::default(),
        directory: DirectoryConfig = DirectoryConfig::default(),
    }
}

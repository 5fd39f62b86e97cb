//! Token directory: blockchains, tokens and their launch metrics.
//!
//! [`TokenDirectory`] is the entry point; storage sits behind
//! [`TokenRepository`] with [`InMemoryStore`] as the bundled backend.

pub mod query;
pub mod seed;
pub mod service;
pub mod store;
pub mod types;

pub use query::{TokenListQuery, TokenSortKey};
pub use service::TokenDirectory;
pub use store::{InMemoryStore, TokenRepository};
pub use types::{Blockchain, LaunchMetric, Token, TokenDetail, TokenInput};

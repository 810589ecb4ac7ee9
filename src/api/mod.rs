// src/api/mod.rs
//! Notion API interaction — transports, the wire schema, and the
//! endpoint drivers.
//!
//! The layering is strict: [`Transport`] does I/O and nothing else,
//! `raw` mirrors the remote JSON, `normalize` turns raw shapes into the
//! domain model, and the drivers (`query`, `children`, `update`) wire
//! the three together per endpoint.

pub mod children;
pub mod client;
mod normalize;
pub mod query;
mod raw;
pub mod update;

use crate::error::Error;
use serde_json::Value;

/// The ability to exchange JSON with the Notion service.
///
/// Drivers depend on this trait, never on HTTP details, so tests can
/// substitute a scripted in-memory transport. Retry and timeout policy
/// belong to implementations, not to callers of this trait.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// GET `path` with the given query string parameters.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error>;

    /// POST `body` as JSON to `path`.
    async fn post(&self, path: &str, body: Value) -> Result<Value, Error>;

    /// PATCH `body` as JSON to `path`.
    async fn patch(&self, path: &str, body: Value) -> Result<Value, Error>;
}

// Re-export the public interface
pub use children::{retrieve_block_children, RetrieveBlockChildrenParams};
pub use client::NotionHttpClient;
pub use query::{query_database, QueryDatabaseParams};
pub use update::{update_page_properties, UpdatePagePropertiesParams};

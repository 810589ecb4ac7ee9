// src/lib.rs
//! notion-typed — a typed client for the Notion API.
//!
//! Three concerns, kept strictly apart:
//! - **Request building** — `filter` (query filters) and `property`
//!   (page-property updates) construct values that serialize exactly to
//!   the published wire grammar.
//! - **Response normalization** — the loosely-typed JSON the service
//!   returns becomes a branded-identifier domain model (`Page`, `Block`,
//!   `PropertyValue`); unknown wire variants degrade to `Unsupported`
//!   markers instead of failing.
//! - **Drivers** — `query_database` and `retrieve_block_children` paginate
//!   lazily through the cursor protocol; `update_page_properties` applies
//!   one mutation and returns the updated page.
//!
//! All I/O goes through the [`Transport`] trait; [`NotionHttpClient`] is
//! the reqwest-backed implementation, and tests substitute scripted ones.

mod api;
mod constants;
mod error;
pub mod filter;
mod model;
pub mod property;
mod types;

// --- Error Handling ---
pub use crate::error::{Error, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Domain Model ---
pub use crate::model::{
    Block, BlockContent, FileObject, HeadingContent, Icon, LinkToPageTarget, Page, PageProperty,
    Parent, PropertyValue, RichTextKind, SelectKind, SelectValue, TextBlockContent, UrlValue,
};

// --- Domain Types ---
pub use crate::types::{
    Annotations, ApiKey, BlockId, Color, DatabaseId, DateRange, Mention, PageId, PropertyId,
    RichTextContent, RichTextItem, SelectId, TemplateMention, TemplateMentionDate,
    TemplateMentionUser, UserId,
};

// --- Request Builders ---
pub use crate::filter::Filter;
pub use crate::property::{CoverUpdate, IconUpdate, PropertyUpdate};

// --- API Client ---
pub use crate::api::{
    query_database, retrieve_block_children, update_page_properties, NotionHttpClient,
    QueryDatabaseParams, RetrieveBlockChildrenParams, Transport, UpdatePagePropertiesParams,
};

// --- Constants ---
pub use crate::constants::{API_BASE_URL, NOTION_API_MAX_PAGE_SIZE, NOTION_ORIGIN, NOTION_VERSION};

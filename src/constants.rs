// src/constants.rs
//! Domain constants that define the operational boundaries of the client.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL of the Notion REST API.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

/// The dated API revision this client is pinned to.
///
/// Sent as the `Notion-Version` header on every request. The wire schema
/// this crate mirrors is the one published for this revision.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Origin used to resolve relative URLs in API responses.
///
/// The API occasionally returns workspace-relative hrefs (e.g. in mentions);
/// they resolve against this origin.
pub const NOTION_ORIGIN: &str = "https://www.notion.so";

/// The maximum `page_size` the Notion API accepts per paginated request.
///
/// Not enforced by this client; the service rejects larger values itself.
/// Documented here so callers tuning page size know the ceiling.
pub const NOTION_API_MAX_PAGE_SIZE: u32 = 100;

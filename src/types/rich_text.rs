// src/types/rich_text.rs
//! Normalized rich text — the text runs embedded in titles, rich-text
//! properties, and most block types.
//!
//! The wire duplicates `annotations`/`plain_text`/`href` across every
//! variant; here they are hoisted onto [`RichTextItem`] and the variant
//! union carries only what is specific to it.

use super::{Color, DatabaseId, PageId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// A single normalized rich text run.
#[derive(Debug, Clone, PartialEq)]
pub struct RichTextItem {
    pub annotations: Annotations,
    pub plain_text: String,
    /// Absolute URL; relative wire hrefs are resolved against the Notion
    /// origin, and unresolvable ones degrade to `None`.
    pub href: Option<Url>,
    pub content: RichTextContent,
}

/// The content variant of a rich text run.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextContent {
    /// Plain text; everything it carries is already hoisted onto the item.
    Text,
    Mention(Mention),
    /// A KaTeX expression.
    Equation(String),
}

/// An inline mention, with references resolved to branded IDs.
#[derive(Debug, Clone, PartialEq)]
pub enum Mention {
    User(UserId),
    Date(DateRange),
    LinkPreview(Url),
    TemplateMention(TemplateMention),
    Page(PageId),
    Database(DatabaseId),
}

/// Template-only mentions, materialized when a template is instantiated.
/// Passed through from the wire unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TemplateMention {
    #[serde(rename = "template_mention_date")]
    Date {
        template_mention_date: TemplateMentionDate,
    },
    #[serde(rename = "template_mention_user")]
    User {
        template_mention_user: TemplateMentionUser,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMentionDate {
    Today,
    Now,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMentionUser {
    Me,
}

/// A date or date range. The wire's `time_zone` is always null at the
/// pinned API revision, so it is not modeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

/// Text formatting annotations. Shared verbatim between the wire schema
/// and the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

impl RichTextItem {
    /// A plain unannotated text run — the most common shape in fixtures
    /// and tests.
    pub fn plain_text(text: &str) -> Self {
        Self {
            annotations: Annotations::default(),
            plain_text: text.to_string(),
            href: None,
            content: RichTextContent::Text,
        }
    }
}

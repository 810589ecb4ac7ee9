// src/api/raw.rs
//! Wire-format response types, mirroring the remote JSON exactly.
//!
//! Nothing here is public API. These types exist only to be deserialized
//! and immediately handed to `normalize`; field names and nesting follow
//! the service's schema, not this crate's domain model. Unknown `type`
//! tags land on `Unsupported` catch-all variants so schema drift never
//! turns into a deserialization failure.

use crate::types::{Annotations, Color, TemplateMention};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A paginated list body, already past the error-envelope check.
#[derive(Debug, Deserialize)]
pub(crate) struct RawList {
    pub results: Vec<Value>,
    pub next_cursor: Option<String>,
}

/// The `{object: "error", code, message}` envelope body.
#[derive(Debug, Deserialize)]
pub(crate) struct RawApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPartialUser {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPageRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDatabaseRef {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawDate {
    pub start: String,
    pub end: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSelectOption {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Color,
}

// ---------------------------------------------------------------------------
// Rich text
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawRichTextItem {
    #[serde(default)]
    pub annotations: Annotations,
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(flatten)]
    pub content: RawRichTextContent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawRichTextContent {
    Text { text: RawTextPayload },
    Mention { mention: RawMention },
    Equation { equation: RawEquation },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTextPayload {
    #[allow(dead_code)]
    pub content: String,
    #[allow(dead_code)]
    #[serde(default)]
    pub link: Option<RawLink>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLink {
    #[allow(dead_code)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEquation {
    pub expression: String,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawMention {
    User { user: RawPartialUser },
    Date { date: RawDate },
    LinkPreview { link_preview: RawLinkPreview },
    TemplateMention { template_mention: TemplateMention },
    Page { page: RawPageRef },
    Database { database: RawDatabaseRef },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawLinkPreview {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Pages and property values
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawPage {
    pub id: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub created_by: RawPartialUser,
    pub last_edited_by: RawPartialUser,
    #[serde(default)]
    pub in_trash: bool,
    pub properties: IndexMap<String, RawPropertyValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPropertyValue {
    pub id: String,
    #[serde(flatten)]
    pub payload: RawPropertyPayload,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawPropertyPayload {
    Title {
        title: Vec<RawRichTextItem>,
    },
    RichText {
        rich_text: Vec<RawRichTextItem>,
    },
    Number {
        number: Option<f64>,
    },
    Select {
        select: Option<RawSelectOption>,
    },
    MultiSelect {
        multi_select: Vec<RawSelectOption>,
    },
    Status {
        status: Option<RawSelectOption>,
    },
    Url {
        url: Option<String>,
    },
    Date {
        date: Option<RawDate>,
    },
    Email {
        email: Option<String>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Checkbox {
        checkbox: bool,
    },
    Relation {
        relation: Vec<RawPageRef>,
        #[serde(default)]
        has_more: bool,
    },
    /// Catch-all for property types this client does not model
    /// (people, files, formula, rollup, and whatever ships next).
    #[serde(other)]
    Unsupported,
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawBlock {
    pub id: String,
    pub created_time: String,
    pub last_edited_time: String,
    pub created_by: RawPartialUser,
    pub last_edited_by: RawPartialUser,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub in_trash: bool,
    pub parent: RawParent,
    #[serde(flatten)]
    pub content: RawBlockContent,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawParent {
    DatabaseId { database_id: String },
    PageId { page_id: String },
    BlockId { block_id: String },
    Workspace,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawBlockContent {
    Paragraph {
        paragraph: RawTextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: RawHeading,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: RawHeading,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: RawHeading,
    },
    BulletedListItem {
        bulleted_list_item: RawTextBlock,
    },
    NumberedListItem {
        numbered_list_item: RawTextBlock,
    },
    Quote {
        quote: RawTextBlock,
    },
    ToDo {
        to_do: RawToDo,
    },
    Toggle {
        toggle: RawTextBlock,
    },
    Template {
        template: RawTemplate,
    },
    SyncedBlock {
        synced_block: RawSyncedBlock,
    },
    ChildPage {
        child_page: RawChildTitle,
    },
    ChildDatabase {
        child_database: RawChildTitle,
    },
    Equation {
        equation: RawEquation,
    },
    Code {
        code: RawCode,
    },
    Callout {
        callout: RawCallout,
    },
    Divider {
        divider: RawEmpty,
    },
    Breadcrumb {
        breadcrumb: RawEmpty,
    },
    TableOfContents {
        table_of_contents: RawTableOfContents,
    },
    ColumnList {
        column_list: RawEmpty,
    },
    Column {
        column: RawEmpty,
    },
    LinkToPage {
        link_to_page: RawLinkToPage,
    },
    Table {
        table: RawTable,
    },
    TableRow {
        table_row: RawTableRow,
    },
    Embed {
        embed: RawCaptionedUrl,
    },
    Bookmark {
        bookmark: RawCaptionedUrl,
    },
    Image {
        image: RawFile,
    },
    Video {
        video: RawFile,
    },
    Pdf {
        pdf: RawFile,
    },
    File {
        file: RawFile,
    },
    Audio {
        audio: RawFile,
    },
    LinkPreview {
        link_preview: RawLinkPreview,
    },
    /// Catch-all for block types this client does not model. The wire
    /// type name is recovered from the surrounding JSON value during
    /// normalization.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTextBlock {
    pub rich_text: Vec<RawRichTextItem>,
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawHeading {
    pub rich_text: Vec<RawRichTextItem>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawToDo {
    pub rich_text: Vec<RawRichTextItem>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub checked: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTemplate {
    pub rich_text: Vec<RawRichTextItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSyncedBlock {
    pub synced_from: Option<RawSyncedFrom>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSyncedFrom {
    pub block_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawChildTitle {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCode {
    pub rich_text: Vec<RawRichTextItem>,
    #[serde(default)]
    pub caption: Vec<RawRichTextItem>,
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCallout {
    pub rich_text: Vec<RawRichTextItem>,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub icon: Option<RawIcon>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawIcon {
    Emoji { emoji: String },
    External { external: RawExternalFile },
    File { file: RawHostedFile },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEmpty {}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTableOfContents {
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawLinkToPage {
    PageId { page_id: String },
    DatabaseId { database_id: String },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTable {
    pub table_width: u32,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTableRow {
    pub cells: Vec<Vec<RawRichTextItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCaptionedUrl {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub caption: Vec<RawRichTextItem>,
}

/// A media block payload: the `file | external` source union plus the
/// caption and optional display name that sit beside it.
#[derive(Debug, Deserialize)]
pub(crate) struct RawFile {
    #[serde(default)]
    pub caption: Vec<RawRichTextItem>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub source: RawFileSource,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum RawFileSource {
    File { file: RawHostedFile },
    External { external: RawExternalFile },
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawHostedFile {
    pub url: String,
    pub expiry_time: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawExternalFile {
    pub url: String,
}

// src/model/block.rs
//! The normalized block entity and its content union.

use crate::types::{BlockId, Color, DatabaseId, PageId, RichTextItem, UserId};
use chrono::{DateTime, Utc};
use url::Url;

use super::UrlValue;

/// A content block from the children endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: UserId,
    pub last_edited_by: UserId,
    pub has_children: bool,
    pub in_trash: bool,
    pub parent: Parent,
    pub content: BlockContent,
}

/// Where a block lives.
#[derive(Debug, Clone, PartialEq)]
pub enum Parent {
    Database(DatabaseId),
    Page(PageId),
    Block(BlockId),
    Workspace,
}

/// Rich text plus color — the payload shared by most text-bearing blocks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextBlockContent {
    pub rich_text: Vec<RichTextItem>,
    pub color: Color,
}

/// A heading; toggleable headings fold their children.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingContent {
    pub rich_text: Vec<RichTextItem>,
    pub color: Color,
    pub is_toggleable: bool,
}

/// Block content, one variant per block type the API can return.
///
/// Anything newer than this list degrades to `Unsupported` carrying the
/// wire type name, so schema drift never breaks enumeration of children.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Paragraph(TextBlockContent),
    Heading1(HeadingContent),
    Heading2(HeadingContent),
    Heading3(HeadingContent),
    BulletedListItem(TextBlockContent),
    NumberedListItem(TextBlockContent),
    Quote(TextBlockContent),
    ToDo {
        content: TextBlockContent,
        checked: bool,
    },
    Toggle(TextBlockContent),
    Template {
        rich_text: Vec<RichTextItem>,
    },
    /// Original block when `synced_from` is absent; a reference otherwise.
    SyncedBlock {
        synced_from: Option<BlockId>,
    },
    ChildPage {
        title: String,
    },
    ChildDatabase {
        title: String,
    },
    Equation {
        expression: String,
    },
    Code {
        rich_text: Vec<RichTextItem>,
        caption: Vec<RichTextItem>,
        language: String,
    },
    Callout {
        content: TextBlockContent,
        icon: Option<Icon>,
    },
    Divider,
    Breadcrumb,
    TableOfContents {
        color: Color,
    },
    ColumnList,
    Column,
    LinkToPage(LinkToPageTarget),
    Table {
        table_width: u32,
        has_column_header: bool,
        has_row_header: bool,
    },
    TableRow {
        cells: Vec<Vec<RichTextItem>>,
    },
    Embed {
        url: UrlValue,
        caption: Vec<RichTextItem>,
    },
    Bookmark {
        url: UrlValue,
        caption: Vec<RichTextItem>,
    },
    Image {
        file: FileObject,
        caption: Vec<RichTextItem>,
    },
    Video {
        file: FileObject,
        caption: Vec<RichTextItem>,
    },
    Pdf {
        file: FileObject,
        caption: Vec<RichTextItem>,
    },
    File {
        file: FileObject,
        caption: Vec<RichTextItem>,
        name: Option<String>,
    },
    Audio {
        file: FileObject,
        caption: Vec<RichTextItem>,
    },
    LinkPreview {
        url: Url,
    },
    /// A block type this client does not model; carries the wire type name.
    Unsupported {
        block_type: String,
    },
}

impl BlockContent {
    /// The wire type name, for diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            BlockContent::Paragraph(_) => "paragraph",
            BlockContent::Heading1(_) => "heading_1",
            BlockContent::Heading2(_) => "heading_2",
            BlockContent::Heading3(_) => "heading_3",
            BlockContent::BulletedListItem(_) => "bulleted_list_item",
            BlockContent::NumberedListItem(_) => "numbered_list_item",
            BlockContent::Quote(_) => "quote",
            BlockContent::ToDo { .. } => "to_do",
            BlockContent::Toggle(_) => "toggle",
            BlockContent::Template { .. } => "template",
            BlockContent::SyncedBlock { .. } => "synced_block",
            BlockContent::ChildPage { .. } => "child_page",
            BlockContent::ChildDatabase { .. } => "child_database",
            BlockContent::Equation { .. } => "equation",
            BlockContent::Code { .. } => "code",
            BlockContent::Callout { .. } => "callout",
            BlockContent::Divider => "divider",
            BlockContent::Breadcrumb => "breadcrumb",
            BlockContent::TableOfContents { .. } => "table_of_contents",
            BlockContent::ColumnList => "column_list",
            BlockContent::Column => "column",
            BlockContent::LinkToPage(_) => "link_to_page",
            BlockContent::Table { .. } => "table",
            BlockContent::TableRow { .. } => "table_row",
            BlockContent::Embed { .. } => "embed",
            BlockContent::Bookmark { .. } => "bookmark",
            BlockContent::Image { .. } => "image",
            BlockContent::Video { .. } => "video",
            BlockContent::Pdf { .. } => "pdf",
            BlockContent::File { .. } => "file",
            BlockContent::Audio { .. } => "audio",
            BlockContent::LinkPreview { .. } => "link_preview",
            BlockContent::Unsupported { block_type } => block_type,
        }
    }
}

/// Target of a `link_to_page` block.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkToPageTarget {
    Page(PageId),
    Database(DatabaseId),
}

/// A file attached to a block, with the `file | external` wire union
/// collapsed into one type.
#[derive(Debug, Clone, PartialEq)]
pub enum FileObject {
    /// Uploaded to Notion; the URL is signed and expires.
    Hosted {
        url: Url,
        expiry_time: DateTime<Utc>,
    },
    /// Linked from elsewhere; never expires.
    External { url: Url },
}

impl FileObject {
    pub fn url(&self) -> &Url {
        match self {
            FileObject::Hosted { url, .. } | FileObject::External { url } => url,
        }
    }
}

/// Page or callout icon.
#[derive(Debug, Clone, PartialEq)]
pub enum Icon {
    Emoji(String),
    External { url: Url },
    File { url: Url },
}

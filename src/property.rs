// src/property.rs
//! Typed page-property update payloads.
//!
//! Like the filters, these are write-only values serialized straight into a
//! PATCH body. The explicit-null convention matters here: `number(None)`
//! serializes to `{"type":"number","number":null}` and clears the property,
//! while leaving the property out of the update map entirely leaves it
//! untouched.

use serde::{Serialize, Serializer};

use crate::types::{Annotations, DatabaseId, PageId, SelectId, UserId};
use chrono::{DateTime, SecondsFormat, Utc};

/// One property's new value, tagged with the property type on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyUpdate {
    Title { title: Vec<RichTextRequest> },
    RichText { rich_text: Vec<RichTextRequest> },
    Number { number: Option<f64> },
    Url { url: Option<String> },
    Select { select: Option<SelectOptionRequest> },
    MultiSelect { multi_select: Vec<SelectOptionRequest> },
    Status { status: Option<SelectOptionRequest> },
    People { people: Vec<UserReference> },
    Email { email: Option<String> },
    PhoneNumber { phone_number: Option<String> },
    Date { date: Option<DateRequest> },
    Checkbox { checkbox: bool },
    Relation { relation: Vec<PageReference> },
    Files { files: Vec<FileRequest> },
}

/// Replace a title property's rich text.
pub fn title(items: impl IntoIterator<Item = RichTextRequest>) -> PropertyUpdate {
    PropertyUpdate::Title {
        title: items.into_iter().collect(),
    }
}

/// Replace a rich text property's content.
pub fn rich_text(items: impl IntoIterator<Item = RichTextRequest>) -> PropertyUpdate {
    PropertyUpdate::RichText {
        rich_text: items.into_iter().collect(),
    }
}

/// Set or clear a number property.
pub fn number(value: Option<f64>) -> PropertyUpdate {
    PropertyUpdate::Number { number: value }
}

/// Set or clear a URL property. The string is sent verbatim; the service
/// accepts anything here, valid URL or not.
pub fn url(value: Option<impl Into<String>>) -> PropertyUpdate {
    PropertyUpdate::Url {
        url: value.map(Into::into),
    }
}

/// Set or clear a select property.
pub fn select(option: Option<SelectOptionRequest>) -> PropertyUpdate {
    PropertyUpdate::Select { select: option }
}

/// Replace a multi-select property's options.
pub fn multi_select(options: impl IntoIterator<Item = SelectOptionRequest>) -> PropertyUpdate {
    PropertyUpdate::MultiSelect {
        multi_select: options.into_iter().collect(),
    }
}

/// Set or clear a status property.
pub fn status(option: Option<SelectOptionRequest>) -> PropertyUpdate {
    PropertyUpdate::Status { status: option }
}

/// Replace a people property's user list.
pub fn people(users: impl IntoIterator<Item = UserId>) -> PropertyUpdate {
    PropertyUpdate::People {
        people: users.into_iter().map(|id| UserReference { id }).collect(),
    }
}

/// Set or clear an email property.
pub fn email(value: Option<impl Into<String>>) -> PropertyUpdate {
    PropertyUpdate::Email {
        email: value.map(Into::into),
    }
}

/// Set or clear a phone number property.
pub fn phone_number(value: Option<impl Into<String>>) -> PropertyUpdate {
    PropertyUpdate::PhoneNumber {
        phone_number: value.map(Into::into),
    }
}

/// Set or clear a date property.
pub fn date(value: Option<DateRequest>) -> PropertyUpdate {
    PropertyUpdate::Date { date: value }
}

/// Set a checkbox property.
pub fn checkbox(checked: bool) -> PropertyUpdate {
    PropertyUpdate::Checkbox { checkbox: checked }
}

/// Replace a relation property's related pages.
pub fn relation(pages: impl IntoIterator<Item = PageId>) -> PropertyUpdate {
    PropertyUpdate::Relation {
        relation: pages.into_iter().map(|id| PageReference { id }).collect(),
    }
}

/// Replace a files property's attachments.
pub fn files(attachments: impl IntoIterator<Item = FileRequest>) -> PropertyUpdate {
    PropertyUpdate::Files {
        files: attachments.into_iter().collect(),
    }
}

// ---------------------------------------------------------------------------
// Rich text requests
// ---------------------------------------------------------------------------

/// One rich text item in a request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextRequest {
    Text {
        text: TextRequest,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
    Mention {
        mention: MentionRequest,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
    Equation {
        equation: EquationRequest,
        #[serde(skip_serializing_if = "Option::is_none")]
        annotations: Option<Annotations>,
    },
}

impl RichTextRequest {
    /// Plain text, no link, default annotations.
    pub fn text(content: impl Into<String>) -> Self {
        RichTextRequest::Text {
            text: TextRequest {
                content: content.into(),
                link: None,
            },
            annotations: None,
        }
    }

    /// Text carrying an inline link.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        RichTextRequest::Text {
            text: TextRequest {
                content: content.into(),
                link: Some(LinkRequest { url: url.into() }),
            },
            annotations: None,
        }
    }

    /// An inline user mention.
    pub fn mention_user(id: UserId) -> Self {
        RichTextRequest::Mention {
            mention: MentionRequest::User {
                user: UserReference { id },
            },
            annotations: None,
        }
    }

    /// An inline page mention.
    pub fn mention_page(id: PageId) -> Self {
        RichTextRequest::Mention {
            mention: MentionRequest::Page {
                page: PageReference { id },
            },
            annotations: None,
        }
    }

    /// An inline database mention.
    pub fn mention_database(id: DatabaseId) -> Self {
        RichTextRequest::Mention {
            mention: MentionRequest::Database {
                database: DatabaseReference { id },
            },
            annotations: None,
        }
    }

    /// An inline date mention.
    pub fn mention_date(date: DateRequest) -> Self {
        RichTextRequest::Mention {
            mention: MentionRequest::Date { date },
            annotations: None,
        }
    }

    /// An inline equation.
    pub fn equation(expression: impl Into<String>) -> Self {
        RichTextRequest::Equation {
            equation: EquationRequest {
                expression: expression.into(),
            },
            annotations: None,
        }
    }

    /// Attach explicit annotations to this item.
    pub fn with_annotations(mut self, a: Annotations) -> Self {
        match &mut self {
            RichTextRequest::Text { annotations, .. }
            | RichTextRequest::Mention { annotations, .. }
            | RichTextRequest::Equation { annotations, .. } => *annotations = Some(a),
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextRequest {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkRequest>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquationRequest {
    pub expression: String,
}

/// Mention payload: the wire keys the target object by its kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MentionRequest {
    User { user: UserReference },
    Page { page: PageReference },
    Database { database: DatabaseReference },
    Date { date: DateRequest },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReference {
    pub id: UserId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReference {
    pub id: PageId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatabaseReference {
    pub id: DatabaseId,
}

// ---------------------------------------------------------------------------
// Option, date, and file requests
// ---------------------------------------------------------------------------

/// A select/status/multi-select option, referenced by ID or by name.
/// Referencing by name creates the option if the schema allows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SelectOptionRequest {
    Id { id: SelectId },
    Name { name: String },
}

impl SelectOptionRequest {
    pub fn by_id(id: SelectId) -> Self {
        SelectOptionRequest::Id { id }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        SelectOptionRequest::Name { name: name.into() }
    }
}

/// A date property value: a start instant and an optional end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRequest {
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateRequest {
    /// A single instant.
    pub fn at(start: DateTime<Utc>) -> Self {
        DateRequest {
            start: to_iso(start),
            end: None,
        }
    }

    /// A range.
    pub fn range(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        DateRequest {
            start: to_iso(start),
            end: Some(to_iso(end)),
        }
    }

    /// A date-only value (`YYYY-MM-DD`), no time component.
    pub fn day(date: chrono::NaiveDate) -> Self {
        DateRequest {
            start: date.format("%Y-%m-%d").to_string(),
            end: None,
        }
    }
}

fn to_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// One attachment of a files property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRequest {
    pub name: String,
    #[serde(flatten)]
    pub source: FileSourceRequest,
}

impl FileRequest {
    /// An externally hosted file.
    pub fn external(name: impl Into<String>, url: impl Into<String>) -> Self {
        FileRequest {
            name: name.into(),
            source: FileSourceRequest::External {
                external: ExternalFileRequest { url: url.into() },
            },
        }
    }

    /// A Notion-hosted file, re-sent by its signed URL. Only URLs that came
    /// out of a previous response are meaningful here; the API cannot
    /// upload new content.
    pub fn hosted(name: impl Into<String>, url: impl Into<String>) -> Self {
        FileRequest {
            name: name.into(),
            source: FileSourceRequest::File {
                file: HostedFileRequest { url: url.into() },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileSourceRequest {
    External { external: ExternalFileRequest },
    File { file: HostedFileRequest },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalFileRequest {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HostedFileRequest {
    pub url: String,
}

// ---------------------------------------------------------------------------
// Icon and cover updates
// ---------------------------------------------------------------------------

/// A page icon update. `Remove` serializes as an explicit `null`, which is
/// how the API clears an icon.
#[derive(Debug, Clone, PartialEq)]
pub enum IconUpdate {
    Emoji(String),
    External(String),
    Remove,
}

impl Serialize for IconUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Emoji<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            emoji: &'a str,
        }
        #[derive(Serialize)]
        struct External<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            external: ExternalRef<'a>,
        }
        #[derive(Serialize)]
        struct ExternalRef<'a> {
            url: &'a str,
        }

        match self {
            IconUpdate::Emoji(emoji) => Emoji {
                kind: "emoji",
                emoji,
            }
            .serialize(serializer),
            IconUpdate::External(url) => External {
                kind: "external",
                external: ExternalRef { url },
            }
            .serialize(serializer),
            IconUpdate::Remove => serializer.serialize_none(),
        }
    }
}

/// A page cover update. Covers are always externally hosted; `Remove`
/// serializes as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverUpdate {
    External(String),
    Remove,
}

impl Serialize for CoverUpdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct External<'a> {
            #[serde(rename = "type")]
            kind: &'static str,
            external: ExternalRef<'a>,
        }
        #[derive(Serialize)]
        struct ExternalRef<'a> {
            url: &'a str,
        }

        match self {
            CoverUpdate::External(url) => External {
                kind: "external",
                external: ExternalRef { url },
            }
            .serialize(serializer),
            CoverUpdate::Remove => serializer.serialize_none(),
        }
    }
}

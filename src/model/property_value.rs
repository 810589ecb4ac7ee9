// src/model/property_value.rs
//! Normalized page property values.
//!
//! The wire's ~20 overlapping property representations collapse into a
//! smaller union here: `select`/`multi_select`/`status` become one `Select`
//! variant distinguished by [`SelectKind`], and `title`/`rich_text` become
//! one `RichText` variant distinguished by [`RichTextKind`]. Anything the
//! wire grows that this client doesn't model yet lands on `Unsupported`
//! instead of failing.

use crate::types::{Color, DateRange, PageId, RichTextItem, SelectId};
use url::Url;

/// Property value — a typed value paired with the property's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct PageProperty {
    pub name: String,
    pub value: PropertyValue,
}

/// The normalized value of a single page property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// `title` and `rich_text` wire types, merged.
    RichText {
        rich_text: Vec<RichTextItem>,
        kind: RichTextKind,
    },
    Number(Option<f64>),
    /// `select`, `multi_select`, and `status` wire types, merged. The
    /// single-valued wire forms become a zero-or-one-element vec.
    Select {
        select: Vec<SelectValue>,
        kind: SelectKind,
    },
    Url(UrlValue),
    Date(Option<DateRange>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    Checkbox(bool),
    Relation {
        /// Related page IDs in the order the user arranged them.
        ids: Vec<PageId>,
        /// The API truncates the list beyond 25 references.
        has_more: bool,
    },
    /// Forward-compatibility escape hatch for wire types this client does
    /// not model (files, people, formula, rollup, ...). Deliberate, not
    /// a bug.
    Unsupported,
}

impl PropertyValue {
    /// The normalized type name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::RichText { .. } => "rich_text",
            PropertyValue::Number(_) => "number",
            PropertyValue::Select { .. } => "select",
            PropertyValue::Url(_) => "url",
            PropertyValue::Date(_) => "date",
            PropertyValue::Email(_) => "email",
            PropertyValue::PhoneNumber(_) => "phone_number",
            PropertyValue::Checkbox(_) => "checkbox",
            PropertyValue::Relation { .. } => "relation",
            PropertyValue::Unsupported => "unsupported",
        }
    }
}

/// Which wire type a merged `RichText` value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RichTextKind {
    Title,
    RichText,
}

/// Which wire type a merged `Select` value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectKind {
    Select,
    MultiSelect,
    Status,
}

/// One chosen option of a select/multi-select/status property.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectValue {
    pub id: SelectId,
    pub name: String,
    pub color: Color,
}

/// A URL property value, classified rather than trusted.
///
/// The raw string is preserved alongside the parse result so no
/// information is lost on invalid input.
#[derive(Debug, Clone, PartialEq)]
pub enum UrlValue {
    /// Null on the wire.
    Empty,
    /// Parses as an absolute URL.
    Valid { url: Url, raw: String },
    /// Non-empty but unparseable. Users can type anything into a URL field.
    Invalid { raw: String },
}

impl UrlValue {
    /// The parsed URL, when the value is valid.
    pub fn url(&self) -> Option<&Url> {
        match self {
            UrlValue::Valid { url, .. } => Some(url),
            _ => None,
        }
    }

    /// The raw wire string, when one was present.
    pub fn raw(&self) -> Option<&str> {
        match self {
            UrlValue::Empty => None,
            UrlValue::Valid { raw, .. } | UrlValue::Invalid { raw } => Some(raw),
        }
    }
}

// src/api/update.rs
//! The page mutation driver.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::Result;
use crate::model::Page;
use crate::property::{CoverUpdate, IconUpdate, PropertyUpdate};
use crate::types::PageId;

use super::{normalize, Transport};

/// Parameters for [`update_page_properties`]. Every field except the page
/// ID is optional; an absent field is omitted from the request entirely
/// and leaves that aspect of the page untouched.
#[derive(Debug, Clone)]
pub struct UpdatePagePropertiesParams {
    pub page_id: PageId,
    /// Updates keyed by property name or property ID. Only the listed
    /// properties change; explicit nulls inside a `PropertyUpdate` clear.
    pub properties: Option<IndexMap<String, PropertyUpdate>>,
    pub icon: Option<IconUpdate>,
    pub cover: Option<CoverUpdate>,
    /// `Some(true)` moves the page to the trash, `Some(false)` restores it.
    pub in_trash: Option<bool>,
}

impl UpdatePagePropertiesParams {
    pub fn new(page_id: PageId) -> Self {
        Self {
            page_id,
            properties: None,
            icon: None,
            cover: None,
            in_trash: None,
        }
    }

    pub fn property(mut self, key: impl Into<String>, update: PropertyUpdate) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), update);
        self
    }

    pub fn icon(mut self, icon: IconUpdate) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn cover(mut self, cover: CoverUpdate) -> Self {
        self.cover = Some(cover);
        self
    }

    pub fn in_trash(mut self, in_trash: bool) -> Self {
        self.in_trash = Some(in_trash);
        self
    }
}

/// Apply one PATCH to a page and return its updated state.
///
/// Exactly one request, no retry. The service applies the whole update or
/// rejects it with the error envelope; there is no partial application to
/// report. On success the response body is the full updated page, which is
/// normalized and returned.
pub async fn update_page_properties<T: Transport + ?Sized>(
    transport: &T,
    params: UpdatePagePropertiesParams,
) -> Result<Page> {
    let path = format!("pages/{}", params.page_id.to_hyphenated());

    let mut body = Map::new();
    if let Some(properties) = &params.properties {
        body.insert("properties".to_string(), serde_json::to_value(properties)?);
    }
    if let Some(icon) = &params.icon {
        body.insert("icon".to_string(), serde_json::to_value(icon)?);
    }
    if let Some(cover) = &params.cover {
        body.insert("cover".to_string(), serde_json::to_value(cover)?);
    }
    if let Some(in_trash) = params.in_trash {
        body.insert("in_trash".to_string(), Value::Bool(in_trash));
    }

    let response = transport.patch(&path, Value::Object(body)).await?;
    normalize::page_response_from_value(response)
}

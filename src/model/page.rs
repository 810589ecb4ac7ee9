// src/model/page.rs
//! The normalized page entity.

use super::{PageProperty, PropertyValue};
use crate::types::{PageId, PropertyId, UserId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A page row from a database query or a mutation response.
///
/// Constructed fresh from every response and immutable afterwards; an
/// update produces a new `Page` from a new response, never mutation in
/// place.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: UserId,
    pub last_edited_by: UserId,
    pub in_trash: bool,
    /// Property values keyed by property ID. Insertion order follows the
    /// response; it carries no meaning.
    pub properties: IndexMap<PropertyId, PageProperty>,
}

impl Page {
    /// Look up a property value by its property ID.
    pub fn property_by_id(&self, id: &PropertyId) -> Option<&PropertyValue> {
        self.properties.get(id).map(|p| &p.value)
    }

    /// Look up a property value by its display name.
    pub fn property_by_name(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .values()
            .find(|p| p.name == name)
            .map(|p| &p.value)
    }
}

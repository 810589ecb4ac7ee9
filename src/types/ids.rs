use super::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Strong typing for IDs with phantom types.
///
/// All Notion object identifiers are UUIDs on the wire, sometimes with
/// hyphens and sometimes without. This crate always normalizes to the
/// hyphen-free lowercase form at construction, so an `Id` that exists is
/// an `Id` that is valid. Distinct marker types keep a `UserId` from being
/// passed where a `PageId` is expected, even though both wrap strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: String,
    _phantom: PhantomData<T>,
}

/// Marker types for different ID kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMarker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectMarker;

/// Type aliases for specific ID types
pub type PageId = Id<PageMarker>;
pub type BlockId = Id<BlockMarker>;
pub type DatabaseId = Id<DatabaseMarker>;
pub type UserId = Id<UserMarker>;
/// Identifier of a select/multi-select/status option.
pub type SelectId = Id<SelectMarker>;

/// Kind name shown in `InvalidId` errors, per marker type.
pub trait IdKind {
    const KIND: &'static str;
}

impl IdKind for PageMarker {
    const KIND: &'static str = "PageId";
}
impl IdKind for BlockMarker {
    const KIND: &'static str = "BlockId";
}
impl IdKind for DatabaseMarker {
    const KIND: &'static str = "DatabaseId";
}
impl IdKind for UserMarker {
    const KIND: &'static str = "UserId";
}
impl IdKind for SelectMarker {
    const KIND: &'static str = "SelectId";
}

impl<T: IdKind> Id<T> {
    /// Parse a Notion ID, normalizing to the hyphen-free lowercase form.
    ///
    /// Strips every `-`, trims surrounding whitespace, then requires exactly
    /// 32 lowercase hex characters. Fails with `ValidationError::InvalidId`
    /// carrying the offending input and the expected kind name.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let normalized: String = input.trim().chars().filter(|c| *c != '-').collect();
        if normalized.len() != 32
            || !normalized
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        {
            return Err(ValidationError::InvalidId {
                kind: T::KIND,
                input: input.to_string(),
            });
        }
        Ok(Self {
            value: normalized,
            _phantom: PhantomData,
        })
    }

    /// Create a new random v4 ID, already in normalized form.
    pub fn new_v4() -> Self {
        Self {
            value: Uuid::new_v4().as_simple().to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Id<T> {
    /// Get the ID as the normalized (hyphen-free) string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the dashed UUID form for API request paths.
    pub fn to_hyphenated(&self) -> String {
        debug_assert_eq!(self.value.len(), 32);
        format!(
            "{}-{}-{}-{}-{}",
            &self.value[0..8],
            &self.value[8..12],
            &self.value[12..16],
            &self.value[16..20],
            &self.value[20..32]
        )
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T: IdKind> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Id::parse(&value).map_err(serde::de::Error::custom)
    }
}

// A page is addressable as its own root block: the children endpoint
// accepts either.
impl From<PageId> for BlockId {
    fn from(id: PageId) -> Self {
        Self {
            value: id.value,
            _phantom: PhantomData,
        }
    }
}

impl From<&PageId> for BlockId {
    fn from(id: &PageId) -> Self {
        Self {
            value: id.value.clone(),
            _phantom: PhantomData,
        }
    }
}

/// The identifier of a property on a database/page.
///
/// Unlike object IDs these are opaque short strings assigned by Notion
/// (e.g. `"title"`, `"Yxvy"`, percent-encoded punctuation) with no format
/// constraint, so construction never fails and never normalizes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_normalizes_hyphens() {
        let plain = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let dashed = PageId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        assert_eq!(plain, dashed);
        assert_eq!(plain.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn parse_is_idempotent() {
        let once = UserId::parse("b98a5d4e-7d88-422b-8e58-dcf58d45b7f0").unwrap();
        let twice = UserId::parse(once.as_str()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn parse_trims_whitespace() {
        let id = BlockId::parse("  550e8400e29b41d4a716446655440000\n").unwrap();
        assert_eq!(id.as_str(), "550e8400e29b41d4a716446655440000");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(PageId::parse("").is_err());
        assert!(PageId::parse("too-short").is_err());
        // non-hex character after hyphen stripping
        assert!(PageId::parse("550e8400e29b41d4a716g46655440000").is_err());
        // uppercase hex is not the normalized form
        assert!(PageId::parse("550E8400E29B41D4A716446655440000").is_err());
        // 33 characters
        assert!(PageId::parse("550e8400e29b41d4a7164466554400001").is_err());
    }

    #[test]
    fn invalid_id_error_names_the_kind() {
        let err = DatabaseId::parse("nonsense").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("DatabaseId"));
        assert!(message.contains("nonsense"));
    }

    #[test]
    fn to_hyphenated_reconstructs_uuid_form() {
        let id = PageId::parse("550e8400e29b41d4a716446655440000").unwrap();
        assert_eq!(id.to_hyphenated(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn property_id_is_opaque() {
        let id = PropertyId::new("Yxvy%3A");
        assert_eq!(id.as_str(), "Yxvy%3A");
        // even a UUID-looking property id stays verbatim
        let uuidish = PropertyId::new("550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(uuidish.as_str(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn page_id_converts_to_block_id() {
        let page = PageId::parse("b0d037d8b54044dca71cd0350b5f3001").unwrap();
        let block = BlockId::from(&page);
        assert_eq!(block.as_str(), page.as_str());
    }
}

// src/api/normalize.rs
//! Raw wire shapes → domain model. Pure functions, no I/O.
//!
//! This is where the wire's ~20 property representations and ~30 block
//! representations collapse into the normalized model: the select family
//! merges into one variant, title/rich_text merge into one variant, URL
//! strings get classified instead of trusted, and every ID goes through
//! the branded constructors. Unknown wire variants normalize to
//! `Unsupported` markers and a `warn!`, never an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use url::Url;

use crate::constants::NOTION_ORIGIN;
use crate::error::{Error, Result};
use crate::model::{
    Block, BlockContent, FileObject, HeadingContent, Icon, LinkToPageTarget, Page, PageProperty,
    Parent, PropertyValue, RichTextKind, SelectKind, SelectValue, TextBlockContent, UrlValue,
};
use crate::types::{
    BlockId, DatabaseId, DateRange, Mention, PageId, PropertyId, RichTextContent, RichTextItem,
    SelectId, UserId, ValidationError,
};
use indexmap::IndexMap;

use super::raw::{
    RawApiError, RawBlock, RawBlockContent, RawDate, RawFileSource, RawHeading, RawIcon,
    RawLinkToPage, RawList, RawMention, RawPage, RawParent, RawPropertyPayload, RawRichTextContent,
    RawRichTextItem, RawSelectOption, RawTextBlock, RawToDo,
};

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// Fails with `Error::NotionApi` when the value is the service's error
/// envelope; passes success payloads through untouched.
pub(crate) fn check_error_envelope(value: &Value) -> Result<()> {
    if value.get("object").and_then(Value::as_str) == Some("error") {
        let raw: RawApiError = serde_json::from_value(value.clone())?;
        return Err(Error::from_api_error(&raw.code, raw.message));
    }
    Ok(())
}

/// Decodes a paginated list body, surfacing the error envelope first.
pub(crate) fn list_from_value(value: Value) -> Result<RawList> {
    check_error_envelope(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Decodes a single-page response body, surfacing the error envelope first.
pub(crate) fn page_response_from_value(value: Value) -> Result<Page> {
    check_error_envelope(&value)?;
    page_from_value(value)
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Parse a wire timestamp: RFC 3339, or a bare `YYYY-MM-DD` taken as
/// midnight UTC (date mentions come over the wire in that form).
pub(crate) fn parse_datetime(input: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }
    Err(ValidationError::InvalidTimestamp(input.to_string()).into())
}

/// Resolve a wire URL string: absolute parse first, then relative to the
/// Notion origin (block hrefs and link previews arrive as `/p/...` paths).
pub(crate) fn resolve_url(raw: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(raw) {
        return Some(url);
    }
    let origin = Url::parse(NOTION_ORIGIN).ok()?;
    origin.join(raw).ok()
}

/// Resolve a URL that is the payload of its value (link previews, media
/// sources). Unlike decorative hrefs, failure here is an error.
fn resolve_payload_url(raw: &str) -> Result<Url> {
    resolve_url(raw).ok_or_else(|| Error::MalformedUrl(raw.to_string()))
}

/// Classify a URL-valued string without trusting it. Users can type
/// anything into a URL field, so this never fails.
fn classify_url(raw: Option<String>) -> UrlValue {
    match raw {
        None => UrlValue::Empty,
        Some(raw) if raw.is_empty() => UrlValue::Empty,
        Some(raw) => match Url::parse(&raw) {
            Ok(url) => UrlValue::Valid { url, raw },
            Err(_) => UrlValue::Invalid { raw },
        },
    }
}

fn date_range_from_raw(raw: RawDate) -> Result<DateRange> {
    Ok(DateRange {
        start: parse_datetime(&raw.start)?,
        end: raw.end.as_deref().map(parse_datetime).transpose()?,
    })
}

// ---------------------------------------------------------------------------
// Rich text
// ---------------------------------------------------------------------------

pub(crate) fn rich_text_from_raw(items: Vec<RawRichTextItem>) -> Result<Vec<RichTextItem>> {
    items.into_iter().map(rich_text_item_from_raw).collect()
}

fn rich_text_item_from_raw(raw: RawRichTextItem) -> Result<RichTextItem> {
    // The href is a decoration: if it resolves to nothing useful, the run
    // is still perfectly good text.
    let href = raw.href.as_deref().and_then(resolve_url);
    let content = match raw.content {
        RawRichTextContent::Text { .. } => RichTextContent::Text,
        RawRichTextContent::Mention { mention } => {
            RichTextContent::Mention(mention_from_raw(mention)?)
        }
        RawRichTextContent::Equation { equation } => RichTextContent::Equation(equation.expression),
    };
    Ok(RichTextItem {
        annotations: raw.annotations,
        plain_text: raw.plain_text,
        href,
        content,
    })
}

fn mention_from_raw(raw: RawMention) -> Result<Mention> {
    Ok(match raw {
        RawMention::User { user } => Mention::User(UserId::parse(&user.id)?),
        RawMention::Date { date } => Mention::Date(date_range_from_raw(date)?),
        // Unlike an href, the URL *is* this mention; an unresolvable one
        // is a malformed response.
        RawMention::LinkPreview { link_preview } => {
            Mention::LinkPreview(resolve_payload_url(&link_preview.url)?)
        }
        RawMention::TemplateMention { template_mention } => {
            Mention::TemplateMention(template_mention)
        }
        RawMention::Page { page } => Mention::Page(PageId::parse(&page.id)?),
        RawMention::Database { database } => Mention::Database(DatabaseId::parse(&database.id)?),
    })
}

// ---------------------------------------------------------------------------
// Property values and pages
// ---------------------------------------------------------------------------

fn select_value_from_raw(option: RawSelectOption) -> Result<SelectValue> {
    Ok(SelectValue {
        id: SelectId::parse(&option.id)?,
        name: option.name,
        color: option.color,
    })
}

/// Normalize one property payload. `name` is only for diagnostics.
pub(crate) fn property_value_from_raw(
    name: &str,
    payload: RawPropertyPayload,
) -> Result<PropertyValue> {
    Ok(match payload {
        RawPropertyPayload::Title { title } => PropertyValue::RichText {
            rich_text: rich_text_from_raw(title)?,
            kind: RichTextKind::Title,
        },
        RawPropertyPayload::RichText { rich_text } => PropertyValue::RichText {
            rich_text: rich_text_from_raw(rich_text)?,
            kind: RichTextKind::RichText,
        },
        RawPropertyPayload::Number { number } => PropertyValue::Number(number),
        RawPropertyPayload::Select { select } => PropertyValue::Select {
            select: select.map(select_value_from_raw).transpose()?.into_iter().collect(),
            kind: SelectKind::Select,
        },
        RawPropertyPayload::MultiSelect { multi_select } => PropertyValue::Select {
            select: multi_select
                .into_iter()
                .map(select_value_from_raw)
                .collect::<Result<_>>()?,
            kind: SelectKind::MultiSelect,
        },
        RawPropertyPayload::Status { status } => PropertyValue::Select {
            select: status.map(select_value_from_raw).transpose()?.into_iter().collect(),
            kind: SelectKind::Status,
        },
        RawPropertyPayload::Url { url } => PropertyValue::Url(classify_url(url)),
        RawPropertyPayload::Date { date } => {
            PropertyValue::Date(date.map(date_range_from_raw).transpose()?)
        }
        RawPropertyPayload::Email { email } => PropertyValue::Email(email),
        RawPropertyPayload::PhoneNumber { phone_number } => {
            PropertyValue::PhoneNumber(phone_number)
        }
        RawPropertyPayload::Checkbox { checkbox } => PropertyValue::Checkbox(checkbox),
        RawPropertyPayload::Relation { relation, has_more } => PropertyValue::Relation {
            ids: relation
                .into_iter()
                .map(|r| PageId::parse(&r.id))
                .collect::<Result<_, _>>()?,
            has_more,
        },
        RawPropertyPayload::Unsupported => {
            log::warn!("property '{}' has an unsupported type, passing through", name);
            PropertyValue::Unsupported
        }
    })
}

/// Normalize a full page object.
pub(crate) fn page_from_value(value: Value) -> Result<Page> {
    let raw: RawPage = serde_json::from_value(value)?;
    let mut properties = IndexMap::with_capacity(raw.properties.len());
    for (name, prop) in raw.properties {
        let value = property_value_from_raw(&name, prop.payload)?;
        properties.insert(PropertyId::new(prop.id), PageProperty { name, value });
    }
    Ok(Page {
        id: PageId::parse(&raw.id)?,
        created_time: parse_datetime(&raw.created_time)?,
        last_edited_time: parse_datetime(&raw.last_edited_time)?,
        created_by: UserId::parse(&raw.created_by.id)?,
        last_edited_by: UserId::parse(&raw.last_edited_by.id)?,
        in_trash: raw.in_trash,
        properties,
    })
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

fn text_block_from_raw(raw: RawTextBlock) -> Result<TextBlockContent> {
    Ok(TextBlockContent {
        rich_text: rich_text_from_raw(raw.rich_text)?,
        color: raw.color,
    })
}

fn heading_from_raw(raw: RawHeading) -> Result<HeadingContent> {
    Ok(HeadingContent {
        rich_text: rich_text_from_raw(raw.rich_text)?,
        color: raw.color,
        is_toggleable: raw.is_toggleable,
    })
}

fn file_object_from_raw(source: RawFileSource) -> Result<FileObject> {
    match source {
        RawFileSource::File { file } => Ok(FileObject::Hosted {
            url: resolve_payload_url(&file.url)?,
            expiry_time: parse_datetime(&file.expiry_time)?,
        }),
        RawFileSource::External { external } => Ok(FileObject::External {
            url: resolve_payload_url(&external.url)?,
        }),
    }
}

/// Icons are decorations; one with an unresolvable URL degrades to none.
fn icon_from_raw(raw: RawIcon) -> Option<Icon> {
    match raw {
        RawIcon::Emoji { emoji } => Some(Icon::Emoji(emoji)),
        RawIcon::External { external } => resolve_url(&external.url).map(|url| Icon::External { url }),
        RawIcon::File { file } => resolve_url(&file.url).map(|url| Icon::File { url }),
    }
}

fn parent_from_raw(raw: RawParent) -> Result<Parent> {
    Ok(match raw {
        RawParent::DatabaseId { database_id } => Parent::Database(DatabaseId::parse(&database_id)?),
        RawParent::PageId { page_id } => Parent::Page(PageId::parse(&page_id)?),
        RawParent::BlockId { block_id } => Parent::Block(BlockId::parse(&block_id)?),
        RawParent::Workspace => Parent::Workspace,
    })
}

/// Normalize a full block object. Takes the JSON value rather than the raw
/// struct so the wire type name of an unsupported block can be recovered.
pub(crate) fn block_from_value(value: Value) -> Result<Block> {
    let wire_type = value
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string();
    let raw: RawBlock = serde_json::from_value(value)?;

    let content = match raw.content {
        RawBlockContent::Paragraph { paragraph } => {
            BlockContent::Paragraph(text_block_from_raw(paragraph)?)
        }
        RawBlockContent::Heading1 { heading_1 } => {
            BlockContent::Heading1(heading_from_raw(heading_1)?)
        }
        RawBlockContent::Heading2 { heading_2 } => {
            BlockContent::Heading2(heading_from_raw(heading_2)?)
        }
        RawBlockContent::Heading3 { heading_3 } => {
            BlockContent::Heading3(heading_from_raw(heading_3)?)
        }
        RawBlockContent::BulletedListItem { bulleted_list_item } => {
            BlockContent::BulletedListItem(text_block_from_raw(bulleted_list_item)?)
        }
        RawBlockContent::NumberedListItem { numbered_list_item } => {
            BlockContent::NumberedListItem(text_block_from_raw(numbered_list_item)?)
        }
        RawBlockContent::Quote { quote } => BlockContent::Quote(text_block_from_raw(quote)?),
        RawBlockContent::ToDo {
            to_do: RawToDo {
                rich_text,
                color,
                checked,
            },
        } => BlockContent::ToDo {
            content: TextBlockContent {
                rich_text: rich_text_from_raw(rich_text)?,
                color,
            },
            checked,
        },
        RawBlockContent::Toggle { toggle } => BlockContent::Toggle(text_block_from_raw(toggle)?),
        RawBlockContent::Template { template } => BlockContent::Template {
            rich_text: rich_text_from_raw(template.rich_text)?,
        },
        RawBlockContent::SyncedBlock { synced_block } => BlockContent::SyncedBlock {
            synced_from: synced_block
                .synced_from
                .map(|s| BlockId::parse(&s.block_id))
                .transpose()?,
        },
        RawBlockContent::ChildPage { child_page } => BlockContent::ChildPage {
            title: child_page.title,
        },
        RawBlockContent::ChildDatabase { child_database } => BlockContent::ChildDatabase {
            title: child_database.title,
        },
        RawBlockContent::Equation { equation } => BlockContent::Equation {
            expression: equation.expression,
        },
        RawBlockContent::Code { code } => BlockContent::Code {
            rich_text: rich_text_from_raw(code.rich_text)?,
            caption: rich_text_from_raw(code.caption)?,
            language: code.language,
        },
        RawBlockContent::Callout { callout } => BlockContent::Callout {
            content: TextBlockContent {
                rich_text: rich_text_from_raw(callout.rich_text)?,
                color: callout.color,
            },
            icon: callout.icon.and_then(icon_from_raw),
        },
        RawBlockContent::Divider { .. } => BlockContent::Divider,
        RawBlockContent::Breadcrumb { .. } => BlockContent::Breadcrumb,
        RawBlockContent::TableOfContents { table_of_contents } => BlockContent::TableOfContents {
            color: table_of_contents.color,
        },
        RawBlockContent::ColumnList { .. } => BlockContent::ColumnList,
        RawBlockContent::Column { .. } => BlockContent::Column,
        RawBlockContent::LinkToPage { link_to_page } => {
            BlockContent::LinkToPage(match link_to_page {
                RawLinkToPage::PageId { page_id } => {
                    LinkToPageTarget::Page(PageId::parse(&page_id)?)
                }
                RawLinkToPage::DatabaseId { database_id } => {
                    LinkToPageTarget::Database(DatabaseId::parse(&database_id)?)
                }
            })
        }
        RawBlockContent::Table { table } => BlockContent::Table {
            table_width: table.table_width,
            has_column_header: table.has_column_header,
            has_row_header: table.has_row_header,
        },
        RawBlockContent::TableRow { table_row } => BlockContent::TableRow {
            cells: table_row
                .cells
                .into_iter()
                .map(rich_text_from_raw)
                .collect::<Result<_>>()?,
        },
        RawBlockContent::Embed { embed } => BlockContent::Embed {
            url: classify_url(embed.url),
            caption: rich_text_from_raw(embed.caption)?,
        },
        RawBlockContent::Bookmark { bookmark } => BlockContent::Bookmark {
            url: classify_url(bookmark.url),
            caption: rich_text_from_raw(bookmark.caption)?,
        },
        RawBlockContent::Image { image } => BlockContent::Image {
            file: file_object_from_raw(image.source)?,
            caption: rich_text_from_raw(image.caption)?,
        },
        RawBlockContent::Video { video } => BlockContent::Video {
            file: file_object_from_raw(video.source)?,
            caption: rich_text_from_raw(video.caption)?,
        },
        RawBlockContent::Pdf { pdf } => BlockContent::Pdf {
            file: file_object_from_raw(pdf.source)?,
            caption: rich_text_from_raw(pdf.caption)?,
        },
        RawBlockContent::File { file } => BlockContent::File {
            name: file.name.clone(),
            file: file_object_from_raw(file.source)?,
            caption: rich_text_from_raw(file.caption)?,
        },
        RawBlockContent::Audio { audio } => BlockContent::Audio {
            file: file_object_from_raw(audio.source)?,
            caption: rich_text_from_raw(audio.caption)?,
        },
        RawBlockContent::LinkPreview { link_preview } => BlockContent::LinkPreview {
            url: resolve_payload_url(&link_preview.url)?,
        },
        RawBlockContent::Unsupported => {
            log::warn!("unsupported block type '{}', passing through", wire_type);
            BlockContent::Unsupported {
                block_type: wire_type,
            }
        }
    };

    Ok(Block {
        id: BlockId::parse(&raw.id)?,
        created_time: parse_datetime(&raw.created_time)?,
        last_edited_time: parse_datetime(&raw.last_edited_time)?,
        created_by: UserId::parse(&raw.created_by.id)?,
        last_edited_by: UserId::parse(&raw.last_edited_by.id)?,
        has_children: raw.has_children,
        in_trash: raw.in_trash,
        parent: parent_from_raw(raw.parent)?,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::raw::RawPropertyValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn property_from_json(name: &str, value: Value) -> Result<PropertyValue> {
        let raw: RawPropertyValue = serde_json::from_value(value).unwrap();
        property_value_from_raw(name, raw.payload)
    }

    #[test]
    fn status_collapses_into_the_select_family() {
        let value = property_from_json(
            "ステータス",
            json!({
                "id": "xx%3Ab",
                "type": "status",
                "status": {
                    "id": "c02bf6f5b0544e969e3b2b5e166862a9",
                    "name": "未着手",
                    "color": "default"
                }
            }),
        )
        .unwrap();
        match value {
            PropertyValue::Select { select, kind } => {
                assert_eq!(kind, SelectKind::Status);
                assert_eq!(select.len(), 1);
                assert_eq!(select[0].name, "未着手");
                assert_eq!(select[0].color, crate::types::Color::Default);
            }
            other => panic!("expected a select value, got {:?}", other),
        }
    }

    #[test]
    fn null_select_becomes_empty_vec() {
        let value = property_from_json(
            "Tag",
            json!({ "id": "ab", "type": "select", "select": null }),
        )
        .unwrap();
        assert_eq!(
            value,
            PropertyValue::Select {
                select: vec![],
                kind: SelectKind::Select
            }
        );
    }

    #[test]
    fn multi_select_keeps_option_order_and_kind() {
        let value = property_from_json(
            "タグ",
            json!({
                "id": "cd",
                "type": "multi_select",
                "multi_select": [
                    { "id": "7e9eb1267aa4412f95fcbd07f0844bc1", "name": "あ", "color": "default" },
                    { "id": "64a0b78c2bba4a1ba453153d02f5ffc4", "name": "green", "color": "green" }
                ]
            }),
        )
        .unwrap();
        match value {
            PropertyValue::Select { select, kind } => {
                assert_eq!(kind, SelectKind::MultiSelect);
                let names: Vec<&str> = select.iter().map(|o| o.name.as_str()).collect();
                assert_eq!(names, vec!["あ", "green"]);
            }
            other => panic!("expected a select value, got {:?}", other),
        }
    }

    #[test]
    fn url_values_are_classified_not_trusted() {
        let invalid = property_from_json(
            "URL",
            json!({ "id": "u1", "type": "url", "url": "不正なURL" }),
        )
        .unwrap();
        assert_eq!(
            invalid,
            PropertyValue::Url(UrlValue::Invalid {
                raw: "不正なURL".to_string()
            })
        );

        let valid = property_from_json(
            "URL",
            json!({ "id": "u1", "type": "url", "url": "https://example.com" }),
        )
        .unwrap();
        match valid {
            PropertyValue::Url(UrlValue::Valid { url, raw }) => {
                assert_eq!(url.as_str(), "https://example.com/");
                assert_eq!(raw, "https://example.com");
            }
            other => panic!("expected a valid url, got {:?}", other),
        }

        let empty =
            property_from_json("URL", json!({ "id": "u1", "type": "url", "url": null })).unwrap();
        assert_eq!(empty, PropertyValue::Url(UrlValue::Empty));
    }

    #[test]
    fn unsupported_property_types_pass_through() {
        let value = property_from_json(
            "計算",
            json!({
                "id": "f1",
                "type": "formula",
                "formula": { "type": "number", "number": 7 }
            }),
        )
        .unwrap();
        assert_eq!(value, PropertyValue::Unsupported);
    }

    #[test]
    fn relation_keeps_order_and_truncation_flag() {
        let value = property_from_json(
            "関連",
            json!({
                "id": "r1",
                "type": "relation",
                "relation": [
                    { "id": "59b72ab4-8e2f-4966-b2f6-0e2b0b0e0101" },
                    { "id": "59b72ab48e2f4966b2f60e2b0b0e0202" }
                ],
                "has_more": true
            }),
        )
        .unwrap();
        match value {
            PropertyValue::Relation { ids, has_more } => {
                assert!(has_more);
                assert_eq!(ids[0].as_str(), "59b72ab48e2f4966b2f60e2b0b0e0101");
                assert_eq!(ids[1].as_str(), "59b72ab48e2f4966b2f60e2b0b0e0202");
            }
            other => panic!("expected a relation, got {:?}", other),
        }
    }

    #[test]
    fn bare_dates_become_utc_midnight() {
        let range = date_range_from_raw(RawDate {
            start: "2024-05-01".to_string(),
            end: None,
        })
        .unwrap();
        assert_eq!(range.start.to_rfc3339(), "2024-05-01T00:00:00+00:00");
        assert_eq!(range.end, None);

        assert!(parse_datetime("yesterday-ish").is_err());
    }

    #[test]
    fn relative_hrefs_resolve_against_the_notion_origin() {
        let raw: RawRichTextItem = serde_json::from_value(json!({
            "type": "mention",
            "mention": {
                "type": "page",
                "page": { "id": "e3389b1b7e7841c9835155b8f4757dbe" }
            },
            "annotations": {
                "bold": false, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default"
            },
            "plain_text": "ページ",
            "href": "/e3389b1b7e7841c9835155b8f4757dbe"
        }))
        .unwrap();
        let item = rich_text_item_from_raw(raw).unwrap();
        assert_eq!(
            item.href.unwrap().as_str(),
            "https://www.notion.so/e3389b1b7e7841c9835155b8f4757dbe"
        );
        assert_eq!(
            item.content,
            RichTextContent::Mention(Mention::Page(
                PageId::parse("e3389b1b7e7841c9835155b8f4757dbe").unwrap()
            ))
        );
    }

    #[test]
    fn unresolvable_decorative_href_degrades_to_none() {
        let raw: RawRichTextItem = serde_json::from_value(json!({
            "type": "text",
            "text": { "content": "hi", "link": null },
            "plain_text": "hi",
            "href": "http://"
        }))
        .unwrap();
        let item = rich_text_item_from_raw(raw).unwrap();
        assert_eq!(item.href, None);
        assert_eq!(item.plain_text, "hi");
    }

    #[test]
    fn unresolvable_link_preview_payload_is_an_error() {
        let raw: RawMention = serde_json::from_value(json!({
            "type": "link_preview",
            "link_preview": { "url": "http://" }
        }))
        .unwrap();
        match mention_from_raw(raw) {
            Err(Error::MalformedUrl(raw)) => assert_eq!(raw, "http://"),
            other => panic!("expected MalformedUrl, got {:?}", other),
        }
    }

    #[test]
    fn error_envelope_is_detected() {
        let err = list_from_value(json!({
            "object": "error",
            "status": 404,
            "code": "object_not_found",
            "message": "Could not find database."
        }))
        .unwrap_err();
        match err {
            Error::NotionApi { code, message } => {
                assert!(code.is_not_found());
                assert_eq!(message, "Could not find database.");
            }
            other => panic!("expected NotionApi, got {:?}", other),
        }
    }

    fn block_envelope(content: Value) -> Value {
        let mut base = json!({
            "object": "block",
            "id": "0c94f0eb8e3d4c4cb20b25899a3c958c",
            "parent": { "type": "page_id", "page_id": "e3389b1b7e7841c9835155b8f4757dbe" },
            "created_time": "2024-04-27T12:18:00.000Z",
            "last_edited_time": "2024-04-27T12:19:00.000Z",
            "created_by": { "object": "user", "id": "b98a5d4e7d88422b8e58dcf58d45b7f0" },
            "last_edited_by": { "object": "user", "id": "b98a5d4e7d88422b8e58dcf58d45b7f0" },
            "has_children": false,
            "in_trash": false
        });
        base.as_object_mut()
            .unwrap()
            .extend(content.as_object().unwrap().clone());
        base
    }

    #[test]
    fn paragraph_block_normalizes() {
        let block = block_from_value(block_envelope(json!({
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{
                    "type": "text",
                    "text": { "content": "hello", "link": null },
                    "plain_text": "hello",
                    "href": null
                }],
                "color": "default"
            }
        })))
        .unwrap();
        assert_eq!(
            block.content,
            BlockContent::Paragraph(TextBlockContent {
                rich_text: vec![RichTextItem::plain_text("hello")],
                color: crate::types::Color::Default,
            })
        );
        assert_eq!(
            block.parent,
            Parent::Page(PageId::parse("e3389b1b7e7841c9835155b8f4757dbe").unwrap())
        );
    }

    #[test]
    fn unknown_block_type_keeps_its_wire_name() {
        let block = block_from_value(block_envelope(json!({
            "type": "ai_block",
            "ai_block": {}
        })))
        .unwrap();
        assert_eq!(
            block.content,
            BlockContent::Unsupported {
                block_type: "ai_block".to_string()
            }
        );
    }

    #[test]
    fn media_blocks_normalize_the_file_union() {
        let block = block_from_value(block_envelope(json!({
            "type": "image",
            "image": {
                "caption": [],
                "type": "external",
                "external": { "url": "https://example.com/cat.png" }
            }
        })))
        .unwrap();
        match block.content {
            BlockContent::Image { file, caption } => {
                assert_eq!(file.url().as_str(), "https://example.com/cat.png");
                assert!(caption.is_empty());
            }
            other => panic!("expected an image, got {:?}", other),
        }

        let hosted = block_from_value(block_envelope(json!({
            "type": "file",
            "file": {
                "caption": [],
                "name": "report.csv",
                "type": "file",
                "file": {
                    "url": "https://files.example.com/report.csv?sig=abc",
                    "expiry_time": "2024-04-27T13:18:00.000Z"
                }
            }
        })))
        .unwrap();
        match hosted.content {
            BlockContent::File { file, name, .. } => {
                assert_eq!(name.as_deref(), Some("report.csv"));
                match file {
                    FileObject::Hosted { expiry_time, .. } => {
                        assert_eq!(expiry_time.to_rfc3339(), "2024-04-27T13:18:00+00:00")
                    }
                    other => panic!("expected a hosted file, got {:?}", other),
                }
            }
            other => panic!("expected a file block, got {:?}", other),
        }
    }
}

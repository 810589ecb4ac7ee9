// src/filter.rs
//! Typed query filters for the database query endpoint.
//!
//! Filters are write-only values: built through the constructors here and
//! serialized verbatim into the request body, never parsed back. The serde
//! shapes reproduce the published filter grammar exactly, so serialization
//! is the identity onto the wire.
//!
//! <https://developers.notion.com/reference/post-database-query-filter>

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// A query filter tree: a property or timestamp leaf, or an `and`/`or`
/// combination of other filters. Nesting is unrestricted; the service
/// enforces its own depth limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Filter {
    Or { or: Vec<Filter> },
    And { and: Vec<Filter> },
    Property(PropertyFilter),
    Timestamp(TimestampFilter),
}

/// Combine filters so that any of them may match.
///
/// An empty list is permitted here and rejected by the service; avoiding
/// it is the caller's responsibility.
pub fn or<I>(conditions: I) -> Filter
where
    I: IntoIterator,
    I::Item: Into<Filter>,
{
    Filter::Or {
        or: conditions.into_iter().map(Into::into).collect(),
    }
}

/// Combine filters so that all of them must match.
pub fn and<I>(conditions: I) -> Filter
where
    I: IntoIterator,
    I::Item: Into<Filter>,
{
    Filter::And {
        and: conditions.into_iter().map(Into::into).collect(),
    }
}

impl From<PropertyFilter> for Filter {
    fn from(f: PropertyFilter) -> Self {
        Filter::Property(f)
    }
}

impl From<TimestampFilter> for Filter {
    fn from(f: TimestampFilter) -> Self {
        Filter::Timestamp(f)
    }
}

/// A leaf filter on one property, identified by name or property ID.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyFilter {
    pub property: String,
    #[serde(flatten)]
    pub condition: PropertyCondition,
}

/// The per-property-type condition, tagged the way the wire expects:
/// `{"type": "number", "number": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyCondition {
    Title { title: TextCondition },
    RichText { rich_text: TextCondition },
    Number { number: NumberCondition },
    Checkbox { checkbox: CheckboxCondition },
    Select { select: SelectCondition },
    MultiSelect { multi_select: ContainsCondition },
    Status { status: SelectCondition },
    Date { date: DateCondition },
    People { people: ContainsCondition },
    Files { files: ExistenceCondition },
    Url { url: TextCondition },
    Email { email: TextCondition },
    PhoneNumber { phone_number: TextCondition },
    Relation { relation: ContainsCondition },
    CreatedBy { created_by: ContainsCondition },
    CreatedTime { created_time: DateCondition },
    LastEditedBy { last_edited_by: ContainsCondition },
    LastEditedTime { last_edited_time: DateCondition },
    Formula { formula: FormulaCondition },
    UniqueId { unique_id: NumberCondition },
    Rollup { rollup: Box<RollupCondition> },
}

/// Row-level timestamp filter (no property involved).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TimestampFilter {
    CreatedTime {
        timestamp: TimestampKey,
        #[serde(rename = "type")]
        kind: TimestampKey,
        created_time: DateCondition,
    },
    LastEditedTime {
        timestamp: TimestampKey,
        #[serde(rename = "type")]
        kind: TimestampKey,
        last_edited_time: DateCondition,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampKey {
    CreatedTime,
    LastEditedTime,
}

/// Filter rows by creation timestamp.
pub fn created_time(condition: DateCondition) -> TimestampFilter {
    TimestampFilter::CreatedTime {
        timestamp: TimestampKey::CreatedTime,
        kind: TimestampKey::CreatedTime,
        created_time: condition,
    }
}

/// Filter rows by last-edit timestamp.
pub fn last_edited_time(condition: DateCondition) -> TimestampFilter {
    TimestampFilter::LastEditedTime {
        timestamp: TimestampKey::LastEditedTime,
        kind: TimestampKey::LastEditedTime,
        last_edited_time: condition,
    }
}

// ---------------------------------------------------------------------------
// Per-property-type leaf constructors
// ---------------------------------------------------------------------------

macro_rules! property_constructors {
    ($( $(#[$doc:meta])* $fn_name:ident => $variant:ident { $field:ident: $cond:ty } ),* $(,)?) => {
        $(
            $(#[$doc])*
            pub fn $fn_name(property: impl Into<String>, condition: $cond) -> PropertyFilter {
                PropertyFilter {
                    property: property.into(),
                    condition: PropertyCondition::$variant { $field: condition },
                }
            }
        )*
    };
}

property_constructors! {
    /// Filter on a title property.
    property_title => Title { title: TextCondition },
    /// Filter on a rich text property.
    property_rich_text => RichText { rich_text: TextCondition },
    /// Filter on a number property.
    property_number => Number { number: NumberCondition },
    /// Filter on a checkbox property.
    property_checkbox => Checkbox { checkbox: CheckboxCondition },
    /// Filter on a select property.
    property_select => Select { select: SelectCondition },
    /// Filter on a multi-select property.
    property_multi_select => MultiSelect { multi_select: ContainsCondition },
    /// Filter on a status property.
    property_status => Status { status: SelectCondition },
    /// Filter on a date property.
    property_date => Date { date: DateCondition },
    /// Filter on a people property.
    property_people => People { people: ContainsCondition },
    /// Filter on a files property (existence only).
    property_files => Files { files: ExistenceCondition },
    /// Filter on a URL property.
    property_url => Url { url: TextCondition },
    /// Filter on an email property.
    property_email => Email { email: TextCondition },
    /// Filter on a phone number property.
    property_phone_number => PhoneNumber { phone_number: TextCondition },
    /// Filter on a relation property.
    property_relation => Relation { relation: ContainsCondition },
    /// Filter on a created-by property.
    property_created_by => CreatedBy { created_by: ContainsCondition },
    /// Filter on a created-time property.
    property_created_time => CreatedTime { created_time: DateCondition },
    /// Filter on a last-edited-by property.
    property_last_edited_by => LastEditedBy { last_edited_by: ContainsCondition },
    /// Filter on a last-edited-time property.
    property_last_edited_time => LastEditedTime { last_edited_time: DateCondition },
    /// Filter on a formula property's result.
    property_formula => Formula { formula: FormulaCondition },
    /// Filter on a unique ID property.
    property_unique_id => UniqueId { unique_id: NumberCondition },
}

/// Filter on a rollup property.
pub fn property_rollup(property: impl Into<String>, condition: RollupCondition) -> PropertyFilter {
    PropertyFilter {
        property: property.into(),
        condition: PropertyCondition::Rollup {
            rollup: Box::new(condition),
        },
    }
}

// ---------------------------------------------------------------------------
// Condition grammars
// ---------------------------------------------------------------------------

/// Text comparisons (title, rich text, url, email, phone number).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextCondition {
    Equals(String),
    DoesNotEqual(String),
    Contains(String),
    DoesNotContain(String),
    StartsWith(String),
    EndsWith(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl TextCondition {
    pub fn equals(text: impl Into<String>) -> Self {
        Self::Equals(text.into())
    }
    pub fn does_not_equal(text: impl Into<String>) -> Self {
        Self::DoesNotEqual(text.into())
    }
    pub fn contains(text: impl Into<String>) -> Self {
        Self::Contains(text.into())
    }
    pub fn does_not_contain(text: impl Into<String>) -> Self {
        Self::DoesNotContain(text.into())
    }
    pub fn starts_with(text: impl Into<String>) -> Self {
        Self::StartsWith(text.into())
    }
    pub fn ends_with(text: impl Into<String>) -> Self {
        Self::EndsWith(text.into())
    }
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

/// Numeric comparisons (number, unique ID).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCondition {
    Equals(f64),
    DoesNotEqual(f64),
    GreaterThan(f64),
    LessThan(f64),
    GreaterThanOrEqualTo(f64),
    LessThanOrEqualTo(f64),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl NumberCondition {
    pub fn equals(number: f64) -> Self {
        Self::Equals(number)
    }
    pub fn does_not_equal(number: f64) -> Self {
        Self::DoesNotEqual(number)
    }
    pub fn greater_than(number: f64) -> Self {
        Self::GreaterThan(number)
    }
    pub fn less_than(number: f64) -> Self {
        Self::LessThan(number)
    }
    pub fn greater_than_or_equal_to(number: f64) -> Self {
        Self::GreaterThanOrEqualTo(number)
    }
    pub fn less_than_or_equal_to(number: f64) -> Self {
        Self::LessThanOrEqualTo(number)
    }
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

/// Checkbox comparisons. No existence fallback: a checkbox always has a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckboxCondition {
    Equals(bool),
    DoesNotEqual(bool),
}

impl CheckboxCondition {
    pub fn equals(checked: bool) -> Self {
        Self::Equals(checked)
    }
    pub fn does_not_equal(checked: bool) -> Self {
        Self::DoesNotEqual(checked)
    }
}

/// Single-choice comparisons by option name (select, status).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectCondition {
    Equals(String),
    DoesNotEqual(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl SelectCondition {
    pub fn equals(option: impl Into<String>) -> Self {
        Self::Equals(option.into())
    }
    pub fn does_not_equal(option: impl Into<String>) -> Self {
        Self::DoesNotEqual(option.into())
    }
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

/// Membership comparisons (multi-select options, people/relation IDs).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainsCondition {
    Contains(String),
    DoesNotContain(String),
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl ContainsCondition {
    pub fn contains(value: impl Into<String>) -> Self {
        Self::Contains(value.into())
    }
    pub fn does_not_contain(value: impl Into<String>) -> Self {
        Self::DoesNotContain(value.into())
    }
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

/// Date comparisons, absolute and relative. The relative ranges carry an
/// empty-object payload on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateCondition {
    Equals(String),
    Before(String),
    After(String),
    OnOrBefore(String),
    OnOrAfter(String),
    ThisWeek {},
    PastWeek {},
    PastMonth {},
    PastYear {},
    NextWeek {},
    NextMonth {},
    NextYear {},
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl DateCondition {
    pub fn equals(date: DateTime<Utc>) -> Self {
        Self::Equals(to_iso(date))
    }
    pub fn before(date: DateTime<Utc>) -> Self {
        Self::Before(to_iso(date))
    }
    pub fn after(date: DateTime<Utc>) -> Self {
        Self::After(to_iso(date))
    }
    pub fn on_or_before(date: DateTime<Utc>) -> Self {
        Self::OnOrBefore(to_iso(date))
    }
    pub fn on_or_after(date: DateTime<Utc>) -> Self {
        Self::OnOrAfter(to_iso(date))
    }
    pub fn this_week() -> Self {
        Self::ThisWeek {}
    }
    pub fn past_week() -> Self {
        Self::PastWeek {}
    }
    pub fn past_month() -> Self {
        Self::PastMonth {}
    }
    pub fn past_year() -> Self {
        Self::PastYear {}
    }
    pub fn next_week() -> Self {
        Self::NextWeek {}
    }
    pub fn next_month() -> Self {
        Self::NextMonth {}
    }
    pub fn next_year() -> Self {
        Self::NextYear {}
    }
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

fn to_iso(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Pure existence test, for property types with no richer grammar (files).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExistenceCondition {
    IsEmpty(bool),
    IsNotEmpty(bool),
}

impl ExistenceCondition {
    pub fn is_empty() -> Self {
        Self::IsEmpty(true)
    }
    pub fn is_not_empty() -> Self {
        Self::IsNotEmpty(true)
    }
}

/// Formula result comparisons, dispatched by the formula's result type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormulaCondition {
    String(TextCondition),
    Checkbox(CheckboxCondition),
    Number(NumberCondition),
    Date(DateCondition),
}

/// Rollup comparisons: quantified over the rolled-up values, or direct on
/// a date/number rollup result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupCondition {
    Any(RollupSubfilter),
    None(RollupSubfilter),
    Every(RollupSubfilter),
    Date(DateCondition),
    Number(NumberCondition),
}

/// The per-element condition inside a quantified rollup filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupSubfilter {
    RichText(TextCondition),
    Number(NumberCondition),
    Checkbox(CheckboxCondition),
    Select(SelectCondition),
    MultiSelect(ContainsCondition),
    Relation(ContainsCondition),
    Date(DateCondition),
    People(ContainsCondition),
    Files(ExistenceCondition),
    Status(SelectCondition),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn number_filter_shape() {
        let filter = property_number("Age", NumberCondition::greater_than(5.0));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Age",
                "type": "number",
                "number": { "greater_than": 5.0 }
            })
        );
    }

    #[test]
    fn text_filter_shape() {
        let filter = property_rich_text("Notes", TextCondition::starts_with("TODO"));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Notes",
                "type": "rich_text",
                "rich_text": { "starts_with": "TODO" }
            })
        );
    }

    #[test]
    fn existence_fallback_shape() {
        let filter = property_select("Tag", SelectCondition::is_empty());
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Tag",
                "type": "select",
                "select": { "is_empty": true }
            })
        );
    }

    #[test]
    fn relative_date_payload_is_empty_object() {
        let filter = property_date("Due", DateCondition::past_week());
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Due",
                "type": "date",
                "date": { "past_week": {} }
            })
        );
    }

    #[test]
    fn timestamp_filter_shape() {
        let date = chrono::DateTime::parse_from_rfc3339("2024-04-29T00:00:00.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let filter = created_time(DateCondition::before(date));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "timestamp": "created_time",
                "type": "created_time",
                "created_time": { "before": "2024-04-29T00:00:00.000Z" }
            })
        );
    }

    #[test]
    fn compound_filters_nest() {
        let filter = or([
            and([
                Filter::from(property_checkbox("Done", CheckboxCondition::equals(true))),
                Filter::from(property_number("Age", NumberCondition::less_than(10.0))),
            ]),
            Filter::from(property_title("名前", TextCondition::contains("A"))),
        ]);
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "or": [
                    { "and": [
                        { "property": "Done", "type": "checkbox", "checkbox": { "equals": true } },
                        { "property": "Age", "type": "number", "number": { "less_than": 10.0 } }
                    ]},
                    { "property": "名前", "type": "title", "title": { "contains": "A" } }
                ]
            })
        );
    }

    #[test]
    fn empty_compound_is_permitted() {
        let filter = and(Vec::<Filter>::new());
        assert_eq!(serde_json::to_value(&filter).unwrap(), json!({ "and": [] }));
    }

    #[test]
    fn rollup_filter_shape() {
        let filter = property_rollup(
            "Scores",
            RollupCondition::Any(RollupSubfilter::Number(NumberCondition::equals(100.0))),
        );
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Scores",
                "type": "rollup",
                "rollup": { "any": { "number": { "equals": 100.0 } } }
            })
        );
    }

    #[test]
    fn formula_filter_shape() {
        let filter = property_formula("Computed", FormulaCondition::String(
            TextCondition::equals("yes"),
        ));
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({
                "property": "Computed",
                "type": "formula",
                "formula": { "string": { "equals": "yes" } }
            })
        );
    }
}

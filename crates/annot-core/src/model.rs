//! Data model for annotated form documents.
//!
//! A [`FormAnnotation`] is a tree: the document owns its pages, each page owns
//! its fields, and each field owns its segments and optional styling,
//! formatting, and validation records. `group_id` and [`FieldGroup::field_ids`]
//! are plain string keys, not structural pointers; nothing resolves or
//! validates them.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Root entity: one annotated form document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormAnnotation {
    pub form_metadata: FormMetadata,
    pub pages: Vec<Page>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_groups: Vec<FieldGroup>,
}

/// Form identity and physical layout metadata.
///
/// `page_count` is declarative: it records what the source form claims and is
/// never checked against `pages.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormMetadata {
    pub form_id: String,
    pub form_name: String,
    pub year: i32,
    pub page_count: u32,
    pub page_size: PageSize,
}

/// Physical page dimensions with their unit (e.g., "pt", "mm").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// One page of the form. `page_number` is intended unique within the document
/// but duplicates are representable; lookups match by value, not position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub page_number: u32,
    pub fields: Vec<Field>,
}

/// A single data-capture location on a page plus its metadata.
///
/// `field_id` is intended unique across the document but uniqueness is not
/// enforced; lookups return the first match in document order. `field_value`
/// is always present and always serialized, even when empty — whether it
/// holds a literal value or a key into external data is the caller's affair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub field_id: String,
    #[serde(
        rename = "irs_line_reference",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub irs_line_ref: Option<String>,
    pub field_type: FieldType,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "empty_position")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<Segment>,
    #[serde(default, skip_serializing_if = "empty_text_style")]
    pub style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "empty_check_style")]
    pub check_style: Option<CheckStyle>,
    #[serde(default, skip_serializing_if = "empty_formatting")]
    pub formatting: Option<Formatting>,
    #[serde(default, skip_serializing_if = "empty_validation")]
    pub validation: Option<Validation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    pub field_value: String,
}

/// Rectangle on the page, in the given unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub unit: String,
}

/// A positioned sub-unit of a segmented field, e.g. one digit box of an SSN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub position: Position,
    pub length: u32,
}

/// Text rendering hints. Every attribute is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
}

/// Checkbox mark rendering hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckStyle {
    pub mark_type: String,
    pub mark_size: u32,
    pub mark_weight: String,
}

/// Display formatting hints for rendered values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Formatting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_commas: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_transform: Option<String>,
}

/// Declared value constraints. This crate records them; it never evaluates
/// them against `field_value` — enforcement belongs to a calling layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

/// A named logical collection of fields, referenced by id.
/// `field_ids` entries are weak references; resolution is a caller-side
/// lookup through the query methods, never enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldGroup {
    pub group_id: String,
    pub group_type: String,
    pub field_ids: Vec<String>,
}

/// The visual kind of a field. `Other` preserves unrecognized tags so that
/// forward-compatible input decodes and re-encodes losslessly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Currency,
    Numeric,
    Checkbox,
    Date,
    Segmented,
    Signature,
    Other(String),
}

impl FieldType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Currency => "currency",
            Self::Numeric => "numeric",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Segmented => "segmented",
            Self::Signature => "signature",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "currency" => Self::Currency,
            "numeric" => Self::Numeric,
            "checkbox" => Self::Checkbox,
            "date" => Self::Date,
            "segmented" => Self::Segmented,
            "signature" => Self::Signature,
            other => Self::Other(other.to_string()),
        }
    }
}

/// The data kind a field's value is interpreted as. Independent of
/// [`FieldType`]: a checkbox paired with `decimal` is representable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    String,
    Decimal,
    Integer,
    Boolean,
    Date,
    Other(String),
}

impl DataType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "string",
            Self::Decimal => "decimal",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for DataType {
    fn from(tag: &str) -> Self {
        match tag {
            "string" => Self::String,
            "decimal" => Self::Decimal,
            "integer" => Self::Integer,
            "boolean" => Self::Boolean,
            "date" => Self::Date,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from(tag.as_str()))
    }
}

impl Serialize for DataType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from(tag.as_str()))
    }
}

// Emission rule for optional sub-records: omitted when absent, and also when
// present but entirely zero-valued, matching the source format's collapse of
// all-zero records into absence. The text format cannot distinguish the two;
// in memory they stay distinct (`None` vs `Some(default)`).

fn empty_position(p: &Option<Position>) -> bool {
    p.as_ref().is_none_or(|p| *p == Position::default())
}

fn empty_text_style(s: &Option<TextStyle>) -> bool {
    s.as_ref().is_none_or(|s| *s == TextStyle::default())
}

fn empty_check_style(s: &Option<CheckStyle>) -> bool {
    s.as_ref().is_none_or(|s| *s == CheckStyle::default())
}

fn empty_formatting(f: &Option<Formatting>) -> bool {
    f.as_ref().is_none_or(|f| *f == Formatting::default())
}

fn empty_validation(v: &Option<Validation>) -> bool {
    v.as_ref().is_none_or(|v| *v == Validation::default())
}

impl FormAnnotation {
    /// Create an empty document with the given metadata.
    pub fn new(form_metadata: FormMetadata) -> Self {
        Self {
            form_metadata,
            pages: Vec::new(),
            field_groups: Vec::new(),
        }
    }
}

impl Field {
    /// Create a field with the given identity and no optional metadata.
    pub fn new(
        field_id: impl Into<String>,
        field_type: FieldType,
        data_type: DataType,
    ) -> Self {
        Self {
            field_id: field_id.into(),
            irs_line_ref: None,
            field_type,
            data_type,
            position: None,
            segments: Vec::new(),
            style: None,
            check_style: None,
            formatting: None,
            validation: None,
            group_id: None,
            field_value: String::new(),
        }
    }
}

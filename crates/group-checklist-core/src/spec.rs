//! Input specification for a checklist.
//!
//! The nested input is decided once, at the boundary, into a tagged union:
//! every entry is either a [`LeafSpec`] or a [`GroupSpec`]. JSON input is
//! accepted in the shape the dropdown widget has always taken:
//!
//! ```
//! use group_checklist_core::ChecklistSpec;
//!
//! let spec = ChecklistSpec::from_json_str(
//!     r#"[{"text": "Fruit", "items": ["Apple", "Banana"]}, "Carrot"]"#,
//! )
//! .unwrap();
//! assert_eq!(spec.entries().len(), 2);
//! ```

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ChecklistError, Result};

/// A selectable leaf entry.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafSpec {
    /// Display text.
    pub label: String,
    /// Payload reported when the leaf is selected.
    pub value: Value,
}

/// A group entry whose children may be leaves or further groups.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSpec {
    /// Group header text.
    pub text: String,
    /// Ordered child entries.
    pub items: Vec<EntrySpec>,
}

/// One entry of the input specification.
#[derive(Debug, Clone, PartialEq)]
pub enum EntrySpec {
    Leaf(LeafSpec),
    Group(GroupSpec),
}

impl EntrySpec {
    /// A leaf whose value is its label.
    pub fn leaf(label: impl Into<String>) -> Self {
        let label = label.into();
        Self::Leaf(LeafSpec {
            value: Value::String(label.clone()),
            label,
        })
    }

    /// A leaf with an explicit payload.
    pub fn leaf_with_value(label: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Leaf(LeafSpec {
            label: label.into(),
            value: value.into(),
        })
    }

    /// A group of entries.
    ///
    /// A group without items is materialized as a leaf labeled `text`.
    pub fn group(text: impl Into<String>, items: impl IntoIterator<Item = EntrySpec>) -> Self {
        Self::Group(GroupSpec {
            text: text.into(),
            items: items.into_iter().collect(),
        })
    }

    /// The display text of this entry.
    pub fn label(&self) -> &str {
        match self {
            EntrySpec::Leaf(leaf) => &leaf.label,
            EntrySpec::Group(group) => &group.text,
        }
    }
}

impl From<&str> for EntrySpec {
    fn from(label: &str) -> Self {
        EntrySpec::leaf(label)
    }
}

impl From<String> for EntrySpec {
    fn from(label: String) -> Self {
        EntrySpec::leaf(label)
    }
}

/// The complete input: the ordered root-level entries.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct ChecklistSpec {
    entries: Vec<EntrySpec>,
}

impl ChecklistSpec {
    /// Create a specification from root-level entries.
    pub fn new(entries: impl IntoIterator<Item = EntrySpec>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The root-level entries.
    pub fn entries(&self) -> &[EntrySpec] {
        &self.entries
    }

    /// Parse a JSON array of entries.
    pub fn from_json(value: &Value) -> Result<Self> {
        let Value::Array(items) = value else {
            return Err(ChecklistError::invalid_spec(
                "(root)",
                format!("expected an array of entries, found {}", kind_of(value)),
            ));
        };

        let entries = items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_entry(item, &(i + 1).to_string()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Parse JSON text holding an array of entries.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|err| ChecklistError::invalid_spec("(root)", err.to_string()))?;
        Self::from_json(&value)
    }
}

impl TryFrom<Value> for ChecklistSpec {
    type Error = ChecklistError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(&value)
    }
}

fn parse_entry(value: &Value, location: &str) -> Result<EntrySpec> {
    match value {
        Value::String(_) | Value::Number(_) | Value::Bool(_) => Ok(EntrySpec::Leaf(LeafSpec {
            label: scalar_text(value).unwrap_or_default(),
            value: value.clone(),
        })),
        Value::Object(object) => parse_object(object, location),
        Value::Null | Value::Array(_) => Err(ChecklistError::invalid_spec(
            location,
            format!("{} is not a checklist entry", kind_of(value)),
        )),
    }
}

fn parse_object(object: &Map<String, Value>, location: &str) -> Result<EntrySpec> {
    let text = match object.get("text") {
        None | Some(Value::Null) => None,
        Some(value) => Some(scalar_text(value).ok_or_else(|| {
            ChecklistError::invalid_spec(
                location,
                format!("`text` must be a scalar, found {}", kind_of(value)),
            )
        })?),
    };

    let items: &[Value] = match object.get("items") {
        None | Some(Value::Null) => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            return Err(ChecklistError::invalid_spec(
                location,
                format!("`items` must be an array, found {}", kind_of(other)),
            ));
        }
    };

    if !items.is_empty() {
        let items = items
            .iter()
            .enumerate()
            .map(|(i, item)| parse_entry(item, &format!("{location}.{}", i + 1)))
            .collect::<Result<Vec<_>>>()?;
        return Ok(EntrySpec::Group(GroupSpec {
            text: text.unwrap_or_default(),
            items,
        }));
    }

    let Some(label) = text else {
        return Err(ChecklistError::invalid_spec(
            location,
            "object entry has neither `text` nor any `items`",
        ));
    };
    let value = match object.get("value") {
        None | Some(Value::Null) => Value::String(label.clone()),
        Some(value) => value.clone(),
    };
    Ok(EntrySpec::Leaf(LeafSpec { label, value }))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

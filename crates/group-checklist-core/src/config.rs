//! Checklist configuration.
//!
//! Options are read leniently: an unknown or invalid value is replaced with
//! its documented default and a debug event names the replaced option.
//! Reading configuration never fails.

use serde_json::Value;

use crate::logging::targets;

/// Default caption of the check-all pseudo-item.
pub const DEFAULT_CHECK_ALL_TEXT: &str = "(All)";

/// Default payload of the check-all pseudo-item.
pub const DEFAULT_CHECK_ALL_VALUE: i64 = 0;

/// Caption and payload of the check-all pseudo-item.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckAllItem {
    pub text: String,
    pub value: Value,
}

impl CheckAllItem {
    /// Create a check-all item with a custom caption and payload.
    pub fn new(text: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
        }
    }
}

impl Default for CheckAllItem {
    fn default() -> Self {
        Self {
            text: DEFAULT_CHECK_ALL_TEXT.to_string(),
            value: Value::from(DEFAULT_CHECK_ALL_VALUE),
        }
    }
}

/// Options consumed by the tree builder and the propagator.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChecklistConfig {
    /// Whether group headers may show the indeterminate state.
    pub allow_indeterminate: bool,
    /// The optional check-all pseudo-item.
    pub check_all_item: Option<CheckAllItem>,
}

impl ChecklistConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the indeterminate state using builder pattern.
    pub fn with_allow_indeterminate(mut self, allow: bool) -> Self {
        self.allow_indeterminate = allow;
        self
    }

    /// Add a check-all pseudo-item using builder pattern.
    pub fn with_check_all_item(mut self, item: CheckAllItem) -> Self {
        self.check_all_item = Some(item);
        self
    }

    /// Read the configuration from a JSON option object.
    ///
    /// Recognized keys are `allowIndeterminate` and `checkAllItem`; all other
    /// keys are ignored. A non-object input yields the defaults.
    pub fn from_json(options: &Value) -> Self {
        let Value::Object(options) = options else {
            if !options.is_null() {
                tracing::debug!(target: targets::CONFIG, "options are not an object, using defaults");
            }
            return Self::default();
        };

        let allow_indeterminate = match options.get("allowIndeterminate") {
            None | Some(Value::Null) => false,
            Some(Value::Bool(allow)) => *allow,
            Some(other) => {
                tracing::debug!(
                    target: targets::CONFIG,
                    option = "allowIndeterminate",
                    value = %other,
                    "invalid option value, using default"
                );
                false
            }
        };

        let check_all_item = options.get("checkAllItem").and_then(read_check_all_item);

        Self {
            allow_indeterminate,
            check_all_item,
        }
    }
}

fn read_check_all_item(value: &Value) -> Option<CheckAllItem> {
    match value {
        Value::Object(fields) if fields.is_empty() => None,
        Value::Object(fields) => {
            let text = match fields.get("text") {
                Some(Value::String(text)) if !text.is_empty() => text.clone(),
                None | Some(Value::Null) => DEFAULT_CHECK_ALL_TEXT.to_string(),
                Some(other) => {
                    tracing::debug!(
                        target: targets::CONFIG,
                        option = "checkAllItem.text",
                        value = %other,
                        "invalid option value, using default"
                    );
                    DEFAULT_CHECK_ALL_TEXT.to_string()
                }
            };
            let value = fields
                .get("value")
                .filter(|value| is_truthy(value))
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_CHECK_ALL_VALUE));
            Some(CheckAllItem { text, value })
        }
        other if is_truthy(other) => Some(CheckAllItem::default()),
        _ => None,
    }
}

/// Loose truthiness of an option value: `null`, `false`, zero and the empty
/// string are false.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

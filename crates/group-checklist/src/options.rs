//! Presentation options of the dropdown.
//!
//! These are read from the same option object as
//! [`ChecklistConfig`](group_checklist_core::ChecklistConfig) and follow the
//! same rule: an invalid value is replaced by its default, never reported
//! as an error.

use std::time::Duration;

use serde_json::{Map, Value};

use crate::logging::targets;

/// Default text of the closed control.
pub const DEFAULT_PLACEHOLDER: &str = "";
/// Default maximum dropdown height in pixels.
pub const DEFAULT_MAX_DROP_HEIGHT: f32 = 200.0;
/// Default indent per depth level in pixels.
pub const DEFAULT_INDENT: f32 = 15.0;

/// Animation used when the dropdown opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    #[default]
    Drop,
    Slide,
    Fade,
}

impl EffectKind {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "drop" => Some(Self::Drop),
            "slide" => Some(Self::Slide),
            "fade" => Some(Self::Fade),
            _ => None,
        }
    }
}

/// Named animation speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl EffectSpeed {
    /// Animation length for this speed.
    pub fn duration(&self) -> Duration {
        match self {
            EffectSpeed::Slow => Duration::from_millis(2000),
            EffectSpeed::Normal => Duration::from_millis(1000),
            EffectSpeed::Fast => Duration::from_millis(500),
        }
    }

    fn parse(name: &str) -> Option<Self> {
        match name {
            "slow" => Some(Self::Slow),
            "normal" => Some(Self::Normal),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}

/// Dropdown animation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownEffect {
    pub kind: EffectKind,
    pub speed: EffectSpeed,
}

/// Options that only affect how the checklist is presented.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownOptions {
    /// Text shown in the closed control.
    pub placeholder: String,
    /// Maximum visible dropdown height; taller content scrolls.
    pub max_drop_height: f32,
    /// Horizontal offset of a row relative to its parent group, per level.
    pub indent: f32,
    /// Open/close animation.
    pub effect: DropdownEffect,
}

impl Default for DropdownOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            max_drop_height: DEFAULT_MAX_DROP_HEIGHT,
            indent: DEFAULT_INDENT,
            effect: DropdownEffect::default(),
        }
    }
}

impl DropdownOptions {
    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder text using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the maximum dropdown height; non-positive values keep the default.
    pub fn with_max_drop_height(mut self, height: f32) -> Self {
        self.max_drop_height = positive_or(height, DEFAULT_MAX_DROP_HEIGHT);
        self
    }

    /// Set the per-level indent; non-positive values keep the default.
    pub fn with_indent(mut self, indent: f32) -> Self {
        self.indent = positive_or(indent, DEFAULT_INDENT);
        self
    }

    /// Set the animation using builder pattern.
    pub fn with_effect(mut self, kind: EffectKind, speed: EffectSpeed) -> Self {
        self.effect = DropdownEffect { kind, speed };
        self
    }

    /// Read the options from a JSON option object.
    ///
    /// Recognized keys are `placeholder`, `maxDropHeight`, `indent` and
    /// `dropdownEffect`.
    pub fn from_json(options: &Value) -> Self {
        let Value::Object(options) = options else {
            return Self::default();
        };

        let placeholder = match options.get("placeholder") {
            None | Some(Value::Null) => DEFAULT_PLACEHOLDER.to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => {
                fallback("placeholder", other);
                DEFAULT_PLACEHOLDER.to_string()
            }
        };

        Self {
            placeholder,
            max_drop_height: read_pixels(options, "maxDropHeight", DEFAULT_MAX_DROP_HEIGHT),
            indent: read_pixels(options, "indent", DEFAULT_INDENT),
            effect: read_effect(options.get("dropdownEffect")),
        }
    }
}

fn positive_or(value: f32, default: f32) -> f32 {
    if value.is_finite() && value > 0.0 { value } else { default }
}

fn read_pixels(options: &Map<String, Value>, key: &str, default: f32) -> f32 {
    match options.get(key) {
        None | Some(Value::Null) => default,
        Some(value) => match value.as_f64() {
            Some(pixels) if pixels.is_finite() && pixels > 0.0 => pixels as f32,
            _ => {
                fallback(key, value);
                default
            }
        },
    }
}

fn read_effect(value: Option<&Value>) -> DropdownEffect {
    let Some(Value::Object(effect)) = value else {
        if let Some(other) = value.filter(|v| !v.is_null()) {
            fallback("dropdownEffect", other);
        }
        return DropdownEffect::default();
    };

    let kind = match effect.get("effect") {
        None | Some(Value::Null) => EffectKind::default(),
        Some(value) => value.as_str().and_then(EffectKind::parse).unwrap_or_else(|| {
            fallback("dropdownEffect.effect", value);
            EffectKind::default()
        }),
    };
    let speed = match effect.get("speed") {
        None | Some(Value::Null) => EffectSpeed::default(),
        Some(value) => value.as_str().and_then(EffectSpeed::parse).unwrap_or_else(|| {
            fallback("dropdownEffect.speed", value);
            EffectSpeed::default()
        }),
    };

    DropdownEffect { kind, speed }
}

fn fallback(option: &str, value: &Value) {
    tracing::debug!(
        target: targets::OPTIONS,
        option,
        value = %value,
        "invalid option value, using default"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let options = DropdownOptions::from_json(&json!({}));
        assert_eq!(options, DropdownOptions::default());
        assert_eq!(options.max_drop_height, 200.0);
        assert_eq!(options.indent, 15.0);
        assert_eq!(options.placeholder, "");
        assert_eq!(options.effect.speed.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn test_valid_values() {
        let options = DropdownOptions::from_json(&json!({
            "placeholder": "Pick regions",
            "maxDropHeight": 320,
            "indent": 12.5,
            "dropdownEffect": {"effect": "fade", "speed": "fast"}
        }));
        assert_eq!(options.placeholder, "Pick regions");
        assert_eq!(options.max_drop_height, 320.0);
        assert_eq!(options.indent, 12.5);
        assert_eq!(options.effect.kind, EffectKind::Fade);
        assert_eq!(options.effect.speed.duration(), Duration::from_millis(500));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let options = DropdownOptions::from_json(&json!({
            "placeholder": 7,
            "maxDropHeight": -5,
            "indent": "wide",
            "dropdownEffect": {"effect": "spin", "speed": 300}
        }));
        assert_eq!(options, DropdownOptions::default());

        let options = DropdownOptions::from_json(&json!({"maxDropHeight": 0, "dropdownEffect": "fade"}));
        assert_eq!(options, DropdownOptions::default());
    }

    #[test]
    fn test_builder() {
        let options = DropdownOptions::new()
            .with_placeholder("Any")
            .with_max_drop_height(-1.0)
            .with_indent(20.0)
            .with_effect(EffectKind::Slide, EffectSpeed::Slow);
        assert_eq!(options.max_drop_height, DEFAULT_MAX_DROP_HEIGHT);
        assert_eq!(options.indent, 20.0);
        assert_eq!(options.effect.speed.duration(), Duration::from_secs(2));
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::app::infrastructure::error::AppError;

/// The fixed set of layout parameters the window is built from.
///
/// Widths and heights of inputs and buttons are measured in character cells
/// and text lines; window sizes and paddings are in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    WindowWidth,
    WindowHeight,
    InputNameInputWidth,
    InputNameInputHeight,
    InputLabelInputWidth,
    InputLabelInputHeight,
    RunButtonWidth,
    RunButtonHeight,
    RunButtonPadding,
    SaveAsButtonWidth,
    SaveAsButtonHeight,
    SaveAsButtonPadding,
}

impl SettingKey {
    /// All declared settings, in the order the settings panel lists them.
    pub fn all() -> &'static [SettingKey] {
        &[
            Self::WindowWidth,
            Self::WindowHeight,
            Self::InputNameInputWidth,
            Self::InputNameInputHeight,
            Self::InputLabelInputWidth,
            Self::InputLabelInputHeight,
            Self::RunButtonWidth,
            Self::RunButtonHeight,
            Self::RunButtonPadding,
            Self::SaveAsButtonWidth,
            Self::SaveAsButtonHeight,
            Self::SaveAsButtonPadding,
        ]
    }

    /// Name used as the JSON key in the settings file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WindowWidth => "window_width",
            Self::WindowHeight => "window_height",
            Self::InputNameInputWidth => "input_name_input_width",
            Self::InputNameInputHeight => "input_name_input_height",
            Self::InputLabelInputWidth => "input_label_input_width",
            Self::InputLabelInputHeight => "input_label_input_height",
            Self::RunButtonWidth => "run_button_width",
            Self::RunButtonHeight => "run_button_height",
            Self::RunButtonPadding => "run_button_padding",
            Self::SaveAsButtonWidth => "save_as_button_width",
            Self::SaveAsButtonHeight => "save_as_button_height",
            Self::SaveAsButtonPadding => "save_as_button_padding",
        }
    }

    /// Inclusive `(min, max)` bounds
    pub fn range(&self) -> (i32, i32) {
        match self {
            Self::WindowWidth => (600, 1600),
            Self::WindowHeight => (400, 1200),
            Self::InputNameInputWidth => (20, 100),
            Self::InputNameInputHeight => (1, 5),
            Self::InputLabelInputWidth => (40, 200),
            Self::InputLabelInputHeight => (5, 30),
            Self::RunButtonWidth => (5, 20),
            Self::RunButtonHeight => (1, 5),
            Self::RunButtonPadding => (5, 50),
            Self::SaveAsButtonWidth => (10, 30),
            Self::SaveAsButtonHeight => (1, 5),
            Self::SaveAsButtonPadding => (5, 50),
        }
    }

    pub fn default_value(&self) -> i32 {
        match self {
            Self::WindowWidth => 900,
            Self::WindowHeight => 620,
            Self::InputNameInputWidth => 90,
            Self::InputNameInputHeight => 2,
            Self::InputLabelInputWidth => 90,
            Self::InputLabelInputHeight => 25,
            Self::RunButtonWidth => 9,
            Self::RunButtonHeight => 1,
            Self::RunButtonPadding => 10,
            Self::SaveAsButtonWidth => 16,
            Self::SaveAsButtonHeight => 1,
            Self::SaveAsButtonPadding => 10,
        }
    }

    /// Human-readable label: `run_button_width` becomes "Run button width".
    pub fn label(&self) -> String {
        let spaced = self.as_str().replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        let (min, max) = self.range();
        (min..=max).contains(&value)
    }

    /// Check `value` against the declared range.
    pub fn validate(&self, value: i32) -> Result<i32, AppError> {
        if self.contains(value) {
            Ok(value)
        } else {
            let (min, max) = self.range();
            Err(AppError::OutOfRange { key: *self, value, min, max })
        }
    }

    pub fn clamp_value(&self, value: i64) -> i32 {
        let (min, max) = self.range();
        value.clamp(min as i64, max as i64) as i32
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::UnknownSetting(s.to_string()))
    }
}

/// Outcome of reading one raw JSON object into a [`SettingsDocument`].
#[derive(Debug, Default)]
pub struct LoadNotes {
    /// Declared keys absent from the file, filled with defaults.
    pub filled: Vec<SettingKey>,
    /// Declared keys whose stored value was out of range: `(key, stored, clamped)`.
    pub clamped: Vec<(SettingKey, i64, i32)>,
}

/// Complete set of declared settings plus any unknown keys carried over
/// from the file they were loaded from.
///
/// Serializes as one flat JSON object: declared keys in declaration order,
/// then the unknown ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettingsDocument {
    #[serde(flatten)]
    values: BTreeMap<SettingKey, i32>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// A declared key's stored value as found on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredNumber {
    Int(i64),
    Float(f64),
}

impl StoredNumber {
    /// Floats count only when they have no fractional part (`90.0`).
    fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Int(n) => Some(n),
            Self::Float(f) if f.is_finite() && f.fract() == 0.0 => Some(f as i64),
            Self::Float(_) => None,
        }
    }
}

impl Default for SettingsDocument {
    fn default() -> Self {
        Self {
            values: SettingKey::all()
                .iter()
                .map(|key| (*key, key.default_value()))
                .collect(),
            extra: Map::new(),
        }
    }
}

impl SettingsDocument {
    pub fn get(&self, key: SettingKey) -> i32 {
        self.values
            .get(&key)
            .copied()
            .unwrap_or_else(|| key.default_value())
    }

    /// Store `value` if it lies inside the declared range.
    pub fn set(&mut self, key: SettingKey, value: i32) -> Result<(), AppError> {
        let value = key.validate(value)?;
        self.values.insert(key, value);
        Ok(())
    }

    /// Keys in the loaded file that have no declared range.
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.extra.keys().map(String::as_str)
    }

    /// Build a document from a parsed JSON object. Missing keys get their
    /// default, out-of-range numbers are clamped, and a declared key holding
    /// anything but an integer is an error message.
    pub fn from_json_map(mut map: Map<String, Value>) -> Result<(Self, LoadNotes), String> {
        let mut values = BTreeMap::new();
        let mut notes = LoadNotes::default();

        for key in SettingKey::all() {
            match map.remove(key.as_str()) {
                None => {
                    notes.filled.push(*key);
                    values.insert(*key, key.default_value());
                }
                Some(raw) => {
                    let stored = serde_json::from_value::<StoredNumber>(raw.clone())
                        .ok()
                        .and_then(|n| n.as_integer())
                        .ok_or_else(|| format!("{} is not an integer: {}", key, raw))?;
                    let clamped = key.clamp_value(stored);
                    if clamped as i64 != stored {
                        notes.clamped.push((*key, stored, clamped));
                    }
                    values.insert(*key, clamped);
                }
            }
        }

        Ok((Self { values, extra: map }, notes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_defaults_lie_inside_ranges() {
        for key in SettingKey::all() {
            assert!(key.contains(key.default_value()), "{key} default out of range");
        }
    }

    #[test]
    fn test_default_document() {
        let doc = SettingsDocument::default();
        assert_eq!(doc.get(SettingKey::WindowWidth), 900);
        assert_eq!(doc.get(SettingKey::WindowHeight), 620);
        assert_eq!(doc.get(SettingKey::InputLabelInputHeight), 25);
        assert_eq!(doc.get(SettingKey::SaveAsButtonWidth), 16);
        assert_eq!(doc.unknown_keys().count(), 0);
    }

    #[test]
    fn test_set_accepts_bounds() {
        let mut doc = SettingsDocument::default();
        doc.set(SettingKey::RunButtonWidth, 5).unwrap();
        assert_eq!(doc.get(SettingKey::RunButtonWidth), 5);
        doc.set(SettingKey::RunButtonWidth, 20).unwrap();
        assert_eq!(doc.get(SettingKey::RunButtonWidth), 20);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut doc = SettingsDocument::default();
        let err = doc.set(SettingKey::WindowHeight, 1201).unwrap_err();
        assert!(matches!(
            err,
            AppError::OutOfRange { key: SettingKey::WindowHeight, value: 1201, min: 400, max: 1200 }
        ));
        assert_eq!(doc.get(SettingKey::WindowHeight), 620);

        assert!(doc.set(SettingKey::RunButtonHeight, 0).is_err());
        assert_eq!(doc.get(SettingKey::RunButtonHeight), 1);
    }

    #[test]
    fn test_key_names_round_trip_through_from_str() {
        for key in SettingKey::all() {
            assert_eq!(key.as_str().parse::<SettingKey>().unwrap(), *key);
        }
        assert!(matches!(
            "font_size".parse::<SettingKey>(),
            Err(AppError::UnknownSetting(name)) if name == "font_size"
        ));
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&SettingKey::InputNameInputHeight).unwrap();
        assert_eq!(json, "\"input_name_input_height\"");
    }

    #[test]
    fn test_label() {
        assert_eq!(SettingKey::WindowWidth.label(), "Window width");
        assert_eq!(SettingKey::SaveAsButtonPadding.label(), "Save as button padding");
    }

    #[test]
    fn test_from_json_map_fills_missing_keys() {
        let (doc, notes) =
            SettingsDocument::from_json_map(object(json!({"window_width": 1000}))).unwrap();
        assert_eq!(doc.get(SettingKey::WindowWidth), 1000);
        assert_eq!(doc.get(SettingKey::WindowHeight), 620);
        assert_eq!(notes.filled.len(), SettingKey::all().len() - 1);
        assert!(notes.clamped.is_empty());
    }

    #[test]
    fn test_from_json_map_clamps_out_of_range() {
        let (doc, notes) = SettingsDocument::from_json_map(object(json!({
            "window_width": 5000,
            "run_button_height": -3
        })))
        .unwrap();
        assert_eq!(doc.get(SettingKey::WindowWidth), 1600);
        assert_eq!(doc.get(SettingKey::RunButtonHeight), 1);
        assert_eq!(notes.clamped.len(), 2);
    }

    #[test]
    fn test_from_json_map_keeps_unknown_keys() {
        let (doc, _) = SettingsDocument::from_json_map(object(json!({
            "window_width": 700,
            "theme": "dark"
        })))
        .unwrap();
        assert_eq!(doc.unknown_keys().collect::<Vec<_>>(), vec!["theme"]);

        let written = serde_json::to_value(&doc).unwrap();
        assert_eq!(written["theme"], json!("dark"));
        assert_eq!(written["window_width"], json!(700));
    }

    #[test]
    fn test_from_json_map_rejects_non_integer() {
        let err = SettingsDocument::from_json_map(object(json!({"window_width": "wide"})))
            .unwrap_err();
        assert!(err.contains("window_width"));

        assert!(SettingsDocument::from_json_map(object(json!({"window_width": 900.5}))).is_err());
        assert!(SettingsDocument::from_json_map(object(json!({"window_width": 900.0}))).is_ok());
    }

    #[test]
    fn test_serialized_document_is_complete() {
        let written = serde_json::to_value(SettingsDocument::default()).unwrap();
        let map = written.as_object().unwrap();
        assert_eq!(map.len(), SettingKey::all().len());
        for key in SettingKey::all() {
            assert_eq!(map[key.as_str()], json!(key.default_value()));
        }
    }

    #[test]
    fn test_serialized_declared_keys_come_first() {
        let (doc, _) = SettingsDocument::from_json_map(object(json!({
            "aaa_unknown": 1,
            "run_button_width": 12
        })))
        .unwrap();
        let text = serde_json::to_string(&doc).unwrap();
        assert!(text.starts_with(r#"{"window_width":900,"window_height":620,"#));
        assert!(text.contains(r#""run_button_width":12"#));
        assert!(text.ends_with(r#""aaa_unknown":1}"#));
    }
}

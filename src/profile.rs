//! Serializable composition profile.
//!
//! A [`CompositionProfile`] captures composition settings as JSON so they can
//! live in a file next to the assets instead of on the command line. Every
//! field is optional; missing fields leave the current parameters untouched.
//!
//! # Example
//!
//! ```
//! use iconpad::{Background, CompositionProfile};
//!
//! let profile = CompositionProfile::new()
//!     .with_logo_size_percent(60.0)
//!     .with_background(Background::Transparent);
//!
//! let json = profile.to_json().unwrap();
//! let restored = CompositionProfile::from_json(&json).unwrap();
//! assert_eq!(restored, profile);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compose::{Background, CompositionParameters};
use crate::error::{Error, Result};

/// A serializable set of composition settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "canvasSize": 1024,
///   "logoSizePercent": 60.0,
///   "paddingPercent": 20.0,
///   "background": "#6a1b9a"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompositionProfile {
    /// Side length of the square icon canvas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_size: Option<u32>,

    /// Share of the canvas the logo occupies, in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_size_percent: Option<f64>,

    /// Border thickness as a percentage of the smaller source side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_percent: Option<f64>,

    /// `"transparent"` or a hex color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
}

impl CompositionProfile {
    /// Creates an empty profile with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_canvas_size(mut self, size: u32) -> Self {
        self.canvas_size = Some(size);
        self
    }

    pub fn with_logo_size_percent(mut self, percent: f64) -> Self {
        self.logo_size_percent = Some(percent);
        self
    }

    pub fn with_padding_percent(mut self, percent: f64) -> Self {
        self.padding_percent = Some(percent);
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Captures every field of `params`.
    pub fn from_parameters(params: &CompositionParameters) -> Self {
        Self {
            canvas_size: Some(params.target_canvas_size),
            logo_size_percent: Some(params.content_fraction * 100.0),
            padding_percent: Some(params.padding_fraction * 100.0),
            background: Some(params.background),
        }
    }

    /// Overlays the fields that are set onto `params`.
    pub fn apply_to(&self, params: CompositionParameters) -> CompositionParameters {
        CompositionParameters {
            target_canvas_size: self.canvas_size.unwrap_or(params.target_canvas_size),
            content_fraction: self
                .logo_size_percent
                .map_or(params.content_fraction, |p| p / 100.0),
            padding_fraction: self
                .padding_percent
                .map_or(params.padding_fraction, |p| p / 100.0),
            background: self.background.unwrap_or(params.background),
        }
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads a profile from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json).map_err(|source| Error::Profile {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ICON_BACKGROUND;

    #[test]
    fn profile_json_format() {
        let profile = CompositionProfile::new()
            .with_canvas_size(512)
            .with_background(Background::Solid(ICON_BACKGROUND));

        let json = profile.to_json_pretty().unwrap();

        assert!(json.contains("\"canvasSize\": 512"));
        assert!(json.contains("\"background\": \"#6a1b9a\""));
        assert!(!json.contains("paddingPercent"));
    }

    #[test]
    fn empty_profile_deserializes() {
        let profile = CompositionProfile::from_json("{}").unwrap();
        assert_eq!(profile, CompositionProfile::default());
    }

    #[test]
    fn apply_overrides_only_set_fields() {
        let profile = CompositionProfile::from_json(
            r#"{ "paddingPercent": 10, "background": "transparent" }"#,
        )
        .unwrap();
        let base = CompositionParameters::new().with_canvas_size(256);

        let params = profile.apply_to(base);

        assert_eq!(params.target_canvas_size, 256);
        assert_eq!(params.content_fraction, base.content_fraction);
        assert_eq!(params.padding_fraction, 0.1);
        assert_eq!(params.background, Background::Transparent);
    }

    #[test]
    fn bad_background_rejected() {
        let err = CompositionProfile::from_json(r#"{ "background": "mauve-ish" }"#).unwrap_err();
        assert!(err.to_string().contains("background"));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(CompositionProfile::from_json(r#"{ "canvas": 10 }"#).is_err());
    }

    #[test]
    fn profile_from_parameters() {
        let params = CompositionParameters::default();
        let profile = CompositionProfile::from_parameters(&params);

        assert_eq!(profile.canvas_size, Some(1024));
        assert_eq!(profile.logo_size_percent, Some(60.0));
        assert_eq!(profile.apply_to(CompositionParameters::new().with_canvas_size(1)), params);
    }

    #[test]
    fn missing_profile_file() {
        let path = std::env::temp_dir().join("iconpad-profile-does-not-exist.json");
        assert!(matches!(
            CompositionProfile::from_path(&path),
            Err(Error::Read { .. })
        ));
    }
}

//! Configuration system
//!
//! Menu settings can be built in code or loaded from `.toml` / `.ron` files
//! through the [`Config`] trait.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec4;
use crate::input::Key;
use crate::ui::WindowSize;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        Self::from_str_with_format(&contents, path)
    }

    /// Parse configuration text, choosing the format from `path`'s extension
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Font loading parameters handed to the text backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Path to the TrueType font file
    pub path: PathBuf,
    /// Rasterization scale in pixels
    pub scale: u32,
    /// First code point loaded into the glyph atlas
    pub first_glyph: u32,
    /// Last code point loaded into the glyph atlas
    pub last_glyph: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("font/luximr.ttf"),
            scale: 32,
            first_glyph: 32,
            last_glyph: 127,
        }
    }
}

/// Overlay menu configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Panel width in pixels
    pub width: f32,
    /// Panel height in pixels
    pub height: f32,
    /// Key that shows and hides the menu
    pub toggle_key: Key,
    /// Scale increment applied per frame by hover-grow callbacks
    pub text_scale_rate: f32,
    /// Panel background color (RGBA)
    pub background_color: [f32; 4],
    /// Text box cursor blink interval in milliseconds
    pub cursor_blink_interval_ms: u64,
    /// Initial window size
    pub window: WindowSize,
    /// Font parameters
    pub font: FontConfig,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            toggle_key: Key::M,
            text_scale_rate: 0.01,
            background_color: [0.2, 0.2, 0.2, 0.8],
            cursor_blink_interval_ms: 500,
            window: WindowSize::new(800.0, 600.0),
            font: FontConfig::default(),
        }
    }
}

impl Config for MenuConfig {}

impl MenuConfig {
    /// Create a configuration for a panel of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the toggle key
    pub fn with_toggle_key(mut self, key: Key) -> Self {
        self.toggle_key = key;
        self
    }

    /// Set the initial window size
    pub fn with_window(mut self, width: f32, height: f32) -> Self {
        self.window = WindowSize::new(width, height);
        self
    }

    /// Set the font parameters
    pub fn with_font(mut self, font: FontConfig) -> Self {
        self.font = font;
        self
    }

    /// Set the panel background color
    pub fn with_background_color(mut self, color: [f32; 4]) -> Self {
        self.background_color = color;
        self
    }

    /// Background color as a vector
    pub fn background(&self) -> Vec4 {
        Vec4::from(self.background_color)
    }

    /// Cursor blink interval as a duration
    pub const fn cursor_blink_interval(&self) -> Duration {
        Duration::from_millis(self.cursor_blink_interval_ms)
    }

    /// Check the configuration for values the panel cannot work with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(format!("Panel size must be positive, got {}x{}", self.width, self.height));
        }
        if self.font.first_glyph > self.font.last_glyph {
            return Err(format!(
                "Empty glyph range {}..={}",
                self.font.first_glyph, self.font.last_glyph
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_match_classic_menu() {
        let config = MenuConfig::default();
        assert_eq!(config.toggle_key, Key::M);
        assert_eq!(config.cursor_blink_interval(), Duration::from_millis(500));
        assert_eq!(config.font.first_glyph, 32);
        assert_eq!(config.font.last_glyph, 127);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_partial_overrides_defaults() {
        let text = r#"
            width = 200.0
            toggle_key = 256

            [font]
            scale = 24
        "#;
        let config = MenuConfig::from_str_with_format(text, "menu.toml").unwrap();
        assert_eq!(config.width, 200.0);
        assert_eq!(config.height, 300.0);
        assert_eq!(config.toggle_key, Key::ESCAPE);
        assert_eq!(config.font.scale, 24);
        assert_eq!(config.font.path, PathBuf::from("font/luximr.ttf"));
    }

    #[test]
    fn test_ron_parse() {
        let text = "(width: 120.0, height: 80.0, cursor_blink_interval_ms: 250)";
        let config = MenuConfig::from_str_with_format(text, "menu.ron").unwrap();
        assert_eq!(config.width, 120.0);
        assert_eq!(config.cursor_blink_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_unsupported_format() {
        let result = MenuConfig::from_str_with_format("{}", "menu.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MenuConfig::new(0.0, 100.0).validate().is_err());

        let mut config = MenuConfig::default();
        config.font.first_glyph = 200;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_size() {
        assert!(MenuConfig::new(f32::NAN, 100.0).validate().is_err());
        assert!(MenuConfig::new(100.0, f32::NAN).validate().is_err());
        assert!(MenuConfig::new(f32::INFINITY, 100.0).validate().is_err());
    }

    #[test]
    fn test_save_then_load_toml_and_ron() {
        let dir = tempdir().unwrap();
        let config = MenuConfig::new(320.0, 240.0)
            .with_toggle_key(Key::ESCAPE)
            .with_window(1024.0, 768.0)
            .with_background_color([0.1, 0.2, 0.3, 0.5]);

        for name in ["menu.toml", "menu.ron"] {
            let path = dir.path().join(name);
            let path = path.to_str().unwrap();
            config.save_to_file(path).unwrap();

            let loaded = MenuConfig::load_from_file(path).unwrap();
            assert_eq!(loaded.width, 320.0);
            assert_eq!(loaded.height, 240.0);
            assert_eq!(loaded.toggle_key, Key::ESCAPE);
            assert_eq!(loaded.window, WindowSize::new(1024.0, 768.0));
            assert_eq!(loaded.background_color, [0.1, 0.2, 0.3, 0.5]);
            assert_eq!(loaded.font.path, config.font.path);
        }
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("menu.json");
        let result = MenuConfig::default().save_to_file(path.to_str().unwrap());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
        assert!(!path.exists());
    }
}

//! Game configuration.
//!
//! Every tunable number the systems use comes from [`GameConfig`]. Configs
//! are read from JSON; any field left out takes its default.

use std::path::Path;

use grove_math::Bounds;
use serde::{Deserialize, Serialize};

/// Errors raised while loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file is not valid JSON for [`GameConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Which game the tick loop drives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Players walk a grid of trees, one unscaled step per tick.
    #[default]
    Trample,
    /// Ships in a scrolling field, integrated against elapsed time.
    Scroller,
}

/// Named constants for the simulation and its driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Enemy ship speed in world units per second.
    pub enemy_speed: f32,
    /// Background scroll speed. Movement subtracts `scroll_speed * 10`
    /// from every vertical velocity.
    pub scroll_speed: f32,
    /// Delay between trample turns.
    pub tick_interval_ms: u64,
    /// Delay between scroller frames.
    pub frame_interval_ms: u64,
    /// How far outside the canvas an entity may drift before wrapping.
    pub boundary_padding: f32,
    /// Ships are kept this far from the top and bottom edges.
    pub ship_margin: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Stop after this many ticks (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::Trample,
            enemy_speed: 150.0,
            scroll_speed: 5.0,
            tick_interval_ms: 500,
            frame_interval_ms: 16,
            boundary_padding: 100.0,
            ship_margin: 15.0,
            canvas_width: 800.0,
            canvas_height: 600.0,
            max_ticks: 0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed JSON and
    /// [`ConfigError::Invalid`] on out-of-range values.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a JSON config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`GameConfig::from_json_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        let floats = [
            ("enemy_speed", self.enemy_speed),
            ("scroll_speed", self.scroll_speed),
            ("boundary_padding", self.boundary_padding),
            ("ship_margin", self.ship_margin),
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ];
        if let Some((name, _)) = floats.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::Invalid(format!("{name} must be a finite number")));
        }
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return invalid("canvas dimensions must be positive");
        }
        if self.boundary_padding < 0.0 {
            return invalid("boundary_padding must not be negative");
        }
        if self.ship_margin < 0.0 || self.ship_margin * 2.0 > self.canvas_height {
            return invalid("ship_margin must fit twice inside canvas_height");
        }
        if self.enemy_speed < 0.0 {
            return invalid("enemy_speed must not be negative");
        }
        if self.tick_interval_ms == 0 || self.frame_interval_ms == 0 {
            return invalid("tick and frame intervals must be at least 1 ms");
        }
        Ok(())
    }

    /// The canvas as [`Bounds`].
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.canvas_width, self.canvas_height)
    }

    /// Downward bias subtracted from vertical velocity by the movement
    /// system.
    #[must_use]
    pub fn scroll_bias(&self) -> f32 {
        self.scroll_speed * 10.0
    }

    /// Delay between ticks for the configured mode.
    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        match self.mode {
            GameMode::Trample => self.tick_interval_ms,
            GameMode::Scroller => self.frame_interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.scroll_bias(), 50.0);
        assert_eq!(config.bounds(), Bounds::new(800.0, 600.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            GameConfig::from_json_str(r#"{"mode": "scroller", "enemy_speed": 90}"#).unwrap();
        assert_eq!(config.mode, GameMode::Scroller);
        assert_eq!(config.enemy_speed, 90.0);
        assert_eq!(config.boundary_padding, 100.0);
        assert_eq!(config.interval_ms(), 16);
    }

    #[test]
    fn test_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = GameConfig::from_json_str(r#"{"canvas_width": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_json_str(r#"{"tick_interval_ms": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_finite_values_rejected() {
        for field in ["enemy_speed", "scroll_speed", "boundary_padding", "ship_margin"] {
            let config = GameConfig {
                enemy_speed: if field == "enemy_speed" { f32::NAN } else { 150.0 },
                scroll_speed: if field == "scroll_speed" { f32::NAN } else { 5.0 },
                boundary_padding: if field == "boundary_padding" { f32::NAN } else { 100.0 },
                ship_margin: if field == "ship_margin" { f32::NAN } else { 15.0 },
                ..GameConfig::default()
            };
            match config.validate() {
                Err(ConfigError::Invalid(msg)) => assert!(msg.starts_with(field)),
                other => panic!("{field}: expected Invalid, got {other:?}"),
            }
        }

        let config = GameConfig {
            canvas_width: f32::INFINITY,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

//! Board configuration.

use crate::error::{BoardError, BoardResult};
use crate::item::{FontStyle, TextColor};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Whether drag gestures produce undo steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHistory {
    /// Drag moves are committed directly and are not undoable (default).
    #[default]
    Untracked,
    /// A whole gesture, from `begin_drag` to `end_drag`, is one undo step.
    OnGestureEnd,
}

/// Style used when the caller does not supply one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_style: FontStyle,
    pub color: TextColor,
}

impl TextStyle {
    /// Default font size in pixels.
    pub const DEFAULT_FONT_SIZE: f64 = 16.0;
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_size: Self::DEFAULT_FONT_SIZE,
            font_style: FontStyle::default(),
            color: TextColor::black(),
        }
    }
}

/// Configuration for a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Where newly added items are placed.
    pub default_position: Point,
    /// Style for `add_text_with_defaults`.
    pub default_style: TextStyle,
    /// Maximum number of undo states to keep (None = unbounded).
    pub history_limit: Option<usize>,
    pub drag_history: DragHistory,
}

impl BoardConfig {
    /// Default placement for new items.
    pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> BoardResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| BoardError::Config(e.to_string()))
    }

    fn validate(&self) -> BoardResult<()> {
        let size = self.default_style.font_size;
        if !size.is_finite() || size <= 0.0 {
            return Err(BoardError::Config(format!(
                "default font size must be positive, got {size}"
            )));
        }
        if self.history_limit == Some(0) {
            return Err(BoardError::Config(
                "history limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_position: Self::DEFAULT_POSITION,
            default_style: TextStyle::default(),
            history_limit: None,
            drag_history: DragHistory::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.default_position, Point::new(50.0, 50.0));
        assert_eq!(config.default_style.font_size, 16.0);
        assert_eq!(config.default_style.font_style, FontStyle::Normal);
        assert_eq!(config.default_style.color, TextColor::black());
        assert_eq!(config.history_limit, None);
        assert_eq!(config.drag_history, DragHistory::Untracked);
    }

    #[test]
    fn test_from_json_partial() {
        let config = BoardConfig::from_json(
            r##"{ "history_limit": 20, "drag_history": "on_gesture_end",
                  "default_style": { "color": "#ff0000" } }"##,
        )
        .unwrap();
        assert_eq!(config.history_limit, Some(20));
        assert_eq!(config.drag_history, DragHistory::OnGestureEnd);
        assert_eq!(config.default_style.color, TextColor::rgb(255, 0, 0));
        assert_eq!(config.default_style.font_size, 16.0);
        assert_eq!(config.default_position, BoardConfig::DEFAULT_POSITION);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            BoardConfig::from_json(r#"{ "history_limit": 0 }"#),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{ "default_style": { "font_size": -2 } }"#),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{ "default_style": { "font_style": "wavy" } }"#),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(BoardError::Config(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let config = BoardConfig {
            history_limit: Some(5),
            ..BoardConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(BoardConfig::from_json(&json).unwrap(), config);
    }
}

#![forbid(unsafe_code)]

//! Declarative visual configuration.
//!
//! # Role in tilefx
//! Everything a deployment customizes lives in one JSON document: the
//! per-rank tile table (label, background, effect), the board-overlay
//! sequence, and the slide-transition tuning. This crate parses that
//! document once at startup into read-only tables; nothing here runs at
//! frame time.
//!
//! # Failure Modes
//! A document that is not valid JSON (or is missing a required `text`) is
//! a [`ConfigError`]. Everything else degrades: unknown effect names make
//! a tile static, malformed effect parameters fall back to defaults, and
//! out-of-range opacities are clamped. A typo in the config should never
//! take the board down.

pub mod error;
pub mod overlay;
pub mod slide;
pub mod tiles;

pub use error::ConfigError;
pub use overlay::{OverlayEntry, OverlaySequence};
pub use slide::{INERTIA_TIMING_FUNCTION, SlideTuning};
pub use tiles::{TileSpec, TileVisualSpec};

use serde::Deserialize;

/// The whole parsed configuration document.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Per-rank tile styling and effects.
    pub tiles: TileVisualSpec,
    /// The board-overlay sequence.
    pub overlay: OverlaySequence,
    /// Slide-transition tuning for the page layer.
    pub slide: SlideTuning,
}

// The slide keys live inline rather than via `#[serde(flatten)]`: flatten
// buffers every field through serde's content machinery, which cannot
// deserialize the integer rank keys of `tiles` from JSON string keys.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    tiles: ahash::AHashMap<u64, TileSpec>,
    default_text: Option<String>,
    board_overlay: Vec<overlay::RawOverlayEntry>,
    slide_speed: Option<u64>,
    slide_easing: Option<String>,
}

impl VisualConfig {
    /// Parse a configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        let tiles = TileVisualSpec::from_parts(raw.tiles, raw.default_text);
        let overlay = OverlaySequence::from_raw(raw.board_overlay);
        let defaults = SlideTuning::default();
        let slide = SlideTuning {
            speed_ms: raw.slide_speed.unwrap_or(defaults.speed_ms),
            easing: raw.slide_easing.unwrap_or(defaults.easing),
        };
        tracing::info!(
            target: "tilefx.config",
            ranks = tiles.len(),
            overlays = overlay.len(),
            "visual configuration loaded"
        );
        Ok(Self {
            tiles,
            overlay,
            slide,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r##"{
        "tiles": {
            "2": {
                "text": "Stop Thinking",
                "animation": "Flash",
                "animationParams": { "durationOn": 100, "durationOff": 100, "textColor": "alternate" }
            },
            "4": { "text": "Relax", "bgColor": "#334", "animation": "Sparkle" }
        },
        "defaultText": "Deeper",
        "boardOverlay": [
            { "text": "Let Go", "opacity": 0.2 },
            { "text": "Sleep Now" }
        ],
        "slideSpeed": 700,
        "slideEasing": "inertia"
    }"##;

    #[test]
    fn a_full_document_parses() {
        let config = VisualConfig::from_json(DOCUMENT).unwrap();
        assert_eq!(config.tiles.len(), 2);
        assert_eq!(config.tiles.text_for(2), "Stop Thinking");
        assert_eq!(config.tiles.text_for(4096), "Deeper");
        assert_eq!(config.overlay.len(), 2);
        assert_eq!(config.slide.speed_ms, 700);
        assert_eq!(config.slide.timing_function(), INERTIA_TIMING_FUNCTION);
    }

    #[test]
    fn unknown_effect_names_leave_the_tile_static() {
        let config = VisualConfig::from_json(DOCUMENT).unwrap();
        assert!(config.tiles.effect(2).is_some());
        assert!(config.tiles.effect(4).is_none());
        // Background styling survives the unknown effect.
        assert_eq!(
            config.tiles.spec(4).unwrap().bg_color.as_deref(),
            Some("#334")
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = VisualConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_tile_text_is_an_error() {
        let err = VisualConfig::from_json(r#"{ "tiles": { "2": {} } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn an_empty_document_yields_empty_tables() {
        let config = VisualConfig::from_json("{}").unwrap();
        assert_eq!(config.tiles.len(), 0);
        assert!(config.overlay.is_empty());
        assert_eq!(config.slide, SlideTuning::default());
    }
}

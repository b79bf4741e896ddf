#![forbid(unsafe_code)]

//! The per-rank tile table.
//!
//! Each rank (2, 4, 8, ...) maps to a label, optional background styling
//! carried read-only for the external renderer, and an optional effect.
//! Effect names are resolved against the catalog once at load; a rank
//! whose name is not in the catalog renders static, with everything else
//! intact.

use ahash::AHashMap;
use serde::Deserialize;

use tilefx_effects::EffectConfig;

/// Label shown for ranks the table does not cover.
pub const FALLBACK_TEXT: &str = "Deeper";

/// One rank's declarative styling, straight from the document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSpec {
    /// Label displayed on the tile.
    pub text: String,
    /// Background color override for the renderer.
    #[serde(default)]
    pub bg_color: Option<String>,
    /// Background image URL for the renderer's image layer.
    #[serde(default)]
    pub bg_image: Option<String>,
    /// Extra style overrides for the image layer, passed through verbatim.
    #[serde(default)]
    pub bg_image_style: AHashMap<String, String>,
    /// Effect name from the catalog.
    #[serde(default)]
    pub animation: Option<String>,
    /// Raw parameter map forwarded to the effect.
    #[serde(default)]
    pub animation_params: serde_json::Value,
}

struct TileEntry {
    spec: TileSpec,
    effect: Option<EffectConfig>,
}

/// The read-only rank table, effects resolved.
#[derive(Debug, Clone)]
pub struct TileVisualSpec {
    tiles: AHashMap<u64, (TileSpec, Option<EffectConfig>)>,
    default_text: String,
}

impl TileVisualSpec {
    /// Build the table from parsed entries, resolving effect names.
    #[must_use]
    pub fn from_parts(raw: AHashMap<u64, TileSpec>, default_text: Option<String>) -> Self {
        let tiles = raw
            .into_iter()
            .map(|(rank, spec)| {
                let entry = TileEntry::resolve(rank, spec);
                (rank, (entry.spec, entry.effect))
            })
            .collect();
        Self {
            tiles,
            default_text: default_text.unwrap_or_else(|| FALLBACK_TEXT.to_string()),
        }
    }

    /// The label for `rank`, falling back to the default label.
    #[must_use]
    pub fn text_for(&self, rank: u64) -> &str {
        self.tiles
            .get(&rank)
            .map_or(self.default_text.as_str(), |(spec, _)| spec.text.as_str())
    }

    /// The declarative styling for `rank`, if the table covers it.
    #[must_use]
    pub fn spec(&self, rank: u64) -> Option<&TileSpec> {
        self.tiles.get(&rank).map(|(spec, _)| spec)
    }

    /// The resolved effect for `rank`, if it has one.
    #[must_use]
    pub fn effect(&self, rank: u64) -> Option<&EffectConfig> {
        self.tiles.get(&rank).and_then(|(_, effect)| effect.as_ref())
    }

    /// The label used for uncovered ranks.
    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Number of ranks the table covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the table covers no ranks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileEntry {
    fn resolve(rank: u64, spec: TileSpec) -> Self {
        let effect = spec.animation.as_deref().and_then(|name| {
            match EffectConfig::from_raw(name, &spec.animation_params) {
                Ok(config) => Some(config),
                Err(error) => {
                    tracing::warn!(
                        target: "tilefx.config",
                        rank,
                        %error,
                        "tile will render static"
                    );
                    None
                }
            }
        });
        Self { spec, effect }
    }
}

#![forbid(unsafe_code)]

//! The board-overlay sequence.
//!
//! An ordered list of full-board overlays. An external pointer (owned by
//! the grid logic) advances through the list each time the board fills;
//! selection by `None` or past the end hides the overlay.

use serde::Deserialize;

/// Opacity used when an entry does not specify one.
pub const DEFAULT_OVERLAY_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawOverlayEntry {
    text: String,
    #[serde(default)]
    bg_image: Option<String>,
    #[serde(default)]
    opacity: Option<f32>,
}

/// One overlay: a message, an optional background image, and how strongly
/// the overlay darkens the board.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    /// Message shown in the overlay text region.
    pub text: String,
    /// Background image URL for the renderer.
    pub bg_image: Option<String>,
    /// Overlay opacity, clamped to `[0, 1]` at load.
    pub opacity: f32,
}

/// The ordered overlay list.
#[derive(Debug, Clone, Default)]
pub struct OverlaySequence {
    entries: Vec<OverlayEntry>,
}

impl OverlaySequence {
    pub(crate) fn from_raw(raw: Vec<RawOverlayEntry>) -> Self {
        let entries = raw
            .into_iter()
            .map(|entry| OverlayEntry {
                text: entry.text,
                bg_image: entry.bg_image,
                opacity: entry
                    .opacity
                    .unwrap_or(DEFAULT_OVERLAY_OPACITY)
                    .clamp(0.0, 1.0),
            })
            .collect();
        Self { entries }
    }

    /// The entry at `index`; `None` (or an index past the end) selects
    /// nothing, which hides the overlay.
    #[must_use]
    pub fn entry(&self, index: Option<usize>) -> Option<&OverlayEntry> {
        self.entries.get(index?)
    }

    /// The entry for an ever-advancing pointer, wrapping at the end so the
    /// sequence repeats.
    #[must_use]
    pub fn wrapped(&self, pointer: usize) -> Option<&OverlayEntry> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(pointer % self.entries.len())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sequence has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &OverlayEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence() -> OverlaySequence {
        OverlaySequence::from_raw(vec![
            RawOverlayEntry {
                text: "Let Go".to_string(),
                bg_image: None,
                opacity: Some(0.2),
            },
            RawOverlayEntry {
                text: "Sleep Now".to_string(),
                bg_image: Some("https://example.test/bg.gif".to_string()),
                opacity: None,
            },
        ])
    }

    #[test]
    fn missing_opacity_defaults_and_values_clamp() {
        let s = OverlaySequence::from_raw(vec![
            RawOverlayEntry {
                text: "a".to_string(),
                bg_image: None,
                opacity: None,
            },
            RawOverlayEntry {
                text: "b".to_string(),
                bg_image: None,
                opacity: Some(1.7),
            },
        ]);
        assert_eq!(s.entry(Some(0)).unwrap().opacity, DEFAULT_OVERLAY_OPACITY);
        assert_eq!(s.entry(Some(1)).unwrap().opacity, 1.0);
    }

    #[test]
    fn selection_by_none_or_out_of_range_hides() {
        let s = sequence();
        assert!(s.entry(None).is_none());
        assert!(s.entry(Some(2)).is_none());
        assert_eq!(s.entry(Some(1)).unwrap().text, "Sleep Now");
    }

    #[test]
    fn wrapped_pointer_repeats_the_sequence() {
        let s = sequence();
        assert_eq!(s.wrapped(0).unwrap().text, "Let Go");
        assert_eq!(s.wrapped(3).unwrap().text, "Sleep Now");
        assert!(OverlaySequence::default().wrapped(5).is_none());
    }
}

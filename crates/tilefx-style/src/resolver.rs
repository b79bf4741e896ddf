#![forbid(unsafe_code)]

//! Color-mode resolution.
//!
//! Each repeating effect re-resolves its text color at the start of every
//! loop. The resolution is a pure function of the mode and the cycle index
//! (plus the instance RNG for [`ColorMode::Random`]); the caller applies
//! the result to a span only where fields are present.
//!
//! # Invariants
//!
//! 1. `Alternate` output depends solely on `cycle_index % 2`.
//! 2. `Random` pairs the sampled color with the outline variant that
//!    contrasts with its BT.601 luminance.
//! 3. Literal strings pass through byte-for-byte; no validation happens at
//!    this layer (the surface ignores values it cannot parse).

use rand::Rng;

use tilefx_core::Span;

use crate::color::Rgb;

/// Outline used behind light text (dark halo).
pub const DARK_OUTLINE: &str = "0 0 4px #000, 0 1px 3px rgba(0,0,0,0.9)";

/// Outline used behind dark text (light halo).
pub const LIGHT_OUTLINE: &str = "0 0 4px #fff, 0 1px 3px rgba(255,255,255,0.9)";

/// How a tile's effect colors its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorMode {
    /// White-on-dark-outline on even cycles, black-on-light-outline on odd.
    Alternate,
    /// A fresh uniformly random color each cycle, outlined for contrast.
    Random,
    /// A literal surface color string, applied verbatim with no outline.
    Literal(String),
}

impl ColorMode {
    /// Parse a configured color value. Empty or absent values mean "leave
    /// the target's color alone".
    #[must_use]
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value {
            None | Some("") => None,
            Some("alternate") => Some(Self::Alternate),
            Some("random") => Some(Self::Random),
            Some(literal) => Some(Self::Literal(literal.to_string())),
        }
    }

    /// Whether this mode produces a different result per cycle and so needs
    /// re-resolution at every cycle boundary.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self, Self::Alternate | Self::Random)
    }
}

/// A resolved color/outline pair. Produced fresh per query, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedColor {
    /// Text color to apply, if any.
    pub color: Option<String>,
    /// Contrast outline to apply, if any.
    pub outline: Option<String>,
}

impl ResolvedColor {
    /// Apply to a span, touching only the fields that resolved.
    pub fn apply_to(&self, span: &mut dyn Span) {
        if let Some(color) = &self.color {
            span.set_color(color);
        }
        if let Some(outline) = &self.outline {
            span.set_outline(outline);
        }
    }
}

/// Resolve a color mode for one cycle.
///
/// `mode == None` resolves to an empty [`ResolvedColor`]; the caller must
/// not touch the span's color in that case.
pub fn resolve(mode: Option<&ColorMode>, cycle_index: u64, rng: &mut impl Rng) -> ResolvedColor {
    match mode {
        None => ResolvedColor::default(),
        Some(ColorMode::Alternate) => {
            if cycle_index % 2 == 0 {
                ResolvedColor {
                    color: Some("#ffffff".to_string()),
                    outline: Some(DARK_OUTLINE.to_string()),
                }
            } else {
                ResolvedColor {
                    color: Some("#000000".to_string()),
                    outline: Some(LIGHT_OUTLINE.to_string()),
                }
            }
        }
        Some(ColorMode::Random) => {
            let rgb = Rgb::random(rng);
            ResolvedColor {
                color: Some(rgb.css()),
                outline: Some(outline_for(rgb).to_string()),
            }
        }
        Some(ColorMode::Literal(value)) => ResolvedColor {
            color: Some(value.clone()),
            outline: None,
        },
    }
}

/// The outline variant that contrasts with `rgb`.
#[must_use]
pub fn outline_for(rgb: Rgb) -> &'static str {
    if rgb.is_light() {
        DARK_OUTLINE
    } else {
        LIGHT_OUTLINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn absent_mode_resolves_to_nothing() {
        let r = resolve(None, 0, &mut rng());
        assert_eq!(r.color, None);
        assert_eq!(r.outline, None);
    }

    #[test]
    fn parse_maps_known_modes() {
        assert_eq!(ColorMode::parse(None), None);
        assert_eq!(ColorMode::parse(Some("")), None);
        assert_eq!(ColorMode::parse(Some("alternate")), Some(ColorMode::Alternate));
        assert_eq!(ColorMode::parse(Some("random")), Some(ColorMode::Random));
        assert_eq!(
            ColorMode::parse(Some("#ff00aa")),
            Some(ColorMode::Literal("#ff00aa".to_string()))
        );
    }

    #[test]
    fn alternate_depends_only_on_parity() {
        let mode = ColorMode::Alternate;
        for i in 0..16u64 {
            let a = resolve(Some(&mode), i, &mut rng());
            let b = resolve(Some(&mode), i + 2, &mut rng());
            assert_eq!(a.color, b.color, "index {i} vs {}", i + 2);
            assert_eq!(a.outline, b.outline);
        }
        let even = resolve(Some(&mode), 0, &mut rng());
        let odd = resolve(Some(&mode), 1, &mut rng());
        assert_ne!(even.color, odd.color);
        assert_eq!(even.color.as_deref(), Some("#ffffff"));
        assert_eq!(even.outline.as_deref(), Some(DARK_OUTLINE));
        assert_eq!(odd.color.as_deref(), Some("#000000"));
        assert_eq!(odd.outline.as_deref(), Some(LIGHT_OUTLINE));
    }

    #[test]
    fn random_outline_tracks_luminance_over_many_trials() {
        let mut r = rng();
        for _ in 0..1000 {
            let rgb = Rgb::random(&mut r);
            let expected = if rgb.luminance() > 0.5 {
                DARK_OUTLINE
            } else {
                LIGHT_OUTLINE
            };
            assert_eq!(outline_for(rgb), expected);
        }
    }

    #[test]
    fn random_resolution_pairs_color_with_contrast_outline() {
        let mode = ColorMode::Random;
        let mut r = rng();
        for _ in 0..100 {
            let resolved = resolve(Some(&mode), 0, &mut r);
            let color = resolved.color.expect("random always yields a color");
            let outline = resolved.outline.expect("random always yields an outline");
            assert!(color.starts_with("rgb("), "unexpected format: {color}");
            assert!(outline == DARK_OUTLINE || outline == LIGHT_OUTLINE);
        }
    }

    #[test]
    fn literal_passes_through_unvalidated() {
        let mode = ColorMode::Literal("definitely-not-a-color".to_string());
        let r = resolve(Some(&mode), 3, &mut rng());
        assert_eq!(r.color.as_deref(), Some("definitely-not-a-color"));
        assert_eq!(r.outline, None);
    }

    #[test]
    fn apply_to_touches_only_resolved_fields() {
        use tilefx_core::FakeTarget;

        let mut target = FakeTarget::sized(100.0, 100.0);
        ResolvedColor::default().apply_to(&mut target);
        assert_eq!(target.color, None);
        assert_eq!(target.outline, None);

        let r = resolve(Some(&ColorMode::Alternate), 0, &mut rng());
        r.apply_to(&mut target);
        assert_eq!(target.color.as_deref(), Some("#ffffff"));
        assert_eq!(target.outline.as_deref(), Some(DARK_OUTLINE));
    }
}

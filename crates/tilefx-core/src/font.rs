#![forbid(unsafe_code)]

//! Font descriptors at the render boundary.

/// The computed font of a render target, as the surface reports it.
///
/// Carried verbatim to probe measurement so probe text renders with the
/// same metrics as the live label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    /// Font family stack, e.g. `"Clear Sans, sans-serif"`.
    pub family: String,
    /// Font weight, e.g. `"bold"` or `"700"`.
    pub weight: String,
}

impl FontSpec {
    /// Create a new font spec.
    pub fn new(family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("sans-serif", "normal")
    }
}

/// Optional font overrides an effect applies once at start.
///
/// Values are surface-level strings passed through unvalidated; an invalid
/// value is silently ignored by the surface, never an error here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontOverride {
    /// Font size override, e.g. `"18px"`.
    pub size: Option<String>,
    /// Font weight override.
    pub weight: Option<String>,
    /// Font family override.
    pub family: Option<String>,
}

impl FontOverride {
    /// Whether no override is set at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_none() && self.weight.is_none() && self.family.is_none()
    }
}

#![forbid(unsafe_code)]

//! The effect catalog: name resolution and the uniform start entry point.
//!
//! The catalog is closed. Configuration references strategies by their
//! exact names; an unrecognized name is an [`UnknownEffect`] error at load
//! time, and the caller renders that tile static. Malformed parameter
//! maps are not fatal: the strategy's defaults are used and a warning is
//! logged.

use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use serde::de::DeserializeOwned;

use tilefx_core::SharedTarget;

use crate::handle::{EffectHandle, EffectInstance};
use crate::keyframes::KeyframeStore;
use crate::params::{
    AppearFadeParams, FlashParams, RiseFallParams, VibrateParams, WhackamoleParams,
};
use crate::strategies;

// ---------------------------------------------------------------------------
// Catalog names
// ---------------------------------------------------------------------------

/// The closed catalog of named strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Snap opaque, fade out, loop. Optionally word by word.
    AppearFade,
    /// Snap visible at a random anchor, hold, snap away, repeat.
    Whackamole,
    /// Snap on, snap off, repeat. Centered, no movement.
    Flash,
    /// Vertical traversal or oscillation of the text.
    RiseFall,
    /// Rapid small-offset jitter of the text.
    Vibrate,
}

impl EffectKind {
    /// The configuration name of this strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::AppearFade => "Appear_and_fade",
            Self::Whackamole => "Whackamole",
            Self::Flash => "Flash",
            Self::RiseFall => "RiseFall",
            Self::Vibrate => "Vibrate",
        }
    }
}

/// A configuration referenced a strategy name outside the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEffect(pub String);

impl fmt::Display for UnknownEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown effect {:?}", self.0)
    }
}

impl std::error::Error for UnknownEffect {}

impl FromStr for EffectKind {
    type Err = UnknownEffect;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Appear_and_fade" => Ok(Self::AppearFade),
            "Whackamole" => Ok(Self::Whackamole),
            "Flash" => Ok(Self::Flash),
            "RiseFall" => Ok(Self::RiseFall),
            "Vibrate" => Ok(Self::Vibrate),
            other => Err(UnknownEffect(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Configured effects
// ---------------------------------------------------------------------------

/// A strategy paired with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectParams {
    /// Parameters for [`EffectKind::AppearFade`].
    AppearFade(AppearFadeParams),
    /// Parameters for [`EffectKind::Whackamole`].
    Whackamole(WhackamoleParams),
    /// Parameters for [`EffectKind::Flash`].
    Flash(FlashParams),
    /// Parameters for [`EffectKind::RiseFall`].
    RiseFall(RiseFallParams),
    /// Parameters for [`EffectKind::Vibrate`].
    Vibrate(VibrateParams),
}

impl EffectParams {
    /// The strategy these parameters belong to.
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::AppearFade(_) => EffectKind::AppearFade,
            Self::Whackamole(_) => EffectKind::Whackamole,
            Self::Flash(_) => EffectKind::Flash,
            Self::RiseFall(_) => EffectKind::RiseFall,
            Self::Vibrate(_) => EffectKind::Vibrate,
        }
    }
}

/// A fully resolved effect configuration, ready to start on any tile.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    params: EffectParams,
}

impl EffectConfig {
    /// Wrap already-typed parameters.
    #[must_use]
    pub fn new(params: EffectParams) -> Self {
        Self { params }
    }

    /// Resolve a configuration name and raw parameter map.
    ///
    /// An unknown name is an error. A parameter map that does not
    /// deserialize falls back to the strategy's defaults with a warning;
    /// a misspelled duration should not blank the tile.
    pub fn from_raw(name: &str, raw: &serde_json::Value) -> Result<Self, UnknownEffect> {
        let kind: EffectKind = name.parse()?;
        let params = match kind {
            EffectKind::AppearFade => EffectParams::AppearFade(parse_or_default(kind, raw)),
            EffectKind::Whackamole => EffectParams::Whackamole(parse_or_default(kind, raw)),
            EffectKind::Flash => EffectParams::Flash(parse_or_default(kind, raw)),
            EffectKind::RiseFall => EffectParams::RiseFall(parse_or_default(kind, raw)),
            EffectKind::Vibrate => EffectParams::Vibrate(parse_or_default(kind, raw)),
        };
        Ok(Self { params })
    }

    /// The strategy this configuration starts.
    #[must_use]
    pub fn kind(&self) -> EffectKind {
        self.params.kind()
    }

    /// The typed parameters.
    #[must_use]
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Start this effect on `target`, returning the handle that owns the
    /// running instance.
    #[must_use]
    pub fn start(
        &self,
        target: SharedTarget,
        store: &KeyframeStore,
        rng: SmallRng,
        now_ms: u64,
    ) -> EffectHandle {
        tracing::debug!(
            target: "tilefx.effect",
            effect = self.kind().name(),
            "effect started"
        );
        let instance: Box<dyn EffectInstance> = match &self.params {
            EffectParams::AppearFade(p) => {
                strategies::appear_fade::start(target, p.clone(), store, rng, now_ms)
            }
            EffectParams::Whackamole(p) => {
                strategies::whackamole::start(target, p.clone(), rng, now_ms)
            }
            EffectParams::Flash(p) => strategies::flash::start(target, p.clone(), rng, now_ms),
            EffectParams::RiseFall(p) => {
                strategies::rise_fall::start(target, p.clone(), rng, now_ms)
            }
            EffectParams::Vibrate(p) => {
                strategies::vibrate::start(target, p.clone(), store, rng, now_ms)
            }
        };
        EffectHandle::new(instance)
    }
}

impl From<EffectParams> for EffectConfig {
    fn from(params: EffectParams) -> Self {
        Self::new(params)
    }
}

fn parse_or_default<P>(kind: EffectKind, raw: &serde_json::Value) -> P
where
    P: DeserializeOwned + Default,
{
    if raw.is_null() {
        return P::default();
    }
    match serde_json::from_value(raw.clone()) {
        Ok(params) => params,
        Err(error) => {
            tracing::warn!(
                target: "tilefx.effect",
                effect = kind.name(),
                %error,
                "malformed effect parameters, using defaults"
            );
            P::default()
        }
    }
}

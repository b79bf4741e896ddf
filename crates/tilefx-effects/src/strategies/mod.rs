#![forbid(unsafe_code)]

//! The closed strategy catalog.
//!
//! One module per named effect. Each exposes a `start` constructor that
//! applies the instant start-of-effect styling and returns a boxed
//! [`EffectInstance`](crate::EffectInstance) for the handle to own.

pub mod appear_fade;
pub mod flash;
pub mod rise_fall;
pub mod vibrate;
pub mod whackamole;

//! Tuned design constants for the card stack effect.
//!
//! These are visual-parity values, not physical ones. Changing any of them
//! changes how the stack looks; override them through
//! [`TransformTuning`](crate::TransformTuning) instead of editing here.

/// Horizontal travel of the active card, in percent of its own width, per
/// card-width of scroll.
pub const ACTIVE_TRANSLATE_X: f64 = 128.0;

/// Base horizontal fan-out of non-active cards, in percent of card width.
pub const FAN_OUT_X: f64 = 10.0;

/// Divisor applied to `|card progress| / card_count` before it attenuates
/// the fan-out.
pub const FAN_OUT_ATTENUATION: f64 = 4.0;

/// Depth of a centered card, in px.
pub const TRANSLATE_Z_BASE: f64 = 200.0;

/// Depth lost per card-width of distance from center, in px.
pub const TRANSLATE_Z_FALLOFF: f64 = 40.0;

/// Peak Y rotation of neighbouring cards mid-transition, in degrees.
pub const ROTATE_Y_MAX: f64 = 75.0;

/// Peak Y rotation of the active card mid-transition, in degrees.
pub const ACTIVE_ROTATE_Y_MAX: f64 = 90.0;

/// Z roll per card-width of distance from center, in degrees.
pub const ROTATE_Z_PER_CARD: f64 = 2.0;

/// Scale lost per card-width of distance from center.
pub const SCALE_FALLOFF: f64 = 0.05;

/// Additional peak scale loss of the active card mid-transition.
pub const ACTIVE_SCALE_DIP: f64 = 0.25;

/// Cards further than this many card-widths from center are transparent.
pub const MAX_CARDS_ON_ONE_SIDE: f64 = 5.0;

/// Fixed centering offset folded into translateX/translateY, in percent.
pub const CENTERING_OFFSET: f64 = -50.0;

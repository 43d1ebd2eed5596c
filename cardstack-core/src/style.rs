//! Rendering visual parameters into CSS-ready style values.

use std::fmt;

use crate::constants::CENTERING_OFFSET;
use crate::transform::VisualParameters;

/// CSS number formatter: shortest round-trip decimal, no trailing `.0`,
/// and `-0` printed as `0`.
#[derive(Debug, Clone, Copy)]
pub struct CssNumber(pub f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding +0.0 folds -0.0 into 0.0.
        write!(f, "{}", self.0 + 0.0)
    }
}

/// The combined transform applied to one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Percent, centering offset already applied.
    pub translate_x: f64,
    /// Percent.
    pub translate_y: f64,
    /// Px.
    pub translate_z: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// Degrees.
    pub rotate_z: f64,
    pub scale: f64,
}

impl From<&VisualParameters> for CardTransform {
    fn from(params: &VisualParameters) -> Self {
        Self {
            translate_x: params.translate_x + CENTERING_OFFSET,
            translate_y: CENTERING_OFFSET,
            translate_z: params.translate_z,
            rotate_y: params.rotate_y,
            rotate_z: params.rotate_z,
            scale: params.scale,
        }
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translateX({}%) translateY({}%) translateZ({}px) rotateY({}deg) rotateZ({}deg) scale({})",
            CssNumber(self.translate_x),
            CssNumber(self.translate_y),
            CssNumber(self.translate_z),
            CssNumber(self.rotate_y),
            CssNumber(self.rotate_z),
            CssNumber(self.scale),
        )
    }
}

/// Everything written to a card's visual target in one update.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardStyle {
    /// CSS `transform` value.
    pub transform: String,
    /// CSS `z-index` value.
    pub z_index: i64,
    /// CSS `opacity` value.
    pub opacity: f64,
}

impl From<&VisualParameters> for CardStyle {
    fn from(params: &VisualParameters) -> Self {
        Self {
            transform: CardTransform::from(params).to_string(),
            z_index: params.z_index,
            opacity: params.opacity,
        }
    }
}

impl CardStyle {
    /// Render as an inline `style` attribute body.
    pub fn to_inline(&self) -> String {
        format!(
            "transform: {}; z-index: {}; opacity: {}",
            self.transform,
            self.z_index,
            CssNumber(self.opacity)
        )
    }
}

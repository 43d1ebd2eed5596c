//! Overridable copy of the tuned design constants.

use crate::constants;

/// The coefficients the per-card transform math is built from.
///
/// `Default` reproduces the reference look exactly. Hosts that want a
/// different feel (a wider fan, a shallower rotation) override individual
/// fields; the shape of every formula stays the same.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformTuning {
    /// Percent of card width the active card travels per card-width scrolled.
    pub active_translate_x: f64,
    /// Percent of card width neighbours fan out per card-width from center.
    pub fan_out_x: f64,
    /// Divisor on `|card progress| / card_count` shrinking the fan-out.
    pub fan_out_attenuation: f64,
    /// Depth of a centered card in px.
    pub translate_z_base: f64,
    /// Depth lost per card-width from center in px.
    pub translate_z_falloff: f64,
    /// Peak mid-transition Y rotation of neighbours in degrees.
    pub rotate_y_max: f64,
    /// Peak mid-transition Y rotation of the active card in degrees.
    pub active_rotate_y_max: f64,
    /// Z roll per card-width from center in degrees.
    pub rotate_z_per_card: f64,
    /// Scale lost per card-width from center.
    pub scale_falloff: f64,
    /// Extra peak scale loss of the active card mid-transition.
    pub active_scale_dip: f64,
    /// Card-widths from center after which a card is fully transparent.
    pub max_cards_on_one_side: f64,
}

impl Default for TransformTuning {
    fn default() -> Self {
        Self {
            active_translate_x: constants::ACTIVE_TRANSLATE_X,
            fan_out_x: constants::FAN_OUT_X,
            fan_out_attenuation: constants::FAN_OUT_ATTENUATION,
            translate_z_base: constants::TRANSLATE_Z_BASE,
            translate_z_falloff: constants::TRANSLATE_Z_FALLOFF,
            rotate_y_max: constants::ROTATE_Y_MAX,
            active_rotate_y_max: constants::ACTIVE_ROTATE_Y_MAX,
            rotate_z_per_card: constants::ROTATE_Z_PER_CARD,
            scale_falloff: constants::SCALE_FALLOFF,
            active_scale_dip: constants::ACTIVE_SCALE_DIP,
            max_cards_on_one_side: constants::MAX_CARDS_ON_ONE_SIDE,
        }
    }
}

impl TransformTuning {
    /// Every coefficient paired with its field name, in declaration order.
    ///
    /// Used by configuration guard rails to report the offending field.
    pub fn named_fields(&self) -> [(&'static str, f64); 11] {
        [
            ("active_translate_x", self.active_translate_x),
            ("fan_out_x", self.fan_out_x),
            ("fan_out_attenuation", self.fan_out_attenuation),
            ("translate_z_base", self.translate_z_base),
            ("translate_z_falloff", self.translate_z_falloff),
            ("rotate_y_max", self.rotate_y_max),
            ("active_rotate_y_max", self.active_rotate_y_max),
            ("rotate_z_per_card", self.rotate_z_per_card),
            ("scale_falloff", self.scale_falloff),
            ("active_scale_dip", self.active_scale_dip),
            ("max_cards_on_one_side", self.max_cards_on_one_side),
        ]
    }
}

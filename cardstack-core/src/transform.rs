//! Per-card transform math.
//!
//! Everything here is a pure function of the scroll state, the card's index
//! and the card count. Nothing is cached between frames; a card's look is
//! recomputed from scratch on every scroll event.

use crate::scroll::{ScrollState, relative_step};
use crate::tuning::TransformTuning;

/// Sign of `x` with `sign(±0) == 0`, unlike [`f64::signum`].
#[inline]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Quantities derived from the scroll state for one card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOffsets {
    /// Progress span of one card.
    pub relative_step: f64,
    /// Signed distance of this card from center, in card-widths.
    pub card_scroll_progress: f64,
    pub abs_card_scroll_progress: f64,
    /// Signed offset of the active card from fully centered; how far into a
    /// transition between two active indices the view is.
    pub active_card_scroll_progress: f64,
    pub abs_active_card_scroll_progress: f64,
}

impl CardOffsets {
    pub fn new(state: &ScrollState, index: usize, card_count: usize) -> Self {
        let relative_step = relative_step(card_count);
        let card_scroll_start = relative_step * index as f64;
        let card_scroll_progress =
            (state.progress - card_scroll_start) / relative_step;
        let active_card_scroll_progress =
            state.progress / relative_step - state.active_index as f64;

        Self {
            relative_step,
            card_scroll_progress,
            abs_card_scroll_progress: card_scroll_progress.abs(),
            active_card_scroll_progress,
            abs_active_card_scroll_progress: active_card_scroll_progress.abs(),
        }
    }
}

/// The complete visual state of one card for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisualParameters {
    /// Horizontal offset in percent of card width, before centering.
    pub translate_x: f64,
    /// Depth in px.
    pub translate_z: f64,
    /// Degrees.
    pub rotate_y: f64,
    /// Degrees.
    pub rotate_z: f64,
    /// Never negative.
    pub scale: f64,
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Stacking order, higher draws on top.
    pub z_index: i64,
}

/// Compute a card's visual parameters with the reference tuning.
pub fn compute_visual_parameters(
    state: &ScrollState,
    index: usize,
    card_count: usize,
) -> VisualParameters {
    TransformTuning::default().compute(state, index, card_count)
}

impl TransformTuning {
    /// Compute a card's visual parameters for the given scroll state.
    pub fn compute(
        &self,
        state: &ScrollState,
        index: usize,
        card_count: usize,
    ) -> VisualParameters {
        let offsets = CardOffsets::new(state, index, card_count);
        let is_active = state.active_index == index;

        VisualParameters {
            translate_x: self.translate_x(&offsets, is_active, card_count),
            translate_z: self.translate_z_base
                - offsets.abs_card_scroll_progress * self.translate_z_falloff,
            rotate_y: self.rotate_y(&offsets, state, index, card_count),
            rotate_z: offsets.card_scroll_progress * -self.rotate_z_per_card,
            scale: self.scale(&offsets, is_active),
            opacity: (self.max_cards_on_one_side
                - offsets.abs_card_scroll_progress)
                .clamp(0.0, 1.0),
            z_index: z_index(&offsets, state, index, card_count),
        }
    }

    fn fan_out(&self, abs_progress: f64, card_count: usize) -> f64 {
        -((1.0 - abs_progress / card_count as f64 / self.fan_out_attenuation)
            * self.fan_out_x)
    }

    fn translate_x(
        &self,
        offsets: &CardOffsets,
        is_active: bool,
        card_count: usize,
    ) -> f64 {
        let c = offsets.card_scroll_progress;
        let abs_c = offsets.abs_card_scroll_progress;

        if !is_active {
            return c * self.fan_out(abs_c, card_count);
        }

        if abs_c < 0.5 {
            -self.active_translate_x * c
        } else {
            // Past the midpoint the outgoing active card hands off into the
            // resting spot of a neighbour instead of stopping centered.
            let direction = sign(c);
            let mut translate_x = -self.active_translate_x * direction;
            translate_x += self.active_translate_x * c;
            translate_x += self.fan_out(abs_c, card_count)
                * (abs_c - 0.5)
                * 2.0
                * direction;
            translate_x
        }
    }

    fn rotate_y(
        &self,
        offsets: &CardOffsets,
        state: &ScrollState,
        index: usize,
        card_count: usize,
    ) -> f64 {
        let mut rotate_y =
            triangle(offsets.abs_active_card_scroll_progress) * -self.rotate_y_max;

        if index == state.active_index {
            rotate_y = triangle(offsets.abs_card_scroll_progress)
                * -self.active_rotate_y_max;
        }

        let distance = state.active_index.abs_diff(index) as f64;
        rotate_y
            * sign(offsets.active_card_scroll_progress)
            * (1.0 - distance / card_count as f64)
    }

    fn scale(&self, offsets: &CardOffsets, is_active: bool) -> f64 {
        let abs_c = offsets.abs_card_scroll_progress;
        let mut scale = 1.0 - abs_c * self.scale_falloff;
        if is_active {
            scale -= triangle(abs_c) * self.active_scale_dip;
        }
        scale.max(0.0)
    }
}

/// Rises linearly to 0.5 at the midpoint, then falls back to 0 at one
/// card-width.
#[inline]
fn triangle(abs_progress: f64) -> f64 {
    if abs_progress < 0.5 {
        abs_progress
    } else {
        1.0 - abs_progress
    }
}

fn z_index(
    offsets: &CardOffsets,
    state: &ScrollState,
    index: usize,
    card_count: usize,
) -> i64 {
    let active = state.active_index;
    let distance = active.abs_diff(index) as i64;
    let mut z_index = card_count as i64 - distance;

    // Cards at equal distance would tie; lift the side being swept over so
    // it draws on top for the direction of travel.
    let a = offsets.active_card_scroll_progress;
    let direction = sign(a);
    if direction == -1.0 && index < active {
        z_index += 1;
        if a < -0.5 {
            z_index += 1;
        }
    }
    if direction == 1.0 {
        if index == active {
            z_index += 1;
        }
        if index > active {
            z_index += 1;
            if a > 0.5 {
                z_index += 1;
            }
        }
    }

    z_index
}

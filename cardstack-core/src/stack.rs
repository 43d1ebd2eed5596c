//! Scroll coordinator owning the scroll state and every card slot.

use tracing::{debug, trace};

use crate::error::{CardStackError, Result};
use crate::scroll::{
    ActiveIndexChange, ScrollMetrics, ScrollState, normalize_progress,
};
use crate::style::CardTransform;
use crate::target::VisualTarget;
use crate::transform::VisualParameters;
use crate::tuning::TransformTuning;

/// One fixed position in the stack bound to its visual target.
#[derive(Debug)]
pub struct CardSlot<T> {
    index: usize,
    target: T,
}

impl<T: VisualTarget> CardSlot<T> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    fn apply(&mut self, params: &VisualParameters) {
        self.target.set_transform(&CardTransform::from(params));
        self.target.set_z_index(params.z_index);
        self.target.set_opacity(params.opacity);
    }
}

/// The card stack carousel.
///
/// Owns the [`ScrollState`] and an ordered, fixed set of [`CardSlot`]s.
/// Every scroll signal updates the state, moves the active index by at most
/// one card, and rewrites every card's visual target.
#[derive(Debug)]
pub struct CardStack<T> {
    state: ScrollState,
    slots: Vec<CardSlot<T>>,
    tuning: TransformTuning,
}

impl<T: VisualTarget> CardStack<T> {
    /// Build a stack over `targets` in iteration order with reference tuning.
    ///
    /// Targets are styled for the initial state before this returns.
    pub fn new(targets: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::with_tuning(targets, TransformTuning::default())
    }

    pub fn with_tuning(
        targets: impl IntoIterator<Item = T>,
        tuning: TransformTuning,
    ) -> Result<Self> {
        let slots: Vec<CardSlot<T>> = targets
            .into_iter()
            .enumerate()
            .map(|(index, target)| CardSlot { index, target })
            .collect();

        if slots.is_empty() {
            return Err(CardStackError::Empty);
        }

        let mut stack = Self {
            state: ScrollState::default(),
            slots,
            tuning,
        };
        debug!(card_count = stack.card_count(), "card stack initialized");
        stack.broadcast();
        Ok(stack)
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn card_count(&self) -> usize {
        self.slots.len()
    }

    pub fn tuning(&self) -> &TransformTuning {
        &self.tuning
    }

    pub fn slots(&self) -> &[CardSlot<T>] {
        &self.slots
    }

    pub fn targets(&self) -> impl ExactSizeIterator<Item = &T> {
        self.slots.iter().map(|slot| &slot.target)
    }

    pub fn into_targets(self) -> Vec<T> {
        self.slots.into_iter().map(|slot| slot.target).collect()
    }

    /// Handle a scroll signal from the host container.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> ScrollState {
        self.set_progress(metrics.progress())
    }

    /// Handle an already-normalized scroll position.
    pub fn set_progress(&mut self, progress: f64) -> ScrollState {
        self.state.progress = normalize_progress(progress);
        trace!(progress = self.state.progress, "scroll");
        self.update_active_index();
        self.broadcast();
        self.state
    }

    /// Step the active index toward the current progress, at most one card.
    pub fn update_active_index(&mut self) -> Option<ActiveIndexChange> {
        let change = self.state.advance_active_index(self.card_count());
        if let Some(change) = change {
            debug!(
                from = change.from,
                to = change.to,
                progress = self.state.progress,
                "active card changed"
            );
        }
        change
    }

    /// Recompute every card from the current state and write it out.
    pub fn broadcast(&mut self) {
        let state = self.state;
        let card_count = self.card_count();
        trace!(
            progress = state.progress,
            active_index = state.active_index,
            card_count,
            "broadcast"
        );
        for slot in &mut self.slots {
            let params = self.tuning.compute(&state, slot.index, card_count);
            slot.apply(&params);
        }
    }

    /// Visual parameters of every card for the current state, without
    /// touching the targets.
    pub fn frame(&self) -> Vec<VisualParameters> {
        let card_count = self.card_count();
        (0..card_count)
            .map(|index| self.tuning.compute(&self.state, index, card_count))
            .collect()
    }
}

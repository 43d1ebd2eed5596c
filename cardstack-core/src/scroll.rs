//! Scroll position normalization and active-card hysteresis.

/// One axis of the host's scroll container, in whatever length unit the host
/// reports (px for a browser).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Current scroll offset from the start of the content.
    pub offset: f64,
    /// Total scrollable content length.
    pub range: f64,
    /// Visible length of the container.
    pub viewport: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, range: f64, viewport: f64) -> Self {
        Self {
            offset,
            range,
            viewport,
        }
    }

    /// Maximum offset the container can reach.
    pub fn max_offset(&self) -> f64 {
        (self.range - self.viewport).max(0.0)
    }

    /// Normalized scroll position in `[0, 1]`.
    ///
    /// Content that fits without scrolling (or reports nonsense) sits at 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.range - self.viewport;
        if !scrollable.is_finite() || scrollable <= 0.0 {
            return 0.0;
        }
        normalize_progress(self.offset / scrollable)
    }
}

/// Clamp a raw progress value into `[0, 1]`, mapping non-finite input to 0.
pub fn normalize_progress(raw: f64) -> f64 {
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Fraction of total progress one card occupies.
///
/// A single card gets the whole range so the per-card math never divides by
/// zero.
#[inline]
pub fn relative_step(card_count: usize) -> f64 {
    if card_count > 1 {
        1.0 / (card_count - 1) as f64
    } else {
        1.0
    }
}

/// Direction of an active index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Backward,
    Forward,
}

/// Record of one active index transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveIndexChange {
    pub from: usize,
    pub to: usize,
    pub direction: StepDirection,
}

/// Global scroll state shared read-only with every card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    /// Normalized scroll position in `[0, 1]`.
    pub progress: f64,
    /// Index of the card currently considered centered.
    pub active_index: usize,
}

impl ScrollState {
    pub fn new(progress: f64, active_index: usize) -> Self {
        Self {
            progress,
            active_index,
        }
    }

    /// Move the active index by at most one card toward `progress`.
    ///
    /// The index only changes once progress reaches the point where the
    /// neighbour itself is fully centered (`step * (active ± 1)`), so small
    /// jitter around a boundary never flips it back and forth. Boundaries
    /// are inclusive.
    pub fn advance_active_index(
        &mut self,
        card_count: usize,
    ) -> Option<ActiveIndexChange> {
        if card_count <= 1 {
            self.active_index = 0;
            return None;
        }

        let step = 1.0 / (card_count - 1) as f64;
        let active = self.active_index as f64;
        let previous_snap_point = step * (active - 1.0);
        let next_snap_point = step * (active + 1.0);

        let from = self.active_index;
        if self.progress <= previous_snap_point && self.active_index > 0 {
            self.active_index -= 1;
            Some(ActiveIndexChange {
                from,
                to: self.active_index,
                direction: StepDirection::Backward,
            })
        } else if self.progress >= next_snap_point
            && self.active_index < card_count - 1
        {
            self.active_index += 1;
            Some(ActiveIndexChange {
                from,
                to: self.active_index,
                direction: StepDirection::Forward,
            })
        } else {
            None
        }
    }
}

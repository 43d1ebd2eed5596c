//! Scripted scroll sessions against an in-memory card stack.

use anyhow::{Result, bail};
use cardstack_config::CardStackConfig;
use cardstack_core::{
    CardStack, CardStyle, RecordedStyle, ScrollState, TransformTuning,
    VisualParameters,
};
use serde::Serialize;

/// What one card looked like after one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardReport {
    pub index: usize,
    pub style: CardStyle,
    pub params: VisualParameters,
}

/// The stack after one scroll event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameReport {
    pub step: usize,
    /// Scroll offset that produced this frame; `None` for computed frames.
    pub offset: Option<f64>,
    pub state: ScrollState,
    pub cards: Vec<CardReport>,
}

/// Scroll offsets visiting `0..=max_offset` in `steps` equal increments,
/// and back down again when `reverse` is set.
pub fn sweep_offsets(max_offset: f64, steps: usize, reverse: bool) -> Vec<f64> {
    let steps = steps.max(1);
    let forward = (0..=steps).map(|i| max_offset * i as f64 / steps as f64);
    let mut offsets: Vec<f64> = forward.collect();
    if reverse {
        let back: Vec<f64> = offsets.iter().rev().skip(1).copied().collect();
        offsets.extend(back);
    }
    offsets
}

/// Run a scroll session over the configured geometry.
///
/// The first report is the stack as constructed, before any scroll event.
pub fn run_sweep(
    config: &CardStackConfig,
    steps: usize,
    reverse: bool,
) -> Result<Vec<FrameReport>> {
    let geometry = config.geometry;
    let mut stack = CardStack::with_tuning(
        (0..geometry.card_count).map(|_| RecordedStyle::new()),
        config.tuning,
    )?;

    let mut reports = vec![report(&stack, 0, None)];
    for (i, offset) in sweep_offsets(geometry.max_offset(), steps, reverse)
        .into_iter()
        .enumerate()
    {
        stack.on_scroll(geometry.metrics_at(offset));
        reports.push(report(&stack, i + 1, Some(offset)));
    }
    Ok(reports)
}

fn report(
    stack: &CardStack<RecordedStyle>,
    step: usize,
    offset: Option<f64>,
) -> FrameReport {
    let cards = stack
        .slots()
        .iter()
        .zip(stack.frame())
        .map(|(slot, params)| CardReport {
            index: slot.index(),
            style: slot
                .target()
                .style()
                .cloned()
                .unwrap_or_else(|| CardStyle::from(&params)),
            params,
        })
        .collect();

    FrameReport {
        step,
        offset,
        state: stack.state(),
        cards,
    }
}

/// Compute a single frame for an arbitrary state without replaying scroll
/// history.
pub fn single_frame(
    tuning: &TransformTuning,
    state: ScrollState,
    card_count: usize,
) -> Result<FrameReport> {
    if card_count == 0 {
        bail!("card count must be at least 1");
    }
    if state.active_index >= card_count {
        bail!(
            "active index {} is outside 0..{}",
            state.active_index,
            card_count
        );
    }
    if !(0.0..=1.0).contains(&state.progress) {
        bail!("progress {} is outside [0, 1]", state.progress);
    }

    let cards = (0..card_count)
        .map(|index| {
            let params = tuning.compute(&state, index, card_count);
            CardReport {
                index,
                style: CardStyle::from(&params),
                params,
            }
        })
        .collect();

    Ok(FrameReport {
        step: 0,
        offset: None,
        state,
        cards,
    })
}

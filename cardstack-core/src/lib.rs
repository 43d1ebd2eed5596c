//! Scroll-driven 3D card stack carousel.
//!
//! A single scalar scroll position is re-projected into per-card transform
//! parameters (translation, rotation, scale, opacity, stacking order) on
//! every scroll event. [`CardStack`] owns the scroll state and the card
//! slots; [`compute_visual_parameters`] is the pure per-card math and can be
//! used on its own without any rendering surface.
#![allow(missing_docs)]

pub mod constants;
pub mod error;
pub mod scroll;
pub mod stack;
pub mod style;
pub mod target;
pub mod transform;
pub mod tuning;

pub use error::{CardStackError, Result as CardStackResult};
pub use scroll::{
    ActiveIndexChange, ScrollMetrics, ScrollState, StepDirection,
    normalize_progress, relative_step,
};
pub use stack::{CardSlot, CardStack};
pub use style::{CardStyle, CardTransform, CssNumber};
pub use target::{RecordedStyle, VisualTarget};
pub use transform::{CardOffsets, VisualParameters, compute_visual_parameters};
pub use tuning::TransformTuning;

//! The seam between the transform math and whatever draws the cards.

use crate::style::{CardStyle, CardTransform};

/// A renderable card that accepts transform, stacking order and opacity.
///
/// Implemented by the host for its real surface (a DOM element, a widget, a
/// scene node). The three setters are called together once per update.
pub trait VisualTarget {
    fn set_transform(&mut self, transform: &CardTransform);
    fn set_z_index(&mut self, z_index: i64);
    fn set_opacity(&mut self, opacity: f64);
}

impl<T: VisualTarget + ?Sized> VisualTarget for &mut T {
    fn set_transform(&mut self, transform: &CardTransform) {
        (**self).set_transform(transform);
    }

    fn set_z_index(&mut self, z_index: i64) {
        (**self).set_z_index(z_index);
    }

    fn set_opacity(&mut self, opacity: f64) {
        (**self).set_opacity(opacity);
    }
}

impl<T: VisualTarget + ?Sized> VisualTarget for Box<T> {
    fn set_transform(&mut self, transform: &CardTransform) {
        (**self).set_transform(transform);
    }

    fn set_z_index(&mut self, z_index: i64) {
        (**self).set_z_index(z_index);
    }

    fn set_opacity(&mut self, opacity: f64) {
        (**self).set_opacity(opacity);
    }
}

/// In-memory target that keeps the last applied style.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedStyle {
    style: Option<CardStyle>,
    transform: Option<CardTransform>,
    updates: usize,
}

impl RecordedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last applied style, `None` before the first update.
    pub fn style(&self) -> Option<&CardStyle> {
        self.style.as_ref()
    }

    /// Last applied transform in structured form.
    pub fn transform(&self) -> Option<&CardTransform> {
        self.transform.as_ref()
    }

    /// Number of transforms written so far.
    pub fn updates(&self) -> usize {
        self.updates
    }

    fn style_mut(&mut self) -> &mut CardStyle {
        self.style.get_or_insert_with(|| CardStyle {
            transform: String::new(),
            z_index: 0,
            opacity: 1.0,
        })
    }
}

impl VisualTarget for RecordedStyle {
    fn set_transform(&mut self, transform: &CardTransform) {
        self.updates += 1;
        self.transform = Some(*transform);
        self.style_mut().transform = transform.to_string();
    }

    fn set_z_index(&mut self, z_index: i64) {
        self.style_mut().z_index = z_index;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.style_mut().opacity = opacity;
    }
}

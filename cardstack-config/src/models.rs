use cardstack_core::{ScrollMetrics, TransformTuning};
use serde::{Deserialize, Serialize};

use std::path::PathBuf;

/// Source that produced the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Shape of the scroll container the stack is laid out in.
///
/// The host normally reports these live; the configured values seed
/// simulations and previews.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrollGeometry {
    /// Number of card slots. Fixed for the session.
    pub card_count: usize,
    /// Visible length of the scroll container along the scroll axis.
    pub viewport_size: f64,
    /// Scroll length contributed by each card. Total scroll range is
    /// `card_count * card_extent`.
    pub card_extent: f64,
}

impl Default for ScrollGeometry {
    fn default() -> Self {
        Self {
            card_count: 5,
            viewport_size: 1000.0,
            card_extent: 1000.0,
        }
    }
}

impl ScrollGeometry {
    pub fn scroll_range(&self) -> f64 {
        self.card_count as f64 * self.card_extent
    }

    /// Largest offset the container can scroll to.
    pub fn max_offset(&self) -> f64 {
        (self.scroll_range() - self.viewport_size).max(0.0)
    }

    pub fn metrics_at(&self, offset: f64) -> ScrollMetrics {
        ScrollMetrics::new(offset, self.scroll_range(), self.viewport_size)
    }
}

/// Everything needed to stand up a card stack.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CardStackConfig {
    pub geometry: ScrollGeometry,
    pub tuning: TransformTuning,
}

/// A loaded configuration and where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: CardStackConfig,
    pub source: ConfigSource,
    pub warnings: crate::validation::ConfigWarnings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_derives_scroll_range() {
        let geometry = ScrollGeometry {
            card_count: 4,
            viewport_size: 500.0,
            card_extent: 250.0,
        };
        assert_eq!(geometry.scroll_range(), 1000.0);
        assert_eq!(geometry.max_offset(), 500.0);
        assert_eq!(geometry.metrics_at(250.0).progress(), 0.5);
    }

    #[test]
    fn geometry_that_fits_never_scrolls() {
        let geometry = ScrollGeometry {
            card_count: 1,
            ..ScrollGeometry::default()
        };
        assert_eq!(geometry.max_offset(), 0.0);
        assert_eq!(geometry.metrics_at(300.0).progress(), 0.0);
    }
}

use thiserror::Error;

use super::models::CardStackConfig;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigGuardRailError {
    #[error("card_count must be at least 1")]
    NoCards,
    #[error("viewport_size must be a positive finite length, got {value}")]
    InvalidViewport { value: f64 },
    #[error("card_extent must be a positive finite length, got {value}")]
    InvalidCardExtent { value: f64 },
    #[error("tuning.{field} must be finite, got {value}")]
    NonFiniteTuning { field: &'static str, value: f64 },
    #[error("tuning.fan_out_attenuation must be positive, got {value}")]
    InvalidAttenuation { value: f64 },
}

#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

pub fn apply_guard_rails(
    config: &CardStackConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();
    let geometry = &config.geometry;

    if geometry.card_count == 0 {
        return Err(ConfigGuardRailError::NoCards);
    }
    if !geometry.viewport_size.is_finite() || geometry.viewport_size <= 0.0 {
        return Err(ConfigGuardRailError::InvalidViewport {
            value: geometry.viewport_size,
        });
    }
    if !geometry.card_extent.is_finite() || geometry.card_extent <= 0.0 {
        return Err(ConfigGuardRailError::InvalidCardExtent {
            value: geometry.card_extent,
        });
    }

    // Content that fits the viewport is valid; progress just stays at 0.
    let range = geometry.scroll_range();
    if range <= geometry.viewport_size {
        warnings.push_with_hint(
            format!(
                "scroll range {range} does not exceed the viewport {}; the stack will never move",
                geometry.viewport_size
            ),
            "increase card_count or card_extent",
        );
    }
    if geometry.card_count == 1 {
        warnings.push("a single card has no neighbours to transition to");
    }

    for (field, value) in config.tuning.named_fields() {
        if !value.is_finite() {
            return Err(ConfigGuardRailError::NonFiniteTuning { field, value });
        }
    }
    if config.tuning.fan_out_attenuation <= 0.0 {
        return Err(ConfigGuardRailError::InvalidAttenuation {
            value: config.tuning.fan_out_attenuation,
        });
    }
    if config.tuning.max_cards_on_one_side < 1.0 {
        warnings.push_with_hint(
            "max_cards_on_one_side below 1 hides every card except the centered one",
            "the reference look uses 5",
        );
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScrollGeometry;
    use cardstack_core::TransformTuning;

    fn config(geometry: ScrollGeometry) -> CardStackConfig {
        CardStackConfig {
            geometry,
            ..CardStackConfig::default()
        }
    }

    #[test]
    fn defaults_pass_cleanly() {
        let warnings =
            apply_guard_rails(&CardStackConfig::default()).expect("valid");
        assert!(warnings.is_empty());
    }

    #[test]
    fn zero_cards_rejected() {
        let err = apply_guard_rails(&config(ScrollGeometry {
            card_count: 0,
            ..ScrollGeometry::default()
        }))
        .unwrap_err();
        assert_eq!(err, ConfigGuardRailError::NoCards);
    }

    #[test]
    fn viewport_must_be_positive() {
        let err = apply_guard_rails(&config(ScrollGeometry {
            viewport_size: 0.0,
            ..ScrollGeometry::default()
        }))
        .unwrap_err();
        assert!(matches!(err, ConfigGuardRailError::InvalidViewport { .. }));
    }

    #[test]
    fn range_shorter_than_viewport_warns() {
        let warnings = apply_guard_rails(&config(ScrollGeometry {
            card_count: 2,
            viewport_size: 900.0,
            card_extent: 400.0,
        }))
        .expect("content that fits is valid");
        assert_eq!(warnings.len(), 1);
        assert!(warnings.items[0].message.contains("will never move"));
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn single_card_filling_viewport_warns() {
        let warnings = apply_guard_rails(&config(ScrollGeometry {
            card_count: 1,
            viewport_size: 1000.0,
            card_extent: 1000.0,
        }))
        .expect("degenerate but valid");
        assert_eq!(warnings.len(), 2);
        assert!(warnings.items[0].hint.is_some());
    }

    #[test]
    fn non_finite_tuning_names_field() {
        let cfg = CardStackConfig {
            tuning: TransformTuning {
                rotate_y_max: f64::NAN,
                ..TransformTuning::default()
            },
            ..CardStackConfig::default()
        };
        match apply_guard_rails(&cfg) {
            Err(ConfigGuardRailError::NonFiniteTuning { field, .. }) => {
                assert_eq!(field, "rotate_y_max")
            }
            other => panic!("expected tuning error, got {other:?}"),
        }
    }

    #[test]
    fn zero_attenuation_rejected() {
        let cfg = CardStackConfig {
            tuning: TransformTuning {
                fan_out_attenuation: 0.0,
                ..TransformTuning::default()
            },
            ..CardStackConfig::default()
        };
        assert_eq!(
            apply_guard_rails(&cfg).unwrap_err(),
            ConfigGuardRailError::InvalidAttenuation { value: 0.0 }
        );
    }
}

//! Construction-time slider configuration

use super::geometry::{SliderRange, ValueDomain};
use thiserror::Error;

/// Rejected slider configuration. Raised only while building a slider;
/// drag input is clamped instead.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SliderConfigError {
    #[error("domain bounds must be finite (min {min}, max {max})")]
    NonFiniteDomain { min: f32, max: f32 },
    #[error("domain must be strictly increasing, got min {min} >= max {max}")]
    EmptyDomain { min: f32, max: f32 },
    #[error("initial range {start}..={end} is reversed")]
    ReversedRange { start: f32, end: f32 },
    #[error("initial range {start}..={end} lies outside domain {min}..={max}")]
    RangeOutsideDomain {
        start: f32,
        end: f32,
        min: f32,
        max: f32,
    },
}

/// Behaviour-bearing slider parameters. Visuals live in
/// [`SliderStyle`](super::widget::SliderStyle).
#[derive(Debug, Clone)]
pub struct SliderConfig {
    pub domain: ValueDomain,
    /// Number of interior stops; 0 means continuous.
    pub steps: u32,
    /// One thumb driving `end`; the reported range is `min..=value`.
    pub single_thumb: bool,
    pub label_prefix: String,
    pub formatter: fn(f32) -> String,
}

impl SliderConfig {
    pub fn new(domain: ValueDomain) -> Self {
        Self {
            domain,
            steps: 0,
            single_thumb: false,
            label_prefix: String::new(),
            formatter: default_formatter,
        }
    }

    pub fn steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn single_thumb(mut self, single_thumb: bool) -> Self {
        self.single_thumb = single_thumb;
        self
    }

    pub fn label(mut self, prefix: impl Into<String>, formatter: fn(f32) -> String) -> Self {
        self.label_prefix = prefix.into();
        self.formatter = formatter;
        self
    }

    /// Checks an initial range against the domain without adjusting it.
    pub fn validate(&self, range: SliderRange) -> Result<(), SliderConfigError> {
        let SliderRange { start, end } = range;
        if !(start <= end) {
            return Err(SliderConfigError::ReversedRange { start, end });
        }
        if !self.domain.contains(start) || !self.domain.contains(end) {
            return Err(SliderConfigError::RangeOutsideDomain {
                start,
                end,
                min: self.domain.min(),
                max: self.domain.max(),
            });
        }
        Ok(())
    }
}

fn default_formatter(value: f32) -> String {
    format!("{value:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SliderConfig {
        SliderConfig::new(ValueDomain::new(1.0, 5.0).unwrap()).steps(3)
    }

    #[test]
    fn accepts_range_inside_domain() {
        assert!(config().validate(SliderRange::new(1.0, 5.0)).is_ok());
        assert!(config().validate(SliderRange::new(3.0, 3.0)).is_ok());
    }

    #[test]
    fn rejects_out_of_domain_range_without_clamping() {
        let err = config().validate(SliderRange::new(0.5, 4.0)).unwrap_err();
        assert_eq!(
            err,
            SliderConfigError::RangeOutsideDomain {
                start: 0.5,
                end: 4.0,
                min: 1.0,
                max: 5.0
            }
        );
    }

    #[test]
    fn rejects_reversed_or_nan_range() {
        assert!(matches!(
            config().validate(SliderRange::new(4.0, 2.0)),
            Err(SliderConfigError::ReversedRange { .. })
        ));
        assert!(config().validate(SliderRange::new(f32::NAN, 2.0)).is_err());
    }

    #[test]
    fn error_messages_name_the_bounds() {
        let err = ValueDomain::new(5.0, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "domain must be strictly increasing, got min 5 >= max 1"
        );
    }
}

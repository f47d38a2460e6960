//! Value <-> pixel mapping for the slider track
//!
//! All pixel coordinates are relative to the left edge of the widget. The
//! track starts one thumb radius in from each side so a thumb sitting at
//! either end of the domain stays fully inside the widget.

use super::config::SliderConfigError;

/// Closed interval of legal slider values. Always `min < max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueDomain {
    min: f32,
    max: f32,
}

impl ValueDomain {
    pub fn new(min: f32, max: f32) -> Result<Self, SliderConfigError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SliderConfigError::NonFiniteDomain { min, max });
        }
        if min >= max {
            return Err(SliderConfigError::EmptyDomain { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// NaN collapses to `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Distance between two adjacent legal values, `None` for a continuous slider.
    pub fn step_size(&self, steps: u32) -> Option<f32> {
        (steps > 0).then(|| self.span() / (steps as f32 + 1.0))
    }

    /// Snap `value` to the nearest legal step, then re-clamp so float
    /// overshoot at the top step never leaves the domain.
    pub fn quantize(&self, value: f32, steps: u32) -> f32 {
        match self.step_size(steps) {
            Some(step) => {
                let k = ((value - self.min) / step).round();
                self.clamp(self.min + k * step)
            }
            None => self.clamp(value),
        }
    }
}

/// Selected `start..=end` pair. A single-thumb slider may hold `start == end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub start: f32,
    pub end: f32,
}

impl SliderRange {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Widget width and thumb radius, measured every frame by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackGeometry {
    pub width: f32,
    pub thumb_radius: f32,
}

impl TrackGeometry {
    pub fn new(width: f32, thumb_radius: f32) -> Self {
        Self {
            width,
            thumb_radius,
        }
    }

    /// Zero when the widget is too narrow to fit both thumbs.
    pub fn track_length(&self) -> f32 {
        let length = self.width - 2.0 * self.thumb_radius;
        if length > 0.0 {
            length
        } else {
            0.0
        }
    }

    pub fn track_start(&self) -> f32 {
        self.thumb_radius
    }

    pub fn track_end(&self) -> f32 {
        self.track_start() + self.track_length()
    }

    pub fn pixel_of(&self, value: f32, domain: &ValueDomain) -> f32 {
        let length = self.track_length();
        if length == 0.0 {
            return self.track_start();
        }
        self.track_start() + (value - domain.min()) / domain.span() * length
    }

    /// Inverse of [`pixel_of`](Self::pixel_of). Not clamped: callers clamp the
    /// pixel to the track first.
    pub fn value_of(&self, pixel: f32, domain: &ValueDomain) -> f32 {
        let length = self.track_length();
        if length == 0.0 {
            return domain.min();
        }
        domain.min() + (pixel - self.track_start()) / length * domain.span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn domain(min: f32, max: f32) -> ValueDomain {
        ValueDomain::new(min, max).unwrap()
    }

    #[test]
    fn rejects_reversed_and_empty_domains() {
        assert_eq!(
            ValueDomain::new(5.0, 1.0),
            Err(SliderConfigError::EmptyDomain { min: 5.0, max: 1.0 })
        );
        assert!(ValueDomain::new(2.0, 2.0).is_err());
        assert!(ValueDomain::new(f32::NAN, 1.0).is_err());
        assert!(ValueDomain::new(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn quantizes_people_slider_to_whole_steps() {
        let d = domain(1.0, 5.0);
        assert_eq!(d.step_size(3), Some(1.0));
        assert_eq!(d.quantize(2.6, 3), 3.0);
        assert_eq!(d.quantize(2.4, 3), 2.0);
    }

    #[test]
    fn quantize_near_top_step_stays_in_domain() {
        let d = domain(1.0, 50.0);
        assert_eq!(d.quantize(49.6, 48), 50.0);
        assert_eq!(d.quantize(50.4, 48), 50.0);
        assert_eq!(d.quantize(0.2, 48), 1.0);
    }

    #[test]
    fn zero_steps_only_clamps() {
        let d = domain(0.0, 3.0);
        assert_eq!(d.step_size(0), None);
        assert_eq!(d.quantize(1.37, 0), 1.37);
        assert_eq!(d.quantize(-4.0, 0), 0.0);
    }

    #[test]
    fn maps_domain_ends_to_track_ends() {
        let d = domain(0.0, 3.0);
        let g = TrackGeometry::new(220.0, 10.0);
        assert_eq!(g.track_length(), 200.0);
        assert_eq!(g.pixel_of(0.0, &d), 10.0);
        assert_eq!(g.pixel_of(3.0, &d), 210.0);
        assert_eq!(g.pixel_of(1.5, &d), 110.0);
        assert_eq!(g.value_of(110.0, &d), 1.5);
    }

    #[test]
    fn narrow_track_pins_thumbs_left() {
        let d = domain(1.0, 5.0);
        let g = TrackGeometry::new(15.0, 10.0);
        assert_eq!(g.track_length(), 0.0);
        assert_eq!(g.pixel_of(4.0, &d), 10.0);
        assert_eq!(g.value_of(12.0, &d), 1.0);
        assert_eq!(g.track_start(), g.track_end());
    }

    proptest! {
        #[test]
        fn pixel_value_round_trip(
            width in 60.0..2000.0_f32,
            radius in 0.0..20.0_f32,
            t in 0.0..=1.0_f32,
        ) {
            let d = domain(1.0, 50.0);
            let g = TrackGeometry::new(width, radius);
            let p = t * width;
            let back = g.pixel_of(g.value_of(p, &d), &d);
            prop_assert!((back - p).abs() < 1e-2, "p={p} back={back}");
        }

        #[test]
        fn quantized_values_land_on_steps(value in -10.0..60.0_f32, steps in 1u32..64) {
            let d = domain(1.0, 50.0);
            let q = d.quantize(value, steps);
            prop_assert!(d.contains(q));
            let step = d.step_size(steps).unwrap();
            let k = (q - d.min()) / step;
            prop_assert!((k - k.round()).abs() < 1e-3);
        }
    }
}

//! Slider state and pointer handling
//!
//! `RangeSliderState` owns the selected range and one drag session per thumb.
//! The three pointer handlers are the only mutators of the range, so the
//! ordering and domain invariants only have to be enforced in
//! [`on_pointer_move`](RangeSliderState::on_pointer_move).

use super::config::{SliderConfig, SliderConfigError};
use super::geometry::{SliderRange, TrackGeometry, ValueDomain};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbId {
    Start,
    End,
}

const DUAL_THUMBS: [ThumbId; 2] = [ThumbId::Start, ThumbId::End];
const SINGLE_THUMB: [ThumbId; 1] = [ThumbId::End];

/// Drag in progress: where the thumb was when pressed, and how far the
/// pointer has travelled since.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    origin: f32,
    delta: f32,
}

#[derive(Debug, Clone)]
pub struct RangeSliderState {
    config: SliderConfig,
    range: SliderRange,
    geometry: TrackGeometry,
    start_drag: Option<DragSession>,
    end_drag: Option<DragSession>,
}

impl RangeSliderState {
    pub fn new(config: SliderConfig, initial: SliderRange) -> Result<Self, SliderConfigError> {
        config.validate(initial)?;
        Ok(Self {
            config,
            range: initial,
            geometry: TrackGeometry::default(),
            start_drag: None,
            end_drag: None,
        })
    }

    pub fn domain(&self) -> &ValueDomain {
        &self.config.domain
    }

    pub fn range(&self) -> SliderRange {
        self.range
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Called by the host whenever the widget is laid out.
    pub fn set_geometry(&mut self, geometry: TrackGeometry) {
        self.geometry = geometry;
    }

    pub fn thumbs(&self) -> &'static [ThumbId] {
        if self.config.single_thumb {
            &SINGLE_THUMB
        } else {
            &DUAL_THUMBS
        }
    }

    pub fn has_thumb(&self, thumb: ThumbId) -> bool {
        self.thumbs().contains(&thumb)
    }

    pub fn thumb_value(&self, thumb: ThumbId) -> f32 {
        match thumb {
            ThumbId::Start => self.range.start,
            ThumbId::End => self.range.end,
        }
    }

    pub fn thumb_pixel(&self, thumb: ThumbId) -> f32 {
        self.geometry.pixel_of(self.thumb_value(thumb), self.domain())
    }

    pub fn is_dragging(&self, thumb: ThumbId) -> bool {
        self.session(thumb).is_some()
    }

    pub fn dragging_thumbs(&self) -> impl Iterator<Item = ThumbId> + '_ {
        self.thumbs()
            .iter()
            .copied()
            .filter(|thumb| self.is_dragging(*thumb))
    }

    /// Thumb whose circle contains `x`. When both thumbs overlap, the one
    /// that still has room to move towards the press wins.
    pub fn hit_test(&self, x: f32) -> Option<ThumbId> {
        let radius = self.geometry.thumb_radius;
        let mut best: Option<(ThumbId, f32)> = None;
        for &thumb in self.thumbs() {
            let distance = (x - self.thumb_pixel(thumb)).abs();
            if distance > radius {
                continue;
            }
            best = match best {
                Some((current, best_distance)) if best_distance < distance => {
                    Some((current, best_distance))
                }
                Some((_, best_distance)) if best_distance == distance => {
                    Some((self.break_overlap(x), distance))
                }
                _ => Some((thumb, distance)),
            };
        }
        best.map(|(thumb, _)| thumb)
    }

    fn break_overlap(&self, x: f32) -> ThumbId {
        let pixel = self.thumb_pixel(ThumbId::Start);
        if pixel >= self.geometry.track_end() {
            ThumbId::Start
        } else if pixel <= self.geometry.track_start() {
            ThumbId::End
        } else if x < pixel {
            ThumbId::Start
        } else {
            ThumbId::End
        }
    }

    /// Starts a drag session for `thumb`. Returns `false` when the thumb does
    /// not exist in this mode or is already being dragged.
    pub fn on_pointer_down(&mut self, thumb: ThumbId, screen_x: f32) -> bool {
        if !self.has_thumb(thumb) || self.is_dragging(thumb) {
            return false;
        }
        let origin = self.thumb_pixel(thumb);
        trace!(?thumb, screen_x, origin, "Slider drag started");
        *self.session_slot(thumb) = Some(DragSession { origin, delta: 0.0 });
        true
    }

    /// Applies a pointer movement to the thumb's session. Returns the new
    /// range when the value changed; `None` means nothing to report.
    pub fn on_pointer_move(&mut self, thumb: ThumbId, delta_x: f32) -> Option<SliderRange> {
        let (lo, hi) = self.pixel_bounds(thumb);
        let session = self.session_slot(thumb).as_mut()?;
        session.delta += delta_x;
        let candidate = session.origin + session.delta;
        // max/min rather than clamp: float noise can leave lo a hair above hi
        let pixel = candidate.max(lo).min(hi);

        let domain = self.config.domain;
        let raw = self.geometry.value_of(pixel, &domain);
        let value = domain.quantize(raw, self.config.steps);

        let next = if self.config.single_thumb {
            SliderRange::new(domain.min(), value)
        } else {
            match thumb {
                ThumbId::Start => SliderRange::new(value.min(self.range.end), self.range.end),
                ThumbId::End => SliderRange::new(self.range.start, value.max(self.range.start)),
            }
        };

        if next == self.range {
            return None;
        }
        self.range = next;
        Some(next)
    }

    /// Ends the session. The range keeps whatever the last move produced.
    pub fn on_pointer_up(&mut self, thumb: ThumbId) -> bool {
        let ended = self.session_slot(thumb).take().is_some();
        if ended {
            trace!(?thumb, start = self.range.start, end = self.range.end, "Slider drag ended");
        }
        ended
    }

    /// Drops every in-progress session without reporting a value.
    pub fn cancel_drags(&mut self) {
        let start = self.start_drag.take();
        let end = self.end_drag.take();
        if start.is_some() || end.is_some() {
            trace!("Slider drag cancelled");
        }
    }

    /// Allowed pixel interval for a thumb: the whole track, narrowed by the
    /// opposite thumb in dual mode.
    fn pixel_bounds(&self, thumb: ThumbId) -> (f32, f32) {
        let start = self.geometry.track_start();
        let end = self.geometry.track_end();
        if self.config.single_thumb {
            return (start, end);
        }
        match thumb {
            ThumbId::Start => (start, self.thumb_pixel(ThumbId::End)),
            ThumbId::End => (self.thumb_pixel(ThumbId::Start), end),
        }
    }

    fn session(&self, thumb: ThumbId) -> Option<&DragSession> {
        match thumb {
            ThumbId::Start => self.start_drag.as_ref(),
            ThumbId::End => self.end_drag.as_ref(),
        }
    }

    fn session_slot(&mut self, thumb: ThumbId) -> &mut Option<DragSession> {
        match thumb {
            ThumbId::Start => &mut self.start_drag,
            ThumbId::End => &mut self.end_drag,
        }
    }

    pub fn label(&self) -> String {
        let fmt = self.config.formatter;
        let prefix = &self.config.label_prefix;
        if self.config.single_thumb {
            format!("{} {}", prefix, fmt(self.range.end))
        } else if self.range.is_collapsed() {
            format!("{} {}", prefix, fmt(self.range.start))
        } else {
            format!("{} {} - {}", prefix, fmt(self.range.start), fmt(self.range.end))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIDTH: f32 = 420.0;
    const RADIUS: f32 = 10.0;

    fn slider(min: f32, max: f32, steps: u32, single: bool, initial: (f32, f32)) -> RangeSliderState {
        let config = SliderConfig::new(ValueDomain::new(min, max).unwrap())
            .steps(steps)
            .single_thumb(single)
            .label("Value:", |v| format!("{}", v as i32));
        let mut state = RangeSliderState::new(config, SliderRange::new(initial.0, initial.1)).unwrap();
        state.set_geometry(TrackGeometry::new(WIDTH, RADIUS));
        state
    }

    /// Drag `thumb` so its raw (unquantized) value would become `target`.
    fn drag_to(state: &mut RangeSliderState, thumb: ThumbId, target: f32) -> Option<SliderRange> {
        let from = state.thumb_pixel(thumb);
        let to = state.geometry().pixel_of(target, state.domain());
        assert!(state.on_pointer_down(thumb, from));
        let changed = state.on_pointer_move(thumb, to - from);
        state.on_pointer_up(thumb);
        changed
    }

    #[test]
    fn construction_rejects_reversed_domain() {
        let err = ValueDomain::new(5.0, 1.0).unwrap_err();
        assert_eq!(err, SliderConfigError::EmptyDomain { min: 5.0, max: 1.0 });
    }

    #[test]
    fn construction_does_not_clamp_initial_range() {
        let config = SliderConfig::new(ValueDomain::new(1.0, 5.0).unwrap());
        let result = RangeSliderState::new(config, SliderRange::new(0.0, 5.0));
        assert!(matches!(result, Err(SliderConfigError::RangeOutsideDomain { .. })));
    }

    #[test]
    fn dual_thumb_snaps_to_nearest_step() {
        let mut s = slider(1.0, 5.0, 3, false, (1.0, 5.0));
        let changed = drag_to(&mut s, ThumbId::Start, 2.6);
        assert_eq!(changed, Some(SliderRange::new(3.0, 5.0)));
        assert_eq!(s.label(), "Value: 3 - 5");
    }

    #[test]
    fn single_thumb_reaches_domain_max() {
        let mut s = slider(1.0, 50.0, 48, true, (1.0, 20.0));
        let changed = drag_to(&mut s, ThumbId::End, 49.6);
        assert_eq!(changed, Some(SliderRange::new(1.0, 50.0)));
    }

    #[test]
    fn single_thumb_has_no_start_thumb() {
        let mut s = slider(0.0, 3.0, 2, true, (0.0, 3.0));
        assert_eq!(s.thumbs(), &[ThumbId::End]);
        assert!(!s.on_pointer_down(ThumbId::Start, 10.0));
        assert_eq!(s.on_pointer_move(ThumbId::Start, 100.0), None);
    }

    #[test]
    fn start_thumb_cannot_pass_end_thumb() {
        let mut s = slider(1.0, 5.0, 0, false, (2.0, 3.0));
        assert!(s.on_pointer_down(ThumbId::Start, 0.0));
        let changed = s.on_pointer_move(ThumbId::Start, 1000.0);
        assert_eq!(changed, Some(SliderRange::new(3.0, 3.0)));
        assert_eq!(s.label(), "Value: 3");
    }

    #[test]
    fn end_thumb_cannot_pass_start_thumb_or_leave_track() {
        let mut s = slider(1.0, 5.0, 0, false, (2.0, 3.0));
        s.on_pointer_down(ThumbId::End, 0.0);
        assert_eq!(s.on_pointer_move(ThumbId::End, -1000.0), Some(SliderRange::new(2.0, 2.0)));
        assert_eq!(s.on_pointer_move(ThumbId::End, 5000.0), Some(SliderRange::new(2.0, 5.0)));
    }

    #[test]
    fn moves_accumulate_from_drag_origin() {
        let mut s = slider(0.0, 400.0, 0, false, (0.0, 400.0));
        s.on_pointer_down(ThumbId::Start, RADIUS);
        s.on_pointer_move(ThumbId::Start, 30.0);
        let changed = s.on_pointer_move(ThumbId::Start, 20.0);
        assert_eq!(changed, Some(SliderRange::new(50.0, 400.0)));
    }

    #[test]
    fn second_pointer_down_on_active_thumb_is_ignored() {
        let mut s = slider(0.0, 400.0, 0, false, (0.0, 400.0));
        assert!(s.on_pointer_down(ThumbId::Start, RADIUS));
        s.on_pointer_move(ThumbId::Start, 40.0);
        assert!(!s.on_pointer_down(ThumbId::Start, 300.0));
        let changed = s.on_pointer_move(ThumbId::Start, 10.0);
        assert_eq!(changed, Some(SliderRange::new(50.0, 400.0)));
    }

    #[test]
    fn interleaved_thumbs_keep_separate_origins() {
        let mut s = slider(0.0, 400.0, 0, false, (100.0, 300.0));
        s.on_pointer_down(ThumbId::Start, 110.0);
        s.on_pointer_down(ThumbId::End, 310.0);
        s.on_pointer_move(ThumbId::Start, -50.0);
        s.on_pointer_move(ThumbId::End, 50.0);
        s.on_pointer_move(ThumbId::Start, -25.0);
        assert_eq!(s.range(), SliderRange::new(25.0, 350.0));
        assert!(s.on_pointer_up(ThumbId::Start));
        assert!(s.is_dragging(ThumbId::End));
    }

    #[test]
    fn move_without_change_reports_nothing() {
        let mut s = slider(1.0, 5.0, 3, false, (1.0, 5.0));
        s.on_pointer_down(ThumbId::Start, RADIUS);
        assert_eq!(s.on_pointer_move(ThumbId::Start, 5.0), None);
        assert_eq!(s.on_pointer_move(ThumbId::Start, -50.0), None);
    }

    #[test]
    fn pointer_up_keeps_last_value() {
        let mut s = slider(1.0, 5.0, 3, false, (1.0, 5.0));
        drag_to(&mut s, ThumbId::End, 3.9);
        assert_eq!(s.range(), SliderRange::new(1.0, 4.0));
        assert!(!s.on_pointer_up(ThumbId::End));
        assert_eq!(s.range(), SliderRange::new(1.0, 4.0));
    }

    #[test]
    fn cancel_discards_sessions_silently() {
        let mut s = slider(0.0, 400.0, 0, false, (0.0, 400.0));
        s.on_pointer_down(ThumbId::Start, RADIUS);
        s.on_pointer_down(ThumbId::End, WIDTH - RADIUS);
        s.on_pointer_move(ThumbId::Start, 100.0);
        s.cancel_drags();
        assert_eq!(s.dragging_thumbs().count(), 0);
        assert_eq!(s.on_pointer_move(ThumbId::Start, 100.0), None);
        assert_eq!(s.range(), SliderRange::new(100.0, 400.0));
    }

    #[test]
    fn narrow_track_pins_value_to_min() {
        let mut s = slider(1.0, 5.0, 0, false, (2.0, 4.0));
        s.set_geometry(TrackGeometry::new(12.0, RADIUS));
        assert_eq!(s.thumb_pixel(ThumbId::Start), RADIUS);
        assert_eq!(s.thumb_pixel(ThumbId::End), RADIUS);
        s.on_pointer_down(ThumbId::Start, 0.0);
        assert_eq!(s.on_pointer_move(ThumbId::Start, 40.0), Some(SliderRange::new(1.0, 4.0)));
    }

    #[test]
    fn hit_test_picks_nearest_thumb() {
        let s = slider(0.0, 400.0, 0, false, (100.0, 300.0));
        assert_eq!(s.hit_test(112.0), Some(ThumbId::Start));
        assert_eq!(s.hit_test(305.0), Some(ThumbId::End));
        assert_eq!(s.hit_test(200.0), None);
    }

    #[test]
    fn hit_test_on_overlapping_thumbs_prefers_free_side() {
        let mid = slider(0.0, 400.0, 0, false, (200.0, 200.0));
        assert_eq!(mid.hit_test(205.0), Some(ThumbId::Start));
        assert_eq!(mid.hit_test(210.0), Some(ThumbId::End));
        assert_eq!(mid.hit_test(215.0), Some(ThumbId::End));
        let at_max = slider(0.0, 400.0, 0, false, (400.0, 400.0));
        assert_eq!(at_max.hit_test(WIDTH - RADIUS), Some(ThumbId::Start));
        let at_min = slider(0.0, 400.0, 0, false, (0.0, 0.0));
        assert_eq!(at_min.hit_test(RADIUS), Some(ThumbId::End));
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = slider(1.0, 5.0, 3, false, (1.0, 5.0));
        let b = a.clone();
        drag_to(&mut a, ThumbId::End, 2.0);
        assert_eq!(a.range(), SliderRange::new(1.0, 2.0));
        assert_eq!(b.range(), SliderRange::new(1.0, 5.0));
    }

    #[derive(Debug, Clone)]
    enum Op {
        Down(bool),
        Move(bool, f32),
        Up(bool),
        Cancel,
    }

    fn thumb(start: bool) -> ThumbId {
        if start {
            ThumbId::Start
        } else {
            ThumbId::End
        }
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<bool>().prop_map(Op::Down),
            (any::<bool>(), -600.0..600.0_f32).prop_map(|(s, d)| Op::Move(s, d)),
            any::<bool>().prop_map(Op::Up),
            Just(Op::Cancel),
        ]
    }

    proptest! {
        #[test]
        fn drags_preserve_order_and_domain(
            steps in 0u32..10,
            single in any::<bool>(),
            width in 0.0..800.0_f32,
            ops in proptest::collection::vec(arb_op(), 1..60),
        ) {
            let mut s = slider(1.0, 5.0, steps, single, (2.0, 4.0));
            s.set_geometry(TrackGeometry::new(width, RADIUS));
            for op in ops {
                let reported = match op {
                    Op::Down(t) => { s.on_pointer_down(thumb(t), 0.0); None }
                    Op::Move(t, d) => s.on_pointer_move(thumb(t), d),
                    Op::Up(t) => { s.on_pointer_up(thumb(t)); None }
                    Op::Cancel => { s.cancel_drags(); None }
                };
                let r = s.range();
                prop_assert!(r.start <= r.end, "{r:?}");
                prop_assert!(r.start >= 1.0 && r.end <= 5.0, "{r:?}");
                if let Some(reported) = reported {
                    prop_assert_eq!(reported, r);
                }
            }
        }
    }
}

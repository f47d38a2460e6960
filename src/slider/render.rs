//! Pure draw list for the slider: three track segments and the thumbs

use super::state::{RangeSliderState, ThumbId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Inactive,
    Active,
}

/// Horizontal span of the track, in widget-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSegment {
    pub from: f32,
    pub to: f32,
    pub kind: SegmentKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbVisual {
    pub thumb: ThumbId,
    pub center_x: f32,
    pub radius: f32,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderVisual {
    /// Inactive-left, active, inactive-right.
    pub segments: [TrackSegment; 3],
    pub thumbs: Vec<ThumbVisual>,
}

/// Lays out the track split at the range ends. A single-thumb slider starts
/// its range at the domain minimum, so its left segment is empty.
pub fn render(state: &RangeSliderState) -> SliderVisual {
    let geometry = state.geometry();
    let track_start = geometry.track_start();
    let track_end = geometry.track_end();
    let start_x = state.thumb_pixel(ThumbId::Start);
    let end_x = state.thumb_pixel(ThumbId::End);

    let segments = [
        TrackSegment {
            from: track_start,
            to: start_x,
            kind: SegmentKind::Inactive,
        },
        TrackSegment {
            from: start_x,
            to: end_x,
            kind: SegmentKind::Active,
        },
        TrackSegment {
            from: end_x,
            to: track_end,
            kind: SegmentKind::Inactive,
        },
    ];

    let thumbs = state
        .thumbs()
        .iter()
        .map(|&thumb| ThumbVisual {
            thumb,
            center_x: state.thumb_pixel(thumb),
            radius: geometry.thumb_radius,
            dragging: state.is_dragging(thumb),
        })
        .collect();

    SliderVisual { segments, thumbs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slider::{SliderConfig, SliderRange, TrackGeometry, ValueDomain};

    fn state(single: bool, range: (f32, f32)) -> RangeSliderState {
        let config = SliderConfig::new(ValueDomain::new(0.0, 3.0).unwrap())
            .steps(2)
            .single_thumb(single);
        let mut state = RangeSliderState::new(config, SliderRange::new(range.0, range.1)).unwrap();
        state.set_geometry(TrackGeometry::new(320.0, 10.0));
        state
    }

    #[test]
    fn dual_track_splits_at_both_thumbs() {
        let visual = render(&state(false, (1.0, 2.0)));
        assert_eq!(visual.segments[0].from, 10.0);
        assert_eq!(visual.segments[0].to, 110.0);
        assert_eq!(visual.segments[1].kind, SegmentKind::Active);
        assert_eq!(visual.segments[1].to, 210.0);
        assert_eq!(visual.segments[2].to, 310.0);
        let centers: Vec<f32> = visual.thumbs.iter().map(|t| t.center_x).collect();
        assert_eq!(centers, vec![110.0, 210.0]);
    }

    #[test]
    fn single_track_is_active_up_to_the_thumb() {
        let visual = render(&state(true, (0.0, 2.0)));
        assert_eq!(visual.segments[0].from, visual.segments[0].to);
        assert_eq!(visual.segments[1].from, 10.0);
        assert_eq!(visual.segments[1].to, 210.0);
        assert_eq!(visual.thumbs.len(), 1);
        assert_eq!(visual.thumbs[0].thumb, ThumbId::End);
    }

    #[test]
    fn render_is_idempotent() {
        let s = state(false, (0.0, 3.0));
        assert_eq!(render(&s), render(&s));
    }

    #[test]
    fn dragging_thumb_is_flagged() {
        let mut s = state(false, (0.0, 3.0));
        s.on_pointer_down(ThumbId::End, 310.0);
        let visual = render(&s);
        assert!(!visual.thumbs[0].dragging);
        assert!(visual.thumbs[1].dragging);
    }

    #[test]
    fn mutating_one_slider_leaves_another_unchanged() {
        let mut a = state(false, (0.0, 3.0));
        let b = state(false, (0.0, 3.0));
        let before = render(&b);
        a.on_pointer_down(ThumbId::Start, 10.0);
        a.on_pointer_move(ThumbId::Start, 150.0);
        assert_ne!(render(&a), before);
        assert_eq!(render(&b), before);
    }
}

//! Tap / hold / swipe gestures on feed media
//!
//! A short tap toggles mute. Holding past [`LONG_PRESS_SECS`] pauses once,
//! and releasing that hold resumes. Dragging past [`SWIPE_SLOP`] turns the
//! press into a swipe. Times are egui's `input.time` seconds.

use crate::constants::{
    LONG_PRESS_SECS, SWIPE_DISTANCE, SWIPE_SLOP, WHEEL_COOLDOWN_SECS, WHEEL_PAGE_DELTA,
};
use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureAction {
    Pause,
    Resume,
    ToggleMute,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MediaGesture {
    pressed_at: Option<f64>,
    long_press: bool,
}

impl MediaGesture {
    pub fn press(&mut self, now: f64) {
        if self.pressed_at.is_none() {
            self.pressed_at = Some(now);
            self.long_press = false;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Polled every frame while pressed; yields `Pause` once when the hold
    /// crosses the threshold.
    pub fn update(&mut self, now: f64) -> Option<GestureAction> {
        let pressed_at = self.pressed_at?;
        if !self.long_press && now - pressed_at > LONG_PRESS_SECS {
            self.long_press = true;
            return Some(GestureAction::Pause);
        }
        None
    }

    pub fn release(&mut self, now: f64) -> Option<GestureAction> {
        // Crossing the threshold on the release frame still counts as a hold
        self.update(now);
        self.pressed_at.take()?;
        if std::mem::take(&mut self.long_press) {
            Some(GestureAction::Resume)
        } else {
            Some(GestureAction::ToggleMute)
        }
    }

    /// Forget the press, e.g. when the page scrolls away mid-hold.
    pub fn cancel(&mut self) -> Option<GestureAction> {
        self.pressed_at = None;
        std::mem::take(&mut self.long_press).then_some(GestureAction::Resume)
    }
}

/// Playback flags of one feed page's player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerControls {
    pub playing: bool,
    pub muted: bool,
}

impl PlayerControls {
    pub fn new(muted: bool) -> Self {
        Self {
            playing: true,
            muted,
        }
    }

    pub fn apply(&mut self, action: GestureAction) {
        match action {
            GestureAction::Pause => self.playing = false,
            GestureAction::Resume => self.playing = true,
            GestureAction::ToggleMute => self.muted = !self.muted,
        }
    }
}

/// Direction the content was dragged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
    Up,
    Down,
}

impl Swipe {
    /// Classifies a finished drag by its dominant axis. Short drags are not
    /// swipes.
    pub fn from_offset(offset: egui::Vec2) -> Option<Self> {
        if offset.x.abs() >= offset.y.abs() {
            if offset.x <= -SWIPE_DISTANCE {
                Some(Self::Left)
            } else if offset.x >= SWIPE_DISTANCE {
                Some(Self::Right)
            } else {
                None
            }
        } else if offset.y <= -SWIPE_DISTANCE {
            Some(Self::Up)
        } else if offset.y >= SWIPE_DISTANCE {
            Some(Self::Down)
        } else {
            None
        }
    }
}

/// Follows the pointer from press to release on a media surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    origin: Option<egui::Pos2>,
    last: egui::Pos2,
    swiping: bool,
}

impl DragTracker {
    pub fn track(&mut self, pos: egui::Pos2) {
        if self.origin.is_none() {
            self.origin = Some(pos);
        }
        self.last = pos;
        self.swiping |= self.offset().length() > SWIPE_SLOP;
    }

    fn offset(&self) -> egui::Vec2 {
        self.origin.map_or(egui::Vec2::ZERO, |origin| self.last - origin)
    }

    /// True once the pointer has left the tap radius, even if it came back
    pub fn is_swipe(&self) -> bool {
        self.swiping
    }

    /// Ends tracking and returns the total offset, if a press was tracked.
    pub fn finish(&mut self) -> Option<egui::Vec2> {
        let offset = self.offset();
        self.swiping = false;
        self.origin.take().map(|_| offset)
    }
}

/// Turns a stream of wheel deltas into single page flips. Deltas accumulate
/// until [`WHEEL_PAGE_DELTA`]; after a flip, input is dropped for
/// [`WHEEL_COOLDOWN_SECS`] so one trackpad fling moves one page.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelPager {
    accumulated: f32,
    quiet_until: f64,
}

impl WheelPager {
    /// Returns `+1` (content scrolled towards the next page) or `-1`.
    pub fn feed(&mut self, delta: f32, now: f64) -> Option<isize> {
        if now < self.quiet_until {
            self.accumulated = 0.0;
            return None;
        }
        if delta == 0.0 {
            return None;
        }
        if delta.signum() != self.accumulated.signum() {
            self.accumulated = 0.0;
        }
        self.accumulated += delta;
        if self.accumulated.abs() < WHEEL_PAGE_DELTA {
            return None;
        }
        let step = if self.accumulated < 0.0 { 1 } else { -1 };
        self.accumulated = 0.0;
        self.quiet_until = now + WHEEL_COOLDOWN_SECS;
        Some(step)
    }
}

//! Dual-thumb range slider
//!
//! The behaviour (value/pixel mapping, drag sessions, quantization) is plain
//! Rust in [`geometry`], [`state`] and [`render`]; [`widget`] is the only part
//! that talks to egui.

mod config;
mod geometry;
mod render;
mod state;
mod widget;

pub use config::{SliderConfig, SliderConfigError};
pub use geometry::{SliderRange, TrackGeometry, ValueDomain};
pub use state::RangeSliderState;
pub use widget::RangeSlider;

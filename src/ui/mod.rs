//! UI module - reusable widgets shared by the screens

pub mod components;

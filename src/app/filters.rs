//! Filter screen: the four filter sliders, the activity grid and Apply

use crate::constants::ACTIVITY_GRID_COLUMNS;
use crate::content::sample_activities;
use crate::filters::{FilterKind, FilterState};
use crate::slider::{RangeSlider, RangeSliderState, SliderRange};
use crate::theme;
use crate::types::Activity;
use crate::ui::components::{activity_tile, toggle_switch};
use eframe::egui;
use tracing::{debug, error};

/// Live state of the filter screen. Built when the screen is entered and
/// dropped when it is left, so unapplied edits are discarded.
pub struct FilterScreen {
    sliders: Vec<(FilterKind, RangeSliderState)>,
    activities: Vec<Activity>,
    include_all: bool,
}

impl FilterScreen {
    pub fn new(applied: &FilterState) -> Self {
        let sliders = FilterKind::ALL
            .into_iter()
            .filter_map(|kind| build_slider(kind, applied.get(kind)).map(|s| (kind, s)))
            .collect();
        Self {
            sliders,
            activities: sample_activities(),
            include_all: false,
        }
    }

    /// Ranges currently shown by the sliders
    pub fn current(&self) -> FilterState {
        let mut state = FilterState::default();
        for (kind, slider) in &self.sliders {
            state.set(*kind, slider.range());
        }
        state
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn include_all(&self) -> bool {
        self.include_all
    }

    /// Selects or clears every activity tile at once
    pub fn set_all(&mut self, selected: bool) {
        self.include_all = selected;
        for activity in &mut self.activities {
            activity.selected = selected;
        }
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(activity) = self.activities.get_mut(index) {
            activity.selected = !activity.selected;
            self.include_all = self.activities.iter().all(|a| a.selected);
        }
    }

    pub fn cancel_drags(&mut self) {
        for (_, slider) in &mut self.sliders {
            slider.cancel_drags();
        }
    }

    /// Draws the screen. Returns the chosen ranges when Apply is clicked.
    pub fn ui(&mut self, ui: &mut egui::Ui) -> Option<FilterState> {
        let mut applied = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Select Your Desired Venues")
                            .size(theme::FONT_TITLE)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_XL);

                for (kind, slider) in &mut self.sliders {
                    let response = ui.add(RangeSlider::new(slider));
                    if response.changed() {
                        let range = slider.range();
                        debug!(filter = kind.key_name(), start = range.start, end = range.end, "Filter slider moved");
                    }
                    ui.add_space(theme::SPACING_XL);
                }

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("Include/Exclude Venues")
                                .size(theme::FONT_LABEL)
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let mut include_all = self.include_all();
                        if toggle_switch(ui, &mut include_all).changed() {
                            self.set_all(include_all);
                        }
                    });
                });
                ui.add_space(theme::SPACING_LG);

                let mut toggled = None;
                egui::Grid::new("activity_grid")
                    .spacing(egui::vec2(theme::SPACING_MD, theme::SPACING_MD))
                    .show(ui, |ui| {
                        for (i, activity) in self.activities().iter().enumerate() {
                            if activity_tile(ui, activity.name, activity.selected).clicked() {
                                toggled = Some(i);
                            }
                            if (i + 1) % ACTIVITY_GRID_COLUMNS == 0 {
                                ui.end_row();
                            }
                        }
                    });
                if let Some(i) = toggled {
                    self.toggle(i);
                }

                ui.add_space(theme::SPACING_XL);
                let apply = ui.add_sized(
                    egui::vec2(ui.available_width(), 40.0),
                    theme::button_accent("Apply"),
                );
                if apply.clicked() {
                    applied = Some(self.current());
                }
                ui.add_space(theme::SPACING_XL);
            });

        applied
    }
}

fn build_slider(kind: FilterKind, stored: SliderRange) -> Option<RangeSliderState> {
    let config = match kind.slider_config() {
        Ok(config) => config,
        Err(e) => {
            error!(filter = kind.key_name(), error = %e, "Invalid filter slider configuration");
            return None;
        }
    };
    match RangeSliderState::new(config.clone(), stored) {
        Ok(state) => Some(state),
        Err(e) => {
            error!(filter = kind.key_name(), error = %e, "Stored filter range rejected, using default");
            RangeSliderState::new(config, kind.default_range()).ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliders_start_from_applied_ranges() {
        let mut applied = FilterState::default();
        applied.people = SliderRange::new(2.0, 4.0);
        applied.distance = SliderRange::new(1.0, 12.0);
        let screen = FilterScreen::new(&applied);
        assert_eq!(screen.current(), applied);
    }

    #[test]
    fn invalid_stored_range_falls_back_to_default() {
        let mut applied = FilterState::default();
        applied.people = SliderRange::new(4.0, 2.0);
        applied.time = SliderRange::new(-3.0, 9.0);
        let screen = FilterScreen::new(&applied);
        let current = screen.current();
        assert_eq!(current.people, FilterKind::People.default_range());
        assert_eq!(current.time, FilterKind::Time.default_range());
    }

    #[test]
    fn include_switch_sets_every_tile() {
        let mut screen = FilterScreen::new(&FilterState::default());
        screen.set_all(true);
        assert!(screen.activities().iter().all(|a| a.selected));
        screen.toggle(3);
        assert!(!screen.activities()[3].selected);
        assert!(!screen.include_all());
        screen.toggle(3);
        assert!(screen.include_all());
        screen.set_all(false);
        assert!(screen.activities().iter().all(|a| !a.selected));
    }

    #[test]
    fn toggling_out_of_range_is_ignored() {
        let mut screen = FilterScreen::new(&FilterState::default());
        screen.toggle(99);
        assert!(screen.activities().iter().all(|a| !a.selected));
    }
}

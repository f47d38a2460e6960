//! Venue filters: the four slider definitions and their persisted ranges

use crate::slider::{SliderConfig, SliderConfigError, SliderRange, ValueDomain};
use crate::store::KeyValueStore;

const TIME_LABELS: [&str; 4] = ["Morning", "Afternoon", "Evening", "Night"];
const COST_LABELS: [&str; 4] = ["Free", "$", "$$", "$$$+"];
const MAX_DISTANCE_KM: f32 = 50.0;

/// One filter slider on the filter screen, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    People,
    Time,
    Cost,
    Distance,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [Self::People, Self::Time, Self::Cost, Self::Distance];

    /// Prefix of the `<name>_start` / `<name>_end` store keys
    pub fn key_name(self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Time => "time",
            Self::Cost => "cost",
            Self::Distance => "distance",
        }
    }

    pub fn start_key(self) -> String {
        format!("{}_start", self.key_name())
    }

    pub fn end_key(self) -> String {
        format!("{}_end", self.key_name())
    }

    pub fn bounds(self) -> (f32, f32) {
        match self {
            Self::People => (1.0, 5.0),
            Self::Time => (0.0, 3.0),
            Self::Cost => (0.0, 3.0),
            Self::Distance => (1.0, MAX_DISTANCE_KM),
        }
    }

    /// Range used when nothing is stored. Spans the whole domain.
    pub fn default_range(self) -> SliderRange {
        let (min, max) = self.bounds();
        SliderRange::new(min, max)
    }

    pub fn steps(self) -> u32 {
        match self {
            Self::People => 3,
            Self::Time => 2,
            Self::Cost => 2,
            Self::Distance => 48,
        }
    }

    pub fn single_thumb(self) -> bool {
        matches!(self, Self::Cost | Self::Distance)
    }

    pub fn label_prefix(self) -> &'static str {
        match self {
            Self::People => "Number of People:",
            Self::Time => "Preferred Time:",
            Self::Cost => "Cost:",
            Self::Distance => "Distance:",
        }
    }

    pub fn formatter(self) -> fn(f32) -> String {
        match self {
            Self::People => format_people,
            Self::Time => format_time,
            Self::Cost => format_cost,
            Self::Distance => format_distance,
        }
    }

    pub fn slider_config(self) -> Result<SliderConfig, SliderConfigError> {
        let (min, max) = self.bounds();
        Ok(SliderConfig::new(ValueDomain::new(min, max)?)
            .steps(self.steps())
            .single_thumb(self.single_thumb())
            .label(self.label_prefix(), self.formatter()))
    }
}

fn label_at(labels: &[&'static str], value: f32) -> &'static str {
    // `as usize` saturates negatives and NaN to 0
    let index = (value as usize).min(labels.len() - 1);
    labels[index]
}

pub fn format_people(value: f32) -> String {
    (value as i32).to_string()
}

pub fn format_time(value: f32) -> String {
    label_at(&TIME_LABELS, value).to_owned()
}

pub fn format_cost(value: f32) -> String {
    label_at(&COST_LABELS, value).to_owned()
}

pub fn format_distance(value: f32) -> String {
    if value >= MAX_DISTANCE_KM {
        format!("{}+ km", MAX_DISTANCE_KM as i32)
    } else {
        format!("{} km", value as i32)
    }
}

/// Last applied range of every filter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterState {
    pub people: SliderRange,
    pub time: SliderRange,
    pub cost: SliderRange,
    pub distance: SliderRange,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            people: FilterKind::People.default_range(),
            time: FilterKind::Time.default_range(),
            cost: FilterKind::Cost.default_range(),
            distance: FilterKind::Distance.default_range(),
        }
    }
}

impl FilterState {
    /// Reads every range from the store. Each missing key falls back to its
    /// own default independently.
    pub fn load(store: &KeyValueStore) -> Self {
        let mut state = Self::default();
        for kind in FilterKind::ALL {
            let fallback = kind.default_range();
            let start = store.get_f32(&kind.start_key()).unwrap_or(fallback.start);
            let end = store.get_f32(&kind.end_key()).unwrap_or(fallback.end);
            state.set(kind, SliderRange::new(start, end));
        }
        state
    }

    pub fn save(&self, store: &mut KeyValueStore) {
        for kind in FilterKind::ALL {
            let range = self.get(kind);
            store.set_f32(&kind.start_key(), range.start);
            store.set_f32(&kind.end_key(), range.end);
        }
    }

    pub fn get(&self, kind: FilterKind) -> SliderRange {
        match kind {
            FilterKind::People => self.people,
            FilterKind::Time => self.time,
            FilterKind::Cost => self.cost,
            FilterKind::Distance => self.distance,
        }
    }

    pub fn set(&mut self, kind: FilterKind, range: SliderRange) {
        match kind {
            FilterKind::People => self.people = range,
            FilterKind::Time => self.time = range,
            FilterKind::Cost => self.cost = range,
            FilterKind::Distance => self.distance = range,
        }
    }
}

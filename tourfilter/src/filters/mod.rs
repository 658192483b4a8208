//! Filter criteria for the product grid.
//!
//! [`FilterValues`] is the user's selection. It is treated as an immutable
//! snapshot: every edit goes through [`FilterValues::with_change`], which
//! returns a new value.

pub mod predicate;
pub mod schema;

pub use predicate::{apply_filters, matches};
pub use schema::CategoryFilterSchema;

use serde::{Deserialize, Serialize};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 10_000;
pub const GROUP_SIZE_MIN: u32 = 1;
pub const GROUP_SIZE_MAX: u32 = 50;
pub const DAY_START: &str = "00:00";
pub const DAY_END: &str = "23:59";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterValues {
    /// Substring searched in the address and route location names
    pub location: String,
    /// Closed interval; the lower bound is pinned to [`PRICE_MIN`]
    pub price_range: (u32, u32),
    /// Closed "HH:MM" interval
    pub start_time: (String, String),
    /// Closed interval; the lower bound is pinned to [`GROUP_SIZE_MIN`]
    pub group_size: (u32, u32),
    pub vehicle: Vec<String>,
    pub features: Vec<String>,
    pub tour_category: Option<String>,
    pub activities: Vec<String>,
}

impl Default for FilterValues {
    fn default() -> Self {
        Self {
            location: String::new(),
            price_range: (PRICE_MIN, PRICE_MAX),
            start_time: (DAY_START.to_string(), DAY_END.to_string()),
            group_size: (GROUP_SIZE_MIN, GROUP_SIZE_MAX),
            vehicle: Vec::new(),
            features: Vec::new(),
            tour_category: None,
            activities: Vec::new(),
        }
    }
}

/// A single-field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Location(String),
    MaxPrice(u32),
    StartTimeFrom(String),
    StartTimeTo(String),
    MaxGroupSize(u32),
    Vehicle { option: String, checked: bool },
    Feature { option: String, checked: bool },
    Activity { option: String, checked: bool },
    /// Radio semantics: checking an option replaces the previous one
    TourCategory(String),
}

impl FilterValues {
    /// Merge one field edit, leaving every other field untouched
    pub fn with_change(&self, change: FilterChange) -> Self {
        let mut next = self.clone();
        match change {
            FilterChange::Location(location) => next.location = location,
            FilterChange::MaxPrice(max) => {
                next.price_range = (PRICE_MIN, max.min(PRICE_MAX));
            }
            FilterChange::StartTimeFrom(from) => next.start_time.0 = from,
            FilterChange::StartTimeTo(to) => next.start_time.1 = to,
            FilterChange::MaxGroupSize(max) => {
                next.group_size = (GROUP_SIZE_MIN, max.clamp(GROUP_SIZE_MIN, GROUP_SIZE_MAX));
            }
            FilterChange::Vehicle { option, checked } => {
                toggle_option(&mut next.vehicle, option, checked);
            }
            FilterChange::Feature { option, checked } => {
                toggle_option(&mut next.features, option, checked);
            }
            FilterChange::Activity { option, checked } => {
                toggle_option(&mut next.activities, option, checked);
            }
            FilterChange::TourCategory(option) => next.tour_category = Some(option),
        }
        next
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of criteria that differ from their defaults
    pub fn active_count(&self) -> usize {
        let defaults = Self::default();
        [
            !self.location.is_empty(),
            self.price_range != defaults.price_range,
            self.start_time != defaults.start_time,
            self.group_size != defaults.group_size,
            !self.vehicle.is_empty(),
            !self.features.is_empty(),
            self.tour_category.is_some(),
            !self.activities.is_empty(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

/// Set-add or set-remove a single option, keeping selection order
fn toggle_option(selected: &mut Vec<String>, option: String, checked: bool) {
    if checked {
        if !selected.contains(&option) {
            selected.push(option);
        }
    } else {
        selected.retain(|o| *o != option);
    }
}

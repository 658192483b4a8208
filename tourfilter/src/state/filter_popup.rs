use catalog_api::endpoints::Category;
use chrono::{NaiveTime, Timelike};

use crate::filters::{
    CategoryFilterSchema, FilterChange, FilterValues, DAY_END, DAY_START, PRICE_MAX, PRICE_MIN,
};

pub const PRICE_STEP: u32 = 100;
pub const GROUP_SIZE_STEP: u32 = 1;
pub const TIME_STEP_MINUTES: u32 = 15;

/// Focusable rows of the filter popup, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupField {
    Category,
    Location,
    MaxPrice,
    StartTimeFrom,
    StartTimeTo,
    MaxGroupSize,
    Vehicles,
    Features,
    TourCategory,
    Activities,
    Reset,
    Apply,
}

impl PopupField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Location => "Location",
            Self::MaxPrice => "Price Range",
            Self::StartTimeFrom => "Start Time (from)",
            Self::StartTimeTo => "Start Time (to)",
            Self::MaxGroupSize => "Group Size",
            Self::Vehicles => "Vehicle Type",
            Self::Features => "Features",
            Self::TourCategory => "Tour Category",
            Self::Activities => "Activities",
            Self::Reset => "Reset",
            Self::Apply => "Apply",
        }
    }
}

/// Notifications for the host, in the order they must be handled
#[derive(Debug, Clone, PartialEq)]
pub enum PopupEvent {
    Close,
    ApplyFilters(FilterValues),
    CategoryChange(Category),
}

/// Modal filter editor scoped to one category
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPopupState {
    pub selected_category: Category,
    pub filters: FilterValues,
    pub focused: PopupField,
    /// Highlighted option within a multi/single-select row
    pub option_cursor: usize,
}

impl FilterPopupState {
    pub fn new(category: Category) -> Self {
        Self {
            selected_category: category,
            filters: FilterValues::default(),
            focused: PopupField::Category,
            option_cursor: 0,
        }
    }

    pub fn schema(&self) -> &'static CategoryFilterSchema {
        CategoryFilterSchema::for_category(self.selected_category)
    }

    /// Rows shown for the active category
    pub fn visible_fields(&self) -> Vec<PopupField> {
        let schema = self.schema();
        let mut fields = vec![PopupField::Category, PopupField::Location, PopupField::MaxPrice];
        if schema.show_time_filter {
            fields.extend([PopupField::StartTimeFrom, PopupField::StartTimeTo]);
        }
        if schema.show_group_size {
            fields.push(PopupField::MaxGroupSize);
        }
        if schema.vehicles.is_some() {
            fields.push(PopupField::Vehicles);
        }
        fields.push(PopupField::Features);
        if schema.tour_categories.is_some() {
            fields.push(PopupField::TourCategory);
        }
        if schema.activities.is_some() {
            fields.push(PopupField::Activities);
        }
        fields.extend([PopupField::Reset, PopupField::Apply]);
        fields
    }

    /// Selectable options of a list row (empty for other rows)
    pub fn options(&self, field: PopupField) -> &'static [&'static str] {
        let schema = self.schema();
        match field {
            PopupField::Vehicles => schema.vehicles.unwrap_or_default(),
            PopupField::Features => schema.features,
            PopupField::TourCategory => schema.tour_categories.unwrap_or_default(),
            PopupField::Activities => schema.activities.unwrap_or_default(),
            _ => &[],
        }
    }

    /// Whether an option of a list row is currently selected
    pub fn is_selected(&self, field: PopupField, option: &str) -> bool {
        let selected = |values: &[String]| values.iter().any(|v| v == option);
        match field {
            PopupField::Vehicles => selected(&self.filters.vehicle),
            PopupField::Features => selected(&self.filters.features),
            PopupField::Activities => selected(&self.filters.activities),
            PopupField::TourCategory => self.filters.tour_category.as_deref() == Some(option),
            _ => false,
        }
    }

    /// Switch the edited category
    ///
    /// Selections never carry over: option vocabularies differ between
    /// categories, so every field goes back to its default.
    pub fn change_category(&mut self, category: Category) -> PopupEvent {
        tracing::debug!(
            "Filter popup category {} -> {}, resetting filters",
            self.selected_category,
            category
        );
        self.selected_category = category;
        self.filters = FilterValues::default();
        self.option_cursor = 0;
        if !self.visible_fields().contains(&self.focused) {
            self.focused = PopupField::Category;
        }
        PopupEvent::CategoryChange(category)
    }

    pub fn update_field(&mut self, change: FilterChange) {
        self.filters = self.filters.with_change(change);
    }

    pub fn reset(&mut self) {
        self.filters = FilterValues::default();
    }

    /// Hand the current selection to the host, then close
    pub fn apply(&self) -> Vec<PopupEvent> {
        debug_assert!(
            self.schema().admits(&self.filters),
            "selection outside the {} options: {:?}",
            self.selected_category,
            self.filters
        );
        vec![
            PopupEvent::ApplyFilters(self.filters.clone()),
            PopupEvent::Close,
        ]
    }

    pub fn close(&self) -> PopupEvent {
        PopupEvent::Close
    }

    pub fn focus_next(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(index + 1) % fields.len()];
        self.option_cursor = 0;
    }

    pub fn focus_prev(&mut self) {
        let fields = self.visible_fields();
        let index = fields.iter().position(|f| *f == self.focused).unwrap_or(0);
        self.focused = fields[(index + fields.len() - 1) % fields.len()];
        self.option_cursor = 0;
    }

    /// Left/right on the focused row: step a range, move the option
    /// cursor or switch category
    pub fn adjust(&mut self, forward: bool) -> Option<PopupEvent> {
        match self.focused {
            PopupField::Category => {
                let category = if forward {
                    self.selected_category.next()
                } else {
                    self.selected_category.prev()
                };
                return Some(self.change_category(category));
            }
            PopupField::MaxPrice => {
                let max = self.filters.price_range.1;
                let max = if forward {
                    (max + PRICE_STEP).min(PRICE_MAX)
                } else {
                    max.saturating_sub(PRICE_STEP).max(PRICE_MIN)
                };
                self.update_field(FilterChange::MaxPrice(max));
            }
            PopupField::MaxGroupSize => {
                let max = self.filters.group_size.1;
                let max = if forward {
                    max + GROUP_SIZE_STEP
                } else {
                    max.saturating_sub(GROUP_SIZE_STEP)
                };
                // Clamped to the widget bounds by the change itself
                self.update_field(FilterChange::MaxGroupSize(max));
            }
            PopupField::StartTimeFrom => {
                let time = step_time(&self.filters.start_time.0, forward);
                self.update_field(FilterChange::StartTimeFrom(time));
            }
            PopupField::StartTimeTo => {
                let time = step_time(&self.filters.start_time.1, forward);
                self.update_field(FilterChange::StartTimeTo(time));
            }
            field => {
                let count = self.options(field).len();
                if count > 0 {
                    self.option_cursor = if forward {
                        (self.option_cursor + 1) % count
                    } else {
                        (self.option_cursor + count - 1) % count
                    };
                }
            }
        }
        None
    }

    /// Check/uncheck the option under the cursor
    pub fn toggle_option(&mut self) {
        let field = self.focused;
        let Some(option) = self.options(field).get(self.option_cursor) else {
            return;
        };
        let checked = !self.is_selected(field, option);
        let option = option.to_string();
        let change = match field {
            PopupField::Vehicles => FilterChange::Vehicle { option, checked },
            PopupField::Features => FilterChange::Feature { option, checked },
            PopupField::Activities => FilterChange::Activity { option, checked },
            // Radio buttons only react to being checked
            PopupField::TourCategory if checked => FilterChange::TourCategory(option),
            _ => return,
        };
        self.update_field(change);
    }

    pub fn push_location_char(&mut self, c: char) {
        let mut location = self.filters.location.clone();
        location.push(c);
        self.update_field(FilterChange::Location(location));
    }

    pub fn pop_location_char(&mut self) {
        let mut location = self.filters.location.clone();
        location.pop();
        self.update_field(FilterChange::Location(location));
    }
}

/// Move an "HH:MM" value by one step, clamped to the day
fn step_time(value: &str, forward: bool) -> String {
    let start = NaiveTime::parse_from_str(DAY_START, "%H:%M").unwrap_or_default();
    let end = NaiveTime::parse_from_str(DAY_END, "%H:%M").unwrap_or(start);
    let time = NaiveTime::parse_from_str(value, "%H:%M").unwrap_or(start);

    let minutes = time.num_seconds_from_midnight() / 60;
    let end_minutes = end.num_seconds_from_midnight() / 60;
    let stepped = if forward {
        (minutes + TIME_STEP_MINUTES).min(end_minutes)
    } else {
        minutes.saturating_sub(TIME_STEP_MINUTES)
    };

    NaiveTime::from_num_seconds_from_midnight_opt(stepped * 60, 0)
        .unwrap_or(time)
        .format("%H:%M")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn focus(popup: &mut FilterPopupState, field: PopupField) {
        assert!(popup.visible_fields().contains(&field), "{:?} not visible", field);
        popup.focused = field;
        popup.option_cursor = 0;
    }

    #[test]
    fn test_new_popup_starts_with_defaults() {
        let popup = FilterPopupState::new(Category::Rent);
        assert_eq!(popup.selected_category, Category::Rent);
        assert_eq!(popup.filters, FilterValues::default());
        assert_eq!(popup.focused, PopupField::Category);
    }

    #[test]
    fn test_change_category_resets_every_field() {
        for from in Category::ALL {
            for to in Category::ALL {
                let mut popup = FilterPopupState::new(from);
                popup.update_field(FilterChange::Location("bay".to_string()));
                popup.update_field(FilterChange::MaxPrice(300));
                popup.update_field(FilterChange::StartTimeFrom("10:00".to_string()));
                popup.update_field(FilterChange::MaxGroupSize(5));
                popup.update_field(FilterChange::Feature {
                    option: "Food".to_string(),
                    checked: true,
                });
                popup.update_field(FilterChange::TourCategory("Safari".to_string()));

                let event = popup.change_category(to);

                assert_eq!(event, PopupEvent::CategoryChange(to));
                assert_eq!(popup.selected_category, to);
                assert_eq!(popup.filters, FilterValues::default());
            }
        }
    }

    #[test]
    fn test_visible_fields_follow_schema() {
        let tours = FilterPopupState::new(Category::Tours).visible_fields();
        assert!(tours.contains(&PopupField::StartTimeFrom));
        assert!(tours.contains(&PopupField::MaxGroupSize));
        assert!(tours.contains(&PopupField::Vehicles));
        assert!(tours.contains(&PopupField::TourCategory));
        assert!(tours.contains(&PopupField::Activities));

        let tickets = FilterPopupState::new(Category::Tickets).visible_fields();
        assert!(tickets.contains(&PopupField::StartTimeTo));
        assert!(!tickets.contains(&PopupField::MaxGroupSize));
        assert!(!tickets.contains(&PopupField::Vehicles));

        let rent = FilterPopupState::new(Category::Rent).visible_fields();
        assert!(!rent.contains(&PopupField::StartTimeFrom));
        assert!(rent.contains(&PopupField::Vehicles));
        assert!(!rent.contains(&PopupField::Activities));

        for category in Category::ALL {
            let fields = FilterPopupState::new(category).visible_fields();
            assert!(fields.contains(&PopupField::Features));
            assert_eq!(fields.last(), Some(&PopupField::Apply));
        }
    }

    #[test]
    fn test_apply_emits_filters_then_close() {
        let mut popup = FilterPopupState::new(Category::Tours);
        popup.update_field(FilterChange::MaxPrice(100));

        let events = popup.apply();
        assert_eq!(
            events,
            vec![
                PopupEvent::ApplyFilters(popup.filters.clone()),
                PopupEvent::Close
            ]
        );
        assert_eq!(popup.close(), PopupEvent::Close);
    }

    #[test]
    fn test_reset_restores_defaults_keeps_category() {
        let mut popup = FilterPopupState::new(Category::Transfer);
        popup.update_field(FilterChange::Location("airport".to_string()));
        popup.reset();

        assert_eq!(popup.filters, FilterValues::default());
        assert_eq!(popup.selected_category, Category::Transfer);
    }

    #[test]
    fn test_price_adjust_is_clamped() {
        let mut popup = FilterPopupState::new(Category::Tours);
        focus(&mut popup, PopupField::MaxPrice);

        popup.adjust(true);
        assert_eq!(popup.filters.price_range, (0, 10_000));

        popup.adjust(false);
        assert_eq!(popup.filters.price_range, (0, 9_900));

        for _ in 0..200 {
            popup.adjust(false);
        }
        assert_eq!(popup.filters.price_range, (0, 0));
    }

    #[test]
    fn test_group_size_adjust_is_clamped() {
        let mut popup = FilterPopupState::new(Category::Transfer);
        focus(&mut popup, PopupField::MaxGroupSize);

        popup.adjust(true);
        assert_eq!(popup.filters.group_size, (1, 50));

        for _ in 0..60 {
            popup.adjust(false);
        }
        assert_eq!(popup.filters.group_size, (1, 1));
    }

    #[test]
    fn test_time_adjust_steps_and_clamps() {
        let mut popup = FilterPopupState::new(Category::Tickets);
        focus(&mut popup, PopupField::StartTimeFrom);

        popup.adjust(false);
        assert_eq!(popup.filters.start_time.0, "00:00");
        popup.adjust(true);
        assert_eq!(popup.filters.start_time.0, "00:15");

        focus(&mut popup, PopupField::StartTimeTo);
        popup.adjust(true);
        assert_eq!(popup.filters.start_time.1, "23:59");
        popup.adjust(false);
        assert_eq!(popup.filters.start_time.1, "23:44");
    }

    #[test]
    fn test_adjust_on_category_switches_and_notifies() {
        let mut popup = FilterPopupState::new(Category::Tours);
        popup.update_field(FilterChange::Location("bay".to_string()));

        let event = popup.adjust(true);

        assert_eq!(event, Some(PopupEvent::CategoryChange(Category::Tickets)));
        assert_eq!(popup.filters, FilterValues::default());
    }

    #[test]
    fn test_toggle_multi_select() {
        let mut popup = FilterPopupState::new(Category::Tours);
        focus(&mut popup, PopupField::Vehicles);

        popup.toggle_option();
        popup.adjust(true);
        popup.toggle_option();
        assert_eq!(popup.filters.vehicle, vec!["Yacht", "Catamaran"]);

        popup.toggle_option();
        assert_eq!(popup.filters.vehicle, vec!["Yacht"]);
    }

    #[test]
    fn test_tour_category_is_radio() {
        let mut popup = FilterPopupState::new(Category::Tours);
        focus(&mut popup, PopupField::TourCategory);

        popup.toggle_option();
        assert_eq!(popup.filters.tour_category.as_deref(), Some("Island Tour"));

        // Checking the same option again does not clear it
        popup.toggle_option();
        assert_eq!(popup.filters.tour_category.as_deref(), Some("Island Tour"));

        popup.adjust(true);
        popup.toggle_option();
        assert_eq!(popup.filters.tour_category.as_deref(), Some("Safari"));
    }

    #[test]
    fn test_selections_stay_within_schema() {
        for category in Category::ALL {
            let mut popup = FilterPopupState::new(category);
            for field in popup.visible_fields() {
                popup.focused = field;
                popup.option_cursor = 0;
                for _ in 0..popup.options(field).len() {
                    popup.toggle_option();
                    popup.adjust(true);
                }
            }
            assert!(popup.schema().admits(&popup.filters));
        }
    }

    #[test]
    fn test_apply_after_category_switch_carries_no_stale_options() {
        let mut popup = FilterPopupState::new(Category::Tours);
        focus(&mut popup, PopupField::Vehicles);
        popup.toggle_option();
        popup.change_category(Category::Rent);

        match popup.apply().first() {
            Some(PopupEvent::ApplyFilters(filters)) => {
                assert!(CategoryFilterSchema::for_category(Category::Rent).admits(filters))
            }
            other => panic!("Expected filters first, got {:?}", other),
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "selection outside the rent options")]
    fn test_apply_rejects_foreign_options() {
        let mut popup = FilterPopupState::new(Category::Rent);
        popup.filters.vehicle.push("Yacht".to_string());
        popup.apply();
    }

    #[test]
    fn test_location_editing() {
        let mut popup = FilterPopupState::new(Category::Tours);
        for c in "bayx".chars() {
            popup.push_location_char(c);
        }
        popup.pop_location_char();
        assert_eq!(popup.filters.location, "bay");
    }

    #[test]
    fn test_focus_cycles_through_visible_fields() {
        let mut popup = FilterPopupState::new(Category::Rent);
        let fields = popup.visible_fields();

        for expected in fields.iter().skip(1) {
            popup.focus_next();
            assert_eq!(popup.focused, *expected);
        }
        popup.focus_next();
        assert_eq!(popup.focused, PopupField::Category);

        popup.focus_prev();
        assert_eq!(popup.focused, PopupField::Apply);
    }
}

use catalog_api::endpoints::Category;

use super::FilterValues;

/// Options and visible fields offered for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilterSchema {
    pub vehicles: Option<&'static [&'static str]>,
    pub features: &'static [&'static str],
    pub tour_categories: Option<&'static [&'static str]>,
    pub activities: Option<&'static [&'static str]>,
    pub show_time_filter: bool,
    pub show_group_size: bool,
}

const TOURS: CategoryFilterSchema = CategoryFilterSchema {
    vehicles: Some(&["Yacht", "Catamaran", "Bus", "Minivan"]),
    features: &["WiFi", "Food", "Guide", "Transfer"],
    tour_categories: Some(&["Island Tour", "Safari", "Land Tour"]),
    activities: Some(&["Swimming", "Running", "Elephant Care", "Snorkelling"]),
    show_time_filter: true,
    show_group_size: true,
};

const TICKETS: CategoryFilterSchema = CategoryFilterSchema {
    vehicles: None,
    features: &["Skip the line", "Audio Guide", "Printed", "Mobile"],
    tour_categories: None,
    activities: None,
    show_time_filter: true,
    show_group_size: false,
};

const RENT: CategoryFilterSchema = CategoryFilterSchema {
    vehicles: Some(&["Car", "Bike", "Scooter", "Boat"]),
    features: &["Insurance", "GPS", "Child Seat", "Unlimited Mileage"],
    tour_categories: None,
    activities: None,
    show_time_filter: false,
    show_group_size: false,
};

const TRANSFER: CategoryFilterSchema = CategoryFilterSchema {
    vehicles: Some(&["Luxury Car", "Van", "Bus", "Helicopter"]),
    features: &[
        "Meet & Greet",
        "Flight Tracking",
        "Child Seat",
        "Multiple Stops",
    ],
    tour_categories: None,
    activities: None,
    show_time_filter: true,
    show_group_size: true,
};

impl CategoryFilterSchema {
    pub fn for_category(category: Category) -> &'static CategoryFilterSchema {
        match category {
            Category::Tours => &TOURS,
            Category::Tickets => &TICKETS,
            Category::Rent => &RENT,
            Category::Transfer => &TRANSFER,
        }
    }

    /// Whether every selection in `filters` is drawn from this schema's options
    pub fn admits(&self, filters: &FilterValues) -> bool {
        fn subset(selected: &[String], options: Option<&[&str]>) -> bool {
            let options = options.unwrap_or_default();
            selected.iter().all(|s| options.contains(&s.as_str()))
        }

        subset(&filters.vehicle, self.vehicles)
            && subset(&filters.features, Some(self.features))
            && subset(&filters.activities, self.activities)
            && filters.tour_category.as_deref().is_none_or(|t| {
                self.tour_categories
                    .unwrap_or_default()
                    .contains(&t)
            })
    }
}

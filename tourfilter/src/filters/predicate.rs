use catalog_api::endpoints::products::Product;

use super::FilterValues;

/// Products passing every active criterion of `filters`
///
/// With no filters applied yet, every product passes.
pub fn apply_filters<'a>(products: &'a [Product], filters: Option<&FilterValues>) -> Vec<&'a Product> {
    match filters {
        None => products.iter().collect(),
        Some(filters) => products.iter().filter(|p| matches(p, filters)).collect(),
    }
}

/// Whether a single product satisfies `filters`
///
/// Criteria are AND-ed together; within a multi-select criterion any
/// selected option is enough. Features are not checked, the catalog
/// does not describe them per product.
pub fn matches(product: &Product, filters: &FilterValues) -> bool {
    let Some(route) = product.primary_route() else {
        return false;
    };

    if !filters.activities.is_empty() {
        let has_activity = route.locations.iter().any(|location| {
            location
                .activities
                .iter()
                .any(|activity| filters.activities.contains(&activity.name))
        });
        if !has_activity {
            return false;
        }
    }

    if let Some(ref tour_category) = filters.tour_category {
        let wanted = tour_category.to_lowercase();
        let actual = product.tour_category_name().map(str::to_lowercase);
        if actual.as_deref() != Some(wanted.as_str()) {
            return false;
        }
    }

    if !filters.location.is_empty() {
        let needle = filters.location.to_lowercase();
        let in_address = product.address().to_lowercase().contains(&needle);
        let in_route = route
            .locations
            .iter()
            .any(|location| location.name.to_lowercase().contains(&needle));
        if !in_address && !in_route {
            return false;
        }
    }

    let (min_price, max_price) = filters.price_range;
    let price = product.price.adult_price;
    if !(price >= f64::from(min_price) && price <= f64::from(max_price)) {
        return false;
    }

    let (min_group, max_group) = filters.group_size;
    if route.group_size < min_group || route.group_size > max_group {
        return false;
    }

    // Zero-padded 24h "HH:MM" strings sort chronologically
    let (from, to) = &filters.start_time;
    let has_start_time = route
        .start_time
        .iter()
        .any(|time| time.as_str() >= from.as_str() && time.as_str() <= to.as_str());
    if !has_start_time {
        return false;
    }

    if !filters.vehicle.is_empty() {
        let vehicle_matches = product
            .vehicle_name()
            .is_some_and(|name| filters.vehicle.iter().any(|v| v == name));
        if !vehicle_matches {
            return false;
        }
    }

    true
}

use super::{Category, ProductId};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    /// Singular category tag, e.g. `"tour"`
    #[serde(default)]
    pub product_category: String,
    pub price: Price,
    #[serde(default)]
    pub vehicle: Option<Vehicle>,
    /// Itineraries; the first one is the primary route
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub activity_location: Option<ActivityLocation>,
    #[serde(default)]
    pub tour_category: Option<TourCategory>,
    /// Free-form, e.g. "4 hours"
    #[serde(default)]
    pub duration: Option<String>,
}

impl Product {
    pub fn primary_route(&self) -> Option<&Route> {
        self.routes.first()
    }

    pub fn vehicle_name(&self) -> Option<&str> {
        self.vehicle.as_ref().map(|v| v.name.as_str())
    }

    pub fn address(&self) -> &str {
        self.activity_location
            .as_ref()
            .map(|l| l.address.as_str())
            .unwrap_or_default()
    }

    pub fn tour_category_name(&self) -> Option<&str> {
        self.tour_category.as_ref().map(|c| c.name.as_str())
    }

    /// Case-insensitive match of the product's tag against a category
    pub fn is_in_category(&self, category: Category) -> bool {
        self.product_category.to_lowercase() == category.product_tag()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub adult_price: f64,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default)]
    pub group_size: u32,
    /// Departure times as zero-padded "HH:MM"
    #[serde(default)]
    pub start_time: Vec<String>,
    #[serde(default)]
    pub locations: Vec<RouteLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLocation {
    pub name: String,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityLocation {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourCategory {
    pub name: String,
}

// Requests

/// Fetch the full catalog. The service takes no parameters, every
/// category is returned in one response.
#[derive(Default, Debug, Clone, Serialize)]
pub struct ListProducts;

impl ListProducts {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListProducts {
    type Data = ();
    type Response = ProductsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/product/task/tours".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsResponse {
    pub products: Vec<Product>,
}

impl ProductsResponse {
    /// Keep only products tagged with the given category
    pub fn into_category(self, category: Category) -> Vec<Product> {
        self.products
            .into_iter()
            .filter(|p| p.is_in_category(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> ProductsResponse {
        serde_json::from_value(json!({
            "products": [
                {
                    "id": 1,
                    "title": "Phi Phi Islands by Speedboat",
                    "productCategory": "Tour",
                    "price": { "adultPrice": 80, "childPrice": 40 },
                    "vehicle": { "name": "Yacht" },
                    "routes": [{
                        "groupSize": 12,
                        "startTime": ["08:30", "13:00"],
                        "locations": [{
                            "name": "Maya Bay",
                            "activities": [{ "name": "Snorkelling" }]
                        }]
                    }],
                    "activityLocation": { "address": "Chalong Pier, Phuket" },
                    "tourCategory": { "name": "Island Tour" },
                    "duration": "6 hours"
                },
                {
                    "id": "t-2",
                    "productCategory": "ticket",
                    "price": { "adultPrice": 25.5 }
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_products() {
        let response = sample_response();
        assert_eq!(response.products.len(), 2);

        let tour = &response.products[0];
        assert_eq!(tour.id, ProductId::from(1i64));
        assert_eq!(tour.vehicle_name(), Some("Yacht"));
        assert_eq!(tour.address(), "Chalong Pier, Phuket");
        assert_eq!(tour.tour_category_name(), Some("Island Tour"));
        assert_eq!(tour.duration.as_deref(), Some("6 hours"));
        let route = tour.primary_route().unwrap();
        assert_eq!(route.group_size, 12);
        assert_eq!(route.start_time, vec!["08:30", "13:00"]);
        assert_eq!(route.locations[0].activities[0].name, "Snorkelling");

        let ticket = &response.products[1];
        assert_eq!(ticket.id, ProductId::from("t-2"));
        assert!(ticket.primary_route().is_none());
        assert_eq!(ticket.vehicle_name(), None);
        assert_eq!(ticket.address(), "");
        assert_eq!(ticket.duration, None);
    }

    #[test]
    fn test_into_category_matches_singular_tag_case_insensitively() {
        let tours = sample_response().into_category(Category::Tours);
        assert_eq!(tours.len(), 1);
        assert_eq!(tours[0].id, ProductId::from(1i64));

        let tickets = sample_response().into_category(Category::Tickets);
        assert_eq!(tickets.len(), 1);

        assert!(sample_response().into_category(Category::Rent).is_empty());
    }

    #[test]
    fn test_endpoint_is_fixed() {
        assert_eq!(ListProducts::new().endpoint(), "/product/task/tours");
    }
}

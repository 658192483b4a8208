use catalog_api::endpoints::products::Product;
use itertools::Itertools;

/// Format a price with the product's currency, defaulting to dollars
pub fn fmt_price(amount: f64, currency: Option<&str>) -> String {
    let number = if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    };

    match currency {
        Some(code) if !code.is_empty() && code != "USD" => format!("{} {}", number, code),
        _ => format!("${}", number),
    }
}

/// Start times of the primary route, comma separated
pub fn fmt_start_times(product: &Product) -> String {
    product
        .primary_route()
        .map(|route| route.start_time.iter().join(", "))
        .unwrap_or_default()
}

/// Address, falling back to the first route location
pub fn fmt_location(product: &Product) -> String {
    let address = product.address();
    if !address.is_empty() {
        return address.to_string();
    }
    product
        .primary_route()
        .and_then(|route| route.locations.first())
        .map(|location| location.name.clone())
        .unwrap_or_default()
}

/// Title, falling back to the product id
pub fn fmt_title(product: &Product) -> String {
    if product.title.is_empty() {
        format!("Product {}", product.id)
    } else {
        product.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fmt_price() {
        assert_eq!(fmt_price(80.0, None), "$80");
        assert_eq!(fmt_price(25.5, Some("USD")), "$25.50");
        assert_eq!(fmt_price(1200.0, Some("THB")), "1200 THB");
    }

    #[test]
    fn test_product_fallbacks() {
        let product: Product = serde_json::from_value(json!({
            "id": 7,
            "productCategory": "tour",
            "price": { "adultPrice": 10 },
            "routes": [{
                "groupSize": 2,
                "startTime": ["08:00", "15:30"],
                "locations": [{ "name": "James Bond Island" }]
            }]
        }))
        .unwrap();

        assert_eq!(fmt_title(&product), "Product 7");
        assert_eq!(fmt_location(&product), "James Bond Island");
        assert_eq!(fmt_start_times(&product), "08:00, 15:30");
    }
}

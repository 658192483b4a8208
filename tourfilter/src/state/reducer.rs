use crate::events::DataEvent;
use crate::state::{AppState, LoadingState, FETCH_FAILED_MESSAGE};

/// Apply a background result to the state
///
/// Results tagged with anything but the latest issued request are
/// dropped, so a slow superseded fetch can never overwrite newer data.
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::ProductsLoaded {
            request_id,
            category,
            products,
        } => {
            if state.grid.latest_request != Some(request_id) {
                tracing::debug!(
                    "Discarding stale products for {} from request {}",
                    category,
                    request_id
                );
                return;
            }
            if category != state.grid.category {
                tracing::warn!(
                    "Request {} returned {} products but the grid shows {}",
                    request_id,
                    category,
                    state.grid.category
                );
                return;
            }

            tracing::info!(
                "Loaded {} {} products (request {})",
                products.len(),
                category,
                request_id
            );
            let selected = state.grid.selected_product().map(|p| p.id.clone());
            state.grid.products = products;
            state.grid.loading = LoadingState::Loaded;
            state.grid.latest_request = None;
            state.grid.reselect(selected.as_ref());
        }

        DataEvent::ProductsLoadFailed { request_id, error } => {
            if state.grid.latest_request != Some(request_id) {
                tracing::debug!("Discarding stale failure from request {}: {}", request_id, error);
                return;
            }

            // The detail was logged by the loader; users only see the generic message
            state.grid.products.clear();
            state.grid.loading = LoadingState::Error(FETCH_FAILED_MESSAGE.to_string());
            state.grid.latest_request = None;
            state.grid.table_state.borrow_mut().select(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{FilterChange, FilterValues};
    use catalog_api::endpoints::{products::Product, Category, ProductId};
    use serde_json::json;

    fn product(id: i64, price: f64, vehicle: &str) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("Tour {}", id),
            "productCategory": "tour",
            "price": { "adultPrice": price },
            "vehicle": { "name": vehicle },
            "routes": [{ "groupSize": 8, "startTime": ["09:30"] }]
        }))
        .unwrap()
    }

    fn loaded(state: &AppState, products: Vec<Product>) -> DataEvent {
        DataEvent::ProductsLoaded {
            request_id: state.grid.latest_request.expect("a fetch is pending"),
            category: state.grid.category,
            products,
        }
    }

    #[test]
    fn test_products_loaded() {
        let mut state = AppState::new();
        state.begin_fetch();

        let event = loaded(&state, vec![product(1, 80.0, "Yacht"), product(2, 150.0, "Bus")]);
        reduce_data_event(&mut state, event);

        assert_eq!(state.grid.loading, LoadingState::Loaded);
        assert_eq!(state.grid.products.len(), 2);
        assert_eq!(state.grid.latest_request, None);
        assert_eq!(state.grid.table_state.borrow().selected(), Some(0));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = AppState::new();
        let slow = state.begin_fetch();
        let fast = state.change_category(Category::Rent);

        reduce_data_event(
            &mut state,
            DataEvent::ProductsLoaded {
                request_id: fast.request_id,
                category: Category::Rent,
                products: vec![],
            },
        );
        // The superseded tours fetch resolves last
        reduce_data_event(
            &mut state,
            DataEvent::ProductsLoaded {
                request_id: slow.request_id,
                category: Category::Tours,
                products: vec![product(1, 80.0, "Yacht")],
            },
        );

        assert_eq!(state.category(), Category::Rent);
        assert!(state.grid.products.is_empty());
        assert_eq!(state.grid.loading, LoadingState::Loaded);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut state = AppState::new();
        let first = state.begin_fetch();
        state.begin_fetch();

        reduce_data_event(
            &mut state,
            DataEvent::ProductsLoadFailed {
                request_id: first.request_id,
                error: "connection reset".to_string(),
            },
        );

        assert!(matches!(state.grid.loading, LoadingState::Loading(..)));
    }

    #[test]
    fn test_failure_shows_generic_message() {
        let mut state = AppState::new();
        let fetch = state.begin_fetch();

        reduce_data_event(
            &mut state,
            DataEvent::ProductsLoadFailed {
                request_id: fetch.request_id,
                error: "Internal error: error decoding response body".to_string(),
            },
        );

        assert_eq!(
            state.grid.loading,
            LoadingState::Error("Failed to fetch products".to_string())
        );
    }

    #[test]
    fn test_empty_result_is_not_an_error() {
        let mut state = AppState::new();
        state.begin_fetch();
        let event = loaded(&state, vec![product(1, 150.0, "Bus")]);
        reduce_data_event(&mut state, event);

        state.apply_filters(Some(FilterValues::default().with_change(FilterChange::MaxPrice(100))));

        assert_eq!(state.grid.loading, LoadingState::Loaded);
        assert!(state.grid.filtered_products().is_empty());
        assert_eq!(state.grid.table_state.borrow().selected(), None);
    }

    #[test]
    fn test_filters_survive_reload() {
        let mut state = AppState::new();
        let yacht_only = FilterValues::default().with_change(FilterChange::Vehicle {
            option: "Yacht".to_string(),
            checked: true,
        });
        state.apply_filters(Some(yacht_only));

        state.begin_fetch();
        let event = loaded(&state, vec![product(1, 80.0, "Bus"), product(2, 80.0, "Yacht")]);
        reduce_data_event(&mut state, event);

        let visible: Vec<_> = state.grid.filtered_products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(visible, vec![ProductId::from(2i64)]);
    }
}

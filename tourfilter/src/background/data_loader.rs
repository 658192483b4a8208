use crate::events::DataEvent;
use crate::state::FetchRequest;
use catalog_api::{Client, Request};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fetches the catalog and reports results back to the event loop
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Load every product, then keep the requested category
    ///
    /// The service has no server-side filtering, so the whole catalog is
    /// transferred on each call.
    pub async fn load_products(&self, fetch: FetchRequest) {
        let FetchRequest {
            request_id,
            category,
        } = fetch;
        tracing::info!("Loading {} products (request {})", category, request_id);

        let req = Request::products().list();
        let event = match self.api_client.send(req).await {
            Ok(response) => {
                let total = response.products.len();
                let products = response.into_category(category);
                tracing::debug!(
                    "Catalog returned {} products, {} tagged {}",
                    total,
                    products.len(),
                    category.product_tag()
                );
                DataEvent::ProductsLoaded {
                    request_id,
                    category,
                    products,
                }
            }
            Err(e) => {
                tracing::error!("Failed to load products for {}: {}", category, e);
                DataEvent::ProductsLoadFailed {
                    request_id,
                    error: e.to_string(),
                }
            }
        };

        if self.data_tx.send(event).is_err() {
            tracing::debug!("Event loop gone, dropping result of request {}", request_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reducer, AppState, LoadingState, FETCH_FAILED_MESSAGE};
    use catalog_api::endpoints::Category;

    #[tokio::test]
    async fn test_unreachable_catalog_reports_failure_for_issued_request() {
        // Port 9 (discard) is not expected to accept HTTP connections
        let api_client = Arc::new(Client::new("http://127.0.0.1:9"));
        let (data_tx, mut data_rx) = mpsc::unbounded_channel();
        let data_loader = DataLoader::new(api_client, data_tx);

        let mut state = AppState::with_category(Category::Rent);
        let fetch = state.begin_fetch();

        data_loader.load_products(fetch).await;

        let event = data_rx.recv().await.expect("loader always reports back");
        match &event {
            DataEvent::ProductsLoadFailed { request_id, .. } => {
                assert_eq!(*request_id, fetch.request_id)
            }
            other => panic!("Expected a load failure, got {:?}", other),
        }

        reducer::reduce_data_event(&mut state, event);
        assert_eq!(
            state.grid.loading,
            LoadingState::Error(FETCH_FAILED_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_result_is_dropped_when_event_loop_is_gone() {
        let api_client = Arc::new(Client::new("http://127.0.0.1:9"));
        let (data_tx, data_rx) = mpsc::unbounded_channel();
        drop(data_rx);
        let data_loader = DataLoader::new(api_client, data_tx);

        let mut state = AppState::new();
        // Must not panic on a closed channel
        data_loader.load_products(state.begin_fetch()).await;
    }
}

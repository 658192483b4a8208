pub mod filter_popup;
pub mod reducer;

use catalog_api::endpoints::{products::Product, Category, ProductId};
use ratatui::widgets::TableState;
use std::cell::RefCell;
use throbber_widgets_tui::ThrobberState;

use crate::filters::{apply_filters, FilterValues};
pub use filter_popup::{FilterPopupState, PopupEvent, PopupField};

/// Message shown when the catalog cannot be fetched. The underlying error
/// only goes to the log.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products";

/// Represents loading state separate from data state
#[derive(Default, Debug, Clone, PartialEq)]
pub enum LoadingState {
    #[default]
    NotStarted,
    Loading(ThrobberState),
    Loaded,
    Error(String),
}

/// Sequence number attached to every catalog fetch
///
/// Only the result of the latest issued request is accepted; anything
/// older is dropped when it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch the host wants started
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub request_id: RequestId,
    pub category: Category,
}

/// Product listing for one category
#[derive(Default, Debug, Clone)]
pub struct ProductGridState {
    /// Category the grid is showing, owned by the host
    pub category: Category,
    /// Criteria applied by the host; `None` until the popup is applied
    pub filters: Option<FilterValues>,
    /// Products of `category` from the last accepted fetch
    pub products: Vec<Product>,
    pub loading: LoadingState,
    /// Request whose result the grid is waiting for
    pub latest_request: Option<RequestId>,
    pub table_state: RefCell<TableState>,
}

impl ProductGridState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Products passing the current filters
    pub fn filtered_products(&self) -> Vec<&Product> {
        apply_filters(&self.products, self.filters.as_ref())
    }

    pub fn selected_product(&self) -> Option<&Product> {
        let index = self.table_state.borrow().selected()?;
        self.filtered_products().get(index).copied()
    }

    /// Re-point the selection at `product_id` if it is still visible,
    /// otherwise at the first row
    pub fn reselect(&self, product_id: Option<&ProductId>) {
        let filtered = self.filtered_products();
        let index = product_id
            .and_then(|id| filtered.iter().position(|p| p.id == *id))
            .or(if filtered.is_empty() { None } else { Some(0) });
        self.table_state.borrow_mut().select(index);
    }

    pub fn select_prev(&mut self) {
        let num_items = self.filtered_products().len();
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(0) == 0 {
                table_state.select(Some(num_items - 1));
            } else {
                table_state.scroll_up_by(1)
            }
        }
    }

    pub fn select_next(&mut self) {
        let num_items = self.filtered_products().len();
        let mut table_state = self.table_state.borrow_mut();
        if num_items > 0 {
            if table_state.selected().unwrap_or(num_items - 1) == num_items - 1 {
                table_state.select_first();
            } else {
                table_state.scroll_down_by(1)
            }
        }
    }

    pub fn select_first(&mut self) {
        if !self.filtered_products().is_empty() {
            self.table_state.borrow_mut().select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        let len = self.filtered_products().len();
        if len > 0 {
            self.table_state.borrow_mut().select(Some(len - 1));
        }
    }
}

/// Host state: owns the grid's category and filters and the popup
#[derive(Debug, Clone)]
pub struct AppState {
    pub grid: ProductGridState,
    pub filter_popup: Option<FilterPopupState>,

    // UI state
    pub help_visible: bool,

    // System
    pub should_quit: bool,

    last_request: RequestId,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_category(Category::default())
    }

    pub fn with_category(category: Category) -> Self {
        Self {
            grid: ProductGridState::new(category),
            filter_popup: None,
            help_visible: false,
            should_quit: false,
            last_request: RequestId::new(0),
        }
    }

    pub fn category(&self) -> Category {
        self.grid.category
    }

    /// Issue a new fetch for the grid's category
    ///
    /// The grid switches to loading and forgets any earlier request.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.last_request = self.last_request.next();
        self.grid.latest_request = Some(self.last_request);
        self.grid.loading = LoadingState::Loading(ThrobberState::default());
        tracing::debug!(
            "Issuing fetch {} for category {}",
            self.last_request,
            self.grid.category
        );
        FetchRequest {
            request_id: self.last_request,
            category: self.grid.category,
        }
    }

    /// Point the grid at another category and refetch
    ///
    /// Applied filters are dropped: they were built against the previous
    /// category's options.
    pub fn change_category(&mut self, category: Category) -> FetchRequest {
        tracing::info!("Category changed {} -> {}", self.grid.category, category);
        self.grid.category = category;
        self.grid.filters = None;
        self.grid.table_state.borrow_mut().select(None);
        self.begin_fetch()
    }

    /// Hand a filter snapshot to the grid; no refetch happens
    pub fn apply_filters(&mut self, filters: Option<FilterValues>) {
        let selected = self.grid.selected_product().map(|p| p.id.clone());
        self.grid.filters = filters;
        self.grid.reselect(selected.as_ref());
        tracing::info!(
            "Filters applied: {} of {} products visible",
            self.grid.filtered_products().len(),
            self.grid.products.len()
        );
    }

    pub fn open_filter_popup(&mut self) {
        self.filter_popup = Some(FilterPopupState::new(self.grid.category));
    }

    /// Act on popup notifications, in order
    ///
    /// Returns the fetch to start when the popup switched category.
    pub fn handle_popup_events(&mut self, events: Vec<PopupEvent>) -> Option<FetchRequest> {
        let mut fetch = None;
        for event in events {
            match event {
                PopupEvent::Close => self.filter_popup = None,
                PopupEvent::ApplyFilters(filters) => self.apply_filters(Some(filters)),
                PopupEvent::CategoryChange(category) => {
                    fetch = Some(self.change_category(category));
                }
            }
        }
        fetch
    }

    pub fn loading_state(&mut self) -> Option<&mut ThrobberState> {
        match self.grid.loading {
            LoadingState::Loading(ref mut throbber_state) => Some(throbber_state),
            _ => None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::FilterChange;
    use serde_json::json;

    fn product(id: i64, price: f64) -> Product {
        serde_json::from_value(json!({
            "id": id,
            "productCategory": "tour",
            "price": { "adultPrice": price },
            "routes": [{ "groupSize": 4, "startTime": ["10:00"] }]
        }))
        .unwrap()
    }

    #[test]
    fn test_begin_fetch_increments_sequence() {
        let mut state = AppState::new();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(second.request_id > first.request_id);
        assert_eq!(state.grid.latest_request, Some(second.request_id));
        assert!(matches!(state.grid.loading, LoadingState::Loading(..)));
    }

    #[test]
    fn test_change_category_clears_applied_filters() {
        let mut state = AppState::new();
        state.apply_filters(Some(FilterValues::default().with_change(FilterChange::MaxPrice(10))));

        let fetch = state.change_category(Category::Rent);

        assert_eq!(fetch.category, Category::Rent);
        assert_eq!(state.category(), Category::Rent);
        assert_eq!(state.grid.filters, None);
    }

    #[test]
    fn test_apply_filters_keeps_selected_product_when_visible() {
        let mut state = AppState::new();
        state.grid.products = vec![product(1, 50.0), product(2, 500.0), product(3, 80.0)];
        state.grid.table_state.borrow_mut().select(Some(2));

        state.apply_filters(Some(FilterValues::default().with_change(FilterChange::MaxPrice(100))));

        assert_eq!(state.grid.filtered_products().len(), 2);
        assert_eq!(
            state.grid.selected_product().map(|p| p.id.clone()),
            Some(ProductId::from(3i64))
        );
    }

    #[test]
    fn test_popup_apply_hands_filters_to_grid_and_closes() {
        let mut state = AppState::new();
        state.open_filter_popup();
        let popup = state.filter_popup.as_mut().unwrap();
        popup.update_field(FilterChange::MaxPrice(200));
        let events = popup.apply();

        let fetch = state.handle_popup_events(events);

        assert_eq!(fetch, None);
        assert!(state.filter_popup.is_none());
        assert_eq!(
            state.grid.filters.as_ref().map(|f| f.price_range),
            Some((0, 200))
        );
    }

    #[test]
    fn test_popup_category_change_triggers_fetch() {
        let mut state = AppState::new();
        state.open_filter_popup();
        let event = state
            .filter_popup
            .as_mut()
            .unwrap()
            .change_category(Category::Transfer);

        let fetch = state.handle_popup_events(vec![event]);

        assert_eq!(fetch.map(|f| f.category), Some(Category::Transfer));
        assert_eq!(state.category(), Category::Transfer);
        assert!(state.filter_popup.is_some());
    }

    #[test]
    fn test_select_wraps() {
        let mut state = AppState::new();
        state.grid.products = vec![product(1, 50.0), product(2, 60.0)];

        state.grid.select_next();
        state.grid.select_next();
        state.grid.select_next();
        assert_eq!(state.grid.table_state.borrow().selected(), Some(0));

        state.grid.select_prev();
        assert_eq!(state.grid.table_state.borrow().selected(), Some(1));
    }
}

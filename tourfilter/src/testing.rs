use catalog_api::endpoints::products::Product;

use crate::app_core::{AppCore, DataEventHandler};
use crate::commands::executor;
use crate::events::{AppCommand, DataEvent};
use crate::input::{Key, KeyEvent};
use crate::state::AppState;

/// Mock data event handler for tests (no real async tasks)
///
/// Commands update state synchronously; fetches are issued but never
/// started, tests answer them with [`TestApp::resolve_fetch`].
pub struct MockDataHandler;

impl MockDataHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockDataHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl DataEventHandler for MockDataHandler {
    fn execute_with_context(&mut self, command: AppCommand, state: &mut AppState) {
        executor::execute_command_sync(command, state);
    }
}

pub struct TestApp {
    core: AppCore<MockDataHandler>,
}

impl TestApp {
    /// Create a test app whose initial fetch is pending
    pub fn new() -> Self {
        let mut state = AppState::new();
        state.begin_fetch();
        Self {
            core: AppCore::with_state(state, MockDataHandler::new()),
        }
    }

    /// Send a single key event
    pub fn send_key(&mut self, key: Key) {
        self.core.handle_key(KeyEvent::new(key));
    }

    /// Send a key event with modifiers
    pub fn send_key_event(&mut self, event: KeyEvent) {
        self.core.handle_key(event);
    }

    /// Send multiple keys in sequence
    pub fn send_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.send_key(*key);
        }
    }

    /// Type text one character at a time
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send_key(Key::Char(c));
        }
    }

    pub fn send_command(&mut self, command: AppCommand) {
        self.core.handle_command(command);
    }

    /// Inject a data event (simulate an API response)
    pub fn send_data_event(&mut self, event: DataEvent) {
        self.core.handle_data_event(event);
    }

    /// Answer the pending fetch with the given products
    pub fn resolve_fetch(&mut self, products: Vec<Product>) {
        let state = self.state();
        let request_id = state
            .grid
            .latest_request
            .expect("No fetch is pending");
        let category = state.grid.category;
        self.send_data_event(DataEvent::ProductsLoaded {
            request_id,
            category,
            products,
        });
    }

    /// Fail the pending fetch
    pub fn fail_fetch(&mut self, error: &str) {
        let request_id = self
            .state()
            .grid
            .latest_request
            .expect("No fetch is pending");
        self.send_data_event(DataEvent::ProductsLoadFailed {
            request_id,
            error: error.to_string(),
        });
    }

    /// Get read-only access to current state
    pub fn state(&self) -> &AppState {
        self.core.state()
    }

    pub fn assert_should_quit(&self) {
        assert!(
            self.core.should_quit(),
            "App should be marked for quit but is not"
        );
    }

    pub fn assert_not_quit(&self) {
        assert!(
            !self.core.should_quit(),
            "App should NOT be marked for quit but is"
        );
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

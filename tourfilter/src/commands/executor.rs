use crate::background::{data_loader::DataLoader, BackgroundTaskManager};
use crate::events::AppCommand;
use crate::state::{AppState, FetchRequest, PopupField};

const LOAD_PRODUCTS_TASK: &str = "load_products";

/// Execute a command, spawning a catalog fetch when the host asks for one
pub fn execute_command(
    command: AppCommand,
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    if let Some(fetch) = update_state(command, state) {
        spawn_fetch(fetch, task_manager, data_loader);
    }
}

/// Start the fetch issued when the application boots
pub fn load_initial(
    state: &mut AppState,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let fetch = state.begin_fetch();
    spawn_fetch(fetch, task_manager, data_loader);
}

fn spawn_fetch(
    fetch: FetchRequest,
    task_manager: &mut BackgroundTaskManager,
    data_loader: &DataLoader,
) {
    let data_loader = data_loader.clone();
    let future = async move {
        data_loader.load_products(fetch).await;
    };
    task_manager.spawn_load_task(LOAD_PRODUCTS_TASK.to_string(), future);
}

/// Execute a command without spawning tasks (tests inject results as data events)
pub fn execute_command_sync(command: AppCommand, state: &mut AppState) {
    if let Some(fetch) = update_state(command, state) {
        tracing::debug!("Sync mode: fetch {} not started", fetch.request_id);
    }
}

/// Apply a command to the state, returning the fetch it requires
fn update_state(command: AppCommand, state: &mut AppState) -> Option<FetchRequest> {
    match command {
        // Simple state updates
        AppCommand::Quit => state.should_quit = true,
        AppCommand::ToggleHelp => state.help_visible = !state.help_visible,

        // Grid navigation
        AppCommand::SelectNext => state.grid.select_next(),
        AppCommand::SelectPrevious => state.grid.select_prev(),
        AppCommand::NavigateToTop => state.grid.select_first(),
        AppCommand::NavigateToBottom => state.grid.select_last(),

        // Data loading
        AppCommand::RefreshProducts => return Some(state.begin_fetch()),
        AppCommand::SwitchCategory(category) => return Some(state.change_category(category)),
        AppCommand::ClearFilters => state.apply_filters(None),

        // Filter popup
        AppCommand::OpenFilterPopup => state.open_filter_popup(),
        AppCommand::CloseFilterPopup => {
            if let Some(ref popup) = state.filter_popup {
                let event = popup.close();
                return state.handle_popup_events(vec![event]);
            }
        }
        AppCommand::PopupConfirm => {
            let events = match state.filter_popup {
                Some(ref mut popup) if popup.focused == PopupField::Reset => {
                    popup.reset();
                    Vec::new()
                }
                Some(ref popup) => popup.apply(),
                None => Vec::new(),
            };
            return state.handle_popup_events(events);
        }
        AppCommand::PopupAdjust { forward } => {
            let event = state
                .filter_popup
                .as_mut()
                .and_then(|popup| popup.adjust(forward));
            if let Some(event) = event {
                return state.handle_popup_events(vec![event]);
            }
        }
        AppCommand::PopupFocusNext => with_popup(state, |p| p.focus_next()),
        AppCommand::PopupFocusPrevious => with_popup(state, |p| p.focus_prev()),
        AppCommand::PopupToggleOption => with_popup(state, |p| p.toggle_option()),
        AppCommand::PopupAppendChar(c) => with_popup(state, |p| p.push_location_char(c)),
        AppCommand::PopupDeleteChar => with_popup(state, |p| p.pop_location_char()),
        AppCommand::PopupReset => with_popup(state, |p| p.reset()),
    }

    None
}

fn with_popup(state: &mut AppState, f: impl FnOnce(&mut crate::state::FilterPopupState)) {
    if let Some(popup) = state.filter_popup.as_mut() {
        f(popup);
    }
}

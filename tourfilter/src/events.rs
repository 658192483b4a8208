use catalog_api::endpoints::{products::Product, Category};

use crate::state::RequestId;

/// Commands to execute (user actions → state changes and background tasks)
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // Grid navigation
    SelectNext,
    SelectPrevious,
    NavigateToTop,
    NavigateToBottom,

    // Data loading
    RefreshProducts,
    SwitchCategory(Category),
    ClearFilters,

    // Filter popup
    OpenFilterPopup,
    CloseFilterPopup,
    PopupFocusNext,
    PopupFocusPrevious,
    PopupAdjust { forward: bool },
    PopupToggleOption,
    PopupAppendChar(char),
    PopupDeleteChar,
    PopupReset,
    /// Enter in the popup: resets when the Reset button is focused,
    /// applies otherwise
    PopupConfirm,

    // View toggles
    ToggleHelp,

    // System
    Quit,
}

/// Events from background tasks (responses to commands)
#[derive(Debug, Clone)]
pub enum DataEvent {
    ProductsLoaded {
        request_id: RequestId,
        category: Category,
        products: Vec<Product>,
    },
    ProductsLoadFailed {
        request_id: RequestId,
        error: String,
    },
}

use catalog_api::endpoints::Category;

use crate::events::AppCommand;
use crate::input::{Key, KeyEvent};
use crate::state::{AppState, FilterPopupState, PopupField};

/// Map user input (KeyEvent) to AppCommand based on current UI state
/// Returns None if the key should be ignored
pub fn handle_key_input(event: KeyEvent, state: &AppState) -> Option<AppCommand> {
    let key = event.key;

    // Priority 1: help is drawn on top of everything, including the popup
    if state.help_visible {
        return match key {
            Key::Char('?') | Key::Esc => Some(AppCommand::ToggleHelp),
            Key::Char('q') => Some(AppCommand::Quit),
            _ => None,
        };
    }

    // Priority 2: the filter popup is modal
    if let Some(ref popup) = state.filter_popup {
        return handle_popup_keys(event, popup);
    }

    match key {
        Key::Char('?') => Some(AppCommand::ToggleHelp),
        Key::Char('q') => Some(AppCommand::Quit),

        Key::Up | Key::Char('k') => Some(AppCommand::SelectPrevious),
        Key::Down | Key::Char('j') => Some(AppCommand::SelectNext),
        Key::Char('g') => Some(AppCommand::NavigateToTop),
        Key::Char('G') => Some(AppCommand::NavigateToBottom),

        Key::Char('f') | Key::Char('/') => Some(AppCommand::OpenFilterPopup),
        Key::Esc => state
            .grid
            .filters
            .is_some()
            .then_some(AppCommand::ClearFilters),
        Key::Char('r') => Some(AppCommand::RefreshProducts),

        Key::Char('[') | Key::Left => Some(AppCommand::SwitchCategory(state.category().prev())),
        Key::Char(']') | Key::Right => Some(AppCommand::SwitchCategory(state.category().next())),
        Key::Char(c @ '1'..='4') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            Category::ALL
                .get(index)
                .copied()
                .filter(|category| *category != state.category())
                .map(AppCommand::SwitchCategory)
        }

        _ => None,
    }
}

fn handle_popup_keys(event: KeyEvent, popup: &FilterPopupState) -> Option<AppCommand> {
    let editing_location = popup.focused == PopupField::Location;

    match event.key {
        Key::Char('r') if event.modifiers.ctrl => Some(AppCommand::PopupReset),
        Key::Esc => Some(AppCommand::CloseFilterPopup),
        Key::Enter => Some(AppCommand::PopupConfirm),
        Key::Tab | Key::Down => Some(AppCommand::PopupFocusNext),
        Key::BackTab | Key::Up => Some(AppCommand::PopupFocusPrevious),
        Key::Left => Some(AppCommand::PopupAdjust { forward: false }),
        Key::Right => Some(AppCommand::PopupAdjust { forward: true }),
        // '?' is a literal character while typing a location
        Key::Char('?') if !editing_location => Some(AppCommand::ToggleHelp),
        Key::Backspace if editing_location => Some(AppCommand::PopupDeleteChar),
        Key::Char(c) if editing_location && !event.modifiers.ctrl => {
            Some(AppCommand::PopupAppendChar(c))
        }
        Key::Char(' ') => match popup.focused {
            PopupField::Reset => Some(AppCommand::PopupReset),
            PopupField::Apply => Some(AppCommand::PopupConfirm),
            _ => Some(AppCommand::PopupToggleOption),
        },
        Key::Char('h') => Some(AppCommand::PopupAdjust { forward: false }),
        Key::Char('l') => Some(AppCommand::PopupAdjust { forward: true }),
        Key::Char('j') => Some(AppCommand::PopupFocusNext),
        Key::Char('k') => Some(AppCommand::PopupFocusPrevious),
        _ => None,
    }
}

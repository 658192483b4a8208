pub mod empty_state;
pub mod filter_popup;
pub mod help_bar;
pub mod help_popup;
pub mod loading_indicator;
pub mod popup;
pub mod screen_title;

pub mod empty_state;
pub mod help_bar;
pub mod help_popup;
pub mod screen_title;
pub mod search_input;
pub mod tag_panel;

pub mod app;
mod layout;
pub mod prompt_view;
pub mod rsvp_view;
pub mod theme;
pub mod views;

//! User details screen.
//!
//! Simplified MVVM split:
//! - view_model.rs: edit-form state and the save command
//! - view.rs: Leptos page (profile cards, activity log, edit form)

mod view;
mod view_model;

pub use view::UserDetailsPage;

//! Service lead details screen.
//!
//! Simplified MVVM split:
//! - view_model.rs: update-stage dialog state and the save command
//! - actions.rs: role-gated action buttons plus the dialog itself
//! - view.rs: the page (tracker, info cards, documents)

mod actions;
mod view;
mod view_model;

pub use view::ServiceLeadDetailsPage;

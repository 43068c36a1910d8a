//! Store model creation form
//!
//! MVVM split as in the other details forms:
//! - model.rs: request body and API call
//! - view_model.rs: commands and derived state
//! - view.rs: Leptos components (pure UI)

mod model;
mod view;
mod view_model;

pub use view::{CreateModelForm, CreateModelPage};
pub use view_model::CreateModelVm;

pub mod api;
pub mod context;
pub mod flow;
pub mod ui;

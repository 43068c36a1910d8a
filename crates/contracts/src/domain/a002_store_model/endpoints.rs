//! Paths of the store admin API and of the console routes for models.
//!
//! Store identifiers are inserted as given; callers escape them when they
//! come from untrusted input.

/// Brand stores visible to the current admin
pub const STORES_API_PATH: &str = "/admin/stores";

/// API collection for a store's models (GET lists, POST creates)
pub fn models_api_path(store_id: &str) -> String {
    format!("/admin/store/{}/models", store_id)
}

/// Console route of the models listing
pub fn models_listing_route(store_id: &str) -> String {
    format!("/admin/{}/models", store_id)
}

/// Console route of the model creation form
pub fn create_model_route(store_id: &str) -> String {
    format!("/admin/{}/models/create", store_id)
}

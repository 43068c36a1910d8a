use crate::shared::config::AdminConfig;
use contracts::domain::a002_store_model::aggregate::{StoreModel, StoreModelsResponse};
use contracts::domain::a002_store_model::endpoints::models_api_path;
use gloo_net::http::Request;

/// Load the models of a store
pub async fn fetch_models(config: &AdminConfig, store_id: &str) -> Result<Vec<StoreModel>, String> {
    let url = config.api_url(&models_api_path(&urlencoding::encode(store_id)));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading models failed: {}", response.status()));
    }

    response
        .json::<StoreModelsResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?
        .into_models()
}

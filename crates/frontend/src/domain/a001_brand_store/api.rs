use crate::shared::config::AdminConfig;
use contracts::domain::a001_brand_store::aggregate::BrandStore;
use contracts::domain::a002_store_model::endpoints::STORES_API_PATH;
use gloo_net::http::Request;

/// Fetch the brand stores visible to the current admin
pub async fn fetch_stores(config: &AdminConfig) -> Result<Vec<BrandStore>, String> {
    let response = Request::get(&config.api_url(STORES_API_PATH))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading stores failed: {}", response.status()));
    }

    response
        .json::<Vec<BrandStore>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

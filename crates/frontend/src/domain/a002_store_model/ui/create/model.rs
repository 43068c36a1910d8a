//! Store model creation - API layer

use crate::domain::a002_store_model::flow::SubmitError;
use crate::shared::config::AdminConfig;
use contracts::domain::a002_store_model::aggregate::{CreateStoreModelForm, StoreModelDraft};
use contracts::domain::a002_store_model::endpoints::models_api_path;
use gloo_net::http::Request;

/// Form-urlencoded body carrying the anti-forgery token and the draft
pub fn encode_create_form(csrf_token: &str, draft: &StoreModelDraft) -> Result<String, SubmitError> {
    serde_qs::to_string(&CreateStoreModelForm::new(csrf_token, draft))
        .map_err(|e| SubmitError::Transport(format!("Failed to encode form: {}", e)))
}

/// POST the draft to the store's models collection
///
/// Any non-2xx status is reported as `SubmitError::Rejected`.
pub async fn create_model(
    config: &AdminConfig,
    store_id: &str,
    draft: &StoreModelDraft,
) -> Result<(), SubmitError> {
    let body = encode_create_form(&config.csrf_token, draft)?;
    let url = config.api_url(&models_api_path(&urlencoding::encode(store_id)));

    let response = Request::post(&url)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| SubmitError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| SubmitError::Transport(format!("Failed to send request: {}", e)))?;

    if !response.ok() {
        return Err(SubmitError::Rejected {
            status: response.status(),
            status_text: response.status_text(),
        });
    }

    Ok(())
}

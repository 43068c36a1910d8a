use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::DraftError;

// ============================================================================
// Aggregate
// ============================================================================

/// Model registered in a brand store
///
/// Field names follow the store admin API, which emits kebab-case keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreModel {
    #[serde(rename = "api-key", default)]
    pub api_key: String,

    #[serde(rename = "created-at")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "modified-at", default)]
    pub modified_at: Option<DateTime<Utc>>,

    pub name: String,
}

impl StoreModel {
    /// Local record inserted before the server confirms the creation
    pub fn tentative(draft: &StoreModelDraft, now: DateTime<Utc>) -> Self {
        Self {
            api_key: draft.api_key.clone(),
            created_at: now,
            modified_at: Some(now),
            name: draft.name.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Model being edited in the creation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreModelDraft {
    pub name: String,
    pub api_key: String,
}

impl StoreModelDraft {
    pub fn new(name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            api_key: api_key.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.api_key.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.api_key.clear();
    }
}

/// Form body of `POST /admin/store/{id}/models`
#[derive(Debug, Clone, Serialize)]
pub struct CreateStoreModelForm<'a> {
    pub csrf_token: &'a str,
    pub name: &'a str,
    pub api_key: &'a str,
}

impl<'a> CreateStoreModelForm<'a> {
    pub fn new(csrf_token: &'a str, draft: &'a StoreModelDraft) -> Self {
        Self {
            csrf_token,
            name: &draft.name,
            api_key: &draft.api_key,
        }
    }
}

/// Response of `GET /admin/store/{id}/models`
#[derive(Debug, Clone, Deserialize)]
pub struct StoreModelsResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<StoreModel>,
    #[serde(default)]
    pub message: Option<String>,
}

impl StoreModelsResponse {
    pub fn into_models(self) -> Result<Vec<StoreModel>, String> {
        if self.success {
            Ok(self.data)
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "Unable to load models".to_string()))
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Exact, case-sensitive lookup of a model name
pub fn model_name_exists(name: &str, models: &[StoreModel]) -> bool {
    models.iter().any(|model| model.name == name)
}

/// Check that a draft can be submitted against the current models
pub fn validate_draft(draft: &StoreModelDraft, models: &[StoreModel]) -> Result<(), DraftError> {
    if draft.name.is_empty() {
        return Err(DraftError::EmptyName);
    }
    if model_name_exists(&draft.name, models) {
        return Err(DraftError::DuplicateName(draft.name.clone()));
    }
    Ok(())
}

/// Models whose name contains `query`, ignoring case
///
/// An empty or blank query keeps every model.
pub fn filter_models(models: &[StoreModel], query: &str) -> Vec<StoreModel> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return models.to_vec();
    }
    models
        .iter()
        .filter(|model| model.name.to_lowercase().contains(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn model(name: &str) -> StoreModel {
        StoreModel {
            api_key: format!("{}-key", name),
            created_at: Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap(),
            modified_at: None,
            name: name.to_string(),
        }
    }

    #[test]
    fn test_model_name_exists_is_exact_and_case_sensitive() {
        let models = vec![model("display-123"), model("kiosk")];

        assert!(model_name_exists("kiosk", &models));
        assert!(!model_name_exists("Kiosk", &models));
        assert!(!model_name_exists("kios", &models));
        assert!(!model_name_exists("kiosk", &[]));
    }

    #[test]
    fn test_validate_draft() {
        let models = vec![model("kiosk")];

        assert_eq!(
            validate_draft(&StoreModelDraft::new("", "k"), &models),
            Err(DraftError::EmptyName)
        );
        assert_eq!(
            validate_draft(&StoreModelDraft::new("kiosk", "k"), &models),
            Err(DraftError::DuplicateName("kiosk".into()))
        );
        assert_eq!(validate_draft(&StoreModelDraft::new("foo", ""), &models), Ok(()));
    }

    #[test]
    fn test_duplicate_name_message() {
        let err = DraftError::DuplicateName("kiosk".into());
        assert_eq!(err.to_string(), "Model kiosk already exists");
    }

    #[test]
    fn test_tentative_record_copies_draft() {
        let now = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        let record = StoreModel::tentative(&StoreModelDraft::new("foo", "k"), now);

        assert_eq!(record.name, "foo");
        assert_eq!(record.api_key, "k");
        assert_eq!(record.created_at, now);
        assert_eq!(record.modified_at, Some(now));
    }

    #[test]
    fn test_draft_clear() {
        let mut draft = StoreModelDraft::new("foo", "k");
        assert!(!draft.is_empty());

        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, StoreModelDraft::default());
    }

    #[test]
    fn test_filter_models() {
        let models = vec![model("Display-1"), model("kiosk"), model("display-2")];

        let names = |list: Vec<StoreModel>| list.into_iter().map(|m| m.name).collect::<Vec<_>>();

        assert_eq!(names(filter_models(&models, "DISPLAY")), vec!["Display-1", "display-2"]);
        assert_eq!(names(filter_models(&models, "  ")), vec!["Display-1", "kiosk", "display-2"]);
        assert!(filter_models(&models, "router").is_empty());
    }

    #[test]
    fn test_models_response_parsing() {
        let json = r#"{
            "success": true,
            "data": [
                {
                    "api-key": "abc",
                    "created-at": "2024-03-15T14:02:26Z",
                    "modified-at": null,
                    "name": "kiosk"
                },
                {
                    "created-at": "2024-03-16T08:00:00+00:00",
                    "modified-at": "2024-03-17T08:00:00Z",
                    "name": "display-123"
                }
            ]
        }"#;

        let models = serde_json::from_str::<StoreModelsResponse>(json)
            .unwrap()
            .into_models()
            .unwrap();

        assert_eq!(models.len(), 2);
        assert_eq!(models[0].api_key, "abc");
        assert_eq!(models[0].modified_at, None);
        assert_eq!(models[1].api_key, "");
        assert!(models[1].modified_at.is_some());
    }

    #[test]
    fn test_models_response_failure() {
        let failed: StoreModelsResponse =
            serde_json::from_str(r#"{"success": false, "message": "Store not found"}"#).unwrap();
        assert_eq!(failed.into_models(), Err("Store not found".to_string()));

        let bare: StoreModelsResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(bare.into_models(), Err("Unable to load models".to_string()));
    }

    #[test]
    fn test_model_serializes_with_api_field_names() {
        let value = serde_json::to_value(model("kiosk")).unwrap();

        assert_eq!(value["api-key"], "kiosk-key");
        assert_eq!(value["name"], "kiosk");
        assert!(value.get("created-at").is_some());
        assert!(value.get("api_key").is_none());
    }
}

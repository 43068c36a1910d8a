use super::api;
use super::flow::{ModelCreationFlow, StoreModelsState};
use crate::shared::config::AdminConfig;
use contracts::domain::a002_store_model::aggregate::{model_name_exists, StoreModel, StoreModelDraft};
use leptos::prelude::*;

/// Models of the current store plus the state of the creation form
///
/// Provided once at the application root. Views read the signals; writes go
/// through the methods below so that the optimistic insert and its rollback
/// stay in one place.
#[derive(Clone, Copy)]
pub struct StoreModelsContext {
    /// Store the cached models belong to
    pub models_store: RwSignal<Option<String>>,
    pub models: RwSignal<Vec<StoreModel>>,
    /// Record inserted by the in-flight submission, with the store it was
    /// inserted for
    tentative: RwSignal<Option<(String, StoreModel)>>,
    pub draft: RwSignal<StoreModelDraft>,
    pub flow: RwSignal<ModelCreationFlow>,
    pub show_notification: RwSignal<bool>,
    pub show_error_notification: RwSignal<bool>,
}

impl StoreModelsContext {
    pub fn new() -> Self {
        Self {
            models_store: RwSignal::new(None),
            models: RwSignal::new(Vec::new()),
            tentative: RwSignal::new(None),
            draft: RwSignal::new(StoreModelDraft::default()),
            flow: RwSignal::new(ModelCreationFlow::new()),
            show_notification: RwSignal::new(false),
            show_error_notification: RwSignal::new(false),
        }
    }

    /// Whether the cached list was loaded for `store_id`
    pub fn holds_models_of(&self, store_id: &str) -> bool {
        self.models_store
            .with_untracked(|loaded| loaded.as_deref() == Some(store_id))
    }

    /// Whether the form for `store_id` may be submitted right now
    ///
    /// Uniqueness is only meaningful against this store's own models, so the
    /// answer is `false` until they are loaded.
    pub fn can_submit_for(&self, store_id: &str) -> bool {
        self.holds_models_of(store_id) && self.flow.get_untracked().can_submit(self)
    }

    /// Replace the cached list with the one loaded from the server
    ///
    /// While a submission for the same store is in flight its tentative record
    /// stays on top of the loaded list until the request settles.
    pub fn apply_loaded_models(&self, store_id: &str, mut models: Vec<StoreModel>) {
        if self.flow.get_untracked().is_submitting() {
            if let Some((_, model)) = self
                .tentative
                .get_untracked()
                .filter(|(store, _)| store == store_id)
            {
                if !model_name_exists(&model.name, &models) {
                    log::debug!("Keeping tentative model '{}' over the loaded list", model.name);
                    models.insert(0, model);
                }
            }
        } else {
            self.tentative.set(None);
        }
        self.models_store.set(Some(store_id.to_string()));
        self.models.set(models);
    }

    /// Fetch the models of `store_id` into the cache
    pub fn load_models(&self, config: AdminConfig, store_id: String, error: Option<WriteSignal<Option<String>>>) {
        let ctx = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_models(&config, &store_id).await {
                Ok(models) => {
                    ctx.apply_loaded_models(&store_id, models);
                    if let Some(error) = error {
                        error.set(None);
                    }
                }
                Err(e) => {
                    log::error!("Failed to load models of store {}: {}", store_id, e);
                    if let Some(error) = error {
                        error.set(Some(e));
                    }
                }
            }
        });
    }

    pub fn set_draft_name(&self, name: String) {
        self.draft.update(|d| d.name = name);
    }

    pub fn set_draft_api_key(&self, api_key: String) {
        self.draft.update(|d| d.api_key = api_key);
    }

    pub fn dismiss_error(&self) {
        self.show_error_notification.set(false);
    }

    /// Run a transition of the creation flow and store the new state
    pub fn with_flow<R>(&self, f: impl FnOnce(&mut ModelCreationFlow, &Self) -> R) -> R {
        let mut flow = self.flow.get_untracked();
        let result = f(&mut flow, self);
        self.flow.set(flow);
        result
    }
}

impl Default for StoreModelsContext {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreModelsState for StoreModelsContext {
    fn with_models<R>(&self, f: impl FnOnce(&[StoreModel]) -> R) -> R {
        self.models.with_untracked(|models| f(models.as_slice()))
    }

    fn prepend_model(&self, store_id: &str, model: StoreModel) {
        self.tentative.set(Some((store_id.to_string(), model.clone())));
        self.models.update(|models| models.insert(0, model));
    }

    fn remove_models_named(&self, name: &str) {
        // The cache may hold another store's models by now
        let in_cache = self
            .tentative
            .with_untracked(|t| t.as_ref().map_or(true, |(store, _)| self.holds_models_of(store)));
        self.tentative.set(None);
        if in_cache {
            self.models.update(|models| models.retain(|m| m.name != name));
        }
    }

    fn draft(&self) -> StoreModelDraft {
        self.draft.get_untracked()
    }

    fn reset_draft(&self) {
        self.draft.update(|d| d.clear());
    }

    fn set_success_visible(&self, visible: bool) {
        self.show_notification.set(visible);
    }

    fn set_error_visible(&self, visible: bool) {
        self.show_error_notification.set(visible);
    }
}

/// Access the store models context
pub fn use_store_models() -> StoreModelsContext {
    use_context::<StoreModelsContext>().expect("StoreModelsContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_store_model::flow::{PendingSubmission, SubmitError, SubmitOutcome};
    use chrono::{TimeZone, Utc};

    fn model(name: &str) -> StoreModel {
        StoreModel {
            api_key: "key".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            modified_at: None,
            name: name.into(),
        }
    }

    fn names(ctx: &StoreModelsContext) -> Vec<String> {
        ctx.models
            .with_untracked(|models| models.iter().map(|m| m.name.clone()).collect())
    }

    fn begin(ctx: &StoreModelsContext, store_id: &str) -> PendingSubmission {
        ctx.with_flow(|flow, ctx| flow.begin(store_id, ctx, Utc::now()))
            .unwrap()
    }

    #[test]
    fn test_holds_models_of_loaded_store() {
        let ctx = StoreModelsContext::new();
        assert!(!ctx.holds_models_of("acme"));

        ctx.apply_loaded_models("acme", vec![model("kiosk")]);
        assert!(ctx.holds_models_of("acme"));
        assert!(!ctx.holds_models_of("globex"));
        assert_eq!(names(&ctx), vec!["kiosk"]);
    }

    #[test]
    fn test_submit_waits_for_store_models() {
        let ctx = StoreModelsContext::new();
        ctx.set_draft_name("foo".into());
        assert!(!ctx.can_submit_for("acme"));

        ctx.apply_loaded_models("globex", vec![]);
        assert!(!ctx.can_submit_for("acme"));
        assert!(ctx.can_submit_for("globex"));
    }

    #[test]
    fn test_with_flow_stores_new_state() {
        let ctx = StoreModelsContext::new();
        ctx.apply_loaded_models("acme", vec![]);
        ctx.set_draft_name("foo".into());

        begin(&ctx, "acme");

        assert!(ctx.flow.get_untracked().is_submitting());
        assert!(!ctx.can_submit_for("acme"));
        assert_eq!(names(&ctx), vec!["foo"]);
    }

    #[test]
    fn test_rejected_submission_rolls_back_signals() {
        let ctx = StoreModelsContext::new();
        ctx.apply_loaded_models("acme", vec![model("kiosk")]);
        ctx.set_draft_name("foo".into());
        ctx.set_draft_api_key("k".into());

        let pending = begin(&ctx, "acme");
        assert_eq!(names(&ctx), vec!["foo", "kiosk"]);

        let rejected = Err(SubmitError::Rejected {
            status: 500,
            status_text: "Internal Server Error".into(),
        });
        ctx.with_flow(|flow, ctx| flow.settle(pending, rejected, ctx));

        assert_eq!(names(&ctx), vec!["kiosk"]);
        assert_eq!(ctx.draft.get_untracked(), StoreModelDraft::new("foo", "k"));
        assert!(ctx.show_error_notification.get_untracked());
        assert!(!ctx.show_notification.get_untracked());

        ctx.dismiss_error();
        assert!(!ctx.show_error_notification.get_untracked());
    }

    #[test]
    fn test_load_during_submission_keeps_uniqueness_after_failure() {
        let ctx = StoreModelsContext::new();
        ctx.set_draft_name("foo".into());
        let pending = begin(&ctx, "acme");

        ctx.apply_loaded_models("acme", vec![model("kiosk")]);
        assert!(ctx.holds_models_of("acme"));
        assert_eq!(names(&ctx), vec!["foo", "kiosk"]);

        let failure = Err(SubmitError::Transport("offline".into()));
        ctx.with_flow(|flow, ctx| flow.settle(pending, failure, ctx));
        assert_eq!(names(&ctx), vec!["kiosk"]);

        ctx.set_draft_name("kiosk".into());
        assert!(!ctx.can_submit_for("acme"));
    }

    #[test]
    fn test_load_during_submission_already_listing_the_model() {
        let ctx = StoreModelsContext::new();
        ctx.apply_loaded_models("acme", vec![]);
        ctx.set_draft_name("foo".into());
        let pending = begin(&ctx, "acme");

        ctx.apply_loaded_models("acme", vec![model("foo"), model("kiosk")]);
        assert_eq!(names(&ctx), vec!["foo", "kiosk"]);

        let outcome = ctx.with_flow(|flow, ctx| flow.settle(pending, Ok(()), ctx));
        assert!(matches!(outcome, SubmitOutcome::Created { listing_route: Some(_) }));
        assert_eq!(names(&ctx), vec!["foo", "kiosk"]);
    }

    #[test]
    fn test_rollback_leaves_other_store_models_alone() {
        let ctx = StoreModelsContext::new();
        ctx.apply_loaded_models("acme", vec![]);
        ctx.set_draft_name("kiosk".into());
        let pending = begin(&ctx, "acme");

        // Listing of another store opened while the request is in flight
        ctx.apply_loaded_models("globex", vec![model("kiosk")]);
        assert_eq!(names(&ctx), vec!["kiosk"]);

        let failure = Err(SubmitError::Transport("offline".into()));
        ctx.with_flow(|flow, ctx| flow.settle(pending, failure, ctx));

        assert!(ctx.holds_models_of("globex"));
        assert_eq!(names(&ctx), vec!["kiosk"]);
    }

    #[test]
    fn test_success_after_cancel_keeps_typed_draft() {
        let ctx = StoreModelsContext::new();
        ctx.apply_loaded_models("acme", vec![]);
        ctx.set_draft_name("foo".into());
        let pending = begin(&ctx, "acme");

        ctx.with_flow(|flow, ctx| flow.cancel(ctx));
        assert!(ctx.draft.get_untracked().is_empty());
        ctx.set_draft_name("bar".into());

        let outcome = ctx.with_flow(|flow, ctx| flow.settle(pending, Ok(()), ctx));

        assert_eq!(outcome, SubmitOutcome::Created { listing_route: None });
        assert_eq!(ctx.draft.get_untracked().name, "bar");
        assert_eq!(names(&ctx), vec!["foo"]);
        assert!(ctx.show_notification.get_untracked());
    }
}

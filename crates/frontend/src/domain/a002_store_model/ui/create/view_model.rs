//! Store model creation - ViewModel
//!
//! Commands of the creation form. The draft, the models list and the
//! notification flags live in `StoreModelsContext`; transitions go through
//! `ModelCreationFlow`.

use super::model;
use crate::domain::a002_store_model::context::{use_store_models, StoreModelsContext};
use crate::domain::a002_store_model::flow::SubmitOutcome;
use crate::layout::global_context::use_admin_context;
use crate::shared::config::{use_admin_config, AdminConfig};
use crate::shared::random_key::generate_api_key;
use chrono::Utc;
use contracts::domain::a002_store_model::aggregate::model_name_exists;
use contracts::domain::a002_store_model::endpoints::models_listing_route;
use leptos::prelude::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct CreateModelVm {
    pub store_id: Signal<String>,
    pub store_name: Signal<Option<String>>,
    pub ctx: StoreModelsContext,
    config: AdminConfig,
}

impl CreateModelVm {
    pub fn new(store_id: Signal<String>) -> Self {
        let ctx = use_store_models();
        let store_name = use_admin_context().store_name(store_id);
        let config = use_admin_config();

        ctx.with_flow(|flow, _| flow.reopen());

        // Opened directly: the uniqueness check needs this store's models
        let id = store_id.get_untracked();
        if !ctx.holds_models_of(&id) {
            ctx.load_models(config.clone(), id, None);
        }

        Self {
            store_id,
            store_name,
            ctx,
            config,
        }
    }

    // === Derived signals ===

    /// Message under the name field while the name is taken
    pub fn name_error(&self) -> Signal<Option<String>> {
        let ctx = self.ctx;
        Signal::derive(move || {
            let name = ctx.draft.with(|d| d.name.clone());
            ctx.models
                .with(|models| model_name_exists(&name, models))
                .then(|| format!("Model {} already exists", name))
        })
    }

    pub fn is_submit_disabled(&self) -> Signal<bool> {
        let ctx = self.ctx;
        let store_id = self.store_id;
        Signal::derive(move || {
            // Subscribe to everything the check reads
            ctx.models_store.track();
            ctx.draft.track();
            ctx.models.track();
            ctx.flow.track();
            !ctx.can_submit_for(&store_id.get())
        })
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let flow = self.ctx.flow;
        Signal::derive(move || flow.get().is_submitting())
    }

    // === Commands ===

    pub fn set_name(&self, name: String) {
        self.ctx.set_draft_name(name);
    }

    pub fn generate_key(&self) {
        self.ctx.set_draft_api_key(generate_api_key());
    }

    /// Reset the form and go back to the listing
    pub fn cancel(&self, navigate: Rc<dyn Fn(&str)>) {
        self.ctx.with_flow(|flow, ctx| flow.cancel(ctx));
        navigate(&models_listing_route(&self.store_id.get_untracked()));
    }

    /// Insert the model optimistically, POST it, then confirm or roll back
    pub fn submit(&self, navigate: Rc<dyn Fn(&str)>) {
        let ctx = self.ctx;
        let store_id = self.store_id.get_untracked();
        if !ctx.holds_models_of(&store_id) {
            log::warn!("Model submission refused: models of store {} not loaded yet", store_id);
            return;
        }

        let pending = match ctx.with_flow(|flow, ctx| flow.begin(&store_id, ctx, Utc::now())) {
            Ok(pending) => pending,
            Err(e) => {
                log::warn!("Model submission refused: {}", e);
                return;
            }
        };
        log::info!(
            "Creating model '{}' in store {}",
            pending.draft().name,
            pending.store_id()
        );

        let config = self.config.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let response = model::create_model(&config, pending.store_id(), pending.draft()).await;
            let name = pending.draft().name.clone();

            match ctx.with_flow(|flow, ctx| flow.settle(pending, response, ctx)) {
                SubmitOutcome::Created { listing_route } => {
                    log::info!("Model '{}' created", name);
                    if let Some(route) = listing_route {
                        navigate(&route);
                    }
                }
                SubmitOutcome::Failed(e) => {
                    log::error!("Unable to create model '{}': {}", name, e);
                }
            }
        });
    }
}

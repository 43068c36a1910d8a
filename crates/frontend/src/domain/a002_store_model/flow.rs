//! Model creation flow
//!
//! Submitting a model is a two-phase operation:
//! - `begin`: validate the draft and prepend a tentative record to the
//!   shared models list (optimistic write), returning a `PendingSubmission`
//! - `settle`: confirm (reset the draft, show the success notification) or
//!   roll back (drop the tentative record, show the error notification)
//!
//! A form cancelled while its request is in flight is still settled, but the
//! confirmation leaves any newer draft alone and does not navigate.
//!
//! The flow never touches signals directly; it works through the
//! `StoreModelsState` trait so the transitions can be exercised without a
//! browser.

use chrono::{DateTime, Utc};
use contracts::domain::a002_store_model::aggregate::{validate_draft, StoreModel, StoreModelDraft};
use contracts::domain::a002_store_model::endpoints::models_listing_route;
use contracts::domain::a002_store_model::errors::DraftError;
use thiserror::Error;

/// Failure of the creation request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("{status} {status_text}")]
    Rejected { status: u16, status_text: String },

    #[error("Unable to create a new model: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// State the creation form shares with the rest of the console
pub trait StoreModelsState {
    fn with_models<R>(&self, f: impl FnOnce(&[StoreModel]) -> R) -> R;
    /// Insert `model` first; it belongs to `store_id`
    fn prepend_model(&self, store_id: &str, model: StoreModel);
    fn remove_models_named(&self, name: &str);

    fn draft(&self) -> StoreModelDraft;
    fn reset_draft(&self);

    fn set_success_visible(&self, visible: bool);
    fn set_error_visible(&self, visible: bool);
}

/// Token of a tentative insert; required to confirm or roll it back
#[derive(Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    store_id: String,
    draft: StoreModelDraft,
}

impl PendingSubmission {
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    pub fn draft(&self) -> &StoreModelDraft {
        &self.draft
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// `listing_route` is `None` when the form was cancelled meanwhile
    Created { listing_route: Option<String> },
    Failed(SubmitError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModelCreationFlow {
    state: SubmissionState,
    cancelled: bool,
}

impl ModelCreationFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Whether the submit button should be enabled
    pub fn can_submit(&self, state: &impl StoreModelsState) -> bool {
        self.check(&state.draft(), state).is_ok()
    }

    fn check(&self, draft: &StoreModelDraft, state: &impl StoreModelsState) -> Result<(), DraftError> {
        if self.is_submitting() {
            return Err(DraftError::SubmissionInFlight);
        }
        state.with_models(|models| validate_draft(draft, models))
    }

    /// Tentative apply: insert the draft at the front of the models list
    pub fn begin(
        &mut self,
        store_id: &str,
        state: &impl StoreModelsState,
        now: DateTime<Utc>,
    ) -> Result<PendingSubmission, DraftError> {
        let draft = state.draft();
        self.check(&draft, state)?;

        state.prepend_model(store_id, StoreModel::tentative(&draft, now));
        self.state = SubmissionState::Submitting;
        self.cancelled = false;

        Ok(PendingSubmission {
            store_id: store_id.to_string(),
            draft,
        })
    }

    /// Confirm or roll back the insert made by `begin`
    pub fn settle(
        &mut self,
        pending: PendingSubmission,
        response: Result<(), SubmitError>,
        state: &impl StoreModelsState,
    ) -> SubmitOutcome {
        match response {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                if state.draft() == pending.draft {
                    state.reset_draft();
                }
                state.set_error_visible(false);
                state.set_success_visible(true);
                let listing_route =
                    (!self.cancelled).then(|| models_listing_route(&pending.store_id));
                self.cancelled = false;
                SubmitOutcome::Created { listing_route }
            }
            Err(err) => {
                self.state = SubmissionState::Failed;
                self.cancelled = false;
                state.remove_models_named(&pending.draft.name);
                state.set_error_visible(true);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Abandon the form: clear the draft and hide the error notification
    ///
    /// An in-flight submission keeps its state so that its response is still
    /// settled.
    pub fn cancel(&mut self, state: &impl StoreModelsState) {
        state.reset_draft();
        state.set_error_visible(false);
        if self.is_submitting() {
            self.cancelled = true;
        } else {
            self.state = SubmissionState::Idle;
        }
    }

    /// Called when the form is shown again after a completed submission
    pub fn reopen(&mut self) {
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }
}

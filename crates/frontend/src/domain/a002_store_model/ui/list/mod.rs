use crate::domain::a002_store_model::context::use_store_models;
use crate::layout::global_context::use_admin_context;
use crate::shared::config::use_admin_config;
use crate::shared::date_utils::{format_optional_timestamp, format_timestamp};
use contracts::domain::a002_store_model::aggregate::{filter_models, StoreModel};
use contracts::domain::a002_store_model::endpoints::create_model_route;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use thaw::*;

#[derive(Clone, Debug, PartialEq)]
pub struct StoreModelRow {
    pub name: String,
    pub api_key: String,
    pub created_at: String,
    pub modified_at: String,
}

impl From<StoreModel> for StoreModelRow {
    fn from(m: StoreModel) -> Self {
        Self {
            created_at: format_timestamp(&m.created_at),
            modified_at: format_optional_timestamp(m.modified_at.as_ref()),
            name: m.name,
            api_key: m.api_key,
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn StoreModelsList() -> impl IntoView {
    let ctx = use_store_models();
    let config = use_admin_config();
    let params = use_params_map();
    let store_id = Signal::derive(move || params.read().get("id").unwrap_or_default());
    let store_name = use_admin_context().store_name(store_id);
    let navigate = use_navigate();

    let (error, set_error) = signal::<Option<String>>(None);
    let search = RwSignal::new(String::new());

    let rows = Memo::new(move |_| {
        let query = search.get();
        ctx.models.with(|models| {
            filter_models(models, &query)
                .into_iter()
                .map(StoreModelRow::from)
                .collect::<Vec<_>>()
        })
    });

    // Reload whenever the route switches to another store
    Effect::new(move |_| {
        ctx.load_models(config.clone(), store_id.get(), Some(set_error));
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || store_name.get().map(|n| format!("{} models", n)).unwrap_or_else(|| "Models".to_string())}
                    </h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| navigate(&create_model_route(&store_id.get_untracked()), Default::default())
                    >
                        "Create new model"
                    </button>
                </div>
            </div>

            <Show when=move || ctx.show_notification.get()>
                <MessageBar intent=MessageBarIntent::Success>
                    <span>"New model created"</span>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=move |_| ctx.show_notification.set(false)
                    >
                        "Dismiss"
                    </Button>
                </MessageBar>
            </Show>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <div class="filter-panel">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search models"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>

            <table class="table__data">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"API key"</th>
                        <th>"Created"</th>
                        <th>"Modified"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || rows.get()
                        key=|row| row.name.clone()
                        children=|row| view! {
                            <tr>
                                <td>{row.name}</td>
                                <td class="api-key">{row.api_key}</td>
                                <td>{row.created_at}</td>
                                <td>{row.modified_at}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>

            <Show when=move || rows.with(|r| r.is_empty())>
                <p class="empty-state">"No models"</p>
            </Show>
        </div>
    }
}

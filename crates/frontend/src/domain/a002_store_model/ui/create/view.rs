use super::view_model::CreateModelVm;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;
use thaw::*;

/// Route entry: resolves the store from `/admin/:id/models/create`
#[component]
pub fn CreateModelPage() -> impl IntoView {
    let params = use_params_map();
    let store_id = Signal::derive(move || params.read().get("id").unwrap_or_default());

    let navigate = use_navigate();
    let navigate: Rc<dyn Fn(&str)> = Rc::new(move |path: &str| navigate(path, Default::default()));

    view! { <CreateModelForm store_id=store_id navigate=navigate /> }
}

#[component]
pub fn CreateModelForm(store_id: Signal<String>, navigate: Rc<dyn Fn(&str)>) -> impl IntoView {
    let vm = CreateModelVm::new(store_id);
    let ctx = vm.ctx;
    let store_name = vm.store_name;
    let name_error = vm.name_error();
    let is_submit_disabled = vm.is_submit_disabled();
    let is_submitting = vm.is_submitting();

    let on_submit = {
        let vm = vm.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.submit(navigate.clone());
        }
    };

    view! {
        <div class="details-container store-model-create">
            <div class="details-header">
                <h3>"Create new model"</h3>
            </div>

            {move || store_name.get().map(|name| view! {
                <p class="store-brand">"Brand"<br />{name}</p>
            })}

            <Show when=move || ctx.show_error_notification.get()>
                <MessageBar intent=MessageBarIntent::Error>
                    <span>"Unable to create model"</span>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        size=ButtonSize::Small
                        on_click=move |_| ctx.dismiss_error()
                    >
                        "Dismiss"
                    </Button>
                </MessageBar>
            </Show>

            <form class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="model-name-field">"Name *"</label>
                    <input
                        type="text"
                        id="model-name-field"
                        placeholder="e.g. display-name-123"
                        required=true
                        prop:value=move || ctx.draft.with(|d| d.name.clone())
                        on:input={
                            let vm = vm.clone();
                            move |ev| vm.set_name(event_target_value(&ev))
                        }
                    />
                    <p class="form-help">
                        "Name should contain lowercase alphanumeric characters and hyphens only"
                    </p>
                    {move || name_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                </div>

                <div class="form-group">
                    <label for="api-key-field">"API key"</label>
                    <input
                        type="text"
                        id="api-key-field"
                        class="read-only-dark"
                        readonly=true
                        placeholder="yx6dnxsWQ3XUB5gza8idCuMvwmxtk1xBpa9by8TuMit5dgGnv"
                        prop:value=move || ctx.draft.with(|d| d.api_key.clone())
                    />
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click={
                            let vm = vm.clone();
                            move |_| vm.generate_key()
                        }
                    >
                        "Generate key"
                    </button>
                </div>

                <p class="form-note">"* Mandatory field"</p>

                <div class="details-actions">
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click={
                            let vm = vm.clone();
                            let navigate = navigate.clone();
                            move |_| vm.cancel(navigate.clone())
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_submit_disabled.get()
                    >
                        {move || if is_submitting.get() { "Adding model..." } else { "Add model" }}
                    </button>
                </div>
            </form>
        </div>
    }
}

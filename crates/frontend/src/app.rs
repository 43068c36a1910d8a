use crate::domain::a002_store_model::context::StoreModelsContext;
use crate::layout::global_context::AdminGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::config::AdminConfig;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AdminConfig::from_window();

    let global = AdminGlobalContext::new();
    global.load_stores(config.clone());

    provide_context(config);
    provide_context(global);
    // Models cache and creation form state shared by the models pages
    provide_context(StoreModelsContext::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}

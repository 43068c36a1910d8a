use crate::domain::a002_store_model::ui::create::CreateModelPage;
use crate::domain::a002_store_model::ui::list::StoreModelsList;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/admin/:id/models") view=StoreModelsList />
                    <Route path=path!("/admin/:id/models/create") view=CreateModelPage />
                </Routes>
            </main>
        </Router>
    }
}

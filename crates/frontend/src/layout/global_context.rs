use crate::domain::a001_brand_store::api;
use crate::shared::config::AdminConfig;
use contracts::domain::a001_brand_store::aggregate::{find_store, BrandStore};
use leptos::prelude::*;

/// Console-wide state that is not tied to a single page
#[derive(Clone, Copy)]
pub struct AdminGlobalContext {
    pub stores: RwSignal<Vec<BrandStore>>,
}

impl AdminGlobalContext {
    pub fn new() -> Self {
        Self {
            stores: RwSignal::new(Vec::new()),
        }
    }

    /// Load the brand stores once; failures leave the list empty
    pub fn load_stores(&self, config: AdminConfig) {
        let stores = self.stores;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_stores(&config).await {
                Ok(list) => {
                    log::debug!("Loaded {} brand stores", list.len());
                    stores.set(list);
                }
                Err(e) => log::error!("Failed to load brand stores: {}", e),
            }
        });
    }

    /// Reactive name of a store, if it is known
    pub fn store_name(&self, store_id: Signal<String>) -> Signal<Option<String>> {
        let stores = self.stores;
        Signal::derive(move || {
            let id = store_id.get();
            stores.with(|list| find_store(list, &id).map(|store| store.name.clone()))
        })
    }
}

impl Default for AdminGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_context() -> AdminGlobalContext {
    use_context::<AdminGlobalContext>().expect("AdminGlobalContext context not found")
}

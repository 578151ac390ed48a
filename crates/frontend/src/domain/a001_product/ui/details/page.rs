use super::view::ProductForm;
use crate::domain::a001_product::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProductCreatePage() -> impl IntoView {
    let store = AppGlobalContext::expect();
    let on_saved = Callback::new(move |product: Product| store.upsert_product(product));

    view! {
        <section class="page">
            <PageHeader title="Add product">
                <a href="/" class="button button--secondary">"Back"</a>
            </PageHeader>
            <ProductForm on_saved=on_saved />
        </section>
    }
}

/// Loads the record (store first, then the API) and opens the form on it
#[component]
pub fn ProductEditPage() -> impl IntoView {
    let store = AppGlobalContext::expect();
    let params = use_params_map();
    let product = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let raw = params.with(|p| p.get("id")).unwrap_or_default();
        product.set(None);

        let Ok(id) = ProductId::from_string(&raw) else {
            error.set(Some(format!("Invalid product id: {}", raw)));
            return;
        };
        error.set(None);

        if let Some(found) = store.find(id) {
            product.set(Some(found));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_by_id(id).await {
                Ok(loaded) => {
                    product.try_set(Some(loaded));
                }
                Err(e) => {
                    log::error!("failed to load product {}: {}", id, e);
                    error.try_set(Some(e));
                }
            }
        });
    });

    let on_saved = Callback::new(move |saved: Product| store.upsert_product(saved));

    view! {
        <section class="page">
            <PageHeader title="Edit product">
                <a href="/" class="button button--secondary">"Back"</a>
            </PageHeader>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || product.get().map(|initial| view! {
                <ProductForm initial=initial on_saved=on_saved />
            })}
            {move || (product.with(Option::is_none) && error.with(Option::is_none))
                .then(|| view! { <p class="page__loading">"Loading..."</p> })}
        </section>
    }
}

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let store = AppGlobalContext::expect();

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <a href="/" class="header__brand">
                    {icon("products")}
                    <span class="header__title">"Catalog admin"</span>
                </a>
            </div>
            <div class="header__actions">
                <span class="header__counter">
                    {move || format!("{} products", store.products.with(Vec::len))}
                </span>
                <a href="/products/new" class="button button--ghost">
                    {icon("plus")}
                    " Add product"
                </a>
            </div>
        </header>
    }
}

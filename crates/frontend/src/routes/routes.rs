use crate::domain::a001_product::ui::details::{ProductCreatePage, ProductEditPage};
use crate::domain::a001_product::ui::list::ProductsPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <section class="page">
            <p class="page__empty">"Page not found."</p>
            <a href="/" class="button button--secondary">"Back to products"</a>
        </section>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=ProductsPage />
                    <Route path=path!("/products/new") view=ProductCreatePage />
                    <Route path=path!("/products/:id/edit") view=ProductEditPage />
                </Routes>
            </Shell>
        </Router>
    }
}

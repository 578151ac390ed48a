use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::{ConfigProvider, ToasterProvider};

#[component]
pub fn App() -> impl IntoView {
    // Catalog store shared by the list and the form pages.
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <ToasterProvider>
                <AppRoutes />
            </ToasterProvider>
        </ConfigProvider>
    }
}

mod row;
mod table;

pub use row::ProductRow;
pub use table::ProductTable;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::ProductId;
use contracts::enums::product_category::ProductCategory;
use leptos::prelude::*;

/// Display names of the category codes in use, joined for the subtitle
fn categories_summary(codes: &[String]) -> Option<String> {
    if codes.is_empty() {
        return None;
    }
    let names: Vec<&str> = codes
        .iter()
        .map(|code| {
            ProductCategory::from_code(code)
                .map(|c| c.display_name())
                .unwrap_or(code.as_str())
        })
        .collect();
    Some(format!("Categories: {}", names.join(", ")))
}

#[component]
#[allow(non_snake_case)]
pub fn ProductsPage() -> impl IntoView {
    let store = AppGlobalContext::expect();
    store.ensure_loaded();

    let on_delete = Callback::new(move |id: ProductId| store.remove_product(id));
    let subtitle = Signal::derive(move || store.categories.with(|c| categories_summary(c)));

    view! {
        <section class="page">
            <PageHeader title="Products" subtitle=subtitle>
                <a href="/products/new" class="button button--primary">
                    {icon("plus")}
                    " New product"
                </a>
                <button
                    type="button"
                    class="button button--secondary"
                    disabled=move || store.loading.get()
                    on:click=move |_| store.load_products()
                >
                    {icon("refresh")}
                    " Refresh"
                </button>
                <button
                    type="button"
                    class="button button--ghost"
                    on:click=move |_| store.fill_test_data()
                >
                    "Fill test data"
                </button>
            </PageHeader>

            {move || store.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <ProductTable products=store.products on_delete=on_delete />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_summary() {
        assert_eq!(categories_summary(&[]), None);
        assert_eq!(
            categories_summary(&["jewelery".to_string(), "vinyl".to_string()]),
            Some("Categories: Jewelry, vinyl".to_string())
        );
    }
}

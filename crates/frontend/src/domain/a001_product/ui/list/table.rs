use super::row::ProductRow;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::table::{row_key, ProductTableBody, PRODUCT_TABLE_COLUMNS};
use leptos::prelude::*;

/// Product table: fixed header, one keyed row per product, placeholder
/// row when the list is empty. Deletion is reported through `on_delete`;
/// the table never changes its input.
#[component]
pub fn ProductTable(
    #[prop(into)] products: Signal<Vec<Product>>,
    on_delete: Callback<ProductId>,
) -> impl IntoView {
    let body = Memo::new(move |_| products.with(|items| ProductTableBody::project(items)));
    let placeholder = Memo::new(move |_| body.with(ProductTableBody::placeholder));

    view! {
        <div class="table">
            <table class="table__data product-table">
                <thead class="table__head">
                    <tr>
                        {PRODUCT_TABLE_COLUMNS
                            .iter()
                            .map(|label| view! { <th scope="col" class="table__header-cell">{*label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || placeholder.get().map(|(text, colspan)| view! {
                        <tr class="table__row table__row--empty">
                            <td class="table__cell table__cell--placeholder" colspan=colspan.to_string()>
                                {text}
                            </td>
                        </tr>
                    })}
                    <For
                        each=move || body.with(|b| b.rows().to_vec())
                        key=row_key
                        children=move |product: Product| view! {
                            <ProductRow product=product on_delete=on_delete />
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

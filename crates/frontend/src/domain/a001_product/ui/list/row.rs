use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::{Product, ProductId, Rating};
use contracts::domain::a001_product::table::bind_delete;
use leptos::prelude::*;

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

pub fn format_rating(rating: Option<Rating>) -> String {
    match rating {
        Some(r) => format!("{:.1} ({})", r.rate, r.count),
        None => "-".to_string(),
    }
}

pub fn edit_href(id: ProductId) -> String {
    format!("/products/{}/edit", id)
}

#[component]
pub fn ProductRow(product: Product, on_delete: Callback<ProductId>) -> impl IntoView {
    let delete = bind_delete(product.id, move |id| on_delete.run(id));
    let href = edit_href(product.id);
    let title = product.title.clone();

    view! {
        <tr class="table__row">
            <th scope="row" class="table__cell table__cell--title">{product.title}</th>
            <td class="table__cell table__cell--money">{format_price(product.price)}</td>
            <td class="table__cell">{product.category.display_name()}</td>
            <td class="table__cell">{format_rating(product.rating)}</td>
            <td class="table__cell table__cell--actions">
                <a href=href class="button button--ghost" title=format!("Edit {}", title)>
                    {icon("edit")}
                    " Edit"
                </a>
                <button
                    type="button"
                    class="button button--danger"
                    title=format!("Delete {}", title)
                    on:click=move |_| delete()
                >
                    {icon("delete")}
                    " Delete"
                </button>
            </td>
            <td class="table__cell">
                <a href=product.image target="_blank" rel="noopener noreferrer" class="button button--ghost">
                    {icon("eye")}
                    " View"
                </a>
            </td>
        </tr>
    }
}

use super::view_model::ProductFormViewModel;
use crate::shared::components::form::{InputField, SelectField, TextAreaField};
use crate::shared::notifications::{RouterNavigator, ToastNotifier};
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a001_product::draft::DraftField;
use contracts::enums::product_category::ProductCategory;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Create/edit form for one product.
///
/// With `initial` set the form edits that record; otherwise it creates one.
/// Native constraint validation is off so every submit goes through the
/// form's own gate and error message.
#[component]
pub fn ProductForm(
    #[prop(optional)] initial: Option<Product>,
    #[prop(optional)] on_saved: Option<Callback<Product>>,
) -> impl IntoView {
    let vm = ProductFormViewModel::new(initial);
    let notifier = ToastNotifier::from_context();
    let navigator = RouterNavigator::new(use_navigate());

    // Responses that arrive after the form is gone are dropped.
    on_cleanup(move || vm.close());

    let submitting = vm.is_submitting();
    let label = vm.submit_label();
    let error = vm.error();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(notifier.clone(), navigator.clone(), on_saved);
    };

    view! {
        <form class="product-form" novalidate=true on:submit=on_submit>
            <div class="product-form__grid">
                <InputField
                    field=DraftField::Title
                    value=vm.field(DraftField::Title)
                    on_input=vm.setter(DraftField::Title)
                    placeholder="Type product name"
                    required=true
                />
                <InputField
                    field=DraftField::Image
                    value=vm.field(DraftField::Image)
                    on_input=vm.setter(DraftField::Image)
                    input_type="url"
                    placeholder="https://"
                    required=true
                />
                <InputField
                    field=DraftField::Price
                    value=vm.field(DraftField::Price)
                    on_input=vm.setter(DraftField::Price)
                    input_type="number"
                    placeholder="$2999"
                    required=true
                />
                <SelectField
                    field=DraftField::Category
                    value=vm.field(DraftField::Category)
                    on_change=vm.setter(DraftField::Category)
                    options=ProductCategory::select_options()
                    required=true
                />
                <TextAreaField
                    field=DraftField::Description
                    value=vm.field(DraftField::Description)
                    on_input=vm.setter(DraftField::Description)
                    placeholder="Your description here"
                    required=true
                    rows=6
                />
            </div>

            <div class="product-form__actions">
                <button
                    type="submit"
                    class="button button--primary"
                    class:button--loading=move || submitting.get()
                    disabled=move || submitting.get()
                >
                    {move || label.get()}
                </button>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}
        </form>
    }
}

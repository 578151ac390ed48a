use super::FieldLabel;
use contracts::domain::a001_product::draft::DraftField;
use leptos::prelude::*;

#[component]
pub fn TextAreaField(
    field: DraftField,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    view! {
        <div class="form__group form__group--wide">
            <FieldLabel id=field.id() text=field.label() required=required />
            <textarea
                id=field.id()
                name=field.id()
                class="form__textarea"
                rows=rows.unwrap_or(4)
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

use super::FieldLabel;
use contracts::domain::a001_product::draft::DraftField;
use leptos::prelude::*;

/// Single-line input; `input_type="number"` gives the numeric variant
#[component]
pub fn InputField(
    field: DraftField,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    /// "text" (default), "number", "url"
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let step = move || (input_t() == "number").then_some("any");

    view! {
        <div class="form__group">
            <FieldLabel id=field.id() text=field.label() required=required />
            <input
                id=field.id()
                name=field.id()
                class="form__input"
                type=input_t
                step=step
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

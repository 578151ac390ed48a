use super::FieldLabel;
use contracts::domain::a001_product::draft::DraftField;
use leptos::prelude::*;

/// Single-select over a closed list of `(value, label)` options
#[component]
pub fn SelectField(
    field: DraftField,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    options: Vec<(String, String)>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <FieldLabel id=field.id() text=field.label() required=required />
            <select
                id=field.id()
                name=field.id()
                class="form__select"
                required=required
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, label)| {
                        let option_value = val.clone();
                        view! {
                            <option value=val selected=move || value.get() == option_value>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

//! Inputs bound to one product draft field.
//!
//! Each control reports the raw string value on every change; parsing is
//! left to the submit gate.

pub mod input;
pub mod select;
pub mod textarea;

pub use input::InputField;
pub use select::SelectField;
pub use textarea::TextAreaField;

use leptos::prelude::*;

/// Label with the required marker
#[component]
fn FieldLabel(id: &'static str, text: &'static str, required: bool) -> impl IntoView {
    view! {
        <label class="form__label" for=id>
            {text}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}

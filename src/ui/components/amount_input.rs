use dioxus::prelude::*;

use crate::domain::FormField;

/// Numeric input bound to one form field. Emits the raw text on every
/// keystroke; parsing happens downstream.
#[component]
pub fn AmountInput(field: FormField, value: String, on_input: EventHandler<String>) -> Element {
    let id = field.element_id();
    rsx! {
        div { class: "field",
            label { class: "field-label", r#for: id, "{field.label()}" }
            input {
                id: id,
                name: id,
                class: "field-input",
                r#type: "number",
                step: field.step(),
                placeholder: field.placeholder(),
                value: value,
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}

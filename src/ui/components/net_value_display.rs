use dioxus::prelude::*;

use crate::domain::RESULT_ELEMENT_ID;

#[component]
pub fn NetValueDisplay(text: String, negative: bool) -> Element {
    let value_class = if negative {
        "result-value negative"
    } else {
        "result-value"
    };
    rsx! {
        div { class: "result",
            span { class: "result-label", "Net value" }
            span { id: RESULT_ELEMENT_ID, class: value_class, "{text}" }
        }
    }
}

use dioxus::prelude::*;

#[component]
pub fn BreakdownCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div { class: "card",
            h3 { class: "card-title", "{title}" }
            p { class: "card-value", "{value}" }
            if let Some(desc) = description {
                p { class: "card-description", "{desc}" }
            }
        }
    }
}

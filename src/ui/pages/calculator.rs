use dioxus::prelude::*;

use crate::{
    app::persist_settings,
    domain::{CalculatorForm, CurrencyFormat, FormField, NetValue},
    ui::components::{
        amount_input::AmountInput, breakdown_card::BreakdownCard,
        net_value_display::NetValueDisplay,
    },
    util::settings::Settings,
};

#[component]
pub fn CalculatorPage() -> Element {
    let form = use_context::<Signal<CalculatorForm>>();
    let settings = use_context::<Signal<Settings>>();

    let currency = CurrencyFormat::BRL;
    let net_value = form.with(|f| f.net_value());
    let result_text = net_value.formatted(&currency);
    let negative = result_text.starts_with('-');
    let show_breakdown = settings.with(|s| s.show_breakdown);
    let rows = breakdown_rows(&net_value, &currency);

    let fields = FormField::ALL.map(|field| (field, form.with(|f| f.get(field).to_string())));

    rsx! {
        section { class: "calculator",
            div { class: "calculator-fields",
                for (field, value) in fields {
                    AmountInput {
                        key: "{field.element_id()}",
                        field,
                        value,
                        on_input: move |raw: String| update_field(form, field, raw),
                    }
                }
            }
            NetValueDisplay { text: result_text, negative }
            label { class: "toggle",
                input {
                    r#type: "checkbox",
                    checked: show_breakdown,
                    onchange: move |_| toggle_breakdown(settings),
                }
                "Show breakdown"
            }
            if show_breakdown {
                div { class: "breakdown",
                    for row in rows {
                        BreakdownCard {
                            title: row.title,
                            value: row.value,
                            description: row.description,
                        }
                    }
                }
            }
        }
    }
}

fn update_field(mut form: Signal<CalculatorForm>, field: FormField, raw: String) {
    form.with_mut(|f| f.set(field, raw));
    let inputs = form.with(|f| f.inputs());
    tracing::debug!(
        field = field.element_id(),
        contract_value = inputs.contract_value,
        product_cost = inputs.product_cost,
        commission_pct = inputs.commission_pct,
        "Recalculating net value"
    );
}

fn toggle_breakdown(mut settings: Signal<Settings>) {
    settings.with_mut(|s| s.show_breakdown = !s.show_breakdown);
    persist_settings(&settings);
}

#[derive(Clone, Debug, PartialEq)]
struct BreakdownRow {
    title: String,
    value: String,
    description: Option<String>,
}

/// Intermediate figures behind the net value. A short-circuited
/// calculation shows zeros throughout.
fn breakdown_rows(net_value: &NetValue, currency: &CurrencyFormat) -> Vec<BreakdownRow> {
    let breakdown = net_value.breakdown().copied().unwrap_or_default();
    vec![
        BreakdownRow {
            title: "Contract value".to_string(),
            value: currency.format(breakdown.contract_value),
            description: None,
        },
        BreakdownRow {
            title: "Commission".to_string(),
            value: currency.format(breakdown.commission_amount),
            description: Some(format!(
                "{} of contract value",
                currency.percent(breakdown.commission_rate)
            )),
        },
        BreakdownRow {
            title: "Product cost".to_string(),
            value: currency.format(breakdown.product_cost),
            description: None,
        },
    ]
}

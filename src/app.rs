use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::CalculatorForm,
    ui::{pages::CalculatorPage, shell::Shell},
    util::{
        assets,
        settings::{save_settings, Settings, SettingsError},
        version::APP_NAME,
    },
};

#[component]
pub fn App() -> Element {
    // Entered values live only in this signal and are gone on reload.
    let form = use_signal(CalculatorForm::default);
    use_context_provider(|| form);

    // Loaded once in `main` and handed over as root context.
    let initial = use_context::<Settings>();
    let settings = use_signal(move || initial);
    use_context_provider(|| settings);

    rsx! {
        document::Title { "{APP_NAME}" }
        document::Style { "{assets::main_css()}" }
        Shell { CalculatorPage {} }
    }
}

pub fn persist_settings(settings: &Signal<Settings>) {
    let snapshot = settings.with(|s| s.clone());
    match save_settings(&snapshot) {
        Ok(()) => tracing::debug!(?snapshot, "Saved settings"),
        // No config directory on the web target.
        Err(SettingsError::StorageUnavailable) => {
            tracing::debug!("Settings storage unavailable; keeping preferences in memory")
        }
        Err(err) => tracing::warn!("Failed to persist settings: {err}"),
    }
}

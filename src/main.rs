#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::util::{
    logging::init_logger,
    settings::load_settings,
    version::{version_label, APP_NAME},
};

fn main() {
    let loaded = load_settings();
    let settings = loaded.as_ref().cloned().unwrap_or_default();
    init_logger(settings.log_level);
    if let Err(err) = &loaded {
        tracing::warn!("Ignoring unreadable settings: {err}");
    }
    tracing::info!(version = %version_label(), "Starting {APP_NAME}");

    let builder = LaunchBuilder::new().with_context(settings);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

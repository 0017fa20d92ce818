use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css`, or an empty stylesheet if it
/// is missing from the build.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

fn load_text(path: &str) -> String {
    match EmbeddedAssets::get(path) {
        Some(file) => String::from_utf8_lossy(&file.data).into_owned(),
        None => {
            tracing::warn!("Embedded asset {path} not found");
            String::new()
        }
    }
}

pub mod assets;
pub mod logging;
pub mod settings;
pub mod version;

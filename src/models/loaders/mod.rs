pub mod toml_loader;

pub use toml_loader::{load_catalog, load_catalog_for_locale, load_scale};

//! Generate gray, red-dot and green-dot status icons from a single base icon.

pub mod config;
pub mod error;
pub mod icon_gen;
pub mod manifest;
pub mod variant;

pub use config::{GeneratorConfig, Variant, VariantSpec};
pub use error::{Error, Result};
pub use icon_gen::{generate_icons, GenerationReport};

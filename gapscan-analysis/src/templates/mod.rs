//! Dimension template catalog and selection.
//!
//! Per-category taxonomies live in `catalog.toml` as versioned data, not
//! code branches; new device categories are catalog additions.

pub mod catalog;
pub mod selector;
pub mod types;

pub use catalog::TemplateCatalog;
pub use selector::{apply_override, select_template};
pub use types::{Augmentation, RegulatoryProfile};

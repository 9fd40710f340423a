//! Configuration system for gapscan.
//! TOML-based: project config (`gapscan.toml`) over compiled defaults.

pub mod comparison_config;
pub mod gapscan_config;
pub mod report_config;

pub use comparison_config::ComparisonConfig;
pub use gapscan_config::GapscanConfig;
pub use report_config::ReportConfig;

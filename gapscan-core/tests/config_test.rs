//! Configuration loading tests.

use gapscan_core::config::GapscanConfig;
use gapscan_core::types::DimensionCategory;

#[test]
fn load_returns_defaults_when_file_absent() {
    let dir = tempfile::tempdir().unwrap();
    let config = GapscanConfig::load(dir.path()).unwrap();
    assert!(config.comparison.effective_parallel());
    assert!(config.comparison.tolerance_overrides.is_empty());
}

#[test]
fn load_reads_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("gapscan.toml"),
        r#"
        [comparison]
        similarity_threshold = 0.8
        parallel = false

        [comparison.tolerance_overrides]
        electrical = 2.5

        [report]
        format = "csv"
        color = false
        "#,
    )
    .unwrap();

    let config = GapscanConfig::load(dir.path()).unwrap();
    assert!((config.comparison.effective_similarity_threshold() - 0.8).abs() < f64::EPSILON);
    assert!(!config.comparison.effective_parallel());
    assert_eq!(
        config.comparison.tolerance_for(DimensionCategory::Electrical),
        Some(2.5)
    );
    assert_eq!(
        config.comparison.tolerance_for(DimensionCategory::Mechanical),
        None
    );
    assert_eq!(config.report.effective_format(), "csv");
    assert!(!config.report.effective_color());
}

#[test]
fn load_rejects_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gapscan.toml"), "comparison = [broken").unwrap();
    assert!(GapscanConfig::load(dir.path()).is_err());
}

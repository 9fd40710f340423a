//! Reporter tests: fixed schema, grouping, and projection purity.

use gapscan_analysis::report::{available_formats, create_reporter, csv};
use gapscan_analysis::{AnalysisRequest, ComparisonEngine, GapAnalysis, ScoringSignals};
use gapscan_core::types::DeviceAttributeSet;

fn sample_analysis() -> GapAnalysis {
    let engine = ComparisonEngine::new().unwrap();
    let request = AnalysisRequest::new(
        DeviceAttributeSet::new("DUT-1")
            .with_text(
                "indications-for-use",
                "For the management of type 1 diabetes and type 2 diabetes",
            )
            .with_text("shelf-life", "5 years")
            .with_text("sterilization-method", "Ethylene oxide"),
        vec![DeviceAttributeSet::new("K240001")
            .with_text("indications-for-use", "For the management of type 1 diabetes")
            .with_text("shelf-life", "3 years")
            .with_text("sterilization-method", "Ethylene oxide")],
        "glucose-monitor",
    )
    .with_dimension_override(vec![
        "indications-for-use".to_string(),
        "shelf-life".to_string(),
        "sterilization-method".to_string(),
    ])
    .with_signal_override("shelf-life", ScoringSignals::new(5, 0.0));
    engine.analyze(&request).unwrap()
}

#[test]
fn csv_has_the_fixed_column_schema() {
    let analysis = sample_analysis();
    let reporter = create_reporter("csv").unwrap();
    let output = reporter.generate(&analysis).unwrap();
    let mut lines = output.lines();
    assert_eq!(lines.next().unwrap(), csv::COLUMNS.join(","));
    assert_eq!(output.lines().count(), analysis.records.len() + 1);
}

#[test]
fn csv_fields_with_commas_are_quoted() {
    let analysis = sample_analysis();
    let output = create_reporter("csv").unwrap().generate(&analysis).unwrap();
    // Remediation texts contain commas; the row must still parse to the
    // fixed column count by honoring quotes.
    for line in output.lines().skip(1) {
        let mut fields = 0;
        let mut in_quotes = false;
        for c in line.chars() {
            match c {
                '"' => in_quotes = !in_quotes,
                ',' if !in_quotes => fields += 1,
                _ => {}
            }
        }
        assert_eq!(fields + 1, csv::COLUMNS.len(), "bad row: {line}");
    }
}

#[test]
fn narrative_groups_by_severity_with_counts_and_effort() {
    let analysis = sample_analysis();
    let output = create_reporter("narrative")
        .unwrap()
        .generate(&analysis)
        .unwrap();
    assert!(output.contains("# Gap Analysis: DUT-1"));
    assert!(output.contains("Major gaps") || output.contains("Moderate gaps"));
    assert!(output.contains("Estimated effort to close"));
    assert!(output.contains("Gap counts by type"));
}

#[test]
fn json_round_trips_as_a_document() {
    let analysis = sample_analysis();
    let output = create_reporter("json").unwrap().generate(&analysis).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value["records"].as_array().unwrap().len(),
        analysis.records.len()
    );
    assert_eq!(value["subject_id"], "DUT-1");
}

#[test]
fn console_report_renders_without_color_when_disabled() {
    let analysis = sample_analysis();
    let reporter = gapscan_analysis::report::console::ConsoleReporter::new(false);
    use gapscan_analysis::report::Reporter;
    let output = reporter.generate(&analysis).unwrap();
    assert!(!output.contains("\x1b["));
    assert!(output.contains("gap(s)"));
}

#[test]
fn rendering_is_a_pure_projection() {
    let analysis = sample_analysis();
    let before = analysis.records.clone();
    for format in available_formats() {
        let reporter = create_reporter(format).unwrap();
        let first = reporter.generate(&analysis).unwrap();
        let second = reporter.generate(&analysis).unwrap();
        assert_eq!(first, second, "{format} output not stable");
    }
    assert_eq!(analysis.records, before);
}

#[test]
fn unknown_format_is_none() {
    assert!(create_reporter("sarif").is_none());
    assert_eq!(available_formats().len(), 4);
}

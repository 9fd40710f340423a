//! CSV reporter: the tabular record set with its fixed column schema,
//! suitable for a row-oriented file.

use crate::engine::GapAnalysis;

use super::Reporter;

/// Fixed column schema of the tabular form.
pub const COLUMNS: &[&str] = &[
    "gap_id",
    "dimension",
    "category",
    "subject_value",
    "reference_id",
    "reference_value",
    "gap_type",
    "severity_score",
    "severity",
    "regulatory_risk",
    "remediation",
    "status",
    "created_at",
];

/// CSV reporter.
pub struct CsvReporter;

impl Reporter for CsvReporter {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn generate(&self, analysis: &GapAnalysis) -> Result<String, String> {
        let mut out = String::new();
        out.push_str(&COLUMNS.join(","));
        out.push('\n');
        for record in &analysis.records {
            let row = [
                record.id.clone(),
                record.dimension.clone(),
                record.category.to_string(),
                record.subject_value.clone(),
                record.reference_id.clone(),
                record.reference_value.clone(),
                record.gap_type.to_string(),
                record.severity_score.to_string(),
                record.severity.to_string(),
                record.regulatory_risk.clone(),
                record.remediation.clone(),
                record.status.to_string(),
                record.created_at.to_string(),
            ];
            let escaped: Vec<String> = row.iter().map(|f| escape(f)).collect();
            out.push_str(&escaped.join(","));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Quote a field when it contains a delimiter, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_quotes_fields_with_commas() {
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}

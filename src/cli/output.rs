//! Output formatting for CLI results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::classifier::{ClassificationResult, DebugFeatures};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Format a classification result for terminal output
pub fn format_result(source: &str, result: &ClassificationResult, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}{} {}{}{}\n",
        result.label.color_code(),
        result.label.symbol(),
        BOLD,
        source,
        RESET,
    ));

    output.push_str(&format!(
        "  {}{}{} (risk {}{}{}/99)\n",
        result.label.color_code(),
        result.label.label(),
        RESET,
        BOLD,
        result.risk_score,
        RESET,
    ));
    output.push_str(&format!("  {}\n", result.description));

    if verbose {
        let f = &result.features;
        output.push_str(&format!(
            "  {}rms={:.3} zcr={:.3} roughness={:.3} mfcc[0..5]=[{:.2}, {:.2}, {:.2}, {:.2}, {:.2}]{}\n",
            DIM,
            f.rms,
            f.zcr,
            f.roughness,
            f.mfcc[0],
            f.mfcc[1],
            f.mfcc[2],
            f.mfcc[3],
            f.mfcc[4],
            RESET,
        ));
    }

    output
}

/// JSON report for one analyzed clip
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub file: &'a str,
    pub label: &'static str,
    pub risk_score: u8,
    pub description: &'a str,
    pub features: &'a DebugFeatures,
    pub generated_at: DateTime<Utc>,
}

/// Format a classification result as JSON
pub fn format_json(source: &str, result: &ClassificationResult) -> String {
    let report = JsonReport {
        file: source,
        label: result.label.label(),
        risk_score: result.risk_score,
        description: &result.description,
        features: &result.features,
        generated_at: Utc::now(),
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}

// Copyright (c) 2025 Nicholas D. Crosbie
use crate::models::Report;

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> String;
}

/// JSON output; pretty-printed with two-space indentation unless `pretty` is off.
pub struct JsonFormatter {
    pub pretty: bool,
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        // Reports hold only strings and vectors.
        rendered.unwrap_or_else(|err| {
            serde_json::json!({ "error": format!("Execution failed: {err}") }).to_string()
        })
    }
}

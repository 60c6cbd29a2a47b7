//! Report Assembler: merges a parsed reply and search links into a `Report`,
//! and renders the plain-text form used by the batch runner.

use crate::models::reconstruction::ReconstructionResult;
use crate::models::report::{Report, SearchLink};

const REPORT_HEADER: &str = "--- RECONSTRUCTION REPORT ---";

impl Report {
    /// Keywords are consumed by the search step and do not appear in the report.
    pub fn assemble(original: &str, result: ReconstructionResult, links: Vec<SearchLink>) -> Self {
        Report {
            original: original.to_string(),
            reconstructed: result.reconstruction,
            explanations: result.explanations,
            links,
        }
    }

    /// Byte-stable text rendering: same report, same bytes.
    ///
    /// The explanations section is left out when there are none; the sources
    /// heading is always present. Missing link fields render as empty text.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = vec![
            REPORT_HEADER.to_string(),
            "[Original fragment]".to_string(),
            format!("> {}\n", self.original),
            "[AI-Reconstructed text]".to_string(),
            format!("> {}\n", self.reconstructed),
        ];

        if !self.explanations.is_empty() {
            lines.push("[Explanations]".to_string());
            lines.extend(self.explanations.iter().map(|e| format!("* {e}")));
        }

        lines.push("\n[Contextual sources]".to_string());
        lines.extend(self.links.iter().map(render_link));

        lines.join("\n")
    }
}

fn render_link(link: &SearchLink) -> String {
    format!(
        "* {} ({})",
        link.link.as_deref().unwrap_or_default(),
        link.title.as_deref().unwrap_or_default()
    )
}

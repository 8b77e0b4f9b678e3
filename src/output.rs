//! CLI output formatting.
//!
//! Each report has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout. The display is
//! information-first: what page was produced and from which inputs, with
//! paths as context rather than the headline.
//!
//! ```text
//! Generated "API Reference" → out/index.html
//!     Source: docs/index.md
//!     Includes: 3 files
//!         chapters/01-auth.md
//!         chapters/02-errors.md
//!         appendix.md
//!     Assets: images, css, js
//! ```

use crate::generate::GenerateReport;
use std::path::Path;

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Shorten a path for display: relative to `base` when possible.
fn display_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Format the generation report as display lines.
pub fn format_report(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Generated \"{}\" → {}",
            report.title,
            report.output_file.display()
        ),
        format!("{}Source: {}", indent(1), report.document.display()),
    ];

    if !report.include_files.is_empty() {
        let noun = if report.include_files.len() == 1 {
            "file"
        } else {
            "files"
        };
        lines.push(format!(
            "{}Includes: {} {noun}",
            indent(1),
            report.include_files.len()
        ));
        let base = report.document.parent().unwrap_or(Path::new(""));
        for file in &report.include_files {
            lines.push(format!("{}{}", indent(2), display_path(file, base)));
        }
    }

    if !report.assets.is_empty() {
        lines.push(format!("{}Assets: {}", indent(1), report.assets.join(", ")));
    }

    lines
}

/// Print the generation report to stdout.
pub fn print_report(report: &GenerateReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}

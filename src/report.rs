use std::fmt::Write as _;

use crate::validate::ValidationReport;

const RULE_WIDTH: usize = 60;
const SECTION_WIDTH: usize = 40;
const VALID_PREVIEW: usize = 10;
const NO_REFERENCE_PREVIEW: usize = 5;

/// Which id categories to list. Nothing selected means counters only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputFilter {
    pub valid: bool,
    pub invalid: bool,
    pub no_reference: bool,
}

impl OutputFilter {
    pub fn is_empty(&self) -> bool {
        !(self.valid || self.invalid || self.no_reference)
    }
}

/// Counters or id listing, depending on the filter.
pub fn render(report: &ValidationReport, filter: &OutputFilter) -> String {
    if filter.is_empty() {
        render_counters(report)
    } else {
        render_ids(report, filter)
    }
}

pub fn render_counters(report: &ValidationReport) -> String {
    format!(
        "Invalid references: {}\nValid references: {}\nQuestions without references: {}\n",
        report.invalid_count, report.valid_count, report.no_reference_count
    )
}

/// One id per line, categories always in valid, invalid, no-reference order.
pub fn render_ids(report: &ValidationReport, filter: &OutputFilter) -> String {
    let mut ids: Vec<&str> = Vec::new();
    if filter.valid {
        ids.extend(report.valid_ids());
    }
    if filter.invalid {
        ids.extend(report.invalid_ids());
    }
    if filter.no_reference {
        ids.extend(report.no_reference_ids());
    }
    let mut out = String::new();
    for id in ids {
        out.push_str(id);
        out.push('\n');
    }
    out
}

/// Success rate with one decimal, e.g. `97.5%`.
pub fn format_success_rate(report: &ValidationReport) -> String {
    format!("{:.1}%", report.success_rate())
}

fn banner(out: &mut String, title: &str) {
    let rule = "=".repeat(RULE_WIDTH);
    let _ = writeln!(out, "\n{}\n{}\n{}", rule, title, rule);
}

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, "-".repeat(SECTION_WIDTH));
}

fn more_line(out: &mut String, total: usize, shown: usize) {
    if total > shown {
        let _ = writeln!(out, "    ... and {} more", total - shown);
    }
}

/// Full human-readable report: statistics then per-category listings.
pub fn render_details(report: &ValidationReport) -> String {
    let mut out = String::new();
    banner(&mut out, "BIBLICAL REFERENCES VALIDATION REPORT");
    let _ = writeln!(out, "Total questions: {}", report.total);
    let _ = writeln!(out, "Questions with biblical references: {}", report.with_reference);
    let _ = writeln!(out, "Valid references: {}", report.valid_count);
    let _ = writeln!(out, "Invalid references: {}", report.invalid_count);
    let _ = writeln!(out, "Questions without references: {}", report.no_reference_count);

    if !report.valid.is_empty() {
        section(&mut out, &format!("✓ VALID REFERENCES ({}):", report.valid.len()));
        for entry in report.valid.iter().take(VALID_PREVIEW) {
            let books: Vec<String> =
                entry.books.iter().map(|b| format!("{} (→ {})", b.original, b.display_name)).collect();
            let _ = writeln!(out, "  {}: {}", entry.id, entry.reference.as_deref().unwrap_or(""));
            let _ = writeln!(out, "    Books: {}", books.join(", "));
        }
        more_line(&mut out, report.valid.len(), VALID_PREVIEW);
    }

    if !report.invalid.is_empty() {
        section(&mut out, &format!("✗ INVALID REFERENCES ({}):", report.invalid.len()));
        for entry in &report.invalid {
            let _ = writeln!(out, "  {}: {}", entry.id, entry.reference.as_deref().unwrap_or(""));
            if entry.books.is_empty() {
                let _ = writeln!(out, "    Unrecognized books: (no book name could be extracted)");
            } else {
                let books: Vec<String> =
                    entry.books.iter().map(|b| format!("{} (→ {})", b.original, b.normalized)).collect();
                let _ = writeln!(out, "    Unrecognized books: {}", books.join(", "));
            }
        }
    }

    if !report.no_reference.is_empty() {
        section(&mut out, &format!("- NO REFERENCES ({}):", report.no_reference.len()));
        for entry in report.no_reference.iter().take(NO_REFERENCE_PREVIEW) {
            let _ = writeln!(out, "  {}: {}", entry.id, entry.reference.as_deref().unwrap_or("null"));
        }
        more_line(&mut out, report.no_reference.len(), NO_REFERENCE_PREVIEW);
    }
    out
}

pub fn render_summary(report: &ValidationReport) -> String {
    let mut out = String::new();
    banner(&mut out, "SUMMARY");
    let _ = writeln!(
        out,
        "Success rate: {} ({}/{} references)",
        format_success_rate(report),
        report.valid_count,
        report.with_reference
    );
    if report.invalid_count == 0 {
        let _ = writeln!(out, "✓ All biblical references are compatible with BibleBookMapper!");
    } else {
        let _ = writeln!(out, "✗ {} references need to be fixed", report.invalid_count);
    }
    out
}

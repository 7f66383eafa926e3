//! Read-only style sheet diagnostics.
//!
//! Nothing here mutates the document. Every line meant for a human goes to
//! the [`HostLogger`] passed in, and the same information is returned as data
//! so callers do not have to scrape log output.

use std::collections::BTreeMap;
use style_host::{Environment, HostLogger, LogLevel};
use tracing::info_span;

/// Fixed advice line emitted by [`suggest_css_optimization`].
pub const OPTIMIZATION_SUGGESTION: &str = "CSS optimization suggestions: remove redundant selectors";

/// Summary of one style sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetSummary {
    pub href: Option<String>,
    pub rule_count: usize,
}

/// Result of [`analyze_css_performance`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CssReport {
    pub sheets: Vec<SheetSummary>,
    pub total_rules: usize,
}

/// Log every loaded sheet (`Sheet: <href>`) followed by the text of each of its rules.
pub fn analyze_css_performance(env: &Environment, logger: &dyn HostLogger) -> CssReport {
    let _span = info_span!("smart_css.analyze_css_performance").entered();
    let mut report = CssReport::default();
    for sheet in env.document().style_sheets() {
        let href = sheet.href.as_deref().unwrap_or("null");
        logger.log(LogLevel::Info, &format!("Sheet: {href}"));
        for rule in &sheet.rules {
            logger.log(LogLevel::Info, &rule.css_text);
        }
        report.total_rules += sheet.rules.len();
        report.sheets.push(SheetSummary {
            href: sheet.href,
            rule_count: sheet.rules.len(),
        });
    }
    report
}

/// Emit optimization advice: the fixed suggestion line, then one line per
/// selector that is declared by more than one style rule.
///
/// Returns the lines in emission order.
pub fn suggest_css_optimization(env: &Environment, logger: &dyn HostLogger) -> Vec<String> {
    let mut suggestions = vec![OPTIMIZATION_SUGGESTION.to_owned()];
    for (selector, count) in duplicate_selectors(env) {
        suggestions.push(format!("Duplicate selector '{selector}' appears in {count} rules"));
    }
    for line in &suggestions {
        logger.log(LogLevel::Info, line);
    }
    suggestions
}

/// Selectors shared by two or more style rules across all sheets, sorted by selector.
fn duplicate_selectors(env: &Environment) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for sheet in env.document().style_sheets() {
        for rule in sheet.rules {
            let normalized = normalize_selector(&rule.selector_text);
            if normalized.is_empty() {
                continue;
            }
            *counts.entry(normalized).or_default() += 1;
        }
    }
    counts.into_iter().filter(|(_, count)| *count > 1).collect()
}

/// Collapse whitespace so `a  >  b` and `a > b` compare equal.
fn normalize_selector(selector: &str) -> String {
    selector.split_whitespace().collect::<Vec<_>>().join(" ")
}

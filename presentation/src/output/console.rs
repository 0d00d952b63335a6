//! Console output formatter for quotes and listings

use colored::Colorize;
use quotecycle_application::{CategoryEntry, QuoteOrigin, ShownQuote};
use quotecycle_domain::Quote;
use std::collections::BTreeMap;

/// Formats quotes and corpus listings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a quote with its number, author and categories
    pub fn format_quote(quote: &Quote) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", format!("#{}", quote.number).dimmed()));
        output.push_str(&format!("  \u{201c}{}\u{201d}\n\n", quote.content.bold()));
        output.push_str(&format!("  {} {}\n", "\u{2014}".dimmed(), quote.author.cyan()));

        if !quote.categories.is_empty() {
            output.push_str(&format!(
                "\n  {}\n",
                quote
                    .categories
                    .iter()
                    .map(|c| format!("[{}]", c))
                    .collect::<Vec<_>>()
                    .join(" ")
                    .yellow()
            ));
        }

        output
    }

    /// Format a quote shown during browsing, noting deep-link origin
    pub fn format_shown(shown: &ShownQuote, active_category: Option<&str>) -> String {
        let mut output = String::new();

        match (shown.origin, active_category) {
            (QuoteOrigin::DeepLink, _) => {
                output.push_str(&format!("{}\n", "(linked quote)".dimmed()));
            }
            (QuoteOrigin::Selection, Some(category)) => {
                output.push_str(&format!("{} {}\n", "Category:".dimmed(), category.yellow()));
            }
            (QuoteOrigin::Selection, None) => {}
        }

        output.push_str(&Self::format_quote(&shown.quote));
        output
    }

    /// Format only the share line: `"content" - author`
    pub fn format_plain(quote: &Quote) -> String {
        quote.share_text()
    }

    /// Format a quote as pretty JSON, using the corpus record layout
    pub fn format_json(quote: &Quote) -> String {
        serde_json::to_string_pretty(quote).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }

    /// Format the category menu, marking the active category
    pub fn format_categories(entries: &[CategoryEntry]) -> String {
        if entries.is_empty() {
            return format!("{}\n", "No categories".dimmed());
        }

        let width = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        let mut output = String::new();
        for entry in entries {
            let marker = if entry.active { "*".green().bold() } else { " ".normal() };
            output.push_str(&format!(
                "{} {:<width$}  {}\n",
                marker,
                entry.label,
                entry.count.to_string().dimmed(),
                width = width
            ));
        }
        output
    }

    /// Format a label → count listing (authors)
    pub fn format_counts(counts: &BTreeMap<String, usize>) -> String {
        let width = counts.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        counts
            .iter()
            .map(|(label, count)| {
                format!("  {:<width$}  {}\n", label, count.to_string().dimmed(), width = width)
            })
            .collect()
    }
}

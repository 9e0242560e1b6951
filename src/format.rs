//! Human-readable rendering of query results

use crate::results::{BindingRow, ResultSet};

/// Namespace whose URIs are shortened to their final path segment.
const MFG_NAMESPACE: &str = "http://example.org/manufacturing";

/// Rows rendered before the output is truncated.
const MAX_ROWS: usize = 10;

/// Render a result set as display text.
///
/// Errors render with a `❌` prefix, which the driver also uses as its
/// pass/fail marker.
pub fn format_results(results: &ResultSet) -> String {
    match results {
        ResultSet::Error(msg) => format!("❌ Error: {msg}"),
        ResultSet::Malformed => "❌ Invalid result format".to_string(),
        ResultSet::Bindings(rows) if rows.is_empty() => "ℹ️ No results found".to_string(),
        ResultSet::Bindings(rows) => format_bindings(rows),
    }
}

fn format_bindings(rows: &[BindingRow]) -> String {
    // Display columns follow the first row's variable order.
    let vars: Vec<&str> = rows[0].keys().map(String::as_str).collect();

    let mut output = Vec::new();
    output.push(format!("✅ Found {} results:", rows.len()));
    output.push("-".repeat(50));

    for (i, row) in rows.iter().take(MAX_ROWS).enumerate() {
        let cells: Vec<String> = vars
            .iter()
            .map(|var| match row.get(*var) {
                Some(term) => format!("{}: {}", var, shorten_uri(&term.value)),
                None => format!("{var}: N/A"),
            })
            .collect();
        output.push(format!("  {}. {}", i + 1, cells.join(" | ")));
    }

    if rows.len() > MAX_ROWS {
        output.push(format!("  ... and {} more results", rows.len() - MAX_ROWS));
    }

    output.join("\n")
}

/// Shorten well-known URIs for readability.
///
/// Manufacturing-namespace URIs reduce to their final `/` segment; that
/// check wins even when the URI contains a fragment. Other values with a
/// `#` reduce to the fragment.
fn shorten_uri(value: &str) -> &str {
    if value.starts_with(MFG_NAMESPACE) {
        value.rsplit('/').next().unwrap_or(value)
    } else if let Some(idx) = value.rfind('#') {
        &value[idx + 1..]
    } else {
        value
    }
}

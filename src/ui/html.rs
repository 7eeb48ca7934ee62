use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::data::model::PriceCatalog;
use crate::ui::{fmt_amount, COLUMN_TITLES};

// ---------------------------------------------------------------------------
// Static HTML report
// ---------------------------------------------------------------------------

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Product positions</title>
    <style>
        table { border-collapse: collapse; width: 100%; }
        th, td { border: 1px solid #dddddd; text-align: left; padding: 8px; }
        th { background-color: #f2f2f2; }
    </style>
</head>
<body>
    <h2>Product positions</h2>
    <table>
"#;

const TAIL: &str = "    </table>\n</body>\n</html>\n";

/// Render the whole catalog, in load order, as one HTML table.
pub fn render_report(catalog: &PriceCatalog) -> String {
    let mut out = String::with_capacity(HEAD.len() + TAIL.len() + catalog.len() * 160);
    out.push_str(HEAD);

    out.push_str("        <tr>");
    for title in COLUMN_TITLES {
        let _ = write!(out, "<th>{}</th>", escape(title));
    }
    out.push_str("</tr>\n");

    for (idx, rec) in catalog.records().iter().enumerate() {
        let _ = writeln!(
            out,
            "        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
            idx + 1,
            escape(rec.name()),
            fmt_amount(rec.price()),
            fmt_amount(rec.weight()),
            escape(rec.source_file()),
            rec.unit_price(),
        );
    }

    out.push_str(TAIL);
    out
}

/// Write the report to `path`.
pub fn write_report(catalog: &PriceCatalog, path: &Path) -> Result<()> {
    fs::write(path, render_report(catalog))
        .with_context(|| format!("writing report to {}", path.display()))
}

/// Write the report and tell the user how it went. Returns whether the file
/// was written; failures are logged, never propagated.
pub fn export_report(catalog: &PriceCatalog, path: &Path) -> bool {
    match write_report(catalog, path) {
        Ok(()) => {
            println!("Exported {} positions to {}", catalog.len(), path.display());
            true
        }
        Err(e) => {
            log::error!("HTML export failed: {e:#}");
            false
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

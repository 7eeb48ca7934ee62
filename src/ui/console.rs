use std::io::{self, BufRead, Write};

use crate::data::filter::search;
use crate::data::model::{PriceCatalog, PriceRecord};
use crate::ui::{fmt_amount, COLUMN_TITLES};

// ---------------------------------------------------------------------------
// Interactive search loop
// ---------------------------------------------------------------------------

/// Prompt for search text until `exit_command` (any case) or end of input.
pub fn run_session<R: BufRead, W: Write>(
    catalog: &PriceCatalog,
    exit_command: &str,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(out, "Enter text to search or '{exit_command}' to quit: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let query = line.trim();
        if query.to_lowercase() == exit_command.to_lowercase() {
            break;
        }

        let hits = search(catalog, query);
        if hits.is_empty() {
            writeln!(out, "Nothing found.")?;
            continue;
        }
        write_table(out, &hits)?;
    }
    writeln!(out, "Done.")
}

/// Fixed-width result table, numbered from 1.
pub fn write_table<W: Write>(out: &mut W, hits: &[&PriceRecord]) -> io::Result<()> {
    let [idx, name, price, weight, file, unit] = COLUMN_TITLES;
    writeln!(out, "{idx:<5} {name:<40} {price:<10} {weight:<10} {file:<20} {unit:<15}")?;
    for (i, rec) in hits.iter().enumerate() {
        writeln!(
            out,
            "{:<5} {:<40} {:<10} {:<10} {:<20} {:<15.2}",
            i + 1,
            rec.name(),
            fmt_amount(rec.price()),
            fmt_amount(rec.weight()),
            rec.source_file(),
            rec.unit_price(),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::data::model::LoadStats;

    fn catalog() -> PriceCatalog {
        let records = vec![
            PriceRecord::new("Beef", 500.0, 1.0, "price_1.csv").unwrap(),
            PriceRecord::new("Beef stew", 90.0, 0.5, "price_2.csv").unwrap(),
        ];
        PriceCatalog::from_records(records, LoadStats::default())
    }

    fn run(input: &str) -> String {
        let mut out = Vec::new();
        run_session(&catalog(), "exit", Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_sorted_table_then_exits() {
        let out = run("beef\nEXIT\nstew\n");
        let beef_stew = out.find("Beef stew").unwrap();
        let beef = out.find("500.0").unwrap();
        assert!(beef_stew < beef);
        assert!(out.contains("180.00"));
        assert!(out.trim_end().ends_with("Done."));
        assert_eq!(out.matches("Enter text").count(), 2);
    }

    #[test]
    fn reports_no_matches() {
        let out = run("fish\nexit\n");
        assert!(out.contains("Nothing found."));
    }

    #[test]
    fn end_of_input_ends_session() {
        let out = run("");
        assert!(out.contains("Done."));
    }

    #[test]
    fn table_rows_are_fixed_width() {
        let cat = catalog();
        let hits: Vec<&PriceRecord> = cat.records().iter().collect();
        let mut out = Vec::new();
        write_table(&mut out, &hits).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("1     Beef "));
        assert_eq!(&row[6 + 40 + 1..6 + 40 + 1 + 10], "500.0     ");
    }
}

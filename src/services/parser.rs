//! Freeform database-list parsing
//!
//! Turns one line of user text into a name/size pair. The grammar is an
//! ordered set of rules and every non-blank line parses; a line with no
//! recognizable size falls back to the default.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::estimate::RawDbEntry;

/// Size assumed when a line or CSV row carries no usable size
pub const DEFAULT_DB_SIZE_GB: u64 = 50;

/// Name assumed when a CSV row has no name field
const DEFAULT_CSV_NAME: &str = "Unnamed DB";

/// Regex to match a size with an explicit GB unit
static GB_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*GB").unwrap());

/// Regex to match `<name><separator><integer>` lines
static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[|:-]\s*(\d+)\s*$").unwrap());

/// Regex to match lines ending in a bare integer
static END_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s+(\d+)\s*$").unwrap());

/// Parse one line of freeform input into a database entry.
///
/// Rules, first match wins:
/// 1. a number followed by a `GB` unit anywhere in the line,
/// 2. `<name><separator><integer>` with separator `|`, `:` or `-`,
/// 3. `<name> <integer>` with the integer at end of line,
/// 4. the whole line is the name, size defaults to 50 GB.
///
/// Blank lines yield `None`; everything else parses.
pub fn parse_db_line(line: &str) -> Option<RawDbEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = GB_RE.captures(trimmed) {
        let matched = caps.get(0)?;
        let size_gb = parse_size(caps.get(1)?.as_str());
        let remainder = format!("{}{}", &trimmed[..matched.start()], &trimmed[matched.end()..]);
        let name = strip_separators(&remainder);
        let name = if name.is_empty() {
            format!("DB_{}GB", size_gb)
        } else {
            name.to_string()
        };
        return Some(RawDbEntry { name, size_gb });
    }

    if let Some(caps) = SEPARATOR_RE.captures(trimmed) {
        return Some(RawDbEntry {
            name: caps.get(1)?.as_str().trim().to_string(),
            size_gb: parse_size(caps.get(2)?.as_str()),
        });
    }

    if let Some(caps) = END_NUMBER_RE.captures(trimmed) {
        return Some(RawDbEntry {
            name: caps.get(1)?.as_str().trim().to_string(),
            size_gb: parse_size(caps.get(2)?.as_str()),
        });
    }

    Some(RawDbEntry {
        name: trimmed.to_string(),
        size_gb: DEFAULT_DB_SIZE_GB,
    })
}

/// Parse a whole text block, one database per line, skipping blank lines.
pub fn parse_db_list(text: &str) -> Vec<RawDbEntry> {
    text.lines().filter_map(parse_db_line).collect()
}

/// Parse CSV content as `name,size_gb` rows.
///
/// There is no header handling: every non-blank record is data. A missing
/// name becomes "Unnamed DB"; a missing or non-numeric size becomes the
/// default.
pub fn parse_csv(content: &str) -> Vec<RawDbEntry> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    reader
        .records()
        .filter_map(|record| record.ok())
        // A whitespace-only line trims to a single empty field; drop it.
        // A row of separators ("," alone) still counts as data.
        .filter(|record| record.len() > 1 || record.iter().any(|field| !field.is_empty()))
        .map(|record| {
            let name = record
                .get(0)
                .filter(|field| !field.is_empty())
                .unwrap_or(DEFAULT_CSV_NAME)
                .to_string();
            let size_gb = record
                .get(1)
                .and_then(|field| field.parse().ok())
                .unwrap_or(DEFAULT_DB_SIZE_GB);
            RawDbEntry { name, size_gb }
        })
        .collect()
}

fn parse_size(digits: &str) -> u64 {
    digits.parse().unwrap_or(DEFAULT_DB_SIZE_GB)
}

/// Trim the residual name after removing the `<size>GB` token: one leading
/// and one trailing separator character plus surrounding whitespace.
fn strip_separators(name: &str) -> &str {
    let name = name.trim();
    let name = match name.strip_prefix(['|', ':', '-']) {
        Some(rest) => rest.trim_start(),
        None => name,
    };
    match name.strip_suffix(['|', ':', '-']) {
        Some(rest) => rest.trim_end(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, size_gb: u64) -> RawDbEntry {
        RawDbEntry {
            name: name.to_string(),
            size_gb,
        }
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_db_line(""), None);
        assert_eq!(parse_db_line("   "), None);
        assert_eq!(parse_db_line("\t"), None);
    }

    #[test]
    fn test_gb_unit_rule() {
        assert_eq!(parse_db_line("Sales - 80GB"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales 80GB"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales | 80 gb"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("120GB Warehouse"), Some(entry("Warehouse", 120)));
    }

    #[test]
    fn test_gb_unit_rule_synthesizes_name_when_missing() {
        assert_eq!(parse_db_line("80GB"), Some(entry("DB_80GB", 80)));
        assert_eq!(parse_db_line("- 80GB"), Some(entry("DB_80GB", 80)));
    }

    #[test]
    fn test_separator_rule() {
        assert_eq!(parse_db_line("Sales|80"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales:80"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales - 80"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales-80"), Some(entry("Sales", 80)));
    }

    #[test]
    fn test_end_number_rule() {
        assert_eq!(parse_db_line("Sales 80"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales Archive 120"), Some(entry("Sales Archive", 120)));
    }

    #[test]
    fn test_bare_name_defaults_size() {
        assert_eq!(parse_db_line("Sales"), Some(entry("Sales", DEFAULT_DB_SIZE_GB)));
        assert_eq!(parse_db_line("DB2019"), Some(entry("DB2019", DEFAULT_DB_SIZE_GB)));
    }

    #[test]
    fn test_gb_rule_wins_over_separator_rules() {
        // "Sales - 80GB" also matches the separator shape; the unit rule
        // must take it first.
        assert_eq!(parse_db_line("Sales - 80GB"), Some(entry("Sales", 80)));
        assert_eq!(parse_db_line("Sales:80GB"), Some(entry("Sales", 80)));
    }

    #[test]
    fn test_canonical_form_round_trips() {
        for line in ["Sales - 80GB", "Sales|80", "Sales:2000", "Sales"] {
            let first = parse_db_line(line).unwrap();
            let again = parse_db_line(&first.canonical_line()).unwrap();
            assert_eq!(first, again, "canonical form of {:?} must re-parse", line);
        }
    }

    #[test]
    fn test_batch_keeps_order_and_drops_only_blanks() {
        let text = "Sales - 80GB\n\n  \nCRM|120\nLegacy\n";
        let entries = parse_db_list(text);
        assert_eq!(
            entries,
            vec![entry("Sales", 80), entry("CRM", 120), entry("Legacy", 50)]
        );
    }

    #[test]
    fn test_csv_rows() {
        let content = "Sales,80\nCRM,120\n";
        assert_eq!(parse_csv(content), vec![entry("Sales", 80), entry("CRM", 120)]);
    }

    #[test]
    fn test_csv_defaults() {
        let content = "Sales\n,90\nCRM,abc\n,\n";
        assert_eq!(
            parse_csv(content),
            vec![
                entry("Sales", DEFAULT_DB_SIZE_GB),
                entry("Unnamed DB", 90),
                entry("CRM", DEFAULT_DB_SIZE_GB),
                entry("Unnamed DB", DEFAULT_DB_SIZE_GB),
            ]
        );
    }

    #[test]
    fn test_csv_skips_whitespace_only_lines() {
        let content = "Sales,80\n   \n\nCRM,120\n";
        assert_eq!(parse_csv(content), vec![entry("Sales", 80), entry("CRM", 120)]);
    }

    #[test]
    fn test_csv_has_no_header_handling() {
        let content = "name,size\nSales,80\n";
        let entries = parse_csv(content);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entry("name", DEFAULT_DB_SIZE_GB));
    }
}

//! FILENAME: core/ingest/src/csv.rs
//! Minimal RFC 4180 line parsing.
//!
//! Quoted fields may contain commas and doubled escaped quotes; fields
//! never span lines in the sources this crate loads.

/// Splits one CSV line into fields, honoring RFC 4180 quoting.
pub(crate) fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next(); // consume escaped quote
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}

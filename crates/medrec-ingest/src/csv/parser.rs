//! Line-oriented CSV text parser.

/// Parsed CSV text: one entry per non-blank line, one cell per field.
pub type Grid = Vec<Vec<String>>;

/// Parses CSV text into a grid of trimmed cells.
///
/// Lines are split on `\n` and blank lines are dropped. Within a line a `"`
/// toggles quoted mode and is itself discarded; commas split fields only
/// outside quotes. Doubled quotes (`""`) are not an escape: they toggle twice
/// and contribute nothing. A line never spans a newline, so an unterminated
/// quote simply runs to the end of its line.
///
/// Never fails; malformed input produces whatever split the rules above give.
pub fn parse_csv(content: &str) -> Grid {
    content
        .split('\n')
        .filter(|line| !trim_cell(line).is_empty())
        .map(parse_csv_line)
        .collect()
}

/// Parses a single line into trimmed fields.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(trim_cell(&current).to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(trim_cell(&current).to_string());
    fields
}

/// Trims whitespace, carriage returns and byte-order marks from both ends.
pub fn trim_cell(value: &str) -> &str {
    value.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}')
}

//! Parsing `zoxide query --list --score` style listings.

use super::ScoreTable;

/// Parse one `<score> <path...>` line.
///
/// The path is the remaining whitespace-separated fields re-joined with single
/// spaces. Lines without a path, or whose first field is not a finite number,
/// yield `None`.
pub fn parse_line(line: &str) -> Option<(String, f64)> {
    let mut fields = line.split_whitespace();
    let score = fields.next()?.parse::<f64>().ok().filter(|s| s.is_finite())?;

    let path = fields.collect::<Vec<_>>().join(" ");
    if path.is_empty() {
        return None;
    }

    Some((path, score))
}

/// Build a table from a full listing, skipping lines that do not parse.
pub fn parse_listing(listing: &str) -> ScoreTable {
    let mut skipped = 0usize;
    let table: ScoreTable = listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                tracing::trace!(line, "Skipping unparsable score line");
                skipped += 1;
            }
            parsed
        })
        .collect();

    tracing::debug!(entries = table.len(), skipped, "Parsed score listing");
    table
}

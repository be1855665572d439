use crate::numeric::parse_int_prefix;

/// Numeric part of a generated identifier, e.g. 12 for `PAT012`.
///
/// Identifiers that do not carry a number after the prefix yield `None`.
pub fn id_number(prefix: &str, id: &str) -> Option<i64> {
    parse_int_prefix(&id.replacen(prefix, "", 1))
}

/// Formats `number` as `<prefix><number>` padded to at least three digits.
pub fn format_id(prefix: &str, number: i64) -> String {
    format!("{prefix}{number:03}")
}

/// Next identifier after the highest numbered one in `existing`.
///
/// Unnumbered identifiers are ignored; an empty collection starts at `001`.
pub fn next_id<'a, I>(prefix: &str, existing: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .filter_map(|id| id_number(prefix, id))
        .fold(0i64, i64::max);
    format_id(prefix, max.saturating_add(1))
}

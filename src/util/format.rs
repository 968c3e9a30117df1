//! Small display-formatting helpers for cards and tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount in Taka for price tags and totals.
/// Whole amounts drop the fraction; others keep two places.
pub fn money(amount: f64) -> String {
    if (amount - amount.trunc()).abs() < f64::EPSILON {
        format!("\u{9f3}{amount:.0}")
    } else {
        format!("\u{9f3}{amount:.2}")
    }
}

/// Render an ISO-8601 timestamp as a compact `date time` label.
/// Falls back to the raw string when the shape is unexpected.
pub fn date_label(iso: &str) -> String {
    match iso.split_once('T') {
        Some((date, rest)) => {
            // Keep hh:mm, dropping seconds and timezone suffixes.
            let time: String = rest.chars().take(5).collect();
            if time.len() == 5 {
                format!("{date} {time}")
            } else {
                date.to_owned()
            }
        }
        None => iso.to_owned(),
    }
}

/// Date-only label for payment history rows.
pub fn date_only(iso: &str) -> String {
    iso.split_once('T').map_or_else(|| iso.to_owned(), |(date, _)| date.to_owned())
}

/// Truncate long opaque ids (payment references) for table cells.
pub fn short_id(id: &str, max: usize) -> String {
    if id.chars().count() <= max {
        id.to_owned()
    } else {
        let head: String = id.chars().take(max).collect();
        format!("{head}\u{2026}")
    }
}

/// First letter of a display name for the fallback avatar.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

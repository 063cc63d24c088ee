//! Display formatting and HTML escaping helpers.
//!
//! These are leaf functions with no I/O: they turn raw field values into
//! safe display strings and humanized labels.

/// Escapes the five HTML-significant characters (`& < > " '`).
///
/// Note that escaping is **not** idempotent: running the result through
/// `escape_html` again escapes the `&` of each entity (`&lt;` becomes
/// `&amp;lt;`). Callers must escape exactly once, at render time.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Humanizes a field name for display: `vehicle_make` -> `Vehicle Make`.
///
/// Underscores become spaces, camelCase words are split, and every word is
/// capitalized.
pub fn format_label(field: &str) -> String {
    let mut spaced = String::with_capacity(field.len() + 4);
    for c in field.chars() {
        if c == '_' {
            spaced.push(' ');
        } else if c.is_uppercase() {
            spaced.push(' ');
            spaced.push(c);
        } else {
            spaced.push(c);
        }
    }

    let words: Vec<String> = spaced
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    words.join(" ")
}

/// Formats a mileage reading as a human-friendly string.
///
/// `None` renders as `N/A`; zero is a real reading, not a missing one.
pub fn format_mileage(mileage: Option<i64>) -> String {
    match mileage {
        Some(miles) => format!("{} miles", group_thousands(miles)),
        None => "N/A".to_string(),
    }
}

/// Inserts `,` thousands separators: `12345` -> `12,345`.
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && i % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

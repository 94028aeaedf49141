//! Formatting utilities used for CLI and report outputs.

use rust_decimal::Decimal;

/// Storage form of an employee name: trimmed and lower-cased.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Display form of an employee name: every alphabetic run starts upper-case.
///
/// `"mary-jane o'neil"` → `"Mary-Jane O'Neil"`
pub fn display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// `1234.5` → `"$1234.50"`
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", amount)
}

/// Hourly rate at full stored precision, never fewer than two decimals.
///
/// `20` → `"20.00"`, `18.555` → `"18.555"`
pub fn rate_text(rate: Decimal) -> String {
    let r = rate.normalize();
    if r.scale() < 2 {
        format!("{:.2}", r)
    } else {
        r.to_string()
    }
}

/// Fixed two-decimal rendering for hours, rates and amounts.
pub fn fixed2(value: Decimal) -> String {
    format!("{:.2}", value)
}

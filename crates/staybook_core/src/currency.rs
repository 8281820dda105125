//! Rupee formatting helpers.
//!
//! Two conventions are in play on the booking pages: the live total display
//! writes the raw amount with two decimals and no grouping (`₹3500.00`),
//! while listing prices use the Indian grouping convention of a final group
//! of three digits preceded by groups of two (`₹12,34,567.00`).

/// The rupee sign prefixed to every formatted amount.
pub const RUPEE_SIGN: &str = "₹";

/// Format an amount for the live booking-total display: rupee sign plus the
/// amount with exactly two decimals, no digit grouping.
pub fn display_amount(amount: f64) -> String {
    format!("{RUPEE_SIGN}{amount:.2}")
}

/// Format an amount under the Indian (en-IN) currency convention: the last
/// three integer digits form one group, every group before that has two.
pub fn format_inr(amount: f64) -> String {
    let negative = amount < 0.0;
    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed
        .split_once('.')
        .unwrap_or((fixed.as_str(), "00"));

    let grouped = group_indian(integer);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{RUPEE_SIGN}{grouped}.{fraction}")
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let bytes = head.as_bytes();
    let mut end = bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = groups.join(",");
    out.push(',');
    out.push_str(tail);
    out
}

//! Display formatting for probabilities.
//!
//! These are presentation helpers, but their numeric rules (adaptive
//! decimal places, `1 in N` rounding) are part of the calculator's
//! observable behavior, so they live here where they can be tested
//! without a UI.

use crate::numbers::round_f64_to_u64;

/// Placeholder shown where a "1 in N" framing has no meaning.
pub const ONE_IN_PLACEHOLDER: &str = "\u{2014}";

/// Format a probability as a percentage.
///
/// Non-finite and non-positive inputs render as `0.00%`. Below 0.1% the
/// output keeps 4 decimal places so small odds stay distinguishable,
/// otherwise 2.
#[must_use]
pub fn pct(p: f64) -> String {
    if !p.is_finite() || p <= 0.0 {
        return "0.00%".to_string();
    }
    let percent = p * 100.0;
    if p < 0.001 {
        format!("{percent:.4}%")
    } else {
        format!("{percent:.2}%")
    }
}

/// Format a probability as `1 in N`, with `N = round(1/p)` and thousands
/// separators. Non-finite and non-positive inputs render as a dash.
#[must_use]
pub fn one_in(p: f64) -> String {
    if !p.is_finite() || p <= 0.0 {
        return ONE_IN_PLACEHOLDER.to_string();
    }
    let inverse = 1.0 / p;
    if !inverse.is_finite() || inverse <= 0.0 {
        return ONE_IN_PLACEHOLDER.to_string();
    }
    format!("1 in {}", group_thousands(round_f64_to_u64(inverse)))
}

/// Render an integer with comma separators, e.g. `12,345`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

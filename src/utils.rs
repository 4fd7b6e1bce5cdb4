use crate::error::{PlannerError, Result};

/// Rounds to 2 decimal places, half away from zero (`f64::round`).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount as a currency label, e.g. `₹1200.00`.
///
/// Only the label changes with the symbol; no conversion is applied.
pub fn format_money(amount: f64, symbol: &str) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", symbol, amount.abs())
    } else {
        format!("{}{:.2}", symbol, amount)
    }
}

/// Rejects negative and non-finite amounts.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(PlannerError::InvalidInput { field, value });
    }
    Ok(())
}

//! Financial ratio derivation
//!
//! Pure functions from extracted metrics to the five standard ratios.
//! Every division is guarded; a zero denominator yields 0, never NaN or
//! infinity.

use crate::types::{Metrics, Ratios};

fn pct(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator * 100.0
    }
}

/// Derive the standard ratio set from headline metrics.
pub fn calculate_ratios(m: &Metrics) -> Ratios {
    Ratios {
        debt_ratio: pct(m.total_liabilities, m.total_assets),
        equity_ratio: pct(m.total_equity, m.total_assets),
        net_profit_margin: pct(m.net_income, m.revenue),
        operating_profit_margin: pct(m.operating_income, m.revenue),
        roe: pct(m.net_income, m.total_equity),
    }
}

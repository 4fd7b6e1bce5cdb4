use crate::schema::InvestmentHolding;
use crate::utils::round2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub holdings: usize,
    pub total_invested: f64,
    pub total_value: f64,
    pub total_gain: f64,
    /// Gain as a percentage of the amount invested; `None` when nothing was invested.
    pub return_percent: Option<f64>,
}

impl PortfolioSummary {
    pub fn from_holdings(holdings: &[InvestmentHolding]) -> Self {
        let total_invested: f64 = holdings.iter().map(|h| h.amount_invested).sum();
        let total_value: f64 = holdings.iter().map(|h| h.current_value).sum();
        let total_gain = total_value - total_invested;

        let return_percent = if total_invested > 0.0 {
            Some(round2(total_gain / total_invested * 100.0))
        } else {
            None
        };

        Self {
            holdings: holdings.len(),
            total_invested: round2(total_invested),
            total_value: round2(total_value),
            total_gain: round2(total_gain),
            return_percent,
        }
    }

    pub fn best_performer(holdings: &[InvestmentHolding]) -> Option<&InvestmentHolding> {
        holdings
            .iter()
            .max_by(|a, b| a.gain().total_cmp(&b.gain()))
    }
}

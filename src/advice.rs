//! Prompt construction for the text-generation service and fallback handling
//! when it fails.

use crate::error::Result;
use crate::schema::InvestmentHolding;
use crate::utils::format_money;
use log::{error, info};
use serde::{Deserialize, Serialize};

/// A text-generation backend: prompt in, free-form text out.
#[allow(async_fn_in_trait)]
pub trait AdviceProvider {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdviceKind {
    Savings,
    DebtPlan,
    Portfolio,
    Report,
}

impl AdviceKind {
    pub fn fallback(&self) -> &'static str {
        match self {
            AdviceKind::Savings => "Failed to generate advice.",
            AdviceKind::DebtPlan => "Failed to generate debt optimization plan.",
            AdviceKind::Portfolio => "Failed to analyze portfolio.",
            AdviceKind::Report => "Failed to generate financial report.",
        }
    }

    /// Text used when the service answers with nothing.
    pub fn empty_response(&self) -> Option<&'static str> {
        match self {
            AdviceKind::DebtPlan => Some("No actionable advice generated."),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub text: String,
    /// False when `text` is a fallback message
    pub generated: bool,
}

pub fn savings_advice_prompt(income: f64, expenses: f64, savings_goal: f64) -> String {
    format!(
        "Provide personalized financial advice for a person with monthly income {}, monthly expenses {}, and a savings goal of {}. Suggest ways to reduce expenses and increase savings.",
        income, expenses, savings_goal
    )
}

pub fn debt_plan_prompt(
    principal: f64,
    annual_rate_percent: f64,
    monthly_payment: f64,
    currency_symbol: &str,
) -> String {
    format!(
        "Provide suggestions on how to manage and repay a debt of {} with an interest rate of {}% and a monthly payment of {}. Include strategies to accelerate debt repayment and reduce interest costs.",
        format_money(principal, currency_symbol),
        annual_rate_percent,
        format_money(monthly_payment, currency_symbol)
    )
}

pub fn portfolio_prompt(investments: &[InvestmentHolding]) -> Result<String> {
    let investments_json = serde_json::to_string(investments)?;
    Ok(format!(
        "Given the following investments: {}, suggest ways to optimize the portfolio considering market trends and personal financial goals.",
        investments_json
    ))
}

pub fn financial_report_prompt(
    income: f64,
    expenses: f64,
    investments: &[InvestmentHolding],
) -> Result<String> {
    let investments_json = serde_json::to_string(investments)?;
    Ok(format!(
        "Create a detailed financial report for a person with income {}, monthly expenses {}, and the following investments: {}. Include recommendations for optimizing finances.",
        income, expenses, investments_json
    ))
}

/// Asks the provider for advice, substituting the kind's fallback text on failure.
pub async fn request_advice<A: AdviceProvider>(
    provider: &A,
    kind: AdviceKind,
    prompt: &str,
) -> Advice {
    match provider.generate(prompt).await {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                if let Some(empty) = kind.empty_response() {
                    return Advice {
                        kind,
                        text: empty.to_string(),
                        generated: false,
                    };
                }
            }
            info!("Received {:?} advice ({} chars)", kind, trimmed.len());
            Advice {
                kind,
                text: trimmed.to_string(),
                generated: true,
            }
        }
        Err(e) => {
            error!("Error generating {:?} advice: {}", kind, e);
            Advice {
                kind,
                text: kind.fallback().to_string(),
                generated: false,
            }
        }
    }
}

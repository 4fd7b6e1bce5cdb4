use crate::ledger::ExpenseLedger;
use crate::schema::{DebtAccount, FinancialSnapshot, InvestmentHolding, SavingsGoal};
use serde::{Deserialize, Serialize};

/// Per-user state, owned by the caller and passed to each command.
///
/// `monthly_expenses` is the single figure used by projections and advice. It is
/// overwritten by uploads and insight requests. `expenses` holds individually
/// tracked entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinanceSession {
    pub income: f64,
    pub monthly_expenses: f64,
    pub savings_goal: Option<SavingsGoal>,
    pub expenses: ExpenseLedger,
    pub debts: Vec<DebtAccount>,
    pub investments: Vec<InvestmentHolding>,
    pub uploaded: Option<ExpenseLedger>,
}

impl FinanceSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn savings_target(&self) -> f64 {
        self.savings_goal
            .as_ref()
            .map(|g| g.target_amount)
            .unwrap_or(0.0)
    }

    pub fn total_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.principal).sum()
    }

    pub fn snapshot(&self) -> FinancialSnapshot {
        FinancialSnapshot {
            income: self.income,
            monthly_expenses: self.monthly_expenses,
            savings_goal: self.savings_goal.clone(),
            tracked_expense_total: self.expenses.total(),
            expenses_by_category: self.expenses.by_category(),
            debts: self.debts.clone(),
            investments: self.investments.clone(),
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

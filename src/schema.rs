use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct DebtAccount {
    #[serde(default)]
    #[schemars(description = "Display name of the debt (e.g., 'Car Loan', 'Credit Card')")]
    pub name: String,

    #[schemars(description = "Outstanding balance on which interest accrues. Must be >= 0.")]
    pub principal: f64,

    #[schemars(
        description = "Nominal annual interest rate in percent (12.0 means 12% a year, accrued as 1% a month). Must be >= 0."
    )]
    pub annual_interest_rate_percent: f64,

    #[schemars(
        description = "Fixed amount paid every month. Must exceed the first month's interest for the debt to ever be repaid."
    )]
    pub monthly_payment: f64,
}

impl DebtAccount {
    pub fn new(
        name: impl Into<String>,
        principal: f64,
        annual_interest_rate_percent: f64,
        monthly_payment: f64,
    ) -> Self {
        Self {
            name: name.into(),
            principal,
            annual_interest_rate_percent,
            monthly_payment,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseEntry {
    #[schemars(description = "Spending category used for grouping (e.g., 'Rent', 'Groceries')")]
    pub category: String,

    #[schemars(description = "Amount spent. Must be >= 0.")]
    pub amount: f64,

    #[schemars(description = "Date of the expense in YYYY-MM-DD format")]
    pub date: NaiveDate,

    #[serde(default)]
    #[schemars(description = "Whether the expense repeats every month")]
    pub recurring: bool,
}

impl ExpenseEntry {
    pub fn new(category: impl Into<String>, amount: f64, date: NaiveDate, recurring: bool) -> Self {
        Self {
            category: category.into(),
            amount,
            date,
            recurring,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct SavingsGoal {
    #[schemars(description = "Name of the goal (e.g., 'Emergency Fund')")]
    pub name: String,

    #[schemars(description = "Amount to accumulate. Must be >= 0.")]
    pub target_amount: f64,

    #[serde(default)]
    #[schemars(description = "Optional date by which the goal should be reached")]
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct InvestmentHolding {
    #[schemars(description = "Name of the holding (e.g., 'Index Fund', 'Gold ETF')")]
    pub investment_name: String,

    #[schemars(description = "Total amount originally invested")]
    pub amount_invested: f64,

    #[schemars(description = "Current market value as entered by the user")]
    pub current_value: f64,
}

impl InvestmentHolding {
    pub fn new(name: impl Into<String>, amount_invested: f64, current_value: f64) -> Self {
        Self {
            investment_name: name.into(),
            amount_invested,
            current_value,
        }
    }

    pub fn gain(&self) -> f64 {
        self.current_value - self.amount_invested
    }
}

/// Point-in-time export of a session, used for reports and JSON export.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FinancialSnapshot {
    #[schemars(description = "Monthly income")]
    pub income: f64,

    #[schemars(description = "Monthly expenses used for projections and advice")]
    pub monthly_expenses: f64,

    #[schemars(description = "Active savings goal, if one has been set")]
    pub savings_goal: Option<SavingsGoal>,

    #[schemars(description = "Sum of all tracked expense entries")]
    pub tracked_expense_total: f64,

    #[schemars(description = "Tracked expense totals grouped by category")]
    pub expenses_by_category: BTreeMap<String, f64>,

    pub debts: Vec<DebtAccount>,

    pub investments: Vec<InvestmentHolding>,
}

impl FinancialSnapshot {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(FinancialSnapshot)
    }

    pub fn schema_as_json() -> Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

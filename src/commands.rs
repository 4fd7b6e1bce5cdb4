use crate::advice::{
    debt_plan_prompt, financial_report_prompt, portfolio_prompt, request_advice,
    savings_advice_prompt, Advice, AdviceKind, AdviceProvider,
};
use crate::amortization::AmortizationSchedule;
use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::ingestion::load_expenses_csv;
use crate::portfolio::PortfolioSummary;
use crate::savings::SavingsProjector;
use crate::schema::{DebtAccount, ExpenseEntry, InvestmentHolding, SavingsGoal};
use crate::session::FinanceSession;
use crate::utils::{ensure_non_negative, format_money};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    ExpenseTracker,
    SavingsGoals,
    AiInsights,
    DebtTracker,
    InvestmentPortfolio,
    Reports,
    AdvancedAnalytics,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Dashboard,
        Page::ExpenseTracker,
        Page::SavingsGoals,
        Page::AiInsights,
        Page::DebtTracker,
        Page::InvestmentPortfolio,
        Page::Reports,
        Page::AdvancedAnalytics,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::ExpenseTracker => "Expense Tracker",
            Page::SavingsGoals => "Savings Goals",
            Page::AiInsights => "AI Insights",
            Page::DebtTracker => "Debt Tracker",
            Page::InvestmentPortfolio => "Investment Portfolio",
            Page::Reports => "Reports",
            Page::AdvancedAnalytics => "Advanced Analytics",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        Page::ALL
            .iter()
            .copied()
            .find(|p| p.title().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown page: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    UploadExpenses {
        csv: String,
    },
    AddExpense(ExpenseEntry),
    SetSavingsGoal(SavingsGoal),
    GenerateInsights {
        income: f64,
        expenses: f64,
        savings_goal: f64,
    },
    AddDebt(DebtAccount),
    AddInvestment(InvestmentHolding),
    GenerateReport,
    PredictSavings {
        months: u32,
    },
}

impl Command {
    pub fn page(&self) -> Page {
        match self {
            Command::UploadExpenses { .. } => Page::Dashboard,
            Command::AddExpense(_) => Page::ExpenseTracker,
            Command::SetSavingsGoal(_) => Page::SavingsGoals,
            Command::GenerateInsights { .. } => Page::AiInsights,
            Command::AddDebt(_) => Page::DebtTracker,
            Command::AddInvestment(_) => Page::InvestmentPortfolio,
            Command::GenerateReport => Page::Reports,
            Command::PredictSavings { .. } => Page::AdvancedAnalytics,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CommandOutcome {
    ExpensesLoaded {
        rows: usize,
        total: f64,
        by_category: BTreeMap<String, f64>,
    },
    ExpenseAdded {
        message: String,
        total: f64,
        by_category: BTreeMap<String, f64>,
    },
    GoalSaved {
        message: String,
    },
    Insights(Advice),
    DebtAdded {
        message: String,
        schedule: AmortizationSchedule,
        plan: Advice,
    },
    InvestmentAdded {
        message: String,
        summary: PortfolioSummary,
        analysis: Advice,
    },
    Report(Advice),
    SavingsProjected {
        months: u32,
        amount: f64,
        message: String,
    },
}

/// Routes commands to their handlers against a caller-supplied session.
pub struct Dispatcher<A> {
    provider: A,
    config: PlannerConfig,
    projector: SavingsProjector,
}

impl<A: AdviceProvider> Dispatcher<A> {
    pub fn new(provider: A, config: PlannerConfig) -> Self {
        Self {
            provider,
            config,
            projector: SavingsProjector,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn provider(&self) -> &A {
        &self.provider
    }

    /// Applies `command` to `session`. On error the session is left unchanged.
    pub async fn dispatch(
        &self,
        session: &mut FinanceSession,
        command: Command,
    ) -> Result<CommandOutcome> {
        info!("Dispatching {:?} command", command.page());

        match command {
            Command::UploadExpenses { csv } => self.upload_expenses(session, &csv),
            Command::AddExpense(entry) => self.add_expense(session, entry),
            Command::SetSavingsGoal(goal) => self.set_savings_goal(session, goal),
            Command::GenerateInsights {
                income,
                expenses,
                savings_goal,
            } => {
                self.generate_insights(session, income, expenses, savings_goal)
                    .await
            }
            Command::AddDebt(debt) => self.add_debt(session, debt).await,
            Command::AddInvestment(holding) => self.add_investment(session, holding).await,
            Command::GenerateReport => self.generate_report(session).await,
            Command::PredictSavings { months } => self.predict_savings(session, months),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_money(amount, &self.config.currency_symbol)
    }

    fn upload_expenses(&self, session: &mut FinanceSession, csv: &str) -> Result<CommandOutcome> {
        let ledger = load_expenses_csv(csv.as_bytes())?;
        let total = ledger.total();
        let outcome = CommandOutcome::ExpensesLoaded {
            rows: ledger.len(),
            total,
            by_category: ledger.by_category(),
        };

        session.monthly_expenses = total;
        session.uploaded = Some(ledger);
        Ok(outcome)
    }

    fn add_expense(
        &self,
        session: &mut FinanceSession,
        entry: ExpenseEntry,
    ) -> Result<CommandOutcome> {
        ensure_non_negative("amount", entry.amount)?;

        let message = format!(
            "Expense of {} added to {} on {}.",
            self.money(entry.amount),
            entry.category,
            entry.date
        );
        session.expenses.add(entry);

        Ok(CommandOutcome::ExpenseAdded {
            message,
            total: session.expenses.total(),
            by_category: session.expenses.by_category(),
        })
    }

    fn set_savings_goal(
        &self,
        session: &mut FinanceSession,
        goal: SavingsGoal,
    ) -> Result<CommandOutcome> {
        ensure_non_negative("target_amount", goal.target_amount)?;

        let deadline = goal
            .deadline
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());
        let message = format!(
            "Goal '{}' for {} saved with deadline {}.",
            goal.name,
            self.money(goal.target_amount),
            deadline
        );
        session.savings_goal = Some(goal);

        Ok(CommandOutcome::GoalSaved { message })
    }

    async fn generate_insights(
        &self,
        session: &mut FinanceSession,
        income: f64,
        expenses: f64,
        savings_goal: f64,
    ) -> Result<CommandOutcome> {
        ensure_non_negative("income", income)?;
        ensure_non_negative("expenses", expenses)?;
        ensure_non_negative("savings_goal", savings_goal)?;
        if income <= 0.0 {
            return Err(PlannerError::InvalidInput {
                field: "income",
                value: income,
            });
        }

        session.income = income;
        session.monthly_expenses = expenses;
        match session.savings_goal.as_mut() {
            Some(goal) => goal.target_amount = savings_goal,
            None => {
                session.savings_goal = Some(SavingsGoal {
                    name: "Savings Goal".to_string(),
                    target_amount: savings_goal,
                    deadline: None,
                })
            }
        }

        let prompt = savings_advice_prompt(income, expenses, savings_goal);
        let advice = request_advice(&self.provider, AdviceKind::Savings, &prompt).await;
        Ok(CommandOutcome::Insights(advice))
    }

    async fn add_debt(
        &self,
        session: &mut FinanceSession,
        debt: DebtAccount,
    ) -> Result<CommandOutcome> {
        let schedule = self.config.scheduler().schedule_for(&debt)?;

        let message = format!(
            "Debt '{}' of {} at {}% interest added.",
            debt.name,
            self.money(debt.principal),
            debt.annual_interest_rate_percent
        );
        let prompt = debt_plan_prompt(
            debt.principal,
            debt.annual_interest_rate_percent,
            debt.monthly_payment,
            &self.config.currency_symbol,
        );
        session.debts.push(debt);

        let plan = request_advice(&self.provider, AdviceKind::DebtPlan, &prompt).await;
        Ok(CommandOutcome::DebtAdded {
            message,
            schedule,
            plan,
        })
    }

    async fn add_investment(
        &self,
        session: &mut FinanceSession,
        holding: InvestmentHolding,
    ) -> Result<CommandOutcome> {
        ensure_non_negative("amount_invested", holding.amount_invested)?;
        ensure_non_negative("current_value", holding.current_value)?;

        let message = format!(
            "Investment '{}' added with current value {}.",
            holding.investment_name,
            self.money(holding.current_value)
        );
        session.investments.push(holding);

        let summary = PortfolioSummary::from_holdings(&session.investments);
        let prompt = portfolio_prompt(&session.investments)?;
        let analysis = request_advice(&self.provider, AdviceKind::Portfolio, &prompt).await;

        Ok(CommandOutcome::InvestmentAdded {
            message,
            summary,
            analysis,
        })
    }

    async fn generate_report(&self, session: &FinanceSession) -> Result<CommandOutcome> {
        let prompt = financial_report_prompt(
            session.income,
            session.monthly_expenses,
            &session.investments,
        )?;
        let report = request_advice(&self.provider, AdviceKind::Report, &prompt).await;
        Ok(CommandOutcome::Report(report))
    }

    fn predict_savings(&self, session: &FinanceSession, months: u32) -> Result<CommandOutcome> {
        if months == 0 {
            return Err(PlannerError::InvalidInput {
                field: "months",
                value: 0.0,
            });
        }

        let amount = self
            .projector
            .project(session.income, session.monthly_expenses, months);
        let message = format!(
            "Projected savings over {} months: {}",
            months,
            self.money(amount)
        );

        Ok(CommandOutcome::SavingsProjected {
            months,
            amount,
            message,
        })
    }
}

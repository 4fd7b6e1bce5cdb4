//! # Budget Planner
//!
//! Core numeric engine and session plumbing for a personal budget planner.
//!
//! ## Core Concepts
//!
//! - **Amortization**: A fixed monthly payment split between interest and principal,
//!   month by month, until the balance reaches zero
//! - **Savings Projection**: Monthly surplus (income minus expenses) extrapolated over a horizon;
//!   a deficit projects to zero
//! - **Expense Ledger**: Tracked or CSV-imported expenses with totals per category
//! - **Session**: Caller-owned state passed into each [`Command`]
//! - **Advice**: Prompts built from session figures and sent to an [`AdviceProvider`]
//!   (a Gemini client is available with the `gemini` feature)
//!
//! ## Example
//!
//! ```rust
//! use budget_planner::*;
//!
//! let schedule = calculate_debt_schedule(1200.0, 12.0, 200.0).unwrap();
//! let first = schedule.rows()[0];
//! assert_eq!(first.interest, 12.0);
//! assert_eq!(first.principal_payment, 188.0);
//! assert_eq!(first.remaining_balance, 1012.0);
//!
//! assert_eq!(project_savings(5000.0, 3000.0, 6), 12000.0);
//! assert_eq!(project_savings(2000.0, 2500.0, 12), 0.0);
//! ```

pub mod advice;
pub mod amortization;
pub mod commands;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod ledger;
pub mod portfolio;
pub mod savings;
pub mod schema;
pub mod session;
pub mod utils;

#[cfg(feature = "gemini")]
pub mod llm;

pub use advice::{request_advice, Advice, AdviceKind, AdviceProvider};
pub use amortization::{
    calculate_debt_schedule, AmortizationRow, AmortizationSchedule, AmortizationScheduler,
    DEFAULT_MAX_SCHEDULE_MONTHS,
};
pub use commands::{Command, CommandOutcome, Dispatcher, Page};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use ingestion::{load_expenses_csv, load_expenses_csv_path};
pub use ledger::ExpenseLedger;
pub use portfolio::PortfolioSummary;
pub use savings::{months_to_goal, project_savings, SavingsProjector};
pub use schema::*;
pub use session::FinanceSession;
pub use utils::{format_money, round2};

use budget_planner::*;
use chrono::NaiveDate;
use std::cell::RefCell;

/// Records prompts and answers with a canned reply.
struct RecordingAdvisor {
    reply: String,
    prompts: RefCell<Vec<String>>,
}

impl RecordingAdvisor {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: RefCell::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> String {
        self.prompts.borrow().last().cloned().unwrap_or_default()
    }
}

impl AdviceProvider for RecordingAdvisor {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

struct OfflineAdvisor;

impl AdviceProvider for OfflineAdvisor {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Err(PlannerError::AdviceFailed("network unreachable".to_string()))
    }
}

fn dispatcher(reply: &str) -> Dispatcher<RecordingAdvisor> {
    Dispatcher::new(RecordingAdvisor::new(reply), PlannerConfig::default())
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_schedule_example_and_payoff() {
    let schedule = calculate_debt_schedule(1200.0, 12.0, 200.0).unwrap();

    println!("Month | Interest | Principal | Balance");
    for row in schedule.rows() {
        println!(
            "{:>5} | {:>8.2} | {:>9.2} | {:>8.2}",
            row.month, row.interest, row.principal_payment, row.remaining_balance
        );
    }

    let first = schedule.rows()[0];
    assert_eq!(first.month, 1);
    assert_eq!(first.interest, 12.0);
    assert_eq!(first.principal_payment, 188.0);
    assert_eq!(first.remaining_balance, 1012.0);
    assert_eq!(schedule.rows().last().unwrap().remaining_balance, 0.0);
}

#[test]
fn test_mortgage_sized_schedule_terminates() {
    // 30-year style loan: 200k at 6% with a payment just above the standard annuity
    let schedule = calculate_debt_schedule(200_000.0, 6.0, 1_200.0).unwrap();
    assert!((350..=361).contains(&schedule.len()));

    let rows = schedule.rows();
    for pair in rows.windows(2) {
        assert!(pair[1].remaining_balance <= pair[0].remaining_balance);
        assert!(pair[1].interest <= pair[0].interest);
    }
    assert_eq!(rows.last().unwrap().remaining_balance, 0.0);
    assert!(schedule.total_interest() > 0.0);
    assert!((schedule.total_paid() - (200_000.0 + schedule.total_interest())).abs() < 0.011);
}

#[test]
fn test_non_amortizing_debt_is_reported() {
    let err = calculate_debt_schedule(50_000.0, 24.0, 500.0).unwrap_err();
    assert!(matches!(err, PlannerError::NonTerminatingSchedule { .. }));
    assert!(err.to_string().contains("never be paid off"));
}

#[test]
fn test_zero_principal_schedule_is_empty() {
    assert!(calculate_debt_schedule(0.0, 18.0, 100.0).unwrap().is_empty());
}

#[test]
fn test_savings_projection_examples() {
    assert_eq!(project_savings(5000.0, 3000.0, 6), 12000.0);
    assert_eq!(project_savings(2000.0, 2500.0, 12), 0.0);
    assert_eq!(months_to_goal(5000.0, 3000.0, 10_000.0), Some(5));
}

#[test]
fn test_csv_file_import() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!(
        "budget_planner_import_{}_{}.csv",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_nanos()
    ));
    std::fs::write(
        &path,
        "Date,Category,Amount,Recurring\n\
         2024-04-01,Rent,1500,Yes\n\
         2024-04-03,Groceries,180.25,No\n\
         2024-04-17,Groceries,95.75,No\n\
         2024-04-20,Transport,64,No\n",
    )?;

    let loaded = load_expenses_csv_path(&path);
    std::fs::remove_file(&path)?;
    let ledger = loaded?;

    assert_eq!(ledger.len(), 4);
    assert!((ledger.total() - 1840.0).abs() < 1e-9);
    assert!((ledger.by_category()["Groceries"] - 276.0).abs() < 1e-9);
    assert_eq!(ledger.recurring_total(), 1500.0);
    Ok(())
}

#[test]
fn test_missing_csv_file() {
    let result = load_expenses_csv_path("/definitely/not/here.csv");
    assert!(matches!(result, Err(PlannerError::IoError(_))));
}

#[tokio::test]
async fn test_upload_sets_monthly_expenses() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();

    let csv = "Date,Category,Amount\n2024-01-02,Rent,1200\n2024-01-09,Food,300\n".to_string();
    let outcome = dispatcher
        .dispatch(&mut session, Command::UploadExpenses { csv })
        .await
        .unwrap();

    match outcome {
        CommandOutcome::ExpensesLoaded {
            rows,
            total,
            by_category,
        } => {
            assert_eq!(rows, 2);
            assert_eq!(total, 1500.0);
            assert_eq!(by_category["Food"], 300.0);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(session.monthly_expenses, 1500.0);
    assert_eq!(session.uploaded.as_ref().map(|l| l.len()), Some(2));
}

#[tokio::test]
async fn test_failed_upload_leaves_session_untouched() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();
    session.monthly_expenses = 800.0;

    let result = dispatcher
        .dispatch(
            &mut session,
            Command::UploadExpenses {
                csv: "Category,Amount\nFood,10\n".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(PlannerError::MissingColumn(_))));
    assert_eq!(session.monthly_expenses, 800.0);
    assert!(session.uploaded.is_none());
}

#[tokio::test]
async fn test_upload_with_nan_amount_keeps_previous_expenses() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();
    session.income = 5000.0;
    session.monthly_expenses = 3000.0;

    let csv = "Date,Category,Amount\n\
               2024-01-02,Rent,1200\n\
               2024-01-05,Food,NaN\n\
               2024-01-09,Refund,-300\n"
        .to_string();
    let result = dispatcher
        .dispatch(&mut session, Command::UploadExpenses { csv })
        .await;

    assert!(matches!(result, Err(PlannerError::CsvError(ref msg)) if msg.contains("Row 2")));
    assert_eq!(session.monthly_expenses, 3000.0);
    assert!(session.uploaded.is_none());

    let outcome = dispatcher
        .dispatch(&mut session, Command::PredictSavings { months: 6 })
        .await
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::SavingsProjected { amount, .. } if amount == 12000.0));
}

#[tokio::test]
async fn test_expense_tracker_accumulates() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();

    for (category, amount) in [("Rent", 1500.0), ("Coffee", 4.5), ("Coffee", 5.5)] {
        dispatcher
            .dispatch(
                &mut session,
                Command::AddExpense(ExpenseEntry::new(category, amount, date(2024, 6, 1), false)),
            )
            .await
            .unwrap();
    }

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::AddExpense(ExpenseEntry::new("Gym", 40.0, date(2024, 6, 2), true)),
        )
        .await
        .unwrap();

    match outcome {
        CommandOutcome::ExpenseAdded {
            message,
            total,
            by_category,
        } => {
            assert_eq!(message, "Expense of ₹40.00 added to Gym on 2024-06-02.");
            assert_eq!(total, 1550.0);
            assert_eq!(by_category["Coffee"], 10.0);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let negative = dispatcher
        .dispatch(
            &mut session,
            Command::AddExpense(ExpenseEntry::new("Refund", -10.0, date(2024, 6, 3), false)),
        )
        .await;
    assert!(matches!(negative, Err(PlannerError::InvalidInput { field: "amount", .. })));
    assert_eq!(session.expenses.len(), 4);
}

#[tokio::test]
async fn test_insights_require_income_and_update_session() {
    let dispatcher = dispatcher("  Spend less on takeaway.  ");
    let mut session = FinanceSession::new();

    let no_income = dispatcher
        .dispatch(
            &mut session,
            Command::GenerateInsights {
                income: 0.0,
                expenses: 100.0,
                savings_goal: 0.0,
            },
        )
        .await;
    assert!(matches!(no_income, Err(PlannerError::InvalidInput { field: "income", .. })));
    assert!(dispatcher.provider().prompts.borrow().is_empty());

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::GenerateInsights {
                income: 5000.0,
                expenses: 3200.0,
                savings_goal: 20000.0,
            },
        )
        .await
        .unwrap();

    match outcome {
        CommandOutcome::Insights(advice) => {
            assert!(advice.generated);
            assert_eq!(advice.text, "Spend less on takeaway.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(session.income, 5000.0);
    assert_eq!(session.monthly_expenses, 3200.0);
    assert_eq!(session.savings_target(), 20000.0);
    assert!(dispatcher
        .provider()
        .last_prompt()
        .contains("monthly income 5000, monthly expenses 3200"));
}

#[tokio::test]
async fn test_add_debt_returns_schedule_and_plan() {
    let dispatcher = dispatcher("Pay more each month.");
    let mut session = FinanceSession::new();

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::AddDebt(DebtAccount::new("Credit Card", 1200.0, 12.0, 200.0)),
        )
        .await
        .unwrap();

    match outcome {
        CommandOutcome::DebtAdded {
            message,
            schedule,
            plan,
        } => {
            assert_eq!(message, "Debt 'Credit Card' of ₹1200.00 at 12% interest added.");
            assert_eq!(schedule.len(), 7);
            assert_eq!(plan.kind, AdviceKind::DebtPlan);
            assert_eq!(plan.text, "Pay more each month.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(session.debts.len(), 1);
    assert!(dispatcher
        .provider()
        .last_prompt()
        .contains("monthly payment of ₹200.00"));
}

#[tokio::test]
async fn test_unpayable_debt_is_not_recorded() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();

    let result = dispatcher
        .dispatch(
            &mut session,
            Command::AddDebt(DebtAccount::new("Payday Loan", 10_000.0, 36.0, 250.0)),
        )
        .await;

    assert!(matches!(result, Err(PlannerError::NonTerminatingSchedule { .. })));
    assert!(session.debts.is_empty());
    assert!(dispatcher.provider().prompts.borrow().is_empty());
}

#[tokio::test]
async fn test_schedule_cap_comes_from_config() {
    let config = PlannerConfig {
        max_schedule_months: 12,
        ..PlannerConfig::default()
    };
    let dispatcher = Dispatcher::new(RecordingAdvisor::new("ok"), config);
    let mut session = FinanceSession::new();

    let result = dispatcher
        .dispatch(
            &mut session,
            Command::AddDebt(DebtAccount::new("Car", 20_000.0, 5.0, 400.0)),
        )
        .await;
    assert!(matches!(result, Err(PlannerError::ScheduleTooLong { max_months: 12 })));
}

#[tokio::test]
async fn test_investments_and_report() {
    let dispatcher = dispatcher("Diversify.");
    let mut session = FinanceSession::new();
    session.income = 6000.0;
    session.monthly_expenses = 4000.0;

    dispatcher
        .dispatch(
            &mut session,
            Command::AddInvestment(InvestmentHolding::new("Index Fund", 10_000.0, 12_000.0)),
        )
        .await
        .unwrap();

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::AddInvestment(InvestmentHolding::new("Bonds", 5_000.0, 5_000.0)),
        )
        .await
        .unwrap();

    match outcome {
        CommandOutcome::InvestmentAdded {
            message,
            summary,
            analysis,
        } => {
            assert_eq!(message, "Investment 'Bonds' added with current value ₹5000.00.");
            assert_eq!(summary.holdings, 2);
            assert_eq!(summary.total_gain, 2000.0);
            assert_eq!(analysis.text, "Diversify.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    let portfolio_prompt = dispatcher.provider().last_prompt();
    assert!(portfolio_prompt.contains("\"investment_name\":\"Index Fund\""));
    assert!(portfolio_prompt.contains("\"investment_name\":\"Bonds\""));

    let report = dispatcher
        .dispatch(&mut session, Command::GenerateReport)
        .await
        .unwrap();
    assert!(matches!(report, CommandOutcome::Report(ref a) if a.kind == AdviceKind::Report));
    assert!(dispatcher
        .provider()
        .last_prompt()
        .starts_with("Create a detailed financial report for a person with income 6000, monthly expenses 4000"));
}

#[tokio::test]
async fn test_advice_failure_uses_fallback_text() {
    let dispatcher = Dispatcher::new(OfflineAdvisor, PlannerConfig::default());
    let mut session = FinanceSession::new();

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::GenerateInsights {
                income: 3000.0,
                expenses: 1000.0,
                savings_goal: 500.0,
            },
        )
        .await
        .unwrap();

    match outcome {
        CommandOutcome::Insights(advice) => {
            assert!(!advice.generated);
            assert_eq!(advice.text, "Failed to generate advice.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::AddDebt(DebtAccount::new("Loan", 1000.0, 10.0, 100.0)),
        )
        .await
        .unwrap();
    match outcome {
        CommandOutcome::DebtAdded { plan, .. } => {
            assert_eq!(plan.text, "Failed to generate debt optimization plan.");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(session.debts.len(), 1);
}

#[tokio::test]
async fn test_predict_savings_uses_session_figures() {
    let config = PlannerConfig {
        currency_symbol: "$".to_string(),
        ..PlannerConfig::default()
    };
    let dispatcher = Dispatcher::new(RecordingAdvisor::new("unused"), config);
    let mut session = FinanceSession::new();
    session.income = 5000.0;
    session.monthly_expenses = 3000.0;

    let outcome = dispatcher
        .dispatch(&mut session, Command::PredictSavings { months: 6 })
        .await
        .unwrap();
    assert_eq!(
        outcome,
        CommandOutcome::SavingsProjected {
            months: 6,
            amount: 12000.0,
            message: "Projected savings over 6 months: $12000.00".to_string(),
        }
    );

    session.monthly_expenses = 5500.0;
    let outcome = dispatcher
        .dispatch(&mut session, Command::PredictSavings { months: 12 })
        .await
        .unwrap();
    assert!(matches!(outcome, CommandOutcome::SavingsProjected { amount, .. } if amount == 0.0));

    let zero = dispatcher
        .dispatch(&mut session, Command::PredictSavings { months: 0 })
        .await;
    assert!(matches!(zero, Err(PlannerError::InvalidInput { field: "months", .. })));
}

#[tokio::test]
async fn test_savings_goal_message() {
    let dispatcher = dispatcher("unused");
    let mut session = FinanceSession::new();

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::SetSavingsGoal(SavingsGoal {
                name: "House Deposit".to_string(),
                target_amount: 50_000.0,
                deadline: Some(date(2027, 12, 31)),
            }),
        )
        .await
        .unwrap();

    assert_eq!(
        outcome,
        CommandOutcome::GoalSaved {
            message: "Goal 'House Deposit' for ₹50000.00 saved with deadline 2027-12-31."
                .to_string()
        }
    );
    assert_eq!(session.savings_target(), 50_000.0);

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("House Deposit"));
}

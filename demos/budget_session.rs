use budget_planner::*;
use chrono::NaiveDate;

/// Offline stand-in for the advice service.
struct CannedAdvisor;

impl AdviceProvider for CannedAdvisor {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(format!(
            "(offline) Review the largest categories first. Prompt was {} chars.",
            prompt.len()
        ))
    }
}

const SAMPLE_CSV: &str = "Date,Category,Amount,Recurring
2024-03-01,Rent,1400,Yes
2024-03-04,Groceries,210.40,No
2024-03-11,Groceries,185.10,No
2024-03-15,Utilities,120,Yes
2024-03-22,Dining,96.50,No
";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let dispatcher = Dispatcher::new(CannedAdvisor, PlannerConfig::default());
    let mut session = FinanceSession::new();

    let commands = vec![
        Command::UploadExpenses {
            csv: SAMPLE_CSV.to_string(),
        },
        Command::GenerateInsights {
            income: 4200.0,
            expenses: 2012.0,
            savings_goal: 15_000.0,
        },
        Command::SetSavingsGoal(SavingsGoal {
            name: "Emergency Fund".to_string(),
            target_amount: 15_000.0,
            deadline: NaiveDate::from_ymd_opt(2025, 6, 30),
        }),
        Command::AddDebt(DebtAccount::new("Car Loan", 9_000.0, 7.9, 350.0)),
        Command::AddInvestment(InvestmentHolding::new("Index Fund", 8_000.0, 8_960.0)),
        Command::PredictSavings { months: 12 },
        Command::GenerateReport,
    ];

    for command in commands {
        println!("== {} ==", command.page());
        match dispatcher.dispatch(&mut session, command).await {
            Ok(CommandOutcome::DebtAdded {
                message, schedule, ..
            }) => {
                println!("{}", message);
                println!("Paid off in {} months", schedule.months_to_payoff());
            }
            Ok(outcome) => println!("{:#?}", outcome),
            Err(e) => eprintln!("❌ {}", e),
        }
        println!();
    }

    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
    Ok(())
}

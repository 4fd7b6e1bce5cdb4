use budget_planner::llm::GeminiClient;
use budget_planner::*;
use dotenv::dotenv;
use std::error::Error;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let config = PlannerConfig::from_env()?;
    let client = GeminiClient::from_config(&config)?;
    let dispatcher = Dispatcher::new(client, config);
    let mut session = FinanceSession::new();

    println!("🤖 Asking {} for savings advice...\n", dispatcher.config().model);

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::GenerateInsights {
                income: 85_000.0,
                expenses: 62_000.0,
                savings_goal: 300_000.0,
            },
        )
        .await?;

    if let CommandOutcome::Insights(advice) = outcome {
        println!("{}\n", advice.text);
    }

    let outcome = dispatcher
        .dispatch(
            &mut session,
            Command::AddDebt(DebtAccount::new("Personal Loan", 150_000.0, 14.0, 5_000.0)),
        )
        .await?;

    if let CommandOutcome::DebtAdded {
        message,
        schedule,
        plan,
    } = outcome
    {
        println!("{}", message);
        println!(
            "Paid off in {} months, total interest {}\n",
            schedule.months_to_payoff(),
            format_money(schedule.total_interest(), &dispatcher.config().currency_symbol)
        );
        println!("{}", plan.text);
    }

    Ok(())
}

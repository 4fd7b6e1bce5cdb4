use budget_planner::*;
use std::env;

fn parse_arg(args: &[String], idx: usize, default: f64) -> f64 {
    args.get(idx)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let principal = parse_arg(&args, 1, 25_000.0);
    let rate = parse_arg(&args, 2, 9.5);
    let payment = parse_arg(&args, 3, 650.0);

    let config = PlannerConfig::from_env().unwrap_or_default();
    let symbol = config.currency_symbol.clone();

    println!(
        "Debt of {} at {}% paying {} per month\n",
        format_money(principal, &symbol),
        rate,
        format_money(payment, &symbol)
    );

    let schedule = match config.scheduler().schedule(principal, rate, payment) {
        Ok(schedule) => schedule,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("{:>5} {:>12} {:>12} {:>14}", "Month", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(46));
    for row in schedule.rows() {
        println!(
            "{:>5} {:>12.2} {:>12.2} {:>14.2}",
            row.month, row.interest, row.principal_payment, row.remaining_balance
        );
    }

    println!("\nPaid off in {} months", schedule.months_to_payoff());
    println!("Total interest: {}", format_money(schedule.total_interest(), &symbol));
    println!("Total paid:     {}", format_money(schedule.total_paid(), &symbol));
}

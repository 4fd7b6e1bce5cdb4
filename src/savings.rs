use crate::schema::SavingsGoal;
use chrono::{Datelike, NaiveDate};
use log::debug;

/// Total savings over `months` at a constant monthly surplus.
///
/// A zero or negative surplus projects to zero rather than a deficit.
pub fn project_savings(income: f64, expenses: f64, months: u32) -> f64 {
    let monthly_savings = income - expenses;
    if monthly_savings > 0.0 {
        monthly_savings * f64::from(months)
    } else {
        0.0
    }
}

/// Number of whole months needed to reach `target` at the current surplus.
///
/// Returns `Some(0)` for a non-positive target and `None` when nothing is saved each month.
pub fn months_to_goal(income: f64, expenses: f64, target: f64) -> Option<u32> {
    if target <= 0.0 {
        return Some(0);
    }
    let monthly_savings = income - expenses;
    if monthly_savings <= 0.0 {
        return None;
    }
    let months = (target / monthly_savings).ceil();
    if months > f64::from(u32::MAX) {
        return None;
    }
    Some(months as u32)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SavingsProjector;

impl SavingsProjector {
    pub fn project(&self, income: f64, expenses: f64, months: u32) -> f64 {
        let projected = project_savings(income, expenses, months);
        debug!(
            "Projected savings: income {:.2}, expenses {:.2}, {} months -> {:.2}",
            income, expenses, months, projected
        );
        projected
    }

    pub fn months_to_goal(&self, income: f64, expenses: f64, goal: &SavingsGoal) -> Option<u32> {
        months_to_goal(income, expenses, goal.target_amount)
    }

    /// Whether the goal is reachable by its deadline at the current surplus.
    /// Goals without a deadline are always on track if they are reachable at all.
    pub fn is_on_track(
        &self,
        income: f64,
        expenses: f64,
        goal: &SavingsGoal,
        today: NaiveDate,
    ) -> bool {
        let Some(needed) = self.months_to_goal(income, expenses, goal) else {
            return false;
        };
        match months_until_deadline(goal, today) {
            Some(available) => needed <= available,
            None => true,
        }
    }
}

/// Whole months from `today` to the goal's deadline; zero if it has passed.
/// A month only counts once its day of month has been reached.
pub fn months_until_deadline(goal: &SavingsGoal, today: NaiveDate) -> Option<u32> {
    let deadline = goal.deadline?;
    let mut months = (deadline.year() - today.year()) * 12 + deadline.month() as i32
        - today.month() as i32;
    if deadline.day() < today.day() {
        months -= 1;
    }
    Some(months.max(0) as u32)
}

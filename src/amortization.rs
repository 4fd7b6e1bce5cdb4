use crate::error::{PlannerError, Result};
use crate::schema::DebtAccount;
use crate::utils::{ensure_non_negative, round2};
use log::{debug, info};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_SCHEDULE_MONTHS: u32 = 1200;

/// One month of a repayment schedule. Figures are rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// 1-based month number
    pub month: u32,
    pub interest: f64,
    /// Portion of the payment applied to principal. In the final month this can
    /// exceed the balance that was left.
    pub principal_payment: f64,
    /// Balance after this month's payment, floored at zero
    pub remaining_balance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    rows: Vec<AmortizationRow>,
    principal: f64,
    total_interest: f64,
}

impl AmortizationSchedule {
    pub fn rows(&self) -> &[AmortizationRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<AmortizationRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn months_to_payoff(&self) -> u32 {
        self.rows.last().map(|r| r.month).unwrap_or(0)
    }

    /// Interest over the life of the debt, summed before rounding.
    pub fn total_interest(&self) -> f64 {
        round2(self.total_interest)
    }

    /// Principal plus total interest.
    pub fn total_paid(&self) -> f64 {
        round2(self.principal + self.total_interest)
    }
}

/// Builds month-by-month repayment schedules for fixed-payment debts.
#[derive(Debug, Clone, Copy)]
pub struct AmortizationScheduler {
    max_months: u32,
}

impl Default for AmortizationScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SCHEDULE_MONTHS)
    }
}

impl AmortizationScheduler {
    pub fn new(max_months: u32) -> Self {
        Self { max_months }
    }

    pub fn max_months(&self) -> u32 {
        self.max_months
    }

    /// Produces the schedule for a debt until its balance reaches zero.
    ///
    /// Each month accrues `balance * rate / 100 / 12` interest, applies the rest
    /// of the payment to principal, and emits a row.
    ///
    /// # Errors
    /// * `InvalidInput` if any argument is negative or not finite
    /// * `NonTerminatingSchedule` if the payment does not exceed the first month's interest
    /// * `ScheduleTooLong` if payoff takes more than `max_months` months
    pub fn schedule(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        monthly_payment: f64,
    ) -> Result<AmortizationSchedule> {
        ensure_non_negative("principal", principal)?;
        ensure_non_negative("annual_rate_percent", annual_rate_percent)?;
        ensure_non_negative("monthly_payment", monthly_payment)?;

        if principal > 0.0 {
            let first_interest = monthly_interest(principal, annual_rate_percent);
            if monthly_payment <= first_interest {
                return Err(PlannerError::NonTerminatingSchedule {
                    payment: monthly_payment,
                    interest: round2(first_interest),
                });
            }
        }

        let mut rows = Vec::new();
        let mut balance = principal;
        let mut total_interest = 0.0;
        let mut month: u32 = 1;

        while balance > 0.0 {
            if month > self.max_months {
                return Err(PlannerError::ScheduleTooLong {
                    max_months: self.max_months,
                });
            }

            let interest = monthly_interest(balance, annual_rate_percent);
            let principal_payment = monthly_payment - interest;
            balance -= principal_payment;
            total_interest += interest;

            let remaining = round2(balance);
            rows.push(AmortizationRow {
                month,
                interest: round2(interest),
                principal_payment: round2(principal_payment),
                remaining_balance: if remaining > 0.0 { remaining } else { 0.0 },
            });

            debug!(
                "Month {}: interest {:.4}, principal {:.4}, balance {:.4}",
                month, interest, principal_payment, balance
            );
            month += 1;
        }

        info!(
            "Built repayment schedule: principal {:.2} at {}% paying {:.2}/month, {} months",
            principal,
            annual_rate_percent,
            monthly_payment,
            rows.len()
        );

        Ok(AmortizationSchedule {
            rows,
            principal,
            total_interest,
        })
    }

    pub fn schedule_for(&self, debt: &DebtAccount) -> Result<AmortizationSchedule> {
        self.schedule(
            debt.principal,
            debt.annual_interest_rate_percent,
            debt.monthly_payment,
        )
    }
}

fn monthly_interest(balance: f64, annual_rate_percent: f64) -> f64 {
    balance * (annual_rate_percent / 100.0) / 12.0
}

pub fn calculate_debt_schedule(
    principal: f64,
    annual_rate_percent: f64,
    monthly_payment: f64,
) -> Result<AmortizationSchedule> {
    AmortizationScheduler::default().schedule(principal, annual_rate_percent, monthly_payment)
}

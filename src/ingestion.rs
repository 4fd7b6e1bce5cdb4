use crate::error::{PlannerError, Result};
use crate::ledger::ExpenseLedger;
use crate::schema::ExpenseEntry;
use chrono::NaiveDate;
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const REQUIRED_COLUMNS: [&str; 3] = ["Date", "Category", "Amount"];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y", "%m/%d/%Y"];

#[derive(Debug, Deserialize)]
struct ExpenseCsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Recurring", default)]
    recurring: Option<String>,
}

/// Reads expense rows from CSV. The header must contain `Date`, `Category` and
/// `Amount`; an optional `Recurring` column is honored and anything else is ignored.
pub fn load_expenses_csv<R: Read>(reader: R) -> Result<ExpenseLedger> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(PlannerError::MissingColumn(column.to_string()));
        }
    }

    let mut ledger = ExpenseLedger::new();
    for (idx, record) in rdr.deserialize::<ExpenseCsvRow>().enumerate() {
        let row = record.map_err(|e| {
            PlannerError::CsvError(format!("Row {}: {}", idx + 1, e))
        })?;

        if !row.amount.is_finite() {
            return Err(PlannerError::CsvError(format!(
                "Row {}: Amount must be a finite number, got {}",
                idx + 1,
                row.amount
            )));
        }

        let date = parse_date(&row.date)?;
        let recurring = match row.recurring.as_deref() {
            Some(value) => parse_recurring(value)?,
            None => false,
        };

        debug!(
            "Parsed expense row {}: {} {} on {}",
            idx + 1,
            row.category,
            row.amount,
            date
        );
        ledger.add(ExpenseEntry::new(row.category, row.amount, date, recurring));
    }

    info!(
        "Loaded {} expense rows totalling {:.2}",
        ledger.len(),
        ledger.total()
    );
    Ok(ledger)
}

pub fn load_expenses_csv_path(path: impl AsRef<Path>) -> Result<ExpenseLedger> {
    let file = File::open(path.as_ref())?;
    load_expenses_csv(file)
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            PlannerError::DateError(format!(
                "Unrecognised date '{}'. Expected YYYY-MM-DD",
                value
            ))
        })
}

fn parse_recurring(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "1" => Ok(true),
        "no" | "n" | "false" | "0" | "" => Ok(false),
        other => Err(PlannerError::CsvError(format!(
            "Invalid Recurring value '{}'. Expected Yes or No",
            other
        ))),
    }
}

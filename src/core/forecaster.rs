use crate::core::finite_cents;
use crate::models::{ExpenseForecast, Transaction, Trend};
use crate::services::{ProviderError, TransactionStore};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Expense amounts averaged for the prediction
pub const DEFAULT_FORECAST_WINDOW: usize = 90;

/// Placeholder confidence for any forecast computed from data
const FORECAST_CONFIDENCE: f64 = 0.7;

/// Errors that can occur while forecasting
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Transaction store error: {0}")]
    Store(#[from] ProviderError),

    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),
}

/// Month-key used to bucket expense sums
type MonthKey = (i32, u32);

/// Forecast next-period spend from a user's transaction history.
///
/// Only expense rows count, taken in the order given. The prediction is the
/// mean of the last `window` amounts. The trend compares the last three monthly
/// sums, with months ordered by first appearance.
pub fn forecast_expenses(
    transactions: &[Transaction],
    window: usize,
    include_categories: bool,
) -> Result<ExpenseForecast, ForecastError> {
    let expenses: Vec<&Transaction> = transactions.iter().filter(|t| t.is_expense()).collect();

    if expenses.is_empty() {
        return Ok(ExpenseForecast::unknown());
    }

    let window = window.max(1);
    let recent = &expenses[expenses.len().saturating_sub(window)..];
    let predicted_amount = recent.iter().map(|t| t.amount).sum::<f64>() / recent.len() as f64;

    let mut monthly_totals: Vec<(MonthKey, f64)> = Vec::new();
    for expense in &expenses {
        let date = parse_transaction_date(&expense.date)?;
        let key = (date.year(), date.month());
        match monthly_totals.iter_mut().find(|(k, _)| *k == key) {
            Some((_, total)) => *total += expense.amount,
            None => monthly_totals.push((key, expense.amount)),
        }
    }

    let totals: Vec<f64> = monthly_totals.iter().map(|(_, total)| *total).collect();
    let trend = detect_trend(&totals);

    let category_breakdown = include_categories.then(|| category_totals(&expenses));

    Ok(ExpenseForecast {
        predicted_amount: finite_cents(predicted_amount),
        trend,
        confidence: FORECAST_CONFIDENCE,
        category_breakdown,
    })
}

/// Compare the last three monthly totals
pub fn detect_trend(monthly_totals: &[f64]) -> Trend {
    match monthly_totals {
        [.., a, b, c] if a < b && b < c => Trend::Increasing,
        [.., a, b, c] if a > b && b > c => Trend::Decreasing,
        _ => Trend::Stable,
    }
}

/// Parse the date forms the store hands back: RFC 3339 timestamps,
/// naive timestamps, or plain calendar dates.
pub fn parse_transaction_date(raw: &str) -> Result<NaiveDate, ForecastError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Ok(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ForecastError::InvalidDate(raw.to_string()))
}

fn category_totals(expenses: &[&Transaction]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for expense in expenses {
        let category = expense
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or("other");
        *totals.entry(category.to_string()).or_insert(0.0) += expense.amount;
    }
    totals.values_mut().for_each(|v| *v = finite_cents(*v));
    totals
}

/// Forecaster bound to a transaction store
#[derive(Clone)]
pub struct ExpenseForecaster {
    store: Arc<dyn TransactionStore>,
    window: usize,
}

impl ExpenseForecaster {
    pub fn new(store: Arc<dyn TransactionStore>, window: usize) -> Self {
        Self { store, window }
    }

    pub fn with_window(self, window: usize) -> Self {
        Self { window, ..self }
    }

    /// Fetch the user's transactions and forecast from them
    pub async fn forecast(
        &self,
        user_id: &str,
        include_categories: bool,
    ) -> Result<ExpenseForecast, ForecastError> {
        let transactions = self.store.transactions_for_user(user_id).await?;
        tracing::debug!("Fetched {} transactions for {}", transactions.len(), user_id);
        forecast_expenses(&transactions, self.window, include_categories)
    }

    /// Forecast, substituting the unknown forecast for any fault
    pub async fn forecast_or_fallback(&self, user_id: &str, include_categories: bool) -> ExpenseForecast {
        match self.forecast(user_id, include_categories).await {
            Ok(forecast) => forecast,
            Err(e) => {
                tracing::warn!("Expense forecast for {} failed, using fallback: {}", user_id, e);
                ExpenseForecast::unknown()
            }
        }
    }
}

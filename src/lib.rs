//! Expense Tracker Backend - backend-for-frontend for the Expense Tracker app
//!
//! This library provides the HTTP surface used by the Expense Tracker frontend:
//! authentication delegated to Supabase, saving-goal suggestions, next-period
//! expense forecasts and keyword-based category suggestions.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CategoryClassifier, ExpenseForecaster, suggest_saving_goals, forecast_expenses};
pub use crate::models::{Category, CategoryPrediction, ExpenseForecast, SavingGoalPlan, Transaction, Trend};
pub use crate::routes::AppState;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let prediction = CategoryClassifier::default().classify("Netflix subscription");
        assert_eq!(prediction.category, Category::Entertainment);
    }
}

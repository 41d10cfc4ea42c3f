use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::models::domain::{Category, CategoryPrediction, ExpenseForecast, SavingGoalPlan, Trend};

/// Response for saving goals endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingGoalResponse {
    pub short_term_goal: f64,
    pub medium_term_goal: f64,
    pub long_term_goal: f64,
    pub advice: Vec<String>,
}

impl From<SavingGoalPlan> for SavingGoalResponse {
    fn from(plan: SavingGoalPlan) -> Self {
        Self {
            short_term_goal: plan.short_term,
            medium_term_goal: plan.medium_term,
            long_term_goal: plan.long_term,
            advice: plan.advice,
        }
    }
}

/// Response for expense prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensePredictionResponse {
    pub predicted_amount: f64,
    pub trend: Trend,
    pub confidence: f64,
    pub category_breakdown: Option<BTreeMap<String, f64>>,
}

impl From<ExpenseForecast> for ExpensePredictionResponse {
    fn from(forecast: ExpenseForecast) -> Self {
        Self {
            predicted_amount: forecast.predicted_amount,
            trend: forecast.trend,
            confidence: forecast.confidence,
            category_breakdown: forecast.category_breakdown,
        }
    }
}

/// Response for category prediction endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPredictionResponse {
    pub predicted_category: Category,
    pub confidence: f64,
}

impl From<CategoryPrediction> for CategoryPredictionResponse {
    fn from(prediction: CategoryPrediction) -> Self {
        Self {
            predicted_category: prediction.category,
            confidence: prediction.confidence,
        }
    }
}

/// Logout response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

/// Root liveness message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

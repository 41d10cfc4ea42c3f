// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Transaction, TransactionType, Trend, Category, CategoryPrediction, ExpenseForecast, SavingGoalPlan};
pub use requests::{LoginRequest, SignupRequest, SavingGoalRequest, ExpensePredictionRequest, CategoryPredictionRequest};
pub use responses::{SavingGoalResponse, ExpensePredictionResponse, CategoryPredictionResponse, LogoutResponse, RootResponse, HealthResponse, ErrorResponse};

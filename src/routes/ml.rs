use actix_web::{web, HttpResponse, Responder};
use std::time::Instant;
use crate::core::{classify_within, suggest_saving_goals};
use crate::models::{
    CategoryPredictionRequest, CategoryPredictionResponse, ExpensePredictionRequest,
    ExpensePredictionResponse, SavingGoalRequest, SavingGoalResponse,
};
use crate::routes::AppState;

/// Configure advisory routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/saving-goals", web::post().to(saving_goals))
        .route("/predict-expenses", web::post().to(predict_expenses))
        .route("/predict-category", web::post().to(predict_category));
}

/// Saving goals endpoint
///
/// POST /api/v1/ml/saving-goals
///
/// Request body:
/// ```json
/// {
///   "user_id": "string",
///   "income": 5000,
///   "expenses": [1000, 500],
///   "spending_patterns": ["food"]
/// }
/// ```
async fn saving_goals(req: web::Json<SavingGoalRequest>) -> impl Responder {
    tracing::info!(
        "Saving goals for user: {}, income: {}, {} expenses",
        req.user_id,
        req.income,
        req.expenses.len()
    );

    let plan = suggest_saving_goals(req.income, &req.expenses, &req.spending_patterns);

    HttpResponse::Ok().json(SavingGoalResponse::from(plan))
}

/// Expense prediction endpoint
///
/// POST /api/v1/ml/predict-expenses
///
/// Never fails: missing history, store faults and unreadable rows all
/// produce `{predicted_amount: 0, trend: "unknown", confidence: 0}`.
async fn predict_expenses(
    state: web::Data<AppState>,
    req: web::Json<ExpensePredictionRequest>,
) -> impl Responder {
    tracing::info!(
        "Predicting expenses for user: {}, months: {}, categories: {}",
        req.user_id,
        req.months_to_predict,
        req.include_categories
    );

    let forecast = state
        .forecaster
        .forecast_or_fallback(&req.user_id, req.include_categories)
        .await;

    tracing::debug!("Forecast for {}: {:?}", req.user_id, forecast);

    HttpResponse::Ok().json(ExpensePredictionResponse::from(forecast))
}

/// Category prediction endpoint
///
/// POST /api/v1/ml/predict-category
///
/// Request body:
/// ```json
/// {
///   "description": "Grocery shopping at Walmart",
///   "amount": 120.50
/// }
/// ```
async fn predict_category(
    state: web::Data<AppState>,
    req: web::Json<CategoryPredictionRequest>,
) -> impl Responder {
    tracing::debug!("Category prediction request: {:?}", req);
    let started = Instant::now();

    let CategoryPredictionRequest { description, .. } = req.into_inner();
    let prediction = classify_within(
        state.classifier.clone(),
        description,
        state.category_deadline,
    )
    .await;

    tracing::info!(
        "Category prediction completed in {:?}: {} ({})",
        started.elapsed(),
        prediction.category,
        prediction.confidence
    );

    HttpResponse::Ok().json(CategoryPredictionResponse::from(prediction))
}

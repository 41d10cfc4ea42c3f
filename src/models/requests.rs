use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::Validate;

/// Request to sign in with email and password
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Request to create an account with email and password
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

// Manual Debug impls keep passwords out of the logs.
impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignupRequest")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Request for saving goal suggestions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingGoalRequest {
    pub user_id: String,
    pub income: f64,
    pub expenses: Vec<f64>,
    #[serde(default)]
    pub spending_patterns: HashSet<String>,
}

/// Request for next-period expense prediction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpensePredictionRequest {
    pub user_id: String,
    #[serde(default = "default_months_to_predict")]
    pub months_to_predict: i32,
    #[serde(default)]
    pub include_categories: bool,
}

fn default_months_to_predict() -> i32 {
    1
}

/// Request for a category suggestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPredictionRequest {
    pub description: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_prediction_defaults() {
        let req: ExpensePredictionRequest =
            serde_json::from_str(r#"{"user_id": "u1"}"#).unwrap();
        assert_eq!(req.months_to_predict, 1);
        assert!(!req.include_categories);
    }

    #[test]
    fn test_months_to_predict_accepts_any_integer() {
        let req: ExpensePredictionRequest =
            serde_json::from_str(r#"{"user_id": "u1", "months_to_predict": -3}"#).unwrap();
        assert_eq!(req.months_to_predict, -3);

        let req: ExpensePredictionRequest =
            serde_json::from_str(r#"{"user_id": "u1", "months_to_predict": 0}"#).unwrap();
        assert_eq!(req.months_to_predict, 0);
    }

    #[test]
    fn test_spending_patterns_default_empty() {
        let req: SavingGoalRequest =
            serde_json::from_str(r#"{"user_id": "u1", "income": 1000, "expenses": [10, 20]}"#)
                .unwrap();
        assert!(req.spending_patterns.is_empty());
        assert_eq!(req.expenses, vec![10.0, 20.0]);
    }

    #[test]
    fn test_login_validation_rejects_empty() {
        let req = LoginRequest {
            email: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_debug_hides_password() {
        let req = SignupRequest {
            email: "a@b.c".to_string(),
            password: "hunter2".to_string(),
        };
        let rendered = format!("{:?}", req);
        assert!(rendered.contains("a@b.c"));
        assert!(!rendered.contains("hunter2"));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Transaction row as stored by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: Option<String>,
    pub user_id: String,
    pub amount: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
    #[serde(other)]
    Other,
}

/// Coarse direction of monthly spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
    Unknown,
}

/// Labels produced by the category classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Entertainment,
    #[serde(rename = "Daily Essentials")]
    DailyEssentials,
    #[serde(rename = "Dining Out")]
    DiningOut,
    #[serde(rename = "Living Cost")]
    LivingCost,
    Transportation,
    Healthcare,
    Utilities,
    Shopping,
    Education,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::DailyEssentials => "Daily Essentials",
            Category::DiningOut => "Dining Out",
            Category::LivingCost => "Living Cost",
            Category::Transportation => "Transportation",
            Category::Healthcare => "Healthcare",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryPrediction {
    pub category: Category,
    pub confidence: f64,
}

impl CategoryPrediction {
    /// Result used whenever no rule applies or classification cannot finish
    pub const FALLBACK: CategoryPrediction = CategoryPrediction {
        category: Category::Other,
        confidence: 0.5,
    };
}

/// Forecaster output
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForecast {
    pub predicted_amount: f64,
    pub trend: Trend,
    pub confidence: f64,
    pub category_breakdown: Option<BTreeMap<String, f64>>,
}

impl ExpenseForecast {
    /// Result for users without usable expense history
    pub fn unknown() -> Self {
        Self {
            predicted_amount: 0.0,
            trend: Trend::Unknown,
            confidence: 0.0,
            category_breakdown: None,
        }
    }
}

/// Advisor output
#[derive(Debug, Clone, PartialEq)]
pub struct SavingGoalPlan {
    pub short_term: f64,
    pub medium_term: f64,
    pub long_term: f64,
    pub advice: Vec<String>,
}

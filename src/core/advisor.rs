use crate::core::finite_cents;
use crate::models::SavingGoalPlan;
use std::collections::HashSet;

pub const FOOD_ADVICE: &str = "Consider reducing food expenses to increase savings";
pub const ENTERTAINMENT_ADVICE: &str = "Entertainment expenses are high, consider reducing them";

/// Goal shares of income when nothing is left over
const MINIMAL_SHARES: [f64; 3] = [0.05, 0.10, 0.15];

/// Goal shares of disposable income
const DISPOSABLE_SHARES: [f64; 3] = [0.3, 0.4, 0.5];

/// Suggest short, medium and long-term saving goals
///
/// Disposable income is income minus the average expense. Goals are a share
/// of disposable income when it is positive, otherwise a smaller share of
/// income itself. Negative income is passed through and yields negative goals.
/// Goals that overflow saturate at the largest finite amount.
pub fn suggest_saving_goals(
    income: f64,
    expenses: &[f64],
    spending_patterns: &HashSet<String>,
) -> SavingGoalPlan {
    let total_expenses: f64 = expenses.iter().sum();
    let average_expense = if expenses.is_empty() {
        0.0
    } else {
        total_expenses / expenses.len() as f64
    };

    let disposable = income - average_expense;

    let (base, shares) = if disposable <= 0.0 {
        (income, MINIMAL_SHARES)
    } else {
        (disposable, DISPOSABLE_SHARES)
    };

    let mut advice = Vec::new();
    if spending_patterns.contains("food") && total_expenses > income * 0.3 {
        advice.push(FOOD_ADVICE.to_string());
    }
    if spending_patterns.contains("entertainment") && total_expenses > income * 0.2 {
        advice.push(ENTERTAINMENT_ADVICE.to_string());
    }

    SavingGoalPlan {
        short_term: finite_cents(base * shares[0]),
        medium_term: finite_cents(base * shares[1]),
        long_term: finite_cents(base * shares[2]),
        advice,
    }
}

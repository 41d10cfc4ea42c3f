// Core algorithm exports
pub mod advisor;
pub mod classifier;
pub mod forecaster;

pub use advisor::suggest_saving_goals;
pub use classifier::{classify_within, CategoryClassifier, CategoryRule};
pub use forecaster::{forecast_expenses, detect_trend, ExpenseForecaster, ForecastError, DEFAULT_FORECAST_WINDOW};

/// Round to two decimal places, halves away from zero. Magnitudes too large
/// to scale by 100 have no fractional part and pass through.
#[inline]
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}

/// Round to cents, saturating overflowed amounts at the largest finite
/// value so they still serialize as JSON numbers. NaN maps to zero.
#[inline]
pub fn finite_cents(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    round_to_cents(value.clamp(f64::MIN, f64::MAX))
}

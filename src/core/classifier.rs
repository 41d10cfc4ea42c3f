use crate::models::{Category, CategoryPrediction};
use std::sync::Arc;
use std::time::Duration;

/// Confidence reported for any keyword hit
const RULE_CONFIDENCE: f64 = 0.9;

/// Shortest normalized description worth classifying
const MIN_DESCRIPTION_LEN: usize = 2;

/// Keyword rules in evaluation order. The first rule with any keyword
/// contained in the description wins, so earlier rows shadow later ones.
const DEFAULT_RULES: &[(&[&str], Category)] = &[
    (&["netflix"], Category::Entertainment),
    (&["spotify"], Category::Entertainment),
    (&["movie", "cinema"], Category::Entertainment),
    (&["grocery", "groceries"], Category::DailyEssentials),
    (&["food", "supermarket"], Category::DailyEssentials),
    (&["restaurant", "dining"], Category::DiningOut),
    (&["coffee", "cafe"], Category::DiningOut),
    (&["rent", "mortgage"], Category::LivingCost),
    (&["uber", "lyft", "taxi"], Category::Transportation),
    (&["gas", "fuel"], Category::Transportation),
    (&["doctor", "medical", "health"], Category::Healthcare),
    (&["utility", "electric", "water"], Category::Utilities),
    (&["amazon", "shopping"], Category::Shopping),
    (&["school", "education", "college"], Category::Education),
];

/// A single keyword rule
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub keywords: Vec<String>,
    pub category: Category,
}

impl CategoryRule {
    pub fn new(keywords: &[&str], category: Category) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            category,
        }
    }

    #[inline]
    fn matches(&self, normalized: &str) -> bool {
        self.keywords.iter().any(|k| normalized.contains(k.as_str()))
    }
}

/// Keyword-based transaction categorizer
///
/// Descriptions are trimmed and lowercased, then tested for substring
/// containment against an ordered rule table. Anything unmatched (or too
/// short to mean anything) falls back to `other` with 0.5 confidence.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    rules: Vec<CategoryRule>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new(
            DEFAULT_RULES
                .iter()
                .map(|(keywords, category)| CategoryRule::new(keywords, *category))
                .collect(),
        )
    }
}

impl CategoryClassifier {
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Classify a free-text transaction description
    pub fn classify(&self, description: &str) -> CategoryPrediction {
        let normalized = description.trim().to_lowercase();

        if normalized.chars().count() < MIN_DESCRIPTION_LEN {
            return CategoryPrediction::FALLBACK;
        }

        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| CategoryPrediction {
                category: rule.category,
                confidence: RULE_CONFIDENCE,
            })
            .unwrap_or(CategoryPrediction::FALLBACK)
    }
}

/// Classify on the blocking pool under a deadline.
///
/// Expiry, a panicking rule set, or a cancelled worker all resolve to
/// [`CategoryPrediction::FALLBACK`]. An abandoned worker only ever reads
/// the shared classifier.
pub async fn classify_within(
    classifier: Arc<CategoryClassifier>,
    description: String,
    deadline: Duration,
) -> CategoryPrediction {
    run_with_deadline(deadline, move || classifier.classify(&description)).await
}

async fn run_with_deadline<F>(deadline: Duration, job: F) -> CategoryPrediction
where
    F: FnOnce() -> CategoryPrediction + Send + 'static,
{
    let worker = tokio::task::spawn_blocking(job);

    match tokio::time::timeout(deadline, worker).await {
        Ok(Ok(prediction)) => prediction,
        Ok(Err(e)) => {
            tracing::warn!("Category classification failed, using fallback: {}", e);
            CategoryPrediction::FALLBACK
        }
        Err(_) => {
            tracing::warn!("Category classification exceeded {:?}, using fallback", deadline);
            CategoryPrediction::FALLBACK
        }
    }
}

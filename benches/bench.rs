// Criterion benchmarks for the Expense Tracker advisory cores

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use expense_tracker_backend::core::{forecast_expenses, suggest_saving_goals, CategoryClassifier};
use expense_tracker_backend::models::{Transaction, TransactionType};
use std::collections::HashSet;

fn create_transaction(id: usize) -> Transaction {
    Transaction {
        id: Some(id.to_string()),
        user_id: "bench_user".to_string(),
        amount: 10.0 + (id % 50) as f64,
        category: Some(if id % 3 == 0 { "Dining Out" } else { "Daily Essentials" }.to_string()),
        description: None,
        date: format!("2024-{:02}-{:02}T12:00:00Z", 1 + (id / 28) % 12, 1 + id % 28),
        kind: if id % 5 == 0 { TransactionType::Income } else { TransactionType::Expense },
        created_at: None,
    }
}

fn bench_classify(c: &mut Criterion) {
    let classifier = CategoryClassifier::default();
    let mut group = c.benchmark_group("classify");

    for description in ["Netflix", "Grocery shopping at Walmart", "College textbooks", "Birthday present for mum"] {
        group.bench_with_input(BenchmarkId::from_parameter(description), &description, |b, description| {
            b.iter(|| classifier.classify(black_box(description)));
        });
    }

    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let mut group = c.benchmark_group("forecast_expenses");

    for size in [10, 100, 1000, 10000].iter() {
        let transactions: Vec<Transaction> = (0..*size).map(create_transaction).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| forecast_expenses(black_box(&transactions), 90, true));
        });
    }

    group.finish();
}

fn bench_saving_goals(c: &mut Criterion) {
    let expenses: Vec<f64> = (0..365).map(|i| 5.0 + (i % 40) as f64).collect();
    let patterns: HashSet<String> = ["food", "entertainment"].iter().map(|s| s.to_string()).collect();

    c.bench_function("suggest_saving_goals", |b| {
        b.iter(|| suggest_saving_goals(black_box(4200.0), black_box(&expenses), black_box(&patterns)));
    });
}

criterion_group!(benches, bench_classify, bench_forecast, bench_saving_goals);
criterion_main!(benches);

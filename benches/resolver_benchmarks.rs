use criterion::{black_box, criterion_group, criterion_main, Criterion};
use failure_strategy_core::{
    priority_merge_failure_strategies, FailureCategory, FailureRule, RemediationAction,
};

fn three_scope_rules() -> (Vec<FailureRule>, Vec<FailureRule>, Vec<FailureRule>) {
    let step = vec![FailureRule::new(
        [FailureCategory::Authentication],
        RemediationAction::Ignore,
    )];
    let step_group = vec![
        FailureRule::new(
            [FailureCategory::Authorization, FailureCategory::Connectivity],
            RemediationAction::MarkAsSuccess,
        ),
        FailureRule::new(
            [FailureCategory::AnyOtherErrors],
            RemediationAction::StageRollback,
        ),
    ];
    let stage = vec![FailureRule::new(
        [FailureCategory::AllErrors],
        RemediationAction::Abort,
    )];
    (step, step_group, stage)
}

fn benchmark_three_scope_merge(c: &mut Criterion) {
    let (step, step_group, stage) = three_scope_rules();
    c.bench_function("three_scope_merge", |b| {
        b.iter(|| {
            priority_merge_failure_strategies(
                black_box(Some(&step)),
                black_box(Some(&step_group)),
                black_box(Some(&stage)),
            )
        })
    });
}

fn benchmark_single_all_errors(c: &mut Criterion) {
    let stage = vec![FailureRule::new(
        [FailureCategory::AllErrors],
        RemediationAction::Abort,
    )];
    c.bench_function("single_all_errors", |b| {
        b.iter(|| priority_merge_failure_strategies(None, None, black_box(Some(&stage))))
    });
}

criterion_group!(
    benches,
    benchmark_three_scope_merge,
    benchmark_single_all_errors
);
criterion_main!(benches);

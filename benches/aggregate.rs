use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ghpulse::metrics::compute_metrics;
use ghpulse::model::{CommitRecord, CommitTable};

fn sample_table(n: usize) -> CommitTable {
    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    CommitTable::new(
        (0..n)
            .map(|i| CommitRecord {
                sha: format!("{i:040x}"),
                commit_date: start + Duration::hours((i * 37) as i64),
                author_name: format!("Dev {}", i % 17),
                author_login: (i % 5 != 0).then(|| format!("dev{}", i % 17)),
                message: "bench".to_string(),
            })
            .collect(),
    )
}

fn bench_compute_metrics(c: &mut Criterion) {
    let page = sample_table(100);
    c.bench_function("compute_metrics_page", |b| b.iter(|| compute_metrics(black_box(&page))));
}

criterion_group!(benches, bench_compute_metrics);
criterion_main!(benches);

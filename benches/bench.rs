// Criterion benchmarks for Grant Guru

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grant_guru::catalog::GrantCatalog;
use grant_guru::core::{is_eligible, GrantMatcher};
use grant_guru::models::{ApplicantProfile, OrgStatus};

fn bench_is_eligible(c: &mut Criterion) {
    let catalog = GrantCatalog::builtin().unwrap();
    let grant = &catalog.grants()[4]; // State Business Expansion Grant, all constraints declared
    let profile = ApplicantProfile::new(OrgStatus::SmallBusiness, Some(100_000), Some("NC"));

    c.bench_function("is_eligible", |b| {
        b.iter(|| is_eligible(black_box(grant), black_box(&profile)));
    });
}

fn bench_find_eligible(c: &mut Criterion) {
    let catalog = GrantCatalog::builtin().unwrap();
    let matcher = GrantMatcher::new();
    let profile = ApplicantProfile::new(OrgStatus::SmallBusiness, Some(100_000), Some("NC"));

    c.bench_function("find_eligible_full_catalog", |b| {
        b.iter(|| matcher.find_eligible(black_box(catalog.grants()), black_box(&profile), None));
    });
}

criterion_group!(benches, bench_is_eligible, bench_find_eligible);
criterion_main!(benches);

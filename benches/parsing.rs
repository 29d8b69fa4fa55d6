use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tagspec::{parse, parse_subtag, split_items, SplitOptions};

const GORM_TAG: &str =
    r#"gorm:"default:'ui\\path';index:,unique;not null;foreignKey:Customer\"Id""#;

fn benchmark_parse_single(c: &mut Criterion) {
    c.bench_function("parse_single_tag", |b| b.iter(|| parse(black_box(GORM_TAG))));
}

fn benchmark_parse_subtag(c: &mut Criterion) {
    let content = "column:user_id;type:bigint;index:idx_user,unique;not null;check:'id > 0'";

    c.bench_function("parse_subtag", |b| {
        b.iter(|| parse_subtag(black_box(content), true))
    });
}

fn benchmark_parse_many_tags(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_many_tags");

    for size in [1, 5, 20, 50].iter() {
        let input = (0..*size)
            .map(|i| format!(r#"tag{i}:"column:c{i};default:'v;{i}';not null""#))
            .collect::<Vec<_>>()
            .join(" ");

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse(black_box(input)))
        });
    }

    group.finish();
}

fn benchmark_split_escapes(c: &mut Criterion) {
    let content = r"a\;b\';c\;d;".repeat(100);
    let options = SplitOptions::subtag();

    c.bench_function("split_escape_heavy", |b| {
        b.iter(|| split_items(black_box(&content), &options))
    });
}

criterion_group!(
    benches,
    benchmark_parse_single,
    benchmark_parse_subtag,
    benchmark_parse_many_tags,
    benchmark_split_escapes
);
criterion_main!(benches);

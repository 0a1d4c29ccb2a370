//! FILENAME: series-engine/benches/series_calculations.rs
//! Benchmarks for the series pivot over dashboard-scale record sets.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use model::{DatabaseSchema, FieldSchema, Record, RecordSet, RecordValue, SelectOption};
use series_engine::{calculate_series, SeriesQuery};

const STATUSES: [&str; 4] = ["Todo", "In Progress", "Done", "Archived"];
const PRIORITIES: [&str; 3] = ["Low", "Medium", "High"];
const TAGS: [&str; 5] = ["Red", "Blue", "Green", "Yellow", "Purple"];

fn options(names: &[&str]) -> Vec<SelectOption> {
    names.iter().map(|n| SelectOption::new(*n)).collect()
}

fn build_schema() -> DatabaseSchema {
    let mut schema = DatabaseSchema::new();
    schema.insert("Status", FieldSchema::status(options(&STATUSES)));
    schema.insert("Priority", FieldSchema::select(options(&PRIORITIES)));
    schema.insert("Tags", FieldSchema::multi_select(options(&TAGS)));
    schema
}

fn build_records(count: usize) -> RecordSet {
    (0..count)
        .map(|i| {
            Record::new()
                .with("Status", RecordValue::status(STATUSES[i % STATUSES.len()]))
                .with(
                    "Priority",
                    RecordValue::select(PRIORITIES[i % PRIORITIES.len()]),
                )
                .with(
                    "Tags",
                    RecordValue::multi_select([
                        TAGS[i % TAGS.len()],
                        TAGS[(i + 2) % TAGS.len()],
                    ]),
                )
        })
        .collect()
}

fn bench_series_calculations(c: &mut Criterion) {
    let schema = build_schema();
    let records = build_records(10_000);

    let cross_tab = SeriesQuery::new("Status", "Priority");
    c.bench_function("cross_tab_10k", |b| {
        b.iter(|| {
            calculate_series(black_box(&cross_tab), black_box(&schema), black_box(&records))
                .unwrap()
        })
    });

    let count_mode = SeriesQuery::count_of("Status");
    c.bench_function("count_mode_10k", |b| {
        b.iter(|| {
            calculate_series(black_box(&count_mode), black_box(&schema), black_box(&records))
                .unwrap()
        })
    });

    let fan_out = SeriesQuery::new("Tags", "Tags");
    c.bench_function("multi_select_fan_out_10k", |b| {
        b.iter(|| {
            calculate_series(black_box(&fan_out), black_box(&schema), black_box(&records))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_series_calculations);
criterion_main!(benches);

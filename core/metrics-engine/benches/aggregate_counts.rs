//! Benchmarks for the counting paths over a large synthetic order
//! table. The interactive filter path (count_by with a month predicate)
//! is the one that reruns on every user selection, so it gets the most
//! attention.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use metrics_engine::{count_by, histogram, top_n, KeyOrder, RowPredicate};
use records::{Dimension, OrderRecord, OrderTable};

const STATUSES: [&str; 5] = ["delivered", "shipped", "canceled", "invoiced", "processing"];
const STATES: [&str; 8] = ["SP", "RJ", "MG", "RS", "PR", "SC", "BA", "DF"];

fn synthetic_orders(rows: usize) -> OrderTable {
    let records = (0..rows)
        .map(|i| OrderRecord {
            order_id: format!("order-{i:07}"),
            status: STATUSES[i % STATUSES.len()].to_string(),
            customer_state: if i % 50 == 0 {
                None
            } else {
                Some(STATES[i % STATES.len()].to_string())
            },
            purchased: None,
            delivered: None,
            order_month: Some(format!("2017-{:02}", (i % 12) + 1)),
            delivery_time: Some((i % 60) as i64 - 2),
        })
        .collect();
    OrderTable::new(records)
}

fn aggregate_counts_benchmark(c: &mut Criterion) {
    let orders = synthetic_orders(100_000);
    let times = orders.delivery_times();

    c.bench_function("count_by_status_100k", |b| {
        b.iter(|| {
            count_by(
                black_box(&orders),
                Dimension::Status,
                KeyOrder::KeyAscending,
                None,
            )
        })
    });

    c.bench_function("count_by_status_month_filtered_100k", |b| {
        let predicate: &RowPredicate<'_> = &|record| record.order_month.as_deref() == Some("2017-03");
        b.iter(|| {
            count_by(
                black_box(&orders),
                Dimension::Status,
                KeyOrder::KeyAscending,
                Some(predicate),
            )
        })
    });

    c.bench_function("top_n_states_100k", |b| {
        b.iter(|| top_n(black_box(&orders), Dimension::State, 10))
    });

    c.bench_function("histogram_delivery_100k", |b| {
        b.iter(|| histogram(black_box(times.as_slice()), 40))
    });
}

criterion_group!(benches, aggregate_counts_benchmark);
criterion_main!(benches);

//! Criterion timing of ordered batch execution through the async handle. Each
//! iteration replays the same workload against a pre-seeded database so the
//! numbers track dispatch overhead rather than storage effects.

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use sqlite_batch::prelude::*;
use tempfile::TempDir;
use tokio::runtime::Runtime;

const BATCH_SIZE: usize = 32;

/// Holds the on-disk database path and keeps its tempdir alive.
struct Dataset {
    path: String,
    _dir: TempDir,
}

static DATASET: LazyLock<Dataset> = LazyLock::new(|| {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir
        .path()
        .join("bench_batches.db")
        .to_string_lossy()
        .into_owned();
    Dataset { path, _dir: dir }
});

// Dedicated runtime for driving the async handle.
static TOKIO_RUNTIME: LazyLock<Runtime> =
    LazyLock::new(|| Runtime::new().expect("create tokio runtime"));

fn mixed_batch() -> Vec<StatementRequest> {
    (0..BATCH_SIZE as i64)
        .map(|i| {
            if i % 4 == 3 {
                StatementRequest::without_args("SELECT COUNT(*) AS cnt FROM bench")
            } else {
                StatementRequest::new(
                    "INSERT INTO bench (task, payload) VALUES (?1, ?2)",
                    vec![RowValues::Int(i), RowValues::Text(format!("row-{i}"))],
                )
            }
        })
        .collect()
}

fn select_batch() -> Vec<StatementRequest> {
    (0..BATCH_SIZE)
        .map(|_| StatementRequest::without_args("SELECT id, task, payload FROM bench LIMIT 8"))
        .collect()
}

fn batch_execution(c: &mut Criterion) {
    let runtime = &*TOKIO_RUNTIME;
    let db = runtime
        .block_on(
            SqliteDatabase::builder(DATASET.path.clone())
                .busy_timeout_ms(5000)
                .build(),
        )
        .expect("open benchmark database");
    runtime
        .block_on(db.execute(
            StatementRequest::without_args(
                "CREATE TABLE bench (id INTEGER PRIMARY KEY AUTOINCREMENT, task INTEGER, payload TEXT)",
            ),
            AccessMode::ReadWrite,
        ))
        .expect("create benchmark table");

    let mut group = c.benchmark_group("batch_execution");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));

    group.bench_function("mixed_read_write", |b| {
        let db = db.clone();
        b.to_async(runtime).iter_custom(move |iters| {
            let db = db.clone();
            async move {
                let mut total = Duration::default();
                for _ in 0..iters {
                    let batch = mixed_batch();
                    let start = Instant::now();
                    let outcomes = db
                        .execute_batch(batch, AccessMode::ReadWrite)
                        .await
                        .expect("execute mixed batch");
                    total += start.elapsed();
                    assert_eq!(outcomes.len(), BATCH_SIZE);
                    black_box(outcomes);
                }
                total
            }
        });
    });

    group.bench_function("select_only_read_only", |b| {
        let db = db.clone();
        b.to_async(runtime).iter_custom(move |iters| {
            let db = db.clone();
            async move {
                let mut total = Duration::default();
                for _ in 0..iters {
                    let batch = select_batch();
                    let start = Instant::now();
                    let outcomes = db
                        .execute_batch(batch, AccessMode::ReadOnly)
                        .await
                        .expect("execute select batch");
                    total += start.elapsed();
                    black_box(outcomes);
                }
                total
            }
        });
    });

    group.finish();
}

criterion_group!(benches, batch_execution);
criterion_main!(benches);

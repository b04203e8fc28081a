use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use contactbook::core::encode_collection;
use contactbook::{RecordStore, DEFAULT_COLLECTION_KEY};
use contactbook_store::MemoryMedium;
use contactbook_testkit::{sample_record, sample_records};

fn bench_append(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("build runtime");
    let mut group = c.benchmark_group("append");

    for size in [10u32, 100, 1_000] {
        let seed = encode_collection(&sample_records(size)).expect("encode seed");
        group.bench_function(format!("onto_{size}"), |b| {
            b.to_async(&runtime).iter_batched(
                || {
                    let medium = MemoryMedium::new();
                    medium
                        .raw_insert(DEFAULT_COLLECTION_KEY, seed.clone())
                        .expect("seed");
                    RecordStore::with_medium(medium)
                },
                |store| async move {
                    store.append(sample_record(size + 1)).await.expect("append");
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_list(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("build runtime");
    let store = RecordStore::with_medium(MemoryMedium::new());
    runtime.block_on(async {
        for record in sample_records(1_000) {
            store.append(record).await.expect("seed");
        }
    });

    c.bench_function("list_1000", |b| {
        b.to_async(&runtime).iter(|| async { store.list().await.len() });
    });
}

criterion_group!(benches, bench_append, bench_list);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mst_bits::{class_number, distance_schema, mask};

fn class_number_bench(c: &mut Criterion) {
    c.bench_function("class_number_order12_full", |b| {
        b.iter(|| {
            for number in 0..=mask(12) {
                black_box(class_number(12, number));
            }
        });
    });

    c.bench_function("class_number_order64_sparse", |b| {
        let samples: Vec<u64> = (0..1024u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .collect();
        b.iter(|| {
            for &number in &samples {
                black_box(class_number(64, number));
            }
        });
    });

    c.bench_function("distance_schema_order24", |b| {
        b.iter(|| {
            for number in 0..4096u64 {
                black_box(distance_schema(24, number << 6));
            }
        });
    });
}

criterion_group!(benches, class_number_bench);
criterion_main!(benches);

//! Latency benchmarks for the sentiment engine
//!
//! The classifier sits on the request path of every upload, so per-review
//! scoring needs to stay well under a millisecond.
//!
//! Run with: cargo bench -p reviewlens-engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use reviewlens_engine::{Normalizer, SentimentModel};

fn benchmark_normalizer(c: &mut Criterion) {
    let normalizer = Normalizer::new().expect("Failed to build normalizer");

    let test_cases = vec![
        ("short_clean", "barang bagus pengiriman cepat"),
        ("short_noisy", "MANTAP!!! cek http://toko.id/promo 100% ori :)"),
        (
            "medium",
            "Sudah dua kali belanja di toko ini, barang selalu sesuai deskripsi, \
             packing rapih dan aman, pengiriman juga cepat. Recommended seller!",
        ),
    ];

    let mut group = c.benchmark_group("normalizer");
    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("normalize", name), &text, |b, text| {
            b.iter(|| normalizer.normalize(black_box(text)));
        });
    }
    group.finish();
}

fn benchmark_classifier(c: &mut Criterion) {
    let model = SentimentModel::builtin().expect("Failed to build model");

    let long_review = "barang bagus tapi pengiriman lambat sekali ".repeat(20);
    let test_cases = vec![
        ("positive", "bagus banget, puas, mantap"),
        ("negative", "jelek, rusak, kecewa berat"),
        ("neutral", "biasa saja, standar"),
        ("long", long_review.as_str()),
    ];

    let mut group = c.benchmark_group("classifier");
    for (name, text) in test_cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &text, |b, text| {
            b.iter(|| model.classify(black_box(text)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_normalizer, benchmark_classifier);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use huffman_prefix::{
    build_frequency_table, build_tree, build_tree_with_config, extract_codes, CodeConfig,
    HuffmanCodec, MergeStrategy,
};

/// Bytes with a skewed distribution over the whole byte range.
fn generate_skewed_bytes(size: usize) -> Vec<u8> {
    (0..size)
        .map(|i| {
            let x = (i.wrapping_mul(2_654_435_761) % 1000) as f64 / 1000.0;
            (x * x * 255.0) as u8
        })
        .collect()
}

fn tree_assembly(c: &mut Criterion) {
    let input = generate_skewed_bytes(64 * 1024);
    let table = build_frequency_table(input.iter().copied()).unwrap();
    let sort = CodeConfig::new().with_merge_strategy(MergeStrategy::SortAndShift);

    c.bench_function("build tree (min-heap)", |b| {
        b.iter(|| build_tree(black_box(&table)))
    });
    c.bench_function("build tree (sort and shift)", |b| {
        b.iter(|| build_tree_with_config(black_box(&table), &sort))
    });
}

fn full_pipeline(c: &mut Criterion) {
    let input = generate_skewed_bytes(64 * 1024);

    c.bench_function("frequencies + tree + codes", |b| {
        b.iter(|| {
            let table = build_frequency_table(black_box(&input).iter().copied()).unwrap();
            let tree = build_tree(&table).unwrap();
            extract_codes(&tree)
        })
    });
}

fn encode_decode(c: &mut Criterion) {
    let input = generate_skewed_bytes(64 * 1024);
    let codec = HuffmanCodec::from_bytes(&input).unwrap();
    let encoded = codec.encode(&input).unwrap();

    c.bench_function("encode 64KiB", |b| b.iter(|| codec.encode(black_box(&input))));
    c.bench_function("decode 64KiB", |b| b.iter(|| codec.decode(black_box(&encoded))));
}

criterion_group!(benches, tree_assembly, full_pipeline, encode_decode);
criterion_main!(benches);

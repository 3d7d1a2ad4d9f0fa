// benches/codec_bench.rs

use bintree::Node;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use level_codec::{decode, encode};

fn full_tree(depth: u32, next: &mut u64) -> Node {
    let value = *next;
    *next += 1;
    if depth == 0 {
        return Node::new(value).unwrap();
    }
    let left = full_tree(depth - 1, next);
    let right = full_tree(depth - 1, next);
    Node::with_children(value, Some(left), Some(right)).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let depths = vec![6, 10, 14];

    let mut group = c.benchmark_group("encode");
    for depth in depths {
        let tree = full_tree(depth, &mut 1);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(encode(&tree)));
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let depths = vec![6, 10, 14];

    let mut group = c.benchmark_group("decode");
    for depth in depths {
        let words = encode(&full_tree(depth, &mut 1));

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| black_box(decode(&words).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);

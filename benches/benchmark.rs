use std::cmp::Ordering;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use bst_avl::{Links, Node, Tree};

const N: usize = 100_000;

struct Record {
    links: Links<Record>,
    key: i32,
}

impl Node for Record {
    fn links(&self) -> &Links<Self> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<Self> {
        &mut self.links
    }
}

fn record(key: i32) -> Box<Record> {
    Box::new(Record {
        links: Links::new(),
        key,
    })
}

fn by_key(a: &Record, b: &Record) -> Ordering {
    a.key.cmp(&b.key)
}

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("tree_insert", |b| {
        b.iter_batched(
            || values.iter().map(|value| record(*value)).collect::<Vec<_>>(),
            |records| {
                let mut tree = Tree::new(by_key);
                for record in records {
                    black_box(tree.insert(record));
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });

    let mut tree = Tree::new(by_key);
    for value in &values {
        tree.insert(record(*value));
    }
    let probes: Vec<Record> = values
        .iter()
        .map(|value| Record {
            links: Links::new(),
            key: *value,
        })
        .collect();

    c.bench_function("tree_lookup", |b| {
        b.iter(|| {
            for probe in &probes {
                black_box(tree.lookup(probe));
            }
        })
    });

    c.bench_function("tree_delete", |b| {
        b.iter_batched(
            || {
                let mut tree = Tree::new(by_key);
                for value in &values {
                    tree.insert(record(*value));
                }
                tree
            },
            |mut tree| {
                for probe in &probes {
                    black_box(tree.delete(probe));
                }
                tree
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);

// Copyright (c) phast contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Performance benchmarks for phast-ast.
//!
//! Run with:
//! ```bash
//! cargo bench -p phast-ast
//! ```
//!
//! # Benchmark Categories
//!
//! 1. **Traversal**: walk generated trees with the stock visitors
//! 2. **Accumulation**: nested push/add/pop cycles on the scoped list
//! 3. **Serialization**: canonical JSON out, interchange JSON back in

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use phast_ast::json::{from_json, to_json_pretty, to_tagged_json_pretty};
use phast_ast::{
    traverse, Argument, ArgumentList, DumpOptions, Dumper, EventRecorder, Expression,
    FunctionCall, Identifier, KindCounter, Name, NamePart, Node, NullVisitor, NumberLiteral,
    Root, StackedNodeList, TreeBuilder, Variable,
};

// =============================================================================
// Test Data Generation
// =============================================================================

/// A call nested `depth` levels deep: `f(1.5, $x, f(1.5, $x, ...))`.
fn generate_call(depth: usize) -> Node {
    let mut arguments = vec![
        Argument::new(Some(NumberLiteral::new("1.5").into())).into(),
        Argument::new(Some(Variable::new(Identifier::new("x").into()).into())).into(),
    ];
    if depth > 0 {
        arguments.push(Argument::new(Some(generate_call(depth - 1))).into());
    }
    FunctionCall::new(
        Name::new(vec![NamePart::new("f").into()]).into(),
        ArgumentList::new(arguments).into(),
    )
    .into()
}

/// `stmts` call statements, each nested four levels deep.
fn generate_tree(stmts: usize) -> Node {
    Root::new(
        (0..stmts)
            .map(|_| Expression::new(generate_call(4)).into())
            .collect(),
    )
    .into()
}

fn node_count(tree: &Node) -> u64 {
    traverse(&mut NullVisitor, tree).nodes_entered as u64
}

// =============================================================================
// Traversal Benchmarks
// =============================================================================

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");

    for size in [10, 100, 1000].iter() {
        let tree = generate_tree(*size);
        group.throughput(Throughput::Elements(node_count(&tree)));

        group.bench_with_input(BenchmarkId::new("null", size), &tree, |b, tree| {
            b.iter(|| black_box(traverse(&mut NullVisitor, tree)));
        });
        group.bench_with_input(BenchmarkId::new("count", size), &tree, |b, tree| {
            b.iter(|| black_box(KindCounter::count(tree)));
        });
        group.bench_with_input(BenchmarkId::new("events", size), &tree, |b, tree| {
            b.iter(|| black_box(EventRecorder::record(tree)));
        });
        group.bench_with_input(BenchmarkId::new("dump", size), &tree, |b, tree| {
            b.iter(|| black_box(Dumper::dump(tree, DumpOptions::default())));
        });
    }

    group.finish();
}

// =============================================================================
// Accumulation Benchmarks
// =============================================================================

fn bench_stacked_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("stacked_list");

    for width in [4, 32, 256].iter() {
        group.throughput(Throughput::Elements((*width * 3) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_wide", width)),
            width,
            |b, &width| {
                let mut list = StackedNodeList::<u32>::new();
                b.iter(|| {
                    list.reset();
                    list.push();
                    for i in 0..width as u32 {
                        list.add(i);
                    }
                    list.push();
                    for i in 0..width as u32 {
                        list.add(i);
                    }
                    let inner: usize = list.pop().count();
                    for i in 0..width as u32 {
                        list.add(i);
                    }
                    let outer: usize = list.pop().count();
                    black_box((inner, outer))
                });
            },
        );
    }

    group.finish();
}

fn bench_tree_builder(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_builder");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut builder = TreeBuilder::with_capacity(size * 4);
            b.iter(|| {
                builder.open_list();
                for _ in 0..size {
                    builder.open_list();
                    builder.emit(Argument::new(Some(NumberLiteral::new("1.5").into())));
                    builder.emit(Argument::new(None));
                    let arguments = builder.close_list().unwrap();
                    builder.emit(ArgumentList::new(arguments));
                }
                let stmts = builder.close_list().unwrap();
                black_box(builder.finish(Root::new(stmts)).unwrap())
            });
        });
    }

    group.finish();
}

// =============================================================================
// Serialization Benchmarks
// =============================================================================

fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");

    for size in [10, 100].iter() {
        let tree = generate_tree(*size);
        let text = to_tagged_json_pretty(&tree).unwrap();
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("serialize", size), &tree, |b, tree| {
            b.iter(|| black_box(to_json_pretty(tree).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("deserialize", size), &text, |b, text| {
            b.iter(|| black_box(from_json(text).unwrap()));
        });
    }

    group.finish();
}

// =============================================================================
// Benchmark Groups
// =============================================================================

criterion_group!(traversal, bench_traverse);

criterion_group!(accumulation, bench_stacked_list, bench_tree_builder);

criterion_group!(serialization, bench_json);

criterion_main!(traversal, accumulation, serialization);

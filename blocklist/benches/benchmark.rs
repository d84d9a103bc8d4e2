use std::collections::LinkedList;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};

use blocklist::{BlockList, MemoryBlock};

const NUMBER_BLOCKS: usize = 1024;

//  Append.
//
//  This benchmark repeatedly appends a block to a list of `NUMBER_BLOCKS` blocks.
//
//  Appending goes through the tail, hence should be on par with the standard doubly-linked list.
fn append(c: &mut Criterion) {
    c.bench_function("Append - std", |b| b.iter_batched_ref(
        || std_list(NUMBER_BLOCKS),
        |list| list.push_back(black_box(MemoryBlock::new(0, 64))),
        BatchSize::SmallInput
    ));

    c.bench_function("Append - blocklist", |b| b.iter_batched_ref(
        || block_list(NUMBER_BLOCKS),
        |list| { list.add_last(black_box(MemoryBlock::new(0, 64))); },
        BatchSize::SmallInput
    ));
}

//  Insert in the middle.
//
//  This benchmark repeatedly inserts a block in the middle of a list of `NUMBER_BLOCKS` blocks.
//
//  The list has to walk to the insertion point, whilst the vector has to shift half its elements.
fn insert_middle(c: &mut Criterion) {
    c.bench_function("Insert Middle - vec", |b| b.iter_batched_ref(
        || vec_list(NUMBER_BLOCKS),
        |list| list.insert(black_box(NUMBER_BLOCKS / 2), MemoryBlock::new(0, 64)),
        BatchSize::SmallInput
    ));

    c.bench_function("Insert Middle - blocklist", |b| b.iter_batched_ref(
        || block_list(NUMBER_BLOCKS),
        |list| list.insert_at(black_box(NUMBER_BLOCKS / 2), MemoryBlock::new(0, 64)).expect("Within range"),
        BatchSize::SmallInput
    ));
}

//  Lookup.
//
//  This benchmark repeatedly looks up the last block of a list of `NUMBER_BLOCKS` blocks, by value.
fn index_of(c: &mut Criterion) {
    let target = MemoryBlock::new((NUMBER_BLOCKS - 1) * 64, 64);

    let list = std_list(NUMBER_BLOCKS);

    c.bench_function("Index Of - std", |b| b.iter(|| {
        black_box(list.iter().position(|block| *block == black_box(target)))
    }));

    let list = block_list(NUMBER_BLOCKS);

    c.bench_function("Index Of - blocklist", |b| b.iter(|| {
        black_box(list.index_of(&black_box(target)))
    }));
}

//  Remove by value.
//
//  This benchmark repeatedly removes the block in the middle of a list of `NUMBER_BLOCKS` blocks, by value.
fn remove_by_value(c: &mut Criterion) {
    let target = MemoryBlock::new(NUMBER_BLOCKS / 2 * 64, 64);

    c.bench_function("Remove By Value - blocklist", |b| b.iter_batched_ref(
        || block_list(NUMBER_BLOCKS),
        |list| list.remove_by_value(&black_box(target)).expect("Present"),
        BatchSize::SmallInput
    ));
}

criterion_group!(
    block_list_operations,
    append,
    insert_middle,
    index_of,
    remove_by_value
);

criterion_main!(block_list_operations);

//
//  Implementation
//

fn blocks(number_blocks: usize) -> impl Iterator<Item = MemoryBlock> {
    (0..number_blocks).map(|i| MemoryBlock::new(i * 64, 64))
}

fn block_list(number_blocks: usize) -> BlockList { blocks(number_blocks).collect() }

fn std_list(number_blocks: usize) -> LinkedList<MemoryBlock> { blocks(number_blocks).collect() }

fn vec_list(number_blocks: usize) -> Vec<MemoryBlock> { blocks(number_blocks).collect() }

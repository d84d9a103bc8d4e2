//! A seeded driver of random operations.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use blocklist_core::{BlockRecord, Configuration, Error, OrderedList};

use super::Model;

/// An operation applied to both the list and the model.
#[derive(Clone, Debug, PartialEq)]
pub enum Operation<B> {
    /// `add_first(block)`.
    AddFirst(B),
    /// `add_last(block)`.
    AddLast(B),
    /// `insert_at(index, block)`.
    InsertAt(usize, B),
    /// `block_at(index)`.
    BlockAt(usize),
    /// `index_of(block)`.
    IndexOf(B),
    /// `pop_first()`.
    PopFirst,
    /// `remove_at(index)`.
    RemoveAt(usize),
    /// `remove_by_value(block)`.
    RemoveByValue(B),
    /// `remove_node(id)`, with the id of the node at `index`, if any.
    RemoveNode(usize),
}

/// Scenario drives a list and its model through the same sequence of random operations, checking after each that
/// both agree.
///
/// The sequence is fully determined by the seed, hence a failing scenario is reproduced by re-running its seed.
pub struct Scenario {
    seed: u64,
    rng: ChaCha8Rng,
}

impl Scenario {
    /// Creates an instance.
    pub fn new(seed: u64) -> Self { Self { seed, rng: ChaCha8Rng::seed_from_u64(seed) } }

    /// Returns the seed of the scenario.
    pub fn seed(&self) -> u64 { self.seed }

    /// Runs `steps` random operations, with blocks created by `block`.
    ///
    /// Returns the operations executed, in order.
    ///
    /// #   Panics
    ///
    /// -   If the list and the model disagree at any point.
    pub fn run<B, C, F>(
        &mut self,
        steps: usize,
        list: &mut OrderedList<B, C>,
        model: &mut Model<B, C>,
        mut block: F,
    )
        -> Vec<Operation<B>>
        where
            B: BlockRecord + Clone + fmt::Debug,
            C: Configuration,
            F: FnMut(&mut ChaCha8Rng) -> B,
    {
        (0..steps)
            .map(|step| {
                let operation = self.generate(model.len(), &mut block);

                self.apply(step, &operation, list, model);

                operation
            })
            .collect()
    }

    //  Generates an operation, with indices straddling the bounds of the list.
    fn generate<B, F>(&mut self, size: usize, block: &mut F) -> Operation<B>
        where
            F: FnMut(&mut ChaCha8Rng) -> B,
    {
        let index = self.rng.gen_range(0..=size + 1);

        match self.rng.gen_range(0..9) {
            0 => Operation::AddFirst(block(&mut self.rng)),
            1 => Operation::AddLast(block(&mut self.rng)),
            2 => Operation::InsertAt(index, block(&mut self.rng)),
            3 => Operation::BlockAt(index),
            4 => Operation::IndexOf(block(&mut self.rng)),
            5 => Operation::PopFirst,
            6 => Operation::RemoveAt(index),
            7 => Operation::RemoveByValue(block(&mut self.rng)),
            _ => Operation::RemoveNode(index),
        }
    }

    fn apply<B, C>(&self, step: usize, operation: &Operation<B>, list: &mut OrderedList<B, C>, model: &mut Model<B, C>)
        where
            B: BlockRecord + Clone + fmt::Debug,
            C: Configuration,
    {
        let context = Context { seed: self.seed, step, operation };

        match operation {
            Operation::AddFirst(block) => {
                list.add_first(block.clone());
                model.add_first(block.clone());
            },
            Operation::AddLast(block) => {
                list.add_last(block.clone());
                model.add_last(block.clone());
            },
            Operation::InsertAt(index, block) => {
                let expected = model.insert_at(*index, block.clone());

                assert_eq!(expected, list.insert_at(*index, block.clone()), "{}", context);
            },
            Operation::BlockAt(index) => {
                assert_eq!(model.block_at(*index), list.block_at(*index), "{}", context);
            },
            Operation::IndexOf(block) => {
                assert_eq!(model.index_of(block), list.index_of(block), "{}", context);
            },
            Operation::PopFirst => {
                assert_eq!(model.pop_first(), list.pop_first(), "{}", context);
            },
            Operation::RemoveAt(index) => {
                assert_eq!(model.remove_at(*index), list.remove_at(*index), "{}", context);
            },
            Operation::RemoveByValue(block) => {
                assert_eq!(model.remove_by_value(block), list.remove_by_value(block), "{}", context);
            },
            Operation::RemoveNode(index) => {
                //  Past the end, there is no node to designate: the list is handed None.
                let id = list.node_at(*index).ok().map(|node| node.id());
                let expected = if id.is_some() { model.remove_at(*index) } else { Err(Error::NullReference) };

                assert_eq!(expected, list.remove_node(id), "{}", context);
            },
        }

        model.assert_matches(list);
    }
}

//
//  Implementation
//

struct Context<'a, B> {
    seed: u64,
    step: usize,
    operation: &'a Operation<B>,
}

impl<'a, B> fmt::Display for Context<'a, B>
    where
        B: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seed {}, step {}: {:?}", self.seed, self.step, self.operation)
    }
}

#[cfg(test)]
mod tests {

use blocklist_core::{CompatibleConfiguration, StrictConfiguration};

use super::*;

#[test]
fn scenario_reproducible() {
    fn operations(seed: u64) -> Vec<Operation<u32>> {
        let mut list = OrderedList::<u32, StrictConfiguration>::with_configuration();
        let mut model = Model::new();

        Scenario::new(seed).run(64, &mut list, &mut model, |rng| rng.gen_range(0..8))
    }

    assert_eq!(operations(7), operations(7));
    assert_ne!(operations(7), operations(8));
}

#[test]
fn scenario_compatible() {
    let mut list = OrderedList::<u32, CompatibleConfiguration>::with_configuration();
    let mut model = Model::new();

    let mut scenario = Scenario::new(3);
    assert_eq!(3, scenario.seed());

    let operations = scenario.run(256, &mut list, &mut model, |rng| rng.gen_range(0..8));

    assert_eq!(256, operations.len());
}

} // mod tests

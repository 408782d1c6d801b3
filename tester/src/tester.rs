//! Model checking for the list types: a seeded stream of operations is
//! applied to the real container and to a reference implementation, and the
//! first disagreement is reported with enough context to replay it.

use core::fmt::{self, Debug, Formatter};
use rand::{Rng, SeedableRng};
use tracing::{error, info};

pub mod config;
mod list;
mod traits;

pub use list::{ListOperation, ListOperationGenerator, ListResult};
pub use traits::*;

/// How many operations before the failing one `playback` shows.
const PLAYBACK_WINDOW: usize = 5;

pub type ReferenceOf<O, R> =
    <<O as OperationGen<R>>::Generator as OperationGenerator<R>>::ReferenceImpl;

pub type Failure<O, R> = OperationFailure<O, ReferenceOf<O, R>>;

/// Applies `ops` generated operations to a fresh target, stopping at the
/// first result that differs from the reference.
pub fn test_list<O, R>(seed: u64, ops: usize) -> Result<(), Failure<O, R>>
where
    O: OperationGen<R>,
    O::Result: PartialEq,
    O::Target: Default,
    R: Rng + SeedableRng,
{
    let mut target = O::Target::default();
    let mut gen = O::gen_from_seed(seed);
    let mut operations = Vec::with_capacity(ops);

    for op_num in 0..ops {
        let Some((operation, expected)) = gen.next() else {
            break;
        };
        let actual = operation.apply(&mut target);
        let diverged = actual != expected;
        operations.push(Step {
            operation,
            expected,
            actual,
        });
        if diverged {
            return Err(OperationFailure {
                seed,
                op_num,
                target,
                reference: gen.data(),
                operations,
            });
        }
    }
    Ok(())
}

pub struct Step<O: Operation> {
    pub operation: O,
    pub expected: O::Result,
    pub actual: O::Result,
}

impl<O> Debug for Step<O>
where
    O: Operation + Debug,
    O::Result: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("operation", &self.operation)
            .field("expected", &self.expected)
            .field("actual", &self.actual)
            .finish()
    }
}

pub struct OperationFailure<O: Operation, D> {
    pub seed: u64,
    pub op_num: usize,
    pub target: O::Target,
    pub reference: D,
    pub operations: Vec<Step<O>>,
}

impl<O, D> Debug for OperationFailure<O, D>
where
    O: Operation + Debug,
    O::Result: Debug,
    O::Target: Debug,
    D: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFailure")
            .field("seed", &self.seed)
            .field("op_num", &self.op_num)
            .field("target", &self.target)
            .field("reference", &self.reference)
            .field("operations", &self.operations.len())
            .finish()
    }
}

impl<O, D> OperationFailure<O, D>
where
    O: Operation + Debug,
    O::Result: Debug,
    O::Target: Debug,
    D: Debug,
{
    /// Logs the operations leading up to the divergence and both states.
    pub fn playback(&self) {
        info!(seed = self.seed, op_num = self.op_num, "running playback");
        let lower = self.op_num.saturating_sub(PLAYBACK_WINDOW);
        for (ind, step) in self.operations.iter().enumerate().skip(lower) {
            info!("--------- operation {} ----------", ind);
            info!("operation: {:?}", step.operation);
            info!("expected / actual : {:?}, {:?}", step.expected, step.actual);
        }
        error!("target state: {:?}", self.target);
        error!("reference state: {:?}", self.reference);
    }
}

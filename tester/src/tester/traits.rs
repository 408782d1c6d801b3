use rand::{Rng, SeedableRng};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

pub trait OperationGen<R: Rng + SeedableRng>: Operation + Sized {
    type Generator: OperationGenerator<R, Operation = Self, Item = (Self, Self::Result)>;
    fn gen_from_seed(seed: u64) -> Self::Generator {
        Self::Generator::from_seed(seed)
    }
}

// deterministically generates a sequence of valid operations along with the
// result a correct target must produce for each of them
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: u64) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

use super::traits::*;
use core::fmt::{Debug, Display};
use linked_lists::{
    linked_lists::{DELIMITER, TERMINATOR},
    SinglyLinkedList,
};
use rand::{
    distributions::{Distribution, Standard},
    rngs::StdRng,
    Rng, SeedableRng,
};
use std::collections::VecDeque;

/// Chance that a lookup or removal targets a value known to be in the list.
const EXISTING_BIAS: f64 = 0.75;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListOperation<T> {
    Insert(T),
    Search(T),
    Pop,
    RemoveFirst(T),
    Len,
    Render,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListResult<T> {
    Inserted,
    Found(bool),
    Removed(Option<T>),
    Len(usize),
    Rendered(String),
}

impl<T> Operation for ListOperation<T>
where
    T: Clone + PartialEq + Display,
{
    type Result = ListResult<T>;
    type Target = SinglyLinkedList<T>;

    fn apply(&self, list: &mut Self::Target) -> Self::Result {
        match self {
            Self::Insert(value) => {
                list.insert(value.clone());
                ListResult::Inserted
            }
            Self::Search(value) => ListResult::Found(list.search(value)),
            Self::Pop => ListResult::Removed(list.pop()),
            Self::RemoveFirst(value) => ListResult::Removed(list.remove_first(value)),
            Self::Len => ListResult::Len(list.len()),
            Self::Render => ListResult::Rendered(list.to_string()),
        }
    }
}

impl<T, R> OperationGen<R> for ListOperation<T>
where
    T: Clone + PartialEq + Display,
    R: Rng + SeedableRng,
    Standard: Distribution<T>,
{
    type Generator = ListOperationGenerator<T, R>;
}

/// Drives a `VecDeque` alongside the list; its front is the list's head.
pub struct ListOperationGenerator<T, R = StdRng>
where
    R: Rng + SeedableRng,
{
    rng: R,
    data: VecDeque<T>,
}

impl<T: Debug, R: Rng + SeedableRng> Debug for ListOperationGenerator<T, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOperationGenerator")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, R> ListOperationGenerator<T, R>
where
    T: Clone + Display,
    R: Rng + SeedableRng,
    Standard: Distribution<T>,
{
    fn pick_value(&mut self) -> T {
        if !self.data.is_empty() && self.rng.gen_bool(EXISTING_BIAS) {
            let ind = self.rng.gen_range(0..self.data.len());
            self.data[ind].clone()
        } else {
            self.rng.gen()
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for value in self.data.iter() {
            out.push_str(&format!("{value}{DELIMITER}"));
        }
        out.push_str(TERMINATOR);
        out
    }
}

impl<T, R> OperationGenerator<R> for ListOperationGenerator<T, R>
where
    T: Clone + PartialEq + Display,
    R: Rng + SeedableRng,
    Standard: Distribution<T>,
{
    type Operation = ListOperation<T>;
    type ReferenceImpl = VecDeque<T>;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: R::seed_from_u64(seed),
            data: VecDeque::new(),
        }
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl<T, R> Iterator for ListOperationGenerator<T, R>
where
    T: Clone + PartialEq + Display,
    R: Rng + SeedableRng,
    Standard: Distribution<T>,
{
    type Item = (ListOperation<T>, ListResult<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let item = match self.rng.gen_range(0..10) {
            0..=3 => {
                let value: T = self.rng.gen();
                self.data.push_front(value.clone());
                (ListOperation::Insert(value), ListResult::Inserted)
            }
            4 | 5 => {
                let value = self.pick_value();
                let found = self.data.contains(&value);
                (ListOperation::Search(value), ListResult::Found(found))
            }
            6 => (ListOperation::Pop, ListResult::Removed(self.data.pop_front())),
            7 => {
                let value = self.pick_value();
                let position = self.data.iter().position(|v| v == &value);
                let removed = position.and_then(|ind| self.data.remove(ind));
                (ListOperation::RemoveFirst(value), ListResult::Removed(removed))
            }
            8 => (ListOperation::Len, ListResult::Len(self.data.len())),
            9 => (ListOperation::Render, ListResult::Rendered(self.render())),
            _ => unreachable!(),
        };
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let a: Vec<_> = <ListOperation<u8> as OperationGen<StdRng>>::gen_from_seed(11)
            .take(200)
            .collect();
        let b: Vec<_> = <ListOperation<u8> as OperationGen<StdRng>>::gen_from_seed(11)
            .take(200)
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn reference_tracks_inserts_at_front() {
        let mut gen: ListOperationGenerator<u8> = OperationGenerator::<StdRng>::from_seed(3);
        let mut expected = VecDeque::new();
        for _ in 0..500 {
            let (op, _) = gen.next().unwrap();
            match op {
                ListOperation::Insert(v) => expected.push_front(v),
                ListOperation::Pop => {
                    expected.pop_front();
                }
                ListOperation::RemoveFirst(v) => {
                    if let Some(ind) = expected.iter().position(|x| x == &v) {
                        expected.remove(ind);
                    }
                }
                _ => {}
            }
        }
        assert_eq!(OperationGenerator::<StdRng>::data(gen), expected);
    }

    #[test]
    fn apply_matches_single_steps() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(ListOperation::Insert(1).apply(&mut list), ListResult::Inserted);
        assert_eq!(ListOperation::Insert(2).apply(&mut list), ListResult::Inserted);
        assert_eq!(
            ListOperation::Render.apply(&mut list),
            ListResult::Rendered("2 -> 1 -> NULL".to_string())
        );
        assert_eq!(ListOperation::Search(1).apply(&mut list), ListResult::Found(true));
        assert_eq!(
            ListOperation::RemoveFirst(1).apply(&mut list),
            ListResult::Removed(Some(1))
        );
        assert_eq!(ListOperation::Pop.apply(&mut list), ListResult::Removed(Some(2)));
        assert_eq!(ListOperation::<i32>::Len.apply(&mut list), ListResult::Len(0));
    }
}

//! Source of uniform random indices.

/// Picks an index uniformly from `0..len`.
///
/// Implementations are only called with `len > 0` and must return a value
/// strictly below `len`. Production code wraps a `rand` generator; tests
/// substitute seeded or scripted sources.
pub trait RandomSource: Send {
    fn pick(&mut self, len: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Always picks the first element. Useful where the order of a draw does
/// not matter, such as exercising pool resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstIndex;

impl RandomSource for FirstIndex {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

//! Fixed-width accumulators.
//!
//! Every function here is total: any input of the word type maps to some output, and any
//! intermediate overflow wraps. Non-positive inputs leave the accumulation loops empty,
//! so the initial accumulator value is returned as is.

mod word;

pub use word::{Width, Word};

use std::iter;

/// Counter of a `for (i = 1; i < n + 1; i++)` loop.
///
/// The bound `n + 1` wraps as well, so for `n == W::MAX` the loop is empty.
fn counter<W: Word>(n: W) -> impl Iterator<Item = W> {
    let bound = n.wrapping_add(W::ONE);
    iter::successors(Some(W::ONE), |i| Some(i.wrapping_add(W::ONE)))
        .take_while(move |i| *i < bound)
}

/// Factorial of `n`, accumulated as `f + f * (i - 1)` on each step.
/// Returns `1` for any `n <= 0`.
pub fn factorial_like<W: Word>(n: W) -> W {
    counter(n).fold(W::ONE, |f, i| {
        f.wrapping_add(f.wrapping_mul(i.wrapping_sub(W::ONE)))
    })
}

/// Fibonacci number `F(n)` where `F(0) = 0` and `F(1) = 1`.
/// Returns `0` for any `n <= 0`.
pub fn fibonacci_like<W: Word>(n: W) -> W {
    let (a, _) = counter(n).fold((W::ZERO, W::ONE), |(a, b), _| (b, a.wrapping_add(b)));
    a
}

/// Sum of `i * i` for `i` in `1..=n`. Returns `0` for any `n <= 0`.
pub fn sum_of_squares<W: Word>(n: W) -> W {
    counter(n).fold(W::ZERO, |s, i| s.wrapping_add(i.wrapping_mul(i)))
}

/// Combined result: `factorial_like(x) + fibonacci_like(y) + sum_of_squares(z)`.
pub fn compute<W: Word>(x: W, y: W, z: W) -> W {
    combine(factorial_like(x), fibonacci_like(y), sum_of_squares(z))
}

fn combine<W: Word>(fact: W, fib: W, squares: W) -> W {
    fact.wrapping_add(fib).wrapping_add(squares)
}

/// Results of each accumulator together with their combined total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakdown<W: Word> {
    pub factorial: W,
    pub fibonacci: W,
    pub squares: W,
    pub total: W,
}

impl<W: Word> Breakdown<W> {
    /// Evaluate each accumulator once. `total` is equal to [`compute`] called with
    /// the same arguments.
    pub fn compute(x: W, y: W, z: W) -> Self {
        let factorial = factorial_like(x);
        let fibonacci = fibonacci_like(y);
        let squares = sum_of_squares(z);
        Self {
            factorial,
            fibonacci,
            squares,
            total: combine(factorial, fibonacci, squares),
        }
    }
}

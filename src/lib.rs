pub mod accumulator;
pub mod config;
pub mod console;
pub mod error;

pub use accumulator::{compute, factorial_like, fibonacci_like, sum_of_squares, Breakdown};

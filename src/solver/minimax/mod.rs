//! Worst-case partition evaluation

mod calculator;

pub use calculator::calculate_max_remaining;

//! The transform pipeline.
//!
//! Turns a raw, unordered observation sequence into a dense, render-ready
//! table in three stages:
//!
//! 1. [`select_top_n`]: keep the N series with the greatest aggregate count
//!    within a trailing ranking window, zero-filling every selected series on
//!    every date present in the result.
//! 2. [`to_percentage`] (optional): rescale each count to its share of the
//!    per-date total.
//! 3. [`pivot_by_date`]: reshape the flat list into one row per date, sorted
//!    chronologically.
//!
//! Every stage is a pure function from input to output: no shared state, no
//! I/O, identical inputs always produce identical outputs. Ordering is part
//! of each contract — series keep their first-appearance order from the raw
//! input, and pivoted rows are always emitted ascending by date.

mod percentage;
mod pivot;
mod top_n;

pub use percentage::to_percentage;
pub use pivot::{display_order, pivot_by_date};
pub use top_n::{MILLIS_PER_DAY, select_top_n};

//! Terminal output
//!
//! Pure formatters plus colored display functions for command results.

mod display;
pub mod formatters;

pub use display::print_show_result;

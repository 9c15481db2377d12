//! Terminal presentation of command results

mod display;

pub use display::{print_located, print_plan, print_summary};

//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_banner, print_battle_result, print_board, print_train_summary, print_watch_result,
};

//! Terminal display module
//!
//! Prints Markdown practice sets with rich styling when the terminal allows it.

mod formatter;
mod terminal;

pub use formatter::print_markdown;

//! JavaScript printer for the shimkit program graph.

// SourceWriter - indentation-aware output buffer
pub mod source_writer;
pub use source_writer::SourceWriter;

pub mod printer;
pub use printer::{PrintOptions, Printer, print_to_string};

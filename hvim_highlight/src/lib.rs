//! Glue between loaded files and the scanner: reading a source file into memory and answering
//! which token kind covers a given row and column.

pub mod map;
pub mod source;

pub use map::TokenMap;
pub use source::{LoadError, SourceFile};

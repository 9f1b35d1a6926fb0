//! Source locations for the ispc front end.
//!
//! This crate holds the two pieces of file-model data that every compiler
//! phase shares:
//! - [`SourcePos`]: a line/column range inside a named source file
//! - [`split_path`]: resolution of a (possibly relative) source file name
//!   into its directory and base name
//!
//! Nothing here performs I/O. Reading the referenced files is the job of the
//! diagnostic crate's context printer.

mod path;
mod source_pos;

pub use path::{split_path, PathError, SplitPath, PATH_SEPARATOR};
pub use source_pos::SourcePos;

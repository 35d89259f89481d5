//! Corpus Module
//!
//! Turns the raw complete-works text into an ordered list of titled works.
//!
//! ## Workflow
//! 1. **Titles**: The title list is trimmed line by line into a `TitleSet`.
//! 2. **Scan**: The corpus is read line by line. After the licence header, a
//!    line matching a not-yet-seen title opens a new work; the `FINIS` line
//!    closes the last one.
//! 3. **Annotate**: Every body line is stored prefixed with its line number
//!    relative to the start of its work.
//! 4. **Index**: Each finished work gets its own `SuffixIndex`.
//!
//! The resulting `Corpus` is immutable and meant to be shared behind an `Arc`.
//!
//! ## Submodules
//! - **`parser`**: The line scanner and file loader.
//! - **`types`**: `TitleSet`, `Work` and `Corpus`.

pub mod parser;
pub mod types;

pub use types::{Corpus, TitleSet, Work};

//! Complete-Works Search Library
//!
//! Loads a single literary corpus split into titled works and answers
//! substring queries with snippets of surrounding text. It serves as the
//! foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! Data flows one way, from raw text to snippets:
//!
//! - **`corpus`**: Splits the raw text into titled works using the title list,
//!   annotating each line with its number inside the work.
//! - **`index`**: Per-work suffix array answering "all offsets of substring S"
//!   case-insensitively.
//! - **`search`**: Looks up query terms in the selected works, chains nearby hits
//!   into clusters and cuts one snippet per cluster. Also hosts the HTTP handlers.
//! - **`config`**: Port and input paths, read from the environment.
//! - **`error`**: The error kinds shared by loading and searching.

pub mod config;
pub mod corpus;
pub mod error;
pub mod index;
pub mod search;

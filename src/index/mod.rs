//! Work Index Module
//!
//! Case-insensitive substring index built once per work.
//!
//! ## Overview
//! Each work's annotated text is folded to ASCII lowercase and indexed with a
//! suffix array. Lookups binary-search the sorted suffixes, so a query for a
//! needle of length `m` costs `O(m log n)` no matter how often it is repeated.
//!
//! ASCII-only folding keeps every byte offset in the index aligned with the
//! original text, which is what lets the search engine slice snippets out of
//! the un-lowered text using offsets returned here.
//!
//! ## Submodules
//! - **`suffix_array`**: Construction (prefix doubling) and range lookup.

pub mod suffix_array;

pub use suffix_array::SuffixIndex;

#[cfg(test)]
mod tests;

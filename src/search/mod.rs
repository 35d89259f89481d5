//! Search Service Module
//!
//! Answers substring queries over the loaded corpus with context snippets.
//!
//! ## Overview
//! For every selected work (in corpus order) each query term is looked up in
//! the work's suffix index. All hit offsets are pooled and sorted, then chained
//! into clusters: a hit joins the running cluster when it lies within
//! `SNIPPET_SIZE` bytes of the cluster's last hit. Every cluster becomes one
//! snippet spanning `SNIPPET_SIZE` bytes of context on each side.
//!
//! The corpus is read-only, so any number of searches can run at once.
//!
//! ## Submodules
//! - **`engine`**: Lookup, clustering and snippet extraction.
//! - **`handlers`**: HTTP request handlers and router for the Axum web server.
//! - **`tokenizer`**: Query splitting and request parameter parsing.
//! - **`types`**: The `Snippet` result and request DTOs.

pub mod engine;
pub mod handlers;
pub mod tokenizer;
pub mod types;

//! # Pokepager Architecture
//!
//! Pokepager is a **paginated catalog client library** with a terminal UI on top.
//! It maps a page offset onto a bounded, ordered batch of remote records, and
//! keeps the "previous"/"next" affordances consistent with that offset.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders the card grid, reads commands  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pagination Controller (pager.rs)                           │
//! │  - Owns offset, page size, navigation flags                 │
//! │  - reset / advance / retreat / seek                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Batch Fetcher (fetch.rs)                                   │
//! │  - Sequential lookups, failures logged and skipped          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Lookup Layer (lookup/)                                     │
//! │  - Abstract RecordLookup trait                              │
//! │  - HttpLookup (production), InMemoryLookup (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The name index ([`index`]) is loaded once before any of this runs. Failing
//! to load it is the only fatal error; everything downstream degrades into
//! shorter pages instead of failing.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Everything outside `cli/`:
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr (diagnostics go through `tracing`)
//! - **Never** calls `std::process::exit`
//!
//! ## Testing Strategy
//!
//! 1. **Fetcher and pager**: unit tests against `InMemoryLookup`, which records
//!    every call so order and early stop can be asserted.
//! 2. **HTTP and index loading**: unit tests against a local `tiny_http` server.
//! 3. **CLI**: `assert_cmd` tests in `tests/` that drive the binary end to end.
//!
//! ## Module Overview
//!
//! - [`pager`]: Pagination controller and its single-flight shared handle
//! - [`fetch`]: Batch fetcher
//! - [`lookup`]: Lookup abstraction and implementations
//! - [`index`]: Name index sources and loading
//! - [`card`]: Record → card slot layout
//! - [`model`]: Core data types (`NameIndex`, `Record`, `NavState`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod card;
pub mod config;
pub mod error;
pub mod fetch;
pub mod index;
pub mod lookup;
pub mod model;
pub mod pager;

#[cfg(test)]
pub(crate) mod test_utils;

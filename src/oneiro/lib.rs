//! # Oneiro Architecture
//!
//! Oneiro is a **UI-agnostic dream-journal library**. The core is a library
//! first; the CLI binary is just one client of it, and nothing below the CLI
//! layer knows a terminal exists.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation                            │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No terminal I/O assumptions                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine + Storage (journal, query, symbols, export, store/) │
//! │  - Journal<S>: the entry store with injected persistence    │
//! │  - Pure derived views over an explicit snapshot             │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types (`Result<CmdResult>`), never writes to stdout/stderr, and
//! never calls `std::process::exit`. The same core could serve a TUI, a
//! web front end, or any other UI.
//!
//! The derived views (`query::filter`, `query::stats`, `symbols::find_symbols`,
//! `export::render`) are pure functions over an explicit `&[DreamEntry]`
//! snapshot, so they are testable with no storage at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`journal`]: The entry store (ordered, newest-first, write-through)
//! - [`query`]: Filtering and aggregate statistics over a snapshot
//! - [`symbols`]: The dream-symbol dictionary and matcher
//! - [`export`]: Flat-text export rendering
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`DreamEntry`, `Category`, `EntryDraft`)
//! - [`config`]: Persisted theme preference
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod journal;
pub mod model;
pub mod query;
pub mod store;
pub mod symbols;

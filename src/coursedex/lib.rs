//! # Coursedex Architecture
//!
//! Coursedex is a **UI-agnostic course catalog browser**. The library loads a catalog,
//! filters it, and describes what should be shown; the `coursedex` binary is one
//! terminal client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and browse commands, draws frames       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs)                                       │
//! │  - Bootstrap: load, department options, first render        │
//! │  - Controller: CriteriaEvent → filter → render              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (filter.rs, view.rs, surface/)                        │
//! │  - Pure filtering and view-model mapping                    │
//! │  - Surface trait for whatever displays the result           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Sources (store/)                                           │
//! │  - CatalogSource trait                                      │
//! │  - FileSource (production), InMemorySource (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `session.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Output goes through a [`surface::Surface`], so the same session could
//! drive a TUI, a web view, or a test recorder.
//!
//! ## Module Overview
//!
//! - [`model`]: `Course` and `Catalog`
//! - [`store`]: Catalog sources
//! - [`filter`]: Filter criteria and the filter engine
//! - [`view`]: View model for course cards and notices
//! - [`surface`]: Surface trait and the recording surface
//! - [`session`]: Session state machine and input controller
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod session;
pub mod store;
pub mod surface;
pub mod view;

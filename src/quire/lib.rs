//! # Quire Architecture
//!
//! Quire is a **UI-agnostic paginated diary engine**. A diary is an ordered list of
//! fixed-capacity pages; as the writer types, text that no longer fits a page flows
//! onto the next one, and emptied trailing pages fold back when the writer leaves them.
//! The command-line client is one consumer; a browser or GUI front-end would be another.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, initialises logging    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs) and the page engine               │
//! │  - measure / splitter: how much text a page holds           │
//! │  - pagination: page list, overflow forwarding, saves        │
//! │  - turn / drag: page-turn and drag-gesture state machines   │
//! │  - view: wires the above to a clock and a store             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DiaryStore trait                                         │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Time
//!
//! Nothing in the engine sleeps or spawns. Debounced saves and animation
//! completions are values queued on a [`schedule::Scheduler`] with a virtual clock;
//! the host advances it with [`view::DiaryView::tick`]. Tests drive the clock
//! explicitly, which makes every timing rule observable.
//!
//! ## Measurement
//!
//! The engine never renders. Whether text fits a page is answered by a
//! [`measure::Measure`] implementation supplied by the presentation layer;
//! [`measure::MonospaceMeasurer`] is the headless one used by the CLI and tests.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Diary collection operations (create, list, show, write, ...)
//! - [`model`]: `Diary`, `Page`, `Direction`
//! - [`measure`]: Render boxes, measurers and page capacity
//! - [`splitter`]: Splitting text into what fits and what overflows
//! - [`schedule`]: Cancellable delayed tasks on a virtual clock
//! - [`pagination`]: The per-diary pagination controller
//! - [`turn`]: Page-turn state machine
//! - [`drag`]: Edge drag gestures
//! - [`view`]: The diary view that ties the engine together
//! - [`store`]: Storage abstraction and implementations
//! - [`transfer`]: JSON export and import
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod drag;
pub mod error;
pub mod measure;
pub mod model;
pub mod pagination;
pub mod schedule;
pub mod splitter;
pub mod store;
pub mod transfer;
pub mod turn;
pub mod view;

//! # Bookshelf Architecture
//!
//! Bookshelf is a **UI-agnostic book catalog library**. The terminal client in
//! `cli/` is one front-end; the library itself never touches stdout/stderr.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, draws the view, reads the form         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CatalogApi<S>: owns the store and the View               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Flows (commands/*.rs)                                      │
//! │  - load, submit, remove: store mutation, then view refresh  │
//! └─────────────────────────────────────────────────────────────┘
//!                  │                              │
//!                  ▼                              ▼
//! ┌───────────────────────────────┐ ┌───────────────────────────┐
//! │  Storage (store/)             │ │  View (view/)             │
//! │  - DataStore trait            │ │  - rows, banners, form    │
//! │  - SlotStore over a backend   │ │                           │
//! └───────────────────────────────┘ └───────────────────────────┘
//! ```
//!
//! ## Consistency
//!
//! Three representations of the catalog exist: the persisted slot, the rows in
//! the [`view::View`], and whatever a flow holds in memory while it runs. Every
//! flow writes the store first and only then updates the view, so a storage
//! failure never leaves a row that is not stored (or the reverse).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One flow per user action
//! - [`store`]: Storage traits, the JSON slot store and its backends
//! - [`view`]: Rows, banners and the entry form
//! - [`model`]: `Book` and the form `Field`s
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and catalog assembly
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

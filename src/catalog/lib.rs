//! # Catalog Architecture
//!
//! Catalog is a small product-inventory library with a CLI client. Products are
//! added by an operator, validated field by field, and kept in a single JSON file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Argument parsing, interactive shell, terminal output     │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns repository + validator   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, validation.rs)               │
//! │  - Validate, check for duplicates, store                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Repository (repository.rs) + Storage (store/)              │
//! │  - In-memory catalog, full-document JSON snapshots          │
//! │  - FileStorage (production), MemStorage (testing)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Policy
//!
//! Validation and duplicate-id failures are ordinary [`error::CatalogError`] values
//! the UI shows and re-prompts on. I/O failures propagate to the caller untouched.
//! A malformed data file is the exception: it loads as an empty catalog.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Add and list operations
//! - [`validation`]: Per-field validators
//! - [`repository`]: In-memory catalog backed by storage
//! - [`store`]: Storage trait, file and memory implementations, JSON codec
//! - [`model`]: `Product` and its persisted record
//! - [`config`]: Limits and data-file location
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod repository;
pub mod store;
pub mod validation;

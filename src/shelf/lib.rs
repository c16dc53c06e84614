//! # Shelf Architecture
//!
//! Shelf is a personal book catalog behind a minimal login gate. The library
//! holds all of the state and rules; the `shelf` binary is a thin interactive
//! client over it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menus, prompts, input validation, console output         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Stores (credentials.rs, catalog.rs)                        │
//! │  - CredentialStore: register / login                        │
//! │  - CatalogStore: add / list / search                        │
//! │  - Each owns one in-memory collection, written through      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait                                     │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Stores take plain arguments and return plain Rust values. Domain
//! outcomes (a taken username, a wrong password) are `bool`s; only storage
//! failures are errors. Nothing below the CLI layer prints or exits.
//!
//! ## Module Overview
//!
//! - [`credentials`]: The credential store
//! - [`catalog`]: The book catalog store
//! - [`password`]: Password digest
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`User`, `Book`)
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and store setup
//! - [`error`]: Error types

pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod init;
pub mod model;
pub mod password;
pub mod store;

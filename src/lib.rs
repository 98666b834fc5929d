//! # Dicebox - a small GraphQL server for messages, dice and daily quotes
//!
//! Dicebox serves a fixed GraphQL schema over HTTP: quotes and songs of the
//! day, random numbers, dice with configurable sides, and a message board
//! kept in memory.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on localhost:4000/graphql
//! dicebox serve
//!
//! # Run a one-off query without a server
//! dicebox query '{ random getDie { rollOnce } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and HTTP wiring
//! - [`model`]: Entity types (`Message`, `RandomDie`)
//! - [`random`]: Injectable random sources
//! - [`resolver`]: Root query and mutation resolvers
//! - [`storage`]: In-memory message store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.dicebox.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `DiceboxError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server around it.
pub mod graphql;

pub mod logging;

/// Data models for dicebox.
pub mod model;

pub mod random;

/// Root resolvers behind the GraphQL `Query` and `Mutation` types.
pub mod resolver;

/// In-memory message storage.
pub mod storage;

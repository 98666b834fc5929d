//! GraphQL schema and resolvers for dicebox.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! dicebox serve --port 4000
//!
//! # Execute a query from CLI
//! dicebox query '{ quoteOfTheDay getDie(numSides: 6) { rollOnce roll(numRolls: 3) } }'
//!
//! # Execute a mutation from CLI
//! dicebox mutate 'createMessage(input: { author: "andy", content: "hope is a good thing" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `quoteOfTheDay`, `songOfTheDay`, `random`, `getDie`, `getMessage`
//! - **Mutations**: `createMessage`, `update`

mod schema;
mod server;
mod types;

pub use schema::{
    DiceboxSchema, MutationRoot, QueryRoot, build_schema, build_schema_from_config, schema_sdl,
};
pub use server::{router, run_server, serve};
pub use types::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dicebox")]
#[command(
    author,
    version,
    about = "A small GraphQL server for messages, dice rolls and daily quotes"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .dicebox.yml by default)
    #[arg(long, global = true, env = "DICEBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed the random source for reproducible rolls and quotes
    #[arg(long, global = true, env = "DICEBOX_SEED")]
    pub seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "DICEBOX_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .dicebox.yml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "DICEBOX_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "DICEBOX_PORT")]
        port: Option<u16>,

        /// Route for GraphQL requests
        #[arg(long)]
        path: Option<String>,

        /// Do not serve the GraphiQL page on GET
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a fresh in-memory store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (bare bodies are wrapped in 'mutation { }')
    Mutate {
        /// Mutation body, or a full 'mutation Name($var: Type) { ... }' document
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema in SDL form
    Schema,
}

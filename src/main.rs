use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use dicebox::cli::handlers::{self, CommandContext};
use dicebox::cli::{Cli, Commands};
use dicebox::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.log_file.clone());

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init { force } => handlers::handle_init(force),
        Commands::Schema => handlers::handle_schema(),
        Commands::Serve {
            host,
            port,
            path,
            no_graphiql,
        } => handlers::handle_serve(
            load_context(config, cli.seed)?,
            host,
            port,
            path,
            no_graphiql,
        ),
        Commands::Query { query, variables } => {
            handlers::handle_query(load_context(config, cli.seed)?, query, variables)
        }
        Commands::Mutate {
            mutation,
            variables,
        } => handlers::handle_mutate(load_context(config, cli.seed)?, mutation, variables),
    }
}

fn load_context(config: Option<&Path>, seed: Option<u64>) -> Result<CommandContext> {
    let cwd = std::env::current_dir()?;
    let ctx = CommandContext::load(config, &cwd, seed)
        .context("Failed to load dicebox configuration")?;
    if let Some(ref path) = ctx.config_path {
        tracing::debug!(config = %path.display(), "Loaded configuration");
    }
    Ok(ctx)
}

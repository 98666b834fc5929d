use crate::graphql::{build_schema_from_config, run_server};
use anyhow::{Context, Result};

use super::CommandContext;

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    no_graphiql: bool,
) -> Result<()> {
    let settings = &mut ctx.config.server;
    if let Some(h) = host {
        settings.host = h;
    }
    if let Some(p) = port {
        settings.port = p;
    }
    if let Some(p) = path {
        settings.path = p;
    }
    if no_graphiql {
        settings.graphiql = false;
    }
    ctx.config.validate()?;

    let schema = build_schema_from_config(&ctx.config);
    let settings = &ctx.config.server;

    println!(
        "Running a GraphQL API server at http://{}:{}{}",
        settings.host, settings.port, settings.path
    );

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, settings).await })
        .context("GraphQL server failed")?;
    Ok(())
}

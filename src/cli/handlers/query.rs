use crate::graphql::{DiceboxSchema, build_schema_from_config};
use anyhow::Result;

use super::CommandContext;

/// Run one request against `schema` with optional JSON variables.
pub fn execute(
    schema: &DiceboxSchema,
    query: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let vars: async_graphql::Variables = if let Some(v) = variables {
        serde_json::from_str(&v)?
    } else {
        async_graphql::Variables::default()
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    if response.is_err() {
        tracing::debug!(errors = response.errors.len(), "Request completed with errors");
    }
    Ok(response)
}

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let schema = build_schema_from_config(&ctx.config);
    let response = execute(&schema, &query, variables)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

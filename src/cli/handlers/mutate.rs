use crate::graphql::build_schema_from_config;
use anyhow::Result;

use super::{CommandContext, execute};

/// Wrap a bare mutation body in `mutation { }`. Complete documents, which can
/// declare variables, pass through untouched.
fn mutation_document(mutation: &str) -> String {
    let trimmed = mutation.trim_start();
    let is_document = trimmed
        .strip_prefix("mutation")
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace() || c == '(' || c == '{'));

    if is_document {
        mutation.to_string()
    } else {
        format!("mutation {{ {} }}", mutation)
    }
}

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema_from_config(&ctx.config);

    let query = mutation_document(&mutation);
    let response = execute(&schema, &query, variables)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

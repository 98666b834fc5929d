use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::post,
};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::DiceboxSchema;
use crate::config::ServerSettings;
use crate::error::Result;

#[derive(Clone)]
struct ServerState {
    schema: DiceboxSchema,
    endpoint: Arc<str>,
}

/// Build the HTTP router: POST executes, GET serves GraphiQL when enabled.
pub fn router(schema: DiceboxSchema, settings: &ServerSettings) -> Router {
    let mut route = post(graphql_handler);
    if settings.graphiql {
        route = route.get(graphiql_handler);
    }

    let state = ServerState {
        schema,
        endpoint: Arc::from(settings.path.as_str()),
    };

    Router::new().route(&settings.path, route).with_state(state)
}

/// Bind the configured address and serve until the process exits.
pub async fn run_server(schema: DiceboxSchema, settings: &ServerSettings) -> Result<()> {
    let addr = settings.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    serve(listener, schema, settings).await
}

/// Serve on an already bound listener.
pub async fn serve(
    listener: TcpListener,
    schema: DiceboxSchema,
    settings: &ServerSettings,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        path = %settings.path,
        graphiql = settings.graphiql,
        "GraphQL server listening"
    );

    axum::serve(listener, router(schema, settings)).await?;
    Ok(())
}

async fn graphql_handler(
    State(state): State<ServerState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql_handler(State(state): State<ServerState>) -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(&state.endpoint).finish())
}

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ErrorExtensions, ID, Object, Schema};

use crate::config::DiceboxConfig;
use crate::error::Result;
use crate::random::{self, RandomSource};
use crate::resolver::{MutationResolver, QueryResolver, RootResolver};
use crate::storage::MemoryStore;

use super::types::*;

pub type DiceboxSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(resolver: RootResolver) -> DiceboxSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(resolver)
        .finish()
}

/// Schema backed by a fresh in-memory store and the configured random source.
pub fn build_schema_from_config(config: &DiceboxConfig) -> DiceboxSchema {
    let rng: Arc<dyn RandomSource> = random::from_seed(config.random.seed);
    let store = Arc::new(MemoryStore::new(Arc::clone(&rng)));
    build_schema(RootResolver::new(store, rng))
}

/// SDL text of the schema, as served to clients.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn get_resolver<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a RootResolver> {
    ctx.data::<RootResolver>()
}

// Resolver failures become entries in the response's `errors` list, tagged with a `code`.
pub(super) fn field_result<T>(field: &str, result: Result<T>) -> async_graphql::Result<T> {
    result.map_err(|e| {
        tracing::warn!(field, error = %e, "Resolver failed");
        e.extend()
    })
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn quote_of_the_day(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        Ok(Some(get_resolver(ctx)?.quote_of_the_day()))
    }

    async fn song_of_the_day(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        Ok(Some(get_resolver(ctx)?.song_of_the_day()))
    }

    /// Uniform float in [0, 1)
    async fn random(&self, ctx: &Context<'_>) -> async_graphql::Result<f64> {
        Ok(get_resolver(ctx)?.random())
    }

    /// A die with `numSides` sides, or 6 when omitted or zero
    async fn get_die(
        &self,
        ctx: &Context<'_>,
        num_sides: Option<i32>,
    ) -> async_graphql::Result<Option<RandomDie>> {
        let die = field_result("getDie", get_resolver(ctx)?.get_die(num_sides))?;
        Ok(Some(die.into()))
    }

    async fn get_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Message>> {
        let message = field_result("getMessage", get_resolver(ctx)?.get_message(&id))?;
        Ok(Some(message.into()))
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_message(
        &self,
        ctx: &Context<'_>,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<Option<Message>> {
        let resolver = get_resolver(ctx)?;
        let message = field_result(
            "createMessage",
            resolver.create_message(input.map(Into::into)),
        )?;
        Ok(Some(message.into()))
    }

    /// Replace a message's content and author entirely
    #[graphql(name = "update")]
    async fn update_message(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: Option<MessageInput>,
    ) -> async_graphql::Result<Option<Message>> {
        let resolver = get_resolver(ctx)?;
        let message = field_result("update", resolver.update_message(&id, input.map(Into::into)))?;
        Ok(Some(message.into()))
    }
}

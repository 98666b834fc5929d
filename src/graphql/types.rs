use crate::model::{self, Message as ModelMessage, MessageRecord};
use crate::resolver::RootResolver;
use async_graphql::{Context, ID, InputObject, Object, SimpleObject};

use super::schema::field_result;

#[derive(SimpleObject, Clone)]
pub struct Message {
    pub id: ID,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<ModelMessage> for Message {
    fn from(m: ModelMessage) -> Self {
        Self {
            id: ID(m.id),
            content: m.content,
            author: m.author,
        }
    }
}

#[derive(InputObject, Clone, Default)]
pub struct MessageInput {
    pub content: Option<String>,
    pub author: Option<String>,
}

impl From<MessageInput> for MessageRecord {
    fn from(input: MessageInput) -> Self {
        MessageRecord::new(input.content, input.author)
    }
}

pub struct RandomDie(pub model::RandomDie);

impl From<model::RandomDie> for RandomDie {
    fn from(die: model::RandomDie) -> Self {
        Self(die)
    }
}

#[Object]
impl RandomDie {
    async fn num_sides(&self) -> i32 {
        self.0.num_sides()
    }

    /// A single roll between 1 and `numSides`
    async fn roll_once(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let resolver = ctx.data::<RootResolver>()?;
        Ok(self.0.roll_once(resolver.rng()))
    }

    /// `numRolls` independent rolls; zero or negative gives an empty list,
    /// more than 10000 is an error
    async fn roll(
        &self,
        ctx: &Context<'_>,
        num_rolls: i32,
    ) -> async_graphql::Result<Option<Vec<Option<i32>>>> {
        let resolver = ctx.data::<RootResolver>()?;
        let rolls = field_result("roll", self.0.roll(resolver.rng(), num_rolls))?;
        Ok(Some(rolls.into_iter().map(Some).collect()))
    }
}

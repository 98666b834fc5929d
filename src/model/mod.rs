//! Data models for dicebox.
//!
//! - [`MessageRecord`]: the raw `{content, author}` pair held by the store
//! - [`Message`]: a stored record paired with its identifier
//! - [`RandomDie`]: an ephemeral die constructed per query

mod die;
mod message;

pub use die::{DEFAULT_SIDES, MAX_ROLLS, RandomDie};
pub use message::{Message, MessageRecord};

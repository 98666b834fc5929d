//! Root resolvers for the `Query` and `Mutation` types.
//!
//! The GraphQL layer only translates arguments and results; every field's
//! behavior lives here behind two traits, one per root operation type.

use std::sync::Arc;

use crate::{
    error::Result,
    model::{Message, MessageRecord, RandomDie},
    random::RandomSource,
    storage::MessageStore,
};

pub const QUOTES: [&str; 2] = ["Take it easy", "Salvation lies within"];
pub const SONGS: [&str; 2] = ["Giovanni", "Stellar"];

pub trait QueryResolver {
    fn quote_of_the_day(&self) -> String;
    fn song_of_the_day(&self) -> String;
    fn random(&self) -> f64;
    fn get_die(&self, num_sides: Option<i32>) -> Result<RandomDie>;
    fn get_message(&self, id: &str) -> Result<Message>;
}

pub trait MutationResolver {
    fn create_message(&self, input: Option<MessageRecord>) -> Result<Message>;
    fn update_message(&self, id: &str, input: Option<MessageRecord>) -> Result<Message>;
}

/// Resolver set with its store and random source injected at construction.
#[derive(Clone)]
pub struct RootResolver {
    store: Arc<dyn MessageStore>,
    rng: Arc<dyn RandomSource>,
}

impl RootResolver {
    pub fn new(store: Arc<dyn MessageStore>, rng: Arc<dyn RandomSource>) -> Self {
        Self { store, rng }
    }

    pub fn rng(&self) -> &dyn RandomSource {
        self.rng.as_ref()
    }

    pub fn store(&self) -> &dyn MessageStore {
        self.store.as_ref()
    }

    fn coin_flip<'a>(&self, pair: &[&'a str; 2]) -> &'a str {
        if self.rng.next_f64() < 0.5 {
            pair[0]
        } else {
            pair[1]
        }
    }
}

impl QueryResolver for RootResolver {
    fn quote_of_the_day(&self) -> String {
        self.coin_flip(&QUOTES).to_string()
    }

    fn song_of_the_day(&self) -> String {
        self.coin_flip(&SONGS).to_string()
    }

    fn random(&self) -> f64 {
        self.rng.next_f64()
    }

    fn get_die(&self, num_sides: Option<i32>) -> Result<RandomDie> {
        RandomDie::new(num_sides)
    }

    fn get_message(&self, id: &str) -> Result<Message> {
        let record = self.store.get(id)?;
        Ok(Message::new(id.to_string(), record))
    }
}

impl MutationResolver for RootResolver {
    fn create_message(&self, input: Option<MessageRecord>) -> Result<Message> {
        let record = input.unwrap_or_default();
        let id = self.store.create(record.clone())?;
        Ok(Message::new(id, record))
    }

    /// Full replace: fields missing from `input` become absent.
    fn update_message(&self, id: &str, input: Option<MessageRecord>) -> Result<Message> {
        let record = self.store.replace(id, input.unwrap_or_default())?;
        Ok(Message::new(id.to_string(), record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiceboxError;
    use crate::random::SeededRandom;
    use crate::storage::MemoryStore;

    fn resolver(seed: u64) -> RootResolver {
        let rng: Arc<dyn RandomSource> = Arc::new(SeededRandom::new(seed));
        let store = Arc::new(MemoryStore::new(Arc::clone(&rng)));
        RootResolver::new(store, rng)
    }

    #[test]
    fn test_quotes_and_songs_come_from_fixed_pairs() {
        let r = resolver(3);
        for _ in 0..50 {
            assert!(QUOTES.contains(&r.quote_of_the_day().as_str()));
            assert!(SONGS.contains(&r.song_of_the_day().as_str()));
        }
    }

    #[test]
    fn test_quote_hits_both_options() {
        let r = resolver(11);
        let seen: std::collections::HashSet<String> =
            (0..200).map(|_| r.quote_of_the_day()).collect();
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_random_in_unit_interval() {
        let r = resolver(5);
        for _ in 0..1_000 {
            let x = r.random();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_create_then_get_roundtrip() {
        let r = resolver(1);
        let input = MessageRecord::default()
            .with_content("hope is a good thing")
            .with_author("andy");
        let created = r.create_message(Some(input.clone())).unwrap();
        let fetched = r.get_message(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.content, input.content);
        assert_eq!(fetched.author, input.author);
    }

    #[test]
    fn test_create_without_input_stores_empty_record() {
        let r = resolver(1);
        let created = r.create_message(None).unwrap();
        assert_eq!(created.content, None);
        assert_eq!(created.author, None);
        assert!(r.get_message(&created.id).is_ok());
    }

    #[test]
    fn test_get_unknown_message() {
        let r = resolver(1);
        let err = r.get_message("deadbeef").unwrap_err();
        assert!(matches!(err, DiceboxError::NotFound(_)));
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let r = resolver(2);
        let created = r
            .create_message(Some(
                MessageRecord::default().with_content("old").with_author("andy"),
            ))
            .unwrap();

        let updated = r
            .update_message(&created.id, Some(MessageRecord::default().with_content("new")))
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.content.as_deref(), Some("new"));
        assert_eq!(updated.author, None);

        let fetched = r.get_message(&created.id).unwrap();
        assert_eq!(fetched, updated);
    }

    #[test]
    fn test_update_without_input_clears_fields() {
        let r = resolver(2);
        let created = r
            .create_message(Some(
                MessageRecord::default().with_content("old").with_author("andy"),
            ))
            .unwrap();

        let updated = r.update_message(&created.id, None).unwrap();
        assert_eq!(updated.content, None);
        assert_eq!(updated.author, None);
        assert_eq!(r.store().get(&created.id).unwrap(), MessageRecord::default());
    }

    #[test]
    fn test_update_unknown_message_does_not_insert() {
        let r = resolver(2);
        let err = r
            .update_message("missing", Some(MessageRecord::default().with_content("x")))
            .unwrap_err();
        assert!(matches!(err, DiceboxError::NotFound(_)));
        assert!(r.store().is_empty());
    }

    #[test]
    fn test_get_die_defaults() {
        let r = resolver(4);
        assert_eq!(r.get_die(None).unwrap().num_sides(), 6);
        assert_eq!(r.get_die(Some(0)).unwrap().num_sides(), 6);
        assert_eq!(r.get_die(Some(10)).unwrap().num_sides(), 10);
        assert!(r.get_die(Some(-1)).is_err());
    }
}

//! Message storage for dicebox.
//!
//! Messages live in memory only; nothing is written to disk. The resolver
//! talks to storage through the [`MessageStore`] trait so tests can supply
//! their own implementation.
//!
//! ## Components
//!
//! - [`MessageStore`]: keyed access to message records
//! - [`MemoryStore`]: lock-guarded `HashMap` implementation
//! - [`generate_id`]: 20-character hex identifiers

mod memory_store;

pub use memory_store::{ID_BYTES, MemoryStore, generate_id};

use crate::error::Result;
use crate::model::MessageRecord;

pub trait MessageStore: Send + Sync {
    /// Fetch a record, failing with `NotFound` when the id was never stored.
    fn get(&self, id: &str) -> Result<MessageRecord>;

    /// Unconditional insert or overwrite.
    fn put(&self, id: &str, record: MessageRecord);

    fn delete(&self, id: &str) -> Option<MessageRecord>;

    /// Generate a fresh id and insert `record` under it in one step.
    fn create(&self, record: MessageRecord) -> Result<String>;

    /// Overwrite an existing record in one step. Absent ids fail with
    /// `NotFound` and leave the store unchanged.
    fn replace(&self, id: &str, record: MessageRecord) -> Result<MessageRecord>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

use serde::{Deserialize, Serialize};

/// Message content as stored, without its identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl MessageRecord {
    pub fn new(content: Option<String>, author: Option<String>) -> Self {
        Self { content, author }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A detached view of a stored message. Changing it never touches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: Option<String>,
    pub author: Option<String>,
}

impl Message {
    pub fn new(id: String, record: MessageRecord) -> Self {
        Self {
            id,
            content: record.content,
            author: record.author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_copies_record_fields() {
        let record = MessageRecord::default()
            .with_content("hope is a good thing")
            .with_author("andy");
        let message = Message::new("abc".to_string(), record.clone());

        assert_eq!(message.id, "abc");
        assert_eq!(message.content, record.content);
        assert_eq!(message.author, record.author);
    }

    #[test]
    fn test_record_serializes_without_absent_fields() {
        let record = MessageRecord::default().with_author("andy");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"author":"andy"}"#);
    }
}

use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiceboxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No message exists with id: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid listen address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl DiceboxError {
    /// Machine-readable code attached to GraphQL error extensions.
    pub fn code(&self) -> &'static str {
        match self {
            DiceboxError::NotFound(_) => "NOT_FOUND",
            DiceboxError::InvalidArgument(_) => "INVALID_ARGUMENT",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for DiceboxError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, DiceboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = DiceboxError::NotFound("abc".to_string());
        assert_eq!(err.to_string(), "No message exists with id: abc");
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn test_graphql_error_carries_code() {
        let err = DiceboxError::InvalidArgument("numSides must be positive".to_string()).extend();
        assert!(err.message.contains("numSides must be positive"));
        let ext = err.extensions.expect("extensions set");
        assert_eq!(
            ext.get("code"),
            Some(&async_graphql::Value::from("INVALID_ARGUMENT"))
        );
    }

    #[test]
    fn test_internal_errors_use_generic_code() {
        let err = DiceboxError::Config("bad".to_string()).extend();
        let ext = err.extensions.expect("extensions set");
        assert_eq!(ext.get("code"), Some(&async_graphql::Value::from("INTERNAL")));
    }
}

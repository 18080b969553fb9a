use thiserror::Error;

#[derive(Debug, Error)]
pub enum StarterError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("database error: {0}")]
    Database(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, StarterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_message() {
        let err = StarterError::Config("x".to_string());
        assert!(format!("{err}").contains("configuration error"));

        let err = StarterError::Validation("Missing required arguments".to_string());
        assert_eq!(
            err.to_string(),
            "validation error: Missing required arguments"
        );
    }
}

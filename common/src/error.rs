//! Error type definitions

use thiserror::Error;

/// Shared error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),

    /// Local presence checks; the message is shown to the user as-is.
    #[error("{0}")]
    Validation(String),

    /// Backend rejection or fetch failure; carries the backend `error`
    /// message when one was returned.
    #[error("{0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_config() {
        let error = Error::Config("mount region missing".to_string());
        assert_eq!(format!("{}", error), "Config error: mount region missing");
    }

    #[test]
    fn test_error_display_validation_is_bare_message() {
        // Validation messages go straight into a user alert.
        let error = Error::Validation("Please select at least one image.".to_string());
        assert_eq!(format!("{}", error), "Please select at least one image.");
    }

    #[test]
    fn test_error_display_api_is_bare_message() {
        let error = Error::Api("Invalid email or password".to_string());
        assert_eq!(format!("{}", error), "Invalid email or password");
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Parse("bad payload".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Parse"));
        assert!(debug.contains("bad payload"));
    }
}

use thiserror::Error;

/// Application-level errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Groq error: {0}")]
    Groq(#[from] GroqError),

    #[error("Document service error: {0}")]
    Docs(#[from] DocsError),
}

/// Groq API errors
#[derive(Debug, Error)]
pub enum GroqError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Document storage service errors
#[derive(Debug, Error)]
pub enum DocsError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for Groq operations
pub type GroqResult<T> = Result<T, GroqError>;

/// Result type alias for document storage operations
pub type DocsResult<T> = Result<T, DocsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Config {
            message: "GROQ_API_KEY is required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Configuration error: GROQ_API_KEY is required"
        );
    }

    #[test]
    fn test_groq_error_display() {
        let err = GroqError::Api {
            status: 401,
            message: "unauthorized".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 401 - unauthorized");

        let err = GroqError::InvalidResponse {
            message: "malformed JSON".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid response: malformed JSON");

        let err = GroqError::Timeout { timeout_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
    }

    #[test]
    fn test_docs_error_display() {
        let err = DocsError::Api {
            status: 404,
            message: "document not found".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 404 - document not found");

        let err = DocsError::Timeout { timeout_ms: 30000 };
        assert_eq!(err.to_string(), "Request timeout after 30000ms");
    }

    #[test]
    fn test_groq_error_conversion_to_app_error() {
        let groq_err = GroqError::Timeout { timeout_ms: 1000 };
        let app_err: AppError = groq_err.into();
        assert!(matches!(app_err, AppError::Groq(_)));
    }

    #[test]
    fn test_docs_error_conversion_to_app_error() {
        let docs_err = DocsError::Api {
            status: 500,
            message: "server error".to_string(),
        };
        let app_err: AppError = docs_err.into();
        assert!(matches!(app_err, AppError::Docs(_)));
        assert!(app_err.to_string().contains("500"));
    }
}

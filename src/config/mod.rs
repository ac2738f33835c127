use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub groq: GroqConfig,
    pub docs: DocsConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// Groq API configuration
#[derive(Debug, Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Document storage service configuration
#[derive(Debug, Clone)]
pub struct DocsConfig {
    pub access_token: String,
    pub base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let groq = GroqConfig {
            api_key: env::var("GROQ_API_KEY").map_err(|_| AppError::Config {
                message: "GROQ_API_KEY is required".to_string(),
            })?,
            base_url: env::var("GROQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.groq.com/openai".to_string()),
            model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
        };

        let docs = DocsConfig {
            access_token: env::var("DOCS_ACCESS_TOKEN").map_err(|_| AppError::Config {
                message: "DOCS_ACCESS_TOKEN is required".to_string(),
            })?,
            base_url: env::var("DOCS_BASE_URL")
                .unwrap_or_else(|_| "https://docs.googleapis.com".to_string()),
        };

        let logging = LoggingConfig {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: match env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .to_lowercase()
                .as_str()
            {
                "json" => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        };

        let request = RequestConfig {
            timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30000),
        };

        Ok(Config {
            groq,
            docs,
            logging,
            request,
        })
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self { timeout_ms: 30000 }
    }
}

//! # Writing Coach
//!
//! Clarity analysis for cloud documents: fetches a document's text from a
//! document storage service, asks the Groq chat-completions API for
//! structured writing feedback, computes local text statistics, and writes
//! edited text back to the source document.
//!
//! ## Architecture
//!
//! ```text
//! CLI → Analyzer   → Groq chat completions (HTTP)
//!     → DocsClient → document storage service (HTTP)
//! ```
//!
//! The completion service offers no guaranteed structured-output mode, so
//! the analysis contract is string-based: the prompt mandates a fixed
//! line-oriented reply format and the parser reads it back with safe
//! defaults, never failing on a malformed reply.
//!
//! ## Example
//!
//! ```ignore
//! use writing_coach::{Analyzer, Config, DocsClient, GroqClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let groq = GroqClient::new(&config.groq, config.request.clone())?;
//!     let docs = DocsClient::new(&config.docs, config.request.clone())?;
//!     let analyzer = Analyzer::new(groq, config.groq.model.clone());
//!
//!     let text = docs.fetch_text("my-doc-id").await?;
//!     let analysis = analyzer.analyze(&text, "Business", 7).await?;
//!     println!("clarity: {}/10", analysis.clarity_score);
//!
//!     docs.replace_text("my-doc-id", &text).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Document analysis contract: prompt the model and parse its reply.
pub mod analysis;
/// Local text statistics (word counts, sentence lengths, overused words).
pub mod analytics;
/// Configuration management.
pub mod config;
/// Document storage client and content-tree types.
pub mod docs;
/// Error types and result aliases for the application.
pub mod error;
/// Groq chat-completions client and wire types.
pub mod groq;
/// Prompt construction for the analysis contract.
pub mod prompts;

pub use analysis::{AnalysisResult, Analyzer};
pub use config::Config;
pub use docs::DocsClient;
pub use error::{AppError, AppResult};
pub use groq::GroqClient;

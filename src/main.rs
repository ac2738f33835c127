use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use writing_coach::{
    analysis::Analyzer,
    analytics,
    config::Config,
    docs::DocsClient,
    groq::GroqClient,
};

#[derive(Parser)]
#[command(
    name = "writing-coach",
    version,
    about = "Clarity analysis for cloud documents"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a document and print its plain text
    Fetch {
        /// Document ID (the long string between /d/ and /edit in the URL)
        doc_id: String,
    },
    /// Fetch a document and print the model's clarity analysis
    Analyze {
        /// Document ID
        doc_id: String,
        /// Writing style the feedback should target
        #[arg(long, default_value = "General")]
        style: String,
        /// Target clarity score, 1-10
        #[arg(long, default_value_t = 7)]
        target: u8,
        /// Print the verbatim model reply after the parsed fields
        #[arg(long)]
        raw: bool,
    },
    /// Replace a document's body with the contents of a file
    Replace {
        /// Document ID
        doc_id: String,
        /// File holding the replacement text
        #[arg(long)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config);

    let docs = DocsClient::new(&config.docs, config.request.clone())?;

    match cli.command {
        Command::Fetch { doc_id } => {
            let text = docs.fetch_text(&doc_id).await?;
            info!(doc_id = %doc_id, words = analytics::word_count(&text), "Document fetched");
            println!("{}", text);
        }
        Command::Analyze {
            doc_id,
            style,
            target,
            raw,
        } => {
            let groq = GroqClient::new(&config.groq, config.request.clone())?;
            let analyzer = Analyzer::new(groq, config.groq.model.clone());

            let text = docs.fetch_text(&doc_id).await?;
            info!(doc_id = %doc_id, words = analytics::word_count(&text), "Document fetched");

            let analysis = analyzer.analyze(&text, &style, target).await?;

            println!("Clarity score: {}/10 (target {})", analysis.clarity_score, target);
            println!("Tone: {}", analysis.tone);
            for (i, suggestion) in analysis.suggestions.iter().enumerate() {
                println!("Suggestion {}: {}", i + 1, suggestion);
            }

            println!();
            println!("Words: {}", analytics::word_count(&text));
            println!(
                "Average sentence length: {:.1} words",
                analytics::average_sentence_length(&text)
            );
            let overused = analytics::overused_words(&text, 8);
            if !overused.is_empty() {
                let listed: Vec<String> = overused
                    .iter()
                    .map(|(word, count)| format!("{} ({})", word, count))
                    .collect();
                println!("Overused words: {}", listed.join(", "));
            }

            if raw {
                println!();
                println!("--- raw model reply ---");
                println!("{}", analysis.raw);
            }
        }
        Command::Replace { doc_id, file } => {
            let new_text = std::fs::read_to_string(&file)?;
            docs.replace_text(&doc_id, &new_text).await?;
            info!(
                doc_id = %doc_id,
                words = analytics::word_count(&new_text),
                "Document saved"
            );
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format {
        writing_coach::config::LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        writing_coach::config::LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::models::InterviewType;

#[derive(Parser)]
#[command(name = "interview-rag")]
#[command(about = "Answer interview questions from a professional profile with an LLM-enhanced RAG pipeline")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a TOML config file (default: config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Host to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Disable CORS
        #[arg(long)]
        no_cors: bool,
    },
    /// Answer a question with the enhanced pipeline
    Ask {
        /// Interview question
        question: String,
        /// Fail instead of falling back to basic retrieval
        #[arg(long)]
        no_fallback: bool,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Plain retrieval without LLM enhancement
    Basic {
        /// Interview question
        question: String,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Run basic and enhanced pipelines side by side
    Compare {
        /// Interview question
        question: String,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Answer with interview context (type, company, requirements)
    Contextual {
        /// Interview question
        question: String,
        /// Interview type (technical, behavioral, executive, general)
        #[arg(short = 't', long = "type", default_value = "general")]
        interview_type: InterviewType,
        /// Company description
        #[arg(long)]
        company: Option<String>,
        /// Job requirement (repeatable)
        #[arg(short, long = "requirement")]
        requirements: Vec<String>,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Answer with a scenario preset choosing models and style
    Preset {
        /// Interview question
        question: String,
        /// Preset key (technical, behavioral, executive, general)
        #[arg(short, long, default_value = "general")]
        preset: String,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// Retrieve profile snippets without calling the model
    Search {
        /// Search query
        query: String,
        /// Maximum number of results (default: enhanced top_k)
        #[arg(short, long)]
        limit: Option<usize>,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },
    /// List interview presets
    Presets,
    /// Show current configuration
    Config,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_contextual() {
        let cli = Cli::parse_from([
            "interview-rag",
            "contextual",
            "Why this team?",
            "--type",
            "behavioral",
            "--company",
            "Acme",
            "-r",
            "Rust",
            "-r",
            "Leadership",
        ]);

        match cli.command {
            Commands::Contextual {
                question,
                interview_type,
                company,
                requirements,
                json,
            } => {
                assert_eq!(question, "Why this team?");
                assert_eq!(interview_type, InterviewType::Behavioral);
                assert_eq!(company.as_deref(), Some("Acme"));
                assert_eq!(requirements, vec!["Rust", "Leadership"]);
                assert!(!json);
            }
            _ => panic!("expected contextual command"),
        }
    }

    #[test]
    fn test_rejects_unknown_interview_type() {
        let result = Cli::try_parse_from(["interview-rag", "contextual", "Q", "--type", "panel"]);
        assert!(result.is_err());
    }
}

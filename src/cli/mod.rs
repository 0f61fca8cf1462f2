// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, builds the RagConfig, and hands off to the service.
// All retrieval logic lives in Layers 2–5.
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{AskArgs, Commands, ConfigArgs, GlobalArgs};

use crate::application::{config::RagConfig, rag_service::RagService};
use crate::infra::config_store::ConfigStore;

/// Questions run by `demo`
const DEMO_QUESTIONS: &[&str] = &[
    "What is Python?",
    "How do I install Python?",
    "What are variables in Python?",
    "How do I create a function in Python?",
];

#[derive(Parser, Debug)]
#[command(
    name = "book-rag",
    version,
    about = "Answer questions from a book split into chapter text files."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let config = self.resolve_config()?;

        match self.command {
            Commands::Ask(args)    => run_ask(config, args),
            Commands::Chapters     => run_chapters(config),
            Commands::Demo         => run_demo(config),
            Commands::Config(args) => run_config(config, args),
        }
    }

    /// Defaults ← config file ← command-line flags
    fn resolve_config(&self) -> Result<RagConfig> {
        let mut config = match &self.global.config {
            Some(path) => ConfigStore::new(path).load()?,
            None => RagConfig::default(),
        };

        if let Some(dir) = &self.global.chapters_dir {
            config.chapters_dir = dir.clone();
        }
        Ok(config)
    }
}

/// Build and initialize the service; a failed load is reported,
/// not fatal, so `ask` still prints the not-initialized reply.
fn start_service(config: RagConfig) -> Result<RagService> {
    let dir     = config.chapters_dir.clone();
    let mut rag = RagService::new(config)?;

    if rag.initialize() {
        tracing::info!("Simple RAG system initialized from '{}'", dir);
    } else {
        tracing::warn!("RAG system not available, no chapters in '{}'", dir);
    }
    Ok(rag)
}

fn run_ask(mut config: RagConfig, args: AskArgs) -> Result<()> {
    if let Some(k) = args.top_k {
        config.top_k = k;
    }

    let rag = start_service(config)?;

    if args.json {
        let answer = rag.respond(&args.question);
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{}", rag.query(&args.question));
    }
    Ok(())
}

fn run_chapters(config: RagConfig) -> Result<()> {
    let rag = start_service(config)?;
    if !rag.is_ready() {
        bail!("No chapters found in '{}'", rag.config().chapters_dir);
    }

    for doc in rag.corpus() {
        println!("{:<24} {}", doc.id, doc.title);
    }
    Ok(())
}

fn run_demo(config: RagConfig) -> Result<()> {
    let rag = start_service(config)?;
    if !rag.is_ready() {
        bail!("Failed to initialize RAG system");
    }

    for (i, question) in DEMO_QUESTIONS.iter().enumerate() {
        println!("\n❓ Query {}: {}", i + 1, question);
        println!("💡 Answer: {}", rag.query(question));
    }
    Ok(())
}

fn run_config(config: RagConfig, args: ConfigArgs) -> Result<()> {
    if let Some(path) = args.write {
        ConfigStore::new(path).save(&config)?;
    }
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_chapters_dir_flag_overrides_default() {
        let cli = Cli::parse_from(["book-rag", "--chapters-dir", "books/rust", "chapters"]);
        assert_eq!(cli.resolve_config().unwrap().chapters_dir, "books/rust");
    }

    #[test]
    fn test_flag_overrides_config_file() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "chapters_dir": "from/file", "top_k": 9 }"#).unwrap();

        let cli = Cli::parse_from([
            "book-rag",
            "ask",
            "--question",
            "What is Python?",
            "--config",
            path.to_str().unwrap(),
            "--chapters-dir",
            "from/flag",
        ]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.chapters_dir, "from/flag");
        assert_eq!(config.top_k, 9);
    }

    #[test]
    fn test_ask_args_parse() {
        let cli = Cli::parse_from(["book-rag", "ask", "--question", "loops?", "--top-k", "3", "--json"]);
        match cli.command {
            Commands::Ask(args) => {
                assert_eq!(args.question, "loops?");
                assert_eq!(args.top_k, Some(3));
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the subcommands and their flags:
//
//   ask       : answer one question from the chapter corpus
//   chapters  : list the loaded chapters and their titles
//   demo      : run the built-in sample questions
//   config    : print (or write) the effective configuration
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a question from the book chapters
    Ask(AskArgs),

    /// List the chapters found in the chapters directory
    Chapters,

    /// Run the sample questions against the corpus
    Demo,

    /// Print the effective configuration as JSON
    Config(ConfigArgs),
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// JSON config file; absent fields use built-in defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory with the chapter .txt files (overrides the config file)
    #[arg(long, global = true)]
    pub chapters_dir: Option<String>,
}

/// All arguments for the `ask` command
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The natural language question to answer
    #[arg(long)]
    pub question: String,

    /// How many ranked chapters to consider (overrides the config file)
    #[arg(long)]
    pub top_k: Option<usize>,

    /// Print a JSON object {answer, model, source} instead of plain text
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

/// All arguments for the `config` command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also save the effective configuration to this path
    #[arg(long)]
    pub write: Option<PathBuf>,
}

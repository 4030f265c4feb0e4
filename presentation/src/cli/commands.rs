//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for finished debates
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Full formatted output with transcript, interludes, and ballots
    Full,
    /// Only the ballot tally and the host's wrap-up
    Verdict,
    /// JSON output
    Json,
}

/// CLI arguments for debate-arena
#[derive(Parser, Debug)]
#[command(name = "debate-arena")]
#[command(author, version, about = "Structured debates between LLM participants, judged by a panel")]
#[command(long_about = r#"
Debate Arena runs a formal debate between two LLM participants, moderated
by a host and scored by a panel of judges.

The protocol has five phases:
1. Opening statements (affirmative, then negative)
2. Cross-examination (alternating question/answer blocks)
3. Free debate (alternating rebuttal rounds)
4. Closing statements (negative, then affirmative)
5. Judging: the whole panel deliberates concurrently and votes

Participants, judges, and the host are named in a session TOML file;
side assignment is randomized at the start of every run.

Example:
  debate-arena session.toml
  debate-arena session.toml --save runs/
  debate-arena session.toml -o json --quiet
"#)]
pub struct Cli {
    /// Path to the session TOML file
    pub session: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the live narration while the debate runs
    #[arg(short, long)]
    pub quiet: bool,

    /// Archive the finished debate as JSON into this directory
    #[arg(long, value_name = "DIR")]
    pub save: Option<PathBuf>,

    /// Seed the side-assignment coin toss (for reproducible runs)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

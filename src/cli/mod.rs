use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::tree::remap::UnresolvedParentPolicy;

#[derive(Debug, Parser)]
#[command(
    name = "tree-grower",
    version,
    about = "Duplicate a JSON tree and graft the copies onto its leaves",
    long_about = "Read a flat JSON array of nodes linked by id/parentId, then repeatedly clone it under fresh UUIDs and attach each clone's roots to a random leaf of the growing tree. The result is written as one compact JSON array."
)]
pub struct Cli {
    /// Path to the initial JSON tree file
    pub input: PathBuf,
    /// Path to the output JSON file
    pub output: PathBuf,
    /// Number of duplication iterations (default: 1000)
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub iterations: Option<i64>,
    /// Seed for leaf selection and id generation (reproducible output)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Handling of a parentId that points outside the cloned template. Such
    /// nodes are template roots and get grafted onto a leaf anyway, so in a
    /// growth run only `reject` changes the output (growth stops at once).
    #[arg(long, value_enum)]
    pub unresolved_parent: Option<UnresolvedParentArg>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Suppress progress output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnresolvedParentArg {
    Keep,
    Clear,
    Reject,
}

impl From<UnresolvedParentArg> for UnresolvedParentPolicy {
    fn from(arg: UnresolvedParentArg) -> Self {
        match arg {
            UnresolvedParentArg::Keep => UnresolvedParentPolicy::Keep,
            UnresolvedParentArg::Clear => UnresolvedParentPolicy::Clear,
            UnresolvedParentArg::Reject => UnresolvedParentPolicy::Reject,
        }
    }
}

#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

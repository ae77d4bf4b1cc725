use crate::cli::Cli;
use crate::grow::{Grower, Outcome, Phase};
use crate::utils::config::{load_config_at, GrowConfig};
use crate::utils::json_file::{load_nodes, save_nodes};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::num::NonZeroUsize;

pub const DEFAULT_ITERATIONS: i64 = 1000;

/// Exit code for a rejected iteration count.
pub const EXIT_USAGE: i32 = 2;

/// Install the `env_logger` backend. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
}

/// Convert a user supplied count, rejecting zero and negatives.
#[must_use]
pub fn positive_iterations(n: i64) -> Option<NonZeroUsize> {
    usize::try_from(n).ok().and_then(NonZeroUsize::new)
}

fn reject_iterations(n: i64) -> i32 {
    eprintln!("Error: Number of iterations must be positive (got {n}).");
    EXIT_USAGE
}

/// Run the CLI logic in-process.
///
/// Returns an exit code: 0 on success (including a run whose growth stopped
/// early but was still saved), 1 on load/config/save failures and 2 for an
/// invalid iteration count.
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    let quiet = cli.quiet;
    let mut phase = Phase::Loading;

    // Reject a bad count before touching any file
    if let Some(n) = cli.iterations {
        if positive_iterations(n).is_none() {
            return reject_iterations(n);
        }
    }

    let cfg = match cli.config.as_deref() {
        Some(path) => match load_config_at(path) {
            Ok(c) => c.grow.unwrap_or_default(),
            Err(e) => {
                eprintln!("Error: {e}");
                phase.advance(Phase::Aborted);
                return phase.exit_code();
            }
        },
        None => GrowConfig::default(),
    };

    let requested = cli.iterations.or(cfg.iterations).unwrap_or(DEFAULT_ITERATIONS);
    let Some(iterations) = positive_iterations(requested) else {
        return reject_iterations(requested);
    };
    let policy = cli.unresolved_parent.map(Into::into).or(cfg.unresolved_parent).unwrap_or_default();
    let rng = match cli.seed.or(cfg.seed) {
        Some(seed) => {
            log::info!("using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    if !quiet {
        println!("Reading initial tree structure from {}...", cli.input.display());
    }
    let template = match load_nodes(&cli.input) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("Error: {e}");
            phase.advance(Phase::Aborted);
            return phase.exit_code();
        }
    };
    if !quiet {
        println!("Initial tree loaded with {} nodes.", template.len());
    }

    let mut grower = Grower::new(template, rng).with_policy(policy);
    phase.advance(Phase::Initialized);
    log::info!(
        "template has {} root(s), unresolved parents: {policy:?}",
        grower.roots().len()
    );

    if !quiet {
        println!("Starting {iterations} duplication iterations...");
    }
    phase.advance(Phase::Growing);
    let (nodes, report) = grower.run(iterations, |r| {
        if !quiet {
            println!(
                "Iteration {}/{} completed. Attached {} root(s) of new duplicate (size: {}) to leaf node {}. Total nodes: {}",
                r.iteration, r.total, r.attached, r.clone_size, r.leaf, r.total_nodes
            );
        }
    });
    if let Outcome::Aborted { reason, .. } = &report.outcome {
        eprintln!("Error: {reason} Stopping after {} iteration(s).", report.completed);
    }

    phase.advance(Phase::Saving);
    if !quiet {
        println!("\nWriting final tree with {} nodes to {}...", nodes.len(), cli.output.display());
    }
    match save_nodes(&cli.output, &nodes) {
        Ok(()) => {
            phase.advance(Phase::Done);
            if !quiet {
                println!("Done.");
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            phase.advance(Phase::Aborted);
        }
    }
    phase.exit_code()
}

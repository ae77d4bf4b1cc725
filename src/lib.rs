//! tree-grower — synthetic tree fixtures
//!
//! Inflate a small seed tree, stored as a flat JSON array of nodes linked by
//! `id`/`parentId`, into a large one by cloning it under fresh ids and
//! grafting each clone onto a random leaf of the growing tree.
//!
//! # Quickstart (Library)
//! ```no_run
//! use rand::SeedableRng;
//! use std::num::NonZeroUsize;
//! use tree_grower::grow::Grower;
//!
//! let template = tree_grower::utils::json_file::load_nodes(std::path::Path::new("seed.json")).expect("load");
//! let rng = rand::rngs::StdRng::seed_from_u64(42);
//! let mut grower = Grower::new(template, rng);
//! let (nodes, report) = grower.run(NonZeroUsize::new(100).unwrap(), |_| {});
//! println!("{} nodes after {} iterations", nodes.len(), report.completed);
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! tree-grower seed.json big.json -n 15
//! tree-grower seed.json big.json -n 500 --seed 7 --unresolved-parent clear -q
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod grow;
pub mod tree;
pub mod utils;

//! `avl-demo` — exercise insert, delete and traverse on a small tree.
//!
//! Usage:
//!   avl-demo [--counted]
//!
//! Inserts 3, 4, 5, 1, 2 and prints the keys, then deletes 7 (absent) and
//! 1 and prints them again. Set `RUST_LOG=debug` to also dump the tree
//! structure after each step.

use avl_tree::{AvlConfig, AvlTree, Duplicates};
use env_logger::Env;
use log::{debug, error, info};

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let duplicates = match std::env::args().nth(1).as_deref() {
        None => Duplicates::Separate,
        Some("--counted") => Duplicates::Counted,
        Some(other) => {
            error!("unknown argument: {other}");
            std::process::exit(1);
        }
    };
    let mut tree = AvlTree::with_config(AvlConfig::new().with_duplicates(duplicates));

    for key in [3, 4, 5, 1, 2] {
        tree.insert(key);
    }
    println!("{tree}");
    debug!("after inserts:\n{}", tree.print());

    for key in [7, 1] {
        if !tree.delete(key) {
            info!("{key} not in tree");
        }
    }
    println!("{tree}");
    debug!("after deletes:\n{}", tree.print());

    if let Err(e) = tree.assert_valid() {
        error!("{e}");
        std::process::exit(1);
    }
}

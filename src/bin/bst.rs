//! Builds a tree from the command line and prints what it looks like.
//!
//! ```text
//! RUST_LOG=debug bst --balanced 11 2 13 4 3 2 5 6 1 7 8 10 9 --delete 4
//! ```

use bst_avl::{traversal, Policy, Tree};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(about = "Insert keys into a binary search tree and print its shape")]
struct Args {
    /// Keep the tree height-balanced while inserting
    #[arg(long)]
    balanced: bool,

    /// Keys to delete once everything is inserted
    #[arg(long = "delete", value_name = "KEY", allow_negative_numbers = true)]
    deletes: Vec<i64>,

    /// Keys to insert, in order
    #[arg(allow_negative_numbers = true)]
    keys: Vec<i64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let policy = if args.balanced {
        Policy::Balanced
    } else {
        Policy::Unbalanced
    };

    let mut tree = Tree::with_policy(policy);
    for key in args.keys {
        if let Err(err) = tree.insert(key) {
            eprintln!("insert {key}: {err}");
        }
    }
    for key in &args.deletes {
        if let Err(err) = tree.delete(key) {
            eprintln!("delete {key}: {err}");
        }
    }

    print!("{}", traversal::render(&tree));
    println!();
    println!("in-order:  {:?}", traversal::in_order(&tree));
    println!("pre-order: {:?}", traversal::pre_order(&tree));
    println!("left view: {:?}", traversal::left_view(&tree));
    for (depth, keys) in traversal::levels(&tree) {
        println!("level {depth}: {keys:?}");
    }
    match traversal::height(&tree) {
        Some(height) => println!("height: {height}"),
        None => println!("height: (empty tree)"),
    }
}

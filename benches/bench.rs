use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bst_avl::{Policy, Tree};

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: u32) -> usize {
    2usize.pow(num_levels) - 1
}

/// Builds a tree by inserting keys in ascending order. Without balancing this degrades into a
/// list, which is the worst case for the unbalanced policy.
fn ascending_tree(policy: Policy, num_levels: u32) -> Tree<i32> {
    let mut tree = Tree::with_policy(policy);
    for x in 0..num_nodes_in_full_tree(num_levels) {
        let _ = tree.insert(x as i32);
    }
    tree
}

/// Helper to bench a function on a BST.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// policies before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut Tree<i32>, i32)) {
    let mut group = c.benchmark_group(name);

    // The unbalanced tree is a list here, so every insert walks all of it; keep it small.
    for num_levels in [3, 7, 11] {
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;

        for (name, policy) in [
            ("unbalanced", Policy::Unbalanced),
            ("balanced", Policy::Balanced),
        ] {
            let tree = ascending_tree(policy, num_levels);
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        time += instant.elapsed();
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _node = black_box(tree.search(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        let _ = tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        let _ = tree.insert(i + 1);
    });

    bench_helper(c, "successor", |tree, i| {
        let _key = black_box(tree.successor(&(i / 2)));
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _node = black_box(tree.search(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        let _ = tree.delete(&(i + 1));
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

//! Disjoint-set (Union-Find) forest.
//!
//! Tracks which nodes already belong to the same connected component while
//! Kruskal's algorithm accepts edges. `union` doubles as the cycle check:
//! it refuses to merge nodes that are already connected.
//!
//! Uses path compression during `find` and union by rank during `union`,
//! giving effectively constant-time operations at the graph sizes the
//! visualizer works with.

/// Disjoint-set forest over elements `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    /// Create `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> UnionFind {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// `true` if the structure holds no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative (root) of the set containing `x`.
    ///
    /// Applies path compression iteratively: after locating the root, every
    /// node on the walked path is re-parented directly under it. Iterative
    /// rather than recursive so a pathological parent chain cannot overflow
    /// the stack.
    ///
    /// # Panics
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point the walked path straight at the root.
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y` using union by rank.
    ///
    /// Returns `false` without modification if `x` and `y` are already in
    /// the same set — for Kruskal's this means "accepting this edge would
    /// close a cycle". Returns `true` after a successful merge. On equal
    /// ranks `y`'s root attaches under `x`'s, whose rank then grows by one.
    ///
    /// # Panics
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        true
    }

    /// `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_initial() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_find_idempotent() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);
        for i in 0..6 {
            let root = uf.find(i);
            assert_eq!(uf.find(root), root);
        }
    }

    #[test]
    fn test_union_returns_true_then_false() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(!uf.union(0, 1));
        assert!(!uf.union(1, 0));
    }

    #[test]
    fn test_repeat_union_leaves_structure_unchanged() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(2, 3);
        let mut before = uf.clone();
        assert!(!uf.union(1, 0));
        assert!(!uf.union(3, 2));
        for i in 0..4 {
            assert_eq!(uf.find(i), before.find(i));
        }
    }

    #[test]
    fn test_transitivity() {
        let mut uf = UnionFind::new(5);
        uf.union(0, 1);
        uf.union(1, 2);
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn test_path_compression_on_chain() {
        // Build a long chain by always unioning a fresh element onto the
        // same component, then check find still terminates at one root.
        let n = 10_000;
        let mut uf = UnionFind::new(n);
        for i in 1..n {
            uf.union(i - 1, i);
        }
        let root = uf.find(0);
        for i in 0..n {
            assert_eq!(uf.find(i), root);
        }
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.len(), 0);
    }
}

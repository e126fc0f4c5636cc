//! Constructors for common graph families.
//!
//! These are collaborators for tests and benches; the container itself stays
//! agnostic of any particular family.

use crate::{Graph, NodeId};

/// Path on `n` vertices `0 - 1 - ... - n-1`.
pub fn path(n: NodeId) -> Graph {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_node(v);
    }
    for v in 1..n {
        g.add_edge(v - 1, v);
    }
    g
}

/// Cycle on `n >= 3` vertices.
pub fn cycle(n: NodeId) -> Graph {
    assert!(n >= 3, "a cycle needs at least 3 vertices, got {n}");
    let mut g = path(n);
    g.add_edge(n - 1, 0);
    g
}

/// Star on `n` vertices: center `0` joined to `n - 1` leaves.
pub fn star(n: NodeId) -> Graph {
    let mut g = Graph::new();
    g.add_node(0);
    for v in 1..n {
        g.add_edge(0, v);
    }
    g
}

/// Wheel on `n >= 4` vertices: hub `0` joined to every vertex of the rim
/// cycle `1 ... n-1`.
pub fn wheel(n: NodeId) -> Graph {
    assert!(n >= 4, "a wheel needs at least 4 vertices, got {n}");
    let mut g = star(n);
    for v in 1..n - 1 {
        g.add_edge(v, v + 1);
    }
    g.add_edge(n - 1, 1);
    g
}

/// Complete graph on `n` vertices.
pub fn complete(n: NodeId) -> Graph {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_node(v);
    }
    for u in 0..n {
        for v in u + 1..n {
            g.add_edge(u, v);
        }
    }
    g
}

/// Complete bipartite graph with parts `0 ... a-1` and `a ... a+b-1`.
pub fn complete_bipartite(a: NodeId, b: NodeId) -> Graph {
    let mut g = Graph::new();
    for v in 0..a + b {
        g.add_node(v);
    }
    for u in 0..a {
        for v in a..a + b {
            g.add_edge(u, v);
        }
    }
    g
}

/// Complete binary tree on `n` vertices in heap layout: vertex `i` has
/// children `2i + 1` and `2i + 2` where those are below `n`.
pub fn binary_tree(n: NodeId) -> Graph {
    let mut g = Graph::new();
    for v in 0..n {
        g.add_node(v);
    }
    for v in 0..n {
        for child in [2 * v + 1, 2 * v + 2] {
            if child < n {
                g.add_edge(v, child);
            }
        }
    }
    g
}

/// Rectangular grid with `rows * cols` vertices; vertex `(r, c)` has id
/// `r * cols + c`.
pub fn grid(rows: NodeId, cols: NodeId) -> Graph {
    let mut g = Graph::new();
    for r in 0..rows {
        for c in 0..cols {
            g.add_node(r * cols + c);
        }
    }
    for r in 0..rows {
        for c in 0..cols {
            let id = r * cols + c;
            if c + 1 < cols {
                g.add_edge(id, id + 1);
            }
            if r + 1 < rows {
                g.add_edge(id, id + cols);
            }
        }
    }
    g
}

/// Generalized Petersen graph `P(n, k)` for `n >= 3` and `1 <= k < n`:
/// outer cycle `0 ... n-1`, spokes to the inner vertices `n ... 2n-1`, and
/// inner chords `n+i` to `n + (i+k mod n)`.
///
/// For `2k = n` the chord pattern yields each inner edge twice; the pairs
/// deduplicate onto a perfect matching.
pub fn petersen(n: NodeId, k: NodeId) -> Graph {
    assert!(n >= 3, "a generalized Petersen graph needs n >= 3, got {n}");
    assert!(k >= 1 && k < n, "chord step must satisfy 1 <= k < n, got {k}");
    let mut g = Graph::new();
    for i in 0..n {
        g.add_edge(i, (i + 1) % n);
    }
    for i in 0..n {
        g.add_edge(i, n + i);
    }
    for i in 0..n {
        g.add_edge(n + i, n + (i + k) % n);
    }
    g
}

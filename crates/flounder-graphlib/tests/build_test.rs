use flounder_graphlib::build;

#[test]
fn path_and_cycle_counts() {
    let p = build::path(6);
    assert_eq!((p.node_count(), p.edge_count()), (6, 5));
    let c = build::cycle(6);
    assert_eq!((c.node_count(), c.edge_count()), (6, 6));
    assert!(c.has_edge(5, 0));
}

#[test]
fn star_and_wheel_shapes() {
    let s = build::star(7);
    assert_eq!((s.node_count(), s.edge_count()), (7, 6));
    assert_eq!(s.degree(0), 6);
    assert_eq!(s.degree(3), 1);

    let w = build::wheel(7);
    assert_eq!((w.node_count(), w.edge_count()), (7, 12));
    assert_eq!(w.degree(0), 6);
    assert_eq!(w.degree(1), 3);
    assert!(w.has_edge(6, 1));
}

#[test]
fn the_smallest_wheel_is_k4() {
    let w = build::wheel(4);
    assert_eq!((w.node_count(), w.edge_count()), (4, 6));
}

#[test]
fn complete_graph_counts() {
    for n in 1..=6u64 {
        let g = build::complete(n);
        assert_eq!(g.node_count() as u64, n);
        assert_eq!(g.edge_count() as u64, n * (n - 1) / 2);
    }
}

#[test]
fn complete_bipartite_has_no_edges_inside_a_part() {
    let g = build::complete_bipartite(3, 4);
    assert_eq!((g.node_count(), g.edge_count()), (7, 12));
    assert!(!g.has_edge(0, 1));
    assert!(!g.has_edge(3, 4));
    assert!(g.has_edge(0, 3));
    assert!(g.has_edge(2, 6));
}

#[test]
fn binary_tree_uses_the_heap_layout() {
    let g = build::binary_tree(10);
    assert_eq!((g.node_count(), g.edge_count()), (10, 9));
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(0, 2));
    assert!(g.has_edge(4, 9));
    assert!(!g.has_edge(1, 2));
}

#[test]
fn grid_counts_and_adjacency() {
    let g = build::grid(3, 4);
    assert_eq!(g.node_count(), 12);
    assert_eq!(g.edge_count(), 17);
    assert!(g.has_edge(0, 1));
    assert!(g.has_edge(0, 4));
    // Row boundaries do not wrap.
    assert!(!g.has_edge(3, 4));
}

#[test]
fn petersen_counts_and_chord_dedup() {
    let g = build::petersen(5, 2);
    assert_eq!((g.node_count(), g.edge_count()), (10, 15));
    assert!(g.has_edge(5, 7));
    assert!(g.has_edge(9, 6));

    // 2k = n folds the chord pattern onto a perfect matching.
    let m = build::petersen(4, 2);
    assert_eq!((m.node_count(), m.edge_count()), (8, 10));
}

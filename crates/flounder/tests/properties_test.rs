use flounder::graphlib::{Graph, NodeId, build};
use flounder::is_planar;

fn relabeled(g: &Graph, f: impl Fn(NodeId) -> NodeId) -> Graph {
    let mut out = Graph::new();
    for v in g.nodes() {
        out.add_node(f(v));
    }
    for e in g.edges() {
        out.add_edge(f(e.u), f(e.v));
    }
    out
}

fn disjoint_union(a: &Graph, b: &Graph) -> Graph {
    let shift = a.nodes().max().map_or(0, |v| v + 1);
    let mut out = Graph::new();
    for v in a.nodes() {
        out.add_node(v);
    }
    for e in a.edges() {
        out.add_edge(e.u, e.v);
    }
    for v in b.nodes() {
        out.add_node(v + shift);
    }
    for e in b.edges() {
        out.add_edge(e.u + shift, e.v + shift);
    }
    out
}

#[test]
fn the_euler_prefilter_rejects_dense_graphs() {
    for n in [5, 6, 8, 10] {
        let g = build::complete(n);
        assert!(g.edge_count() > 3 * g.node_count() - 6);
        assert!(!is_planar(&g), "K{n}");
    }
}

#[test]
fn planarity_is_closed_under_edge_deletion() {
    for g in [build::grid(3, 4), build::wheel(8), build::petersen(6, 2)] {
        assert!(is_planar(&g));
        for e in g.edges().collect::<Vec<_>>() {
            let mut h = g.clone();
            assert!(h.remove_edge(e.u, e.v));
            assert!(is_planar(&h), "deleting {e:?} broke planarity");
        }
    }
}

#[test]
fn removing_any_single_edge_from_a_kuratowski_graph_restores_planarity() {
    for g in [build::complete(5), build::complete_bipartite(3, 3)] {
        assert!(!is_planar(&g));
        for e in g.edges().collect::<Vec<_>>() {
            let mut h = g.clone();
            assert!(h.remove_edge(e.u, e.v));
            assert!(is_planar(&h), "graph minus {e:?} should be planar");
        }
    }
}

#[test]
fn repeated_queries_yield_the_same_verdict() {
    let planar = build::grid(4, 4);
    let nonplanar = build::petersen(5, 2);
    for _ in 0..3 {
        assert!(is_planar(&planar));
        assert!(!is_planar(&nonplanar));
    }
}

#[test]
fn the_verdict_of_a_disjoint_union_is_the_conjunction() {
    let planar = build::grid(2, 3);
    let also_planar = build::cycle(5);
    let nonplanar = build::complete_bipartite(3, 3);

    assert!(is_planar(&disjoint_union(&planar, &also_planar)));
    assert!(!is_planar(&disjoint_union(&planar, &nonplanar)));
    assert!(!is_planar(&disjoint_union(&nonplanar, &planar)));
}

#[test]
fn the_verdict_is_invariant_under_vertex_relabeling() {
    let cases = [
        (build::complete(4), true),
        (build::grid(3, 4), true),
        (build::petersen(7, 2), false),
        (build::complete_bipartite(3, 3), false),
    ];
    for (g, expected) in cases {
        assert_eq!(is_planar(&g), expected);
        assert_eq!(is_planar(&relabeled(&g, |v| 1000 - 3 * v)), expected);
        assert_eq!(is_planar(&relabeled(&g, |v| v * v + 7)), expected);
    }
}

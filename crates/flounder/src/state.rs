//! Shared state for one planarity query.
//!
//! Vertices of the input graph are mapped onto dense slots so that every
//! per-vertex field is a plain vector; arcs of the palm tree are interned
//! into an arc table and every per-arc field is likewise a vector indexed by
//! [`ArcId`]. `None` is the unvisited/unset sentinel throughout.

use crate::UndirectedGraph;
use crate::graphlib::NodeId;
use rustc_hash::FxHashMap as HashMap;

/// Index into the arc table.
pub(crate) type ArcId = usize;

/// One oriented edge of the palm tree, over dense vertex slots. Tree arcs
/// point parent to child, back arcs descendant to ancestor.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Arc {
    pub(crate) tail: usize,
    pub(crate) head: usize,
}

/// A bundle of return edges chained through `refs`, all forced onto the same
/// side of the embedding. Both ends are present or both are absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Interval {
    pub(crate) low: Option<ArcId>,
    pub(crate) high: Option<ArcId>,
}

impl Interval {
    pub(crate) fn new(low: ArcId, high: ArcId) -> Self {
        Self {
            low: Some(low),
            high: Some(high),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Two intervals whose sides in any planar embedding must be opposite. The
/// right interval is populated first; `swap` flips the pair when the
/// constraints force the sides to trade places.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ConflictPair {
    pub(crate) left: Interval,
    pub(crate) right: Interval,
}

impl ConflictPair {
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

#[derive(Debug)]
pub(crate) struct LrState {
    /// Adjacency over dense vertex slots, in the input's native order.
    pub(crate) adj: Vec<Vec<usize>>,

    /// DFS depth per vertex; `None` marks unvisited.
    pub(crate) height: Vec<Option<usize>>,
    /// Tree arc entering each vertex; `None` for DFS roots.
    pub(crate) parent_edge: Vec<Option<ArcId>>,
    /// One DFS root per connected component, in discovery order.
    pub(crate) roots: Vec<usize>,

    pub(crate) arcs: Vec<Arc>,
    arc_ix: HashMap<(usize, usize), ArcId>,

    /// Minimum height reachable from the subtree below the arc through one
    /// back arc.
    pub(crate) lowpt: Vec<usize>,
    /// Second-lowest such height; equals `lowpt` when only one exists.
    pub(crate) lowpt2: Vec<usize>,
    pub(crate) nesting_depth: Vec<usize>,

    /// Out-arcs per vertex; ascending nesting depth after `sort_outgoing`.
    pub(crate) order: Vec<Vec<ArcId>>,

    /// Same-side chaining between arcs of an interval.
    pub(crate) refs: Vec<Option<ArcId>>,
    /// Arc realizing `lowpt` for each arc.
    pub(crate) lowpt_edge: Vec<Option<ArcId>>,
    /// LIFO of conflict pairs maintained by the testing pass.
    pub(crate) stack: Vec<ConflictPair>,
    /// Stack height snapshot taken when an arc starts processing; the pairs
    /// strictly above it belong to that arc's subtree.
    pub(crate) stack_bottom: Vec<usize>,
}

impl LrState {
    pub(crate) fn new<G: UndirectedGraph>(g: &G) -> Self {
        let n = g.node_count();
        let m = g.edge_count();

        let mut slot: HashMap<NodeId, usize> =
            HashMap::with_capacity_and_hasher(n, Default::default());
        for (ix, v) in g.nodes().enumerate() {
            slot.insert(v, ix);
        }
        debug_assert_eq!(slot.len(), n, "duplicate vertex ids in the input");

        let mut adj: Vec<Vec<usize>> = Vec::with_capacity(n);
        for v in g.nodes() {
            adj.push(
                g.neighbors(v)
                    .map(|w| *slot.get(&w).expect("neighbor outside the vertex set"))
                    .collect(),
            );
        }

        Self {
            adj,
            height: vec![None; n],
            parent_edge: vec![None; n],
            roots: Vec::new(),
            arcs: Vec::with_capacity(m),
            arc_ix: HashMap::with_capacity_and_hasher(m, Default::default()),
            lowpt: Vec::with_capacity(m),
            lowpt2: Vec::with_capacity(m),
            nesting_depth: Vec::with_capacity(m),
            order: vec![Vec::new(); n],
            refs: Vec::new(),
            lowpt_edge: Vec::new(),
            stack: Vec::new(),
            stack_bottom: Vec::new(),
        }
    }

    pub(crate) fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Interns the oriented arc `tail -> head` into the palm tree. Both
    /// lowpoints start at the tail's height; back arcs overwrite `lowpt`
    /// with the head's height afterwards.
    pub(crate) fn new_arc(&mut self, tail: usize, head: usize) -> ArcId {
        let e = self.arcs.len();
        let h = self.height[tail].expect("tail of a new arc has been visited");
        self.arcs.push(Arc { tail, head });
        self.arc_ix.insert((tail, head), e);
        self.lowpt.push(h);
        self.lowpt2.push(h);
        self.nesting_depth.push(0);
        self.order[tail].push(e);
        e
    }

    /// Whether either orientation of `{u, w}` is already in the palm tree.
    pub(crate) fn arc_between(&self, u: usize, w: usize) -> bool {
        self.arc_ix.contains_key(&(u, w)) || self.arc_ix.contains_key(&(w, u))
    }

    /// Sorts every out-arc list by ascending nesting depth. The sort is
    /// stable, so ties keep the input's adjacency order.
    pub(crate) fn sort_outgoing(&mut self) {
        let nesting_depth = &self.nesting_depth;
        for arcs in &mut self.order {
            arcs.sort_by_key(|&e| nesting_depth[e]);
        }
    }

    /// Allocates the per-arc fields read and written by the testing pass.
    pub(crate) fn prepare_testing(&mut self) {
        let m = self.arcs.len();
        self.refs = vec![None; m];
        self.lowpt_edge = vec![None; m];
        self.stack_bottom = vec![0; m];
        self.stack.reserve(self.vertex_count());
    }
}

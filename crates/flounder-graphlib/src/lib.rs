//! Undirected simple-graph container used by `flounder`.
//!
//! Nodes carry integer identities in an arbitrary range; the container keeps
//! insertion order for node, edge, and adjacency iteration so that algorithms
//! built on top of it are deterministic.

use rustc_hash::FxBuildHasher;

pub mod build;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Node identity. Ids do not have to be contiguous.
pub type NodeId = u64;

/// Canonical identity of an undirected edge: the unordered pair of endpoints
/// stored in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub u: NodeId,
    pub v: NodeId,
}

impl EdgeKey {
    pub fn new(u: NodeId, v: NodeId) -> Self {
        if u <= v {
            Self { u, v }
        } else {
            Self { u: v, v: u }
        }
    }
}

/// An undirected simple graph.
///
/// Parallel edges deduplicate onto the existing edge; self-loops are outside
/// the supported domain and are rejected with an assertion.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<NodeId>,
    node_index: HashMap<NodeId, usize>,

    edges: Vec<EdgeKey>,
    edge_index: HashMap<EdgeKey, usize>,

    /// Neighbor lists in edge insertion order, parallel to `nodes`.
    adj: Vec<Vec<NodeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            node_index: HashMap::with_capacity_and_hasher(nodes, FxBuildHasher),
            edges: Vec::with_capacity(edges),
            edge_index: HashMap::with_capacity_and_hasher(edges, FxBuildHasher),
            adj: Vec::with_capacity(nodes),
        }
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// Inserts a node. Re-adding an existing node is a no-op.
    pub fn add_node(&mut self, id: NodeId) -> &mut Self {
        if self.node_index.contains_key(&id) {
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(id);
        self.adj.push(Vec::new());
        self.node_index.insert(id, idx);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// Inserts the undirected edge `{u, v}`, ensuring both endpoints exist.
    /// Adding an edge that is already present is a no-op.
    ///
    /// Panics on self-loops: the container models simple graphs only.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) -> &mut Self {
        assert!(u != v, "self-loops are not supported: {u}");
        self.add_node(u);
        self.add_node(v);

        let key = EdgeKey::new(u, v);
        if self.edge_index.contains_key(&key) {
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(key);
        self.edge_index.insert(key, idx);

        let u_ix = self.node_index[&u];
        let v_ix = self.node_index[&v];
        self.adj[u_ix].push(v);
        self.adj[v_ix].push(u);
        self
    }

    /// Inserts the path `nodes[0] - nodes[1] - ... - nodes[k]`.
    pub fn add_path(&mut self, nodes: &[NodeId]) -> &mut Self {
        for pair in nodes.windows(2) {
            self.add_edge(pair[0], pair[1]);
        }
        self
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_index.contains_key(&EdgeKey::new(u, v))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.iter().copied()
    }

    /// Removes the undirected edge `{u, v}`. Returns whether it was present.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> bool {
        let key = EdgeKey::new(u, v);
        let Some(idx) = self.edge_index.remove(&key) else {
            return false;
        };
        self.edges.remove(idx);
        for (i, e) in self.edges.iter().enumerate().skip(idx) {
            self.edge_index.insert(*e, i);
        }

        let u_ix = self.node_index[&u];
        let v_ix = self.node_index[&v];
        self.adj[u_ix].retain(|&w| w != v);
        self.adj[v_ix].retain(|&w| w != u);
        true
    }

    /// Neighbors of `v` in edge insertion order. Empty for unknown nodes.
    pub fn neighbors(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        let ns = self
            .node_index
            .get(&v)
            .map(|&ix| self.adj[ix].as_slice())
            .unwrap_or(&[]);
        ns.iter().copied()
    }

    pub fn degree(&self, v: NodeId) -> usize {
        self.node_index
            .get(&v)
            .map(|&ix| self.adj[ix].len())
            .unwrap_or(0)
    }
}

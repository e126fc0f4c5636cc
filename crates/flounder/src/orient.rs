//! Orientation pass: the first DFS.
//!
//! Turns the input graph into a palm tree, assigning DFS heights and parent
//! arcs, classifying every edge as a tree arc or a back arc, and computing
//! `lowpt`, `lowpt2`, and the nesting depth per arc. The traversal is
//! iterative: input depth may exceed the host call stack.

use crate::state::{ArcId, LrState};

pub(crate) fn run(st: &mut LrState) {
    let n = st.vertex_count();
    let mut dfs_stack: Vec<usize> = Vec::with_capacity(n);
    let mut cursor: Vec<usize> = vec![0; n];
    let mut pending: Vec<Option<ArcId>> = vec![None; n];

    for v in 0..n {
        if st.height[v].is_some() {
            continue;
        }
        st.height[v] = Some(0);
        st.roots.push(v);
        dfs_stack.push(v);

        while let Some(u) = dfs_stack.pop() {
            // A tree arc whose subtree just completed: its lowpoints are
            // final, so the deferred half of its processing runs now.
            if let Some(e) = pending[u].take() {
                finish_arc(st, e, u);
            }

            let mut i = cursor[u];
            let mut descended = false;
            while i < st.adj[u].len() {
                let w = st.adj[u][i];
                i += 1;
                debug_assert!(w != u, "self-loop in the input");
                if st.arc_between(u, w) {
                    continue;
                }
                let e = st.new_arc(u, w);
                match st.height[w] {
                    None => {
                        // Tree arc: descend into w, resume u afterwards.
                        st.parent_edge[w] = Some(e);
                        st.height[w] =
                            Some(st.height[u].expect("scanned vertex has a height") + 1);
                        cursor[u] = i;
                        pending[u] = Some(e);
                        dfs_stack.push(u);
                        dfs_stack.push(w);
                        descended = true;
                        break;
                    }
                    Some(hw) => {
                        // Back arc: it returns exactly to the head's height.
                        st.lowpt[e] = hw;
                        finish_arc(st, e, u);
                    }
                }
            }
            if !descended {
                cursor[u] = i;
            }
        }
    }
}

/// Second half of per-arc processing: nesting depth from the final
/// lowpoints, then the three-way lowpoint propagation into the parent arc.
fn finish_arc(st: &mut LrState, e: ArcId, u: usize) {
    let hu = st.height[u].expect("scanned vertex has a height");

    // Arcs whose subtree has a second return below u nest inside siblings
    // that do not; the +1 breaks the tie in their favor.
    st.nesting_depth[e] = 2 * st.lowpt[e] + usize::from(st.lowpt2[e] < hu);

    let Some(p) = st.parent_edge[u] else {
        return;
    };
    if st.lowpt[e] < st.lowpt[p] {
        st.lowpt2[p] = st.lowpt[p].min(st.lowpt2[e]);
        st.lowpt[p] = st.lowpt[e];
    } else if st.lowpt[e] > st.lowpt[p] {
        st.lowpt2[p] = st.lowpt2[p].min(st.lowpt[e]);
    } else {
        st.lowpt2[p] = st.lowpt2[p].min(st.lowpt2[e]);
    }
}

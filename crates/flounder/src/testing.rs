//! Testing pass: the second DFS.
//!
//! Walks the palm tree in nesting-depth order while maintaining a stack of
//! conflict pairs. Back arcs open a fresh pair; when a subtree completes,
//! its pairs are merged into the parent's constraints, and pairs whose
//! return edges drop out of scope are trimmed. Any merge that would force
//! two populated bundles onto the same side is the non-planarity witness.

use crate::state::{ArcId, ConflictPair, Interval, LrState};

pub(crate) fn run(st: &mut LrState) -> bool {
    let n = st.vertex_count();
    let mut dfs_stack: Vec<usize> = Vec::with_capacity(n);
    let mut cursor: Vec<usize> = vec![0; n];
    let mut pending: Vec<Option<ArcId>> = vec![None; n];

    for r in 0..st.roots.len() {
        dfs_stack.push(st.roots[r]);

        while let Some(u) = dfs_stack.pop() {
            // A tree arc whose subtree just completed runs its return
            // branch before u continues with later out-arcs.
            if let Some(e) = pending[u].take() {
                if !integrate(st, e, u) {
                    return false;
                }
            }

            let mut i = cursor[u];
            let mut descended = false;
            while i < st.order[u].len() {
                let e = st.order[u][i];
                i += 1;
                st.stack_bottom[e] = st.stack.len();
                let w = st.arcs[e].head;
                if st.parent_edge[w] == Some(e) {
                    cursor[u] = i;
                    pending[u] = Some(e);
                    dfs_stack.push(u);
                    dfs_stack.push(w);
                    descended = true;
                    break;
                }
                // Back arc: a one-edge bundle on the right side.
                st.lowpt_edge[e] = Some(e);
                st.stack.push(ConflictPair {
                    left: Interval::default(),
                    right: Interval::new(e, e),
                });
                if !integrate(st, e, u) {
                    return false;
                }
            }
            if descended {
                continue;
            }
            cursor[u] = i;

            if let Some(p) = st.parent_edge[u] {
                trim_back_edges(st, p);
            }
        }
    }
    true
}

/// Return branch for the arc `e = u -> w`, executed inline for back arcs and
/// on subtree completion for tree arcs.
fn integrate(st: &mut LrState, e: ArcId, u: usize) -> bool {
    let hu = st.height[u].expect("tested vertex has a height");
    if st.lowpt[e] >= hu {
        // No return edge below u; the arc imposes no constraint here.
        return true;
    }
    let p = st.parent_edge[u].expect("vertex with a return edge is not a root");
    if e == st.order[u][0] {
        // The first out-arc realizes the parent's lowpoint.
        st.lowpt_edge[p] = st.lowpt_edge[e];
        true
    } else {
        add_constraints(st, e, p)
    }
}

/// Folds the conflict pairs created inside the subtree of `e` into a single
/// fresh pair, then absorbs earlier siblings' pairs that conflict with `e`.
/// Returns false when the left-right constraints become unsatisfiable.
fn add_constraints(st: &mut LrState, e: ArcId, p: ArcId) -> bool {
    let mut pair = ConflictPair::default();

    // Merge the return edges of e into the right interval. Everything
    // strictly above stack_bottom[e] was created inside e's subtree.
    loop {
        debug_assert!(st.stack.len() > st.stack_bottom[e], "subtree left no pairs");
        let mut q = st.stack.pop().expect("conflict stack underflow");
        if !q.left.is_empty() {
            q.swap();
        }
        if !q.left.is_empty() {
            // Two populated bundles inside one subtree interval.
            return false;
        }
        let q_low = q.right.low.expect("populated interval has a low end");
        if st.lowpt[q_low] > st.lowpt[p] {
            // Still constrained above the parent: chain onto the pair.
            match pair.right.low {
                None => pair.right.high = q.right.high,
                Some(low) => st.refs[low] = q.right.high,
            }
            pair.right.low = q.right.low;
        } else {
            // Returns exactly to lowpt(p): align with the parent's
            // lowpoint arc, no further constraint at this level.
            st.refs[q_low] = Some(st.lowpt_edge[p].expect("parent arc has a lowpoint edge"));
        }
        if st.stack.len() == st.stack_bottom[e] {
            break;
        }
    }

    // Merge earlier siblings' pairs that still return above lowpt(e); their
    // conflicting side must oppose everything e brought in.
    while top_conflicts(st, e) {
        let mut q = st.stack.pop().expect("conflict stack underflow");
        if conflicting(st, &q.right, e) {
            q.swap();
        }
        if conflicting(st, &q.right, e) {
            // Both sides of the pair conflict with e.
            return false;
        }
        if let Some(low) = pair.right.low {
            st.refs[low] = q.right.high;
        }
        if q.right.low.is_some() {
            pair.right.low = q.right.low;
        }
        match pair.left.low {
            None => pair.left.high = q.left.high,
            Some(low) => st.refs[low] = q.left.high,
        }
        pair.left.low = q.left.low;
    }

    if !pair.left.is_empty() || !pair.right.is_empty() {
        st.stack.push(pair);
    }
    true
}

/// Drops and trims conflict pairs whose return edges end at the tail of `p`
/// once the subtree hanging below `p` has completed.
fn trim_back_edges(st: &mut LrState, p: ArcId) {
    let u = st.arcs[p].tail;
    let hu = st.height[u].expect("parent vertex has a height");

    // Pairs returning exactly to u carry no constraint past it.
    while st.stack.last().is_some_and(|q| lowest(st, q) == hu) {
        st.stack.pop();
    }

    if let Some(mut q) = st.stack.pop() {
        // Trim the high chains past arcs ending at u.
        while let Some(h) = q.left.high {
            if st.arcs[h].head != u {
                break;
            }
            q.left.high = st.refs[h];
        }
        if q.left.high.is_none() {
            if let Some(low) = q.left.low.take() {
                // The side emptied: its low end now follows the other side.
                st.refs[low] = q.right.low;
            }
        }
        while let Some(h) = q.right.high {
            if st.arcs[h].head != u {
                break;
            }
            q.right.high = st.refs[h];
        }
        if q.right.high.is_none() {
            if let Some(low) = q.right.low.take() {
                st.refs[low] = q.left.low;
            }
        }
        st.stack.push(q);
    }
}

fn conflicting(st: &LrState, i: &Interval, b: ArcId) -> bool {
    match i.high {
        Some(h) => st.lowpt[h] > st.lowpt[b],
        None => false,
    }
}

fn top_conflicts(st: &LrState, b: ArcId) -> bool {
    st.stack
        .last()
        .is_some_and(|q| conflicting(st, &q.left, b) || conflicting(st, &q.right, b))
}

/// Lowest return height of a pair on the stack.
fn lowest(st: &LrState, q: &ConflictPair) -> usize {
    match (q.left.low, q.right.low) {
        (Some(l), Some(r)) => st.lowpt[l].min(st.lowpt[r]),
        (Some(l), None) => st.lowpt[l],
        (None, Some(r)) => st.lowpt[r],
        (None, None) => unreachable!("conflict pair on the stack has no populated side"),
    }
}

//! Rotations on owned subtree roots.
//!
//! `a` names the side the imbalance lies on. Each function takes the
//! out-of-balance subtree root by value and returns the new root; the caller
//! stores it back into the parent slot and sets the new root's balance.

use crate::node::{Node, Side};

/// Lifts the child on side `a` into the place of `s`.
pub(crate) fn rotate<N: Node>(a: Side, mut s: Box<N>) -> Box<N> {
    let Some(mut r) = s.links_mut().child_mut(a).take() else {
        return s;
    };
    *s.links_mut().child_mut(a) = r.links_mut().child_mut(a.opposite()).take();
    *r.links_mut().child_mut(a.opposite()) = Some(s);
    r
}

/// Rotation for a heavy child leaning the same way as `s`. The demoted node
/// ends up balanced.
pub(crate) fn single_rotation<N: Node>(a: Side, mut s: Box<N>) -> Box<N> {
    s.links_mut().balance = 0;
    rotate(a, s)
}

/// Rotation for a heavy child leaning away from `s`: the inner grandchild
/// becomes the new root.
pub(crate) fn double_rotation<N: Node>(a: Side, mut s: Box<N>) -> Box<N> {
    let heavy = s.links_mut().child_mut(a);
    if let Some(r) = heavy.take() {
        *heavy = Some(rotate(a.opposite(), r));
    }
    let mut p = rotate(a, s);

    // Rotations leave balances alone, so the pivot still carries the
    // balance it had as a grandchild.
    let (s_balance, r_balance) = match p.links().balance {
        b if b == a.weight() => (-a.weight(), 0),
        b if b == -a.weight() => (0, a.weight()),
        _ => (0, 0),
    };
    let links = p.links_mut();
    if let Some(s) = links.child_mut(a.opposite()) {
        s.links_mut().balance = s_balance;
    }
    if let Some(r) = links.child_mut(a) {
        r.links_mut().balance = r_balance;
    }
    p
}

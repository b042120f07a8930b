//! Height balancing with a per-node balance factor.
//!
//! Insert and delete recurse along the search path and report upwards
//! whether the subtree below changed height. Ancestors fold that bit into
//! their balance factor and rotate when it would reach ±2.

use std::cmp::Ordering;
use std::mem;

use crate::node::{Link, Links, Node, Side};
use crate::rotate::{double_rotation, rotate, single_rotation};
use crate::strategy::Strategy;

/// The AVL balancing strategy.
#[derive(Clone, Copy, Debug, Default)]
pub struct Avl;

impl<N: Node> Strategy<N> for Avl {
    fn lookup<F>(root: &Link<N>, mut seek: F) -> Option<&N>
    where
        F: FnMut(&N) -> Ordering,
    {
        let mut current = root.as_deref();
        while let Some(node) = current {
            current = match Side::of(seek(node)) {
                None => break,
                Some(side) => node.links().child(side),
            };
        }
        current
    }

    fn insert<C>(root: &mut Link<N>, node: Box<N>, cmp: &C) -> Option<Box<N>>
    where
        C: Fn(&N, &N) -> Ordering,
    {
        let mut displaced = None;
        insert_at(cmp, root, node, &mut displaced);
        displaced
    }

    fn delete<F>(root: &mut Link<N>, mut seek: F) -> Option<Box<N>>
    where
        F: FnMut(&N) -> Ordering,
    {
        let mut removed = None;
        delete_at(&mut seek, root, &mut removed);
        removed
    }
}

/// Returns whether the subtree in `slot` grew.
fn insert_at<N, C>(
    cmp: &C,
    slot: &mut Link<N>,
    mut node: Box<N>,
    displaced: &mut Link<N>,
) -> bool
where
    N: Node,
    C: Fn(&N, &N) -> Ordering,
{
    let ordering = match slot.as_deref() {
        Some(resident) => cmp(&*node, resident),
        None => {
            debug_assert!(node.links().child(Side::Left).is_none());
            debug_assert!(node.links().child(Side::Right).is_none());
            node.links_mut().balance = 0;
            *slot = Some(node);
            return true;
        }
    };

    match Side::of(ordering) {
        Some(side) => {
            let grew = match slot.as_mut() {
                Some(resident) => {
                    insert_at(cmp, resident.links_mut().child_mut(side), node, displaced)
                }
                None => false,
            };
            grew && insert_fix(side, slot)
        }
        None => {
            // Displace in place: the newcomer inherits children and balance.
            debug_assert!(node.links().child(Side::Left).is_none());
            debug_assert!(node.links().child(Side::Right).is_none());
            if let Some(mut resident) = slot.take() {
                *node.links_mut() = mem::take(resident.links_mut());
                debug_assert!(resident.links().is_detached());
                *displaced = Some(resident);
            }
            *slot = Some(node);
            false
        }
    }
}

/// The subtree on side `a` of `slot` grew. Returns whether `slot` grew.
fn insert_fix<N: Node>(a: Side, slot: &mut Link<N>) -> bool {
    let Some(s) = slot.as_mut() else {
        return false;
    };
    let balance = s.links().balance;
    if balance == 0 {
        s.links_mut().balance = a.weight();
        return true;
    }
    if balance == -a.weight() {
        s.links_mut().balance = 0;
        return false;
    }

    let heavy = heavy_balance(s.links(), a);
    if let Some(s) = slot.take() {
        let mut root = if heavy == a.weight() {
            single_rotation(a, s)
        } else {
            double_rotation(a, s)
        };
        root.links_mut().balance = 0;
        *slot = Some(root);
    }
    false
}

/// Returns whether the subtree in `slot` shrank.
fn delete_at<N, F>(seek: &mut F, slot: &mut Link<N>, removed: &mut Link<N>) -> bool
where
    N: Node,
    F: FnMut(&N) -> Ordering,
{
    let ordering = match slot.as_deref() {
        Some(resident) => seek(resident),
        None => return false,
    };

    if let Some(side) = Side::of(ordering) {
        let shrank = match slot.as_mut() {
            Some(resident) => delete_at(seek, resident.links_mut().child_mut(side), removed),
            None => false,
        };
        return shrank && delete_fix(side.opposite(), slot);
    }

    let Some(mut target) = slot.take() else {
        return false;
    };
    let mut links = mem::take(target.links_mut());
    debug_assert!(target.links().is_detached());
    *removed = Some(target);

    if links.child[1].is_none() {
        *slot = links.child[0].take();
        return true;
    }

    // Splice the in-order successor into the vacated position.
    let mut successor = None;
    let shrank = delete_min(links.child_mut(Side::Right), &mut successor);
    if let Some(mut successor) = successor {
        *successor.links_mut() = links;
        *slot = Some(successor);
    }
    shrank && delete_fix(Side::Left, slot)
}

/// Detaches the leftmost node below `slot` into `min`. Returns whether the
/// subtree in `slot` shrank.
fn delete_min<N: Node>(slot: &mut Link<N>, min: &mut Link<N>) -> bool {
    let Some(node) = slot.as_mut() else {
        return false;
    };
    if node.links().child[0].is_some() {
        let shrank = delete_min(node.links_mut().child_mut(Side::Left), min);
        return shrank && delete_fix(Side::Right, slot);
    }

    if let Some(mut leftmost) = slot.take() {
        *slot = leftmost.links_mut().child[1].take();
        leftmost.links_mut().balance = 0;
        *min = Some(leftmost);
    }
    true
}

/// The subtree opposite side `a` of `slot` shrank. Returns whether `slot`
/// shrank.
fn delete_fix<N: Node>(a: Side, slot: &mut Link<N>) -> bool {
    let Some(s) = slot.as_mut() else {
        return false;
    };
    let balance = s.links().balance;
    if balance == 0 {
        s.links_mut().balance = a.weight();
        return false;
    }
    if balance == -a.weight() {
        s.links_mut().balance = 0;
        return true;
    }

    let heavy = heavy_balance(s.links(), a);
    let Some(s) = slot.take() else {
        return false;
    };
    let (mut root, balance, shrank) = match heavy {
        0 => (rotate(a, s), -a.weight(), false),
        h if h == a.weight() => (single_rotation(a, s), 0, true),
        _ => (double_rotation(a, s), 0, true),
    };
    root.links_mut().balance = balance;
    *slot = Some(root);
    shrank
}

fn heavy_balance<N: Node>(links: &Links<N>, a: Side) -> i8 {
    links.child(a).map_or(0, |c| c.links().balance)
}

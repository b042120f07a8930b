use std::cmp::Ordering;

use crate::node::{Link, Node};

/// A balancing scheme driving the three tree operations over a root link.
///
/// A [`Tree`] is bound to one strategy through its type parameter, so the
/// choice is fixed when the tree is constructed.
///
/// [`Tree`]: crate::Tree
pub trait Strategy<N: Node> {
    /// Finds the resident for which `seek` returns `Ordering::Equal`.
    ///
    /// `seek` orders the sought key against a resident node.
    fn lookup<F>(root: &Link<N>, seek: F) -> Option<&N>
    where
        F: FnMut(&N) -> Ordering;

    /// Links `node` into the tree. Returns the resident it displaced, if one
    /// compared equal to `node`.
    fn insert<C>(root: &mut Link<N>, node: Box<N>, cmp: &C) -> Option<Box<N>>
    where
        C: Fn(&N, &N) -> Ordering;

    /// Unlinks and returns the resident for which `seek` returns
    /// `Ordering::Equal`.
    fn delete<F>(root: &mut Link<N>, seek: F) -> Option<Box<N>>
    where
        F: FnMut(&N) -> Ordering;
}

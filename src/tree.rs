use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::avl::Avl;
use crate::node::{Link, Node};
use crate::strategy::Strategy;

/// An ordered container of caller-owned nodes.
///
/// Nodes are handed over as `Box<N>` and handed back when they are deleted or
/// displaced. The tree observes keys only through the comparator supplied at
/// construction, which must be a total order.
pub struct Tree<N, C, S = Avl> {
    root: Link<N>,
    cmp: C,
    num_nodes: usize,
    strategy: PhantomData<S>,
}

impl<N, C> Tree<N, C, Avl>
where
    N: Node,
    C: Fn(&N, &N) -> Ordering,
{
    /// Creates an empty tree balanced as an AVL tree.
    /// No memory is allocated.
    pub fn new(cmp: C) -> Self {
        Self::with_strategy(cmp)
    }
}

impl<N, C, S> Tree<N, C, S>
where
    N: Node,
    C: Fn(&N, &N) -> Ordering,
    S: Strategy<N>,
{
    /// Creates an empty tree bound to the balancing strategy `S`.
    pub fn with_strategy(cmp: C) -> Self {
        Self {
            root: None,
            cmp,
            num_nodes: 0,
            strategy: PhantomData,
        }
    }

    /// Returns true if the tree contains no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.num_nodes
    }

    /// Returns the root node, if any.
    pub fn root(&self) -> Option<&N> {
        self.root.as_deref()
    }

    /// Returns the comparator the tree was built with.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of nodes on the longest path from the root.
    ///
    /// Follows the heavier side at every node, so this takes time
    /// proportional to the height rather than to the number of nodes.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            height += 1;
            let links = node.links();
            current = if links.balance > 0 {
                links.right()
            } else {
                links.left()
            };
        }
        height
    }

    /// Clears the tree, dropping all resident nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.num_nodes = 0;
    }

    /// Returns the resident node that compares equal to `probe`.
    pub fn lookup(&self, probe: &N) -> Option<&N> {
        let cmp = &self.cmp;
        S::lookup(&self.root, |resident| cmp(probe, resident))
    }

    /// Returns the resident node for which `seek` returns `Ordering::Equal`.
    ///
    /// `seek` orders the sought key against a resident node and must agree
    /// with the tree's comparator.
    ///
    /// ```
    /// # use bst_avl::{Links, Node, Tree};
    /// # struct Entry { links: Links<Entry>, key: u32 }
    /// # impl Node for Entry {
    /// #     fn links(&self) -> &Links<Self> { &self.links }
    /// #     fn links_mut(&mut self) -> &mut Links<Self> { &mut self.links }
    /// # }
    /// let mut tree = Tree::new(|a: &Entry, b: &Entry| a.key.cmp(&b.key));
    /// tree.insert(Box::new(Entry { links: Links::new(), key: 7 }));
    /// assert!(tree.lookup_by(|resident| 7.cmp(&resident.key)).is_some());
    /// assert!(tree.lookup_by(|resident| 8.cmp(&resident.key)).is_none());
    /// ```
    pub fn lookup_by<F>(&self, seek: F) -> Option<&N>
    where
        F: FnMut(&N) -> Ordering,
    {
        S::lookup(&self.root, seek)
    }

    /// Links `node` into the tree. Nodes are only ever freed by the caller
    /// or, for nodes still resident, when the tree is cleared or dropped.
    ///
    /// If a resident compares equal to `node`, `node` takes over its position
    /// (children and balance included) and the resident is returned detached.
    /// Otherwise returns `None`.
    pub fn insert(&mut self, node: Box<N>) -> Option<Box<N>> {
        let displaced = S::insert(&mut self.root, node, &self.cmp);
        if displaced.is_none() {
            self.num_nodes += 1;
        }
        displaced
    }

    /// Unlinks and returns the resident node that compares equal to `probe`.
    pub fn delete(&mut self, probe: &N) -> Option<Box<N>> {
        let cmp = &self.cmp;
        let removed = S::delete(&mut self.root, |resident| cmp(probe, resident));
        self.account_removal(removed)
    }

    /// Unlinks and returns the resident node for which `seek` returns
    /// `Ordering::Equal`.
    pub fn delete_by<F>(&mut self, seek: F) -> Option<Box<N>>
    where
        F: FnMut(&N) -> Ordering,
    {
        let removed = S::delete(&mut self.root, seek);
        self.account_removal(removed)
    }

    fn account_removal(&mut self, removed: Option<Box<N>>) -> Option<Box<N>> {
        if removed.is_some() {
            debug_assert!(self.num_nodes >= 1);
            self.num_nodes -= 1;
        }
        removed
    }

    /// Asserts that the tree is ordered under its comparator, that every
    /// stored balance matches the subtree heights and lies in -1..=1, and
    /// that the node count is accurate.
    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let mut previous = None;
        let mut num_nodes = 0;
        let height = self.check_subtree(self.root.as_deref(), &mut previous, &mut num_nodes);

        // Check number of nodes
        assert_eq!(num_nodes, self.num_nodes);
        assert_eq!(height, self.height());
        assert_eq!(self.root.is_none(), self.num_nodes == 0);
    }

    #[cfg(any(test, feature = "consistency_check"))]
    fn check_subtree<'a>(
        &self,
        link: Option<&'a N>,
        previous: &mut Option<&'a N>,
        num_nodes: &mut usize,
    ) -> usize {
        let Some(node) = link else {
            return 0;
        };
        let links = node.links();
        let left_height = self.check_subtree(links.left(), previous, num_nodes);

        // In-order neighbours must be strictly ascending
        if let Some(previous) = *previous {
            assert_eq!((self.cmp)(previous, node), Ordering::Less);
        }
        *previous = Some(node);
        *num_nodes += 1;

        let right_height = self.check_subtree(links.right(), previous, num_nodes);

        // Check AVL condition against the stored balance factor
        let balance = right_height as isize - left_height as isize;
        assert!((-1..=1).contains(&balance));
        assert_eq!(links.balance as isize, balance);

        1 + left_height.max(right_height)
    }

    #[cfg(test)]
    pub(crate) fn inorder<'a, F: FnMut(&'a N)>(&'a self, mut f: F) {
        fn walk<'a, N: Node, F: FnMut(&'a N)>(link: Option<&'a N>, f: &mut F) {
            if let Some(node) = link {
                walk(node.links().left(), f);
                f(node);
                walk(node.links().right(), f);
            }
        }
        walk(self.root.as_deref(), &mut f);
    }
}

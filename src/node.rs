use std::cmp::Ordering;
use std::fmt;

/// An owned link to a subtree root.
pub type Link<N> = Option<Box<N>>;

/// Structural fields embedded in every node that lives in a [`Tree`].
///
/// The tree is the only writer of these fields, so a record that is not
/// linked into a tree never owns children. Callers can only create detached
/// links.
///
/// [`Tree`]: crate::Tree
pub struct Links<N> {
    pub(crate) child: [Link<N>; 2],
    pub(crate) balance: i8,
}

impl<N> Links<N> {
    /// Creates detached links.
    pub fn new() -> Self {
        Self {
            child: [None, None],
            balance: 0,
        }
    }

    /// Returns the root of the subtree holding smaller keys.
    pub fn left(&self) -> Option<&N> {
        self.child[0].as_deref()
    }

    /// Returns the root of the subtree holding larger keys.
    pub fn right(&self) -> Option<&N> {
        self.child[1].as_deref()
    }

    /// Returns the root of the subtree on `side`.
    pub fn child(&self, side: Side) -> Option<&N> {
        self.child[side.index()].as_deref()
    }

    /// Returns height(right) - height(left), always one of -1, 0 or +1
    /// while the node resides in a tree.
    pub fn balance(&self) -> i8 {
        self.balance
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<N> {
        &mut self.child[side.index()]
    }

    pub(crate) fn is_detached(&self) -> bool {
        self.child[0].is_none() && self.child[1].is_none() && self.balance == 0
    }
}

impl<N> Default for Links<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> fmt::Debug for Links<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Links")
            .field("left", &self.child[0].is_some())
            .field("right", &self.child[1].is_some())
            .field("balance", &self.balance)
            .finish()
    }
}

/// A record that can be linked into a [`Tree`].
///
/// Implementors embed a [`Links<Self>`] and hand it out. Keys live wherever
/// the implementor keeps them; the tree only observes them through its
/// comparator.
///
/// ```
/// use bst_avl::{Links, Node};
///
/// struct Entry {
///     links: Links<Entry>,
///     key: u32,
/// }
///
/// impl Node for Entry {
///     fn links(&self) -> &Links<Self> {
///         &self.links
///     }
///
///     fn links_mut(&mut self) -> &mut Links<Self> {
///         &mut self.links
///     }
/// }
/// ```
///
/// [`Tree`]: crate::Tree
pub trait Node: Sized {
    fn links(&self) -> &Links<Self>;
    fn links_mut(&mut self) -> &mut Links<Self>;
}

/// Direction of descent, or the side of a node that changed height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Maps a comparison of a sought key against a resident node to the side
    /// to descend into. `None` means the resident matches.
    pub fn of(ordering: Ordering) -> Option<Side> {
        match ordering {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }

    /// Signed weight of the side, as stored in a balance factor.
    #[inline]
    pub fn weight(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Index of the side's child slot: 0 for left, 1 for right.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    /// Returns the other side.
    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

//! An ordered container balanced as an AVL tree over caller-owned nodes.
//!
//! Callers embed [`Links`] in their own record type, implement [`Node`] for
//! it and supply a comparator. The tree never allocates: it links the boxed
//! nodes it is given and hands them back on deletion or displacement.
//! Balance is tracked with a per-node balance factor in -1..=1 rather than
//! with stored heights.
//!
//! ```
//! use bst_avl::{Links, Node, Tree};
//!
//! struct Entry {
//!     links: Links<Entry>,
//!     key: i32,
//!     name: &'static str,
//! }
//!
//! impl Node for Entry {
//!     fn links(&self) -> &Links<Self> {
//!         &self.links
//!     }
//!
//!     fn links_mut(&mut self) -> &mut Links<Self> {
//!         &mut self.links
//!     }
//! }
//!
//! fn entry(key: i32, name: &'static str) -> Box<Entry> {
//!     Box::new(Entry { links: Links::new(), key, name })
//! }
//!
//! let mut tree = Tree::new(|a: &Entry, b: &Entry| a.key.cmp(&b.key));
//! assert!(tree.insert(entry(1, "one")).is_none());
//! assert!(tree.insert(entry(2, "two")).is_none());
//!
//! // An equal key displaces the resident and hands it back.
//! let old = tree.insert(entry(1, "uno")).unwrap();
//! assert_eq!(old.name, "one");
//! assert_eq!(tree.len(), 2);
//!
//! let found = tree.lookup(&entry(1, "")).unwrap();
//! assert_eq!(found.name, "uno");
//!
//! let removed = tree.delete(&entry(2, "")).unwrap();
//! assert_eq!(removed.name, "two");
//! assert!(tree.lookup(&entry(2, "")).is_none());
//! ```

mod avl;
mod node;
mod rotate;
mod strategy;
mod tree;

pub use avl::Avl;
pub use node::{Link, Links, Node, Side};
pub use strategy::Strategy;
pub use tree::Tree;

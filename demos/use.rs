use std::cmp::Ordering;
use std::collections::VecDeque;

use bst_avl::{Links, Node, Tree};

struct Word {
    links: Links<Word>,
    key: u32,
    text: &'static str,
}

impl Node for Word {
    fn links(&self) -> &Links<Self> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<Self> {
        &mut self.links
    }
}

fn word(key: u32, text: &'static str) -> Box<Word> {
    Box::new(Word {
        links: Links::new(),
        key,
        text,
    })
}

fn by_key(a: &Word, b: &Word) -> Ordering {
    a.key.cmp(&b.key)
}

fn main() {
    let mut tree = Tree::new(by_key);
    tree.insert(word(0, "zero"));
    tree.insert(word(1, "one"));
    tree.insert(word(2, "two"));
    tree.insert(word(3, "three"));
    tree.insert(word(4, "four"));
    tree.insert(word(5, "five"));

    if let Some(old) = tree.insert(word(2, "deux")) {
        println!("displaced {} => {}", old.key, old.text);
    }
    assert_eq!(tree.lookup_by(|w| 2.cmp(&w.key)).map(|w| w.text), Some("deux"));

    let removed = tree.delete_by(|w| 1.cmp(&w.key));
    assert_eq!(removed.map(|w| w.text), Some("one"));
    assert!(tree.lookup_by(|w| 1.cmp(&w.key)).is_none());

    println!("Level-order traversal (height {}):", tree.height());
    let mut queue: VecDeque<&Word> = tree.root().into_iter().collect();
    while let Some(w) = queue.pop_front() {
        println!(
            "Key: {}, Text: {}, Balance: {}",
            w.key,
            w.text,
            w.links.balance()
        );
        queue.extend(w.links.left());
        queue.extend(w.links.right());
    }
}

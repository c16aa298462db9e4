//! Text renderings of a map's tree structure.
//!
//! These helpers walk a map through its read-only [`NodeView`]s and write
//! a description of the tree's shape to any [`fmt::Write`] sink. The
//! output is meant for human eyes and graph tools, not for parsing back.

use compare::Compare;
use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Display, Write};
use std::hash::{Hash, Hasher};
use crate::map::{Map, NodeView};

/// Writes the map's entries level by level, one line per level.
///
/// Each node prints as `(key, value)` and each missing child of a visited
/// slot prints as `null`, so entries line up with their positions in a
/// complete binary tree. The dump stops below the deepest level that
/// contains an entry.
///
/// # Examples
///
/// ```
/// let mut map = ordtree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// let mut out = String::new();
/// ordtree::viz::level_order(&map, &mut out).unwrap();
/// assert_eq!(out, "(2, b)\n(1, a)(3, c)\n");
/// ```
pub fn level_order<K, V, C, W>(map: &Map<K, V, C>, out: &mut W) -> fmt::Result
    where K: Display, V: Display, C: Compare<K>, W: Write {

    let mut slots: VecDeque<Option<NodeView<K, V>>> = VecDeque::new();
    slots.extend(map.root_node().map(Some));

    while !slots.is_empty() {
        let mut deeper = false;

        for _ in 0..slots.len() {
            match slots.pop_front().flatten() {
                Some(node) => {
                    write!(out, "({}, {})", node.key(), node.value())?;
                    deeper |= node.left().is_some() || node.right().is_some();
                    slots.push_back(node.left());
                    slots.push_back(node.right());
                }
                None => {
                    out.write_str("null")?;
                    slots.push_back(None);
                    slots.push_back(None);
                }
            }
        }

        out.write_char('\n')?;
        if !deeper { break; }
    }

    Ok(())
}

/// Writes the map as a sideways tree, one entry per line.
///
/// The right subtree prints above its parent and the left subtree below,
/// each line indented by one tab per level of depth, so reading the output
/// rotated a quarter turn clockwise shows the tree's shape.
///
/// # Examples
///
/// ```
/// let mut map = ordtree::Map::new();
///
/// map.insert(2, "b");
/// map.insert(1, "a");
/// map.insert(3, "c");
///
/// let mut out = String::new();
/// ordtree::viz::indented(&map, &mut out).unwrap();
/// assert_eq!(out, "\t(3, c)\n(2, b)\n\t(1, a)\n");
/// ```
pub fn indented<K, V, C, W>(map: &Map<K, V, C>, out: &mut W) -> fmt::Result
    where K: Display, V: Display, C: Compare<K>, W: Write {

    indented_node(map.root_node(), out, 0)
}

fn indented_node<K, V, W>(node: Option<NodeView<K, V>>, out: &mut W, depth: usize)
    -> fmt::Result where K: Display, V: Display, W: Write {

    if let Some(node) = node {
        indented_node(node.right(), out, depth + 1)?;
        for _ in 0..depth { out.write_char('\t')?; }
        writeln!(out, "({}, {})", node.key(), node.value())?;
        indented_node(node.left(), out, depth + 1)?;
    }

    Ok(())
}

/// Writes the map as a DOT `digraph` description.
///
/// Every node appears as a statement labeled `key [value]` and every
/// parent-child link as an edge statement, in preorder. Node names are
/// derived from a hash of the key, so they are stable across runs for the
/// same tree and renderable by standard graph layout tools.
///
/// # Examples
///
/// ```
/// let mut map = ordtree::Map::new();
/// map.insert(1, "a");
///
/// let mut out = String::new();
/// ordtree::viz::dot(&map, &mut out).unwrap();
/// assert!(out.starts_with("digraph Tree {\n"));
/// assert!(out.ends_with("}\n"));
/// assert!(out.contains("[label=\"1 [a]\"];"));
/// ```
pub fn dot<K, V, C, W>(map: &Map<K, V, C>, out: &mut W) -> fmt::Result
    where K: Display + Hash, V: Display, C: Compare<K>, W: Write {

    writeln!(out, "digraph Tree {{")?;
    if let Some(root) = map.root_node() {
        dot_node(root, out, None)?;
    }
    writeln!(out, "}}")
}

fn dot_node<K, V, W>(node: NodeView<K, V>, out: &mut W, parent: Option<&K>)
    -> fmt::Result where K: Display + Hash, V: Display, W: Write {

    writeln!(out, "\tnode_{}[label=\"{} [{}]\"];", key_id(node.key()), node.key(), node.value())?;

    match parent {
        Some(parent) => writeln!(out, "\tnode_{} -> node_{};", key_id(parent), key_id(node.key()))?,
        None => writeln!(out, "\tnode_{};", key_id(node.key()))?,
    }

    if let Some(left) = node.left() { dot_node(left, out, Some(node.key()))?; }
    if let Some(right) = node.right() { dot_node(right, out, Some(node.key()))?; }

    Ok(())
}

fn key_id<K: Hash + ?Sized>(key: &K) -> u32 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish() as u32
}

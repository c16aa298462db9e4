mod iter;

#[cfg(test)]
mod test;

use compare::Compare;
use std::cmp::Ordering::*;
use std::mem::replace;

pub use self::iter::{Iter, IterMut};

pub type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node { key, value, left: None, right: None }
    }
}

/// A read-only view of a node in the tree.
///
/// Views expose the tree's structure (entry plus child links) without
/// granting any way to modify it. They are the basis for the renderers in
/// [`viz`](crate::viz) and for structural assertions in tests.
pub struct NodeView<'a, K, V>(&'a Node<K, V>);

impl<'a, K, V> Clone for NodeView<'a, K, V> {
    fn clone(&self) -> Self { *self }
}

impl<'a, K, V> Copy for NodeView<'a, K, V> {}

impl<'a, K, V> NodeView<'a, K, V> {
    pub(crate) fn from_link(link: &'a Link<K, V>) -> Option<Self> {
        link.as_deref().map(NodeView)
    }

    /// Returns a reference to the node's key.
    pub fn key(&self) -> &'a K { &self.0.key }

    /// Returns a reference to the node's value.
    pub fn value(&self) -> &'a V { &self.0.value }

    /// Returns a view of the node's left child, if any.
    pub fn left(&self) -> Option<NodeView<'a, K, V>> {
        self.0.left.as_deref().map(NodeView)
    }

    /// Returns a view of the node's right child, if any.
    pub fn right(&self) -> Option<NodeView<'a, K, V>> {
        self.0.right.as_deref().map(NodeView)
    }
}

pub fn insert<K, V, C>(link: &mut Link<K, V>, cmp: &C, key: K, value: V) -> Option<V>
    where C: Compare<K> {

    match *link {
        None => {
            *link = Some(Box::new(Node::new(key, value)));
            None
        }
        Some(ref mut node) => match cmp.compare(&key, &node.key) {
            Equal => Some(replace(&mut node.value, value)),
            Less => insert(&mut node.left, cmp, key, value),
            Greater => insert(&mut node.right, cmp, key, value),
        },
    }
}

/// A reference to a node, generic over the access mode.
///
/// The search and extremum descents are written once against this trait,
/// so the shared and unique flavors of each lookup cannot drift apart.
pub trait Access<'a>: Sized {
    type K: 'a;
    type Value;
    fn split(self) -> (&'a Self::K, Option<Self>, Option<Self>, Self::Value);
}

impl<'a, K: 'a, V: 'a> Access<'a> for &'a Node<K, V> {
    type K = K;
    type Value = &'a V;

    fn split(self) -> (&'a K, Option<Self>, Option<Self>, &'a V) {
        (&self.key, self.left.as_deref(), self.right.as_deref(), &self.value)
    }
}

impl<'a, K: 'a, V: 'a> Access<'a> for &'a mut Node<K, V> {
    type K = K;
    type Value = &'a mut V;

    fn split(self) -> (&'a K, Option<Self>, Option<Self>, &'a mut V) {
        let Node { key, value, left, right } = self;
        (&*key, left.as_deref_mut(), right.as_deref_mut(), value)
    }
}

pub fn search<'a, N, C, Q: ?Sized>(mut node: Option<N>, cmp: &C, key: &Q) -> Option<N::Value>
    where N: Access<'a>, C: Compare<Q, N::K> {

    while let Some(n) = node {
        let (k, left, right, value) = n.split();
        match cmp.compare(key, k) {
            Equal => return Some(value),
            Less => node = left,
            Greater => node = right,
        }
    }

    None
}

pub fn remove<K, V, C, Q: ?Sized>(link: &mut Link<K, V>, cmp: &C, key: &Q)
    -> Option<(K, V)> where C: Compare<Q, K> {

    match cmp.compare(key, &link.as_ref()?.key) {
        Less => remove(&mut link.as_mut()?.left, cmp, key),
        Greater => remove(&mut link.as_mut()?.right, cmp, key),
        Equal => do_remove(link),
    }
}

fn do_remove<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
    let node = link.as_mut()?;

    if node.left.is_some() && node.right.is_some() {
        // Two children: the smallest entry of the right subtree replaces
        // this one, leaving its old position exactly once.
        let (key, value) = Left::remove_extremum(&mut node.right)?;
        Some((replace(&mut node.key, key), replace(&mut node.value, value)))
    } else {
        link.take().map(|node| {
            let mut node = *node;
            *link = node.left.take().or(node.right.take());
            (node.key, node.value)
        })
    }
}

pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    fn left() -> bool;

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V>;
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V>;

    fn extremum<'a, N>(mut node: Option<N>) -> Option<(&'a N::K, N::Value)>
        where N: Access<'a> {

        loop {
            let (key, left, right, value) = node?.split();

            let child = if Self::left() { left } else { right };
            match child {
                None => return Some((key, value)),
                Some(_) => node = child,
            }
        }
    }

    fn remove_extremum<K, V>(link: &mut Link<K, V>) -> Option<(K, V)> {
        match *link {
            Some(ref mut node) if Self::forward(node).is_some() =>
                Self::remove_extremum(Self::forward_mut(node)),
            _ => link.take().map(|node| {
                let mut node = *node;
                *link = Self::Opposite::forward_mut(&mut node).take();
                (node.key, node.value)
            }),
        }
    }
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    fn left() -> bool { true }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.left }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    fn left() -> bool { false }

    fn forward<K, V>(node: &Node<K, V>) -> &Link<K, V> { &node.right }
    fn forward_mut<K, V>(node: &mut Node<K, V>) -> &mut Link<K, V> { &mut node.right }
}

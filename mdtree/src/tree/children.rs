//! Ordered child sequences with kind filters.
//!
//! Builders only ever append. The filter operations exist for consumers that reshape a tree
//! after it has been built (drop every image, pull the first heading out, ...).

use super::{Node, NodeKind};
use serde::Serialize;
use std::ops::Index;

/// The ordered children of a container node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Children<T> {
    items: Vec<T>,
}

impl<T> Default for Children<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Children<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Node> Children<T> {
    /// First child of the given kind.
    pub fn first_of(&self, kind: NodeKind) -> Option<&T> {
        self.items.iter().find(|item| item.kind() == kind)
    }

    /// All children of the given kind, in order.
    pub fn all_of(&self, kind: NodeKind) -> Vec<&T> {
        self.items.iter().filter(|item| item.kind() == kind).collect()
    }

    /// Remove and return the first child of the given kind.
    pub fn remove_first(&mut self, kind: NodeKind) -> Option<T> {
        let index = self.items.iter().position(|item| item.kind() == kind)?;
        Some(self.items.remove(index))
    }

    /// Remove every child of the given kind, returning how many were removed.
    pub fn remove_all(&mut self, kind: NodeKind) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.kind() != kind);
        before - self.items.len()
    }
}

impl<T> From<Vec<T>> for Children<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Children<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Children<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a Children<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> IntoIterator for Children<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

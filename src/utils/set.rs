/*!
# Generalized Sets

This module provides abstractions over `Set` data structures, allowing algorithms
to be written against a minimal interface.

The module includes:
- [`Set<T>`]: trait for generic set-like operations,
- [`NodeSet`]: a set of nodes keyed by their ids that keeps the node values themselves,
- [`IntSet`]: a set of bare node ids.

# Aliasing

Set algebra on [`NodeSet`] stores its result in a destination set. The destination is
always borrowed mutably, so Rust already rules out that it shares storage with one of the
(shared) operands. The remaining aliasing cases are covered explicitly:
- both operands being the same set is detected via [`NodeSet::same`] and short-circuits
  to a copy,
- the destination taking part in the operation is expressed with the in-place variants
  [`NodeSet::union_with`] and [`NodeSet::intersect_with`].
*/

use std::{
    collections::{HashSet, hash_map, hash_set::Iter},
    hash::{BuildHasher, Hash},
    iter::Cloned,
    ptr,
};

use fxhash::{FxHashMap, FxHashSet};

use crate::node::*;

/// Minimalist trait for a set-like collection.
///
/// Supports insertion, removal, membership queries, iteration, and bulk operations.
pub trait Set<T> {
    /// Inserts `value` into the set.
    /// Returns `true` if the element was already present.
    fn insert(&mut self, value: T) -> bool;

    /// Inserts multiple elements from an iterator.
    fn insert_multiple<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }

    /// Removes `value` from the set.
    /// Returns `true` if the element was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Iterator over elements in set.
    ///
    /// Returned by [`Set::iter`].
    type SetIter<'a>: Iterator<Item = T>
    where
        Self: 'a,
        T: Clone;

    /// Returns an iterator over all elements in the set.
    /// May clone elements depending on the underlying data structure.
    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone;

    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &T) -> bool;

    /// Clears all elements from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, S> Set<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn insert(&mut self, value: T) -> bool {
        !HashSet::insert(self, value)
    }

    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    type SetIter<'a>
        = Cloned<Iter<'a, T>>
    where
        Self: 'a,
        T: Clone;

    fn iter(&self) -> Self::SetIter<'_>
    where
        T: Clone,
    {
        HashSet::iter(self).cloned()
    }

    fn contains(&self, value: &T) -> bool {
        HashSet::contains(self, value)
    }

    fn clear(&mut self) {
        HashSet::clear(self);
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

/// A set of bare node ids
pub type IntSet = FxHashSet<NodeId>;

/// A set of nodes keyed by their ids.
///
/// In contrast to [`IntSet`], the node values themselves are kept, so results built from
/// a `NodeSet` hand back exactly the values that were inserted.
#[derive(Clone, Debug)]
pub struct NodeSet<N: Node> {
    nodes: FxHashMap<NodeId, N>,
}

impl<N: Node> Default for NodeSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> NodeSet<N> {
    /// Creates an empty node-set
    pub fn new() -> Self {
        Self {
            nodes: FxHashMap::default(),
        }
    }

    /// Creates an empty node-set with space for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns *true* if both sets are backed by the same storage.
    ///
    /// This is an identity test, not a comparison of contents: two distinct sets with
    /// equal elements are not the same.
    pub fn same(a: &Self, b: &Self) -> bool {
        ptr::eq(&a.nodes, &b.nodes)
    }

    /// Returns *true* if both sets contain the same nodes
    pub fn equal(a: &Self, b: &Self) -> bool {
        if Self::same(a, b) {
            return true;
        }

        a.len() == b.len() && a.nodes.keys().all(|id| b.nodes.contains_key(id))
    }

    /// Returns *true* if a node with the given id is present
    pub fn contains_id(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Returns the stored node with the given id
    pub fn get(&self, id: NodeId) -> Option<&N> {
        self.nodes.get(&id)
    }

    /// Returns an arbitrary element of the set
    pub fn any(&self) -> Option<&N> {
        self.nodes.values().next()
    }

    /// Iterates over references of the stored nodes
    pub fn nodes(&self) -> hash_map::Values<'_, NodeId, N> {
        self.nodes.values()
    }

    /// Iterates over the ids of the stored nodes
    pub fn ids(&self) -> hash_map::Keys<'_, NodeId, N> {
        self.nodes.keys()
    }

    /// Returns the stored nodes sorted by id
    pub fn to_sorted_vec(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self.nodes.values().cloned().collect();
        sort_by_id(&mut nodes);
        nodes
    }

    /// Returns an empty set. Storage is reused if the set was already empty.
    pub fn cleared(mut self) -> Self {
        if self.nodes.is_empty() {
            return self;
        }

        self.nodes = FxHashMap::default();
        self
    }

    /// Makes `self` equal to `src`
    pub fn copy_from(&mut self, src: &Self) {
        if Self::same(self, src) {
            return;
        }

        self.nodes.clear();
        self.nodes
            .extend(src.nodes.iter().map(|(&id, u)| (id, u.clone())));
    }

    /// Stores the union of `a` and `b` in `self`
    pub fn union(&mut self, a: &Self, b: &Self) {
        if Self::same(a, b) {
            self.copy_from(a);
            return;
        }

        self.copy_from(a);
        self.union_with(b);
    }

    /// Stores the intersection of `a` and `b` in `self`. Stored nodes are the values held by `a`.
    pub fn intersect(&mut self, a: &Self, b: &Self) {
        if Self::same(a, b) {
            self.copy_from(a);
            return;
        }

        self.nodes.clear();
        if a.len() <= b.len() {
            self.nodes.extend(
                a.nodes
                    .iter()
                    .filter(|(id, _)| b.nodes.contains_key(*id))
                    .map(|(&id, u)| (id, u.clone())),
            );
        } else {
            self.nodes.extend(
                b.nodes
                    .keys()
                    .filter_map(|id| a.nodes.get_key_value(id))
                    .map(|(&id, u)| (id, u.clone())),
            );
        }
    }

    /// Adds all nodes of `other` to `self`, i.e. `self = self ∪ other`
    pub fn union_with(&mut self, other: &Self) {
        for (&id, u) in &other.nodes {
            self.nodes.entry(id).or_insert_with(|| u.clone());
        }
    }

    /// Removes all nodes not in `other` from `self`, i.e. `self = self ∩ other`
    pub fn intersect_with(&mut self, other: &Self) {
        self.nodes.retain(|id, _| other.nodes.contains_key(id));
    }

    /// Returns a new set holding the intersection of `self` and `other`, with the values of `self`
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len().min(other.len()));
        result.intersect(self, other);
        result
    }

    /// Returns the number of nodes in `self` that are also in `other`
    pub fn count_common(&self, other: &Self) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.ids().filter(|id| large.contains_id(**id)).count()
    }
}

impl<N: Node> Set<N> for NodeSet<N> {
    fn insert(&mut self, value: N) -> bool {
        self.nodes.insert(value.id(), value).is_some()
    }

    fn remove(&mut self, value: &N) -> bool {
        self.nodes.remove(&value.id()).is_some()
    }

    type SetIter<'a>
        = Cloned<hash_map::Values<'a, NodeId, N>>
    where
        Self: 'a,
        N: Clone;

    fn iter(&self) -> Self::SetIter<'_> {
        self.nodes.values().cloned()
    }

    fn contains(&self, value: &N) -> bool {
        self.nodes.contains_key(&value.id())
    }

    fn clear(&mut self) {
        self.nodes.clear();
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<N: Node> PartialEq for NodeSet<N> {
    fn eq(&self, other: &Self) -> bool {
        Self::equal(self, other)
    }
}

impl<N: Node> Eq for NodeSet<N> {}

impl<N: Node> FromIterator<N> for NodeSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().map(|u| (u.id(), u)).collect(),
        }
    }
}

impl<N: Node> Extend<N> for NodeSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.nodes.extend(iter.into_iter().map(|u| (u.id(), u)));
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use super::*;

    fn set_of(ids: &[NodeId]) -> NodeSet<NodeId> {
        ids.iter().copied().collect()
    }

    fn sorted_ids(set: &NodeSet<NodeId>) -> Vec<NodeId> {
        set.ids().copied().sorted().collect_vec()
    }

    #[test]
    fn insert_remove_contains() {
        let mut set = NodeSet::new();
        assert!(!set.insert(3));
        assert!(set.insert(3));
        assert!(!set.insert(-2));
        assert!(set.contains(&3));
        assert!(set.contains_id(-2));
        assert_eq!(set.len(), 2);

        assert!(set.remove(&3));
        assert!(!set.remove(&3));
        assert!(!set.contains(&3));
        assert_eq!(set.to_sorted_vec(), vec![-2]);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn same_is_identity_not_equality() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[1, 2, 3]);
        assert!(NodeSet::same(&a, &a));
        assert!(!NodeSet::same(&a, &b));
        assert!(NodeSet::equal(&a, &b));
        assert_eq!(a, b);
        assert_ne!(a, set_of(&[1, 2]));
        assert_ne!(a, set_of(&[1, 2, 4]));
    }

    #[test]
    fn union_of_distinct_and_aliased_operands() {
        let a = set_of(&[1, 2, 3]);
        let b = set_of(&[3, 4]);

        let mut dst = set_of(&[100]);
        dst.union(&a, &b);
        assert_eq!(sorted_ids(&dst), vec![1, 2, 3, 4]);

        dst.union(&a, &a);
        assert_eq!(sorted_ids(&dst), vec![1, 2, 3]);

        let mut dst = a.clone();
        dst.union_with(&b);
        assert_eq!(sorted_ids(&dst), vec![1, 2, 3, 4]);
    }

    #[test]
    fn intersection_of_distinct_and_aliased_operands() {
        let a = set_of(&[1, 2, 3, 5]);
        let b = set_of(&[3, 4, 5]);

        let mut dst = set_of(&[100, 3]);
        dst.intersect(&a, &b);
        assert_eq!(sorted_ids(&dst), vec![3, 5]);

        dst.intersect(&b, &b);
        assert_eq!(sorted_ids(&dst), vec![3, 4, 5]);

        let mut dst = a.clone();
        dst.intersect_with(&b);
        assert_eq!(sorted_ids(&dst), vec![3, 5]);

        let mut dst = a.clone();
        dst.intersect_with(&NodeSet::new());
        assert!(dst.is_empty());

        assert_eq!(a.count_common(&b), 2);
        assert_eq!(sorted_ids(&a.intersection(&b)), vec![3, 5]);
    }

    #[test]
    fn copy_and_clear() {
        let a = set_of(&[7, 8]);
        let mut dst = set_of(&[1, 2, 3]);
        dst.copy_from(&a);
        assert_eq!(dst, a);
        assert!(!NodeSet::same(&dst, &a));

        let empty = NodeSet::<NodeId>::new().cleared();
        assert!(empty.is_empty());
        assert!(dst.cleared().is_empty());
    }

    #[test]
    fn keeps_node_values() {
        use std::rc::Rc;

        let node = Rc::new(5i64);
        let mut set = NodeSet::new();
        set.insert(node.clone());
        assert!(Rc::ptr_eq(set.get(5).unwrap(), &node));
    }

    #[test]
    fn intersection_keeps_values_of_first_operand() {
        use std::rc::Rc;

        let few: NodeSet<Rc<NodeId>> = [2, 3].map(Rc::new).into_iter().collect();
        let many: NodeSet<Rc<NodeId>> = [1, 2, 3, 4].map(Rc::new).into_iter().collect();

        for (a, b) in [(&few, &many), (&many, &few)] {
            let mut dst = NodeSet::new();
            dst.intersect(a, b);
            assert_eq!(dst.len(), 2);
            for id in [2, 3] {
                assert!(Rc::ptr_eq(dst.get(id).unwrap(), a.get(id).unwrap()));
                assert!(!Rc::ptr_eq(dst.get(id).unwrap(), b.get(id).unwrap()));
            }

            let common = a.intersection(b);
            assert!(Rc::ptr_eq(common.get(2).unwrap(), a.get(2).unwrap()));
        }
    }

    #[test]
    fn int_set() {
        let mut ids = IntSet::default();
        assert!(!Set::insert(&mut ids, 4));
        assert!(Set::insert(&mut ids, 4));
        assert!(Set::contains(&ids, &4));
        assert_eq!(Set::len(&ids), 1);
    }
}

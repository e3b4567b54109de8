use std::hash::Hash;
use std::ops::Deref;
use std::rc::Rc;

use indexmap::IndexMap;
use log::debug;

use crate::{Deferred, IterSource, Pull, Sequence};

/// A sequence of elements that share a grouping key.
///
/// Dereferences to its member [`Sequence`], so every chain and terminal method
/// is available directly on a group. Members keep their original encounter
/// order.
pub struct Group<'a, K, T> {
    key: K,
    members: Sequence<'a, T>,
}

impl<'a, K, T: 'a> Group<'a, K, T> {
    pub fn new(key: K, members: Sequence<'a, T>) -> Self {
        Group { key, members }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn into_parts(self) -> (K, Sequence<'a, T>) {
        (self.key, self.members)
    }
}

impl<'a, K: Clone, T> Clone for Group<'a, K, T> {
    fn clone(&self) -> Self {
        Group {
            key: self.key.clone(),
            members: self.members.clone(),
        }
    }
}

impl<'a, K, T> Deref for Group<'a, K, T> {
    type Target = Sequence<'a, T>;

    fn deref(&self) -> &Sequence<'a, T> {
        &self.members
    }
}

/// Partitions `upstream` by `key_fn` in one full pass, started by the first
/// pull of each traversal. Groups come out in first-appearance key order.
pub(crate) fn group_by<'a, T, K, F>(
    upstream: &Sequence<'a, T>,
    key_fn: F,
) -> Sequence<'a, Group<'a, K, T>>
where
    T: Clone + 'a,
    K: Eq + Hash + 'a,
    F: Fn(&T) -> K + 'a,
{
    let upstream = upstream.clone();
    let key_fn = Rc::new(key_fn);

    Sequence::new(move || {
        let upstream = upstream.clone();
        let key_fn = Rc::clone(&key_fn);

        Deferred::new(move || {
            let mut partitions: IndexMap<K, Vec<T>> = IndexMap::new();
            let mut source = upstream.source();
            while let Some(item) = source.pull() {
                partitions.entry(key_fn(&item)).or_default().push(item);
            }
            debug!("partitioned sequence into {} groups", partitions.len());

            IterSource::new(
                partitions
                    .into_iter()
                    .map(|(key, members)| Group::new(key, Sequence::create(members))),
            )
        })
    })
}

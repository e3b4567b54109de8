use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::Display;
use std::hash::Hash;
use std::rc::Rc;

use crate::take::element_count;
use crate::{
    group, sort, without, BoxPull, Concat, Cursor, Distinct, Filter, FlatMap, Group, IterSource,
    Map, OfClass, Pull, Repeat, Result, SeqError, Skip, SliceSource, Take,
};

type Factory<'a, T> = dyn Fn() -> BoxPull<'a, T> + 'a;

/// A lazy, restartable sequence of `T`.
///
/// A `Sequence` does not hold elements, it holds a way to start a traversal.
/// Every call to [`iter`](Sequence::iter) builds an independent [`Cursor`];
/// chain methods such as [`filter`](Sequence::filter) or
/// [`take`](Sequence::take) only wrap that factory and never read an element.
/// Work happens when a cursor, or a terminal method like
/// [`to_list`](Sequence::to_list), starts pulling.
///
/// Cloning is cheap: clones share the same factory.
///
/// ```
/// use lazy_sequence::Sequence;
///
/// let words = Sequence::create(["Pear", "Apple", "Pear", "Banana"]);
/// let picked = words.distinct().filter(|w| w.contains('a')).to_list();
/// assert_eq!(picked, vec!["Pear", "Banana"]);
/// ```
pub struct Sequence<'a, T> {
    factory: Rc<Factory<'a, T>>,
}

impl<'a, T> Clone for Sequence<'a, T> {
    fn clone(&self) -> Self {
        Sequence {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Builds a sequence from a factory of [`Pull`] sources. The factory is
    /// called once per traversal.
    pub fn new<P, F>(factory: F) -> Self
    where
        F: Fn() -> P + 'a,
        P: Pull<Item = T> + 'a,
    {
        Sequence {
            factory: Rc::new(move || Box::new(factory()) as BoxPull<'a, T>),
        }
    }

    /// Builds a sequence from a factory of std iterables.
    pub fn from_fn<I, F>(factory: F) -> Self
    where
        F: Fn() -> I + 'a,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Sequence::new(move || IterSource::new(factory().into_iter()))
    }

    /// Wraps an existing cursor. The first traversal continues where the
    /// cursor stands; every later traversal is empty.
    pub fn from_cursor(cursor: Cursor<'a, T>) -> Self {
        let cursor = RefCell::new(Some(cursor));
        Sequence::from_fn(move || cursor.take().into_iter().flatten())
    }

    pub fn empty() -> Self {
        Sequence::from_fn(std::iter::empty)
    }

    /// Starts a new traversal.
    pub fn iter(&self) -> Cursor<'a, T> {
        Cursor::new(self.source())
    }

    pub(crate) fn source(&self) -> BoxPull<'a, T> {
        (self.factory)()
    }

    pub fn filter<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: Fn(&T) -> bool + 'a,
    {
        let upstream = self.clone();
        let predicate = Rc::new(predicate);
        Sequence::new(move || Filter::new(upstream.source(), Rc::clone(&predicate)))
    }

    pub fn map<B, F>(&self, map_fn: F) -> Sequence<'a, B>
    where
        B: 'a,
        F: Fn(T) -> B + 'a,
    {
        let upstream = self.clone();
        let map_fn = Rc::new(map_fn);
        Sequence::new(move || Map::new(upstream.source(), Rc::clone(&map_fn)))
    }

    /// Maps every element to a sequence and concatenates the results.
    pub fn flat_map<R, F>(&self, map_fn: F) -> Sequence<'a, R>
    where
        R: 'a,
        F: Fn(T) -> Sequence<'a, R> + 'a,
    {
        let upstream = self.clone();
        let map_fn = Rc::new(map_fn);
        Sequence::new(move || FlatMap::new(upstream.source(), Rc::clone(&map_fn)))
    }

    /// Re-types every element through an infallible conversion.
    pub fn cast<U>(&self) -> Sequence<'a, U>
    where
        T: Into<U>,
        U: 'a,
    {
        self.map(Into::into)
    }

    /// Keeps only the elements that convert to `U`, converted.
    pub fn of_class<U>(&self) -> Sequence<'a, U>
    where
        T: TryInto<U>,
        U: 'a,
    {
        let upstream = self.clone();
        Sequence::new(move || OfClass::new(upstream.source()))
    }

    /// Yields all of `self`, then all of `other`.
    pub fn concat(&self, other: &Sequence<'a, T>) -> Sequence<'a, T> {
        let upstream = self.clone();
        let other = other.clone();
        Sequence::new(move || Concat::new(upstream.source(), other.clone()))
    }

    /// Yields at most `n` elements. Fails if `n` is negative.
    pub fn take<N>(&self, n: N) -> Result<Sequence<'a, T>>
    where
        N: TryInto<usize> + Display + Copy,
    {
        let count = element_count(n, "take")?;
        let upstream = self.clone();
        Ok(Sequence::new(move || Take::new(upstream.source(), count)))
    }

    /// Same as [`take`](Sequence::take).
    pub fn limit<N>(&self, n: N) -> Result<Sequence<'a, T>>
    where
        N: TryInto<usize> + Display + Copy,
    {
        self.take(n)
    }

    /// Drops the first `n` elements. Fails if `n` is negative.
    pub fn skip<N>(&self, n: N) -> Result<Sequence<'a, T>>
    where
        N: TryInto<usize> + Display + Copy,
    {
        let count = element_count(n, "skip")?;
        let upstream = self.clone();
        Ok(Sequence::new(move || Skip::new(upstream.source(), count)))
    }

    /// Stable sort with a comparator. Finite sequences only.
    pub fn sort_by<C>(&self, compare: C) -> Sequence<'a, T>
    where
        C: Fn(&T, &T) -> Ordering + 'a,
    {
        sort::sorted_with(self, move |items: &mut Vec<T>| items.sort_by(&compare))
    }

    /// Stable ascending sort on a derived key. Finite sequences only.
    pub fn sort_by_key<K, F>(&self, key_fn: F) -> Sequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        sort::sorted_with(self, move |items: &mut Vec<T>| items.sort_by_key(&key_fn))
    }

    /// Stable descending sort on a derived key. Finite sequences only.
    pub fn sort_by_key_descending<K, F>(&self, key_fn: F) -> Sequence<'a, T>
    where
        K: Ord,
        F: Fn(&T) -> K + 'a,
    {
        sort::sorted_with(self, move |items: &mut Vec<T>| {
            items.sort_by(|left, right| key_fn(right).cmp(&key_fn(left)))
        })
    }
}

impl<'a, T: Clone + 'a> Sequence<'a, T> {
    /// Builds a sequence over a fixed collection. The elements are stored once
    /// and cloned out on each traversal.
    pub fn create<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let data: Rc<[T]> = items.into_iter().collect();
        Sequence::new(move || SliceSource::new(Rc::clone(&data)))
    }

    /// Same as [`create`](Sequence::create).
    pub fn of<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Sequence::create(items)
    }

    /// Like [`create`](Sequence::create), but for a backing collection that
    /// may be missing.
    pub fn try_create<I>(items: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        items
            .map(Self::create)
            .ok_or_else(|| SeqError::invalid_argument("backing collection is absent"))
    }

    pub fn singleton(item: T) -> Self {
        Sequence::from_fn(move || std::iter::once(item.clone()))
    }

    /// An unbounded sequence repeating `item`.
    pub fn repeat(item: T) -> Self {
        Sequence::new(move || Repeat::new(item.clone()))
    }

    /// Partitions the elements by `key_fn`. Finite sequences only.
    pub fn group_by<K, F>(&self, key_fn: F) -> Sequence<'a, Group<'a, K, T>>
    where
        K: Eq + Hash + 'a,
        F: Fn(&T) -> K + 'a,
    {
        group::group_by(self, key_fn)
    }
}

impl<'a, T: Eq + Hash + 'a> Sequence<'a, T> {
    pub fn distinct(&self) -> Sequence<'a, T>
    where
        T: Clone,
    {
        let upstream = self.clone();
        Sequence::new(move || Distinct::new(upstream.source()))
    }

    /// Drops every element that also occurs in `excluded`, which must be
    /// finite. `self` may be unbounded.
    pub fn without(&self, excluded: &Sequence<'a, T>) -> Sequence<'a, T> {
        without::without(self, excluded)
    }
}

impl<'a, T: Clone + 'a> FromIterator<T> for Sequence<'a, T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::create(iter)
    }
}

impl<'a, 's, T: 'a> IntoIterator for &'s Sequence<'a, T> {
    type Item = T;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Cursor<'a, T> {
        self.iter()
    }
}

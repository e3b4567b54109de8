use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use log::debug;

use crate::{Deferred, Filter, Sequence};

/// Lazily filters `primary`, dropping every element that also occurs in
/// `excluded`. `excluded` is drained into a set on the first pull of each
/// traversal and must therefore be finite; `primary` may be unbounded.
pub(crate) fn without<'a, T>(
    primary: &Sequence<'a, T>,
    excluded: &Sequence<'a, T>,
) -> Sequence<'a, T>
where
    T: Eq + Hash + 'a,
{
    let primary = primary.clone();
    let excluded = excluded.clone();

    Sequence::new(move || {
        let primary = primary.clone();
        let excluded = excluded.clone();

        Deferred::new(move || {
            let members: HashSet<T> = excluded.to_set();
            debug!("excluding {} distinct elements", members.len());
            Filter::new(
                primary.source(),
                Rc::new(move |item: &T| !members.contains(item)),
            )
        })
    })
}

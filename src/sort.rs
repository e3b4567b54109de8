use std::rc::Rc;

use log::debug;

use crate::{Deferred, IterSource, Sequence};

/// Materializes `upstream` on the first pull of each traversal, sorts it with
/// `sort`, then streams the result. `sort` is expected to be stable.
pub(crate) fn sorted_with<'a, T, S>(upstream: &Sequence<'a, T>, sort: S) -> Sequence<'a, T>
where
    T: 'a,
    S: Fn(&mut Vec<T>) + 'a,
{
    let upstream = upstream.clone();
    let sort = Rc::new(sort);

    Sequence::new(move || {
        let upstream = upstream.clone();
        let sort = Rc::clone(&sort);

        Deferred::new(move || {
            let mut items = upstream.to_list();
            debug!("sorting {} materialized elements", items.len());
            sort(&mut items);
            IterSource::new(items.into_iter())
        })
    })
}

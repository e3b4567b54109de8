use crate::Pull;

/// A source whose real upstream is only built on the first pull.
///
/// Eager operations (sorting, grouping, `without`) drain another sequence
/// before they can yield anything. Wrapping that work in `Deferred` keeps
/// both sequence construction and cursor creation free of element reads.
pub struct Deferred<F, P> {
    build: Option<F>,
    ready: Option<P>,
}

impl<F, P> Deferred<F, P>
where
    F: FnOnce() -> P,
    P: Pull,
{
    pub fn new(build: F) -> Self {
        Deferred {
            build: Some(build),
            ready: None,
        }
    }
}

impl<F, P> Pull for Deferred<F, P>
where
    F: FnOnce() -> P,
    P: Pull,
{
    type Item = P::Item;

    fn pull(&mut self) -> Option<P::Item> {
        if let Some(build) = self.build.take() {
            self.ready = Some(build());
        }

        self.ready.as_mut()?.pull()
    }
}

use std::collections::HashSet;
use std::hash::Hash;

use crate::Pull;

/// A source that yields each distinct upstream element once, on first sight.
///
/// Only already yielded elements are remembered, so it stays lazy over an
/// unbounded upstream as long as something downstream bounds the traversal.
pub struct Distinct<I>
where
    I: Pull,
{
    source: I,
    seen: HashSet<I::Item>,
}

impl<I> Distinct<I>
where
    I: Pull,
{
    pub(crate) fn new(source: I) -> Self {
        Distinct {
            source,
            seen: HashSet::new(),
        }
    }
}

impl<I> Pull for Distinct<I>
where
    I: Pull,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        while let Some(item) = self.source.pull() {
            if !self.seen.contains(&item) {
                self.seen.insert(item.clone());
                return Some(item);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::Sequence;

    const FRUITS: [&str; 6] = ["Pear", "Apple", "Banana", "Pear", "Banana", "Pineapple"];

    #[test]
    fn distinct_of_empty_is_empty() {
        assert!(Sequence::<&str>::empty().distinct().to_list().is_empty());
    }

    #[test]
    fn distinct_filters_out_duplicates_keeping_first_order() {
        let distinct = Sequence::create(FRUITS).distinct().to_list();
        assert_eq!(distinct, vec!["Pear", "Apple", "Banana", "Pineapple"]);
    }

    #[test]
    fn distinct_works_on_an_unbounded_sequence() -> anyhow::Result<()> {
        let endless = Sequence::create(FRUITS).concat(&Sequence::repeat("Grape"));
        let distinct = endless.distinct().take(4)?.to_list();
        assert_eq!(distinct, vec!["Pear", "Apple", "Banana", "Pineapple"]);
        Ok(())
    }

    #[test]
    fn distinct_keeps_one_absent_value() {
        let values = Sequence::create([Some(1), None, Some(1), None, Some(2)]);
        assert_eq!(values.distinct().to_list(), vec![Some(1), None, Some(2)]);
    }

    #[test]
    fn each_traversal_starts_with_an_empty_seen_set() {
        let distinct = Sequence::create([3, 3, 4]).distinct();
        assert_eq!(distinct.to_list(), vec![3, 4]);
        assert_eq!(distinct.to_list(), vec![3, 4]);
    }
}

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;

use crate::{FromSequence, Pull, Sequence};

/// Consumers that drain a sequence, fully or up to the first match, into a
/// plain value. The draining ones never return on an unbounded sequence.
impl<'a, T: 'a> Sequence<'a, T> {
    /// Drains the sequence into any [`FromSequence`] container.
    pub fn collect<B>(&self) -> B
    where
        B: FromSequence<T>,
    {
        B::from_seq(self)
    }

    pub fn to_list(&self) -> Vec<T> {
        self.collect()
    }

    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash,
    {
        self.collect()
    }

    /// Maps each element by its derived key. Later elements win on equal keys.
    pub fn to_map<K, F>(&self, key_fn: F) -> HashMap<K, T>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.to_map_with(key_fn, |item| item)
    }

    /// Maps each derived key to a derived value. Later elements win on equal keys.
    pub fn to_map_with<K, V, F, G>(&self, key_fn: F, value_fn: G) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: Fn(&T) -> K,
        G: Fn(T) -> V,
    {
        let mut source = self.source();
        let mut map = HashMap::new();

        while let Some(item) = source.pull() {
            map.insert(key_fn(&item), value_fn(item));
        }

        map
    }

    pub fn first(&self) -> Option<T> {
        self.source().pull()
    }

    pub fn last(&self) -> Option<T> {
        let mut source = self.source();
        let mut last = None;

        while let Some(item) = source.pull() {
            last = Some(item);
        }

        last
    }

    pub fn length(&self) -> usize {
        let mut source = self.source();
        let mut length = 0;

        while source.pull().is_some() {
            length += 1;
        }

        length
    }

    /// Returns `true` as soon as an element matches. Stops pulling there, so
    /// it terminates on an unbounded sequence holding a match.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        let mut source = self.source();

        while let Some(item) = source.pull() {
            if predicate(&item) {
                return true;
            }
        }

        false
    }

    /// Same as [`any`](Sequence::any).
    pub fn some<P>(&self, predicate: P) -> bool
    where
        P: Fn(&T) -> bool,
    {
        self.any(predicate)
    }

    pub fn join(&self, delimiter: &str) -> String
    where
        T: Display,
    {
        let mut source = self.source();
        let mut joined = String::new();

        if let Some(item) = source.pull() {
            joined.push_str(&item.to_string());
        }
        while let Some(item) = source.pull() {
            joined.push_str(delimiter);
            joined.push_str(&item.to_string());
        }

        joined
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::test_models::{basket, Fruit};
    use crate::Sequence;

    fn is_pear(fruit: &Fruit) -> bool {
        fruit.name() == Some("pear")
    }

    #[test]
    fn any_finds_a_pear() {
        let fruits = basket([
            Fruit::named("apple"),
            Fruit::named("pear"),
            Fruit::named("pineapple"),
        ]);
        assert!(fruits.any(is_pear));
        assert!(fruits.some(is_pear));
    }

    #[test]
    fn any_without_a_pear_is_false() {
        let fruits = basket([Fruit::named("apple"), Fruit::named("banana")]);
        assert!(!fruits.any(is_pear));
        assert!(!fruits.some(is_pear));
    }

    #[test]
    fn any_terminates_on_an_unbounded_sequence_with_a_match() {
        let pears = Sequence::repeat(Fruit::named("pear"));
        assert!(pears.any(is_pear));
        assert!(pears.some(is_pear));
    }

    #[test]
    fn any_can_look_for_absent_values() {
        let strings = Sequence::create([Some("abc"), None, Some("def")]);
        assert!(strings.any(Option::is_none));
        assert!(strings.some(Option::is_none));
    }

    #[test]
    fn first_of_empty_is_none() {
        assert_eq!(Sequence::<&str>::empty().first(), None);
    }

    #[test]
    fn first_returns_the_first_element() {
        assert_eq!(Sequence::create(["abc", "def"]).first(), Some("abc"));
    }

    #[test]
    fn first_works_on_an_unbounded_sequence() {
        assert_eq!(Sequence::repeat("abc").first(), Some("abc"));
    }

    #[test]
    fn last_of_empty_is_none() {
        assert_eq!(Sequence::<&str>::empty().last(), None);
    }

    #[test]
    fn last_returns_the_last_element() {
        let band = Sequence::create(["Johnny", "Freddy", "Ringo"]);
        assert_eq!(band.last(), Some("Ringo"));
    }

    #[test]
    fn length_counts_elements() {
        assert_eq!(Sequence::<&str>::empty().length(), 0);
        let numbers = Sequence::create(["one", "two", "three", "four", "five"]);
        assert_eq!(numbers.length(), 5);
    }

    #[test]
    fn join_of_empty_is_empty() {
        assert!(Sequence::<&str>::empty().join(",").is_empty());
    }

    #[test]
    fn join_of_singleton_has_no_delimiter() {
        assert_eq!(Sequence::singleton("xyz").join("."), "xyz");
    }

    #[test]
    fn join_supports_an_empty_delimiter() {
        assert_eq!(Sequence::of(["ab", "cd", "efg"]).join(""), "abcdefg");
    }

    #[test]
    fn join_keeps_empty_strings() {
        assert_eq!(Sequence::of(["", "", "A", ""]).join(":"), "::A:");
    }

    #[test]
    fn to_map_of_empty_is_empty() {
        assert!(Sequence::<Fruit>::empty().to_map(Fruit::name_key).is_empty());
    }

    #[test]
    fn to_map_keys_fruits_by_name() {
        let map = basket([
            Fruit::named("apple"),
            Fruit::named("pear"),
            Fruit::named("banana"),
        ])
        .to_map(Fruit::name_key);

        assert_eq!(map.len(), 3);
        assert_eq!(map.get(&Some("apple".to_string())), Some(&Fruit::named("apple")));
        assert_eq!(map.get(&Some("pear".to_string())), Some(&Fruit::named("pear")));
        assert_eq!(map.get(&Some("banana".to_string())), Some(&Fruit::named("banana")));
    }

    #[test]
    fn to_map_with_derives_values() {
        let map = basket([
            Fruit::named("apple"),
            Fruit::named("pear"),
            Fruit::named("banana"),
        ])
        .to_map_with(Fruit::name_key, |fruit| fruit.name().map_or(0, str::len));

        assert_eq!(map.len(), 3);
        assert_eq!(map[&Some("apple".to_string())], 5);
        assert_eq!(map[&Some("pear".to_string())], 4);
        assert_eq!(map[&Some("banana".to_string())], 6);
    }

    #[test]
    fn to_map_lets_the_last_duplicate_win() {
        let map = Sequence::create([("a", 1), ("b", 2), ("a", 3)]).to_map_with(|p| p.0, |p| p.1);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
    }

    #[test]
    fn to_list_round_trips_a_collection() {
        let original = vec!["c", "a", "b", "a"];
        assert_eq!(Sequence::create(original.clone()).to_list(), original);
        assert_eq!(
            Sequence::create(original).to_set(),
            HashSet::from(["a", "b", "c"])
        );
    }
}

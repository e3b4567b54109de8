//! Fruit fixtures shared by the unit tests.

use crate::Sequence;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Apple {
    id: u32,
}

impl Apple {
    pub fn new(id: u32) -> Self {
        Apple { id }
    }
}

/// A fruit is either an apple or some other fruit that may lack a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fruit {
    Apple(Apple),
    Named(Option<String>),
}

impl Fruit {
    pub fn named(name: &str) -> Self {
        Fruit::Named(Some(name.to_string()))
    }

    pub fn nameless() -> Self {
        Fruit::Named(None)
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Fruit::Apple(_) => Some("apple"),
            Fruit::Named(name) => name.as_deref(),
        }
    }

    pub fn name_key(&self) -> Option<String> {
        self.name().map(str::to_string)
    }

    pub fn name_owned(self) -> Option<String> {
        self.name_key()
    }

    pub fn starts_with_p(&self) -> bool {
        self.name().is_some_and(|name| name.starts_with('p'))
    }
}

impl From<Apple> for Fruit {
    fn from(apple: Apple) -> Self {
        Fruit::Apple(apple)
    }
}

impl TryFrom<Fruit> for Apple {
    type Error = Fruit;

    fn try_from(fruit: Fruit) -> Result<Self, Fruit> {
        match fruit {
            Fruit::Apple(apple) => Ok(apple),
            other => Err(other),
        }
    }
}

pub fn fruit_list() -> Vec<Fruit> {
    ["banana", "apple", "pear", "pineapple", "strawberry", "grapes", "kiwi"]
        .into_iter()
        .map(Fruit::named)
        .collect()
}

pub fn basket(fruits: impl IntoIterator<Item = Fruit>) -> Sequence<'static, Fruit> {
    Sequence::create(fruits)
}

use std::fmt::{self, Display};
use std::str::FromStr;

use rill_utils::Identifier;
use smallvec::SmallVec;

/// A block type plus its named string properties.
///
/// Properties are kept sorted by key so two states holding the same values
/// compare equal regardless of the order they were set in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockState {
    block: Identifier,
    properties: SmallVec<[(&'static str, String); 2]>,
}

impl BlockState {
    /// Creates a state of `block` with no properties.
    #[must_use]
    pub fn new(block: Identifier) -> Self {
        Self {
            block,
            properties: SmallVec::new(),
        }
    }

    /// The block type of this state.
    #[must_use]
    pub fn block(&self) -> &Identifier {
        &self.block
    }

    /// Returns true if this state belongs to `block`.
    #[must_use]
    pub fn is_of(&self, block: &Identifier) -> bool {
        self.block == *block
    }

    /// Raw value of a property.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parses a property value. Missing and malformed values both yield `None`.
    #[must_use]
    pub fn try_get_value<T: FromStr>(&self, key: &str) -> Option<T> {
        self.property(key).and_then(|value| value.parse().ok())
    }

    /// Returns a copy of this state with `key` set to `value`.
    #[must_use]
    pub fn with_property(mut self, key: &'static str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.properties.binary_search_by(|(k, _)| (*k).cmp(key)) {
            Ok(index) => self.properties[index].1 = value,
            Err(index) => self.properties.insert(index, (key, value)),
        }
        self
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.properties.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if self.properties.is_empty() {
            return Ok(());
        }
        write!(f, "[")?;
        for (i, (key, value)) in self.properties().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{key}={value}")?;
        }
        write!(f, "]")
    }
}

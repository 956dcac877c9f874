//! Variable bindings used to resolve symbolic cells

use hashbrown::HashMap;

/// Mapping from single-character variable names to integer values
///
/// A binding is grown by the caller and read during evaluation. Re-inserting
/// a name replaces the previous value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Binding {
    values: HashMap<char, i32>,
}

impl Binding {
    /// Create an empty binding
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the previous value if any
    pub fn insert(&mut self, name: char, value: i32) -> Option<i32> {
        self.values.insert(name, value)
    }

    /// Builder-style insert
    pub fn with(mut self, name: char, value: i32) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up the value bound to `name`
    pub fn get(&self, name: char) -> Option<i32> {
        self.values.get(&name).copied()
    }

    /// Check whether `name` is bound
    pub fn contains(&self, name: char) -> bool {
        self.values.contains_key(&name)
    }

    /// Remove a single binding
    pub fn remove(&mut self, name: char) -> Option<i32> {
        self.values.remove(&name)
    }

    /// Remove every binding
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether no variable is bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (char, i32)> + '_ {
        self.values.iter().map(|(&name, &value)| (name, value))
    }
}

impl FromIterator<(char, i32)> for Binding {
    fn from_iter<I: IntoIterator<Item = (char, i32)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<(char, i32)> for Binding {
    fn extend<I: IntoIterator<Item = (char, i32)>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}

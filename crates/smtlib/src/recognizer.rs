//! Recognizers map generated variable names back to typed context positions.
//!
//! The printer emits one [`VarEntry`] per declared variable and merges them by
//! ordered alternation. The decoder only needs this artifact to interpret the
//! names a solver reports.

/// One generated name with the sort and position it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarEntry<S> {
    pub name: String,
    pub sort: S,
    pub position: usize,
}

/// Ordered alternation over variable entries; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognizer<S> {
    entries: Vec<VarEntry<S>>,
}

impl<S> Recognizer<S> {
    /// Recognizer that matches nothing.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Recognizer for exactly one name.
    pub fn single(name: impl Into<String>, sort: S, position: usize) -> Self {
        Self {
            entries: vec![VarEntry {
                name: name.into(),
                sort,
                position,
            }],
        }
    }

    /// Try `self` first, then `other`.
    pub fn or(mut self, other: Self) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Entry whose name is exactly `name`.
    pub fn recognize(&self, name: &str) -> Option<&VarEntry<S>> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Generated name of the variable at `position`.
    pub fn name_of(&self, position: usize) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.position == position)
            .map(|entry| entry.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &VarEntry<S>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S> Default for Recognizer<S> {
    fn default() -> Self {
        Self::empty()
    }
}

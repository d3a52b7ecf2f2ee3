//! Scoped fresh-name generation for the printer.
//!
//! [`NameEnv`] maps each in-scope context position to its generated name. Names
//! come from a counter that only moves forward, so a name is never handed out
//! twice within one print, even after the variable that owned it goes out of
//! scope.

/// Prefix of generated variable names.
pub const NAME_PREFIX: &str = "x";

/// Format the `index`-th generated name.
pub fn fresh_name(index: usize) -> String {
    format!("{NAME_PREFIX}{index}")
}

/// Active name bindings plus the fresh-name counter.
///
/// Owned by exactly one print traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEnv {
    // names[p] is the name of the variable at context position p
    names: Vec<String>,
    next: usize,
}

impl NameEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the next context position to a fresh name and return it.
    pub fn push(&mut self) -> String {
        let name = fresh_name(self.next);
        self.next += 1;
        tracing::trace!(position = self.names.len(), name = %name, "Allocated variable name");
        self.names.push(name.clone());
        name
    }

    /// Drop the most recent binding. The counter is not rewound.
    pub fn pop(&mut self) -> Option<String> {
        self.names.pop()
    }

    /// Name bound to `position`, if it is in scope.
    pub fn name(&self, position: usize) -> Option<&str> {
        self.names.get(position).map(String::as_str)
    }

    /// Number of bindings in scope.
    pub fn depth(&self) -> usize {
        self.names.len()
    }

    /// Index the next fresh name will use.
    pub fn next_index(&self) -> usize {
        self.next
    }

    pub fn bindings(&self) -> &[String] {
        &self.names
    }
}

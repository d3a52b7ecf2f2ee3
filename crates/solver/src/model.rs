use typed_smt_smtlib::Theory;

/// One variable's value in a model.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment<T: Theory> {
    /// Generated name the solver reported.
    pub name: String,
    pub sort: T::Sort,
    pub value: T::Value,
}

/// A model from the solver's `(get-model)` reply.
///
/// Holds one assignment per variable of the context snapshot, in declaration
/// order, so the assignment at index `i` is the variable at position `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Model<T: Theory> {
    assignments: Vec<Assignment<T>>,
}

impl<T: Theory> Model<T> {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self {
            assignments: Vec::new(),
        }
    }

    /// Create a model from assignments in declaration order.
    pub fn with_assignments(assignments: Vec<Assignment<T>>) -> Self {
        Self { assignments }
    }

    /// Look up a variable's value by its generated name.
    pub fn get(&self, name: &str) -> Option<&T::Value> {
        self.assignments
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Value of the variable at context `position`.
    pub fn value_at(&self, position: usize) -> Option<&T::Value> {
        self.assignments.get(position).map(|a| &a.value)
    }

    /// Values in declaration order.
    pub fn values(&self) -> impl Iterator<Item = &T::Value> {
        self.assignments.iter().map(|a| &a.value)
    }

    pub fn assignments(&self) -> &[Assignment<T>] {
        &self.assignments
    }

    /// Return the number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Return whether the model is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

impl<T: Theory> Default for Model<T> {
    fn default() -> Self {
        Self::new()
    }
}

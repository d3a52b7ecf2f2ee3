/// Variable contexts and identifier signatures.
use std::fmt;

/// Ordered sorts of the variables in scope, in declaration order.
///
/// Position `i` is the `i`-th declared (or bound) variable. Contexts only grow:
/// a declaration appends, and a quantifier works in an [`extended`] copy that
/// is dropped when its body is done.
///
/// [`extended`]: Context::extended
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context<S> {
    sorts: Vec<S>,
}

impl<S> Context<S> {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    pub fn from_sorts(sorts: Vec<S>) -> Self {
        Self { sorts }
    }

    pub fn len(&self) -> usize {
        self.sorts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Sort of the variable at `position`, if it exists.
    pub fn get(&self, position: usize) -> Option<&S> {
        self.sorts.get(position)
    }

    pub fn sorts(&self) -> &[S] {
        &self.sorts
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.sorts.iter()
    }

    pub(crate) fn push(&mut self, sort: S) {
        self.sorts.push(sort);
    }
}

impl<S: Clone> Context<S> {
    /// A copy of this context with one more variable of sort `sort`.
    pub fn extended(&self, sort: S) -> Self {
        let mut sorts = self.sorts.clone();
        sorts.push(sort);
        Self { sorts }
    }
}

impl<S> Default for Context<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: fmt::Display> fmt::Display for Context<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, sort) in self.sorts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{sort}")?;
        }
        write!(f, "]")
    }
}

/// Argument sorts and result sort of an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature<S> {
    pub args: Vec<S>,
    pub result: S,
}

impl<S> Signature<S> {
    pub fn new(args: Vec<S>, result: S) -> Self {
        Self { args, result }
    }

    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

use std::fmt;

/// Errors raised while building terms, commands and scripts.
///
/// Sorts and identifiers are carried as their SMT-LIB text so the error type
/// does not depend on the theory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Variable position is not in the context.
    VariableOutOfRange { position: usize, len: usize },
    /// Variable's claimed sort differs from the context's sort at its position.
    VariableSortMismatch {
        position: usize,
        expected: String,
        found: String,
    },
    /// Wrong number of arguments for an identifier.
    ArityMismatch {
        ident: String,
        expected: usize,
        found: usize,
    },
    /// Argument sort differs from the identifier's signature.
    ArgumentSortMismatch {
        ident: String,
        index: usize,
        expected: String,
        found: String,
    },
    /// An asserted term or quantifier body is not boolean.
    NotBoolean { found: String },
    /// A quantifier built for one context was used in another.
    QuantifierScope { expected: usize, found: usize },
    /// `(get-model)` without an outstanding `(check-sat)`.
    GetModelWithoutCheckSat,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::VariableOutOfRange { position, len } => {
                write!(f, "variable {position} out of range for context of length {len}")
            }
            BuildError::VariableSortMismatch {
                position,
                expected,
                found,
            } => write!(
                f,
                "variable {position} has sort {expected} in context, not {found}"
            ),
            BuildError::ArityMismatch {
                ident,
                expected,
                found,
            } => write!(f, "`{ident}` expects {expected} arguments, got {found}"),
            BuildError::ArgumentSortMismatch {
                ident,
                index,
                expected,
                found,
            } => write!(
                f,
                "argument {index} of `{ident}` must have sort {expected}, got {found}"
            ),
            BuildError::NotBoolean { found } => {
                write!(f, "expected a boolean term, got sort {found}")
            }
            BuildError::QuantifierScope { expected, found } => write!(
                f,
                "quantifier binds position {found} but is used in a context of length {expected}"
            ),
            BuildError::GetModelWithoutCheckSat => {
                write!(f, "(get-model) must directly follow an outstanding (check-sat)")
            }
        }
    }
}

impl std::error::Error for BuildError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = BuildError::VariableOutOfRange {
            position: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "variable 3 out of range for context of length 2"
        );
    }

    #[test]
    fn display_arity() {
        let err = BuildError::ArityMismatch {
            ident: "<=".into(),
            expected: 2,
            found: 1,
        };
        assert_eq!(err.to_string(), "`<=` expects 2 arguments, got 1");
    }

    #[test]
    fn display_get_model() {
        assert_eq!(
            BuildError::GetModelWithoutCheckSat.to_string(),
            "(get-model) must directly follow an outstanding (check-sat)"
        );
    }

    #[test]
    fn error_equality() {
        assert_eq!(
            BuildError::GetModelWithoutCheckSat,
            BuildError::GetModelWithoutCheckSat
        );
        assert_ne!(
            BuildError::GetModelWithoutCheckSat,
            BuildError::NotBoolean {
                found: "Int".into()
            }
        );
    }
}

//! The background-theory contract.
//!
//! A theory bundles the sorts, literals, identifiers and model values that
//! terms are built from. Everything else in this crate (and the decoder in the
//! solver crate) is generic over [`Theory`] and assumes nothing beyond it.

use std::fmt;

use crate::context::Signature;

/// A pluggable background theory.
///
/// Implementations are usually zero-sized marker types; all operations are
/// associated functions.
pub trait Theory: Clone + fmt::Debug + PartialEq + 'static {
    /// Sorts of the theory. `Display` must produce the SMT-LIB sort text.
    type Sort: Clone + Eq + fmt::Debug + fmt::Display;
    /// Literal constants that may appear inside terms.
    type Literal: Clone + fmt::Debug + PartialEq;
    /// Function symbols, each with a fixed [`Signature`].
    type Ident: Clone + fmt::Debug + PartialEq;
    /// Concrete values reported in models.
    type Value: Clone + fmt::Debug + PartialEq + fmt::Display;

    /// Human-readable theory name, used in error messages.
    const NAME: &'static str;

    /// The designated boolean sort (asserted terms and quantifier bodies).
    fn bool_sort() -> Self::Sort;

    /// Sort of a literal.
    fn literal_sort(literal: &Self::Literal) -> Self::Sort;

    /// SMT-LIB text of a literal.
    fn literal_text(literal: &Self::Literal) -> String;

    /// Argument sorts and result sort of an identifier.
    fn signature(ident: &Self::Ident) -> Signature<Self::Sort>;

    /// SMT-LIB text of an identifier.
    fn ident_text(ident: &Self::Ident) -> String;

    /// Parse a model value of the given sort from its SMT-LIB text.
    ///
    /// Theories that do not define a value grammar keep this default, which
    /// always reports [`ValueError::Unsupported`].
    fn parse_value(sort: &Self::Sort, text: &str) -> Result<Self::Value, ValueError> {
        let _ = (sort, text);
        Err(ValueError::Unsupported)
    }
}

/// Failure of a theory's value parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// The text is not a value of the requested sort.
    Malformed(String),
    /// The theory has no value grammar; model decoding is not available.
    Unsupported,
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueError::Malformed(reason) => write!(f, "malformed value: {reason}"),
            ValueError::Unsupported => write!(f, "theory defines no value grammar"),
        }
    }
}

impl std::error::Error for ValueError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theories::arith::{Arith, ArithSort};

    #[derive(Debug, Clone, PartialEq)]
    struct Opaque;

    impl Theory for Opaque {
        type Sort = &'static str;
        type Literal = ();
        type Ident = ();
        type Value = String;

        const NAME: &'static str = "opaque";

        fn bool_sort() -> Self::Sort {
            "Bool"
        }

        fn literal_sort(_: &()) -> Self::Sort {
            "Bool"
        }

        fn literal_text(_: &()) -> String {
            "true".to_string()
        }

        fn signature(_: &()) -> Signature<Self::Sort> {
            Signature::new(vec![], "Bool")
        }

        fn ident_text(_: &()) -> String {
            "p".to_string()
        }
    }

    #[test]
    fn default_value_parser_is_unsupported() {
        assert_eq!(Opaque::parse_value(&"U", "u!0"), Err(ValueError::Unsupported));
    }

    #[test]
    fn arith_overrides_value_parser() {
        assert!(Arith::parse_value(&ArithSort::Int, "3").is_ok());
    }

    #[test]
    fn value_error_display() {
        assert_eq!(
            ValueError::Malformed("x".into()).to_string(),
            "malformed value: x"
        );
        assert_eq!(
            ValueError::Unsupported.to_string(),
            "theory defines no value grammar"
        );
    }
}

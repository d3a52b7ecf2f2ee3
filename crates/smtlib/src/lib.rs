//! # typed-smt-smtlib
//!
//! Checked SMT-LIB scripts over a pluggable background theory.
//!
//! Terms, commands and scripts are validated when they are built: variables
//! must exist in the context with the claimed sort, applications must match
//! their identifier's signature, and `(get-model)` must follow an outstanding
//! `(check-sat)`. A validated script can then be printed to SMT-LIB text. The
//! printer generates fresh `x<N>` names for every declared or bound variable
//! and returns a [`Recognizer`] that maps those names back to typed context
//! positions when the solver's reply is decoded.
//!
//! ## Usage
//!
//! ```
//! use typed_smt_smtlib::script::Script;
//! use typed_smt_smtlib::term::Term;
//! use typed_smt_smtlib::theories::arith::{Arith, ArithIdent, ArithSort, Num};
//!
//! let mut script = Script::<Arith>::new();
//! let x = script.declare_const(ArithSort::Int).unwrap();
//! let y = script.declare_const(ArithSort::Int).unwrap();
//! let lhs = Term::app(ArithIdent::Sub(Num::Int), vec![x.clone(), y.clone()]).unwrap();
//! let rhs = Term::app(ArithIdent::Add(Num::Int), vec![x, y]).unwrap();
//! script.assert(Term::app(ArithIdent::Le(Num::Int), vec![lhs, rhs]).unwrap()).unwrap();
//! script.check_sat().unwrap();
//! script.get_model().unwrap();
//!
//! let printed = script.print().unwrap();
//! assert_eq!(printed.text.lines().next(), Some("(declare-const x0 Int)"));
//! assert_eq!(printed.recognizer.name_of(1), Some("x1"));
//! ```

pub mod command;
pub mod context;
pub mod error;
pub mod formatter;
pub mod names;
pub mod recognizer;
pub mod script;
pub mod sexp;
pub mod term;
pub mod theories;
pub mod theory;

pub use command::{Command, OutputContext, OutputType, ScriptState};
pub use context::{Context, Signature};
pub use error::BuildError;
pub use formatter::Printed;
pub use names::NameEnv;
pub use recognizer::{Recognizer, VarEntry};
pub use script::Script;
pub use term::{Binder, Term, TermKind};
pub use theory::{Theory, ValueError};

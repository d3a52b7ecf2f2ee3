//! # typed-smt-solver
//!
//! Runs checked SMT-LIB scripts through an external solver and decodes the
//! reply into typed results.
//!
//! The solver is spawned as a process and fed SMT-LIB2 text on stdin. Its
//! stdout is decoded against the script's output context: one
//! [`SatResult`] per `check-sat` and one [`Model`] per `get-model`, with
//! model values parsed by the script's theory.
//!
//! ## Usage
//!
//! ```no_run
//! use typed_smt_smtlib::Term;
//! use typed_smt_smtlib::Script;
//! use typed_smt_smtlib::theories::arith::{Arith, ArithIdent, ArithSort, Num, int_lit};
//! use typed_smt_solver::{CliSolver, Output, run_script};
//!
//! let mut script = Script::<Arith>::new();
//! let x = script.declare_const(ArithSort::Int).unwrap();
//! script
//!     .assert(Term::app(ArithIdent::Gt(Num::Int), vec![x, int_lit(0)]).unwrap())
//!     .unwrap();
//! script.check_sat().unwrap();
//! script.get_model().unwrap();
//!
//! let solver = CliSolver::with_default_config().unwrap();
//! let results = run_script(&solver, &script).unwrap();
//!
//! match results.first() {
//!     Some(Output::Model(model)) => println!("x0 = {:?}", model.get("x0")),
//!     other => println!("unexpected: {other:?}"),
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod result;
pub mod solver;

// Re-export primary types for ergonomic use
pub use backend::{
    ProcessOutput, SolverBackend, create_backend, create_default_backend, run_script,
};
pub use config::{Invocation, SolverConfig, SolverKind};
pub use error::{DecodeError, Error, SolverError};
pub use model::{Assignment, Model};
pub use parser::decode_results;
pub use result::{Output, Results, SatResult};
pub use solver::CliSolver;

//! Abstraction over ways of running a solver.
//!
//! [`SolverBackend`] takes SMT-LIB2 text and returns what the solver printed.
//! [`CliSolver`] implements it by spawning a process; tests plug in canned
//! replies. [`run_script`] is the whole pipeline on top of any backend:
//! print, invoke, decode.

use typed_smt_smtlib::{Script, Theory};

use crate::config::SolverKind;
use crate::error::{Error, SolverError};
use crate::parser::decode_results;
use crate::result::Results;
use crate::solver::CliSolver;

/// Everything a solver run produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    /// A run that exited zero and wrote nothing to stderr.
    pub fn success(&self) -> bool {
        self.status == Some(0) && self.stderr.trim().is_empty()
    }
}

/// Trait abstracting over different solver backends.
pub trait SolverBackend {
    /// Feed `input` to the solver and collect its output.
    ///
    /// `Err` means the solver could not be run at all. A run that failed is
    /// still `Ok`; see [`ProcessOutput::success`].
    fn invoke(&self, input: &str) -> Result<ProcessOutput, SolverError>;
}

impl SolverBackend for CliSolver {
    fn invoke(&self, input: &str) -> Result<ProcessOutput, SolverError> {
        CliSolver::invoke(self, input)
    }
}

impl<B: SolverBackend + ?Sized> SolverBackend for Box<B> {
    fn invoke(&self, input: &str) -> Result<ProcessOutput, SolverError> {
        (**self).invoke(input)
    }
}

/// Create a subprocess backend for the specified solver kind.
pub fn create_backend(kind: SolverKind) -> Result<Box<dyn SolverBackend>, SolverError> {
    tracing::debug!("Using {kind} subprocess backend");
    let solver = CliSolver::with_default_config_for(kind)?;
    Ok(Box::new(solver))
}

/// Create the default solver backend (Z3).
pub fn create_default_backend() -> Result<Box<dyn SolverBackend>, SolverError> {
    create_backend(SolverKind::default())
}

/// Print `script`, run it on `backend` and decode the reply.
///
/// Results come back most recent first, one per `check-sat` and `get-model`.
pub fn run_script<T, B>(backend: &B, script: &Script<T>) -> Result<Results<T>, Error>
where
    T: Theory,
    B: SolverBackend + ?Sized,
{
    let printed = script.print()?;
    let output = backend.invoke(&printed.text)?;

    if !output.success() {
        tracing::warn!(
            theory = T::NAME,
            status = ?output.status,
            stderr = %output.stderr.trim(),
            "Solver run failed"
        );
        return Err(SolverError::Failed {
            status: output.status,
            stderr: output.stderr,
        }
        .into());
    }

    let results = decode_results::<T>(&printed.recognizer, script.outputs(), &output.stdout)
        .inspect_err(|e| tracing::warn!(theory = T::NAME, error = %e, "Failed to decode solver reply"))?;
    tracing::debug!(theory = T::NAME, results = results.len(), "Decoded solver reply");
    Ok(results)
}

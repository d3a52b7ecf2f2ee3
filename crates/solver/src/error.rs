use std::fmt;
use std::path::PathBuf;

use typed_smt_smtlib::BuildError;

use crate::config::SolverKind;

/// Errors from invoking the solver process.
#[derive(Debug)]
pub enum SolverError {
    /// Solver binary not found at the specified path.
    NotFound(SolverKind, PathBuf),
    /// Process failed to start, or its pipes failed.
    ProcessError(String),
    /// Process ran but exited nonzero or wrote to stderr.
    Failed { status: Option<i32>, stderr: String },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::NotFound(kind, path) => {
                write!(f, "{kind} binary not found at: {}", path.display())
            }
            SolverError::ProcessError(msg) => write!(f, "Solver process error: {msg}"),
            SolverError::Failed { status, stderr } => {
                match status {
                    Some(code) => write!(f, "Solver exited with status {code}")?,
                    None => write!(f, "Solver terminated by signal")?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SolverError {}

impl PartialEq for SolverError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SolverError::NotFound(k1, p1), SolverError::NotFound(k2, p2)) => k1 == k2 && p1 == p2,
            (SolverError::ProcessError(a), SolverError::ProcessError(b)) => a == b,
            (
                SolverError::Failed {
                    status: s1,
                    stderr: e1,
                },
                SolverError::Failed {
                    status: s2,
                    stderr: e2,
                },
            ) => s1 == s2 && e1 == e2,
            _ => false,
        }
    }
}

/// Errors from decoding a solver reply. Each carries the offending fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token that does not fit the expected grammar.
    UnexpectedToken { expected: String, found: String },
    /// The reply ended before every slot was filled.
    UnexpectedEnd { expected: String },
    /// Reply text left over after the last slot.
    TrailingInput { rest: String },
    /// Reply lists nested past the reader's limit.
    TooDeep { limit: usize },
    /// A model names a variable the script did not declare (at that point).
    UnknownVariable { name: String },
    /// A model defines the same variable twice.
    DuplicateVariable { name: String },
    /// A model omits a variable of its context.
    MissingVariable { name: String },
    /// Reported sort differs from the declared one.
    SortMismatch {
        name: String,
        expected: String,
        found: String,
    },
    /// The theory's value parser rejected a value.
    InvalidValue {
        name: String,
        sort: String,
        text: String,
        reason: String,
    },
    /// The theory defines no value grammar, so models cannot be decoded.
    UnsupportedModel { theory: String },
}

impl DecodeError {
    /// Whether the reply was syntactically off, as opposed to well-formed but
    /// inconsistent with the script.
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            DecodeError::UnexpectedToken { .. }
                | DecodeError::UnexpectedEnd { .. }
                | DecodeError::TrailingInput { .. }
                | DecodeError::TooDeep { .. }
        )
    }

    pub fn is_sort_mismatch(&self) -> bool {
        matches!(self, DecodeError::SortMismatch { .. })
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, DecodeError::UnsupportedModel { .. })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnexpectedToken { expected, found } => {
                write!(f, "expected {expected}, found `{found}`")
            }
            DecodeError::UnexpectedEnd { expected } => {
                write!(f, "expected {expected}, found end of output")
            }
            DecodeError::TrailingInput { rest } => write!(f, "unexpected trailing output: `{rest}`"),
            DecodeError::TooDeep { limit } => {
                write!(f, "solver output nests lists deeper than {limit}")
            }
            DecodeError::UnknownVariable { name } => write!(f, "unknown variable `{name}` in model"),
            DecodeError::DuplicateVariable { name } => {
                write!(f, "variable `{name}` defined twice in model")
            }
            DecodeError::MissingVariable { name } => write!(f, "model has no value for `{name}`"),
            DecodeError::SortMismatch {
                name,
                expected,
                found,
            } => write!(f, "variable `{name}` declared as {expected} but reported as {found}"),
            DecodeError::InvalidValue {
                name,
                sort,
                text,
                reason,
            } => write!(f, "invalid {sort} value `{text}` for `{name}`: {reason}"),
            DecodeError::UnsupportedModel { theory } => {
                write!(f, "model decoding is not implemented for theory `{theory}`")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// A failed script run: which stage stopped the pipeline and why.
#[derive(Debug, PartialEq)]
pub enum Error {
    Build(BuildError),
    Decode(DecodeError),
    Solver(SolverError),
}

impl Error {
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Build(_) => "build",
            Error::Decode(_) => "decode",
            Error::Solver(_) => "solver",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Build(e) => write!(f, "{} error: {e}", self.stage()),
            Error::Decode(e) => write!(f, "{} error: {e}", self.stage()),
            Error::Solver(e) => write!(f, "{} error: {e}", self.stage()),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Build(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Solver(e) => Some(e),
        }
    }
}

impl From<BuildError> for Error {
    fn from(e: BuildError) -> Self {
        Error::Build(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<SolverError> for Error {
    fn from(e: SolverError) -> Self {
        Error::Solver(e)
    }
}

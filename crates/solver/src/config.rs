//! Where the solver lives and how one run of it is started.
//!
//! A run is a single process: an executable, its arguments, and the script
//! text on stdin. [`SolverConfig::invocation`] produces the first two.

use std::fmt;
use std::path::PathBuf;

use crate::error::SolverError;

/// SMT solvers that read SMT-LIB2 from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SolverKind {
    #[default]
    Z3,
    Cvc5,
    Yices,
}

impl SolverKind {
    /// Executable looked up on `PATH`.
    pub fn binary_name(self) -> &'static str {
        match self {
            SolverKind::Z3 => "z3",
            SolverKind::Cvc5 => "cvc5",
            SolverKind::Yices => "yices-smt2",
        }
    }

    /// Flags that make the solver read a script from stdin and answer
    /// `get-model`.
    fn stdin_flags(self) -> &'static [&'static str] {
        match self {
            SolverKind::Z3 => &["-in"],
            SolverKind::Cvc5 => &["--lang", "smt2", "--produce-models", "--incremental"],
            SolverKind::Yices => &["--incremental"],
        }
    }

    fn timeout_flag(self, timeout_ms: u64) -> String {
        match self {
            SolverKind::Z3 => format!("-t:{timeout_ms}"),
            SolverKind::Cvc5 => format!("--tlimit={timeout_ms}"),
            // whole seconds, rounded up so a short timeout never becomes 0
            SolverKind::Yices => format!("--timeout={}", timeout_ms.div_ceil(1000)),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverKind::Z3 => write!(f, "Z3"),
            SolverKind::Cvc5 => write!(f, "CVC5"),
            SolverKind::Yices => write!(f, "Yices"),
        }
    }
}

/// Executable and arguments for one solver run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Solver configuration.
///
/// The timeout is handed to the solver as a flag; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    pub kind: SolverKind,
    pub solver_path: PathBuf,
    /// Milliseconds, 0 for none.
    pub timeout_ms: u64,
    /// Passed after the stdin and timeout flags.
    pub extra_args: Vec<String>,
}

impl SolverConfig {
    pub fn new(kind: SolverKind, solver_path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            solver_path: solver_path.into(),
            timeout_ms: 0,
            extra_args: Vec::new(),
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_extra_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Find `kind`'s executable on `PATH`.
    pub fn locate(kind: SolverKind) -> Result<Self, SolverError> {
        let binary = kind.binary_name();
        let path = which::which(binary)
            .map_err(|_| SolverError::NotFound(kind, PathBuf::from(binary)))?;
        tracing::debug!(%kind, path = %path.display(), "Found solver on PATH");
        Ok(Self::new(kind, path))
    }

    /// The process to start for one run.
    ///
    /// Fails with [`SolverError::NotFound`] when the configured executable
    /// does not exist.
    pub fn invocation(&self) -> Result<Invocation, SolverError> {
        if !self.solver_path.exists() {
            return Err(SolverError::NotFound(self.kind, self.solver_path.clone()));
        }

        let mut args: Vec<String> = self
            .kind
            .stdin_flags()
            .iter()
            .map(|flag| flag.to_string())
            .collect();
        if self.timeout_ms > 0 {
            args.push(self.kind.timeout_flag(self.timeout_ms));
        }
        args.extend(self.extra_args.iter().cloned());

        Ok(Invocation {
            program: self.solver_path.clone(),
            args,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A path that exists on every machine running the tests.
    fn existing_path() -> PathBuf {
        std::env::current_exe().unwrap()
    }

    #[test]
    fn invocation_for_each_kind() {
        let path = existing_path();
        let args = |kind| SolverConfig::new(kind, &path).invocation().unwrap().args;

        assert_eq!(args(SolverKind::Z3), vec!["-in"]);
        assert_eq!(
            args(SolverKind::Cvc5),
            vec!["--lang", "smt2", "--produce-models", "--incremental"]
        );
        assert_eq!(args(SolverKind::Yices), vec!["--incremental"]);
    }

    #[test]
    fn invocation_orders_timeout_before_extra_args() {
        let path = existing_path();
        let invocation = SolverConfig::new(SolverKind::Z3, &path)
            .with_timeout(3000)
            .with_extra_args(["-v:1"])
            .invocation()
            .unwrap();
        assert_eq!(invocation.program, path);
        assert_eq!(invocation.args, vec!["-in", "-t:3000", "-v:1"]);
    }

    #[test]
    fn timeout_flags() {
        let path = existing_path();
        let last = |kind, ms| {
            SolverConfig::new(kind, &path)
                .with_timeout(ms)
                .invocation()
                .unwrap()
                .args
                .pop()
        };
        assert_eq!(last(SolverKind::Cvc5, 10_000).as_deref(), Some("--tlimit=10000"));
        assert_eq!(last(SolverKind::Yices, 60_000).as_deref(), Some("--timeout=60"));
        assert_eq!(last(SolverKind::Yices, 1).as_deref(), Some("--timeout=1"));
        // zero means no flag at all
        assert_eq!(last(SolverKind::Z3, 0).as_deref(), Some("-in"));
    }

    #[test]
    fn invocation_requires_existing_executable() {
        let config = SolverConfig::new(SolverKind::Z3, "/nonexistent/z3");
        assert_eq!(
            config.invocation().unwrap_err(),
            SolverError::NotFound(SolverKind::Z3, PathBuf::from("/nonexistent/z3"))
        );
    }

    #[test]
    fn locate_reports_binary_name() {
        // either the solver is installed or the error names its binary
        match SolverConfig::locate(SolverKind::Yices) {
            Ok(config) => assert!(config.solver_path.exists()),
            Err(err) => assert_eq!(
                err,
                SolverError::NotFound(SolverKind::Yices, PathBuf::from("yices-smt2"))
            ),
        }
    }

    #[test]
    #[ignore = "requires z3 on PATH"]
    fn locate_finds_z3() {
        let config = SolverConfig::locate(SolverKind::Z3).expect("Z3 not found");
        assert!(config.invocation().is_ok());
    }

    #[test]
    fn kind_display() {
        assert_eq!(SolverKind::default().to_string(), "Z3");
        assert_eq!(SolverKind::Cvc5.to_string(), "CVC5");
        assert_eq!(SolverKind::Yices.binary_name(), "yices-smt2");
    }
}

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::backend::ProcessOutput;
use crate::config::{Invocation, SolverConfig, SolverKind};
use crate::error::SolverError;

/// Subprocess solver interface.
///
/// Spawns the configured solver once per call, pipes the SMT-LIB2 text to its
/// stdin and collects everything it writes.
#[derive(Debug, Clone)]
pub struct CliSolver {
    config: SolverConfig,
}

impl CliSolver {
    /// Create a new `CliSolver` with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a `CliSolver` for Z3 at its auto-detected location.
    pub fn with_default_config() -> Result<Self, SolverError> {
        Self::with_default_config_for(SolverKind::default())
    }

    /// Create a `CliSolver` for `kind` at its auto-detected location.
    pub fn with_default_config_for(kind: SolverKind) -> Result<Self, SolverError> {
        let config = SolverConfig::locate(kind)?;
        Ok(Self { config })
    }

    /// Get a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Run the solver on `input` and return its raw output.
    ///
    /// A nonzero exit status is not an error here; the caller decides what
    /// a failed run means.
    pub fn invoke(&self, input: &str) -> Result<ProcessOutput, SolverError> {
        let kind = self.config.kind;
        let Invocation { program, args } = self.config.invocation()?;
        tracing::debug!(%kind, program = %program.display(), ?args, "Spawning solver");
        let start = Instant::now();

        let mut child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| SolverError::ProcessError(format!("Failed to start {kind}: {e}")))?;

        // stdin is dropped at the end of this block so the solver sees EOF
        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                SolverError::ProcessError(format!("Failed to open {kind} stdin"))
            })?;
            stdin.write_all(input.as_bytes()).map_err(|e| {
                SolverError::ProcessError(format!("Failed to write to {kind} stdin: {e}"))
            })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| SolverError::ProcessError(format!("Failed to wait for {kind}: {e}")))?;

        let result = ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(
            %kind,
            status = ?result.status,
            elapsed_ms = elapsed_ms(start),
            stdout_bytes = result.stdout.len(),
            "Solver finished"
        );
        Ok(result)
    }
}

/// Milliseconds since `start`, saturating at `u64::MAX`.
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn new_keeps_config() {
        let config = SolverConfig::new(SolverKind::Cvc5, "/usr/bin/cvc5");
        let solver = CliSolver::new(config.clone());
        assert_eq!(solver.config(), &config);
    }

    #[test]
    fn invoke_missing_binary_is_not_found() {
        let solver = CliSolver::new(SolverConfig::new(SolverKind::Z3, "/nonexistent/z3"));
        let err = solver.invoke("(check-sat)\n").unwrap_err();
        assert_eq!(
            err,
            SolverError::NotFound(SolverKind::Z3, PathBuf::from("/nonexistent/z3"))
        );
    }

    #[test]
    fn elapsed_ms_is_monotone() {
        let start = Instant::now();
        let first = elapsed_ms(start);
        assert!(elapsed_ms(start) >= first);

        // an instant far in the past still yields a value, never a wrapped one
        if let Some(old) = Instant::now().checked_sub(std::time::Duration::from_secs(3600)) {
            assert!(elapsed_ms(old) >= 3_600_000);
        }
    }

    #[test]
    #[ignore = "requires z3 on PATH"]
    fn invoke_real_z3() {
        let solver = CliSolver::with_default_config().expect("Z3 not found");
        let out = solver
            .invoke("(declare-const x0 Int)\n(assert (> x0 0))\n(check-sat)\n")
            .expect("invoke failed");
        assert!(out.success());
        assert_eq!(out.stdout.trim(), "sat");
    }
}

//! SMT-LIB2 text formatting for checked scripts.
//!
//! Printing walks a [`Script`] once, threading a [`NameEnv`] through the
//! traversal. Each `declare-const` and each quantifier allocates the next
//! `x<N>` name; quantifier names are released when the body is done. The
//! walk also collects, for every declared constant, a [`Recognizer`] entry so
//! the solver's reply can be mapped back to typed context positions.

use std::fmt;

use crate::command::Command;
use crate::error::BuildError;
use crate::names::NameEnv;
use crate::recognizer::Recognizer;
use crate::script::Script;
use crate::term::{Binder, Term, TermKind};
use crate::theory::Theory;

/// Printed script text plus the recognizer over its final context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Printed<S> {
    /// One command per line, each terminated by `\n`.
    pub text: String,
    pub recognizer: Recognizer<S>,
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// Render a term using the names currently bound in `env`.
///
/// Quantifiers push and pop their own binding, so `env` has the same bindings
/// on return (its counter has moved on).
pub fn print_term<T: Theory>(term: &Term<T>, env: &mut NameEnv) -> Result<String, BuildError> {
    let mut output = String::new();
    format_term(&mut output, term, env)?;
    Ok(output)
}

fn format_term<T: Theory>(
    output: &mut String,
    term: &Term<T>,
    env: &mut NameEnv,
) -> Result<(), BuildError> {
    match term.kind() {
        TermKind::Var(position) => {
            let name = env.name(*position).ok_or(BuildError::VariableOutOfRange {
                position: *position,
                len: env.depth(),
            })?;
            output.push_str(name);
        }
        TermKind::Lit(literal) => output.push_str(&T::literal_text(literal)),
        TermKind::App(ident, args) => {
            output.push('(');
            output.push_str(&T::ident_text(ident));
            for arg in args {
                output.push(' ');
                format_term(output, arg, env)?;
            }
            output.push(')');
        }
        TermKind::Forall(binder) => format_quantifier(output, "forall", binder, env)?,
        TermKind::Exists(binder) => format_quantifier(output, "exists", binder, env)?,
    }
    Ok(())
}

fn format_quantifier<T: Theory>(
    output: &mut String,
    quantifier: &str,
    binder: &Binder<T>,
    env: &mut NameEnv,
) -> Result<(), BuildError> {
    if env.depth() != binder.position() {
        return Err(BuildError::QuantifierScope {
            expected: env.depth(),
            found: binder.position(),
        });
    }
    let name = env.push();
    output.push_str(&format!("({quantifier} (({name} {})) ", binder.sort()));
    let body = format_term(output, binder.body(), env);
    env.pop();
    body?;
    output.push(')');
    Ok(())
}

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// Render one command as a single line (without the newline).
///
/// `declare-const` binds a fresh name in `env` and yields its recognizer;
/// every other command yields an empty recognizer.
pub fn print_command<T: Theory>(
    cmd: &Command<T>,
    env: &mut NameEnv,
) -> Result<(String, Recognizer<T::Sort>), BuildError> {
    let line = match cmd {
        Command::SetLogic(logic) => format!("(set-logic {logic})"),
        Command::DeclareConst(sort) => {
            let position = env.depth();
            let name = env.push();
            let line = format!("(declare-const {name} {sort})");
            return Ok((line, Recognizer::single(name, sort.clone(), position)));
        }
        Command::Assert(term) => format!("(assert {})", print_term(term, env)?),
        Command::CheckSat => "(check-sat)".to_string(),
        Command::GetModel => "(get-model)".to_string(),
    };
    Ok((line, Recognizer::empty()))
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// Render a script and build the recognizer over its final context.
pub fn print_script<T: Theory>(script: &Script<T>) -> Result<Printed<T::Sort>, BuildError> {
    let mut env = NameEnv::new();
    let mut text = String::new();
    let mut recognizer = Recognizer::empty();
    for cmd in script.commands() {
        let (line, declared) = print_command(cmd, &mut env)?;
        text.push_str(&line);
        text.push('\n');
        recognizer = recognizer.or(declared);
    }
    tracing::debug!(
        theory = T::NAME,
        lines = script.len(),
        variables = recognizer.len(),
        names_allocated = env.next_index(),
        "Printed script"
    );
    Ok(Printed { text, recognizer })
}

impl<T: Theory> fmt::Display for Script<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printed = print_script(self).map_err(|_| fmt::Error)?;
        f.write_str(printed.text.trim_end())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

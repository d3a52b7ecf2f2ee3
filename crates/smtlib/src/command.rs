use crate::context::Context;
use crate::error::BuildError;
use crate::term::{Term, expect_bool};
use crate::theory::Theory;

/// SMT-LIB command representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<T: Theory> {
    /// `(set-logic LOGIC)`
    SetLogic(String),
    /// `(declare-const name sort)`; the name is generated when printing.
    DeclareConst(T::Sort),
    /// `(assert term)`
    Assert(Term<T>),
    /// `(check-sat)`
    CheckSat,
    /// `(get-model)`
    GetModel,
}

/// Shape of one result a script will report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputType<S> {
    /// `sat`, `unsat` or `unknown`.
    Sat,
    /// A model over a snapshot of the context at the `(get-model)`.
    Model(Context<S>),
}

/// Expected results of a script, one slot per `(check-sat)` / `(get-model)`.
///
/// [`iter`](OutputContext::iter) lists the most recent slot first; the solver
/// reports them in command order, see [`in_reply_order`](OutputContext::in_reply_order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputContext<S> {
    // command order
    slots: Vec<OutputType<S>>,
}

impl<S> OutputContext<S> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The slot produced by the most recent output command.
    pub fn latest(&self) -> Option<&OutputType<S>> {
        self.slots.last()
    }

    /// Slots, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &OutputType<S>> {
        self.slots.iter().rev()
    }

    /// Slots in the order the solver answers them.
    pub fn in_reply_order(&self) -> impl Iterator<Item = &OutputType<S>> {
        self.slots.iter()
    }

    fn push(&mut self, slot: OutputType<S>) {
        self.slots.push(slot);
    }
}

impl<S> Default for OutputContext<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// The `(Context, OutputContext)` pair threaded through a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptState<S> {
    context: Context<S>,
    outputs: OutputContext<S>,
}

impl<S> ScriptState<S> {
    pub fn new() -> Self {
        Self {
            context: Context::new(),
            outputs: OutputContext::new(),
        }
    }

    pub fn context(&self) -> &Context<S> {
        &self.context
    }

    pub fn outputs(&self) -> &OutputContext<S> {
        &self.outputs
    }
}

impl<S> Default for ScriptState<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Theory> Command<T> {
    /// Apply this command's transition to `state`.
    ///
    /// On error the state is dropped; callers keep their own copy.
    pub fn apply(&self, mut state: ScriptState<T::Sort>) -> Result<ScriptState<T::Sort>, BuildError> {
        match self {
            Command::SetLogic(_) => {}
            Command::DeclareConst(sort) => state.context.push(sort.clone()),
            Command::Assert(term) => {
                term.check(&state.context)?;
                expect_bool(term)?;
            }
            Command::CheckSat => state.outputs.push(OutputType::Sat),
            Command::GetModel => {
                if state.outputs.latest() != Some(&OutputType::Sat) {
                    return Err(BuildError::GetModelWithoutCheckSat);
                }
                let snapshot = state.context.clone();
                state.outputs.push(OutputType::Model(snapshot));
            }
        }
        Ok(state)
    }
}

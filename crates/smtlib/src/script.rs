use crate::command::{Command, OutputContext, ScriptState};
use crate::context::Context;
use crate::error::BuildError;
use crate::formatter::{Printed, print_script};
use crate::term::Term;
use crate::theory::Theory;

/// An SMT-LIB script: a sequence of commands with its computed
/// `(Context, OutputContext)`.
///
/// Every command is validated as it is pushed, so a `Script` value is always
/// well formed. A rejected push leaves the script unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Script<T: Theory> {
    commands: Vec<Command<T>>,
    state: ScriptState<T::Sort>,
}

impl<T: Theory> Script<T> {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            state: ScriptState::new(),
        }
    }

    pub fn with_commands(commands: Vec<Command<T>>) -> Result<Self, BuildError> {
        let mut script = Self::new();
        script.extend(commands)?;
        Ok(script)
    }

    pub fn push(&mut self, cmd: Command<T>) -> Result<(), BuildError> {
        self.state = cmd.apply(self.state.clone())?;
        self.commands.push(cmd);
        Ok(())
    }

    /// Push commands in order, stopping at the first rejected one.
    pub fn extend(&mut self, cmds: impl IntoIterator<Item = Command<T>>) -> Result<(), BuildError> {
        cmds.into_iter().try_for_each(|cmd| self.push(cmd))
    }

    pub fn set_logic(&mut self, logic: impl Into<String>) -> Result<(), BuildError> {
        self.push(Command::SetLogic(logic.into()))
    }

    /// Declare a constant and return the variable term that refers to it.
    pub fn declare_const(&mut self, sort: T::Sort) -> Result<Term<T>, BuildError> {
        let position = self.context().len();
        self.push(Command::DeclareConst(sort.clone()))?;
        Term::var(self.context(), position, sort)
    }

    pub fn assert(&mut self, term: Term<T>) -> Result<(), BuildError> {
        self.push(Command::Assert(term))
    }

    pub fn check_sat(&mut self) -> Result<(), BuildError> {
        self.push(Command::CheckSat)
    }

    pub fn get_model(&mut self) -> Result<(), BuildError> {
        self.push(Command::GetModel)
    }

    pub fn commands(&self) -> &[Command<T>] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command<T>> {
        self.commands
    }

    /// Variables declared so far.
    pub fn context(&self) -> &Context<T::Sort> {
        self.state.context()
    }

    /// Results this script will report.
    pub fn outputs(&self) -> &OutputContext<T::Sort> {
        self.state.outputs()
    }

    pub fn state(&self) -> &ScriptState<T::Sort> {
        &self.state
    }

    /// Render to SMT-LIB text together with the variable recognizer.
    pub fn print(&self) -> Result<Printed<T::Sort>, BuildError> {
        print_script(self)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<T: Theory> Default for Script<T> {
    fn default() -> Self {
        Self::new()
    }
}

//! Checked terms over a theory.
//!
//! A [`Term`] is built against a [`Context`]: every constructor checks that
//! variables exist with the claimed sort and that applications match their
//! identifier's signature. Terms without quantifiers stay valid in every
//! extension of the context they were built in. A quantifier remembers the
//! position of its bound variable, so it is only valid in a context of exactly
//! the length it was built for; [`Term::check`] enforces this when a term
//! enters a script.

use crate::context::Context;
use crate::error::BuildError;
use crate::theory::Theory;

/// A well-sorted term.
#[derive(Debug, Clone, PartialEq)]
pub struct Term<T: Theory> {
    sort: T::Sort,
    kind: TermKind<T>,
}

/// The shape of a [`Term`].
#[derive(Debug, Clone, PartialEq)]
pub enum TermKind<T: Theory> {
    /// Variable at a context position.
    Var(usize),
    /// Theory literal.
    Lit(T::Literal),
    /// Identifier applied to one argument per signature entry.
    App(T::Ident, Vec<Term<T>>),
    /// `(forall ((x S)) body)`
    Forall(Binder<T>),
    /// `(exists ((x S)) body)`
    Exists(Binder<T>),
}

/// A single bound variable and the body it scopes over.
#[derive(Debug, Clone, PartialEq)]
pub struct Binder<T: Theory> {
    position: usize,
    sort: T::Sort,
    body: Box<Term<T>>,
}

impl<T: Theory> Binder<T> {
    /// Context position taken by the bound variable inside the body.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn sort(&self) -> &T::Sort {
        &self.sort
    }

    pub fn body(&self) -> &Term<T> {
        &self.body
    }
}

impl<T: Theory> Term<T> {
    /// Variable at `position`, claimed to have sort `sort`.
    pub fn var(ctx: &Context<T::Sort>, position: usize, sort: T::Sort) -> Result<Self, BuildError> {
        check_var::<T>(ctx, position, &sort)?;
        Ok(Self {
            sort,
            kind: TermKind::Var(position),
        })
    }

    pub fn lit(literal: T::Literal) -> Self {
        Self {
            sort: T::literal_sort(&literal),
            kind: TermKind::Lit(literal),
        }
    }

    /// Apply `ident` to `args`, checking them against its signature.
    pub fn app(ident: T::Ident, args: Vec<Term<T>>) -> Result<Self, BuildError> {
        let signature = T::signature(&ident);
        if signature.arity() != args.len() {
            return Err(BuildError::ArityMismatch {
                ident: T::ident_text(&ident),
                expected: signature.arity(),
                found: args.len(),
            });
        }
        for (index, (expected, arg)) in signature.args.iter().zip(&args).enumerate() {
            if expected != arg.sort() {
                return Err(BuildError::ArgumentSortMismatch {
                    ident: T::ident_text(&ident),
                    index,
                    expected: expected.to_string(),
                    found: arg.sort().to_string(),
                });
            }
        }
        Ok(Self {
            sort: signature.result,
            kind: TermKind::App(ident, args),
        })
    }

    /// Universal quantifier over one variable of sort `sort`.
    ///
    /// `body` receives the extended context and the bound variable.
    pub fn forall<F>(ctx: &Context<T::Sort>, sort: T::Sort, body: F) -> Result<Self, BuildError>
    where
        F: FnOnce(&Context<T::Sort>, Term<T>) -> Result<Term<T>, BuildError>,
    {
        let binder = Self::bind(ctx, sort, body)?;
        Ok(Self {
            sort: T::bool_sort(),
            kind: TermKind::Forall(binder),
        })
    }

    /// Existential quantifier over one variable of sort `sort`.
    pub fn exists<F>(ctx: &Context<T::Sort>, sort: T::Sort, body: F) -> Result<Self, BuildError>
    where
        F: FnOnce(&Context<T::Sort>, Term<T>) -> Result<Term<T>, BuildError>,
    {
        let binder = Self::bind(ctx, sort, body)?;
        Ok(Self {
            sort: T::bool_sort(),
            kind: TermKind::Exists(binder),
        })
    }

    fn bind<F>(ctx: &Context<T::Sort>, sort: T::Sort, body: F) -> Result<Binder<T>, BuildError>
    where
        F: FnOnce(&Context<T::Sort>, Term<T>) -> Result<Term<T>, BuildError>,
    {
        let position = ctx.len();
        let inner = ctx.extended(sort.clone());
        let bound = Self {
            sort: sort.clone(),
            kind: TermKind::Var(position),
        };
        let body = body(&inner, bound)?;
        body.check(&inner)?;
        expect_bool::<T>(&body)?;
        Ok(Binder {
            position,
            sort,
            body: Box::new(body),
        })
    }

    pub fn sort(&self) -> &T::Sort {
        &self.sort
    }

    pub fn kind(&self) -> &TermKind<T> {
        &self.kind
    }

    pub fn is_bool(&self) -> bool {
        self.sort == T::bool_sort()
    }

    /// Re-validate this term against `ctx`.
    pub fn check(&self, ctx: &Context<T::Sort>) -> Result<(), BuildError> {
        match &self.kind {
            TermKind::Var(position) => check_var::<T>(ctx, *position, &self.sort),
            TermKind::Lit(_) => Ok(()),
            TermKind::App(_, args) => args.iter().try_for_each(|arg| arg.check(ctx)),
            TermKind::Forall(binder) | TermKind::Exists(binder) => {
                if binder.position != ctx.len() {
                    return Err(BuildError::QuantifierScope {
                        expected: ctx.len(),
                        found: binder.position,
                    });
                }
                binder.body.check(&ctx.extended(binder.sort.clone()))
            }
        }
    }
}

fn check_var<T: Theory>(
    ctx: &Context<T::Sort>,
    position: usize,
    sort: &T::Sort,
) -> Result<(), BuildError> {
    match ctx.get(position) {
        None => Err(BuildError::VariableOutOfRange {
            position,
            len: ctx.len(),
        }),
        Some(declared) if declared != sort => Err(BuildError::VariableSortMismatch {
            position,
            expected: declared.to_string(),
            found: sort.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

pub(crate) fn expect_bool<T: Theory>(term: &Term<T>) -> Result<(), BuildError> {
    if term.is_bool() {
        Ok(())
    } else {
        Err(BuildError::NotBoolean {
            found: term.sort().to_string(),
        })
    }
}

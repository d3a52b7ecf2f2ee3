//! Decode solver replies into typed [`Results`].
//!
//! The reply is read slot by slot, in the order the script issued its output
//! commands:
//! - a SAT slot is one atom, `sat`, `unsat` or `unknown`;
//! - a MODEL slot is one list of `(define-fun <name> () <sort> <value>)`
//!   entries, one per variable of the slot's context snapshot, in any order.
//!   The older `(model ...)` wrapper is accepted too.
//!
//! Names are resolved through the printer's [`Recognizer`]; values are parsed
//! by the theory.

use typed_smt_smtlib::sexp::{Sexp, SexpError, parse_one, skip_blank};
use typed_smt_smtlib::{Context, OutputContext, OutputType, Recognizer, Theory, ValueError};

use crate::error::DecodeError;
use crate::model::{Assignment, Model};
use crate::result::{Output, Results, SatResult};

const SAT_ANSWER: &str = "sat, unsat or unknown";
const DEFINE_FUN: &str = "(define-fun <name> () <sort> <value>)";

/// Decode `reply` against the output context of the script that produced it.
pub fn decode_results<T: Theory>(
    recognizer: &Recognizer<T::Sort>,
    outputs: &OutputContext<T::Sort>,
    reply: &str,
) -> Result<Results<T>, DecodeError> {
    let mut rest = reply;
    let mut decoded = Vec::with_capacity(outputs.len());

    for slot in outputs.in_reply_order() {
        let (output, after) = match slot {
            OutputType::Sat => {
                let (sat, after) = decode_sat(rest)?;
                (Output::Sat(sat), after)
            }
            OutputType::Model(ctx) => {
                let (model, after) = decode_model::<T>(recognizer, ctx, rest)?;
                (Output::Model(model), after)
            }
        };
        decoded.push(output);
        rest = after;
    }

    let rest = skip_blank(rest);
    if !rest.is_empty() {
        return Err(DecodeError::TrailingInput {
            rest: fragment(rest),
        });
    }
    Ok(Results::from_reply_order(decoded))
}

/// Read one `check-sat` answer.
pub fn decode_sat(input: &str) -> Result<(SatResult, &str), DecodeError> {
    let (sexp, rest) = next_sexp(input, SAT_ANSWER)?;
    let sat = sexp
        .as_atom()
        .and_then(|atom| atom.parse().ok())
        .ok_or_else(|| unexpected(SAT_ANSWER, &sexp))?;
    Ok((sat, rest))
}

/// Read one model block over the variables of `ctx`.
pub fn decode_model<'a, T: Theory>(
    recognizer: &Recognizer<T::Sort>,
    ctx: &Context<T::Sort>,
    input: &'a str,
) -> Result<(Model<T>, &'a str), DecodeError> {
    let (sexp, rest) = next_sexp(input, "a model")?;
    let items = sexp
        .as_list()
        .ok_or_else(|| unexpected("a parenthesized model", &sexp))?;
    let entries = match items.first() {
        Some(Sexp::Atom(keyword)) if keyword == "model" => &items[1..],
        _ => items,
    };

    let mut slots: Vec<Option<Assignment<T>>> = vec![None; ctx.len()];
    for entry in entries {
        let (name, sort, value) = split_define_fun(entry)?;
        let var = recognizer
            .recognize(name)
            .filter(|var| var.position < ctx.len())
            .ok_or_else(|| DecodeError::UnknownVariable {
                name: name.to_string(),
            })?;

        let expected = var.sort.to_string();
        let found = sort.to_string();
        if expected != found {
            return Err(DecodeError::SortMismatch {
                name: name.to_string(),
                expected,
                found,
            });
        }
        if slots[var.position].is_some() {
            return Err(DecodeError::DuplicateVariable {
                name: name.to_string(),
            });
        }

        let text = value.to_string();
        let value = T::parse_value(&var.sort, &text).map_err(|e| match e {
            ValueError::Unsupported => DecodeError::UnsupportedModel {
                theory: T::NAME.to_string(),
            },
            ValueError::Malformed(reason) => DecodeError::InvalidValue {
                name: name.to_string(),
                sort: expected.clone(),
                text: text.clone(),
                reason,
            },
        })?;
        tracing::trace!(name, position = var.position, value = %value, "Decoded model value");
        slots[var.position] = Some(Assignment {
            name: var.name.clone(),
            sort: var.sort.clone(),
            value,
        });
    }

    let assignments = slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| {
            slot.ok_or_else(|| DecodeError::MissingVariable {
                name: recognizer
                    .name_of(position)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("<position {position}>")),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok((Model::with_assignments(assignments), rest))
}

/// Split `(define-fun name () sort value)` into its parts.
fn split_define_fun(entry: &Sexp) -> Result<(&str, &Sexp, &Sexp), DecodeError> {
    match entry.as_list() {
        Some([Sexp::Atom(keyword), Sexp::Atom(name), Sexp::List(params), sort, value])
            if keyword == "define-fun" && params.is_empty() =>
        {
            Ok((name.as_str(), sort, value))
        }
        _ => Err(unexpected(DEFINE_FUN, entry)),
    }
}

fn next_sexp<'a>(input: &'a str, expected: &str) -> Result<(Sexp, &'a str), DecodeError> {
    parse_one(input).map_err(|e| match e {
        SexpError::UnexpectedEnd => DecodeError::UnexpectedEnd {
            expected: expected.to_string(),
        },
        SexpError::UnexpectedClose(rest) => DecodeError::UnexpectedToken {
            expected: expected.to_string(),
            found: fragment(&rest),
        },
        SexpError::TooDeep(limit) => DecodeError::TooDeep { limit },
    })
}

fn unexpected(expected: &str, found: &Sexp) -> DecodeError {
    DecodeError::UnexpectedToken {
        expected: expected.to_string(),
        found: fragment(&found.to_string()),
    }
}

/// First line of `text`, capped so errors stay readable.
fn fragment(text: &str) -> String {
    const MAX: usize = 80;
    let line = text.lines().next().unwrap_or("").trim();
    match line.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &line[..end]),
        None => line.to_string(),
    }
}

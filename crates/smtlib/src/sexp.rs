//! Minimal S-expression reader for solver replies.
//!
//! Reads one expression at a time and hands back the unread rest, so callers
//! can consume a reply block by block. [`Sexp`]'s `Display` renders the
//! canonical single-space form, which is what sort and value texts are
//! compared against.

use std::fmt;

/// An S-expression: an atom or a parenthesized list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sexp {
    Atom(String),
    List(Vec<Sexp>),
}

impl Sexp {
    pub fn as_atom(&self) -> Option<&str> {
        match self {
            Sexp::Atom(atom) => Some(atom),
            Sexp::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Sexp]> {
        match self {
            Sexp::Atom(_) => None,
            Sexp::List(items) => Some(items),
        }
    }
}

impl fmt::Display for Sexp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sexp::Atom(atom) => write!(f, "{atom}"),
            Sexp::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// Why an S-expression could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SexpError {
    /// Input ended before an expression (or its closing paren).
    UnexpectedEnd,
    /// A `)` with no matching `(`; carries the input from that point.
    UnexpectedClose(String),
    /// Lists nested deeper than the limit.
    TooDeep(usize),
}

impl fmt::Display for SexpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SexpError::UnexpectedEnd => write!(f, "unexpected end of input"),
            SexpError::UnexpectedClose(rest) => write!(f, "unbalanced `)` at: {rest}"),
            SexpError::TooDeep(limit) => write!(f, "lists nested deeper than {limit}"),
        }
    }
}

impl std::error::Error for SexpError {}

/// Skip whitespace and `;` line comments.
pub fn skip_blank(input: &str) -> &str {
    let mut rest = input.trim_start();
    while let Some(comment) = rest.strip_prefix(';') {
        rest = match comment.find('\n') {
            Some(end) => comment[end + 1..].trim_start(),
            None => "",
        };
    }
    rest
}

/// Deepest list nesting [`parse_one`] accepts.
pub const MAX_DEPTH: usize = 512;

/// Read one S-expression from the start of `input`.
///
/// Returns the expression and the unread rest of the input. Lists nested
/// deeper than [`MAX_DEPTH`] are rejected.
pub fn parse_one(input: &str) -> Result<(Sexp, &str), SexpError> {
    // lists still waiting for their `)`, innermost last
    let mut open: Vec<Vec<Sexp>> = Vec::new();
    let mut rest = input;
    loop {
        rest = skip_blank(rest);
        let closed = match rest.chars().next() {
            None => return Err(SexpError::UnexpectedEnd),
            Some('(') => {
                if open.len() == MAX_DEPTH {
                    return Err(SexpError::TooDeep(MAX_DEPTH));
                }
                open.push(Vec::new());
                rest = &rest[1..];
                continue;
            }
            Some(')') => {
                let items = open
                    .pop()
                    .ok_or_else(|| SexpError::UnexpectedClose(rest.to_string()))?;
                rest = &rest[1..];
                Sexp::List(items)
            }
            Some(_) => {
                let (atom, after) = read_atom(rest)?;
                rest = after;
                atom
            }
        };
        match open.last_mut() {
            Some(parent) => parent.push(closed),
            None => return Ok((closed, rest)),
        }
    }
}

/// Read a plain or `|quoted|` symbol; quoted symbols keep their bars.
fn read_atom(input: &str) -> Result<(Sexp, &str), SexpError> {
    let end = if let Some(quoted) = input.strip_prefix('|') {
        quoted.find('|').ok_or(SexpError::UnexpectedEnd)? + 2
    } else {
        input
            .find(|c: char| c.is_whitespace() || c == '(' || c == ')' || c == ';')
            .unwrap_or(input.len())
    };
    Ok((Sexp::Atom(input[..end].to_string()), &input[end..]))
}

/// Read exactly one S-expression; anything but blanks after it is an error.
pub fn parse_exact(input: &str) -> Result<Sexp, SexpError> {
    let (sexp, rest) = parse_one(input)?;
    let rest = skip_blank(rest);
    if rest.is_empty() {
        Ok(sexp)
    } else if rest.starts_with(')') {
        Err(SexpError::UnexpectedClose(rest.to_string()))
    } else {
        Err(SexpError::UnexpectedClose(format!("trailing input: {rest}")))
    }
}

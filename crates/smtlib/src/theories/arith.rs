//! Booleans with integer and real arithmetic (the `Core`, `Ints` and `Reals`
//! SMT-LIB theories).

use std::fmt;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::context::Signature;
use crate::sexp::{Sexp, parse_exact};
use crate::term::Term;
use crate::theory::{Theory, ValueError};

/// Marker type for the arithmetic theory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arith;

/// Sorts of [`Arith`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithSort {
    Bool,
    Int,
    Real,
}

impl fmt::Display for ArithSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithSort::Bool => write!(f, "Bool"),
            ArithSort::Int => write!(f, "Int"),
            ArithSort::Real => write!(f, "Real"),
        }
    }
}

/// Numeric sorts, for identifiers that only make sense on numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Num {
    Int,
    Real,
}

impl From<Num> for ArithSort {
    fn from(num: Num) -> Self {
        match num {
            Num::Int => ArithSort::Int,
            Num::Real => ArithSort::Real,
        }
    }
}

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

/// `num / den` in lowest terms, or `None` if `den` is zero.
pub fn rational(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Option<BigRational> {
    let den = den.into();
    if den.is_zero() {
        return None;
    }
    Some(BigRational::new(num.into(), den))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Parse an SMT-LIB numeral: unsigned decimal digits, any length.
pub fn parse_numeral(text: &str) -> Option<BigInt> {
    if !is_digits(text) {
        return None;
    }
    BigInt::parse_bytes(text.as_bytes(), 10)
}

/// Parse an unsigned numeral (`3`) or decimal (`1.25`).
pub fn parse_decimal(text: &str) -> Option<BigRational> {
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) if is_digits(int_part) && is_digits(frac_part) => {
            (int_part, frac_part)
        }
        Some(_) => return None,
        None => (text, ""),
    };
    let num = parse_numeral(&format!("{int_part}{frac_part}"))?;
    let den = num_traits::pow(BigInt::from(10u32), frac_part.len());
    Some(BigRational::new(num, den))
}

fn int_text(n: &BigInt) -> String {
    if n.is_negative() {
        format!("(- {})", n.magnitude())
    } else {
        n.to_string()
    }
}

/// SMT-LIB form of a real: `2.0`, `(- 2.0)`, `(/ 1.0 3.0)`, `(- (/ 1.0 3.0))`.
fn real_text(r: &BigRational) -> String {
    let magnitude = r.abs();
    let body = if magnitude.is_integer() {
        format!("{}.0", magnitude.numer())
    } else {
        format!("(/ {}.0 {}.0)", magnitude.numer(), magnitude.denom())
    };
    if r.is_negative() {
        format!("(- {body})")
    } else {
        body
    }
}

// ---------------------------------------------------------------------------
// Literals, identifiers, values
// ---------------------------------------------------------------------------

/// Literal constants of [`Arith`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithLiteral {
    Bool(bool),
    Int(BigInt),
    Real(BigRational),
}

/// Function symbols of [`Arith`].
///
/// Polymorphic symbols carry the sort they are used at, which fixes their
/// [`Signature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithIdent {
    Not,
    And,
    Or,
    Xor,
    Implies,
    Eq(ArithSort),
    Distinct(ArithSort),
    Ite(ArithSort),
    Neg(Num),
    Add(Num),
    Sub(Num),
    Mul(Num),
    /// Real division `/`.
    Div,
    /// Integer division `div`.
    IntDiv,
    Mod,
    Abs,
    Lt(Num),
    Le(Num),
    Gt(Num),
    Ge(Num),
    ToReal,
    ToInt,
    IsInt,
}

impl ArithIdent {
    pub fn text(&self) -> &'static str {
        match self {
            ArithIdent::Not => "not",
            ArithIdent::And => "and",
            ArithIdent::Or => "or",
            ArithIdent::Xor => "xor",
            ArithIdent::Implies => "=>",
            ArithIdent::Eq(_) => "=",
            ArithIdent::Distinct(_) => "distinct",
            ArithIdent::Ite(_) => "ite",
            ArithIdent::Neg(_) | ArithIdent::Sub(_) => "-",
            ArithIdent::Add(_) => "+",
            ArithIdent::Mul(_) => "*",
            ArithIdent::Div => "/",
            ArithIdent::IntDiv => "div",
            ArithIdent::Mod => "mod",
            ArithIdent::Abs => "abs",
            ArithIdent::Lt(_) => "<",
            ArithIdent::Le(_) => "<=",
            ArithIdent::Gt(_) => ">",
            ArithIdent::Ge(_) => ">=",
            ArithIdent::ToReal => "to_real",
            ArithIdent::ToInt => "to_int",
            ArithIdent::IsInt => "is_int",
        }
    }

    pub fn signature(&self) -> Signature<ArithSort> {
        use ArithSort::{Bool, Int, Real};
        let sig = Signature::new;
        match *self {
            ArithIdent::Not => sig(vec![Bool], Bool),
            ArithIdent::And | ArithIdent::Or | ArithIdent::Xor | ArithIdent::Implies => {
                sig(vec![Bool, Bool], Bool)
            }
            ArithIdent::Eq(s) | ArithIdent::Distinct(s) => sig(vec![s, s], Bool),
            ArithIdent::Ite(s) => sig(vec![Bool, s, s], s),
            ArithIdent::Neg(n) => sig(vec![n.into()], n.into()),
            ArithIdent::Add(n) | ArithIdent::Sub(n) | ArithIdent::Mul(n) => {
                sig(vec![n.into(), n.into()], n.into())
            }
            ArithIdent::Div => sig(vec![Real, Real], Real),
            ArithIdent::IntDiv | ArithIdent::Mod => sig(vec![Int, Int], Int),
            ArithIdent::Abs => sig(vec![Int], Int),
            ArithIdent::Lt(n) | ArithIdent::Le(n) | ArithIdent::Gt(n) | ArithIdent::Ge(n) => {
                sig(vec![n.into(), n.into()], Bool)
            }
            ArithIdent::ToReal => sig(vec![Int], Real),
            ArithIdent::ToInt => sig(vec![Real], Int),
            ArithIdent::IsInt => sig(vec![Real], Bool),
        }
    }
}

impl fmt::Display for ArithIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Model values of [`Arith`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArithValue {
    Bool(bool),
    Int(BigInt),
    Real(BigRational),
}

impl ArithValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ArithValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            ArithValue::Int(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_real(&self) -> Option<&BigRational> {
        match self {
            ArithValue::Real(r) => Some(r),
            _ => None,
        }
    }
}

impl fmt::Display for ArithValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithValue::Bool(b) => write!(f, "{b}"),
            ArithValue::Int(n) => f.write_str(&int_text(n)),
            ArithValue::Real(r) => f.write_str(&real_text(r)),
        }
    }
}

fn malformed(sort: ArithSort, text: &str) -> ValueError {
    ValueError::Malformed(format!("`{text}` is not a {sort} value"))
}

fn eval_int(sexp: &Sexp) -> Option<BigInt> {
    match sexp {
        Sexp::Atom(atom) => parse_numeral(atom),
        Sexp::List(items) => match items.as_slice() {
            [Sexp::Atom(op), arg] if op == "-" => Some(-eval_int(arg)?),
            _ => None,
        },
    }
}

fn eval_real(sexp: &Sexp) -> Option<BigRational> {
    match sexp {
        Sexp::Atom(atom) => parse_decimal(atom),
        Sexp::List(items) => match items.as_slice() {
            [Sexp::Atom(op), arg] if op == "-" => Some(-eval_real(arg)?),
            [Sexp::Atom(op), lhs, rhs] if op == "/" => {
                let (lhs, rhs) = (eval_real(lhs)?, eval_real(rhs)?);
                (!rhs.is_zero()).then(|| lhs / rhs)
            }
            _ => None,
        },
    }
}

impl Theory for Arith {
    type Sort = ArithSort;
    type Literal = ArithLiteral;
    type Ident = ArithIdent;
    type Value = ArithValue;

    const NAME: &'static str = "arith";

    fn bool_sort() -> ArithSort {
        ArithSort::Bool
    }

    fn literal_sort(literal: &ArithLiteral) -> ArithSort {
        match literal {
            ArithLiteral::Bool(_) => ArithSort::Bool,
            ArithLiteral::Int(_) => ArithSort::Int,
            ArithLiteral::Real(_) => ArithSort::Real,
        }
    }

    fn literal_text(literal: &ArithLiteral) -> String {
        match literal {
            ArithLiteral::Bool(b) => b.to_string(),
            ArithLiteral::Int(n) => int_text(n),
            ArithLiteral::Real(r) => real_text(r),
        }
    }

    fn signature(ident: &ArithIdent) -> Signature<ArithSort> {
        ident.signature()
    }

    fn ident_text(ident: &ArithIdent) -> String {
        ident.text().to_string()
    }

    fn parse_value(sort: &ArithSort, text: &str) -> Result<ArithValue, ValueError> {
        let sexp = parse_exact(text).map_err(|e| ValueError::Malformed(e.to_string()))?;
        let value = match sort {
            ArithSort::Bool => match sexp.as_atom() {
                Some("true") => Some(ArithValue::Bool(true)),
                Some("false") => Some(ArithValue::Bool(false)),
                _ => None,
            },
            ArithSort::Int => eval_int(&sexp).map(ArithValue::Int),
            ArithSort::Real => eval_real(&sexp).map(ArithValue::Real),
        };
        value.ok_or_else(|| malformed(*sort, text))
    }
}

// ---------------------------------------------------------------------------
// Term shorthands
// ---------------------------------------------------------------------------

pub fn bool_lit(b: bool) -> Term<Arith> {
    Term::lit(ArithLiteral::Bool(b))
}

pub fn int_lit(n: impl Into<BigInt>) -> Term<Arith> {
    Term::lit(ArithLiteral::Int(n.into()))
}

pub fn real_lit(r: BigRational) -> Term<Arith> {
    Term::lit(ArithLiteral::Real(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn half() -> BigRational {
        rational(1, 2).unwrap()
    }

    fn int(n: i64) -> ArithValue {
        ArithValue::Int(BigInt::from(n))
    }

    // ---- numerals ----

    #[test]
    fn rational_normalizes() {
        let r = rational(4, -8).unwrap();
        assert_eq!(r, rational(-1, 2).unwrap());
        assert_eq!(rational(1, 0), None);
        assert!(rational(6, 3).unwrap().is_integer());
    }

    #[test]
    fn decimals() {
        assert_eq!(parse_decimal("1.5"), rational(3, 2));
        assert_eq!(parse_decimal("2"), rational(2, 1));
        assert_eq!(parse_decimal("0.0"), rational(0, 1));
        assert_eq!(parse_decimal("1."), None);
        assert_eq!(parse_decimal(".5"), None);
        assert_eq!(parse_decimal("1.2.3"), None);
        assert_eq!(parse_decimal("x"), None);
    }

    #[test]
    fn numerals_are_unsigned_digits() {
        assert_eq!(parse_numeral("007"), Some(BigInt::from(7)));
        assert_eq!(parse_numeral("-7"), None);
        assert_eq!(parse_numeral("+7"), None);
        assert_eq!(parse_numeral(""), None);
    }

    #[test]
    fn real_display() {
        assert_eq!(real_text(&rational(2, 1).unwrap()), "2.0");
        assert_eq!(real_text(&rational(-2, 1).unwrap()), "(- 2.0)");
        assert_eq!(real_text(&half()), "(/ 1.0 2.0)");
        assert_eq!(real_text(&-half()), "(- (/ 1.0 2.0))");
    }

    // ---- signatures ----

    #[test]
    fn polymorphic_signatures() {
        let eq = ArithIdent::Eq(ArithSort::Real).signature();
        assert_eq!(eq.args, vec![ArithSort::Real, ArithSort::Real]);
        assert_eq!(eq.result, ArithSort::Bool);

        let ite = ArithIdent::Ite(ArithSort::Int).signature();
        assert_eq!(ite.arity(), 3);
        assert_eq!(ite.result, ArithSort::Int);

        assert_eq!(ArithIdent::Neg(Num::Real).signature().arity(), 1);
        assert_eq!(ArithIdent::Le(Num::Int).signature().result, ArithSort::Bool);
    }

    #[test]
    fn ident_text() {
        assert_eq!(ArithIdent::Implies.to_string(), "=>");
        assert_eq!(ArithIdent::Neg(Num::Int).to_string(), "-");
        assert_eq!(ArithIdent::Sub(Num::Int).to_string(), "-");
        assert_eq!(ArithIdent::IntDiv.to_string(), "div");
    }

    #[test]
    fn literal_text_and_sort() {
        assert_eq!(Arith::literal_text(&ArithLiteral::Int(BigInt::from(-7))), "(- 7)");
        assert_eq!(Arith::literal_text(&ArithLiteral::Bool(false)), "false");
        assert_eq!(
            Arith::literal_sort(&ArithLiteral::Real(half())),
            ArithSort::Real
        );
    }

    // ---- value parsing ----

    #[test]
    fn parse_bool_values() {
        assert_eq!(
            Arith::parse_value(&ArithSort::Bool, "true"),
            Ok(ArithValue::Bool(true))
        );
        assert!(Arith::parse_value(&ArithSort::Bool, "1").is_err());
    }

    #[test]
    fn parse_int_values() {
        assert_eq!(Arith::parse_value(&ArithSort::Int, "5"), Ok(int(5)));
        assert_eq!(Arith::parse_value(&ArithSort::Int, "(- 42)"), Ok(int(-42)));
        assert!(matches!(
            Arith::parse_value(&ArithSort::Int, "1.0"),
            Err(ValueError::Malformed(_))
        ));
        assert!(Arith::parse_value(&ArithSort::Int, "-3").is_err());
        assert!(Arith::parse_value(&ArithSort::Int, "(+ 1 2)").is_err());
    }

    #[test]
    fn parse_int_beyond_machine_width() {
        // 2^128 and -(2^200)
        let big = "340282366920938463463374607431768211456";
        let value = Arith::parse_value(&ArithSort::Int, big).unwrap();
        assert_eq!(value.as_int(), Some(&(BigInt::from(1) << 128)));
        assert_eq!(value.to_string(), big);

        let huge = (BigInt::from(1i32) << 200u32).to_string();
        let value = Arith::parse_value(&ArithSort::Int, &format!("(- {huge})")).unwrap();
        assert_eq!(value.as_int(), Some(&-(BigInt::from(1i32) << 200u32)));
        assert_eq!(value.to_string(), format!("(- {huge})"));
    }

    #[test]
    fn parse_real_values() {
        assert_eq!(
            Arith::parse_value(&ArithSort::Real, "(/ 1.0 2.0)"),
            Ok(ArithValue::Real(half()))
        );
        assert_eq!(
            Arith::parse_value(&ArithSort::Real, "(- (/ 3.0 4.0))"),
            Ok(ArithValue::Real(rational(-3, 4).unwrap()))
        );
        assert_eq!(
            Arith::parse_value(&ArithSort::Real, "2.5"),
            Ok(ArithValue::Real(rational(5, 2).unwrap()))
        );
        assert!(Arith::parse_value(&ArithSort::Real, "(/ 1.0 0.0)").is_err());
    }

    #[test]
    fn parse_long_decimal() {
        let text = "0.12345678901234567890123456789012345678901";
        let value = Arith::parse_value(&ArithSort::Real, text).unwrap();
        let den = num_traits::pow(BigInt::from(10), 41);
        let num = parse_numeral(&text[2..]).unwrap();
        assert_eq!(num.to_string().len(), 41);
        let expected = BigRational::new(num, den);
        assert_eq!(value.as_real(), Some(&expected));
    }

    #[test]
    fn value_display_round_trips_text() {
        assert_eq!(int(-3).to_string(), "(- 3)");
        assert_eq!(ArithValue::Real(half()).to_string(), "(/ 1.0 2.0)");
        assert_eq!(ArithValue::Bool(true).to_string(), "true");
        assert_eq!(ArithValue::Bool(true).as_bool(), Some(true));
        assert_eq!(int(1).as_real(), None);
    }
}

use std::fmt;
use std::str::FromStr;

use typed_smt_smtlib::Theory;

use crate::model::Model;

/// Answer to a `(check-sat)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SatResult {
    Sat,
    Unsat,
    /// Solver couldn't determine (timeout, resource limit, incompleteness).
    Unknown,
}

impl SatResult {
    /// Returns `true` if the result is `Sat`.
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Sat)
    }

    /// Returns `true` if the result is `Unsat`.
    pub fn is_unsat(&self) -> bool {
        matches!(self, SatResult::Unsat)
    }

    /// Returns `true` if the result is `Unknown`.
    pub fn is_unknown(&self) -> bool {
        matches!(self, SatResult::Unknown)
    }
}

impl fmt::Display for SatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatResult::Sat => write!(f, "sat"),
            SatResult::Unsat => write!(f, "unsat"),
            SatResult::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for SatResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sat" => Ok(SatResult::Sat),
            "unsat" => Ok(SatResult::Unsat),
            "unknown" => Ok(SatResult::Unknown),
            _ => Err(format!("not a check-sat answer: {s}")),
        }
    }
}

/// The decoded result for one output slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Output<T: Theory> {
    Sat(SatResult),
    Model(Model<T>),
}

impl<T: Theory> Output<T> {
    pub fn as_sat(&self) -> Option<SatResult> {
        match self {
            Output::Sat(sat) => Some(*sat),
            Output::Model(_) => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model<T>> {
        match self {
            Output::Sat(_) => None,
            Output::Model(model) => Some(model),
        }
    }
}

/// All results of a script, most recent first, one per output slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Results<T: Theory> {
    outputs: Vec<Output<T>>,
}

impl<T: Theory> Results<T> {
    /// Build from results listed most recent first.
    pub fn new(outputs: Vec<Output<T>>) -> Self {
        Self { outputs }
    }

    /// Build from results in the order the solver reported them.
    pub fn from_reply_order(mut outputs: Vec<Output<T>>) -> Self {
        outputs.reverse();
        Self { outputs }
    }

    /// Result of the most recent output command.
    pub fn first(&self) -> Option<&Output<T>> {
        self.outputs.first()
    }

    pub fn get(&self, index: usize) -> Option<&Output<T>> {
        self.outputs.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Output<T>> {
        self.outputs.iter()
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    pub fn into_vec(self) -> Vec<Output<T>> {
        self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typed_smt_smtlib::theories::arith::Arith;

    #[test]
    fn sat_predicates() {
        assert!(SatResult::Sat.is_sat());
        assert!(!SatResult::Sat.is_unsat());
        assert!(SatResult::Unsat.is_unsat());
        assert!(SatResult::Unknown.is_unknown());
        assert!(!SatResult::Unknown.is_sat());
    }

    #[test]
    fn sat_result_text() {
        assert_eq!("unsat".parse::<SatResult>(), Ok(SatResult::Unsat));
        assert_eq!(SatResult::Unknown.to_string(), "unknown");
        assert!("maybe".parse::<SatResult>().is_err());
        assert!("SAT".parse::<SatResult>().is_err());
    }

    #[test]
    fn output_accessors() {
        let sat = Output::<Arith>::Sat(SatResult::Sat);
        assert_eq!(sat.as_sat(), Some(SatResult::Sat));
        assert!(sat.as_model().is_none());

        let model = Output::<Arith>::Model(Model::new());
        assert_eq!(model.as_sat(), None);
        assert!(model.as_model().unwrap().is_empty());
    }

    #[test]
    fn reply_order_is_reversed() {
        let results = Results::<Arith>::from_reply_order(vec![
            Output::Sat(SatResult::Sat),
            Output::Model(Model::new()),
        ]);
        assert_eq!(results.len(), 2);
        assert!(results.first().unwrap().as_model().is_some());
        assert_eq!(results.get(1).unwrap().as_sat(), Some(SatResult::Sat));
    }
}

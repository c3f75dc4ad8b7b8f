//! Records of the path a simulation took.

use std::fmt;

use serde::{Serialize, Serializer};

/// One record of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The run began in this state.
    Start(String),
    /// A symbol was consumed.
    Move {
        /// State before the symbol.
        from: String,
        /// The consumed symbol.
        symbol: String,
        /// State after the symbol.
        to: String,
    },
    /// The input was exhausted in this accepting state.
    Done(String),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Start(state) => write!(f, "START ➔ {state}"),
            Step::Move { from, symbol, to } => write!(f, "{from} --({symbol})--> {to}"),
            Step::Done(state) => write!(f, "DONE: {state}"),
        }
    }
}

/// Ordered records of the one path a simulation returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// An empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a start record.
    pub fn start(&mut self, state: &str) {
        self.steps.push(Step::Start(state.to_string()));
    }

    /// Appends a transition record.
    pub fn step(&mut self, from: &str, symbol: &str, to: &str) {
        self.steps.push(Step::Move {
            from: from.to_string(),
            symbol: symbol.to_string(),
            to: to.to_string(),
        });
    }

    /// Appends the completion marker.
    pub fn done(&mut self, state: &str) {
        self.steps.push(Step::Done(state.to_string()));
    }

    /// The records in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of symbols consumed along the recorded path.
    pub fn moves(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Move { .. }))
            .count()
    }

    /// True when the last record is a completion marker.
    pub fn is_done(&self) -> bool {
        matches!(self.steps.last(), Some(Step::Done(_)))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The records rendered as display lines.
    pub fn lines(&self) -> Vec<String> {
        self.steps.iter().map(Step::to_string).collect()
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

impl Serialize for Trace {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.steps.iter().map(Step::to_string))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_record_format() {
        let mut trace = Trace::new();
        trace.start("q0");
        trace.step("q0", "1", "q1");
        trace.done("q1");

        assert_eq!(trace.lines(), ["START ➔ q0", "q0 --(1)--> q1", "DONE: q1"]);
        assert_eq!(trace.to_string(), "START ➔ q0\nq0 --(1)--> q1\nDONE: q1");
        assert_eq!(trace.moves(), 1);
        assert!(trace.is_done());
    }

    #[test]
    fn test_empty() {
        let trace = Trace::new();
        assert!(trace.is_empty());
        assert!(!trace.is_done());
        assert_eq!(trace.to_string(), "");
    }
}

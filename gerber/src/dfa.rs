//! Deterministic simulation: one walk, halting at the first undefined (state, symbol) pair.

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::Run;
use crate::table::TransitionTable;
use crate::trace::Trace;

// MARK: DFA
/// Deterministic walk over a borrowed transition table.
/// A missing (state, symbol) entry halts the walk and rejects, the same verdict as ending
/// outside the accept set.
pub struct Dfa<'a> {
    table: &'a TransitionTable,
    start: &'a str,
    accepts: &'a HashSet<String>,
}

impl<'a> Dfa<'a> {
    /// Borrows everything needed for any number of runs.
    pub fn new(table: &'a TransitionTable, start: &'a str, accepts: &'a HashSet<String>) -> Self {
        Self {
            table,
            start,
            accepts,
        }
    }

    /// Runs the provided input sequence, accepting if the walk ends at an accept state.
    pub fn simulate_slice<S: AsRef<str>>(&self, input: &[S]) -> Run {
        self.simulate_iter(input.iter())
    }

    /// Runs the input sequence from an iterator, consuming no further symbols once a
    /// transition is missing.
    pub fn simulate_iter<S: AsRef<str>>(&self, input: impl Iterator<Item = S>) -> Run {
        let mut cur: &str = self.start;
        let mut steps = Trace::new();
        steps.start(cur);

        for symbol in input {
            let symbol = symbol.as_ref();
            let Some(next) = self.table.target(cur, symbol) else {
                debug!(state = cur, symbol, "no transition, rejecting");
                return Run::rejected(steps);
            };
            trace!(from = cur, symbol, to = next, "step");
            steps.step(cur, symbol, next);
            cur = next;
        }

        let accepted = self.accepts.contains(cur);
        debug!(state = cur, accepted, "input exhausted");
        Run {
            accepted,
            trace: steps,
        }
    }
}

/// Runs a DFA over `input` from `start`.
pub fn run<S: AsRef<str>>(
    table: &TransitionTable,
    start: &str,
    accepts: &HashSet<String>,
    input: &[S],
) -> Run {
    Dfa::new(table, start, accepts).simulate_slice(input)
}

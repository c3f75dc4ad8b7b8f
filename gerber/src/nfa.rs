//! Non-deterministic simulation by depth first search over (state, position) configurations.

use hashbrown::HashSet;
use tracing::{debug, trace};

use crate::Run;
use crate::table::TransitionTable;
use crate::trace::Trace;

/// One configuration on the search path, with the index of the next destination to try from it.
struct Frame<'a> {
    state: &'a str,
    position: usize,
    next: usize,
}

// MARK: NFA
/// Depth first search over (state, position) configurations of a borrowed transition table.
///
/// Destinations are tried in table order and the first accepting path wins; no shortest or
/// exhaustive guarantee is made. Every configuration is entered at most once per run, which
/// bounds the work by `|states| * (|input| + 1)` even when the table has cycles.
pub struct Nfa<'a> {
    table: &'a TransitionTable,
    start: &'a str,
    accepts: &'a HashSet<String>,
}

impl<'a> Nfa<'a> {
    /// Borrows everything needed for any number of runs.
    pub fn new(table: &'a TransitionTable, start: &'a str, accepts: &'a HashSet<String>) -> Self {
        Self {
            table,
            start,
            accepts,
        }
    }

    /// Simulates the NFA on the given input. On acceptance the trace holds the accepting path
    /// followed by a completion marker; on rejection it is empty.
    pub fn simulate_slice<S: AsRef<str>>(&self, input: &[S]) -> Run {
        // The path is the stack itself, so failed branches leave nothing behind when popped.
        let mut visited: HashSet<(&str, usize)> = HashSet::new();
        let mut stack: Vec<Frame<'_>> = Vec::with_capacity(input.len() + 1);

        visited.insert((self.start, 0));
        stack.push(Frame {
            state: self.start,
            position: 0,
            next: 0,
        });

        while let Some(frame) = stack.last_mut() {
            if frame.position == input.len() {
                if self.accepts.contains(frame.state) {
                    debug!(state = frame.state, explored = visited.len(), "accepting path found");
                    return Run::accepted(self.path(&stack, input));
                }
                stack.pop();
                continue;
            }

            let symbol = input[frame.position].as_ref();
            let targets = self.table.targets(frame.state, symbol);
            let Some(target) = targets.get(frame.next) else {
                stack.pop();
                continue;
            };
            frame.next += 1;

            let position = frame.position + 1;
            if !visited.insert((target.as_str(), position)) {
                trace!(state = target.as_str(), position, "already visited, pruned");
                continue;
            }
            trace!(from = frame.state, symbol, to = target.as_str(), position, "descend");
            stack.push(Frame {
                state: target,
                position,
                next: 0,
            });
        }

        debug!(explored = visited.len(), "no accepting path");
        Run::rejected(Trace::new())
    }

    /// Simulates the NFA on an iterator of symbols. The search needs random access, so the
    /// input is collected first.
    pub fn simulate_iter<S: AsRef<str>>(&self, input: impl Iterator<Item = S>) -> Run {
        let input: Vec<S> = input.collect();
        self.simulate_slice(&input)
    }

    fn path<S: AsRef<str>>(&self, stack: &[Frame<'_>], input: &[S]) -> Trace {
        let mut path = Trace::new();
        for pair in stack.windows(2) {
            path.step(pair[0].state, input[pair[0].position].as_ref(), pair[1].state);
        }
        if let Some(last) = stack.last() {
            path.done(last.state);
        }
        path
    }
}

/// Runs an NFA over `input` from `start`.
pub fn run<S: AsRef<str>>(
    table: &TransitionTable,
    start: &str,
    accepts: &HashSet<String>,
    input: &[S],
) -> Run {
    Nfa::new(table, start, accepts).simulate_slice(input)
}

#![warn(missing_docs)]

//! A small finite automaton engine: parse `from,symbol->to` rule text into a transition
//! table, then run it deterministically (DFA) or by depth first search over configurations
//! (NFA), recording the path taken.
//!
//! ```
//! use gerber::{Automaton, SymbolMode, rules, simulate, table::Kind};
//!
//! let automaton = Automaton::from_text("q0,q1", "0,1", "q0", "q1");
//! let table = rules::parse("q0,1->q1;q1,1->q1;q1,0->q0", Kind::Dfa);
//! let run = simulate(&automaton, &table, &automaton.symbols("11", SymbolMode::Chars));
//! assert!(run.accepted);
//! assert_eq!(run.trace.lines(), ["START ➔ q0", "q0 --(1)--> q1", "q1 --(1)--> q1"]);
//! ```

pub mod automaton;
pub mod dfa;
pub mod error;
pub mod nfa;
pub mod rules;
pub mod table;
pub mod trace;


use serde::Serialize;

pub use automaton::{Automaton, SymbolMode, split_labels};
pub use error::{Error, Result, RuleError, UnknownKind, ValidationError};
pub use rules::ParseMode;
pub use table::{Kind, TransitionTable};
pub use trace::{Step, Trace};

/// Verdict and trace of one simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    /// True if the input was accepted.
    pub accepted: bool,
    /// The path the simulator returned.
    pub trace: Trace,
}

impl Run {
    /// An accepting run with the given trace.
    pub fn accepted(trace: Trace) -> Self {
        Self {
            accepted: true,
            trace,
        }
    }

    /// A rejecting run with the given trace.
    pub fn rejected(trace: Trace) -> Self {
        Self {
            accepted: false,
            trace,
        }
    }
}

/// Runs the simulator matching the table's kind.
pub fn simulate<S: AsRef<str>>(automaton: &Automaton, table: &TransitionTable, input: &[S]) -> Run {
    match table.kind() {
        Kind::Dfa => dfa::run(table, &automaton.start, &automaton.accepts, input),
        Kind::Nfa => nfa::run(table, &automaton.start, &automaton.accepts, input),
    }
}

/// Parses `rules` and runs `input` through them. Strict mode additionally checks every label
/// against the descriptor and reports malformed clauses instead of dropping them.
pub fn simulate_text(
    automaton: &Automaton,
    rules: &str,
    kind: Kind,
    input: &str,
    mode: ParseMode,
    symbols: SymbolMode,
) -> Result<(TransitionTable, Run)> {
    let table = rules::parse_with(rules, kind, mode)?;
    if mode == ParseMode::Strict {
        automaton.validate(&table)?;
    }
    let run = simulate(automaton, &table, &automaton.symbols(input, symbols));
    Ok((table, run))
}

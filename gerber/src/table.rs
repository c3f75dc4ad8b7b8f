//! The transition table shared by the simulators and the grid renderer.

use std::fmt;
use std::str::FromStr;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::error::UnknownKind;

/// Most (state, symbol) pairs have one or two destinations, past that the list spills to the heap.
const TARGETS_HINT: usize = 2;

/// Destination list of one (state, symbol) pair. A DFA entry is always a singleton.
pub type Targets = SmallVec<[String; TARGETS_HINT]>;

/// Which simulator drives a table, and how repeated clauses for one pair are merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Kind {
    /// One destination per pair, last clause wins.
    #[serde(alias = "dfa")]
    Dfa,
    /// Destinations accumulate in clause order.
    #[serde(alias = "nfa")]
    Nfa,
}

impl FromStr for Kind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DFA" => Ok(Kind::Dfa),
            "NFA" => Ok(Kind::Nfa),
            _ => Err(UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Dfa => write!(f, "DFA"),
            Kind::Nfa => write!(f, "NFA"),
        }
    }
}

/// The parsed mapping from state to symbol to destinations, shared by both simulators and
/// the grid renderer.
/// Labels are not checked against any declared state set or alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    kind: Kind,
    rows: HashMap<String, HashMap<String, Targets>>,
}

impl TransitionTable {
    /// Creates an empty table of the given kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            rows: HashMap::new(),
        }
    }

    /// The kind this table was built for.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Adds destinations for (from, symbol). A DFA keeps only the first destination and
    /// overwrites any earlier entry; a blank first destination leaves the pair undefined.
    /// An NFA appends the non-blank destinations to the existing list.
    pub fn insert<I, S>(&mut self, from: &str, symbol: &str, targets: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets = targets.into_iter().map(Into::into);

        match self.kind {
            Kind::Dfa => match targets.next() {
                Some(first) if !first.is_empty() => {
                    let row = self.rows.entry(from.to_string()).or_default();
                    row.insert(symbol.to_string(), smallvec![first]);
                }
                _ => self.remove(from, symbol),
            },
            Kind::Nfa => {
                let mut targets = targets.filter(|target| !target.is_empty()).peekable();
                if targets.peek().is_none() {
                    return;
                }
                let row = self.rows.entry(from.to_string()).or_default();
                match row.get_mut(symbol) {
                    Some(existing) => existing.extend(targets),
                    None => {
                        row.insert(symbol.to_string(), targets.collect());
                    }
                }
            }
        }
    }

    /// Drops every destination of (from, symbol).
    pub fn remove(&mut self, from: &str, symbol: &str) {
        if let Some(row) = self.rows.get_mut(from) {
            row.remove(symbol);
            if row.is_empty() {
                self.rows.remove(from);
            }
        }
    }

    /// All destinations for (state, symbol), empty when no rule exists.
    pub fn targets(&self, state: &str, symbol: &str) -> &[String] {
        self.rows
            .get(state)
            .and_then(|row| row.get(symbol))
            .map(|targets| targets.as_slice())
            .unwrap_or(&[])
    }

    /// The single destination a DFA would take. For an NFA table this is the first listed
    /// destination.
    pub fn target(&self, state: &str, symbol: &str) -> Option<&str> {
        self.targets(state, symbol).first().map(String::as_str)
    }

    /// Iterates every (from, symbol, destinations) entry. Order is unspecified.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &[String])> {
        self.rows.iter().flat_map(|(from, row)| {
            row.iter()
                .map(move |(symbol, targets)| (from.as_str(), symbol.as_str(), targets.as_slice()))
        })
    }

    /// Number of (state, symbol) pairs that have at least one destination.
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// True when no rule was accepted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// MARK: Tests
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dfa_last_write_wins() {
        let mut table = TransitionTable::new(Kind::Dfa);
        table.insert("q0", "a", ["q1", "q2"]);
        assert_eq!(table.targets("q0", "a"), ["q1"]);

        table.insert("q0", "a", ["q3"]);
        assert_eq!(table.target("q0", "a"), Some("q3"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_nfa_accumulates() {
        let mut table = TransitionTable::new(Kind::Nfa);
        table.insert("A", "a", ["B"]);
        table.insert("A", "a", ["C", "D"]);
        table.insert("A", "b", ["A"]);

        assert_eq!(table.targets("A", "a"), ["B", "C", "D"]);
        assert_eq!(table.targets("A", "b"), ["A"]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_lookups_are_empty() {
        let mut table = TransitionTable::new(Kind::Nfa);
        assert!(table.is_empty());
        table.insert("A", "a", ["B"]);

        assert!(table.targets("A", "b").is_empty());
        assert!(table.targets("Z", "a").is_empty());
        assert_eq!(table.target("Z", "a"), None);
    }

    #[test]
    fn test_blank_destinations() {
        let mut table = TransitionTable::new(Kind::Dfa);
        table.insert("A", "a", ["B"]);
        table.insert("A", "a", ["", "C"]);
        assert_eq!(table.target("A", "a"), None);
        assert!(table.is_empty());

        let mut table = TransitionTable::new(Kind::Nfa);
        table.insert("A", "a", ["", ""]);
        table.insert("A", "a", [""]);
        assert!(table.is_empty());
        table.insert("A", "a", ["", "B"]);
        assert_eq!(table.targets("A", "a"), ["B"]);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("dfa".parse::<Kind>(), Ok(Kind::Dfa));
        assert_eq!(" NFA ".parse::<Kind>(), Ok(Kind::Nfa));
        assert_eq!("pda".parse::<Kind>(), Err(UnknownKind("pda".to_string())));
        assert_eq!(Kind::Nfa.to_string(), "NFA");
    }
}

//! The automaton descriptor the host hands to the engine, and input tokenization.

use hashbrown::HashSet;

use crate::error::ValidationError;
use crate::table::TransitionTable;

/// Splits comma separated label text, trimming each label and dropping empties.
pub fn split_labels(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}

/// States, alphabet, start state and accept states of one automaton. Nothing here is checked
/// against the transition table unless [`Automaton::validate`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Automaton {
    /// Declared states in order. Duplicates are kept.
    pub states: Vec<String>,
    /// Declared symbols in order.
    pub alphabet: Vec<String>,
    /// Start state label.
    pub start: String,
    /// Accept state labels.
    pub accepts: HashSet<String>,
}

impl Automaton {
    /// Builds a descriptor from the host's raw text fields.
    pub fn from_text(states: &str, alphabet: &str, start: &str, accepts: &str) -> Self {
        Self {
            states: split_labels(states),
            alphabet: split_labels(alphabet),
            start: start.trim().to_string(),
            accepts: split_labels(accepts).into_iter().collect(),
        }
    }

    /// True if `state` is an accept state.
    pub fn is_accept(&self, state: &str) -> bool {
        self.accepts.contains(state)
    }

    /// Checks every label used by the descriptor and the table against the declared states
    /// and alphabet, reporting the first one that is missing.
    pub fn validate(&self, table: &TransitionTable) -> Result<(), ValidationError> {
        let declared = |state: &str| self.states.iter().any(|s| s == state);

        if !declared(&self.start) {
            return Err(ValidationError::UndeclaredStart(self.start.clone()));
        }
        // Sorted so the reported state does not depend on hash order.
        let mut accepts: Vec<&String> = self.accepts.iter().collect();
        accepts.sort();
        if let Some(state) = accepts.into_iter().find(|s| !declared(s)) {
            return Err(ValidationError::UndeclaredAccept(state.clone()));
        }

        let mut entries: Vec<_> = table.entries().collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        for (from, symbol, targets) in entries {
            if !declared(from) {
                return Err(ValidationError::UndeclaredSource(from.to_string()));
            }
            if !self.alphabet.iter().any(|s| s == symbol) {
                return Err(ValidationError::UndeclaredSymbol(symbol.to_string()));
            }
            if let Some(to) = targets.iter().find(|to| !declared(to)) {
                return Err(ValidationError::UndeclaredDestination(to.clone()));
            }
        }
        Ok(())
    }

    /// Splits `input` into symbols with the given mode.
    pub fn symbols<'i>(&self, input: &'i str, mode: SymbolMode) -> Vec<&'i str> {
        match mode {
            SymbolMode::Chars => chars(input),
            SymbolMode::Alphabet => longest_match(input, &self.alphabet),
        }
    }
}

/// How an input string is cut into symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SymbolMode {
    /// One character per step.
    #[default]
    Chars,
    /// Greedy longest match against the alphabet, one character where nothing matches.
    Alphabet,
}

/// One symbol per character, borrowing from the input.
pub fn chars(input: &str) -> Vec<&str> {
    input
        .char_indices()
        .map(|(i, c)| &input[i..i + c.len_utf8()])
        .collect()
}

/// Greedy longest match tokenization. An unmatched character becomes a symbol of its own,
/// which the simulators then treat as a missing transition.
pub fn longest_match<'i>(input: &'i str, alphabet: &[String]) -> Vec<&'i str> {
    let mut symbols = Vec::new();
    let mut rest = input;

    while let Some(c) = rest.chars().next() {
        let len = alphabet
            .iter()
            .filter(|symbol| !symbol.is_empty() && rest.starts_with(symbol.as_str()))
            .map(String::len)
            .max()
            .unwrap_or(c.len_utf8());
        let (symbol, tail) = rest.split_at(len);
        symbols.push(symbol);
        rest = tail;
    }
    symbols
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rules::parse;
    use crate::table::Kind;

    #[test]
    fn test_split_labels() {
        assert_eq!(split_labels(" q0, q1 ,,q2 ,"), ["q0", "q1", "q2"]);
        assert!(split_labels("  ").is_empty());
    }

    #[test]
    fn test_from_text() {
        let automaton = Automaton::from_text("q0,q1", "0,1", " q0 ", "q1,");
        assert_eq!(automaton.states, ["q0", "q1"]);
        assert_eq!(automaton.alphabet, ["0", "1"]);
        assert_eq!(automaton.start, "q0");
        assert!(automaton.is_accept("q1"));
        assert!(!automaton.is_accept("q0"));
    }

    #[test]
    fn test_validate() {
        let automaton = Automaton::from_text("q0,q1", "0,1", "q0", "q1");
        assert_eq!(automaton.validate(&parse("q0,1->q1;q1,0->q0", Kind::Dfa)), Ok(()));
        assert_eq!(
            automaton.validate(&parse("q0,1->q9", Kind::Dfa)),
            Err(ValidationError::UndeclaredDestination("q9".to_string()))
        );
        assert_eq!(
            automaton.validate(&parse("q0,2->q1", Kind::Dfa)),
            Err(ValidationError::UndeclaredSymbol("2".to_string()))
        );
        assert_eq!(
            automaton.validate(&parse("qx,1->q1", Kind::Dfa)),
            Err(ValidationError::UndeclaredSource("qx".to_string()))
        );

        let bad_start = Automaton::from_text("q0", "0", "s", "q0");
        assert_eq!(
            bad_start.validate(&TransitionTable::new(Kind::Nfa)),
            Err(ValidationError::UndeclaredStart("s".to_string()))
        );
        let bad_accept = Automaton::from_text("q0", "0", "q0", "f");
        assert_eq!(
            bad_accept.validate(&TransitionTable::new(Kind::Nfa)),
            Err(ValidationError::UndeclaredAccept("f".to_string()))
        );
    }

    #[test]
    fn test_char_symbols() {
        let automaton = Automaton::default();
        assert_eq!(automaton.symbols("a➔b", SymbolMode::Chars), ["a", "➔", "b"]);
        assert!(automaton.symbols("", SymbolMode::Chars).is_empty());
    }

    #[test]
    fn test_alphabet_symbols() {
        let automaton = Automaton::from_text("s", "a, ab, b, 10", "s", "s");
        assert_eq!(automaton.symbols("abab", SymbolMode::Alphabet), ["ab", "ab"]);
        assert_eq!(automaton.symbols("aab", SymbolMode::Alphabet), ["a", "ab"]);
        assert_eq!(automaton.symbols("10x1", SymbolMode::Alphabet), ["10", "x", "1"]);
    }
}

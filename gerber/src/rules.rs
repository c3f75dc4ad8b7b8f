//! Rule text parsing.
//!
//! Rules are `;` separated clauses of the form `from,symbol->to1,to2,...`. In the default
//! [`ParseMode::Permissive`] mode a clause without `->`, without a symbol, or with a blank
//! state or symbol is silently dropped, fields past `from,symbol` are ignored, and blank
//! destinations are kept for the table to resolve. [`ParseMode::Strict`] reports the first
//! such clause instead.

use tracing::debug;

use crate::error::RuleError;
use crate::table::{Kind, TransitionTable};

/// How malformed clauses are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Drop malformed clauses.
    #[default]
    Permissive,
    /// Fail on the first malformed clause.
    Strict,
}

/// A usable clause, borrowing from the rule text. Destinations may be blank in permissive mode.
#[derive(Debug, PartialEq, Eq)]
struct Clause<'a> {
    from: &'a str,
    symbol: &'a str,
    targets: Vec<&'a str>,
}

/// Parses rule text into a table, dropping malformed clauses.
pub fn parse(text: &str, kind: Kind) -> TransitionTable {
    let mut table = TransitionTable::new(kind);
    let mut dropped = 0;

    for (i, raw) in text.split(';').enumerate() {
        match parse_clause(i + 1, raw, ParseMode::Permissive) {
            Ok(Some(clause)) => table.insert(clause.from, clause.symbol, clause.targets),
            Ok(None) => {}
            Err(err) => {
                debug!(%err, "dropping malformed clause");
                dropped += 1;
            }
        }
    }

    debug!(%kind, pairs = table.len(), dropped, "parsed rules");
    table
}

/// Parses rule text into a table, failing on the first malformed clause.
/// Blank clauses are still skipped.
pub fn parse_strict(text: &str, kind: Kind) -> Result<TransitionTable, RuleError> {
    let mut table = TransitionTable::new(kind);

    for (i, raw) in text.split(';').enumerate() {
        if let Some(clause) = parse_clause(i + 1, raw, ParseMode::Strict)? {
            table.insert(clause.from, clause.symbol, clause.targets);
        }
    }

    debug!(%kind, pairs = table.len(), "parsed rules strictly");
    Ok(table)
}

/// Parses rule text with the given mode. Permissive parsing never fails.
pub fn parse_with(text: &str, kind: Kind, mode: ParseMode) -> Result<TransitionTable, RuleError> {
    match mode {
        ParseMode::Permissive => Ok(parse(text, kind)),
        ParseMode::Strict => parse_strict(text, kind),
    }
}

/// `Ok(None)` for a blank clause.
fn parse_clause(
    index: usize,
    raw: &str,
    mode: ParseMode,
) -> Result<Option<Clause<'_>>, RuleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let strict = mode == ParseMode::Strict;
    let error_text = || trimmed.to_string();

    let Some((left, right)) = trimmed.split_once("->") else {
        return Err(RuleError::MissingArrow { clause: index, text: error_text() });
    };

    let mut fields = left.split(',');
    let from = fields.next().unwrap_or_default().trim();
    let Some(symbol) = fields.next().map(str::trim) else {
        return Err(RuleError::MissingSymbol { clause: index, text: error_text() });
    };
    if strict && fields.next().is_some() {
        return Err(RuleError::ExtraFields { clause: index, text: error_text() });
    }
    if from.is_empty() || symbol.is_empty() {
        return Err(RuleError::EmptyLabel { clause: index, text: error_text() });
    }

    let targets: Vec<&str> = right.split(',').map(str::trim).collect();
    if strict {
        if targets.iter().all(|target| target.is_empty()) {
            return Err(RuleError::NoDestinations { clause: index, text: error_text() });
        }
        if targets.iter().any(|target| target.is_empty()) {
            return Err(RuleError::BlankDestination { clause: index, text: error_text() });
        }
    }

    Ok(Some(Clause { from, symbol, targets }))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_dfa_rules() {
        let table = parse("q0,1->q1;q1,1->q1;q1,0->q0", Kind::Dfa);
        assert_eq!(table.len(), 3);
        assert_eq!(table.target("q0", "1"), Some("q1"));
        assert_eq!(table.target("q1", "0"), Some("q0"));
        assert_eq!(table.target("q0", "0"), None);
    }

    #[test]
    fn test_dfa_keeps_first_destination_and_last_clause() {
        let table = parse("A,a->B,C; A,a->D", Kind::Dfa);
        assert_eq!(table.targets("A", "a"), ["D"]);

        let table = parse("A,a->B,C", Kind::Dfa);
        assert_eq!(table.targets("A", "a"), ["B"]);
    }

    #[test]
    fn test_nfa_rules_accumulate() {
        let table = parse("A,a->B, C ;A,b->A; A,a->A", Kind::Nfa);
        assert_eq!(table.targets("A", "a"), ["B", "C", "A"]);
        assert_eq!(table.targets("A", "b"), ["A"]);
    }

    #[test]
    fn test_malformed_clauses_dropped() {
        let messy = parse("garbage;;A,a->B", Kind::Nfa);
        let clean = parse("A,a->B", Kind::Nfa);
        assert_eq!(messy, clean);

        let table = parse("A->B; ,a->B; A,->B", Kind::Nfa);
        assert!(table.is_empty());
    }

    #[test]
    fn test_extra_left_fields_ignored() {
        let table = parse("A,a,b->C", Kind::Nfa);
        assert_eq!(table.targets("A", "a"), ["C"]);
        assert!(table.targets("A", "b").is_empty());

        let table = parse("A,a,b->C", Kind::Dfa);
        assert_eq!(table.target("A", "a"), Some("C"));
    }

    #[test]
    fn test_blank_dfa_destination_clears_pair() {
        let table = parse("A,a->B;A,a->", Kind::Dfa);
        assert_eq!(table.target("A", "a"), None);

        // the first listed destination is the blank one
        let table = parse("A,a->B;A,a-> ,C", Kind::Dfa);
        assert_eq!(table.target("A", "a"), None);

        let table = parse("A,a->;A,a->B", Kind::Dfa);
        assert_eq!(table.target("A", "a"), Some("B"));
    }

    #[test]
    fn test_blank_nfa_destinations_skipped() {
        let table = parse("A,a->B;A,a->; A,a-> ,C", Kind::Nfa);
        assert_eq!(table.targets("A", "a"), ["B", "C"]);
    }

    #[test]
    fn test_undeclared_labels_accepted() {
        let table = parse("nowhere,#->elsewhere", Kind::Dfa);
        assert_eq!(table.target("nowhere", "#"), Some("elsewhere"));
    }

    #[test]
    fn test_split_once_on_arrow() {
        let table = parse("A,a->B->C", Kind::Nfa);
        assert_eq!(table.targets("A", "a"), ["B->C"]);
    }

    #[test]
    fn test_strict_reports_clause() {
        assert_eq!(
            parse_strict("A,a->B;garbage", Kind::Nfa),
            Err(RuleError::MissingArrow { clause: 2, text: "garbage".to_string() })
        );
        assert_eq!(
            parse_strict("A->B", Kind::Dfa),
            Err(RuleError::MissingSymbol { clause: 1, text: "A->B".to_string() })
        );
        assert_eq!(
            parse_strict("A,a,b->B", Kind::Dfa),
            Err(RuleError::ExtraFields { clause: 1, text: "A,a,b->B".to_string() })
        );
        assert_eq!(
            parse_strict(" ,a->B", Kind::Dfa),
            Err(RuleError::EmptyLabel { clause: 1, text: ",a->B".to_string() })
        );
        assert_eq!(
            parse_strict("A,a-> , ", Kind::Dfa),
            Err(RuleError::NoDestinations { clause: 1, text: "A,a-> ,".to_string() })
        );
        assert_eq!(
            parse_strict("A,a->B,,C", Kind::Nfa),
            Err(RuleError::BlankDestination { clause: 1, text: "A,a->B,,C".to_string() })
        );
    }

    #[test]
    fn test_strict_skips_blank_clauses() {
        let table = parse_strict("A,a->B;; ;", Kind::Dfa).unwrap();
        assert_eq!(table, parse("A,a->B", Kind::Dfa));
    }

    #[test]
    fn test_parse_with_mode() {
        assert!(parse_with("bad", Kind::Dfa, ParseMode::Permissive).unwrap().is_empty());
        assert!(parse_with("bad", Kind::Dfa, ParseMode::Strict).is_err());
    }
}

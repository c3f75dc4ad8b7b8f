//! Text output for the transition grid and the simulation result.

use gerber::{Automaton, Kind, Run, TransitionTable};

/// Renders one row per declared state and one column per alphabet symbol.
/// DFA cells hold the destination, NFA cells `{a, b}`, missing cells `-`.
pub fn table(table: &TransitionTable, automaton: &Automaton) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(automaton.states.len() + 1);

    let mut header = vec!["State".to_string()];
    header.extend(automaton.alphabet.iter().cloned());
    rows.push(header);

    for state in &automaton.states {
        let mut row = vec![state.clone()];
        for symbol in &automaton.alphabet {
            row.push(cell(table, state, symbol));
        }
        rows.push(row);
    }

    let columns = rows[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| rows.iter().map(|row| row[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(text, &width)| format!("{text:<width$}"))
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
        if i == 0 {
            let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
            out.push_str(&rule.join("-+-"));
            out.push('\n');
        }
    }
    out
}

fn cell(table: &TransitionTable, state: &str, symbol: &str) -> String {
    let targets = table.targets(state, symbol);
    match (table.kind(), targets) {
        (_, []) => "-".to_string(),
        (Kind::Dfa, [only, ..]) => only.clone(),
        (Kind::Nfa, targets) => format!("{{{}}}", targets.join(", ")),
    }
}

/// Verdict line, a blank line, then the trace one record per line.
pub fn result(run: &Run) -> String {
    let verdict = if run.accepted {
        "✅ Input Accepted"
    } else {
        "❌ Input Rejected"
    };
    format!("{verdict}\n\n{}", run.trace)
}

#[cfg(test)]
mod test {
    use super::*;
    use gerber::rules::parse;

    #[test]
    fn test_dfa_grid() {
        let automaton = Automaton::from_text("q0,q1", "0,1", "q0", "q1");
        let grid = table(&parse("q0,1->q1;q1,1->q1;q1,0->q0", Kind::Dfa), &automaton);

        assert_eq!(
            grid,
            "State | 0  | 1\n\
             ------+----+---\n\
             q0    | -  | q1\n\
             q1    | q0 | q1\n"
        );
    }

    #[test]
    fn test_nfa_cells() {
        let table = parse("A,a->B,C", Kind::Nfa);
        assert_eq!(cell(&table, "A", "a"), "{B, C}");
        assert_eq!(cell(&table, "B", "a"), "-");
    }

    #[test]
    fn test_result_text() {
        let automaton = Automaton::from_text("q0,q1", "0,1", "q0", "q1");
        let table = parse("q0,1->q1", Kind::Dfa);

        let run = gerber::simulate(&automaton, &table, &["1"]);
        assert_eq!(result(&run), "✅ Input Accepted\n\nSTART ➔ q0\nq0 --(1)--> q1");

        let run = gerber::simulate(&automaton, &table, &["0"]);
        assert_eq!(result(&run), "❌ Input Rejected\n\nSTART ➔ q0");
    }
}

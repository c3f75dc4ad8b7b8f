use std::time::Instant;

use gerber::dfa::Dfa;
use gerber::nfa::Nfa;
use gerber::rules::parse;
use gerber::{Automaton, Kind};

pub fn main() {
    // fourth symbol from the end is a 1
    let automaton = Automaton::from_text("s0,s1,s2,s3,s4", "0,1", "s0", "s4");
    let nfa_table = parse(
        "s0,1->s0,s1;s0,0->s0;s1,0->s2;s1,1->s2;s2,0->s3;s2,1->s3;s3,0->s4;s3,1->s4",
        Kind::Nfa,
    );
    let nfa = Nfa::new(&nfa_table, &automaton.start, &automaton.accepts);

    let mut test = vec!["1"; 100_000];
    test.extend(["0", "0", "0"]);

    let start = Instant::now();
    assert!(nfa.simulate_slice(&test).accepted);
    test.push("1");
    assert!(!nfa.simulate_slice(&test).accepted);
    println!("Nfa big input {:?}", start.elapsed());

    let parity = Automaton::from_text("e,o", "0,1", "e", "e");
    let dfa_table = parse("e,0->e;e,1->o;o,0->o;o,1->e", Kind::Dfa);
    let dfa = Dfa::new(&dfa_table, &parity.start, &parity.accepts);

    let start = Instant::now();
    assert!(!dfa.simulate_slice(&test).accepted);
    test.push("1");
    assert!(dfa.simulate_slice(&test).accepted);
    println!("Dfa big input {:?}", start.elapsed());
}

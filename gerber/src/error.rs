//! Error kinds for strict parsing and validation. The permissive mode never produces these.

use thiserror::Error;

/// A malformed clause found while parsing rule text in strict mode.
/// `clause` is the position of the clause among the `;` separated pieces.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// No `->` separates the two sides.
    #[error("clause {clause} `{text}` has no `->`")]
    MissingArrow {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
    /// The left side has no `,` separating state and symbol.
    #[error("clause {clause} `{text}` has no symbol, expected `from,symbol->to`")]
    MissingSymbol {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
    /// The left side has more than `from,symbol`.
    #[error("clause {clause} `{text}` has more than two fields left of `->`")]
    ExtraFields {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
    /// The state or symbol on the left side is blank.
    #[error("clause {clause} `{text}` has an empty state or symbol label")]
    EmptyLabel {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
    /// Nothing but blanks right of `->`.
    #[error("clause {clause} `{text}` has no destination states")]
    NoDestinations {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
    /// A blank entry in the destination list.
    #[error("clause {clause} `{text}` has a blank destination state")]
    BlankDestination {
        /// 1-based clause position.
        clause: usize,
        /// The trimmed clause.
        text: String,
    },
}

/// A label used by the automaton that was never declared.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The start state.
    #[error("start state `{0}` is not declared")]
    UndeclaredStart(String),
    /// An accept state.
    #[error("accept state `{0}` is not declared")]
    UndeclaredAccept(String),
    /// The `from` side of a rule.
    #[error("rule source `{0}` is not a declared state")]
    UndeclaredSource(String),
    /// A destination of a rule.
    #[error("rule destination `{0}` is not a declared state")]
    UndeclaredDestination(String),
    /// The symbol of a rule.
    #[error("rule symbol `{0}` is not in the alphabet")]
    UndeclaredSymbol(String),
}

/// Returned when automaton kind text is neither `DFA` nor `NFA`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown automaton kind `{0}`, expected DFA or NFA")]
pub struct UnknownKind(pub String);

/// Any error the engine can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Strict parsing failed.
    #[error("rule error: {0}")]
    Rule(#[from] RuleError),
    /// Strict validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    /// Bad automaton kind text.
    #[error(transparent)]
    Kind(#[from] UnknownKind),
}

/// Shorthand for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

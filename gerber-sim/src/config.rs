//! Simulation settings: the JSON automaton file, command line overrides, and log levels.

use std::path::Path;

use gerber::{Automaton, Kind, split_labels};
use serde::Deserialize;
use tracing::Level;

/// Label list given either as host UI text (`"q0, q1"`) or as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Labels {
    Text(String),
    List(Vec<String>),
}

impl Labels {
    /// Trimmed, non-empty labels in order.
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Labels::Text(text) => split_labels(text),
            Labels::List(list) => list.iter().flat_map(|label| split_labels(label)).collect(),
        }
    }
}

/// Contents of an automaton file. Every field may be left out and supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutomatonFile {
    pub kind: Option<Kind>,
    pub states: Option<Labels>,
    pub alphabet: Option<Labels>,
    pub start: Option<String>,
    pub accept: Option<Labels>,
    pub transitions: Option<String>,
    pub input: Option<String>,
}

impl AutomatonFile {
    pub fn read(path: &Path) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
        Self::from_json(&text)
            .map_err(|e| format!("invalid automaton file '{}': {}", path.display(), e))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Fields set in `other` replace fields in `self`.
    pub fn overlay(self, other: AutomatonFile) -> Self {
        Self {
            kind: other.kind.or(self.kind),
            states: other.states.or(self.states),
            alphabet: other.alphabet.or(self.alphabet),
            start: other.start.or(self.start),
            accept: other.accept.or(self.accept),
            transitions: other.transitions.or(self.transitions),
            input: other.input.or(self.input),
        }
    }
}

/// Everything one simulation needs, with host defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub kind: Kind,
    pub automaton: Automaton,
    pub transitions: String,
    pub input: String,
}

impl TryFrom<AutomatonFile> for SimConfig {
    type Error = String;

    fn try_from(file: AutomatonFile) -> Result<Self, Self::Error> {
        let labels = |labels: Option<Labels>| labels.map(|l| l.to_vec()).unwrap_or_default();

        let start = file.start.unwrap_or_default().trim().to_string();
        if start.is_empty() {
            return Err("no start state given (use --start or \"start\")".to_string());
        }

        Ok(Self {
            kind: file.kind.unwrap_or(Kind::Dfa),
            automaton: Automaton {
                states: labels(file.states),
                alphabet: labels(file.alphabet),
                start,
                accepts: labels(file.accept).into_iter().collect(),
            },
            transitions: file.transitions.unwrap_or_default().trim().to_string(),
            input: file.input.unwrap_or_default().trim().to_string(),
        })
    }
}

/// Log levels, with optional per-module overrides.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub rules: Option<Level>,
    pub dfa: Option<Level>,
    pub nfa: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            rules: None,
            dfa: None,
            nfa: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "gerber::rules" => self.rules.unwrap_or(self.global),
            "gerber::dfa" => self.dfa.unwrap_or(self.global),
            "gerber::nfa" => self.nfa.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

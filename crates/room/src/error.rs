//! Error types for room reasoning

use thiserror::Error;

use crate::object::Object;

/// Main error type for room operations
#[derive(Error, Debug)]
pub enum Error {
    /// A speech-act could not happen in the room
    #[error(transparent)]
    Room(#[from] RoomError),

    /// Sentence or object text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A scenario could not be loaded
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

/// Result type alias for room operations
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a speech-act fails inside a room.
///
/// A failing action never changes the room.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomError {
    /// No object in the room matches the pattern
    #[error("nothing in the room matches `{pattern}`")]
    NotFound {
        /// The pattern that was looked up
        pattern: Object,
    },

    /// More than one object matches the pattern
    #[error("`{pattern}` is ambiguous, it matches objects {candidates:?}")]
    Ambiguous {
        /// The pattern that was looked up
        pattern: Object,
        /// Indices of every matching object
        candidates: Vec<usize>,
    },

    /// Two roles of the action resolve to the same object
    #[error("`{pattern}` refers to object [{index}] which already takes part in the action")]
    NotDistinct {
        /// The pattern that collided
        pattern: Object,
        /// Index of the shared object
        index: usize,
    },

    /// A required property does not hold
    #[error("`{object}` must be `{property}`")]
    Unmet {
        /// The object carrying the requirement
        object: Object,
        /// The property it lacks
        property: Object,
    },

    /// A preventing property holds
    #[error("`{object}` is `{property}`")]
    Prevented {
        /// The object carrying the property
        object: Object,
        /// The property that blocks the action
        property: Object,
    },
}

/// Error raised by the sentence frontend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended early
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd {
        /// What the parser was looking for
        expected: String,
    },

    /// A token that does not fit the grammar
    #[error("unexpected `{found}` at column {column}, expected {expected}")]
    UnexpectedToken {
        /// The offending token text
        found: String,
        /// What the parser was looking for
        expected: String,
        /// 1-based column
        column: usize,
    },

    /// A word that names no object, verb or property
    #[error("unknown word `{word}` at column {column}")]
    UnknownWord {
        /// The word
        word: String,
        /// 1-based column
        column: usize,
    },

    /// A character the lexer does not accept
    #[error("unexpected character `{ch}` at column {column}")]
    InvalidChar {
        /// The character
        ch: char,
        /// 1-based column
        column: usize,
    },

    /// A quoted name without its closing quote
    #[error("unterminated name starting at column {column}")]
    UnterminatedName {
        /// 1-based column of the opening quote
        column: usize,
    },

    /// Parentheses nested deeper than the parser accepts
    #[error("nesting too deep at column {column}")]
    TooDeep {
        /// 1-based column where the limit was reached
        column: usize,
    },
}

/// Error raised while loading a scenario.
#[derive(Error, Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// The scenario is not valid JSON for the scenario schema
    #[error("invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    /// A term or sentence inside the scenario does not parse
    #[error("in {label}: {source}")]
    Parse {
        /// Which object or step contained the text
        label: String,
        /// The underlying parse error
        #[source]
        source: ParseError,
    },
}

//! State adjectives

use serde::{Deserialize, Serialize};
use std::fmt;

/// A state an object can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Adjective {
    /// Killed by someone
    Dead,
    /// Killed someone
    Murderer,
    /// Open, like a door
    Open,
    /// Closed, like a door
    Closed,
    /// Locked with a key
    Locked,
    /// Unlocked with a key
    Unlocked,
}

impl Adjective {
    /// All adjectives, in declaration order.
    pub const ALL: [Adjective; 6] = [
        Adjective::Dead,
        Adjective::Murderer,
        Adjective::Open,
        Adjective::Closed,
        Adjective::Locked,
        Adjective::Unlocked,
    ];

    /// The word used for this adjective in sentences.
    pub fn word(self) -> &'static str {
        match self {
            Adjective::Dead => "dead",
            Adjective::Murderer => "murderer",
            Adjective::Open => "open",
            Adjective::Closed => "closed",
            Adjective::Locked => "locked",
            Adjective::Unlocked => "unlocked",
        }
    }

    /// Look up an adjective by its word.
    pub fn from_word(word: &str) -> Option<Adjective> {
        Self::ALL.into_iter().find(|a| a.word() == word)
    }
}

impl fmt::Display for Adjective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

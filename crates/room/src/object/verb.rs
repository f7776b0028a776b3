//! Verbs recorded in an object's history

use serde::{Deserialize, Serialize};
use std::fmt;

/// What an action does.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verb {
    Carry,
    Climb,
    Close,
    Give,
    Kill,
    LeanToward,
    Lock,
    Move,
    Open,
    PickUp,
    Play,
    PutDown,
    SleepIn,
    StandOn,
    Talk,
    WakeUpIn,
    WalkThrough,
    Unlock,
}

impl Verb {
    /// Every verb, in declaration order.
    pub const ALL: [Verb; 18] = [
        Verb::Carry,
        Verb::Climb,
        Verb::Close,
        Verb::Give,
        Verb::Kill,
        Verb::LeanToward,
        Verb::Lock,
        Verb::Move,
        Verb::Open,
        Verb::PickUp,
        Verb::Play,
        Verb::PutDown,
        Verb::SleepIn,
        Verb::StandOn,
        Verb::Talk,
        Verb::WakeUpIn,
        Verb::WalkThrough,
        Verb::Unlock,
    ];

    /// Kebab-case word, as used inside `did(..)` and `was(..)`.
    pub fn word(self) -> &'static str {
        match self {
            Verb::Carry => "carry",
            Verb::Climb => "climb",
            Verb::Close => "close",
            Verb::Give => "give",
            Verb::Kill => "kill",
            Verb::LeanToward => "lean-toward",
            Verb::Lock => "lock",
            Verb::Move => "move",
            Verb::Open => "open",
            Verb::PickUp => "pick-up",
            Verb::Play => "play",
            Verb::PutDown => "put-down",
            Verb::SleepIn => "sleep-in",
            Verb::StandOn => "stand-on",
            Verb::Talk => "talk",
            Verb::WakeUpIn => "wake-up-in",
            Verb::WalkThrough => "walk-through",
            Verb::Unlock => "unlock",
        }
    }

    /// Look up a verb by its word.
    pub fn from_word(word: &str) -> Option<Verb> {
        Self::ALL.into_iter().find(|v| v.word() == word)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

//! Sentence frontend
//!
//! A small text syntax for objects and speech-acts, so that rooms can be
//! described in scenario files and driven interactively.
//!
//! ```text
//! I & has-not(key-to(#door))        an object: me, without the door key
//! I picks-up key-to(#door)          a speech-act
//! @Sheila kills killed(@John)       whoever killed John
//! I climbs #ladder to on #roof
//! and(#apple)                       a conjunction of one
//! ```
//!
//! # Architecture
//!
//! ```text
//! Text → [lexer] → tokens → [parser] → Object / Sentence → Action → Room
//! ```

mod lexer;
mod parser;

pub use lexer::{tokenize, Token, TokenKind};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::action::Action;
use crate::error::ParseError;
use crate::object::{Object, Placement};
use parser::Parser;

/// Parse a single object term.
pub fn parse_object(input: &str) -> Result<Object, ParseError> {
    let mut parser = Parser::new(input)?;
    let obj = parser.term()?;
    parser.finish()?;
    Ok(obj)
}

/// Parse a speech-act sentence.
pub fn parse_sentence(input: &str) -> Result<Sentence, ParseError> {
    let mut parser = Parser::new(input)?;
    let sentence = parser.sentence()?;
    parser.finish()?;
    Ok(sentence)
}

/// Parse a whitespace-separated sequence of object terms.
///
/// `he & dead locked` reads as two terms: `he & dead` and `locked`.
pub fn parse_terms(input: &str) -> Result<Vec<Object>, ParseError> {
    let mut parser = Parser::new(input)?;
    let mut terms = Vec::new();
    while !parser.at_end() {
        terms.push(parser.term()?);
    }
    Ok(terms)
}

/// A speech-act whose verb takes a single object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Deed {
    /// `kills`
    Kills,
    /// `talks-to`
    TalksTo,
    /// `opens`
    Opens,
    /// `closes`
    Closes,
    /// `walks-through`
    WalksThrough,
    /// `locks`
    Locks,
    /// `unlocks`
    Unlocks,
    /// `picks-up`
    PicksUp,
    /// `carries`
    Carries,
    /// `puts-down`
    PutsDown,
    /// `stands-on`
    StandsOn,
    /// `leans-toward`
    LeansToward,
    /// `sleeps-in`
    SleepsIn,
    /// `wakes-up-in`
    WakesUpIn,
    /// `climbs-out-of`
    ClimbsOutOf,
    /// `climbs-into`
    ClimbsInto,
}

impl Deed {
    /// Every deed, in declaration order.
    pub const ALL: [Deed; 16] = [
        Deed::Kills,
        Deed::TalksTo,
        Deed::Opens,
        Deed::Closes,
        Deed::WalksThrough,
        Deed::Locks,
        Deed::Unlocks,
        Deed::PicksUp,
        Deed::Carries,
        Deed::PutsDown,
        Deed::StandsOn,
        Deed::LeansToward,
        Deed::SleepsIn,
        Deed::WakesUpIn,
        Deed::ClimbsOutOf,
        Deed::ClimbsInto,
    ];

    /// The verb word in sentences.
    pub fn word(self) -> &'static str {
        match self {
            Deed::Kills => "kills",
            Deed::TalksTo => "talks-to",
            Deed::Opens => "opens",
            Deed::Closes => "closes",
            Deed::WalksThrough => "walks-through",
            Deed::Locks => "locks",
            Deed::Unlocks => "unlocks",
            Deed::PicksUp => "picks-up",
            Deed::Carries => "carries",
            Deed::PutsDown => "puts-down",
            Deed::StandsOn => "stands-on",
            Deed::LeansToward => "leans-toward",
            Deed::SleepsIn => "sleeps-in",
            Deed::WakesUpIn => "wakes-up-in",
            Deed::ClimbsOutOf => "climbs-out-of",
            Deed::ClimbsInto => "climbs-into",
        }
    }

    /// Look up a deed by its verb word.
    pub fn from_word(word: &str) -> Option<Deed> {
        Self::ALL.into_iter().find(|d| d.word() == word)
    }

    /// Build the action of `subject` doing this to `object`.
    pub fn action(self, subject: Object, object: Object) -> Action {
        match self {
            Deed::Kills => subject.kills(object),
            Deed::TalksTo => subject.talk_to(object),
            Deed::Opens => subject.opens(object),
            Deed::Closes => subject.closes(object),
            Deed::WalksThrough => subject.walks_through(object),
            Deed::Locks => subject.locks(object),
            Deed::Unlocks => subject.unlocks(object),
            Deed::PicksUp => subject.picks_up(object),
            Deed::Carries => subject.carries(object),
            Deed::PutsDown => subject.puts_down(object),
            Deed::StandsOn => subject.stands_on(object),
            Deed::LeansToward => subject.leans_toward(object),
            Deed::SleepsIn => subject.sleeps_in(object),
            Deed::WakesUpIn => subject.wakes_up_in(object),
            Deed::ClimbsOutOf => subject.climbs_out_of(object),
            Deed::ClimbsInto => subject.climbs_into(object),
        }
    }
}

impl fmt::Display for Deed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// A parsed speech-act.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sentence {
    /// `<subject> <deed> <object>`
    Does {
        /// Who acts
        subject: Object,
        /// What is done
        deed: Deed,
        /// To whom or what
        object: Object,
    },

    /// `<subject> moves <object> <placement>`
    Moves {
        /// Who moves
        subject: Object,
        /// What is moved
        object: Object,
        /// Where it ends up
        place: Placement,
    },

    /// `<subject> gives <item> to <receiver>`
    Gives {
        /// The giver
        subject: Object,
        /// What changes hands
        item: Object,
        /// The receiver
        to: Object,
    },

    /// `<subject> climbs <object> to <placement>`
    Climbs {
        /// The climber
        subject: Object,
        /// What is climbed
        object: Object,
        /// Where the climber ends up
        place: Placement,
    },

    /// `<subject> plays <game> against <opponent>`
    Plays {
        /// The player
        subject: Object,
        /// The game
        game: Object,
        /// The other player
        opponent: Object,
    },
}

impl Sentence {
    /// The acting object.
    pub fn subject(&self) -> &Object {
        match self {
            Sentence::Does { subject, .. }
            | Sentence::Moves { subject, .. }
            | Sentence::Gives { subject, .. }
            | Sentence::Climbs { subject, .. }
            | Sentence::Plays { subject, .. } => subject,
        }
    }

    /// Turn the sentence into the action it describes.
    pub fn into_action(self) -> Action {
        match self {
            Sentence::Does {
                subject,
                deed,
                object,
            } => deed.action(subject, object),
            Sentence::Moves {
                subject,
                object,
                place,
            } => subject.moves(object, place),
            Sentence::Gives { subject, item, to } => subject.gives_item(to, item),
            Sentence::Climbs {
                subject,
                object,
                place,
            } => subject.climbs_to(object, place),
            Sentence::Plays {
                subject,
                game,
                opponent,
            } => subject.plays_against(game, opponent),
        }
    }
}

impl From<Sentence> for Action {
    fn from(sentence: Sentence) -> Action {
        sentence.into_action()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Does {
                subject,
                deed,
                object,
            } => write!(f, "{} {} {}", subject, deed, object),
            Sentence::Moves {
                subject,
                object,
                place,
            } => write!(
                f,
                "{} moves {} {} {}",
                subject,
                object,
                place.word(),
                place.obj_ref()
            ),
            Sentence::Gives { subject, item, to } => {
                write!(f, "{} gives {} to {}", subject, item, to)
            }
            Sentence::Climbs {
                subject,
                object,
                place,
            } => write!(
                f,
                "{} climbs {} to {} {}",
                subject,
                object,
                place.word(),
                place.obj_ref()
            ),
            Sentence::Plays {
                subject,
                game,
                opponent,
            } => write!(f, "{} plays {} against {}", subject, game, opponent),
        }
    }
}

impl FromStr for Sentence {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_sentence(s)
    }
}

impl FromStr for Object {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_object(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{called, has_not, key_to, of_type, on, Adjective};
    use Object::*;

    #[test]
    fn test_deed_words_round_trip() {
        for deed in Deed::ALL {
            assert_eq!(Deed::from_word(deed.word()), Some(deed));
        }
    }

    #[test]
    fn test_parse_simple_sentence() {
        let sentence = parse_sentence("I opens #door").unwrap();
        assert_eq!(
            sentence,
            Sentence::Does {
                subject: I,
                deed: Deed::Opens,
                object: of_type("door"),
            }
        );
        assert_eq!(sentence.into_action(), I.opens(of_type("door")));
    }

    #[test]
    fn test_parse_compound_subject() {
        let obj = parse_object("he & has-not(key-to(#door))").unwrap();
        assert_eq!(obj, And(vec![He, has_not(key_to(of_type("door")))]));
    }

    #[test]
    fn test_parse_moves_and_gives() {
        assert_eq!(
            parse_sentence("he moves it on that").unwrap().into_action(),
            He.moves(It, on(That))
        );
        assert_eq!(
            parse_sentence("@Peter gives it to she").unwrap().into_action(),
            called("Peter").gives_item(She, It)
        );
    }

    #[test]
    fn test_sentence_display_round_trip() {
        for text in [
            "I climbs #ladder to on #roof",
            "I plays @chess against you",
            "@Sheila kills killed(@John)",
            "he moves it lean-toward that",
            "I climbs-out-of #bed",
        ] {
            let sentence = parse_sentence(text).unwrap();
            assert_eq!(sentence.to_string(), text);
        }
    }

    #[test]
    fn test_parse_terms_splits_on_missing_amp() {
        assert_eq!(
            parse_terms("he & dead locked").unwrap(),
            vec![And(vec![He, Adjective::Dead.into()]), Adjective::Locked.into()]
        );
        assert!(parse_terms("").unwrap().is_empty());
    }

    #[test]
    fn test_trailing_input_is_an_error() {
        assert!(matches!(
            parse_sentence("I opens #door now"),
            Err(ParseError::UnexpectedToken { column: 15, .. })
        ));
    }
}

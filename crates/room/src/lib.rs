//! # Room
//!
//! An experiment to test The Room Hypothesis of Common Sense.
//!
//! Paper: [The Room Hypothesis of Common Sense](https://github.com/advancedresearch/path_semantics/blob/master/papers-wip/the-room-hypothesis-of-common-sense.pdf)
//!
//! The Room Hypothesis of Common Sense states that artificial common sense can
//! be modeled using extra constraints on predicates, similar to those used in
//! [Lojban](https://mw.lojban.org/papri/Lojban). These constraints assign
//! sub-types to the objects an agent thinks about. The "room" is a finite set
//! of objects in which speech-acts decide whether the goals the agent tries to
//! achieve will fail.
//!
//! In this view common sense is closely linked to
//! [Zen Rationality](https://github.com/advancedresearch/path_semantics/blob/master/papers-wip/zen-rationality.pdf),
//! an extension of instrumental rationality with higher order reasoning about
//! goals: a zen rational agent "factors out" common terms of its utility
//! function into a background theory of efficient behavior, and those factors
//! show up as speech-acts in natural language.
//!
//! This crate tests the hypothesis structurally instead of with machine
//! learning, to find out which constraints occur naturally.
//!
//! ## Architecture
//!
//! - **Objects**: pronouns, names, types and states, combined with `And`
//! - **Actions**: speech-acts with preconditions and effects
//! - **Room**: resolves patterns to objects and applies actions atomically
//! - **Frontend**: a sentence syntax for objects and speech-acts
//! - **Scenarios**: scripted speech-acts with expected outcomes
//!
//! ```
//! use room::{key_to, of_type, Object::*, Room};
//!
//! let mut room = Room::new(vec![of_type("door"), I, key_to(of_type("door"))]);
//! room.apply(&I.locks(of_type("door"))).unwrap();
//!
//! // Without the key, the door stays locked.
//! assert!(room.apply(&I.unlocks(of_type("door"))).is_err());
//!
//! room.apply(&I.picks_up(key_to(of_type("door")))).unwrap();
//! room.apply(&I.unlocks(of_type("door"))).unwrap();
//! room.apply(&I.opens(of_type("door"))).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod error;
pub mod frontend;
pub mod object;
pub mod room;
pub mod scenario;

// Re-export main types
pub use action::Action;
pub use error::{Error, ParseError, Result, RoomError, ScenarioError};
pub use frontend::{parse_object, parse_sentence, parse_terms, Deed, Sentence};
pub use object::{
    called, has, has_not, in_, key_to, killed, killed_by, lean_toward, of_type, on,
    opponent_of, out_of, Adjective, Object, Placement, Role, Verb,
};
pub use room::Room;
pub use scenario::{Observed, Outcome, Scenario, ScenarioReport, Step, StepReport};

/// Room version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

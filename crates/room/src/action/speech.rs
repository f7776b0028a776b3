//! Built-in speech-acts
//!
//! Each constructor takes the acting object as `self` and returns the
//! [`Action`] describing what common sense expects of it.

use super::Action;
use crate::object::{
    has, has_not, in_, key_to, lean_toward, on, opponent_of, out_of, Adjective, Object, Placement,
    Verb,
};

impl Object {
    /// Moves object to some place.
    ///
    /// Moving something on top of a target knocks the target off the moved
    /// object, if it was there.
    pub fn moves(self, object: Object, place: Placement) -> Action {
        let mut action = Action::new(self.clone(), Verb::Move, object.clone());
        if let Placement::On(target) = &place {
            action = action.remove(target.clone(), on(object.clone()));
        }
        action
            .decorate(object.clone(), place)
            .remove_placement(object.clone())
            .distinct([self, object])
    }

    /// Give object an item.
    ///
    /// The item must be unique,
    /// such that the subject no longer has the object.
    pub fn gives_item(self, to: Object, item: Object) -> Action {
        Action::new(self.clone(), Verb::Give, to.clone())
            .decorate(self.clone(), has_not(item.clone()))
            .decorate(to.clone(), has(item.clone()))
            .remove(self.clone(), has(item.clone()))
            .remove(to.clone(), has_not(item.clone()))
            .remove_placement(item.clone())
            .prevent(self.clone(), has_not(item.clone()))
            .distinct([self, to, item])
    }

    /// Give an item to object, same as [`Object::gives_item`].
    pub fn gives_to(self, item: Object, to: Object) -> Action {
        self.gives_item(to, item)
    }

    /// Kill object.
    pub fn kills(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::Kill, object.clone())
            .decorate(self, Adjective::Murderer)
            .decorate(object, Adjective::Dead)
    }

    /// Talk to object.
    pub fn talk_to(self, object: Object) -> Action {
        Action::new(self, Verb::Talk, object)
    }

    /// Opens object.
    pub fn opens(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::Open, object.clone())
            .decorate(object.clone(), Adjective::Open)
            .remove(object.clone(), Adjective::Closed)
            .prevent(object.clone(), Adjective::Locked)
            .distinct([self, object])
    }

    /// Closes object.
    pub fn closes(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::Close, object.clone())
            .decorate(object.clone(), Adjective::Closed)
            .remove(object.clone(), Adjective::Open)
            .distinct([self, object])
    }

    /// Walks through object. Closed things are in the way.
    pub fn walks_through(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::WalkThrough, object.clone())
            .prevent(object.clone(), Adjective::Closed)
            .distinct([self, object])
    }

    /// Locks object, which also closes it.
    pub fn locks(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::Lock, object.clone())
            .decorate(object.clone(), Adjective::Locked)
            .decorate(object.clone(), Adjective::Closed)
            .remove(object.clone(), Adjective::Unlocked)
            .distinct([self, object])
    }

    /// Unlocks object. The subject needs the key.
    pub fn unlocks(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::Unlock, object.clone())
            .decorate(object.clone(), Adjective::Unlocked)
            .remove(object.clone(), Adjective::Locked)
            .require(self.clone(), has(key_to(object.clone())))
            .distinct([self, object])
    }

    /// Picks up object.
    pub fn picks_up(self, object: Object) -> Action {
        self.takes(Verb::PickUp, object)
    }

    /// Carries object.
    pub fn carries(self, object: Object) -> Action {
        self.takes(Verb::Carry, object)
    }

    fn takes(self, verb: Verb, object: Object) -> Action {
        Action::new(self.clone(), verb, object.clone())
            .decorate(self.clone(), has(object.clone()))
            .remove(self.clone(), has_not(object.clone()))
            .remove_placement(object.clone())
            .distinct([self, object])
    }

    /// Puts down object.
    pub fn puts_down(self, object: Object) -> Action {
        Action::new(self.clone(), Verb::PutDown, object.clone())
            .decorate(self.clone(), has_not(object.clone()))
            .remove(self.clone(), has(object.clone()))
            .distinct([self, object])
    }

    /// Climbs object to some place.
    pub fn climbs_to(self, object: Object, place: Placement) -> Action {
        Action::new(self.clone(), Verb::Climb, object.clone())
            .decorate(self.clone(), place.clone())
            .remove_placement(self.clone())
            .distinct([self, object, place.into()])
    }

    /// Climbs out of object.
    pub fn climbs_out_of(self, object: Object) -> Action {
        self.climbs_to(object.clone(), out_of(object))
    }

    /// Climbs into object.
    pub fn climbs_into(self, object: Object) -> Action {
        self.climbs_to(object.clone(), in_(object))
    }

    /// Stand on object.
    pub fn stands_on(self, object: Object) -> Action {
        self.rests(Verb::StandOn, object.clone(), on(object))
    }

    /// Lean toward object.
    pub fn leans_toward(self, object: Object) -> Action {
        self.rests(Verb::LeanToward, object.clone(), lean_toward(object))
    }

    /// Sleeps in object.
    pub fn sleeps_in(self, object: Object) -> Action {
        self.rests(Verb::SleepIn, object.clone(), in_(object))
    }

    /// Wakes up in object.
    pub fn wakes_up_in(self, object: Object) -> Action {
        self.rests(Verb::WakeUpIn, object.clone(), in_(object))
    }

    fn rests(self, verb: Verb, object: Object, place: Placement) -> Action {
        Action::new(self.clone(), verb, object.clone())
            .decorate(self.clone(), place)
            .distinct([self, object])
    }

    /// Play game against opponent.
    pub fn plays_against(self, game: Object, opponent: Object) -> Action {
        Action::new(self.clone(), Verb::Play, game.clone())
            .decorate(self.clone(), opponent_of(opponent.clone()))
            .decorate(opponent.clone(), opponent_of(self.clone()))
            .distinct([self, game, opponent])
    }
}

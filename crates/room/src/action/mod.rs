//! Actions: the effect and preconditions of a speech-act
//!
//! An [`Action`] says who does what to whom, which constraints must or must
//! not hold beforehand, and which constraints change afterwards. The common
//! sense of the room lives in these lists; see the constructors in
//! [`speech`] for the built-in vocabulary.

pub mod speech;

use crate::object::{Object, Verb};

/// A state change to apply to a room.
///
/// Pairs are `(object, property)`: the object is a pattern resolved against
/// the room, the property is the constraint tested, added or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    /// Who acts
    pub subject: Object,

    /// What is done
    pub verb: Verb,

    /// Who or what is acted upon
    pub object: Object,

    /// Properties added after the action
    pub decorate: Vec<(Object, Object)>,

    /// Properties removed after the action
    pub remove: Vec<(Object, Object)>,

    /// Objects whose placement is reset
    pub remove_placement: Vec<Object>,

    /// Properties that block the action
    pub prevent: Vec<(Object, Object)>,

    /// Properties the action needs
    pub require: Vec<(Object, Object)>,

    /// Objects that must all be different things in the room
    pub distinct: Vec<Object>,
}

impl Action {
    /// Create an action with no constraints and no effects beyond recording
    /// the verb in the history of subject and object.
    pub fn new(subject: Object, verb: Verb, object: Object) -> Self {
        Self {
            subject,
            verb,
            object,
            decorate: Vec::new(),
            remove: Vec::new(),
            remove_placement: Vec::new(),
            prevent: Vec::new(),
            require: Vec::new(),
            distinct: Vec::new(),
        }
    }

    /// Add a property to an object afterwards (builder pattern)
    pub fn decorate(mut self, object: Object, property: impl Into<Object>) -> Self {
        self.decorate.push((object, property.into()));
        self
    }

    /// Remove a property from an object afterwards (builder pattern)
    pub fn remove(mut self, object: Object, property: impl Into<Object>) -> Self {
        self.remove.push((object, property.into()));
        self
    }

    /// Reset the placement of an object afterwards (builder pattern)
    pub fn remove_placement(mut self, object: Object) -> Self {
        self.remove_placement.push(object);
        self
    }

    /// Block the action when the object has the property (builder pattern)
    pub fn prevent(mut self, object: Object, property: impl Into<Object>) -> Self {
        self.prevent.push((object, property.into()));
        self
    }

    /// Require the object to have the property (builder pattern)
    pub fn require(mut self, object: Object, property: impl Into<Object>) -> Self {
        self.require.push((object, property.into()));
        self
    }

    /// Require all listed objects to be different things (builder pattern)
    pub fn distinct(mut self, objects: impl IntoIterator<Item = Object>) -> Self {
        self.distinct.extend(objects);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::Adjective;

    #[test]
    fn test_new_action_is_unconstrained() {
        let action = Action::new(Object::I, Verb::Talk, Object::You);
        assert!(action.decorate.is_empty());
        assert!(action.require.is_empty());
        assert!(action.distinct.is_empty());
    }

    #[test]
    fn test_builder_accumulates() {
        let action = Action::new(Object::I, Verb::Open, Object::It)
            .decorate(Object::It, Adjective::Open)
            .remove(Object::It, Adjective::Closed)
            .prevent(Object::It, Adjective::Locked)
            .distinct([Object::I, Object::It]);
        assert_eq!(
            action.decorate,
            vec![(Object::It, Object::Adj(Adjective::Open))]
        );
        assert_eq!(action.prevent.len(), 1);
        assert_eq!(action.distinct, vec![Object::I, Object::It]);
    }
}

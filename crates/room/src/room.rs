//! The room: a finite set of objects that speech-acts operate on

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use tracing::{debug, trace};

use crate::action::Action;
use crate::error::RoomError;
use crate::frontend::parse_sentence;
use crate::object::Object;

/// A finite set of objects.
///
/// Objects are addressed by pattern: an action names its participants with
/// [`Object`] patterns and the room resolves each pattern to the single
/// object matching it.
///
/// # Example
///
/// ```
/// use room::{of_type, Adjective, Object, Room};
///
/// let mut room = Room::new(vec![of_type("door"), Object::I]);
/// room.apply(&Object::I.closes(of_type("door"))).unwrap();
///
/// // A closed door is in the way.
/// assert!(room.apply(&Object::I.walks_through(of_type("door"))).is_err());
/// assert!(room[0].is(Adjective::Closed));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    objects: Vec<Object>,
}

impl Room {
    /// Creates a new room with objects.
    pub fn new(objects: Vec<Object>) -> Room {
        Room { objects }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Contents
    // ═══════════════════════════════════════════════════════════════════

    /// Add an object and return its index.
    pub fn push(&mut self, object: Object) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// All objects, by index.
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// The object at `index`.
    pub fn object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Mutable access to the object at `index`.
    pub fn object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Iterate over the objects.
    pub fn iter(&self) -> impl Iterator<Item = &Object> {
        self.objects.iter()
    }

    /// Number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the room is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Resolution
    // ═══════════════════════════════════════════════════════════════════

    /// Finds the single object matching the pattern.
    ///
    /// # Errors
    ///
    /// - `NotFound` if nothing matches
    /// - `Ambiguous` if more than one object matches
    pub fn find(&self, pattern: &Object) -> Result<usize, RoomError> {
        let candidates: Vec<usize> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, obj)| obj.matches(pattern))
            .map(|(i, _)| i)
            .collect();

        trace!(%pattern, ?candidates, "resolved pattern");

        match candidates.as_slice() {
            [index] => Ok(*index),
            [] => Err(RoomError::NotFound {
                pattern: pattern.clone(),
            }),
            _ => Err(RoomError::Ambiguous {
                pattern: pattern.clone(),
                candidates,
            }),
        }
    }

    /// Returns `true` if the pattern resolves and the object has the property.
    fn holds(&self, object: &Object, property: &Object) -> bool {
        self.find(object)
            .map(|i| self.objects[i].matches(property))
            .unwrap_or(false)
    }

    /// Resolve the named subject and object, then run every guard of the action.
    fn resolve(&self, action: &Action) -> Result<(usize, usize), RoomError> {
        let subject = self.find(&action.subject)?;
        let object = self.find(&action.object)?;

        let mut ids: Vec<usize> = Vec::with_capacity(action.distinct.len());
        for pattern in &action.distinct {
            // Unresolvable entries take no part in the group
            if let Ok(index) = self.find(pattern) {
                if ids.contains(&index) {
                    return Err(RoomError::NotDistinct {
                        pattern: pattern.clone(),
                        index,
                    });
                }
                ids.push(index);
            }
        }

        if let Some((obj, property)) = action
            .require
            .iter()
            .find(|(obj, property)| !self.holds(obj, property))
        {
            return Err(RoomError::Unmet {
                object: obj.clone(),
                property: property.clone(),
            });
        }

        if let Some((obj, property)) = action
            .prevent
            .iter()
            .find(|(obj, property)| self.holds(obj, property))
        {
            return Err(RoomError::Prevented {
                object: obj.clone(),
                property: property.clone(),
            });
        }

        Ok((subject, object))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Speech-acts
    // ═══════════════════════════════════════════════════════════════════

    /// Check whether the action could happen, without changing the room.
    pub fn check(&self, action: &Action) -> Result<(), RoomError> {
        self.resolve(action).map(|_| ())
    }

    /// Execute an action in the room.
    ///
    /// Either every effect is applied or, on error, the room is left as it
    /// was.
    pub fn apply(&mut self, action: &Action) -> Result<(), RoomError> {
        let (subject, object) = match self.resolve(action) {
            Ok(ids) => ids,
            Err(err) => {
                debug!(verb = %action.verb, subject = %action.subject, object = %action.object, %err, "action rejected");
                return Err(err);
            }
        };

        for (obj, property) in &action.remove {
            if let Ok(i) = self.find(obj) {
                self.objects[i].remove(property);
            }
        }
        for obj in &action.remove_placement {
            if let Ok(i) = self.find(obj) {
                self.objects[i].remove_placement();
            }
        }
        for (obj, property) in &action.decorate {
            if let Ok(i) = self.find(obj) {
                self.objects[i].push(property.clone());
            }
        }

        self.objects[subject].push(Object::DidTo(action.verb, Box::new(action.object.clone())));
        self.objects[object].push(Object::WasBy(action.verb, Box::new(action.subject.clone())));

        debug!(verb = %action.verb, subject, object, "action applied");
        Ok(())
    }

    /// Parse a speech-act sentence and apply it.
    ///
    /// ```
    /// use room::{of_type, Error, Object, Room};
    ///
    /// let mut room = Room::new(vec![of_type("door"), Object::I]);
    /// room.say("I locks #door").unwrap();
    /// assert!(matches!(room.say("I opens #door"), Err(Error::Room(_))));
    /// assert!(matches!(room.say("I opens"), Err(Error::Parse(_))));
    /// ```
    pub fn say(&mut self, sentence: &str) -> crate::Result<()> {
        let action = parse_sentence(sentence)?.into_action();
        self.apply(&action)?;
        Ok(())
    }

    /// Ask whether the object matching `subject` has `property`.
    pub fn ask(&self, subject: &Object, property: &Object) -> Result<bool, RoomError> {
        let index = self.find(subject)?;
        Ok(self.objects[index].matches(property))
    }
}

impl Index<usize> for Room {
    type Output = Object;

    fn index(&self, index: usize) -> &Object {
        &self.objects[index]
    }
}

impl FromIterator<Object> for Room {
    fn from_iter<T: IntoIterator<Item = Object>>(iter: T) -> Self {
        Room::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, obj) in self.objects.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", i, obj)?;
        }
        Ok(())
    }
}

//! Objects and the sub-type constraints they carry
//!
//! Every thing the agent can talk about is an [`Object`]. A bare variant such
//! as [`Object::He`] is a single constraint; an [`Object::And`] collects every
//! constraint known about one thing in the room. The same type doubles as a
//! *pattern*: looking something up in the room means finding the object that
//! [`matches`](Object::matches) a pattern.

mod adjective;
mod build;
mod display;
mod placement;
mod query;
mod verb;

pub use adjective::Adjective;
pub use build::{
    called, has, has_not, in_, key_to, killed, killed_by, lean_toward, of_type, on,
    opponent_of, out_of,
};
pub use placement::{Placement, Role};
pub use verb::Verb;

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A thing in the room, or a pattern describing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Object {
    // ═══════════════════════════════════════════════════════════════════
    // Pronouns
    // ═══════════════════════════════════════════════════════════════════
    /// The speaker
    I,
    /// The listener
    You,
    /// A male third party
    He,
    /// A female third party
    She,
    /// A thing close by
    It,
    /// A thing further away
    That,

    // ═══════════════════════════════════════════════════════════════════
    // Compound constraints
    // ═══════════════════════════════════════════════════════════════════
    /// All of the listed constraints at once
    And(Vec<Object>),

    /// Where the object is
    Placement(Box<Placement>),

    /// The part the object plays relative to another
    Role(Box<Role>),

    /// The object owns another object
    Has(Box<Object>),

    /// The object does not own another object
    HasNot(Box<Object>),

    // ═══════════════════════════════════════════════════════════════════
    // Identity
    // ═══════════════════════════════════════════════════════════════════
    /// Proper name, e.g. "Peter"
    Called(Arc<str>),

    /// Kind of thing, e.g. "door"
    OfType(Arc<str>),

    /// A state adjective
    Adj(Adjective),

    // ═══════════════════════════════════════════════════════════════════
    // History
    // ═══════════════════════════════════════════════════════════════════
    /// The object underwent the verb, performed by another object
    WasBy(Verb, Box<Object>),

    /// The object performed the verb on another object
    DidTo(Verb, Box<Object>),

    /// The object is the key to another object
    KeyTo(Box<Object>),
}

impl Object {
    /// Returns `true` if the object satisfies the pattern.
    ///
    /// A pattern `And` requires every criteria to hold. An object `And`
    /// satisfies a pattern when any one of its constraints does.
    pub fn matches(&self, pattern: &Object) -> bool {
        use Object::*;

        match (self, pattern) {
            (_, And(criteria)) => criteria.iter().all(|c| self.matches(c)),
            (And(constraints), _) => constraints.iter().any(|c| c.matches(pattern)),

            (I, I) | (You, You) | (He, He) | (She, She) | (It, It) | (That, That) => true,

            (Placement(a), Placement(b)) => a.matches(b),
            (Role(a), Role(b)) => a.matches(b),
            (Has(a), Has(b)) | (HasNot(a), HasNot(b)) | (KeyTo(a), KeyTo(b)) => a.matches(b),
            (Called(a), Called(b)) | (OfType(a), OfType(b)) => a == b,
            (Adj(a), Adj(b)) => a == b,
            (WasBy(va, a), WasBy(vb, b)) | (DidTo(va, a), DidTo(vb, b)) => {
                va == vb && a.matches(b)
            }

            _ => false,
        }
    }

    /// Adds a constraint unless an equivalent one is already known.
    pub fn push(&mut self, property: Object) {
        match self {
            Object::And(list) => {
                if !list.iter().any(|o| o.matches(&property)) {
                    list.push(property);
                }
            }
            _ => {
                if self.matches(&property) {
                    return;
                }
                let first = std::mem::replace(self, Object::And(Vec::with_capacity(2)));
                if let Object::And(list) = self {
                    list.push(first);
                    list.push(property);
                }
            }
        }
    }

    /// Removes every constraint matched by the pattern.
    ///
    /// Only compound objects lose constraints; a single constraint is the
    /// object's identity and stays.
    pub fn remove(&mut self, pattern: &Object) {
        if let Object::And(list) = self {
            list.retain(|o| !pattern.matches(o));
        }
    }

    /// Removes every placement constraint.
    pub fn remove_placement(&mut self) {
        if let Object::And(list) = self {
            list.retain(|o| !matches!(o, Object::Placement(_)));
        }
    }

    /// The constraints of this object as a slice.
    pub fn constraints(&self) -> &[Object] {
        match self {
            Object::And(list) => list,
            other => std::slice::from_ref(other),
        }
    }
}

impl From<Adjective> for Object {
    fn from(adj: Adjective) -> Object {
        Object::Adj(adj)
    }
}

impl From<Placement> for Object {
    fn from(place: Placement) -> Object {
        Object::Placement(Box::new(place))
    }
}

impl From<Role> for Object {
    fn from(role: Role) -> Object {
        Object::Role(Box::new(role))
    }
}

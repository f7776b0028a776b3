//! Spatial placements and social roles

use serde::{Deserialize, Serialize};

use super::Object;

/// Where an object is, relative to another object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Placement {
    /// Resting on top of
    On(Object),
    /// Leaning against
    LeanToward(Object),
    /// Inside
    In(Object),
    /// Outside of
    OutOf(Object),
}

impl Placement {
    /// Returns `true` if both placements have the same kind and the
    /// referenced objects match.
    pub fn matches(&self, other: &Placement) -> bool {
        use Placement::*;

        match (self, other) {
            (On(a), On(b))
            | (LeanToward(a), LeanToward(b))
            | (In(a), In(b))
            | (OutOf(a), OutOf(b)) => a.matches(b),
            _ => false,
        }
    }

    /// The object this placement refers to.
    pub fn obj_ref(&self) -> &Object {
        match self {
            Placement::On(obj)
            | Placement::LeanToward(obj)
            | Placement::In(obj)
            | Placement::OutOf(obj) => obj,
        }
    }

    /// The word introducing this placement in sentences.
    pub fn word(&self) -> &'static str {
        match self {
            Placement::On(_) => "on",
            Placement::LeanToward(_) => "lean-toward",
            Placement::In(_) => "in",
            Placement::OutOf(_) => "out-of",
        }
    }
}

/// The part an object plays with respect to another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// Plays a game against
    OpponentOf(Object),
}

impl Role {
    /// Returns `true` if both roles have the same kind and the referenced
    /// objects match.
    pub fn matches(&self, other: &Role) -> bool {
        match (self, other) {
            (Role::OpponentOf(a), Role::OpponentOf(b)) => a.matches(b),
        }
    }

    /// The object this role refers to.
    pub fn obj_ref(&self) -> &Object {
        match self {
            Role::OpponentOf(obj) => obj,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_kinds_do_not_mix() {
        assert!(Placement::On(Object::It).matches(&Placement::On(Object::It)));
        assert!(!Placement::On(Object::It).matches(&Placement::In(Object::It)));
        assert!(!Placement::OutOf(Object::It).matches(&Placement::OutOf(Object::That)));
    }

    #[test]
    fn test_obj_ref() {
        assert_eq!(Placement::LeanToward(Object::That).obj_ref(), &Object::That);
        assert_eq!(Role::OpponentOf(Object::You).obj_ref(), &Object::You);
    }
}

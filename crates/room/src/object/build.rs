//! Shorthand constructors for objects, placements and roles

use std::sync::Arc;

use super::{Object, Placement, Role, Verb};

/// Resting on `obj`.
pub fn on(obj: Object) -> Placement {
    Placement::On(obj)
}

/// Leaning toward `obj`.
pub fn lean_toward(obj: Object) -> Placement {
    Placement::LeanToward(obj)
}

/// Inside `obj`.
pub fn in_(obj: Object) -> Placement {
    Placement::In(obj)
}

/// Outside of `obj`.
pub fn out_of(obj: Object) -> Placement {
    Placement::OutOf(obj)
}

/// Owns `obj`.
pub fn has(obj: Object) -> Object {
    Object::Has(Box::new(obj))
}

/// Does not own `obj`.
pub fn has_not(obj: Object) -> Object {
    Object::HasNot(Box::new(obj))
}

/// Named `name`.
pub fn called(name: &str) -> Object {
    Object::Called(Arc::from(name))
}

/// Of kind `name`.
pub fn of_type(name: &str) -> Object {
    Object::OfType(Arc::from(name))
}

/// The key that fits `obj`.
pub fn key_to(obj: Object) -> Object {
    Object::KeyTo(Box::new(obj))
}

/// Was killed by `obj`.
pub fn killed_by(obj: Object) -> Object {
    Object::WasBy(Verb::Kill, Box::new(obj))
}

/// Killed `obj`.
pub fn killed(obj: Object) -> Object {
    Object::DidTo(Verb::Kill, Box::new(obj))
}

/// Plays against `obj`.
pub fn opponent_of(obj: Object) -> Role {
    Role::OpponentOf(obj)
}

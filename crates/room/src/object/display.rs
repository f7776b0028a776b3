//! Display implementations rendering objects in sentence syntax
//!
//! The output parses back with [`crate::frontend::parse_object`] into an equal
//! object, so rooms can be printed, edited and read in again.

use std::fmt::{self, Write};

use super::*;

/// Returns `true` if the name can be written without quotes.
pub(crate) fn is_bare_word(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Writes a name between double quotes, escaping `"` and `\`.
fn write_quoted(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in name.chars() {
        if c == '"' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

fn write_name(f: &mut fmt::Formatter<'_>, sigil: &str, name: &str) -> fmt::Result {
    f.write_str(sigil)?;
    if is_bare_word(name) {
        f.write_str(name)
    } else {
        write_quoted(f, name)
    }
}

/// Writes an object nested inside a conjunction, parenthesizing inner
/// conjunctions so that grouping survives a round trip.
fn write_conjunct(f: &mut fmt::Formatter<'_>, obj: &Object) -> fmt::Result {
    match obj {
        Object::And(list) if list.len() > 1 => write!(f, "({})", obj),
        _ => write!(f, "{}", obj),
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::I => write!(f, "I"),
            Object::You => write!(f, "you"),
            Object::He => write!(f, "he"),
            Object::She => write!(f, "she"),
            Object::It => write!(f, "it"),
            Object::That => write!(f, "that"),

            // `a & b` needs two operands; shorter lists use the `and(..)` form
            Object::And(list) if list.is_empty() => write!(f, "and()"),
            Object::And(list) if list.len() == 1 => write!(f, "and({})", list[0]),
            Object::And(list) => {
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, " & ")?;
                    }
                    write_conjunct(f, item)?;
                }
                Ok(())
            }

            Object::Placement(place) => write!(f, "{}", place),
            Object::Role(role) => write!(f, "{}", role),
            Object::Has(obj) => write!(f, "has({})", obj),
            Object::HasNot(obj) => write!(f, "has-not({})", obj),
            Object::KeyTo(obj) => write!(f, "key-to({})", obj),

            Object::Called(name) => {
                // A bare word after `@`, anything else quoted
                if is_bare_word(name) {
                    write!(f, "@{}", name)
                } else {
                    write_quoted(f, name)
                }
            }
            Object::OfType(name) => write_name(f, "#", name),
            Object::Adj(adj) => write!(f, "{}", adj),

            Object::WasBy(Verb::Kill, obj) => write!(f, "killed-by({})", obj),
            Object::DidTo(Verb::Kill, obj) => write!(f, "killed({})", obj),
            Object::WasBy(verb, obj) => write!(f, "was({}, {})", verb, obj),
            Object::DidTo(verb, obj) => write!(f, "did({}, {})", verb, obj),
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.word(), self.obj_ref())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::OpponentOf(obj) => write!(f, "opponent-of({})", obj),
        }
    }
}

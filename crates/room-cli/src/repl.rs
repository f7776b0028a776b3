//! Interactive session
//!
//! Every line is either a speech-act sentence, applied to the room, or a
//! meta command starting with `:`.

use anyhow::{bail, Context, Result};
use room::{parse_object, parse_sentence, parse_terms, Room, Scenario};
use rustyline::error::ReadlineError;
use rustyline::history::History;
use rustyline::DefaultEditor;
use std::path::Path;
use tracing::debug;

const HELP: &str = "\
<sentence>               apply a speech-act, e.g. `I opens #door`
:check <sentence>        test a speech-act without applying it
:ask <object> <property> ask whether an object has a property
:add <object>            add an object to the room
:room                    list the objects in the room
:reset                   go back to the starting room
:save <file>             write the room as JSON
:load <file>             read a room written by :save
:help                    show this help
:quit                    leave";

/// What the session wants the loop to do after a line.
#[derive(Debug, PartialEq)]
pub enum Reply {
    /// Print this text
    Print(String),
    /// Nothing to print
    Silent,
    /// End the session
    Quit,
}

/// REPL state, independent of the terminal.
pub struct Session {
    start: Room,
    room: Room,
}

impl Session {
    /// Start a session; `:reset` returns to `room`.
    pub fn new(room: Room) -> Self {
        Self {
            start: room.clone(),
            room,
        }
    }

    /// The room as it is now.
    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Handle one line of input.
    ///
    /// Refused speech-acts are answers, not errors; `Err` is reserved for
    /// input the session cannot understand or files it cannot access.
    pub fn handle(&mut self, line: &str) -> Result<Reply> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Reply::Silent);
        }

        let Some(meta) = line.strip_prefix(':') else {
            debug!(sentence = line, "applying");
            return match self.room.say(line) {
                Ok(()) => Ok(Reply::Print("ok".to_string())),
                Err(room::Error::Room(err)) => Ok(Reply::Print(format!("fail: {err}"))),
                Err(err) => Err(err.into()),
            };
        };

        let (command, rest) = meta
            .split_once(char::is_whitespace)
            .map(|(c, r)| (c, r.trim()))
            .unwrap_or((meta, ""));

        let reply = match command {
            "help" | "h" => Reply::Print(HELP.to_string()),
            "quit" | "q" | "exit" => Reply::Quit,
            "room" => {
                if self.room.is_empty() {
                    Reply::Print("the room is empty".to_string())
                } else {
                    Reply::Print(self.room.to_string())
                }
            }
            "reset" => {
                self.room = self.start.clone();
                Reply::Print(format!("reset to {} objects", self.room.len()))
            }
            "add" => {
                let obj = parse_object(rest)?;
                let index = self.room.push(obj);
                Reply::Print(format!("[{}] {}", index, self.room[index]))
            }
            "check" => {
                let action = parse_sentence(rest)?.into_action();
                Reply::Print(match self.room.check(&action) {
                    Ok(()) => "would succeed".to_string(),
                    Err(err) => format!("would fail: {err}"),
                })
            }
            "ask" => {
                let terms = parse_terms(rest)?;
                let [subject, property] = terms.as_slice() else {
                    bail!("usage: :ask <object> <property>");
                };
                Reply::Print(match self.room.ask(subject, property) {
                    Ok(true) => "yes".to_string(),
                    Ok(false) => "no".to_string(),
                    Err(err) => format!("cannot tell: {err}"),
                })
            }
            "save" => {
                let path = required_path(rest)?;
                let json = serde_json::to_string_pretty(&self.room)?;
                std::fs::write(path, json)
                    .with_context(|| format!("writing {}", path.display()))?;
                Reply::Print(format!("saved {} objects", self.room.len()))
            }
            "load" => {
                let path = required_path(rest)?;
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                let room: Room = serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?;
                self.start = room.clone();
                self.room = room;
                Reply::Print(format!("loaded {} objects", self.room.len()))
            }
            other => bail!("unknown command `:{other}`, try :help"),
        };
        Ok(reply)
    }
}

fn required_path(rest: &str) -> Result<&Path> {
    if rest.is_empty() {
        bail!("a file name is required");
    }
    Ok(Path::new(rest))
}

/// Add a non-blank line to the input history.
fn remember(history: &mut impl History, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    if let Err(err) = history.add(line) {
        debug!(%err, "line not added to history");
    }
}

/// Run the interactive loop on the terminal.
pub fn run(scenario: Option<&Path>) -> Result<()> {
    let room = match scenario {
        Some(path) => Scenario::load(path)
            .and_then(|s| s.build_room())
            .with_context(|| format!("loading {}", path.display()))?,
        None => Room::default(),
    };

    let mut session = Session::new(room);
    let mut editor = DefaultEditor::new().context("starting line editor")?;
    println!("room {}, type :help for commands", room::VERSION);

    loop {
        let line = match editor.readline("room> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("reading input"),
        };
        remember(editor.history_mut(), &line);

        match session.handle(&line) {
            Ok(Reply::Print(text)) => println!("{text}"),
            Ok(Reply::Silent) => {}
            Ok(Reply::Quit) => break,
            Err(err) => println!("error: {err:#}"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use room::{of_type, Adjective, Object};

    fn door_session() -> Session {
        Session::new(Room::new(vec![of_type("door"), Object::I]))
    }

    fn print(reply: Reply) -> String {
        match reply {
            Reply::Print(text) => text,
            other => panic!("expected output, got {other:?}"),
        }
    }

    #[test]
    fn applies_sentences() {
        let mut session = door_session();
        assert_eq!(print(session.handle("I closes #door").unwrap()), "ok");
        assert!(session.room()[0].is(Adjective::Closed));
        let reply = print(session.handle("I walks-through #door").unwrap());
        assert!(reply.starts_with("fail:"), "{reply}");
    }

    #[test]
    fn check_does_not_change_room() {
        let mut session = door_session();
        let reply = print(session.handle(":check I locks #door").unwrap());
        assert_eq!(reply, "would succeed");
        assert!(!session.room()[0].is(Adjective::Locked));
    }

    #[test]
    fn ask_and_add() {
        let mut session = door_session();
        assert_eq!(print(session.handle(":add @Peter").unwrap()), "[2] @Peter");
        session.handle("@Peter kills I").unwrap();
        assert_eq!(print(session.handle(":ask I dead").unwrap()), "yes");
        assert_eq!(print(session.handle(":ask @Peter dead").unwrap()), "no");
        assert!(session.handle(":ask I").is_err());
    }

    #[test]
    fn reset_restores_start() {
        let mut session = door_session();
        session.handle("I opens #door").unwrap();
        session.handle(":reset").unwrap();
        assert_eq!(session.room(), &Room::new(vec![of_type("door"), Object::I]));
    }

    #[test]
    fn meta_commands() {
        let mut session = door_session();
        assert_eq!(session.handle("   ").unwrap(), Reply::Silent);
        assert_eq!(session.handle(":quit").unwrap(), Reply::Quit);
        assert!(print(session.handle(":room").unwrap()).contains("[0] #door"));
        assert!(session.handle(":fly").is_err());
        assert!(session.handle(":save").is_err());
        assert!(session.handle("I flies").is_err());
    }

    #[test]
    fn remembers_non_blank_lines() {
        use rustyline::history::MemHistory;

        let mut history = MemHistory::new();
        remember(&mut history, "   ");
        assert!(history.is_empty());
        remember(&mut history, "I opens #door");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn parse_errors_are_errors_not_failures() {
        let mut session = door_session();
        let err = session.handle("I opens").unwrap_err();
        assert!(err.downcast_ref::<room::Error>().is_some(), "{err}");
    }

    #[test]
    fn save_and_load() {
        let path = std::env::temp_dir().join(format!("room-repl-{}.json", std::process::id()));
        let mut session = door_session();
        session.handle("I opens #door").unwrap();
        session
            .handle(&format!(":save {}", path.display()))
            .unwrap();

        let mut other = Session::new(Room::default());
        other.handle(&format!(":load {}", path.display())).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(other.room(), session.room());
    }
}

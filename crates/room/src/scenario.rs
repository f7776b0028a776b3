//! Scenarios: scripted speech-acts with expected goal outcomes
//!
//! A scenario names the objects of a room, then lists speech-acts the agent
//! attempts and questions it asks. Every step states what common sense
//! predicts: whether the act succeeds or fails, and what the answer to a
//! question is. Running the scenario compares prediction with the room.
//!
//! ```json
//! {
//!   "name": "door",
//!   "objects": { "door": "#door", "me": "I" },
//!   "steps": [
//!     { "act": "I locks #door" },
//!     { "act": "I opens #door", "expect": "fail" },
//!     { "ask": "#door", "is": "locked" }
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ParseError, RoomError, ScenarioError};
use crate::frontend::{parse_object, parse_sentence, Sentence};
use crate::object::Object;
use crate::room::Room;

/// Expected outcome of an act.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The act happens
    #[default]
    Ok,
    /// Common sense forbids the act
    Fail,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok => write!(f, "ok"),
            Outcome::Fail => write!(f, "fail"),
        }
    }
}

fn yes() -> bool {
    true
}

/// One scripted step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    /// Attempt a speech-act
    Act {
        /// The sentence
        act: String,
        /// Whether it should succeed
        #[serde(default)]
        expect: Outcome,
    },

    /// Ask whether an object has a property
    Ask {
        /// The object asked about
        ask: String,
        /// The property
        is: String,
        /// The expected answer
        #[serde(default = "yes")]
        expect: bool,
    },
}

/// A scenario document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    /// Room contents, label to object term, in room order
    pub objects: IndexMap<String, String>,

    /// Steps, run in order
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone)]
enum Compiled {
    Act {
        sentence: Sentence,
        expect: Outcome,
    },
    Ask {
        subject: Object,
        property: Object,
        expect: bool,
    },
}

/// What running a step produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    /// The act happened
    Applied,
    /// The act was refused
    Rejected(RoomError),
    /// The question was answered
    Answer(bool),
    /// The question's subject could not be resolved
    Unresolved(RoomError),
}

impl fmt::Display for Observed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observed::Applied => write!(f, "ok"),
            Observed::Rejected(err) => write!(f, "fail ({})", err),
            Observed::Answer(answer) => write!(f, "{}", if *answer { "yes" } else { "no" }),
            Observed::Unresolved(err) => write!(f, "unanswerable ({})", err),
        }
    }
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    /// 1-based step number
    pub step: usize,
    /// The step in sentence syntax
    pub text: String,
    /// What happened
    pub observed: Observed,
    /// Whether it matched the expectation
    pub passed: bool,
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.passed { "pass" } else { "FAIL" };
        write!(f, "{} {:>3}. {} => {}", mark, self.step, self.text, self.observed)
    }
}

/// Result of a whole scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,
    /// Object labels, by room index
    pub labels: Vec<String>,
    /// Per-step results
    pub steps: Vec<StepReport>,
    /// The room after the last step
    pub room: Room,
}

impl ScenarioReport {
    /// Returns `true` if every step met its expectation.
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }

    /// Steps that did not meet their expectation.
    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|s| !s.passed)
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "scenario {}", self.name)?;
        for step in &self.steps {
            writeln!(f, "  {}", step)?;
        }
        writeln!(f, "room:")?;
        for (label, obj) in self.labels.iter().zip(self.room.iter()) {
            writeln!(f, "  {}: {}", label, obj)?;
        }
        let failed = self.failures().count();
        write!(
            f,
            "{} steps, {} passed, {} failed",
            self.steps.len(),
            self.steps.len() - failed,
            failed
        )
    }
}

impl Scenario {
    /// Parse a scenario from JSON text.
    pub fn from_json(text: &str) -> Result<Scenario, ScenarioError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a scenario file. Unnamed scenarios take the file stem as name.
    pub fn load(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut scenario = Scenario::from_json(&text)?;
        if scenario.name.is_none() {
            scenario.name = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
        }
        Ok(scenario)
    }

    /// Name for reports.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unnamed")
    }

    /// Build the initial room from the object table.
    pub fn build_room(&self) -> Result<Room, ScenarioError> {
        self.objects
            .iter()
            .map(|(label, term)| parse_object(term).map_err(|e| in_label(label, e)))
            .collect()
    }

    /// Parse every object and step without running anything.
    pub fn check(&self) -> Result<(), ScenarioError> {
        self.compile().map(|_| ())
    }

    fn compile(&self) -> Result<(Room, Vec<Compiled>), ScenarioError> {
        let room = self.build_room()?;
        let steps = self
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| {
                let label = format!("step {}", i + 1);
                match step {
                    Step::Act { act, expect } => Ok(Compiled::Act {
                        sentence: parse_sentence(act).map_err(|e| in_label(&label, e))?,
                        expect: *expect,
                    }),
                    Step::Ask { ask, is, expect } => Ok(Compiled::Ask {
                        subject: parse_object(ask).map_err(|e| in_label(&label, e))?,
                        property: parse_object(is).map_err(|e| in_label(&label, e))?,
                        expect: *expect,
                    }),
                }
            })
            .collect::<Result<Vec<_>, ScenarioError>>()?;
        Ok((room, steps))
    }

    /// Run every step in order and report how each went.
    ///
    /// A refused act leaves the room unchanged and the run continues.
    pub fn run(&self) -> Result<ScenarioReport, ScenarioError> {
        let (mut room, steps) = self.compile()?;
        info!(scenario = self.display_name(), steps = steps.len(), "running scenario");

        let mut reports = Vec::with_capacity(steps.len());
        for (i, step) in steps.into_iter().enumerate() {
            let report = match step {
                Compiled::Act { sentence, expect } => {
                    let text = sentence.to_string();
                    let observed = match room.apply(&sentence.into_action()) {
                        Ok(()) => Observed::Applied,
                        Err(err) => Observed::Rejected(err),
                    };
                    let outcome = match observed {
                        Observed::Applied => Outcome::Ok,
                        _ => Outcome::Fail,
                    };
                    StepReport {
                        step: i + 1,
                        text: if expect == Outcome::Fail {
                            format!("{} (expect fail)", text)
                        } else {
                            text
                        },
                        passed: outcome == expect,
                        observed,
                    }
                }
                Compiled::Ask {
                    subject,
                    property,
                    expect,
                } => {
                    let (observed, passed) = match room.ask(&subject, &property) {
                        Ok(answer) => (Observed::Answer(answer), answer == expect),
                        Err(err) => (Observed::Unresolved(err), false),
                    };
                    let verb = if expect { "is" } else { "is not" };
                    StepReport {
                        step: i + 1,
                        text: format!("{} {} {}?", subject, verb, property),
                        observed,
                        passed,
                    }
                }
            };
            debug!(step = report.step, passed = report.passed, "{}", report.text);
            reports.push(report);
        }

        Ok(ScenarioReport {
            name: self.display_name().to_string(),
            labels: self.objects.keys().cloned().collect(),
            steps: reports,
            room,
        })
    }
}

fn in_label(label: &str, source: ParseError) -> ScenarioError {
    ScenarioError::Parse {
        label: label.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOOR: &str = r##"{
        "name": "door",
        "objects": { "door": "#door", "me": "I" },
        "steps": [
            { "act": "I locks #door" },
            { "act": "I opens #door", "expect": "fail" },
            { "ask": "#door", "is": "locked" },
            { "ask": "#door", "is": "open", "expect": false }
        ]
    }"##;

    #[test]
    fn test_parse_steps() {
        let scenario = Scenario::from_json(DOOR).unwrap();
        assert_eq!(scenario.objects.len(), 2);
        assert_eq!(
            scenario.steps[1],
            Step::Act {
                act: "I opens #door".into(),
                expect: Outcome::Fail,
            }
        );
        assert!(matches!(scenario.steps[2], Step::Ask { expect: true, .. }));
    }

    #[test]
    fn test_run_door() {
        let report = Scenario::from_json(DOOR).unwrap().run().unwrap();
        assert!(report.passed(), "{}", report);
        assert_eq!(report.steps.len(), 4);
        assert!(matches!(
            report.steps[1].observed,
            Observed::Rejected(RoomError::Prevented { .. })
        ));
        assert_eq!(report.labels, vec!["door".to_string(), "me".to_string()]);
    }

    #[test]
    fn test_wrong_expectation_is_reported() {
        let json = r##"{
            "objects": { "door": "#door", "me": "I" },
            "steps": [ { "act": "I walks-through #door", "expect": "fail" } ]
        }"##;
        let report = Scenario::from_json(json).unwrap().run().unwrap();
        assert!(!report.passed());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.name, "unnamed");
    }

    #[test]
    fn test_parse_error_names_location() {
        let json = r##"{ "objects": { "door": "#door" }, "steps": [ { "act": "I flies" } ] }"##;
        let err = Scenario::from_json(json).unwrap().check().unwrap_err();
        match err {
            ScenarioError::Parse { label, .. } => assert_eq!(label, "step 1"),
            other => panic!("unexpected error: {other}"),
        }
    }
}

//! Scenario loading and running

use pretty_assertions::assert_eq;
use ::room::*;
use std::path::PathBuf;

fn scenario_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

fn run(name: &str) -> ScenarioReport {
    let scenario = Scenario::load(scenario_path(name)).unwrap();
    scenario.run().unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Bundled scenarios
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_door_scenario_passes() {
    let report = run("door.json");
    assert!(report.passed(), "{}", report);
    assert_eq!(report.name, "locked door");
    assert_eq!(report.steps.len(), 12);
}

#[test]
fn test_ladder_scenario_passes() {
    let report = run("ladder.json");
    assert!(report.passed(), "{}", report);
    assert!(report.room[4].is_on(of_type("roof")));
}

#[test]
fn test_murder_scenario_passes() {
    let report = run("murder.json");
    assert!(report.passed(), "{}", report);
    assert_eq!(report.labels, vec!["peter", "john", "sheila"]);
}

// ═══════════════════════════════════════════════════════════════════════
// Loading
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unnamed_scenario_takes_file_stem() {
    let path = std::env::temp_dir().join(format!("room-stem-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "objects": { "me": "I" } }"#).unwrap();
    let scenario = Scenario::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(
        scenario.display_name(),
        format!("room-stem-{}", std::process::id())
    );
    assert!(scenario.steps.is_empty());
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        Scenario::load(scenario_path("does-not-exist.json")),
        Err(ScenarioError::Io(_))
    ));
}

#[test]
fn test_invalid_json() {
    assert!(matches!(
        Scenario::from_json("{ \"objects\": 3 }"),
        Err(ScenarioError::Json(_))
    ));
}

#[test]
fn test_bad_object_term_names_label() {
    let scenario = Scenario::from_json(r#"{ "objects": { "box": "box" } }"#).unwrap();
    match scenario.build_room() {
        Err(ScenarioError::Parse { label, source }) => {
            assert_eq!(label, "box");
            assert_eq!(
                source,
                ParseError::UnknownWord {
                    word: "box".into(),
                    column: 1,
                }
            );
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Running
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unresolvable_question_fails_step() {
    let scenario = Scenario::from_json(
        r#"{ "objects": { "me": "I" }, "steps": [ { "ask": "you", "is": "dead", "expect": false } ] }"#,
    )
    .unwrap();
    let report = scenario.run().unwrap();
    assert!(!report.passed());
    assert!(matches!(
        report.steps[0].observed,
        Observed::Unresolved(RoomError::NotFound { .. })
    ));
}

#[test]
fn test_rejected_act_does_not_stop_run() {
    let scenario = Scenario::from_json(
        r##"{
            "objects": { "door": "#door", "me": "I" },
            "steps": [
                { "act": "I locks #door" },
                { "act": "I opens #door" },
                { "ask": "#door", "is": "locked" }
            ]
        }"##,
    )
    .unwrap();
    let report = scenario.run().unwrap();
    let passed: Vec<bool> = report.steps.iter().map(|s| s.passed).collect();
    assert_eq!(passed, vec![true, false, true]);
    assert_eq!(report.failures().next().map(|s| s.step), Some(2));
}

//! Sentence frontend tests

use pretty_assertions::assert_eq;
use ::room::*;
use Object::*;

// ═══════════════════════════════════════════════════════════════════════
// Objects
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_pronouns_case_insensitive() {
    assert_eq!(parse_object("I").unwrap(), I);
    assert_eq!(parse_object("i").unwrap(), I);
    assert_eq!(parse_object("She").unwrap(), She);
    assert_eq!(parse_object("THAT").unwrap(), That);
}

#[test]
fn test_parse_names_and_types() {
    assert_eq!(parse_object("@Peter").unwrap(), called("Peter"));
    assert_eq!(parse_object("\"Peter Pan\"").unwrap(), called("Peter Pan"));
    assert_eq!(parse_object("#door").unwrap(), of_type("door"));
    assert_eq!(parse_object("#\"front door\"").unwrap(), of_type("front door"));
}

#[test]
fn test_parse_properties() {
    assert_eq!(parse_object("locked").unwrap(), Object::from(Adjective::Locked));
    assert_eq!(parse_object("on(#roof)").unwrap(), Object::from(on(of_type("roof"))));
    assert_eq!(
        parse_object("opponent-of(you)").unwrap(),
        Object::from(opponent_of(You))
    );
    assert_eq!(
        parse_object("did(pick-up, key-to(#door))").unwrap(),
        Object::DidTo(Verb::PickUp, Box::new(key_to(of_type("door"))))
    );
    assert_eq!(
        parse_object("was(talk, I)").unwrap(),
        Object::WasBy(Verb::Talk, Box::new(I))
    );
}

#[test]
fn test_parse_conjunction_grouping() {
    assert_eq!(
        parse_object("@chess & #game").unwrap(),
        And(vec![called("chess"), of_type("game")])
    );
    assert_eq!(
        parse_object("he & (she & it)").unwrap(),
        And(vec![He, And(vec![She, It])])
    );
    assert_eq!(parse_object("(he)").unwrap(), He);
}

#[test]
fn test_display_parses_back() {
    let objects = vec![
        And(vec![I, has_not(key_to(of_type("door")))]),
        And(vec![called("Peter Pan"), Adjective::Dead.into(), killed_by(She)]),
        Object::from(out_of(of_type("bed"))),
        Object::DidTo(Verb::WalkThrough, Box::new(of_type("front door"))),
        And(vec![He, And(vec![She, It])]),
    ];
    for obj in objects {
        assert_eq!(parse_object(&obj.to_string()).unwrap(), obj);
    }
}

#[test]
fn test_short_conjunctions_parse_back() {
    let objects = vec![
        And(vec![]),
        And(vec![It]),
        And(vec![He, And(vec![It])]),
        And(vec![And(vec![])]),
    ];
    for obj in objects {
        assert_eq!(parse_object(&obj.to_string()).unwrap(), obj);
    }
    assert_eq!(
        parse_object("and(he & she)").unwrap(),
        And(vec![He, She])
    );
}

#[test]
fn test_quoted_names_parse_back() {
    let objects = vec![
        called("say \"hi\""),
        of_type("back\\slash"),
        called(""),
        And(vec![called("\"\\\""), of_type("a \"b\"")]),
    ];
    for obj in objects {
        assert_eq!(parse_object(&obj.to_string()).unwrap(), obj);
    }
}

#[test]
fn test_room_parses_back_after_give() {
    let mut room = Room::new(vec![
        She,
        He,
        And(vec![of_type("apple"), on(of_type("table")).into()]),
        of_type("table"),
    ]);
    room.apply(&She.gives_to(of_type("apple"), He)).unwrap();

    // The apple lost its placement and is a conjunction of one.
    assert_eq!(room[2], And(vec![of_type("apple")]));
    for obj in room.iter() {
        assert_eq!(&parse_object(&obj.to_string()).unwrap(), obj);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Sentences
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sentences_build_expected_actions() {
    let cases: Vec<(&str, Action)> = vec![
        ("I talks-to you", I.talk_to(You)),
        ("I unlocks #door", I.unlocks(of_type("door"))),
        ("he carries #ladder", He.carries(of_type("ladder"))),
        ("I sleeps-in #bed", I.sleeps_in(of_type("bed"))),
        ("I climbs-into #bed", I.climbs_into(of_type("bed"))),
        (
            "I climbs #ladder to on #roof",
            I.climbs_to(of_type("ladder"), on(of_type("roof"))),
        ),
        ("he moves it in that", He.moves(It, in_(That))),
        ("she gives #apple to he", She.gives_to(of_type("apple"), He)),
        (
            "I plays @chess against you",
            I.plays_against(called("chess"), You),
        ),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_sentence(text).unwrap().into_action(), expected, "{}", text);
    }
}

#[test]
fn test_sentence_from_str() {
    let sentence: Sentence = "@Peter kills @John".parse().unwrap();
    assert_eq!(sentence.subject(), &called("Peter"));
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_verb() {
    assert_eq!(
        parse_sentence("I flies #kite"),
        Err(ParseError::UnknownWord {
            word: "flies".into(),
            column: 3,
        })
    );
}

#[test]
fn test_unknown_object_word() {
    assert_eq!(
        parse_object("door"),
        Err(ParseError::UnknownWord {
            word: "door".into(),
            column: 1,
        })
    );
}

#[test]
fn test_missing_parts() {
    assert!(matches!(
        parse_sentence("I opens"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        parse_sentence("she gives #apple he"),
        Err(ParseError::UnexpectedToken { column: 18, .. })
    ));
    assert!(matches!(
        parse_object("has(#key"),
        Err(ParseError::UnexpectedEnd { .. })
    ));
    assert!(matches!(
        parse_sentence("he moves it under that"),
        Err(ParseError::UnexpectedToken { .. })
    ));
}

#[test]
fn test_deep_nesting_is_an_error() {
    let deep = format!("{}I{}", "(".repeat(200), ")".repeat(200));
    assert_eq!(parse_object(&deep), Err(ParseError::TooDeep { column: 129 }));

    let huge = format!("{}I{}", "(".repeat(100_000), ")".repeat(100_000));
    assert_eq!(parse_object(&huge), Err(ParseError::TooDeep { column: 129 }));

    let keys = format!("{}#door{}", "key-to(".repeat(1_000), ")".repeat(1_000));
    assert!(matches!(
        parse_sentence(&format!("I picks-up {}", keys)),
        Err(ParseError::TooDeep { .. })
    ));

    let fine = format!("{}I{}", "(".repeat(100), ")".repeat(100));
    assert_eq!(parse_object(&fine).unwrap(), I);
}

//! Directory search scenarios
//!
//! Full passes through the engine with in-memory cards and indicator,
//! checking both end state and the number of writes it took to get there.

use rollcall_core::memory::{MemoryCard, MemoryMedia};
use rollcall_core::{DataKeys, Engine, LegalName, MemberRecord, Visibility};

// ============================================================================
// Test Utilities
// ============================================================================

fn three_members() -> Vec<MemoryCard> {
    vec![
        MemberRecord::new("Alice Stone", "🥁", LegalName::new("Alice", "Stone")).with_years([2019]),
        MemberRecord::new("Bob Stone", "🎺", LegalName::new("Bob", "Stone")).with_years([2020]),
        MemberRecord::new("Carol Reed", "🎷", LegalName::new("Carol", "Reed")).with_years([2019]),
    ]
    .iter()
    .map(|record| MemoryCard::from_record(record).unwrap())
    .collect()
}

fn attach(cards: Vec<MemoryCard>) -> Engine<MemoryCard, MemoryMedia> {
    Engine::attach(cards, Some(MemoryMedia::default()), &DataKeys::default())
        .expect("cards should parse")
}

fn media(engine: &Engine<MemoryCard, MemoryMedia>) -> &MemoryMedia {
    engine.indicator().media().expect("indicator present")
}

fn visibilities(engine: &Engine<MemoryCard, MemoryMedia>) -> Vec<Option<Visibility>> {
    engine.cards().iter().map(|card| card.element.visibility).collect()
}

fn total_card_writes(engine: &Engine<MemoryCard, MemoryMedia>) -> usize {
    engine
        .cards()
        .iter()
        .map(|card| card.element.visibility_writes)
        .sum()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_partial_match_keeps_indicator_hidden() {
    let mut engine = attach(three_members());

    let summary = engine.on_input("stone");

    assert_eq!(summary.hidden, 1);
    assert_eq!(summary.total, 3);
    assert_eq!(
        visibilities(&engine),
        vec![
            Some(Visibility::Shown),
            Some(Visibility::Shown),
            Some(Visibility::Hidden)
        ]
    );

    let media = media(&engine);
    assert_eq!(media.visibility, Some(Visibility::Hidden));
    assert!(!media.playing);
    assert_eq!(media.seeks, 0);
}

#[test]
fn test_no_match_shows_indicator_once() {
    let mut engine = attach(three_members());

    let summary = engine.on_input("zzz");

    assert_eq!(summary.hidden, 3);
    assert!(summary.all_hidden());

    let media = media(&engine);
    assert_eq!(media.visibility, Some(Visibility::Shown));
    assert!(media.playing);
    assert_eq!(media.seeks, 1);
}

#[test]
fn test_zero_cards_counts_as_all_hidden() {
    let mut engine = attach(Vec::new());

    let summary = engine.on_input("anything");

    assert_eq!(summary.hidden, 0);
    assert_eq!(summary.total, 0);
    let media = media(&engine);
    assert_eq!(media.visibility, Some(Visibility::Shown));
    assert!(media.playing);
}

#[test]
fn test_missing_middle_name_matches_on_last() {
    let record = MemberRecord::new("JL", "", LegalName::new("Jo", "Lin"));
    let card = MemoryCard::from_record(&record).unwrap();
    let mut engine = attach(vec![card]);

    let summary = engine.on_input("lin");

    assert_eq!(summary.hidden, 0);
    assert_eq!(visibilities(&engine), vec![Some(Visibility::Shown)]);
}

#[test]
fn test_years_match_as_text() {
    let mut engine = attach(three_members());

    let summary = engine.on_input("2019");

    assert_eq!(summary.hidden, 1);
    assert_eq!(engine.cards()[1].element.visibility, Some(Visibility::Hidden));
}

#[test]
fn test_repeated_term_performs_no_writes() {
    let mut engine = attach(three_members());

    let first = engine.on_input("stone");
    let writes_after_first = total_card_writes(&engine);
    let second = engine.on_input("stone");

    assert_eq!(first, second);
    assert_eq!(writes_after_first, 3);
    assert_eq!(total_card_writes(&engine), writes_after_first);
}

#[test]
fn test_only_changed_cards_are_written() {
    let mut engine = attach(three_members());

    engine.on_input("stone");
    engine.on_input("alice");

    let writes: Vec<usize> = engine
        .cards()
        .iter()
        .map(|card| card.element.visibility_writes)
        .collect();
    // Bob flips to hidden; Alice stays shown and Carol stays hidden.
    assert_eq!(writes, vec![1, 2, 1]);
}

#[test]
fn test_indicator_restarts_from_beginning_on_reappearance() {
    let mut engine = attach(three_members());

    engine.on_input("zzz");
    engine.on_input("zzzz");
    assert_eq!(media(&engine).seeks, 1);

    engine.on_input("");
    let hidden_media = media(&engine);
    assert_eq!(hidden_media.visibility, Some(Visibility::Hidden));
    assert!(!hidden_media.playing);
    assert_eq!(hidden_media.seeks, 1);

    engine.on_input("qqq");
    let media = media(&engine);
    assert_eq!(media.seeks, 2);
    assert_eq!(media.plays, 2);
    assert_eq!(media.position, 0.0);
}

#[test]
fn test_clearing_term_shows_everything() {
    let mut engine = attach(three_members());

    engine.on_input("zzz");
    let summary = engine.on_input("");

    assert_eq!(summary.hidden, 0);
    assert!(visibilities(&engine)
        .iter()
        .all(|v| *v == Some(Visibility::Shown)));
}

#[test]
fn test_engines_are_independent() {
    let mut first = attach(three_members());
    let mut second = attach(three_members());

    first.on_input("zzz");
    second.on_input("stone");

    assert_eq!(media(&first).visibility, Some(Visibility::Shown));
    assert_eq!(media(&second).visibility, Some(Visibility::Hidden));
}

//! Tests for the interaction loop: termination, input validation,
//! re-prompting, and resource release.

use inkslinger::engine_scripted::{ScriptedEngine, Turn};
use inkslinger::session::Session;
use inkslinger::terminal_headless::HeadlessTerminal;
use test_log::test;

// Keep output plain so assertions see the raw text. This is process-wide,
// which is why every test in this binary does the same thing.
fn plain_output() {
    colored::control::set_override(false);
}

fn castle_story() -> ScriptedEngine {
    ScriptedEngine::new(vec![
        Turn::new(&["You enter a castle."], &["Fight the dragon", "Flee"]),
        Turn::new(&["The beast backs off. Congratulations!"], &[]),
    ])
}

#[test]
fn runs_to_the_end_and_closes_input_once() {
    plain_output();
    let engine = castle_story();
    let terminal = HeadlessTerminal::new(&["2"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    // "2" translates to 0-based index 1
    assert_eq!(session.engine.selections, vec![1]);
    assert_eq!(session.terminal.close_count(), 1);
}

#[test]
fn rejects_out_of_range_and_non_numeric_input() {
    plain_output();
    let engine = castle_story();
    // zero, too large, garbage, then a valid pick
    let terminal = HeadlessTerminal::new(&["0", "3", "dragon", "1"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    // the engine only ever saw the one valid selection
    assert_eq!(session.engine.selections, vec![0]);
    // one prompt per attempt
    assert_eq!(session.terminal.prompts().len(), 4);
}

#[test]
fn reprompt_renders_an_identical_choice_list() {
    plain_output();
    let engine = castle_story();
    let terminal = HeadlessTerminal::new(&["99", "1"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    let entries: Vec<&String> = session
        .terminal
        .output()
        .iter()
        .filter(|l| l.contains("Fight the dragon") || l.contains("Flee"))
        .collect();
    // two renders of the same two-entry list
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0], entries[2]);
    assert_eq!(entries[1], entries[3]);
}

#[test]
fn invalid_input_reports_a_corrective_message() {
    plain_output();
    let engine = castle_story();
    let terminal = HeadlessTerminal::new(&["nope", "1"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    assert!(session.terminal.output_text().contains("Invalid choice"));
}

#[test]
fn castle_scenario_end_to_end() {
    plain_output();
    let engine = castle_story();
    let terminal = HeadlessTerminal::new(&["2"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    let text = session.terminal.output_text();
    // the castle line is classified as a location
    assert!(text.contains("📍 You enter a castle."));
    // the fight choice carries its icon in the menu
    assert!(text.contains("⚔️ Fight the dragon"));
    // 1-based numbering
    assert!(text.contains("1.") && text.contains("2."));
    assert_eq!(session.engine.selections, vec![1]);
}

#[test]
fn degenerate_story_ends_immediately() {
    plain_output();
    let engine = ScriptedEngine::new(vec![Turn::new(&[], &[])]);
    let terminal = HeadlessTerminal::new(&[]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    // straight to the ending screen, input released once, never prompted
    assert_eq!(session.terminal.close_count(), 1);
    assert!(session.terminal.prompts().is_empty());
    assert!(session.engine.selections.is_empty());
    assert!(session.terminal.output_text().contains("The story ends"));
}

#[test]
fn drain_fault_aborts_without_closing_input() {
    plain_output();
    let mut engine = castle_story();
    engine.fail_next_text = true;
    let terminal = HeadlessTerminal::new(&["1"]);
    let mut session = Session::new(engine, terminal);

    let result = session.run();

    assert!(result.is_err());
    assert_eq!(session.terminal.close_count(), 0);
}

#[test]
fn whitespace_only_lines_are_not_emitted() {
    plain_output();
    let engine = ScriptedEngine::new(vec![Turn::new(&["   ", "The end draws near.", ""], &[])]);
    let terminal = HeadlessTerminal::new(&[]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    let narration: Vec<&String> = session
        .terminal
        .output()
        .iter()
        .filter(|l| l.contains("The end draws near."))
        .collect();
    assert_eq!(narration.len(), 1);
    // blank engine lines are skipped rather than printed as indented empties
    assert!(!session.terminal.output().contains(&"   ".to_string()));
}

#[test]
fn prompt_message_names_the_expected_input() {
    plain_output();
    let engine = castle_story();
    let terminal = HeadlessTerminal::new(&["1"]);
    let mut session = Session::new(engine, terminal);

    session.run().unwrap();

    assert!(session.terminal.prompts()[0].contains("Enter a number"));
}

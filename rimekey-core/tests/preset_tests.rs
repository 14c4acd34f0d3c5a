mod common;

use common::{presets, FakeEngine};
use pretty_assertions::assert_eq;
use rimekey_core::types::key_codes;
use rimekey_core::{Event, EventContext, PresetTable, ToggleStates};

#[test]
fn preset_fields_survive_resolution() {
    let engine = FakeEngine::default();
    let table = presets(
        r#"{
            "Keyboard_switch": {
                "command": "set_keyboard",
                "option": "soft_cursor",
                "select": ".next",
                "toggle": "full_shape",
                "label": "⌨",
                "preview": "鍵盤",
                "shift_lock": "long",
                "commit": "done",
                "send": "Return",
                "text": "⌨",
                "states": ["半", "全"],
                "sticky": true,
                "repeatable": true,
                "functional": false
            }
        }"#,
    );
    let ev = Event::resolve("Keyboard_switch", &table, &EventContext::new(&engine));

    assert_eq!(ev.code(), key_codes::ENTER);
    assert_eq!(ev.mask(), 0);
    assert_eq!(ev.command(), "set_keyboard");
    assert_eq!(ev.option(), "soft_cursor");
    assert_eq!(ev.select(), ".next");
    assert_eq!(ev.toggle(), "full_shape");
    assert_eq!(ev.shift_lock(), "long");
    assert_eq!(ev.commit(), "done");
    assert_eq!(ev.states(), Some(&ToggleStates::new("半", "全")));
    assert!(ev.is_sticky());
    assert!(ev.is_repeatable());
    assert!(!ev.is_functional());
    assert_eq!(ev.text(&EventContext::new(&engine)), "⌨");
}

#[test]
fn command_without_send_presses_function() {
    let engine = FakeEngine::default();
    let table = presets(r#"{"commit_comp": {"command": "commit_composition"}}"#);
    let ev = Event::resolve("commit_comp", &table, &EventContext::new(&engine));
    assert_eq!(ev.code(), key_codes::FUNCTION);
    assert!(ev.is_functional());
}

#[test]
fn unresolved_send_defaults_text_to_the_name() {
    let engine = FakeEngine::default();
    let table = presets(r#"{"smile": {"label": "☺"}}"#);
    let ev = Event::resolve("smile", &table, &EventContext::new(&engine));
    assert!(ev.code() < 0);
    assert_eq!(ev.text(&EventContext::new(&engine)), "smile");
    assert_eq!(ev.label(&EventContext::new(&engine)), "☺");
}

#[test]
fn explicit_text_wins_over_the_default() {
    let engine = FakeEngine::default();
    let table = presets(r#"{"paired": {"text": "()", "label": "()"}}"#);
    let ev = Event::resolve("paired", &table, &EventContext::new(&engine));
    assert_eq!(ev.text(&EventContext::new(&engine)), "()");
}

#[test]
fn send_name_resolves_to_its_code() {
    let engine = FakeEngine::default();
    let table = presets(r#"{"BackSpace": {"label": "⌫", "send": "BackSpace", "repeatable": true}}"#);
    let ev = Event::resolve("BackSpace", &table, &EventContext::new(&engine));
    assert_eq!(ev.code(), key_codes::BACKSPACE);
    assert!(ev.is_repeatable());
    assert!(ev.is_functional());
    // a resolved send leaves no default text behind
    assert_eq!(ev.text(&EventContext::new(&engine)), "");
}

#[test]
fn preset_label_derives_from_send_when_missing() {
    let engine = FakeEngine::default();
    let table = presets(r#"{"dash": {"send": "minus"}}"#);
    let ev = Event::resolve("dash", &table, &EventContext::new(&engine));
    assert_eq!(ev.code(), key_codes::MINUS);
    assert_eq!(ev.label(&EventContext::new(&engine)), "-");
}

#[test]
fn states_reject_wrong_arity() {
    let bad = r#"{"ascii_mode": {"toggle": "ascii_mode", "states": ["中", "英", "?"]}}"#;
    assert!(serde_json::from_str::<PresetTable>(bad).is_err());

    let bad = r#"{"ascii_mode": {"toggle": "ascii_mode", "states": ["中"]}}"#;
    assert!(serde_json::from_str::<PresetTable>(bad).is_err());
}

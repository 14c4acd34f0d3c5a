use pretty_assertions::assert_eq;
use rimekey_core::engine::modifier;
use rimekey_core::types::key_codes;
use rimekey_core::types::modifiers::{ALT_ON, CTRL_ON, RELEASE_SENTINEL, SHIFT_ON};
use rimekey_core::{engine_event, VOID_KEYVAL};

#[test]
fn letters_and_digits_keep_ascii_values() {
    assert_eq!(engine_event(key_codes::KEY_Q, 0).keyval, 'q' as i32);
    assert_eq!(engine_event(key_codes::KEY_7, 0).keyval, '7' as i32);
}

#[test]
fn mapping_is_total() {
    for code in -2..400 {
        let ev = engine_event(code, 0);
        assert!(ev.keyval == VOID_KEYVAL || ev.keyval > 0);
        assert_eq!(ev.modifiers, 0);
    }
}

#[test]
fn modifier_bits_translate_independently() {
    let ev = engine_event(key_codes::ENTER, SHIFT_ON | CTRL_ON | ALT_ON);
    assert_eq!(
        ev.modifiers,
        modifier::SHIFT | modifier::CONTROL | modifier::ALT
    );
}

#[test]
fn release_sentinel_always_sets_release_bit() {
    for code in [key_codes::KEY_A, key_codes::SPACE, -1, 9999] {
        let ev = engine_event(code, RELEASE_SENTINEL);
        assert_eq!(ev.modifiers, modifier::RELEASE);
    }
}

#[test]
fn mapping_is_idempotent_per_input() {
    let a = engine_event(key_codes::KEY_A, SHIFT_ON);
    let b = engine_event(key_codes::KEY_A, SHIFT_ON);
    assert_eq!(a, b);
}

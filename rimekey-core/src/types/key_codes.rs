//! Symbolic key code table
//!
//! Keys are addressed by small integer codes laid out like the platform's
//! key-event code space, and by X11-keysym-style symbolic names as they
//! appear in layout definitions ("space", "Control_L", "grave", ...).

use std::collections::HashMap;
use std::sync::OnceLock;

use super::keymap;
use super::modifiers::{self, has_modifier};

/// Code of a key that resolves to nothing.
pub const UNKNOWN: i32 = 0;
/// Void sentinel for names outside the symbolic table.
pub const VOID: i32 = -1;

pub const KEY_0: i32 = 7;
pub const KEY_1: i32 = 8;
pub const KEY_2: i32 = 9;
pub const KEY_3: i32 = 10;
pub const KEY_4: i32 = 11;
pub const KEY_5: i32 = 12;
pub const KEY_6: i32 = 13;
pub const KEY_7: i32 = 14;
pub const KEY_8: i32 = 15;
pub const KEY_9: i32 = 16;

pub const ASTERISK: i32 = 17;
pub const NUMBER_SIGN: i32 = 18;

pub const UP: i32 = 19;
pub const DOWN: i32 = 20;
pub const LEFT: i32 = 21;
pub const RIGHT: i32 = 22;
pub const CENTER: i32 = 23;

pub const KEY_A: i32 = 29;
pub const KEY_B: i32 = 30;
pub const KEY_C: i32 = 31;
pub const KEY_D: i32 = 32;
pub const KEY_E: i32 = 33;
pub const KEY_F: i32 = 34;
pub const KEY_G: i32 = 35;
pub const KEY_H: i32 = 36;
pub const KEY_I: i32 = 37;
pub const KEY_J: i32 = 38;
pub const KEY_K: i32 = 39;
pub const KEY_L: i32 = 40;
pub const KEY_M: i32 = 41;
pub const KEY_N: i32 = 42;
pub const KEY_O: i32 = 43;
pub const KEY_P: i32 = 44;
pub const KEY_Q: i32 = 45;
pub const KEY_R: i32 = 46;
pub const KEY_S: i32 = 47;
pub const KEY_T: i32 = 48;
pub const KEY_U: i32 = 49;
pub const KEY_V: i32 = 50;
pub const KEY_W: i32 = 51;
pub const KEY_X: i32 = 52;
pub const KEY_Y: i32 = 53;
pub const KEY_Z: i32 = 54;

pub const COMMA: i32 = 55;
pub const PERIOD: i32 = 56;
pub const ALT_LEFT: i32 = 57;
pub const ALT_RIGHT: i32 = 58;
pub const SHIFT_LEFT: i32 = 59;
pub const SHIFT_RIGHT: i32 = 60;
pub const TAB: i32 = 61;
pub const SPACE: i32 = 62;
pub const SYM: i32 = 63;
pub const ENTER: i32 = 66;
pub const BACKSPACE: i32 = 67;
pub const GRAVE: i32 = 68;
pub const MINUS: i32 = 69;
pub const EQUALS: i32 = 70;
pub const LEFT_BRACKET: i32 = 71;
pub const RIGHT_BRACKET: i32 = 72;
pub const BACKSLASH: i32 = 73;
pub const SEMICOLON: i32 = 74;
pub const APOSTROPHE: i32 = 75;
pub const SLASH: i32 = 76;
pub const AT: i32 = 77;
pub const PLUS: i32 = 81;
pub const MENU: i32 = 82;
pub const PAGE_UP: i32 = 92;
pub const PAGE_DOWN: i32 = 93;
pub const ESCAPE: i32 = 111;
pub const FORWARD_DELETE: i32 = 112;
pub const CTRL_LEFT: i32 = 113;
pub const CTRL_RIGHT: i32 = 114;
pub const CAPS_LOCK: i32 = 115;
pub const SCROLL_LOCK: i32 = 116;
pub const META_LEFT: i32 = 117;
pub const META_RIGHT: i32 = 118;
pub const FUNCTION: i32 = 119;
pub const PAUSE: i32 = 121;
pub const HOME: i32 = 122;
pub const END: i32 = 123;
pub const INSERT: i32 = 124;

pub const F1: i32 = 131;
pub const F2: i32 = 132;
pub const F3: i32 = 133;
pub const F4: i32 = 134;
pub const F5: i32 = 135;
pub const F6: i32 = 136;
pub const F7: i32 = 137;
pub const F8: i32 = 138;
pub const F9: i32 = 139;
pub const F10: i32 = 140;
pub const F11: i32 = 141;
pub const F12: i32 = 142;
pub const NUM_LOCK: i32 = 143;

/// Upper edge of the platform key code region.
pub const LAST_KEYCODE: i32 = 288;

/// Symbolic names, one canonical entry per code.
const NAMED_KEYS: &[(&str, i32)] = &[
    ("0", KEY_0),
    ("1", KEY_1),
    ("2", KEY_2),
    ("3", KEY_3),
    ("4", KEY_4),
    ("5", KEY_5),
    ("6", KEY_6),
    ("7", KEY_7),
    ("8", KEY_8),
    ("9", KEY_9),
    ("a", KEY_A),
    ("b", KEY_B),
    ("c", KEY_C),
    ("d", KEY_D),
    ("e", KEY_E),
    ("f", KEY_F),
    ("g", KEY_G),
    ("h", KEY_H),
    ("i", KEY_I),
    ("j", KEY_J),
    ("k", KEY_K),
    ("l", KEY_L),
    ("m", KEY_M),
    ("n", KEY_N),
    ("o", KEY_O),
    ("p", KEY_P),
    ("q", KEY_Q),
    ("r", KEY_R),
    ("s", KEY_S),
    ("t", KEY_T),
    ("u", KEY_U),
    ("v", KEY_V),
    ("w", KEY_W),
    ("x", KEY_X),
    ("y", KEY_Y),
    ("z", KEY_Z),
    ("asterisk", ASTERISK),
    ("numbersign", NUMBER_SIGN),
    ("Up", UP),
    ("Down", DOWN),
    ("Left", LEFT),
    ("Right", RIGHT),
    ("Select", CENTER),
    ("comma", COMMA),
    ("period", PERIOD),
    ("Alt_L", ALT_LEFT),
    ("Alt_R", ALT_RIGHT),
    ("Shift_L", SHIFT_LEFT),
    ("Shift_R", SHIFT_RIGHT),
    ("Tab", TAB),
    ("space", SPACE),
    ("Mode_switch", SYM),
    ("Return", ENTER),
    ("BackSpace", BACKSPACE),
    ("grave", GRAVE),
    ("minus", MINUS),
    ("equal", EQUALS),
    ("bracketleft", LEFT_BRACKET),
    ("bracketright", RIGHT_BRACKET),
    ("backslash", BACKSLASH),
    ("semicolon", SEMICOLON),
    ("apostrophe", APOSTROPHE),
    ("slash", SLASH),
    ("at", AT),
    ("plus", PLUS),
    ("Menu", MENU),
    ("Page_Up", PAGE_UP),
    ("Page_Down", PAGE_DOWN),
    ("Escape", ESCAPE),
    ("Delete", FORWARD_DELETE),
    ("Control_L", CTRL_LEFT),
    ("Control_R", CTRL_RIGHT),
    ("Caps_Lock", CAPS_LOCK),
    ("Scroll_Lock", SCROLL_LOCK),
    ("Meta_L", META_LEFT),
    ("Meta_R", META_RIGHT),
    ("function", FUNCTION),
    ("Pause", PAUSE),
    ("Home", HOME),
    ("End", END),
    ("Insert", INSERT),
    ("F1", F1),
    ("F2", F2),
    ("F3", F3),
    ("F4", F4),
    ("F5", F5),
    ("F6", F6),
    ("F7", F7),
    ("F8", F8),
    ("F9", F9),
    ("F10", F10),
    ("F11", F11),
    ("F12", F12),
    ("Num_Lock", NUM_LOCK),
];

/// Aliases accepted on lookup but never produced by [`name_of`].
const ALIASED_KEYS: &[(&str, i32)] = &[
    ("A", KEY_A),
    ("B", KEY_B),
    ("C", KEY_C),
    ("D", KEY_D),
    ("E", KEY_E),
    ("F", KEY_F),
    ("G", KEY_G),
    ("H", KEY_H),
    ("I", KEY_I),
    ("J", KEY_J),
    ("K", KEY_K),
    ("L", KEY_L),
    ("M", KEY_M),
    ("N", KEY_N),
    ("O", KEY_O),
    ("P", KEY_P),
    ("Q", KEY_Q),
    ("R", KEY_R),
    ("S", KEY_S),
    ("T", KEY_T),
    ("U", KEY_U),
    ("V", KEY_V),
    ("W", KEY_W),
    ("X", KEY_X),
    ("Y", KEY_Y),
    ("Z", KEY_Z),
    ("Enter", ENTER),
    ("KP_Enter", ENTER),
];

fn name_table() -> &'static HashMap<&'static str, i32> {
    static TABLE: OnceLock<HashMap<&'static str, i32>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut map = HashMap::new();
        for &(name, code) in NAMED_KEYS.iter().chain(ALIASED_KEYS) {
            map.insert(name, code);
        }
        map
    })
}

fn code_table() -> &'static HashMap<i32, &'static str> {
    static TABLE: OnceLock<HashMap<i32, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| NAMED_KEYS.iter().map(|&(name, code)| (code, name)).collect())
}

/// Resolves a symbolic name to its key code, [`VOID`] when unknown.
pub fn keycode_from_name(name: &str) -> i32 {
    name_table().get(name).copied().unwrap_or(VOID)
}

/// Canonical symbolic name of a code.
pub fn name_of(code: i32) -> Option<&'static str> {
    code_table().get(&code).copied()
}

/// Display string for a key, honoring the shift bit of `mask`.
///
/// Printable keys render as their keymap character, everything else as its
/// symbolic name. Unknown codes render empty.
pub fn display_label(code: i32, mask: u32) -> String {
    let shifted = has_modifier(mask, modifiers::SHIFT_ON);
    if let Some(ch) = keymap::key_char(code, shifted) {
        ch.to_string()
    } else {
        name_of(code).map(str::to_string).unwrap_or_default()
    }
}

/// Parses a compound send token into a `(code, mask)` pair.
///
/// The token is `Modifier+...+Modifier+KeyName` or a bare key name. Parts
/// before the key that are not modifier names are skipped. A key name that
/// resolves to nothing yields a negative code; callers treat `(VOID, 0)` as
/// "not a direct key mapping" and fall through to other interpretations,
/// never as an error.
pub fn parse_send(token: &str) -> (i32, u32) {
    if token.is_empty() {
        return (VOID, 0);
    }
    let (mods, key) = match token.rsplit_once('+') {
        Some((head, tail)) => (head, tail),
        None => ("", token),
    };
    let mut mask = 0;
    for part in mods.split('+').filter(|p| !p.is_empty()) {
        if let Some(bit) = modifiers::modifier_from_name(part) {
            mask |= bit;
        }
    }
    (keycode_from_name(key), mask)
}

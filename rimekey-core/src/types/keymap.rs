//! Character keymap for the printable key subset
//!
//! Stands in for the platform keymap: maps printable key codes to their
//! unshifted and shifted glyphs on a US layout. Keys that produce no visible
//! glyph (space included) are not printing keys here.

use super::key_codes::*;

const SHIFTED_DIGITS: [char; 10] = [')', '!', '@', '#', '$', '%', '^', '&', '*', '('];

/// Glyph produced by a key, `None` outside the printable subset.
pub fn key_char(code: i32, shifted: bool) -> Option<char> {
    let (base, shift) = match code {
        KEY_A..=KEY_Z => {
            let ch = (b'a' + (code - KEY_A) as u8) as char;
            (ch, ch.to_ascii_uppercase())
        }
        KEY_0..=KEY_9 => {
            let i = (code - KEY_0) as usize;
            ((b'0' + i as u8) as char, SHIFTED_DIGITS[i])
        }
        COMMA => (',', '<'),
        PERIOD => ('.', '>'),
        GRAVE => ('`', '~'),
        MINUS => ('-', '_'),
        EQUALS => ('=', '+'),
        LEFT_BRACKET => ('[', '{'),
        RIGHT_BRACKET => (']', '}'),
        BACKSLASH => ('\\', '|'),
        SEMICOLON => (';', ':'),
        APOSTROPHE => ('\'', '"'),
        SLASH => ('/', '?'),
        AT => ('@', '@'),
        PLUS => ('+', '+'),
        ASTERISK => ('*', '*'),
        NUMBER_SIGN => ('#', '#'),
        _ => return None,
    };
    Some(if shifted { shift } else { base })
}

/// Whether the key produces a glyph.
pub fn is_printing(code: i32) -> bool {
    key_char(code, false).is_some()
}

/// Whether the code lies in the platform key region.
pub fn is_std_key(code: i32) -> bool {
    (1..=LAST_KEYCODE).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_shift_to_uppercase() {
        assert_eq!(key_char(KEY_A, false), Some('a'));
        assert_eq!(key_char(KEY_A, true), Some('A'));
        assert_eq!(key_char(KEY_Z, true), Some('Z'));
    }

    #[test]
    fn digits_shift_to_symbols() {
        assert_eq!(key_char(KEY_1, false), Some('1'));
        assert_eq!(key_char(KEY_1, true), Some('!'));
        assert_eq!(key_char(KEY_0, true), Some(')'));
    }

    #[test]
    fn punctuation_pairs() {
        assert_eq!(key_char(GRAVE, true), Some('~'));
        assert_eq!(key_char(SEMICOLON, true), Some(':'));
        assert_eq!(key_char(APOSTROPHE, false), Some('\''));
    }

    #[test]
    fn space_produces_no_glyph() {
        assert_eq!(key_char(SPACE, false), None);
        assert!(!is_printing(SPACE));
    }

    #[test]
    fn std_key_bounds() {
        assert!(is_std_key(KEY_A));
        assert!(!is_std_key(0));
        assert!(!is_std_key(-1));
        assert!(!is_std_key(LAST_KEYCODE + 1));
    }
}

//! Engine interface boundary
//!
//! The [`EngineState`] trait is what descriptor resolution reads from the
//! input-method engine; [`engine_event`] maps a platform `(code, mask)` pair
//! into the engine's own keyval/modifier space.

use log::debug;

use crate::types::key_codes::*;
use crate::types::keymap;
use crate::types::modifiers::{self, has_modifier};

/// Engine option consulted by toggle keys that name no option themselves.
pub const ASCII_MODE_OPTION: &str = "ascii_mode";

/// The engine's value for keys it does not define.
pub const VOID_KEYVAL: i32 = 0xff_ffff;

/// Engine-side modifier bits.
pub mod modifier {
    pub const SHIFT: u32 = 1 << 0;
    pub const LOCK: u32 = 1 << 1;
    pub const CONTROL: u32 = 1 << 2;
    pub const ALT: u32 = 1 << 3;
    pub const SYM: u32 = 1 << 4;
    pub const META: u32 = 1 << 28;
    pub const RELEASE: u32 = 1 << 30;
}

/// Runtime state read from the input-method engine.
pub trait EngineState {
    /// Engine is passing keys through as plain ASCII.
    fn is_ascii_mode(&self) -> bool {
        true
    }

    /// Name of the active schema.
    fn schema_name(&self) -> String {
        String::new()
    }

    /// Value of a boolean engine option.
    fn option(&self, _name: &str) -> bool {
        false
    }
}

/// A key event in the engine's code space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineEvent {
    pub keyval: i32,
    pub modifiers: u32,
}

/// Maps a platform key code and modifier mask into the engine's space.
///
/// Total and stateless: unknown codes become [`VOID_KEYVAL`], each platform
/// modifier bit is tested independently, and a mask equal to the release
/// sentinel sets the engine's release bit.
pub fn engine_event(code: i32, mask: u32) -> EngineEvent {
    let keyval = keyval_of(code);
    let mut m = 0;
    if has_modifier(mask, modifiers::SHIFT_ON) {
        m |= modifier::SHIFT;
    }
    if has_modifier(mask, modifiers::CTRL_ON) {
        m |= modifier::CONTROL;
    }
    if has_modifier(mask, modifiers::ALT_ON) {
        m |= modifier::ALT;
    }
    if has_modifier(mask, modifiers::SYM_ON) {
        m |= modifier::SYM;
    }
    if has_modifier(mask, modifiers::META_ON) {
        m |= modifier::META;
    }
    if mask == modifiers::RELEASE_SENTINEL {
        m |= modifier::RELEASE;
    }
    debug!(
        "engine event: code={} mask={:#x} -> keyval={:#x} modifiers={:#x}",
        code, mask, keyval, m
    );
    EngineEvent { keyval, modifiers: m }
}

/// Engine keyval of a platform key code.
///
/// Printable keys carry their ASCII value; function and editing keys live in
/// the engine's dedicated range.
fn keyval_of(code: i32) -> i32 {
    if let Some(ch) = keymap::key_char(code, false) {
        return ch as i32;
    }
    match code {
        SPACE => 0x20,
        ENTER => 0xff0d,
        TAB => 0xff09,
        BACKSPACE => 0xff08,
        ESCAPE => 0xff1b,
        FORWARD_DELETE => 0xffff,
        HOME => 0xff50,
        LEFT => 0xff51,
        UP => 0xff52,
        RIGHT => 0xff53,
        DOWN => 0xff54,
        PAGE_UP => 0xff55,
        PAGE_DOWN => 0xff56,
        END => 0xff57,
        CENTER => 0xff60,
        INSERT => 0xff63,
        MENU => 0xff67,
        SYM => 0xff7e,
        NUM_LOCK => 0xff7f,
        PAUSE => 0xff13,
        SCROLL_LOCK => 0xff14,
        F1..=F12 => 0xffbe + (code - F1),
        SHIFT_LEFT => 0xffe1,
        SHIFT_RIGHT => 0xffe2,
        CTRL_LEFT => 0xffe3,
        CTRL_RIGHT => 0xffe4,
        CAPS_LOCK => 0xffe5,
        META_LEFT => 0xffe7,
        META_RIGHT => 0xffe8,
        ALT_LEFT => 0xffe9,
        ALT_RIGHT => 0xffea,
        _ => VOID_KEYVAL,
    }
}

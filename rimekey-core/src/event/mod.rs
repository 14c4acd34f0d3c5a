//! Resolved key events
//!
//! An [`Event`] is the meaning of one key-spec string: which code or text it
//! produces, how its labels render, and which semantic action fields it
//! forwards to the engine layer. Events are immutable once resolved; the
//! accessors read live keyboard/engine state through an [`EventContext`] but
//! never write anything back.

mod parser;

use crate::context::EventContext;
use crate::engine::ASCII_MODE_OPTION;
use crate::preset::{PresetTable, ToggleStates};
use crate::types::key_codes::{
    ALT_LEFT, ALT_RIGHT, COMMA, GRAVE, KEY_0, KEY_9, KEY_A, KEY_Z, META_LEFT, META_RIGHT, PERIOD,
    SLASH,
};
use crate::types::modifiers::{has_modifier, SHIFT_ON};

/// The resolved meaning of one key-spec string.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    code: i32,
    mask: u32,
    text: Option<String>,
    label: String,
    shift_label: String,
    preview: String,
    states: Option<ToggleStates>,
    command: String,
    option: String,
    select: String,
    toggle: String,
    commit: String,
    shift_lock: String,
    functional: bool,
    repeatable: bool,
    sticky: bool,
}

impl Event {
    /// Resolves a key-spec string against the preset table.
    ///
    /// Interpretations are tried in order: bracketed send, action list,
    /// preset name, symbolic key name, literal text. A descriptor matching
    /// nothing usable still yields a valid literal-text event; resolution
    /// never fails.
    pub fn resolve(spec: &str, presets: &PresetTable, ctx: &EventContext<'_>) -> Self {
        parser::resolve(spec, presets, ctx)
    }

    fn blank() -> Self {
        Self {
            code: 0,
            mask: 0,
            text: None,
            label: String::new(),
            shift_label: String::new(),
            preview: String::new(),
            states: None,
            command: String::new(),
            option: String::new(),
            select: String::new(),
            toggle: String::new(),
            commit: String::new(),
            shift_lock: String::new(),
            functional: false,
            repeatable: false,
            sticky: false,
        }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn option(&self) -> &str {
        &self.option
    }

    pub fn select(&self) -> &str {
        &self.select
    }

    pub fn shift_lock(&self) -> &str {
        &self.shift_lock
    }

    pub fn states(&self) -> Option<&ToggleStates> {
        self.states.as_ref()
    }

    pub fn is_functional(&self) -> bool {
        self.functional
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    pub fn is_meta(&self) -> bool {
        self.code == META_LEFT || self.code == META_RIGHT
    }

    pub fn is_alt(&self) -> bool {
        self.code == ALT_LEFT || self.code == ALT_RIGHT
    }

    /// Displayed label under the current keyboard and engine state.
    ///
    /// Toggle keys show the state label for their engine option and skip
    /// case adjustment; a toggle with no states behaves as a plain key.
    pub fn label(&self, ctx: &EventContext<'_>) -> String {
        if !self.toggle.is_empty() {
            if let Some(states) = &self.states {
                return states.get(ctx.engine.option(&self.toggle)).to_string();
            }
        }

        if let Some(kbd) = ctx.keyboard {
            if kbd.is_only_shift_on() {
                if (KEY_0..=KEY_9).contains(&self.code) && !kbd.hook_shift_num() {
                    return self.adjust_case(&self.shift_label, ctx);
                }
                let symbol = (GRAVE..=SLASH).contains(&self.code)
                    || self.code == COMMA
                    || self.code == PERIOD;
                if symbol && !kbd.hook_shift_symbol() {
                    return self.adjust_case(&self.shift_label, ctx);
                }
            } else if has_modifier(kbd.modifier() | self.mask, SHIFT_ON) {
                return self.adjust_case(&self.shift_label, ctx);
            }
        }

        self.adjust_case(&self.label, ctx)
    }

    /// Text committed by this key, case-adjusted.
    ///
    /// Falls back to the label for unmasked alphabetic keys while the
    /// keyboard needs forced uppercase.
    pub fn text(&self, ctx: &EventContext<'_>) -> String {
        let mut s = self.text.as_deref().unwrap_or("");
        if s.is_empty() {
            if let Some(kbd) = ctx.keyboard {
                if kbd.need_up_case() && self.mask == 0 && (KEY_A..=KEY_Z).contains(&self.code) {
                    s = &self.label;
                }
            }
        }
        self.adjust_case(s, ctx)
    }

    /// Preview popup text; the explicit preview wins over the label.
    pub fn preview_text(&self, ctx: &EventContext<'_>) -> String {
        if !self.preview.is_empty() {
            return self.preview.clone();
        }
        self.label(ctx)
    }

    /// Engine option this key toggles.
    pub fn toggle(&self) -> &str {
        if !self.toggle.is_empty() {
            &self.toggle
        } else {
            ASCII_MODE_OPTION
        }
    }

    /// Committed string, verbatim.
    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// Uppercases single-character strings when the keyboard asks for it,
    /// directly or through its label preference outside ASCII mode.
    fn adjust_case(&self, s: &str, ctx: &EventContext<'_>) -> String {
        if s.is_empty() {
            return String::new();
        }
        if s.chars().count() == 1 {
            if let Some(kbd) = ctx.keyboard {
                if kbd.need_up_case() || (!ctx.engine.is_ascii_mode() && kbd.is_label_uppercase()) {
                    return s.to_uppercase();
                }
            }
        }
        s.to_string()
    }
}

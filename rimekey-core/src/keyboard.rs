//! Keyboard-side runtime state consumed during label and text resolution.

/// Live state of the keyboard that owns a key.
///
/// Implemented by the layout container; every query has a conservative
/// default so partial implementations behave like an idle keyboard.
pub trait KeyboardState {
    /// Labels must render forced-uppercase right now.
    fn need_up_case(&self) -> bool {
        false
    }

    /// The keyboard prefers uppercase labels outside ASCII input mode.
    fn is_label_uppercase(&self) -> bool {
        false
    }

    /// Shift is the only modifier currently held.
    fn is_only_shift_on(&self) -> bool {
        false
    }

    /// Current live modifier bitmask.
    fn modifier(&self) -> u32 {
        0
    }

    /// User preference: shift state is forwarded to the engine for digits.
    fn hook_shift_num(&self) -> bool {
        false
    }

    /// User preference: shift state is forwarded to the engine for symbols.
    fn hook_shift_symbol(&self) -> bool {
        false
    }
}

/// Plain value implementation of [`KeyboardState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardSnapshot {
    pub need_up_case: bool,
    pub label_uppercase: bool,
    pub only_shift_on: bool,
    pub modifier: u32,
    pub hook_shift_num: bool,
    pub hook_shift_symbol: bool,
}

impl KeyboardState for KeyboardSnapshot {
    fn need_up_case(&self) -> bool {
        self.need_up_case
    }

    fn is_label_uppercase(&self) -> bool {
        self.label_uppercase
    }

    fn is_only_shift_on(&self) -> bool {
        self.only_shift_on
    }

    fn modifier(&self) -> u32 {
        self.modifier
    }

    fn hook_shift_num(&self) -> bool {
        self.hook_shift_num
    }

    fn hook_shift_symbol(&self) -> bool {
        self.hook_shift_symbol
    }
}

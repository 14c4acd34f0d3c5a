//! Platform modifier bitmask constants.

pub const SHIFT_ON: u32 = 0x1;
pub const ALT_ON: u32 = 0x2;
pub const SYM_ON: u32 = 0x4;
pub const CTRL_ON: u32 = 0x1000;
pub const META_ON: u32 = 0x10000;

/// Sentinel mask marking a key-release event.
///
/// Matched by exact equality, not as a bit test.
pub const RELEASE_SENTINEL: u32 = 1 << 30;

pub fn has_modifier(mask: u32, modifier: u32) -> bool {
    mask & modifier != 0
}

/// Modifier name as written in send tokens, `None` for anything else.
pub fn modifier_from_name(name: &str) -> Option<u32> {
    match name {
        "Shift" => Some(SHIFT_ON),
        "Control" => Some(CTRL_ON),
        "Alt" => Some(ALT_ON),
        "Meta" => Some(META_ON),
        "SYM" => Some(SYM_ON),
        _ => None,
    }
}

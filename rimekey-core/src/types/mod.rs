pub mod key_codes;
pub mod keymap;
pub mod modifiers;

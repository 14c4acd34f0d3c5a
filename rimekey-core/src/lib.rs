//! RimeKey core - key descriptor resolution for Rime-style soft keyboards
//!
//! This crate turns the textual key specifications found in keyboard layout
//! definitions into resolved [`Event`] values, and maps platform key/modifier
//! pairs into the input-method engine's own key space.

pub mod context;
pub mod engine;
pub mod error;
pub mod event;
pub mod keyboard;
pub mod preset;
pub mod types;

pub use context::EventContext;
pub use engine::{engine_event, EngineEvent, EngineState, ASCII_MODE_OPTION, VOID_KEYVAL};
pub use error::{Error, Result};
pub use event::Event;
pub use keyboard::{KeyboardSnapshot, KeyboardState};
pub use preset::{PresetKey, PresetTable, ToggleStates};

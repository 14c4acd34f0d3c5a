//! Preset key table
//!
//! Named key records shared across layouts. The table is materialized by the
//! host's configuration layer (the record types are serde-friendly for that
//! purpose) and consumed read-only during descriptor resolution.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Display labels of a toggle key, off and on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ToggleStates {
    off: String,
    on: String,
}

impl ToggleStates {
    pub fn new(off: impl Into<String>, on: impl Into<String>) -> Self {
        Self {
            off: off.into(),
            on: on.into(),
        }
    }

    /// Label for the given option state.
    pub fn get(&self, on: bool) -> &str {
        if on {
            &self.on
        } else {
            &self.off
        }
    }

    pub fn off(&self) -> &str {
        &self.off
    }

    pub fn on(&self) -> &str {
        &self.on
    }
}

impl TryFrom<Vec<String>> for ToggleStates {
    type Error = Error;

    fn try_from(states: Vec<String>) -> Result<Self, Error> {
        match <[String; 2]>::try_from(states) {
            Ok([off, on]) => Ok(Self { off, on }),
            Err(states) => Err(Error::ToggleStates(states.len())),
        }
    }
}

impl From<ToggleStates> for Vec<String> {
    fn from(states: ToggleStates) -> Self {
        vec![states.off, states.on]
    }
}

/// One named record of the preset key table.
///
/// Every field is optional in configuration; absent strings default to empty,
/// `sticky` and `repeatable` to false and `functional` to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetKey {
    pub command: String,
    pub option: String,
    pub select: String,
    pub toggle: String,
    pub label: String,
    pub preview: String,
    pub shift_lock: String,
    pub commit: String,
    pub send: String,
    pub text: Option<String>,
    pub states: Option<ToggleStates>,
    pub sticky: bool,
    pub repeatable: bool,
    pub functional: bool,
}

impl Default for PresetKey {
    fn default() -> Self {
        Self {
            command: String::new(),
            option: String::new(),
            select: String::new(),
            toggle: String::new(),
            label: String::new(),
            preview: String::new(),
            shift_lock: String::new(),
            commit: String::new(),
            send: String::new(),
            text: None,
            states: None,
            sticky: false,
            repeatable: false,
            functional: true,
        }
    }
}

/// Lookup from key-spec name to preset record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetTable(HashMap<String, PresetKey>);

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, key: PresetKey) {
        self.0.insert(name.into(), key);
    }

    pub fn get(&self, name: &str) -> Option<&PresetKey> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PresetKey)> for PresetTable {
    fn from_iter<I: IntoIterator<Item = (String, PresetKey)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

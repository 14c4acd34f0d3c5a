use std::collections::HashMap;

use rimekey_core::{EngineState, PresetTable};

/// Engine fake with scriptable state.
pub struct FakeEngine {
    pub ascii_mode: bool,
    pub schema: String,
    pub options: HashMap<String, bool>,
}

impl Default for FakeEngine {
    fn default() -> Self {
        Self {
            ascii_mode: true,
            schema: String::new(),
            options: HashMap::new(),
        }
    }
}

impl EngineState for FakeEngine {
    fn is_ascii_mode(&self) -> bool {
        self.ascii_mode
    }

    fn schema_name(&self) -> String {
        self.schema.clone()
    }

    fn option(&self, name: &str) -> bool {
        self.options.get(name).copied().unwrap_or(false)
    }
}

/// Builds a preset table from its JSON representation.
pub fn presets(json: &str) -> PresetTable {
    serde_json::from_str(json).expect("preset table json")
}

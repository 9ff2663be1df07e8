use serde::{Deserialize, Serialize};

/// Host-tunable engine settings. `horizon_days` is the number of days
/// ahead of a due date within which reminders fire, the engine's only
/// tunable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineSettings {
    #[serde(default = "EngineSettings::default_horizon_days")]
    pub horizon_days: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            horizon_days: Self::default_horizon_days(),
        }
    }
}

impl EngineSettings {
    pub fn default_horizon_days() -> u32 {
        3
    }
}

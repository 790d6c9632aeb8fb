use std::fmt;

use serde::Serialize;
use tracing::debug;

/// Launch vehicle the telemetry is labelled with. Only the label changes;
/// every profile shares the same kinematic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleProfile {
    #[default]
    Falcon9,
    Generic,
}

impl VehicleProfile {
    /// Resolves a caller-supplied label, falling back to `Generic` for
    /// anything unrecognised.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "falcon9" => VehicleProfile::Falcon9,
            "generic" => VehicleProfile::Generic,
            _ => {
                debug!("Unknown vehicle profile '{}', using generic", label);
                VehicleProfile::Generic
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleProfile::Falcon9 => "falcon9",
            VehicleProfile::Generic => "generic",
        }
    }
}

impl fmt::Display for VehicleProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

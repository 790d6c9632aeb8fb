pub mod config;
pub mod constants;
pub mod control;
pub mod errors;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use config::{EngineConfig, GroundTrackConfig, NoiseConfig};
pub use control::mission_phases::{find_phase, MissionPhase, MISSION_PHASES};
pub use control::phase_classifier::{current_phase, phase_progress, PhaseProgress};
pub use control::vehicle::VehicleProfile;
pub use errors::{Result, TelemetryError};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::ground_track::{GroundPosition, GroundTrack};
pub use trajectory_system::kinematics::{typical_profile, FlightRegime, KinematicProfile};

// Re-export commonly used items from telemetry_system
pub use telemetry_system::batch::BatchSchedule;
pub use telemetry_system::summary::FlightSummary;
pub use telemetry_system::telemetry::{
    batch, synthesize, SeparationStatus, TelemetryPoint, TelemetrySynthesizer,
};

// Re-export commonly used utilities
pub use utils::time_format::format_mission_time;

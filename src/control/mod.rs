pub mod mission_phases;
pub mod phase_classifier;
pub mod vehicle;

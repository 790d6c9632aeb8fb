pub mod ground_track;
pub mod kinematics;

use serde::Serialize;

use crate::constants::*;

/// Noise-free flight state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KinematicProfile {
    pub altitude: f64,         // km
    pub velocity: f64,         // km/s
    pub downrange: f64,        // km
    pub acceleration: f64,     // g
    pub dynamic_pressure: f64, // kPa
}

/// Flight regimes of the reference ascent, in time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightRegime {
    PreLaunch,
    FirstStageBurn,
    StageSeparation,
    SecondStageBurn,
    OrbitalCoast,
}

impl FlightRegime {
    pub fn at(mission_time: f64) -> Self {
        if mission_time < LIFTOFF_TIME {
            FlightRegime::PreLaunch
        } else if mission_time <= MECO_TIME {
            FlightRegime::FirstStageBurn
        } else if mission_time <= STAGE_SEP_END {
            FlightRegime::StageSeparation
        } else if mission_time <= SECO_TIME {
            FlightRegime::SecondStageBurn
        } else {
            FlightRegime::OrbitalCoast
        }
    }

    pub fn is_powered(&self) -> bool {
        matches!(
            self,
            FlightRegime::FirstStageBurn | FlightRegime::SecondStageBurn
        )
    }
}

/// Dynamic pressure bell peaking at `MAX_Q_PRESSURE` at T+72 and zero at liftoff.
fn dynamic_pressure(mission_time: f64) -> f64 {
    let x = mission_time / MAX_Q_TIME;
    MAX_Q_PRESSURE * x.powf(MAX_Q_SHAPE) * (MAX_Q_SHAPE * (1.0 - x)).exp()
}

fn second_stage_downrange(m: f64) -> f64 {
    MECO_DOWNRANGE + SECOND_STAGE_DOWNRANGE_GAIN * m * (0.3 + 0.7 * m)
}

/// Deterministic kinematic state of the reference ascent at `mission_time`.
pub fn typical_profile(mission_time: f64) -> KinematicProfile {
    let t = mission_time;
    match FlightRegime::at(t) {
        FlightRegime::PreLaunch => KinematicProfile::default(),

        FlightRegime::FirstStageBurn => {
            let n = t / MECO_TIME;
            KinematicProfile {
                altitude: MECO_ALTITUDE * (0.3 * n * n + 0.7 * n),
                velocity: MECO_VELOCITY * n * (0.5 + 0.5 * n),
                downrange: MECO_DOWNRANGE * n.powi(3),
                acceleration: FIRST_STAGE_BASE_ACCEL + FIRST_STAGE_ACCEL_GAIN * n,
                dynamic_pressure: dynamic_pressure(t),
            }
        }

        FlightRegime::StageSeparation => {
            let dt = t - MECO_TIME;
            KinematicProfile {
                altitude: MECO_ALTITUDE + SEP_CLIMB_RATE * dt,
                velocity: MECO_VELOCITY,
                downrange: MECO_DOWNRANGE + MECO_VELOCITY * dt,
                acceleration: 0.0,
                dynamic_pressure: 0.0,
            }
        }

        FlightRegime::SecondStageBurn => {
            let m = (t - STAGE_SEP_END) / (SECO_TIME - STAGE_SEP_END);
            KinematicProfile {
                altitude: MECO_ALTITUDE + SECOND_STAGE_ALTITUDE_GAIN * m,
                velocity: MECO_VELOCITY + SECOND_STAGE_VELOCITY_GAIN * m,
                downrange: second_stage_downrange(m),
                acceleration: SECOND_STAGE_BASE_ACCEL + SECOND_STAGE_ACCEL_GAIN * m,
                dynamic_pressure: 0.0,
            }
        }

        FlightRegime::OrbitalCoast => KinematicProfile {
            altitude: ORBIT_ALTITUDE,
            velocity: ORBIT_VELOCITY,
            downrange: second_stage_downrange(1.0) + ORBIT_VELOCITY * (t - SECO_TIME),
            acceleration: 0.0,
            dynamic_pressure: 0.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_pre_launch_is_at_rest() {
        for t in [-3600.0, -10.0, -0.001] {
            assert_eq!(typical_profile(t), KinematicProfile::default());
        }
    }

    #[test]
    fn test_liftoff() {
        let profile = typical_profile(0.0);
        assert_eq!(profile.altitude, 0.0);
        assert_eq!(profile.velocity, 0.0);
        assert_eq!(profile.dynamic_pressure, 0.0);
        assert_abs_diff_eq!(profile.acceleration, 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_max_q_peak() {
        let at_peak = typical_profile(MAX_Q_TIME).dynamic_pressure;
        assert_abs_diff_eq!(at_peak, 35.0, epsilon = 1e-9);
        assert!(typical_profile(60.0).dynamic_pressure < at_peak);
        assert!(typical_profile(90.0).dynamic_pressure < at_peak);
        assert!(typical_profile(30.0).dynamic_pressure > 0.0);
    }

    #[test]
    fn test_meco_state() {
        let profile = typical_profile(MECO_TIME);
        assert_abs_diff_eq!(profile.altitude, 80.0, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.velocity, 2.3, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.downrange, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.acceleration, 3.5, epsilon = 1e-9);
    }

    #[test]
    fn test_stage_separation_coast() {
        let profile = typical_profile(164.0);
        assert_abs_diff_eq!(profile.altitude, 81.0, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.velocity, 2.3, epsilon = 1e-12);
        assert_abs_diff_eq!(profile.downrange, 104.6, epsilon = 1e-9);
        assert_eq!(profile.acceleration, 0.0);
        assert_eq!(profile.dynamic_pressure, 0.0);
    }

    #[test]
    fn test_second_stage_burn_midpoint() {
        let profile = typical_profile(337.5);
        assert_abs_diff_eq!(profile.altitude, 165.0, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.velocity, 5.05, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.downrange, 100.0 + 1900.0 * 0.5 * 0.65, epsilon = 1e-9);
        assert_abs_diff_eq!(profile.acceleration, 1.9, epsilon = 1e-9);
    }

    #[test]
    fn test_seco_and_orbit() {
        let seco = typical_profile(SECO_TIME);
        assert_abs_diff_eq!(seco.altitude, 250.0, epsilon = 1e-9);
        assert_abs_diff_eq!(seco.velocity, 7.8, epsilon = 1e-9);
        assert_abs_diff_eq!(seco.downrange, 2000.0, epsilon = 1e-9);

        let coast = typical_profile(610.0);
        assert_eq!(coast.altitude, 250.0);
        assert_eq!(coast.velocity, 7.8);
        assert_abs_diff_eq!(coast.downrange, 2780.0, epsilon = 1e-9);
        assert_eq!(coast.acceleration, 0.0);
    }

    #[test]
    fn test_profile_is_deterministic() {
        for t in [-5.0, 33.3, 72.0, 163.5, 400.0, 5000.0] {
            assert_eq!(typical_profile(t), typical_profile(t));
        }
    }

    #[test]
    fn test_regime_boundaries() {
        assert_eq!(FlightRegime::at(-0.5), FlightRegime::PreLaunch);
        assert_eq!(FlightRegime::at(0.0), FlightRegime::FirstStageBurn);
        assert_eq!(FlightRegime::at(162.0), FlightRegime::FirstStageBurn);
        assert_eq!(FlightRegime::at(162.5), FlightRegime::StageSeparation);
        assert_eq!(FlightRegime::at(165.0), FlightRegime::StageSeparation);
        assert_eq!(FlightRegime::at(510.0), FlightRegime::SecondStageBurn);
        assert_eq!(FlightRegime::at(510.1), FlightRegime::OrbitalCoast);
        assert!(!FlightRegime::at(164.0).is_powered());
    }

    #[test]
    fn test_nan_does_not_panic() {
        let profile = typical_profile(f64::NAN);
        assert!(profile.downrange.is_nan());
    }
}

use crate::config::GroundTrackConfig;
use crate::constants::{KM_PER_DEGREE, SECO_TIME, SIDEREAL_DAY};

use super::kinematics::{typical_profile, FlightRegime};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GroundPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GroundPosition {
            latitude,
            longitude,
        }
    }
}

/// Projects the vehicle's sub-satellite point from mission time.
pub struct GroundTrack<'a> {
    config: &'a GroundTrackConfig,
}

impl<'a> GroundTrack<'a> {
    pub fn new(config: &'a GroundTrackConfig) -> Self {
        GroundTrack { config }
    }

    pub fn launch_site(&self) -> GroundPosition {
        GroundPosition::new(self.config.launch_latitude, self.config.launch_longitude)
    }

    /// Offset from the launch site along the ascent azimuth.
    fn along_azimuth(&self, downrange_km: f64) -> GroundPosition {
        let azimuth = self.config.ascent_azimuth_deg.to_radians();
        let latitude =
            self.config.launch_latitude + downrange_km * azimuth.cos() / KM_PER_DEGREE;
        let mean_latitude = (self.config.launch_latitude + latitude) / 2.0;
        let longitude = self.config.launch_longitude
            + downrange_km * azimuth.sin() / (KM_PER_DEGREE * mean_latitude.to_radians().cos());
        GroundPosition::new(latitude, longitude)
    }

    pub fn position_at(&self, mission_time: f64) -> GroundPosition {
        match FlightRegime::at(mission_time) {
            FlightRegime::PreLaunch => self.launch_site(),
            FlightRegime::OrbitalCoast => self.orbital_position(mission_time - SECO_TIME),
            _ => self.along_azimuth(typical_profile(mission_time).downrange),
        }
    }

    /// Sinusoidal track bounded by the inclination, continuous with the
    /// insertion point at SECO.
    fn orbital_position(&self, since_insertion: f64) -> GroundPosition {
        let insertion = self.along_azimuth(typical_profile(SECO_TIME).downrange);
        let inclination = self.config.inclination_deg;
        let period = self.config.orbital_period_s;

        let angular_rate = std::f64::consts::TAU / period;
        let start_angle = (insertion.latitude / inclination).clamp(-1.0, 1.0).asin();
        let latitude = inclination * (angular_rate * since_insertion + start_angle).sin();

        let drift_rate = 360.0 / period - 360.0 / SIDEREAL_DAY;
        let mut longitude = insertion.longitude + drift_rate * since_insertion;
        if self.config.wrap_longitude {
            longitude = wrap_longitude(longitude);
        }

        GroundPosition::new(latitude, longitude)
    }
}

/// Wraps a longitude into [-180, 180).
pub fn wrap_longitude(longitude: f64) -> f64 {
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TelemetryError};

/// Half-widths of the uniform perturbation applied to each synthesized field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    pub altitude_km: f64,
    pub velocity_kms: f64,
    pub downrange_km: f64,
    pub acceleration_g: f64,
    pub throttle_pct: f64,
    pub dynamic_pressure_kpa: f64,
    pub ground_track_deg: f64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        NoiseConfig {
            altitude_km: 0.1,
            velocity_kms: 0.01,
            downrange_km: 0.2,
            acceleration_g: 0.05,
            throttle_pct: 1.0,
            dynamic_pressure_kpa: 0.3,
            ground_track_deg: 0.0005,
        }
    }
}

impl NoiseConfig {
    /// No perturbation at all; synthesized points then match the kinematic profile.
    pub fn silent() -> Self {
        NoiseConfig {
            altitude_km: 0.0,
            velocity_kms: 0.0,
            downrange_km: 0.0,
            acceleration_g: 0.0,
            throttle_pct: 0.0,
            dynamic_pressure_kpa: 0.0,
            ground_track_deg: 0.0,
        }
    }

    fn amplitudes(&self) -> [(&'static str, f64); 7] {
        [
            ("noise.altitude_km", self.altitude_km),
            ("noise.velocity_kms", self.velocity_kms),
            ("noise.downrange_km", self.downrange_km),
            ("noise.acceleration_g", self.acceleration_g),
            ("noise.throttle_pct", self.throttle_pct),
            ("noise.dynamic_pressure_kpa", self.dynamic_pressure_kpa),
            ("noise.ground_track_deg", self.ground_track_deg),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundTrackConfig {
    pub launch_latitude: f64,
    pub launch_longitude: f64,
    pub ascent_azimuth_deg: f64,
    pub inclination_deg: f64,
    pub orbital_period_s: f64,
    pub wrap_longitude: bool,
}

impl Default for GroundTrackConfig {
    fn default() -> Self {
        GroundTrackConfig {
            launch_latitude: 28.5623,
            launch_longitude: -80.5774,
            ascent_azimuth_deg: 45.0,
            inclination_deg: 51.6,
            orbital_period_s: 5400.0,
            wrap_longitude: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub default_vehicle: String,
    pub max_acceleration_g: Option<f64>,
    pub noise: NoiseConfig,
    pub ground_track: GroundTrackConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_vehicle: "falcon9".into(),
            max_acceleration_g: None,
            noise: NoiseConfig::default(),
            ground_track: GroundTrackConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref).map_err(|err| {
            TelemetryError::Configuration(format!(
                "unable to read config file {}: {err}",
                path_ref.display()
            ))
        })?;
        let config: EngineConfig = toml::from_str(&contents).map_err(|err| {
            TelemetryError::Configuration(format!(
                "failed to parse config file {}: {err}",
                path_ref.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(contents).map_err(|err| {
            TelemetryError::Configuration(format!("failed to parse config: {err}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, amplitude) in self.noise.amplitudes() {
            if !amplitude.is_finite() || amplitude < 0.0 {
                return Err(TelemetryError::Configuration(format!(
                    "{name} must be finite and non-negative, got {amplitude}"
                )));
            }
        }

        let track = &self.ground_track;
        if !(-90.0..=90.0).contains(&track.launch_latitude) {
            return Err(TelemetryError::Configuration(
                "ground_track.launch_latitude must be between -90 and 90".into(),
            ));
        }
        if !(-180.0..=180.0).contains(&track.launch_longitude) {
            return Err(TelemetryError::Configuration(
                "ground_track.launch_longitude must be between -180 and 180".into(),
            ));
        }
        if !track.ascent_azimuth_deg.is_finite() {
            return Err(TelemetryError::Configuration(
                "ground_track.ascent_azimuth_deg must be finite".into(),
            ));
        }
        if !(track.inclination_deg > 0.0 && track.inclination_deg <= 90.0) {
            return Err(TelemetryError::Configuration(
                "ground_track.inclination_deg must be in (0, 90]".into(),
            ));
        }
        if !(track.orbital_period_s.is_finite() && track.orbital_period_s > 0.0) {
            return Err(TelemetryError::Configuration(
                "ground_track.orbital_period_s must be greater than zero".into(),
            ));
        }

        if let Some(limit) = self.max_acceleration_g {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(TelemetryError::Configuration(
                    "max_acceleration_g must be greater than zero when set".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
        let silent = EngineConfig {
            noise: NoiseConfig::silent(),
            ..EngineConfig::default()
        };
        assert!(silent.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            default_vehicle = "generic"

            [noise]
            altitude_km = 0.5
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.default_vehicle, "generic");
        assert_eq!(config.noise.altitude_km, 0.5);
        assert_eq!(config.noise.velocity_kms, NoiseConfig::default().velocity_kms);
        assert_eq!(config.ground_track, GroundTrackConfig::default());
        assert_eq!(config.max_acceleration_g, None);
    }

    #[test]
    fn test_negative_noise_rejected() {
        let result = EngineConfig::from_toml_str("[noise]\nthrottle_pct = -1.0\n");
        assert!(matches!(result, Err(TelemetryError::Configuration(_))));
    }

    #[test]
    fn test_bad_inclination_rejected() {
        let mut config = EngineConfig::default();
        config.ground_track.inclination_deg = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_acceleration_limit_rejected() {
        let config = EngineConfig {
            max_acceleration_g: Some(-2.0),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_config_from_file() {
        let temp_path = std::env::temp_dir().join("launch-telemetry-config-test.toml");
        let mut config = EngineConfig::default();
        config.max_acceleration_g = Some(6.0);
        config.ground_track.wrap_longitude = false;

        let toml_string = toml::to_string(&config).expect("config should serialize");
        fs::write(&temp_path, toml_string).expect("should write temp config");

        let loaded = EngineConfig::from_file(&temp_path).expect("config should load");
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let result = EngineConfig::from_file("/nonexistent/launch-telemetry.toml");
        assert!(matches!(result, Err(TelemetryError::Configuration(_))));
    }
}

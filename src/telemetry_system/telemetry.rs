use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::constants::*;
use crate::control::phase_classifier::current_phase;
use crate::control::vehicle::VehicleProfile;
use crate::errors::Result;
use crate::trajectory_system::ground_track::{wrap_longitude, GroundTrack};
use crate::trajectory_system::kinematics::{typical_profile, FlightRegime};

use super::batch::BatchSchedule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeparationStatus {
    Attached,
    Separated,
}

impl SeparationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeparationStatus::Attached => "attached",
            SeparationStatus::Separated => "separated",
        }
    }
}

/// One synthesized telemetry sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryPoint {
    pub mission_time: f64,
    pub altitude: f64,         // km
    pub velocity: f64,         // km/s
    pub downrange: f64,        // km
    pub acceleration: f64,     // g
    pub dynamic_pressure: f64, // kPa
    pub throttle: f64,         // %
    pub fuel_remaining: f64,   // %
    pub latitude: f64,
    pub longitude: f64,
    pub phase: &'static str,
    pub stage_status: SeparationStatus,
    pub fairing_status: SeparationStatus,
    #[serde(rename = "isMaxQ")]
    pub is_max_q: bool,
    pub vehicle: VehicleProfile,
}

/// Commanded throttle of the reference ascent, in percent.
pub fn throttle_at(mission_time: f64) -> f64 {
    let t = mission_time;
    if t < THROTTLE_RAMP_START {
        0.0
    } else if t < LIFTOFF_TIME {
        FULL_THROTTLE * (t - THROTTLE_RAMP_START) / (LIFTOFF_TIME - THROTTLE_RAMP_START)
    } else if t <= MECO_TIME {
        if (THROTTLE_BUCKET_START..=THROTTLE_BUCKET_END).contains(&t) {
            THROTTLE_BUCKET_LEVEL
        } else {
            FULL_THROTTLE
        }
    } else if t <= STAGE_SEP_END {
        0.0
    } else if t <= SECO_TIME {
        FULL_THROTTLE
    } else {
        0.0
    }
}

/// First stage propellant remaining, in percent. Second stage propellant is
/// not tracked, so this reads empty from stage separation on.
pub fn fuel_remaining_at(mission_time: f64) -> f64 {
    if mission_time < LIFTOFF_TIME {
        FUEL_FULL
    } else if mission_time <= MECO_TIME {
        FUEL_FULL * (1.0 - mission_time / MECO_TIME)
    } else {
        0.0
    }
}

pub fn is_max_q(mission_time: f64) -> bool {
    (MAX_Q_WINDOW_START..=MAX_Q_WINDOW_END).contains(&mission_time)
}

pub fn stage_status_at(mission_time: f64) -> SeparationStatus {
    if mission_time > MECO_TIME {
        SeparationStatus::Separated
    } else {
        SeparationStatus::Attached
    }
}

pub fn fairing_status_at(mission_time: f64) -> SeparationStatus {
    if mission_time >= FAIRING_SEP_TIME {
        SeparationStatus::Separated
    } else {
        SeparationStatus::Attached
    }
}

/// Wraps the kinematic profile with perturbation, hardware state and the
/// ground track. Owns its random source so runs can be reproduced by seed.
pub struct TelemetrySynthesizer<R: Rng = StdRng> {
    config: EngineConfig,
    rng: R,
}

impl TelemetrySynthesizer<StdRng> {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_seed(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TelemetrySynthesizer<R> {
    pub fn with_rng(config: EngineConfig, rng: R) -> Self {
        TelemetrySynthesizer { config, rng }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Resolves an optional caller label against the configured default vehicle.
    pub fn resolve_vehicle(&self, label: Option<&str>) -> VehicleProfile {
        VehicleProfile::from_label(label.unwrap_or(&self.config.default_vehicle))
    }

    fn jitter(&mut self, amplitude: f64) -> f64 {
        if amplitude > 0.0 {
            self.rng.gen_range(-amplitude..=amplitude)
        } else {
            0.0
        }
    }

    pub fn synthesize(&mut self, mission_time: f64, vehicle: VehicleProfile) -> TelemetryPoint {
        let t = mission_time;
        let regime = FlightRegime::at(t);
        let profile = typical_profile(t);
        let position = GroundTrack::new(&self.config.ground_track).position_at(t);

        let mut altitude = profile.altitude;
        let mut velocity = profile.velocity;
        let mut downrange = profile.downrange;
        let mut acceleration = profile.acceleration;
        let mut dynamic_pressure = profile.dynamic_pressure;
        let mut throttle = throttle_at(t);
        let mut latitude = position.latitude;
        let mut longitude = position.longitude;

        if regime == FlightRegime::OrbitalCoast {
            let orbit_angle = std::f64::consts::TAU * (t - SECO_TIME)
                / self.config.ground_track.orbital_period_s;
            altitude += ORBIT_ALTITUDE_SWING * orbit_angle.sin();
        }

        // The pad is at rest before liftoff, so perturbation starts at T+0.
        if regime != FlightRegime::PreLaunch {
            let noise = self.config.noise.clone();
            altitude += self.jitter(noise.altitude_km);
            velocity += self.jitter(noise.velocity_kms);
            downrange += self.jitter(noise.downrange_km);
            acceleration += self.jitter(noise.acceleration_g);
            if regime.is_powered() {
                throttle += self.jitter(noise.throttle_pct);
            }
            if dynamic_pressure > 0.0 {
                dynamic_pressure += self.jitter(noise.dynamic_pressure_kpa);
            }
            latitude += self.jitter(noise.ground_track_deg);
            longitude += self.jitter(noise.ground_track_deg);
        }

        if let Some(limit) = self.config.max_acceleration_g {
            acceleration = acceleration.clamp(-limit, limit);
        }
        if self.config.ground_track.wrap_longitude {
            longitude = wrap_longitude(longitude);
        }

        let point = TelemetryPoint {
            mission_time: t,
            altitude: altitude.max(0.0),
            velocity: velocity.max(0.0),
            downrange: downrange.max(0.0),
            acceleration,
            dynamic_pressure: dynamic_pressure.max(0.0),
            throttle: throttle.clamp(0.0, PERCENT_MAX),
            fuel_remaining: fuel_remaining_at(t).clamp(0.0, PERCENT_MAX),
            latitude,
            longitude,
            phase: current_phase(t).id,
            stage_status: stage_status_at(t),
            fairing_status: fairing_status_at(t),
            is_max_q: is_max_q(t),
            vehicle,
        };
        trace!(
            "Synthesized {} at t={:.1}s: alt {:.2} km, vel {:.3} km/s",
            point.phase,
            t,
            point.altitude,
            point.velocity
        );
        point
    }

    /// Lazily synthesizes one point per scheduled sample time.
    pub fn stream<'a>(
        &'a mut self,
        schedule: BatchSchedule,
        vehicle: VehicleProfile,
    ) -> impl Iterator<Item = TelemetryPoint> + 'a {
        schedule
            .into_iter()
            .map(move |time| self.synthesize(time, vehicle))
    }

    pub fn batch(&mut self, schedule: BatchSchedule, vehicle: VehicleProfile) -> Vec<TelemetryPoint> {
        debug!(
            "Generating {} telemetry points from t={} to t={} every {}s for {}",
            schedule.len(),
            schedule.start(),
            schedule.end(),
            schedule.interval(),
            vehicle
        );
        self.stream(schedule, vehicle).collect()
    }
}

/// Synthesizes a point with the default configuration and the thread-local
/// random source.
pub fn synthesize(mission_time: f64, vehicle_profile: Option<&str>) -> TelemetryPoint {
    let mut synthesizer = default_synthesizer();
    let vehicle = synthesizer.resolve_vehicle(vehicle_profile);
    synthesizer.synthesize(mission_time, vehicle)
}

/// Synthesizes every point of `[start, end]` at `interval` second steps.
pub fn batch(
    start: f64,
    end: f64,
    interval: f64,
    vehicle_profile: Option<&str>,
) -> Result<Vec<TelemetryPoint>> {
    let schedule = BatchSchedule::new(start, end, interval)?;
    let mut synthesizer = default_synthesizer();
    let vehicle = synthesizer.resolve_vehicle(vehicle_profile);
    Ok(synthesizer.batch(schedule, vehicle))
}

fn default_synthesizer() -> TelemetrySynthesizer<ThreadRng> {
    TelemetrySynthesizer::with_rng(EngineConfig::default(), rand::thread_rng())
}

use crate::utils::time_format::format_mission_time;

use super::telemetry::TelemetryPoint;

/// Running extremes and phase transitions over a telemetry series.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightSummary {
    pub samples: usize,
    pub max_altitude: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub peak_dynamic_pressure: f64,
    pub peak_dynamic_pressure_time: Option<f64>,
    pub min_fuel: f64,
    pub phase_transitions: Vec<(&'static str, f64)>,
}

impl Default for FlightSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightSummary {
    pub fn new() -> Self {
        FlightSummary {
            samples: 0,
            max_altitude: 0.0,
            max_velocity: 0.0,
            max_acceleration: 0.0,
            peak_dynamic_pressure: 0.0,
            peak_dynamic_pressure_time: None,
            min_fuel: f64::MAX,
            phase_transitions: Vec::new(),
        }
    }

    pub fn from_points(points: &[TelemetryPoint]) -> Self {
        let mut summary = Self::new();
        for point in points {
            summary.record(point);
        }
        summary
    }

    pub fn record(&mut self, point: &TelemetryPoint) {
        self.samples += 1;

        if point.altitude > self.max_altitude {
            self.max_altitude = point.altitude;
        }
        if point.velocity > self.max_velocity {
            self.max_velocity = point.velocity;
        }
        if point.acceleration > self.max_acceleration {
            self.max_acceleration = point.acceleration;
        }
        if point.dynamic_pressure > self.peak_dynamic_pressure {
            self.peak_dynamic_pressure = point.dynamic_pressure;
            self.peak_dynamic_pressure_time = Some(point.mission_time);
        }
        if point.fuel_remaining < self.min_fuel {
            self.min_fuel = point.fuel_remaining;
        }

        match self.phase_transitions.last() {
            Some((last_phase, _)) if *last_phase == point.phase => {}
            _ => self.phase_transitions.push((point.phase, point.mission_time)),
        }
    }

    pub fn display(&self) {
        println!("\n--- Flight Summary ---");
        println!("Samples: {}", self.samples);
        println!("Max Altitude: {:.2} km", self.max_altitude);
        println!("Max Velocity: {:.3} km/s", self.max_velocity);
        println!("Max Acceleration: {:.2} g", self.max_acceleration);
        match self.peak_dynamic_pressure_time {
            Some(time) => println!(
                "Peak Dynamic Pressure: {:.2} kPa at {}",
                self.peak_dynamic_pressure,
                format_mission_time(time)
            ),
            None => println!("Peak Dynamic Pressure: none recorded"),
        }
        if self.samples > 0 {
            println!("Min Fuel: {:.1} %", self.min_fuel);
        }

        println!("\n--- Phase Transitions ---");
        for (phase, time) in &self.phase_transitions {
            println!("{} reached at: {}", phase, format_mission_time(*time));
        }
    }
}

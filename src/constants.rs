// Mission timeline (seconds relative to liftoff)
pub const LIFTOFF_TIME: f64 = 0.0;
pub const THROTTLE_RAMP_START: f64 = -10.0; // engines spool up over the last 10 s
pub const MECO_TIME: f64 = 162.0;
pub const STAGE_SEP_END: f64 = 165.0;
pub const SECO_TIME: f64 = 510.0;
pub const FAIRING_SEP_TIME: f64 = 210.0;

// Max-Q window
pub const MAX_Q_TIME: f64 = 72.0;
pub const MAX_Q_WINDOW_START: f64 = 67.0;
pub const MAX_Q_WINDOW_END: f64 = 77.0;
pub const MAX_Q_PRESSURE: f64 = 35.0; // kPa
pub const MAX_Q_SHAPE: f64 = 3.0; // sharpness of the q(t) bell

// Throttle bucket around Max-Q
pub const THROTTLE_BUCKET_START: f64 = 50.0;
pub const THROTTLE_BUCKET_END: f64 = 80.0;
pub const THROTTLE_BUCKET_LEVEL: f64 = 70.0; // %
pub const FULL_THROTTLE: f64 = 100.0; // %

// First stage burn
pub const MECO_ALTITUDE: f64 = 80.0; // km
pub const MECO_VELOCITY: f64 = 2.3; // km/s
pub const MECO_DOWNRANGE: f64 = 100.0; // km
pub const FIRST_STAGE_BASE_ACCEL: f64 = 1.3; // g
pub const FIRST_STAGE_ACCEL_GAIN: f64 = 2.2; // g

// Stage separation coast
pub const SEP_CLIMB_RATE: f64 = 0.5; // km/s

// Second stage burn
pub const SECOND_STAGE_ALTITUDE_GAIN: f64 = 170.0; // km
pub const SECOND_STAGE_VELOCITY_GAIN: f64 = 5.5; // km/s
pub const SECOND_STAGE_DOWNRANGE_GAIN: f64 = 1900.0; // km
pub const SECOND_STAGE_BASE_ACCEL: f64 = 0.8; // g
pub const SECOND_STAGE_ACCEL_GAIN: f64 = 2.2; // g

// Orbit
pub const ORBIT_ALTITUDE: f64 = 250.0; // km
pub const ORBIT_VELOCITY: f64 = 7.8; // km/s
pub const ORBIT_ALTITUDE_SWING: f64 = 2.0; // km

// Geodesy
pub const KM_PER_DEGREE: f64 = 111.32;
pub const SIDEREAL_DAY: f64 = 86_164.0; // s

// Percent scales
pub const FUEL_FULL: f64 = 100.0;
pub const PERCENT_MAX: f64 = 100.0;

use crate::errors::{Result, TelemetryError};

// Slack, in steps, so spans that are an exact multiple of the interval keep
// their end point despite float rounding.
const STEP_TOLERANCE: f64 = 1e-9;

/// Inclusive, fixed-step sampling of `[start, end]`.
///
/// The schedule is `Copy` and yields its sample times lazily; iterating it
/// again restarts from `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSchedule {
    start: f64,
    end: f64,
    interval: f64,
}

impl BatchSchedule {
    pub fn new(start: f64, end: f64, interval: f64) -> Result<Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(TelemetryError::InvalidInterval(interval));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(TelemetryError::InvalidRange { start, end });
        }
        Ok(BatchSchedule {
            start,
            end,
            interval,
        })
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            return 0;
        }
        let steps = (self.end - self.start) / self.interval;
        // `as` saturates, so spans too long to count stay lazily iterable.
        ((steps + STEP_TOLERANCE).floor() as usize).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn times(&self) -> ScheduleTimes {
        ScheduleTimes {
            schedule: *self,
            index: 0,
            count: self.len(),
        }
    }
}

impl IntoIterator for BatchSchedule {
    type Item = f64;
    type IntoIter = ScheduleTimes;

    fn into_iter(self) -> Self::IntoIter {
        self.times()
    }
}

impl IntoIterator for &BatchSchedule {
    type Item = f64;
    type IntoIter = ScheduleTimes;

    fn into_iter(self) -> Self::IntoIter {
        self.times()
    }
}

#[derive(Debug, Clone)]
pub struct ScheduleTimes {
    schedule: BatchSchedule,
    index: usize,
    count: usize,
}

impl Iterator for ScheduleTimes {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.index >= self.count {
            return None;
        }
        let schedule = &self.schedule;
        let time = schedule.start + self.index as f64 * schedule.interval;
        self.index += 1;
        Some(time)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScheduleTimes {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_inclusive_endpoints() {
        let schedule = BatchSchedule::new(0.0, 10.0, 1.0).unwrap();
        let times: Vec<f64> = schedule.into_iter().collect();
        assert_eq!(times.len(), 11);
        assert_eq!(times.first(), Some(&0.0));
        assert_eq!(times.last(), Some(&10.0));

        let coarse: Vec<f64> = BatchSchedule::new(0.0, 10.0, 5.0).unwrap().times().collect();
        assert_eq!(coarse, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_partial_last_step_excluded() {
        let times: Vec<f64> = BatchSchedule::new(0.0, 10.0, 4.0).unwrap().times().collect();
        assert_eq!(times, vec![0.0, 4.0, 8.0]);
    }

    #[test]
    fn test_fractional_step_keeps_end() {
        let schedule = BatchSchedule::new(0.0, 0.3, 0.1).unwrap();
        let times: Vec<f64> = schedule.times().collect();
        assert_eq!(times.len(), 4);
        assert_abs_diff_eq!(times[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_off_grid_end_not_sampled() {
        let times: Vec<f64> = BatchSchedule::new(0.0, 1000.9999995, 1.0)
            .unwrap()
            .times()
            .collect();
        assert_eq!(times.len(), 1001);
        assert_eq!(times.last(), Some(&1000.0));
        for pair in times.windows(2) {
            assert_eq!(pair[1] - pair[0], 1.0);
        }
    }

    #[test]
    fn test_huge_span_stays_lazy() {
        let schedule = BatchSchedule::new(0.0, 1.0e300, 1.0).unwrap();
        assert_eq!(schedule.len(), usize::MAX);
        let head: Vec<f64> = schedule.times().take(3).collect();
        assert_eq!(head, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_negative_start() {
        let times: Vec<f64> = BatchSchedule::new(-20.0, 0.0, 10.0).unwrap().times().collect();
        assert_eq!(times, vec![-20.0, -10.0, 0.0]);
    }

    #[test]
    fn test_single_point_and_empty_ranges() {
        assert_eq!(BatchSchedule::new(5.0, 5.0, 1.0).unwrap().len(), 1);
        let reversed = BatchSchedule::new(10.0, 0.0, 1.0).unwrap();
        assert!(reversed.is_empty());
        assert_eq!(reversed.times().count(), 0);
    }

    #[test]
    fn test_schedule_restarts() {
        let schedule = BatchSchedule::new(0.0, 3.0, 1.0).unwrap();
        let first: Vec<f64> = schedule.times().collect();
        let second: Vec<f64> = (&schedule).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(schedule.times().len(), 4);
    }

    #[test]
    fn test_invalid_interval_rejected() {
        for interval in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                BatchSchedule::new(0.0, 10.0, interval),
                Err(TelemetryError::InvalidInterval(_))
            ));
        }
    }

    #[test]
    fn test_non_finite_range_rejected() {
        assert!(matches!(
            BatchSchedule::new(f64::NEG_INFINITY, 10.0, 1.0),
            Err(TelemetryError::InvalidRange { .. })
        ));
    }
}

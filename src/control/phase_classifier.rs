use std::sync::OnceLock;

use serde::Serialize;

use super::mission_phases::{MissionPhase, MISSION_PHASES};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseProgress {
    pub current_phase: &'static MissionPhase,
    pub progress: f64,
    pub next_phase: Option<&'static MissionPhase>,
}

/// Index of the last phase in iteration order whose trigger time has been
/// reached. Falls back to the first entry.
fn last_reached<'a, I>(phases: I, mission_time: f64) -> usize
where
    I: IntoIterator<Item = &'a MissionPhase>,
{
    phases
        .into_iter()
        .enumerate()
        .filter(|(_, phase)| phase.trigger_time <= mission_time)
        .last()
        .map_or(0, |(index, _)| index)
}

/// Phase table sorted by trigger time. The sort is stable, so phases sharing
/// a trigger time keep their declared relative order.
fn time_sorted() -> &'static [&'static MissionPhase] {
    static SORTED: OnceLock<Vec<&'static MissionPhase>> = OnceLock::new();
    SORTED.get_or_init(|| {
        let mut sorted: Vec<&'static MissionPhase> = MISSION_PHASES.iter().collect();
        sorted.sort_by(|a, b| a.trigger_time.total_cmp(&b.trigger_time));
        sorted
    })
}

/// Phase active at `mission_time`, resolved against the declared table order.
///
/// The winner is the last declared phase whose trigger time has been reached,
/// not the phase with the largest reached trigger time. At T+960 both
/// `payload_deploy` and `booster_landing` qualify and `booster_landing` wins.
pub fn current_phase(mission_time: f64) -> &'static MissionPhase {
    &MISSION_PHASES[last_reached(&MISSION_PHASES, mission_time)]
}

/// Current phase, the fraction of it elapsed, and the phase that follows,
/// all resolved against the time-sorted table.
pub fn phase_progress(mission_time: f64) -> PhaseProgress {
    let sorted = time_sorted();
    let current_index = last_reached(sorted.iter().copied(), mission_time);
    let current_phase = sorted[current_index];
    let next_phase = sorted.get(current_index + 1).copied();

    let progress = match next_phase {
        Some(next) => {
            let span = next.trigger_time - current_phase.trigger_time;
            ((mission_time - current_phase.trigger_time) / span).clamp(0.0, 1.0)
        }
        None => 1.0,
    };

    PhaseProgress {
        current_phase,
        progress,
        next_phase,
    }
}

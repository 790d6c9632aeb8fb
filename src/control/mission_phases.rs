use serde::Serialize;

/// A named milestone of the flight, starting at `trigger_time` seconds from liftoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionPhase {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub trigger_time: f64,
}

impl MissionPhase {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        icon: &'static str,
        trigger_time: f64,
    ) -> Self {
        MissionPhase {
            id,
            name,
            description,
            icon,
            trigger_time,
        }
    }
}

/// Mission timeline in declared order.
///
/// The declared order is not sorted by trigger time: `booster_landing` is
/// listed after `payload_deploy` even though it triggers earlier. Phase lookup
/// by declared order depends on this.
pub const MISSION_PHASES: [MissionPhase; 13] = [
    MissionPhase::new(
        "pre_launch",
        "Pre-Launch",
        "Vehicle on the pad, final checks underway",
        "clipboard",
        -3600.0,
    ),
    MissionPhase::new(
        "fueling",
        "Propellant Loading",
        "Loading RP-1 and liquid oxygen",
        "fuel",
        -2400.0,
    ),
    MissionPhase::new(
        "terminal_count",
        "Terminal Count",
        "Automated launch sequence in control",
        "timer",
        -600.0,
    ),
    MissionPhase::new(
        "ignition",
        "Liftoff",
        "Engine ignition and liftoff",
        "flame",
        0.0,
    ),
    MissionPhase::new(
        "max_q",
        "Max-Q",
        "Peak aerodynamic pressure on the vehicle",
        "gauge",
        72.0,
    ),
    MissionPhase::new(
        "meco",
        "MECO",
        "First stage main engine cutoff",
        "power",
        162.0,
    ),
    MissionPhase::new(
        "stage_sep",
        "Stage Separation",
        "First and second stages separate",
        "split",
        165.0,
    ),
    MissionPhase::new(
        "ses",
        "Second Engine Start",
        "Second stage engine ignition",
        "rocket",
        170.0,
    ),
    MissionPhase::new(
        "fairing_sep",
        "Fairing Separation",
        "Payload fairing jettisoned",
        "shield",
        210.0,
    ),
    MissionPhase::new(
        "seco",
        "SECO",
        "Second stage engine cutoff, orbit reached",
        "orbit",
        510.0,
    ),
    MissionPhase::new(
        "payload_deploy",
        "Payload Deployment",
        "Payload separates from the second stage",
        "satellite",
        960.0,
    ),
    MissionPhase::new(
        "booster_landing",
        "Booster Landing",
        "First stage touches down on the droneship",
        "anchor",
        510.0,
    ),
    MissionPhase::new(
        "mission_complete",
        "Mission Complete",
        "Nominal mission, all objectives met",
        "check",
        3600.0,
    ),
];

pub fn find_phase(id: &str) -> Option<&'static MissionPhase> {
    MISSION_PHASES.iter().find(|phase| phase.id == id)
}

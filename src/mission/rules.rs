//! Rule-of-thumb architecture recommendations per mission type

use super::types::{Mission, MissionReport, MissionType, REPORT_NOTE};

/// Revisit times at or below this many hours call for a dense SSO constellation.
pub const FAST_REVISIT_HOURS: f64 = 12.0;
const DEFAULT_REVISIT_HOURS: f64 = 24.0;
const MIN_GROUND_STATIONS: u32 = 2;

/// Ordered list of recommendations for `mission`.
///
/// Zero-valued requirements count as unset.
pub fn recommend(mission: &Mission) -> Vec<&'static str> {
    let mut recs = Vec::new();
    match mission.mission_type {
        MissionType::Iot => recs.extend([
            "Store-and-forward payload",
            "UHF/VHF link",
            "High-count LEO smallsats",
        ]),
        MissionType::Eo => {
            let revisit = mission
                .required_revisit_hours
                .filter(|h| *h != 0.0)
                .unwrap_or(DEFAULT_REVISIT_HOURS);
            if revisit <= FAST_REVISIT_HOURS {
                recs.extend(["Sun-synchronous LEO", "Multiple planes (≥6)"]);
            }
            recs.extend(["Onboard compression", "X-band downlink"]);
        }
        MissionType::Comm => recs.extend([
            "Intersatellite links (optical)",
            "Phased array antennas",
        ]),
    }

    let stations = mission.ground_stations.filter(|n| *n != 0).unwrap_or(1);
    if stations < MIN_GROUND_STATIONS {
        recs.push("Add ground stations for coverage");
    }
    recs
}

/// Build the full report for `mission`
pub fn report(mission: &Mission) -> MissionReport {
    MissionReport {
        mission: mission.clone(),
        recommendations: recommend(mission),
        note: REPORT_NOTE,
    }
}

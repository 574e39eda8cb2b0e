//! Mission profile types

use serde::{Deserialize, Serialize};
use std::fmt;

pub const REPORT_NOTE: &str = "Prototype stub – replace with real trade studies later";

/// Broad mission class. Parsed case-insensitively; anything that is not
/// IoT or EO is treated as a communications mission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MissionType {
    Iot,
    #[default]
    Eo,
    Comm,
}

impl MissionType {
    pub fn as_str(self) -> &'static str {
        match self {
            MissionType::Iot => "IoT",
            MissionType::Eo => "EO",
            MissionType::Comm => "COMM",
        }
    }

    /// Next type in IoT -> EO -> COMM order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            MissionType::Iot => MissionType::Eo,
            MissionType::Eo => MissionType::Comm,
            MissionType::Comm => MissionType::Iot,
        }
    }
}

impl From<&str> for MissionType {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "IOT" => MissionType::Iot,
            "EO" => MissionType::Eo,
            _ => MissionType::Comm,
        }
    }
}

impl From<String> for MissionType {
    fn from(s: String) -> Self {
        MissionType::from(s.as_str())
    }
}

impl From<MissionType> for String {
    fn from(t: MissionType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for MissionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mission requirements fed to the recommendation rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mission {
    pub mission_type: MissionType,
    pub ground_stations: Option<u32>,
    pub required_revisit_hours: Option<f64>,
    pub required_downlink_mbps: Option<f64>,
}

/// Recommendations for one mission, in the shape the backend returns them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionReport {
    pub mission: Mission,
    pub recommendations: Vec<&'static str>,
    pub note: &'static str,
}

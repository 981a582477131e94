use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::navigation::{Coordinates, Positioned};

#[derive(Debug, Deserialize, Clone)]
pub struct Ship {
    pub symbol: String,
    #[serde(default)]
    pub registration: Option<ShipRegistration>,
    pub nav: ShipNav,
    pub fuel: ShipFuel,
    pub cargo: ShipCargo,
    #[serde(default)]
    pub mounts: Vec<ShipMount>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipRegistration {
    pub name: String,
    #[serde(rename = "factionSymbol")]
    pub faction_symbol: String,
    pub role: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipNav {
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    #[serde(rename = "waypointSymbol")]
    pub waypoint_symbol: String,
    pub route: ShipRoute,
    pub status: NavStatus,
    #[serde(rename = "flightMode", default)]
    pub flight_mode: Option<String>,
}

/// Flight state as reported by the service. Unknown values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NavStatus {
    Docked,
    InOrbit,
    InTransit,
    Other(String),
}

impl NavStatus {
    pub fn as_str(&self) -> &str {
        match self {
            NavStatus::Docked => "DOCKED",
            NavStatus::InOrbit => "IN_ORBIT",
            NavStatus::InTransit => "IN_TRANSIT",
            NavStatus::Other(status) => status,
        }
    }
}

impl From<String> for NavStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "DOCKED" => NavStatus::Docked,
            "IN_ORBIT" => NavStatus::InOrbit,
            "IN_TRANSIT" => NavStatus::InTransit,
            _ => NavStatus::Other(status),
        }
    }
}

impl From<&str> for NavStatus {
    fn from(status: &str) -> Self {
        NavStatus::from(status.to_string())
    }
}

impl From<NavStatus> for String {
    fn from(status: NavStatus) -> Self {
        match status {
            NavStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NavStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipRoute {
    pub destination: ShipRouteWaypoint,
    #[serde(default)]
    pub origin: Option<ShipRouteWaypoint>,
    #[serde(rename = "departureTime", default)]
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipRouteWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
}

impl Positioned for ShipRouteWaypoint {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipMount {
    pub symbol: String,
    pub name: String,
    pub description: Option<String>,
    pub strength: Option<i32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipCargo {
    pub capacity: u32,
    pub units: u32,
    pub inventory: Vec<CargoItem>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CargoItem {
    pub symbol: String,
    pub name: String,
    pub description: String,
    pub units: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipFuel {
    pub current: u32,
    pub capacity: u32,
    pub consumed: Option<ShipFuelConsumed>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShipFuelConsumed {
    pub amount: u32,
    pub timestamp: DateTime<Utc>,
}

// Acknowledgement payloads for ship commands
#[derive(Debug, Deserialize, Clone)]
pub struct NavAck {
    pub nav: ShipNav,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NavigationData {
    pub fuel: ShipFuel,
    pub nav: ShipNav,
}

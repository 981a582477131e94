use serde::{Deserialize, Serialize};

use crate::models::navigation::{Coordinates, Positioned};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct System {
    pub symbol: String,
    #[serde(rename = "sectorSymbol")]
    pub sector_symbol: String,
    #[serde(rename = "type")]
    pub system_type: String,
    pub x: i32,
    pub y: i32,
    pub waypoints: Vec<SystemWaypoint>,
}

impl System {
    pub fn waypoint(&self, symbol: &str) -> Option<&SystemWaypoint> {
        self.waypoints.iter().find(|w| w.symbol == symbol)
    }
}

/// Waypoint summary embedded in a system listing. Traits are not included here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SystemWaypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    pub x: i32,
    pub y: i32,
}

impl Positioned for SystemWaypoint {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}

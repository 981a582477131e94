use serde::{Deserialize, Serialize};

use crate::models::navigation::{Coordinates, Positioned};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Waypoint {
    pub symbol: String,
    #[serde(rename = "type")]
    pub waypoint_type: String,
    #[serde(rename = "systemSymbol")]
    pub system_symbol: String,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub traits: Vec<Trait>,
}

impl Waypoint {
    pub fn has_trait(&self, trait_symbol: &str) -> bool {
        self.traits.iter().any(|t| t.symbol == trait_symbol)
    }
}

impl Positioned for Waypoint {
    fn symbol(&self) -> &str {
        &self.symbol
    }

    fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.x, self.y)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Trait {
    pub symbol: String,
    pub name: String,
    pub description: String,
}

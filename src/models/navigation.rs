use serde::{Deserialize, Serialize};

/// A point on a system's integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: i32,
    pub y: i32,
}

impl Coordinates {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Anything that sits somewhere in a system and can be ranked by distance.
pub trait Positioned {
    fn symbol(&self) -> &str;
    fn coordinates(&self) -> Coordinates;
}

// Models module - typed snapshots of remote game state

pub mod agent;
pub mod ship;
pub mod contract;
pub mod waypoint;
pub mod system;
pub mod navigation;
pub mod responses;

// Re-export all models for easier imports
pub use agent::*;
pub use ship::*;
pub use contract::*;
pub use waypoint::*;
pub use system::*;
pub use navigation::*;
pub use responses::*;

// SpaceTraders fleet dashboard core
// Authenticated API client plus fleet navigation

pub mod models;
pub mod client;
pub mod operations;
pub mod config;
pub mod error;
pub mod verbosity;

// Re-export commonly used types
pub use models::{
    agent::Agent,
    ship::{Ship, ShipNav, ShipCargo, CargoItem, NavStatus},
    contract::{Contract, DeliveryItem},
    system::{System, SystemWaypoint},
    waypoint::{Waypoint, Trait},
    navigation::{Coordinates, Positioned},
};

pub use client::{SpaceTradersClient, FleetGateway};
pub use config::DashboardConfig;
pub use error::{ApiError, ConfigError, ErrorKind, Result};
pub use operations::{
    describe_nav_status, distance, rank_reachable_waypoints, FleetNavigator, NavAction,
    NavDisplay, Reachability, TransitionOutcome,
};

// Constants
pub const API_BASE_URL: &str = "https://api.spacetraders.io/v2";
pub const AGENT_TOKEN_FILE: &str = "AGENT_TOKEN";
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

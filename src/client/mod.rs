// Client module - SpaceTraders API client
pub mod api;
pub mod gateway;

pub use api::SpaceTradersClient;
pub use gateway::FleetGateway;

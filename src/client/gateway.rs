use async_trait::async_trait;

use crate::client::SpaceTradersClient;
use crate::error::Result;
use crate::models::Ship;

/// The slice of the remote API that fleet navigation drives.
#[async_trait]
pub trait FleetGateway: Send + Sync {
    async fn get_ship(&self, token: &str, ship_symbol: &str) -> Result<Ship>;
    async fn launch_to_orbit(&self, token: &str, ship_symbol: &str) -> Result<bool>;
    async fn dock(&self, token: &str, ship_symbol: &str) -> Result<bool>;
    async fn navigate(&self, token: &str, ship_symbol: &str, waypoint_symbol: &str) -> Result<bool>;
}

#[async_trait]
impl FleetGateway for SpaceTradersClient {
    async fn get_ship(&self, token: &str, ship_symbol: &str) -> Result<Ship> {
        SpaceTradersClient::get_ship(self, token, ship_symbol).await
    }

    async fn launch_to_orbit(&self, token: &str, ship_symbol: &str) -> Result<bool> {
        SpaceTradersClient::launch_to_orbit(self, token, ship_symbol).await
    }

    async fn dock(&self, token: &str, ship_symbol: &str) -> Result<bool> {
        SpaceTradersClient::dock(self, token, ship_symbol).await
    }

    async fn navigate(&self, token: &str, ship_symbol: &str, waypoint_symbol: &str) -> Result<bool> {
        SpaceTradersClient::navigate(self, token, ship_symbol, waypoint_symbol).await
    }
}

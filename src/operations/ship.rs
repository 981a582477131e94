// Individual ship operations module
use std::fmt;

use tracing::info;

use crate::client::FleetGateway;
use crate::error::Result;
use crate::models::*;

/// A status change a ship can be asked to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Launch,
    Dock,
    Navigate,
}

impl NavAction {
    pub fn as_str(self) -> &'static str {
        match self {
            NavAction::Launch => "launch",
            NavAction::Dock => "dock",
            NavAction::Navigate => "navigate",
        }
    }

    /// Status the service should report once the action lands. Display hint only.
    pub fn expected_status(self) -> NavStatus {
        match self {
            NavAction::Launch => NavStatus::InOrbit,
            NavAction::Dock => NavStatus::Docked,
            NavAction::Navigate => NavStatus::InTransit,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDisplay {
    pub ship_symbol: String,
    pub status: String,
    pub action: Option<NavAction>,
}

pub fn describe_nav_status(ship: &Ship) -> NavDisplay {
    let action = match ship.nav.status {
        NavStatus::Docked => Some(NavAction::Launch),
        NavStatus::InOrbit => Some(NavAction::Dock),
        NavStatus::InTransit | NavStatus::Other(_) => None,
    };
    NavDisplay {
        ship_symbol: ship.symbol.clone(),
        status: ship.nav.status.as_str().to_string(),
        action,
    }
}

/// Asks the caller to re-read a ship's nav; nothing is updated locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavRefresh {
    pub ship_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub action: NavAction,
    pub success: bool,
    pub refresh: NavRefresh,
}

/// Drives status transitions through a gateway. Holds no ship state.
pub struct FleetNavigator<'a, G: FleetGateway + ?Sized> {
    gateway: &'a G,
}

impl<'a, G: FleetGateway + ?Sized> FleetNavigator<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn launch(&self, token: &str, ship_symbol: &str) -> Result<TransitionOutcome> {
        let success = self.gateway.launch_to_orbit(token, ship_symbol).await?;
        Ok(outcome(NavAction::Launch, ship_symbol, success))
    }

    pub async fn dock(&self, token: &str, ship_symbol: &str) -> Result<TransitionOutcome> {
        let success = self.gateway.dock(token, ship_symbol).await?;
        Ok(outcome(NavAction::Dock, ship_symbol, success))
    }

    /// The destination is not checked locally; the service rejects unknown symbols.
    pub async fn navigate(
        &self,
        token: &str,
        ship_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<TransitionOutcome> {
        let success = self.gateway.navigate(token, ship_symbol, waypoint_symbol).await?;
        info!(ship = %ship_symbol, destination = %waypoint_symbol, success, "Navigate command sent");
        Ok(outcome(NavAction::Navigate, ship_symbol, success))
    }

    /// Fresh nav read, as requested by a `NavRefresh`.
    pub async fn nav_display(&self, token: &str, ship_symbol: &str) -> Result<NavDisplay> {
        let ship = self.gateway.get_ship(token, ship_symbol).await?;
        Ok(describe_nav_status(&ship))
    }
}

fn outcome(action: NavAction, ship_symbol: &str, success: bool) -> TransitionOutcome {
    info!(ship = %ship_symbol, action = %action, success, "Ship command acknowledged");
    TransitionOutcome {
        action,
        success,
        refresh: NavRefresh {
            ship_symbol: ship_symbol.to_string(),
        },
    }
}

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::API_BASE_URL;

/// Stateless gateway to the SpaceTraders API.
///
/// The client holds no credential; every call takes the bearer token it
/// should authenticate with. Cloning is cheap and shares the connection pool.
#[derive(Clone, Debug)]
pub struct SpaceTradersClient {
    client: reqwest::Client,
    base_url: Url,
}

impl SpaceTradersClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url).map_err(|e| {
            ApiError::RequestConstruction(format!("invalid base URL {}: {}", base_url, e))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::RequestConstruction(format!(
                "base URL {} cannot carry a path",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ApiError::RequestConstruction(format!("failed to build HTTP client: {}", e)))?;

        Ok(SpaceTradersClient {
            client,
            base_url: parsed,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ApiError::RequestConstruction(format!("base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// One round trip: authenticate, send, drain the body, decode the envelope.
    /// The response is dropped on every return path, releasing the connection.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        token: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let auth = bearer(token)?;
        debug!(%method, %url, "SpaceTraders request");

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(AUTHORIZATION, auth);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::from_send)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(ApiError::BodyRead)?;

        if !status.is_success() {
            let error = serde_json::from_slice::<ErrorResponse>(&bytes)
                .ok()
                .map(|e| e.error);
            warn!(
                %method,
                %url,
                status = status.as_u16(),
                code = error.as_ref().map(|e| e.code),
                "SpaceTraders request rejected"
            );
            return Err(ApiError::Rejected { status, error });
        }

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(%method, %url, error = %e, "SpaceTraders response did not match expected shape");
            ApiError::from(e)
        })
    }

    // Agent operations
    pub async fn get_agent(&self, token: &str) -> Result<Agent> {
        let url = self.endpoint(&["my", "agent"])?;
        let agent_response: AgentResponse = self.send(Method::GET, url, token, None).await?;
        Ok(agent_response.data)
    }

    // Ship operations
    pub async fn get_ships(&self, token: &str) -> Result<Vec<Ship>> {
        let url = self.endpoint(&["my", "ships"])?;
        let ships_response: ShipsResponse = self.send(Method::GET, url, token, None).await?;
        Ok(ships_response.data)
    }

    pub async fn get_ship(&self, token: &str, ship_symbol: &str) -> Result<Ship> {
        let url = self.endpoint(&["my", "ships", ship_symbol])?;
        let ship_response: ShipResponse = self.send(Method::GET, url, token, None).await?;
        Ok(ship_response.data)
    }

    // System and waypoint operations
    pub async fn get_system(&self, token: &str, system_symbol: &str) -> Result<System> {
        let url = self.endpoint(&["systems", system_symbol])?;
        let system_response: SystemResponse = self.send(Method::GET, url, token, None).await?;
        Ok(system_response.data)
    }

    pub async fn get_waypoint(
        &self,
        token: &str,
        system_symbol: &str,
        waypoint_symbol: &str,
    ) -> Result<Waypoint> {
        let url = self.endpoint(&["systems", system_symbol, "waypoints", waypoint_symbol])?;
        let waypoint_response: WaypointResponse = self.send(Method::GET, url, token, None).await?;
        Ok(waypoint_response.data)
    }

    /// Waypoints of a system, optionally restricted to those carrying a trait.
    pub async fn get_waypoints(
        &self,
        token: &str,
        system_symbol: &str,
        trait_filter: Option<&str>,
    ) -> Result<Vec<Waypoint>> {
        let mut url = self.endpoint(&["systems", system_symbol, "waypoints"])?;
        if let Some(trait_symbol) = trait_filter {
            url.query_pairs_mut().append_pair("traits", trait_symbol);
        }
        let waypoints_response: WaypointsResponse = self.send(Method::GET, url, token, None).await?;
        Ok(waypoints_response.data)
    }

    // Contract operations
    pub async fn get_contracts(&self, token: &str) -> Result<Vec<Contract>> {
        let url = self.endpoint(&["my", "contracts"])?;
        let contracts_response: ContractsResponse = self.send(Method::GET, url, token, None).await?;
        Ok(contracts_response.data)
    }

    // Ship commands. The acknowledged nav is decoded to confirm the shape, then dropped.
    pub async fn launch_to_orbit(&self, token: &str, ship_symbol: &str) -> Result<bool> {
        let url = self.endpoint(&["my", "ships", ship_symbol, "orbit"])?;
        let _orbit_response: OrbitResponse = self.send(Method::POST, url, token, None).await?;
        Ok(true)
    }

    pub async fn dock(&self, token: &str, ship_symbol: &str) -> Result<bool> {
        let url = self.endpoint(&["my", "ships", ship_symbol, "dock"])?;
        let _dock_response: DockResponse = self.send(Method::POST, url, token, None).await?;
        Ok(true)
    }

    pub async fn navigate(&self, token: &str, ship_symbol: &str, waypoint_symbol: &str) -> Result<bool> {
        let url = self.endpoint(&["my", "ships", ship_symbol, "navigate"])?;
        let payload = serde_json::json!({
            "waypointSymbol": waypoint_symbol
        });
        let _nav_response: NavigationResponse =
            self.send(Method::POST, url, token, Some(payload)).await?;
        Ok(true)
    }
}

fn bearer(token: &str) -> Result<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
        ApiError::RequestConstruction("credential is not a valid header value".to_string())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

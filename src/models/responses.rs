use serde::Deserialize;

/// Every successful SpaceTraders body is `{ "data": ... }`.
#[derive(Debug, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// List endpoints add paging metadata alongside the data array.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Meta {
    pub total: u32,
    pub page: u32,
    pub limit: u32,
}

// API Response wrappers
pub type AgentResponse = DataResponse<crate::models::Agent>;
pub type ShipResponse = DataResponse<crate::models::Ship>;
pub type ShipsResponse = ListResponse<crate::models::Ship>;
pub type SystemResponse = DataResponse<crate::models::System>;
pub type WaypointResponse = DataResponse<crate::models::Waypoint>;
pub type WaypointsResponse = ListResponse<crate::models::Waypoint>;
pub type ContractsResponse = ListResponse<crate::models::Contract>;
pub type OrbitResponse = DataResponse<crate::models::NavAck>;
pub type DockResponse = DataResponse<crate::models::NavAck>;
pub type NavigationResponse = DataResponse<crate::models::NavigationData>;

/// Error envelope returned with non-success statuses.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: RemoteError,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RemoteError {
    pub message: String,
    pub code: u32,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

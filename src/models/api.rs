use serde::{Deserialize, Serialize};

/// Envelope every backend endpoint wraps its payload in.
///
/// A 2xx response can still carry `success: false` when the backend rejects
/// the operation at the application level; `message` is the human-readable
/// reason in that case.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailabilityData {
    pub available: bool,
}

use serde::{Deserialize, Serialize};

/// Response body of CallRail's `GET /v3/a/{account_id}/calls.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallRailCallsResponse {
    #[serde(default)]
    pub calls: Vec<CallRailCall>,
}

/// One call record from the CallRail calls listing.
///
/// Only the fields the sync asks for via the `fields` query parameter;
/// anything else in the payload is ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CallRailCall {
    /// CallRail call ID.
    pub id: String,

    /// Call start time, ISO 8601 (with or without trailing `Z`).
    pub start_time: String,

    /// Call duration in seconds.
    #[serde(default)]
    pub duration: Option<i64>,

    /// Caller's phone number.
    #[serde(default)]
    pub customer_phone_number: Option<String>,

    /// Whether the call was marked as a qualified lead.
    #[serde(default)]
    pub qualifying: Option<bool>,

    /// Revenue value assigned to the call, if any.
    #[serde(default)]
    pub value: Option<f64>,

    /// Google Click Identifier, present only for calls attributed to an ad
    /// click. Calls without one cannot be uploaded and are skipped.
    #[serde(default)]
    pub gclid: Option<String>,
}

use serde::{Deserialize, Serialize};

/// One entry of the remote event list. The two identifiers are opaque keys
/// that parameterize the venue monitor; they are never interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    pub performer_id: String,
    pub venue_id: String,
}

/// Body of the event-list endpoint: `{ "events": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventsResponse {
    pub events: Vec<EventInfo>,
}

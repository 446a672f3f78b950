use serde::{Deserialize, Serialize};

/// A position resource as returned by the public API.
///
/// `id` and `name` are required; a response element without them is rejected
/// as malformed rather than defaulted. The server spells the active flag
/// `is_active` in list responses, so both spellings are accepted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Position {
    pub id: u64,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, alias = "is_active")]
    pub active: Option<bool>,
}

/// Request body for creating or updating a position.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewPosition {
    pub name: String,
    pub description: String,
    pub active: bool,
}

impl Default for NewPosition {
    /// The fixed smoke-test payload. Downstream checks compare the serialized
    /// form byte-for-byte against what the server receives, so these literals
    /// are part of the contract.
    fn default() -> Self {
        Self {
            name: "Test Position from Python".to_string(),
            description: "Created via Python script".to_string(),
            active: true,
        }
    }
}

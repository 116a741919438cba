use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Outcome of one policy check against one repository.
///
/// Every policy returns this shape so the host can treat them uniformly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyResult {
    /// Whether the policy is active for the repository (opt-in/opt-out resolution).
    pub enabled: bool,
    pub pass: bool,

    /// Remediation text intended for humans. Empty when `pass` is true.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notify_text: String,

    /// Policy-specific payload (kept open-ended for forward compatibility).
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: JsonValue,
}

/// Details payload of the `SECURITY.md` policy, mirroring the hosting service.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SecurityDetails {
    pub enabled: bool,
    /// Empty when no policy is published.
    pub url: String,
}

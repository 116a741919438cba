use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Remediation taken by the host when an enabled policy fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    #[default]
    Log,
    Issue,
    Fix,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Log => ids::ACTION_LOG,
            Action::Issue => ids::ACTION_ISSUE,
            Action::Fix => ids::ACTION_FIX,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0} (expected log|issue|fix)")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ids::ACTION_LOG => Ok(Action::Log),
            ids::ACTION_ISSUE => Ok(Action::Issue),
            ids::ACTION_FIX => Ok(Action::Fix),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

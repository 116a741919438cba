//! GraphQL wire types for the repository security-policy query.

use repoguard_policy::{QueryError, SecurityPolicyState};
use serde::{Deserialize, Serialize};

pub const SECURITY_POLICY_QUERY: &str = "query($owner: String!, $name: String!) { \
repository(owner: $owner, name: $name) { securityPolicyUrl isSecurityPolicyEnabled } }";

#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub query: &'a str,
    pub variables: Variables<'a>,
}

#[derive(Debug, Serialize)]
pub struct Variables<'a> {
    pub owner: &'a str,
    pub name: &'a str,
}

impl<'a> Request<'a> {
    pub fn security_policy(owner: &'a str, name: &'a str) -> Self {
        Self {
            query: SECURITY_POLICY_QUERY,
            variables: Variables { owner, name },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Response {
    pub data: Option<Data>,
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repository {
    pub security_policy_url: Option<String>,
    pub is_security_policy_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct ErrorEntry {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl Response {
    pub fn into_state(self, owner: &str, repo: &str) -> Result<SecurityPolicyState, QueryError> {
        let missing = || QueryError::MissingRepository {
            owner: owner.to_string(),
            repo: repo.to_string(),
        };

        if !self.errors.is_empty() {
            if self.errors.iter().any(|e| e.kind.as_deref() == Some("NOT_FOUND")) {
                return Err(missing());
            }
            let messages: Vec<&str> = self.errors.iter().map(|e| e.message.as_str()).collect();
            return Err(QueryError::Api(messages.join("; ")));
        }

        let repository = self.data.and_then(|d| d.repository).ok_or_else(missing)?;
        Ok(SecurityPolicyState {
            security_policy_url: repository.security_policy_url.unwrap_or_default(),
            is_security_policy_enabled: repository.is_security_policy_enabled,
        })
    }
}

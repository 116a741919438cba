use crate::graphql;
use async_trait::async_trait;
use repoguard_policy::{ConfigError, ConfigStore, QueryError, RemoteQuery, SecurityPolicyState};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const RAW_CONTENT: &str = "application/vnd.github.raw+json";

/// GitHub API client serving both config documents and repository state.
#[derive(Clone, Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    graphql_url: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_url: &str, token: Option<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("repoguard/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_http(http, api_url, token))
    }

    fn with_http(http: reqwest::Client, api_url: &str, token: Option<String>) -> Self {
        let api_url = api_url.trim_end_matches('/').to_string();
        Self {
            http,
            graphql_url: graphql_url(&api_url),
            api_url,
            token,
        }
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

fn contents_url(api_url: &str, owner: &str, repo: &str, path: &str) -> String {
    format!("{api_url}/repos/{owner}/{repo}/contents/{path}")
}

/// GitHub Enterprise serves REST under `/api/v3` and GraphQL under `/api/graphql`.
fn graphql_url(api_url: &str) -> String {
    match api_url.strip_suffix("/api/v3") {
        Some(host) => format!("{host}/api/graphql"),
        None => format!("{api_url}/graphql"),
    }
}

#[async_trait]
impl ConfigStore for GitHubClient {
    async fn fetch(&self, owner: &str, repo: &str, path: &str) -> Result<String, ConfigError> {
        let url = contents_url(&self.api_url, owner, repo, path);
        tracing::debug!(org = owner, repo, file = path, "fetching config");

        let resp = self
            .authorize(self.http.get(&url).header(ACCEPT, RAW_CONTENT))
            .send()
            .await
            .map_err(|e| ConfigError::Transport(e.to_string()))?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(ConfigError::NotFound {
                path: path.to_string(),
            }),
            status if !status.is_success() => {
                Err(ConfigError::Transport(format!("GET {url}: HTTP {status}")))
            }
            _ => resp
                .text()
                .await
                .map_err(|e| ConfigError::Transport(e.to_string())),
        }
    }
}

#[async_trait]
impl RemoteQuery for GitHubClient {
    async fn security_policy(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<SecurityPolicyState, QueryError> {
        let url = &self.graphql_url;
        let resp = self
            .authorize(self.http.post(url))
            .json(&graphql::Request::security_policy(owner, repo))
            .send()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(QueryError::Api(format!("POST {url}: HTTP {status}")));
        }

        let body: graphql::Response = resp
            .json()
            .await
            .map_err(|e| QueryError::Transport(e.to_string()))?;
        body.into_state(owner, repo)
    }
}

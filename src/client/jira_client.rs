use crate::constants::{JIRA_SEARCH_MAX_RESULTS, JIRA_USER_SEARCH_PATH};
use crate::error::{TempoError, TempoResult};
use crate::models::JiraUser;

/// Client for the Jira Cloud identity endpoints (basic auth with email +
/// API token).
pub struct JiraClient {
    client: reqwest::Client,
    base_url: String,
    email: String,
    token: String,
}

impl JiraClient {
    pub fn new(base_url: &str, email: &str, token: &str) -> TempoResult<Self> {
        Ok(Self {
            client: reqwest::Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
            token: token.to_string(),
        })
    }

    /// Search users by display name. App and customer accounts are dropped;
    /// callers decide what to do with inactive people.
    pub async fn search_users(&self, query: &str) -> TempoResult<Vec<JiraUser>> {
        let max_results = JIRA_SEARCH_MAX_RESULTS.to_string();
        let response = self
            .client
            .get(format!("{}{}", self.base_url, JIRA_USER_SEARCH_PATH))
            .basic_auth(&self.email, Some(&self.token))
            .query(&[("query", query), ("maxResults", max_results.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TempoError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let users: Vec<JiraUser> = response.json().await?;
        Ok(users.into_iter().filter(JiraUser::is_first_party).collect())
    }
}

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::constants::WORKLOG_START_TIME;
use crate::error::{TempoError, TempoResult};
use crate::models::{ResultsPage, Schedule, Worklog};

/// Client for the Tempo REST API v4 (bearer-token auth).
pub struct TempoClient {
    client: reqwest::Client,
    base_url: String,
}

impl TempoClient {
    pub fn new(token: &str, base_url: &str) -> TempoResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| TempoError::ConfigError("Token is not a valid header value".into()))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Any non-2xx response becomes ApiError with the body text preserved
    /// for diagnostics.
    async fn read_response<T: DeserializeOwned>(response: reqwest::Response) -> TempoResult<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TempoError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }

    /// Get the schedule for a single date. `account_id` targets another
    /// user; omitted, Tempo answers for the token's owner.
    pub async fn get_user_schedule(
        &self,
        date: &str,
        account_id: Option<&str>,
    ) -> TempoResult<Schedule> {
        let mut request = self
            .client
            .get(format!("{}/user-schedule", self.base_url))
            .query(&[("from", date), ("to", date)]);
        if let Some(account_id) = account_id {
            request = request.query(&[("accountId", account_id)]);
        }

        let page: ResultsPage<Schedule> = Self::read_response(request.send().await?).await?;
        page.results
            .into_iter()
            .next()
            .ok_or_else(|| TempoError::EmptySchedule(date.to_string()))
    }

    /// All worklogs a user authored on a date. The endpoint returns every
    /// author in range, so filtering happens client-side.
    pub async fn get_worklogs_for_date(
        &self,
        account_id: &str,
        date: &str,
    ) -> TempoResult<Vec<Worklog>> {
        let request = self
            .client
            .get(format!("{}/worklogs", self.base_url))
            .query(&[("from", date), ("to", date)]);

        let page: ResultsPage<Worklog> = Self::read_response(request.send().await?).await?;
        Ok(filter_by_author(page.results, account_id))
    }

    pub async fn create_worklog(
        &self,
        account_id: &str,
        issue_id: i64,
        seconds: i64,
        date: &str,
        description: &str,
    ) -> TempoResult<Worklog> {
        let payload = json!({
            "authorAccountId": account_id,
            "issueId": issue_id,
            "timeSpentSeconds": seconds,
            "startDate": date,
            "startTime": WORKLOG_START_TIME,
            "description": description,
        });

        let response = self
            .client
            .post(format!("{}/worklogs", self.base_url))
            .json(&payload)
            .send()
            .await?;

        Self::read_response(response).await
    }
}

pub fn filter_by_author(worklogs: Vec<Worklog>, account_id: &str) -> Vec<Worklog> {
    worklogs
        .into_iter()
        .filter(|wl| wl.author_account_id() == Some(account_id))
        .collect()
}

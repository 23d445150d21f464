use serde::Deserialize;

/// A logged time entry as returned by the Tempo worklog endpoints.
///
/// Fields are defensive options because create responses and list responses
/// do not carry identical shapes.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Worklog {
    #[serde(default)]
    pub tempo_worklog_id: Option<i64>,
    #[serde(default)]
    pub issue: Option<IssueRef>,
    #[serde(default)]
    pub time_spent_seconds: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub author: Option<WorklogAuthor>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct IssueRef {
    #[serde(default)]
    pub id: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WorklogAuthor {
    #[serde(default)]
    pub account_id: Option<String>,
}

impl Worklog {
    pub fn author_account_id(&self) -> Option<&str> {
        self.author.as_ref()?.account_id.as_deref()
    }

    pub fn issue_id(&self) -> Option<i64> {
        self.issue.as_ref()?.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_worklog() {
        let json = r#"{
            "tempoWorklogId": 42,
            "issue": {"id": 10001},
            "timeSpentSeconds": 14400,
            "startDate": "2024-03-01",
            "description": "Dev work",
            "author": {"accountId": "640:abc-123"}
        }"#;
        let wl: Worklog = serde_json::from_str(json).unwrap();
        assert_eq!(wl.tempo_worklog_id, Some(42));
        assert_eq!(wl.issue_id(), Some(10001));
        assert_eq!(wl.time_spent_seconds, 14400);
        assert_eq!(wl.author_account_id(), Some("640:abc-123"));
    }

    #[test]
    fn test_sparse_worklog_is_tolerated() {
        let wl: Worklog = serde_json::from_str(r#"{"timeSpentSeconds": 3600}"#).unwrap();
        assert_eq!(wl.tempo_worklog_id, None);
        assert_eq!(wl.issue_id(), None);
        assert_eq!(wl.author_account_id(), None);
    }
}

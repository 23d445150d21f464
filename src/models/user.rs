use serde::Deserialize;

use crate::constants::FIRST_PARTY_ACCOUNT_TYPE;

/// A user record from Jira's `/rest/api/3/user/search` endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
    pub account_id: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub account_type: String,
}

impl JiraUser {
    /// True for real people, as opposed to app and customer accounts.
    pub fn is_first_party(&self) -> bool {
        self.account_type == FIRST_PARTY_ACCOUNT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_party_filter() {
        let json = r#"{
            "accountId": "712020:aa-bb",
            "displayName": "Jane Doe",
            "emailAddress": "jane@example.com",
            "active": true,
            "accountType": "atlassian"
        }"#;
        let user: JiraUser = serde_json::from_str(json).unwrap();
        assert!(user.is_first_party());

        let bot: JiraUser =
            serde_json::from_str(r#"{"accountId":"x","accountType":"app"}"#).unwrap();
        assert!(!bot.is_first_party());
        assert!(!bot.active);
    }
}

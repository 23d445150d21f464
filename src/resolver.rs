use crate::client::JiraClient;
use crate::config::Config;
use crate::constants::SELF_LABEL;
use crate::error::{TempoError, TempoResult};
use crate::models::JiraUser;
use crate::tempo_error;

/// A concrete account to act on, plus a label for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPerson {
    pub account_id: String,
    pub label: String,
}

impl ResolvedPerson {
    pub fn is_self(&self) -> bool {
        self.label == SELF_LABEL
    }

    /// The ` for <label>` suffix commands append to their headers; empty
    /// when acting on the caller's own account.
    pub fn suffix(&self) -> String {
        if self.is_self() {
            String::new()
        } else {
            format!(" for {}", self.label)
        }
    }
}

/// Map free-form person input to an account id.
///
/// Empty input means the configured default account. Atlassian account ids
/// contain a colon (e.g. "640:abc-123"), so anything with one passes
/// through unchanged. Everything else is a display-name search against
/// Jira, which needs jiraBaseUrl/jiraEmail/jiraToken configured.
pub async fn resolve_person(input: &str, config: &Config) -> TempoResult<ResolvedPerson> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(ResolvedPerson {
            account_id: config.account_id.clone(),
            label: SELF_LABEL.to_string(),
        });
    }

    if input.contains(':') {
        return Ok(ResolvedPerson {
            account_id: input.to_string(),
            label: input.to_string(),
        });
    }

    let (base_url, email, token) = config.jira_credentials().ok_or_else(|| {
        tempo_error!(
            ResolutionError,
            "Looking up '{}' by name needs Jira credentials. \
             Set jiraBaseUrl, jiraEmail and jiraToken in your config file, \
             or pass an account id directly.",
            input
        )
    })?;

    let client = JiraClient::new(base_url, email, token)?;
    let users = client.search_users(input).await?;
    pick_user(users, input)
}

/// Choose exactly one active user from a search result. Pure so the
/// zero/one/many cases are testable without a network.
pub fn pick_user(users: Vec<JiraUser>, query: &str) -> TempoResult<ResolvedPerson> {
    let mut active: Vec<JiraUser> = users.into_iter().filter(|u| u.active).collect();

    match active.len() {
        0 => Err(tempo_error!(
            ResolutionError,
            "No active user found matching '{}'",
            query
        )),
        1 => {
            let user = active.remove(0);
            Ok(ResolvedPerson {
                account_id: user.account_id,
                label: user.display_name,
            })
        }
        _ => {
            let candidates: Vec<String> = active
                .iter()
                .map(|u| {
                    format!(
                        "  • {} <{}>",
                        u.display_name,
                        u.email_address.as_deref().unwrap_or("-")
                    )
                })
                .collect();
            Err(TempoError::ResolutionError(format!(
                "Multiple users match '{}':\n{}\nNarrow the search or pass an account id directly.",
                query,
                candidates.join("\n")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, id: &str, active: bool) -> JiraUser {
        serde_json::from_str(&format!(
            r#"{{
                "accountId": "{}",
                "displayName": "{}",
                "emailAddress": "{}@example.com",
                "active": {},
                "accountType": "atlassian"
            }}"#,
            id,
            name,
            name.to_lowercase().replace(' ', "."),
            active
        ))
        .unwrap()
    }

    #[test]
    fn test_pick_single_active_match() {
        let users = vec![user("Jane Doe", "712020:aa", true)];
        let person = pick_user(users, "jane").unwrap();
        assert_eq!(person.account_id, "712020:aa");
        assert_eq!(person.label, "Jane Doe");
        assert!(!person.is_self());
    }

    #[test]
    fn test_inactive_matches_are_ignored() {
        let users = vec![
            user("Jane Doe", "712020:aa", true),
            user("Jane Smith", "712020:bb", false),
        ];
        let person = pick_user(users, "jane").unwrap();
        assert_eq!(person.account_id, "712020:aa");
    }

    #[test]
    fn test_zero_matches_is_an_error() {
        let err = pick_user(vec![], "nobody").unwrap_err();
        match err {
            TempoError::ResolutionError(msg) => assert!(msg.contains("nobody")),
            _ => panic!("Expected ResolutionError"),
        }
    }

    #[test]
    fn test_ambiguous_matches_list_candidates() {
        let users = vec![
            user("Jane Doe", "712020:aa", true),
            user("Jane Smith", "712020:bb", true),
        ];
        let err = pick_user(users, "jane").unwrap_err();
        match err {
            TempoError::ResolutionError(msg) => {
                assert!(msg.contains("Jane Doe"));
                assert!(msg.contains("Jane Smith"));
                assert!(msg.contains("jane.smith@example.com"));
                assert!(msg.contains("account id"));
            }
            _ => panic!("Expected ResolutionError"),
        }
    }

    #[test]
    fn test_suffix_for_self_and_others() {
        let me = ResolvedPerson {
            account_id: "640:abc".to_string(),
            label: SELF_LABEL.to_string(),
        };
        assert!(me.is_self());
        assert_eq!(me.suffix(), "");

        let them = ResolvedPerson {
            account_id: "712020:aa".to_string(),
            label: "Jane Doe".to_string(),
        };
        assert_eq!(them.suffix(), " for Jane Doe");
    }
}

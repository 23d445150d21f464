use crate::client::JiraClient;
use crate::config::Config;
use crate::error::TempoResult;
use crate::logging::log_info;
use crate::models::JiraUser;
use crate::tempo_error;

/// Look up people by display name so their account id can be used with
/// `log --person` and `workload --person`.
pub async fn run(config: &Config, query: &str) -> TempoResult<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(tempo_error!(InvalidInput, "Search query must not be empty"));
    }

    let Some((base_url, email, token)) = config.jira_credentials() else {
        return Ok(render_jira_setup_help());
    };

    log_info(&format!("search-user: query={}", query));
    let client = JiraClient::new(base_url, email, token)?;
    let users = client.search_users(query).await?;

    Ok(render_users(query, &users))
}

pub fn render_jira_setup_help() -> String {
    "❌ Jira credentials not configured.\n\nUser search needs:\n  jiraBaseUrl — e.g. https://your-domain.atlassian.net\n  jiraEmail   — your Atlassian login email\n  jiraToken   — an API token from https://id.atlassian.com/manage-profile/security/api-tokens\nAdd them to ~/.tempo-config.json."
        .to_string()
}

pub fn render_users(query: &str, users: &[JiraUser]) -> String {
    let active: Vec<&JiraUser> = users.iter().filter(|u| u.active).collect();
    if active.is_empty() {
        return format!("No matching users found for \"{}\".", query);
    }

    let mut lines = vec![format!(
        "Found {} active user(s) matching \"{}\":",
        active.len(),
        query
    )];
    for user in active {
        lines.push(format!(
            "  • {} — {} [{}]",
            user.display_name,
            user.email_address.as_deref().unwrap_or("-"),
            user.account_id
        ));
    }
    lines.join("\n")
}

use crate::config::{redact_token, Config};
use crate::constants::CONFIG_FILE;
use crate::error::{TempoError, TempoResult};

/// Show the loaded configuration with secrets redacted. No remote calls;
/// a failed load renders setup instructions instead of an error.
pub fn run(loaded: TempoResult<Config>) -> String {
    match loaded {
        Ok(config) => render_config(&config),
        Err(err) => render_setup_help(&err),
    }
}

pub fn render_setup_help(err: &TempoError) -> String {
    format!(
        "{}\n\nTo set up, create ~/{} with:\n  tempoToken, accountId, baseUrl, issueIds, presets\nOptional, for looking up people by name:\n  jiraBaseUrl, jiraEmail, jiraToken\nSee README for full instructions.",
        err.render(),
        CONFIG_FILE
    )
}

pub fn render_config(config: &Config) -> String {
    let mut lines = vec![
        "⚙️ Tempo Configuration".to_string(),
        format!("  Token: {}", redact_token(config.token())),
        format!("  Account ID: {}", config.account_id),
        format!("  Base URL: {}", config.tempo_base_url()),
        String::new(),
        "Issue Mappings:".to_string(),
    ];

    let mut mappings: Vec<_> = config.issue_ids.iter().collect();
    mappings.sort_by_key(|(key, _)| key.as_str());
    for (key, issue_id) in mappings {
        lines.push(format!("  {} → {}", key, issue_id));
    }

    lines.push(String::new());
    lines.push("Presets:".to_string());
    let mut presets: Vec<_> = config.presets.iter().collect();
    presets.sort_by_key(|(name, _)| name.as_str());
    for (name, entries) in presets {
        let parts: Vec<String> = entries
            .iter()
            .map(|e| format!("{} ({}%)", e.issue_key, format_percentage(e.percentage)))
            .collect();
        lines.push(format!("  {}: {}", name, parts.join(", ")));
    }

    lines.push(String::new());
    match config.jira_credentials() {
        Some((url, email, token)) => {
            lines.push(format!(
                "Jira: {} @ {} (token {})",
                email,
                url,
                redact_token(token)
            ));
        }
        None => {
            lines.push("Jira: not configured (needed for name lookups)".to_string());
        }
    }

    lines.join("\n")
}

fn format_percentage(percentage: f64) -> String {
    if percentage.fract() == 0.0 {
        format!("{:.0}", percentage)
    } else {
        format!("{}", percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> Config {
        serde_json::from_str(
            r#"{
                "tempoToken": "abcdEFGH1234",
                "accountId": "640:abc-123",
                "issueIds": {"OPEX": 10002, "CAPEX": 10001},
                "presets": {
                    "usual": [
                        {"issueKey": "CAPEX", "percentage": 50, "description": "Dev work"},
                        {"issueKey": "OPEX", "percentage": 50, "description": "Support"}
                    ],
                    "sick": [
                        {"issueKey": "OPEX", "percentage": 100, "description": "Sick leave"}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_redacts_token() {
        let out = render_config(&sample_config());
        assert!(out.contains("Token: ****1234"));
        assert!(!out.contains("abcdEFGH1234"));
    }

    #[test]
    fn test_render_lists_mappings_and_presets_sorted() {
        let out = render_config(&sample_config());
        assert!(out.contains("  CAPEX → 10001"));
        assert!(out.contains("  OPEX → 10002"));
        assert!(out.contains("  usual: CAPEX (50%), OPEX (50%)"));
        assert!(out.contains("  sick: OPEX (100%)"));
        let capex = out.find("CAPEX → 10001").unwrap();
        let opex = out.find("OPEX → 10002").unwrap();
        assert!(capex < opex);
    }

    #[test]
    fn test_render_jira_section() {
        let mut config = sample_config();
        let out = render_config(&config);
        assert!(out.contains("Jira: not configured"));

        config.jira_base_url = Some("https://example.atlassian.net".to_string());
        config.jira_email = Some("me@example.com".to_string());
        config.jira_token = Some("jira-token-9999".to_string());
        let out = render_config(&config);
        assert!(out.contains("Jira: me@example.com @ https://example.atlassian.net"));
        assert!(out.contains("****9999"));
        assert!(!out.contains("jira-token-9999"));
    }

    #[test]
    fn test_setup_help_on_load_failure() {
        let out = run(Err(TempoError::ConfigError(
            "Config file not found: /home/u/.tempo-config.json".to_string(),
        )));
        assert!(out.starts_with("❌ Configuration error:"));
        assert!(out.contains("tempoToken, accountId, baseUrl, issueIds, presets"));
        assert!(out.contains("jiraBaseUrl, jiraEmail, jiraToken"));
    }
}

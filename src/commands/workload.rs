use crate::client::TempoClient;
use crate::config::Config;
use crate::dates::parse_date;
use crate::error::TempoResult;
use crate::formatting::format_hours;
use crate::logging::log_info;
use crate::models::{Schedule, Worklog};
use crate::resolver::{resolve_person, ResolvedPerson};

/// Show logged time against expected hours for a date. Read-only.
pub async fn run(
    config: &Config,
    date_input: Option<&str>,
    person_input: &str,
) -> TempoResult<String> {
    let person = resolve_person(person_input, config).await?;
    let date = parse_date(date_input);
    log_info(&format!("workload: date={} account={}", date, person.account_id));

    let client = TempoClient::new(config.token(), config.tempo_base_url())?;

    let account = if person.is_self() {
        None
    } else {
        Some(person.account_id.as_str())
    };
    let schedule = client.get_user_schedule(&date, account).await?;
    let worklogs = client
        .get_worklogs_for_date(&person.account_id, &date)
        .await?;

    Ok(render_workload(config, &person, &schedule, &worklogs))
}

/// Label for a fetched worklog's issue: reverse lookup through the
/// configured issueIds mapping, falling back to the raw id.
pub fn issue_label(config: &Config, worklog: &Worklog) -> String {
    match worklog.issue_id() {
        Some(id) => config
            .issue_key_for_id(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("id:{}", id)),
        None => "id:?".to_string(),
    }
}

pub fn render_workload(
    config: &Config,
    person: &ResolvedPerson,
    schedule: &Schedule,
    worklogs: &[Worklog],
) -> String {
    let mut lines = vec![
        format!(
            "📅 {}{} ({})",
            schedule.date,
            person.suffix(),
            schedule.day_type
        ),
        format!(
            "Expected: {}h ({}s)",
            format_hours(schedule.required_seconds),
            schedule.required_seconds
        ),
        String::new(),
    ];

    if worklogs.is_empty() {
        lines.push("No worklogs yet.".to_string());
        return lines.join("\n");
    }

    let mut total_logged = 0;
    lines.push(format!("Logged ({} entries):", worklogs.len()));
    for wl in worklogs {
        total_logged += wl.time_spent_seconds;
        lines.push(format!(
            "  • {}: {}h — \"{}\"",
            issue_label(config, wl),
            format_hours(wl.time_spent_seconds),
            wl.description.as_deref().unwrap_or("")
        ));
    }
    lines.push(format!("Total logged: {}h", format_hours(total_logged)));
    lines.push(String::new());

    if total_logged >= schedule.required_seconds {
        lines.push("Status: ✅ Fully logged".to_string());
    } else {
        let remaining = schedule.required_seconds - total_logged;
        lines.push(format!(
            "Status: ⚠️ {}h remaining",
            format_hours(remaining)
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SELF_LABEL;

    fn sample_config() -> Config {
        serde_json::from_str(
            r#"{
                "tempoToken": "t",
                "accountId": "640:abc",
                "issueIds": {"CAPEX": 10001, "OPEX": 10002}
            }"#,
        )
        .unwrap()
    }

    fn me() -> ResolvedPerson {
        ResolvedPerson {
            account_id: "640:abc".to_string(),
            label: SELF_LABEL.to_string(),
        }
    }

    fn schedule(required: i64) -> Schedule {
        serde_json::from_str(&format!(
            r#"{{"date":"2024-03-01","requiredSeconds":{},"type":"WORKING_DAY"}}"#,
            required
        ))
        .unwrap()
    }

    fn worklog(issue_id: Option<i64>, seconds: i64, description: &str) -> Worklog {
        let issue = match issue_id {
            Some(id) => format!(r#","issue":{{"id":{}}}"#, id),
            None => String::new(),
        };
        serde_json::from_str(&format!(
            r#"{{"timeSpentSeconds":{},"description":"{}"{}}}"#,
            seconds, description, issue
        ))
        .unwrap()
    }

    #[test]
    fn test_issue_label_reverse_lookup_and_fallbacks() {
        let config = sample_config();
        assert_eq!(issue_label(&config, &worklog(Some(10001), 0, "")), "CAPEX");
        assert_eq!(
            issue_label(&config, &worklog(Some(55555), 0, "")),
            "id:55555"
        );
        assert_eq!(issue_label(&config, &worklog(None, 0, "")), "id:?");
    }

    #[test]
    fn test_render_empty_day() {
        let out = render_workload(&sample_config(), &me(), &schedule(28800), &[]);
        assert!(out.starts_with("📅 2024-03-01 (WORKING_DAY)\n"));
        assert!(out.contains("Expected: 8.0h (28800s)"));
        assert!(out.contains("No worklogs yet."));
        assert!(!out.contains("Status:"));
    }

    #[test]
    fn test_render_fully_logged_day() {
        let worklogs = vec![
            worklog(Some(10001), 14400, "Dev work"),
            worklog(Some(10002), 14400, "Support"),
        ];
        let out = render_workload(&sample_config(), &me(), &schedule(28800), &worklogs);
        assert!(out.contains("Logged (2 entries):"));
        assert!(out.contains("  • CAPEX: 4.0h — \"Dev work\""));
        assert!(out.contains("  • OPEX: 4.0h — \"Support\""));
        assert!(out.contains("Total logged: 8.0h"));
        assert!(out.contains("Status: ✅ Fully logged"));
    }

    #[test]
    fn test_render_partially_logged_day() {
        let worklogs = vec![worklog(Some(10001), 18000, "Dev work")];
        let out = render_workload(&sample_config(), &me(), &schedule(28800), &worklogs);
        assert!(out.contains("Status: ⚠️ 3.0h remaining"));
    }

    #[test]
    fn test_render_includes_person_suffix_for_others() {
        let person = ResolvedPerson {
            account_id: "712020:aa".to_string(),
            label: "Jane Doe".to_string(),
        };
        let out = render_workload(&sample_config(), &person, &schedule(28800), &[]);
        assert!(out.starts_with("📅 2024-03-01 for Jane Doe (WORKING_DAY)"));
    }

    #[test]
    fn test_overlogged_day_counts_as_fully_logged() {
        let worklogs = vec![worklog(Some(10001), 30000, "Long day")];
        let out = render_workload(&sample_config(), &me(), &schedule(28800), &worklogs);
        assert!(out.contains("Status: ✅ Fully logged"));
    }
}

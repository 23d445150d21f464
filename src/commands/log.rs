use std::collections::HashMap;

use crate::client::TempoClient;
use crate::config::{Config, PresetEntry};
use crate::dates::parse_date;
use crate::error::{TempoError, TempoResult};
use crate::formatting::format_hours;
use crate::logging::log_info;
use crate::resolver::{resolve_person, ResolvedPerson};

/// One preset entry turned into concrete create-worklog arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedEntry {
    pub issue_key: String,
    pub issue_id: i64,
    pub seconds: i64,
    pub description: String,
}

/// Log a day's required hours split across issues according to a preset.
///
/// Worklogs are created sequentially and are not transactional: a failure
/// partway through leaves the earlier entries in place. The workload
/// command shows what actually landed.
pub async fn run(
    config: &Config,
    preset_name: &str,
    date_input: Option<&str>,
    description: Option<&str>,
    force: bool,
    person_input: &str,
) -> TempoResult<String> {
    let person = resolve_person(person_input, config).await?;

    let entries = config
        .presets
        .get(preset_name)
        .ok_or_else(|| TempoError::UnknownPreset {
            name: preset_name.to_string(),
            available: preset_names(config),
        })?;

    let date = parse_date(date_input);
    log_info(&format!(
        "log: preset={} date={} account={} force={}",
        preset_name, date, person.account_id, force
    ));

    let client = TempoClient::new(config.token(), config.tempo_base_url())?;

    let schedule = client
        .get_user_schedule(&date, schedule_account(&person))
        .await?;
    if blocked_by_schedule(schedule.required_seconds, force) {
        return Ok(format!(
            "⚠️ No required hours for {} (weekend or holiday). Use --force to log anyway.",
            date
        ));
    }

    let existing = client
        .get_worklogs_for_date(&person.account_id, &date)
        .await?;
    if blocked_by_existing(existing.len(), force) {
        return Ok(format!(
            "⚠️ Already logged {} worklog(s) for {}. Use --force to log anyway.",
            existing.len(),
            date
        ));
    }

    // Issue-key lookup happens per entry, inside the loop: a preset entry
    // with an unmapped key fails at its turn, after earlier entries were
    // already created.
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        let planned = plan_entry(entry, &config.issue_ids, schedule.required_seconds, description)?;
        let created = client
            .create_worklog(
                &person.account_id,
                planned.issue_id,
                planned.seconds,
                &date,
                &planned.description,
            )
            .await?;
        lines.push(summary_line(&planned, created.tempo_worklog_id));
    }

    Ok(render_summary(
        &date,
        schedule.required_seconds,
        &person,
        &lines,
    ))
}

fn preset_names(config: &Config) -> Vec<String> {
    let mut names: Vec<String> = config.presets.keys().cloned().collect();
    names.sort();
    names
}

fn schedule_account(person: &ResolvedPerson) -> Option<&str> {
    if person.is_self() {
        None
    } else {
        Some(person.account_id.as_str())
    }
}

/// Zero required seconds is the weekend/holiday signal; only --force logs
/// through it.
pub fn blocked_by_schedule(required_seconds: i64, force: bool) -> bool {
    required_seconds == 0 && !force
}

/// Guard against double-logging a day that already has entries.
pub fn blocked_by_existing(existing_count: usize, force: bool) -> bool {
    existing_count > 0 && !force
}

/// Floor of the percentage split. Percentages are taken as configured; a
/// preset summing past 100 over-logs proportionally.
pub fn split_seconds(required_seconds: i64, percentage: f64) -> i64 {
    (required_seconds as f64 * percentage / 100.0).floor() as i64
}

pub fn plan_entry(
    entry: &PresetEntry,
    issue_ids: &HashMap<String, i64>,
    required_seconds: i64,
    override_description: Option<&str>,
) -> TempoResult<PlannedEntry> {
    let issue_id = issue_ids
        .get(&entry.issue_key)
        .copied()
        .ok_or_else(|| TempoError::UnknownIssueKey(entry.issue_key.clone()))?;

    let description = override_description
        .filter(|d| !d.is_empty())
        .unwrap_or(&entry.description)
        .to_string();

    Ok(PlannedEntry {
        issue_key: entry.issue_key.clone(),
        issue_id,
        seconds: split_seconds(required_seconds, entry.percentage),
        description,
    })
}

pub fn summary_line(planned: &PlannedEntry, worklog_id: Option<i64>) -> String {
    let id = worklog_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "?".to_string());
    format!(
        "  • {} ({}): {}h [ID: {}]",
        planned.issue_key,
        planned.description,
        format_hours(planned.seconds),
        id
    )
}

pub fn render_summary(
    date: &str,
    required_seconds: i64,
    person: &ResolvedPerson,
    lines: &[String],
) -> String {
    format!(
        "✅ Logged {}h for {}{}:\n{}",
        format_hours(required_seconds),
        date,
        person.suffix(),
        lines.join("\n")
    )
}

use serde::Deserialize;

/// A user's expected working time for one date, as reported by
/// `GET /user-schedule`. `required_seconds` is 0 on weekends and holidays.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default)]
    pub required_seconds: i64,
    #[serde(rename = "type", default = "unknown_day_type")]
    pub day_type: String,
    pub date: String,
}

fn unknown_day_type() -> String {
    "UNKNOWN".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_schedule() {
        let json = r#"{"date":"2024-03-01","requiredSeconds":28800,"type":"WORKING_DAY"}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.required_seconds, 28800);
        assert_eq!(schedule.day_type, "WORKING_DAY");
        assert_eq!(schedule.date, "2024-03-01");
    }

    #[test]
    fn test_missing_fields_default() {
        let json = r#"{"date":"2024-03-02"}"#;
        let schedule: Schedule = serde_json::from_str(json).unwrap();
        assert_eq!(schedule.required_seconds, 0);
        assert_eq!(schedule.day_type, "UNKNOWN");
    }
}

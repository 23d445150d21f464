pub const TEMPO_API_URL: &str = "https://api.tempo.io/4";
pub const CONFIG_FILE: &str = ".tempo-config.json";
pub const TOKEN_ENV_VAR: &str = "TEMPO_TOKEN";
pub const TOKEN_SETUP_URL: &str = "https://app.tempo.io/settings/api-integration";

// Tempo requires a start time on every worklog; entries are always logged
// from the start of the working day.
pub const WORKLOG_START_TIME: &str = "08:00:00";

pub const JIRA_USER_SEARCH_PATH: &str = "/rest/api/3/user/search";
pub const JIRA_SEARCH_MAX_RESULTS: u32 = 10;

// Jira's user search also returns app and customer accounts; only
// "atlassian" accounts are real people.
pub const FIRST_PARTY_ACCOUNT_TYPE: &str = "atlassian";

// Sentinel label meaning "the configured default account". Rendering code
// suppresses the "for <label>" suffix when it sees this.
pub const SELF_LABEL: &str = "you";

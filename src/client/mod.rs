pub mod jira_client;
pub mod tempo_client;

pub use jira_client::JiraClient;
pub use tempo_client::TempoClient;

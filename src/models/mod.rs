pub mod page;
pub mod schedule;
pub mod user;
pub mod worklog;

pub use page::ResultsPage;
pub use schedule::Schedule;
pub use user::JiraUser;
pub use worklog::{IssueRef, Worklog, WorklogAuthor};

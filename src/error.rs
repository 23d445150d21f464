use thiserror::Error;

#[derive(Error, Debug)]
pub enum TempoError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Tempo API error {status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("{0}")]
    ResolutionError(String),

    #[error("Unknown preset '{name}'. Available: {}", .available.join(", "))]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("Issue key '{0}' is not mapped in issueIds")]
    UnknownIssueKey(String),

    #[error("Tempo returned no schedule entry for {0}")]
    EmptySchedule(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type TempoResult<T> = Result<T, TempoError>;

impl TempoError {
    /// User-facing rendering; every failure becomes a message, never a panic.
    pub fn render(&self) -> String {
        match self {
            TempoError::ConfigError(msg) => format!("❌ Configuration error: {}", msg),
            TempoError::ApiError { status, body } => {
                format!("❌ Tempo API error {}: {}", status, body)
            }
            other => format!("❌ {}", other),
        }
    }
}

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> TempoResult<T>;
    fn with_context<F>(self, f: F) -> TempoResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> TempoResult<T> {
        self.map_err(|e| TempoError::ConfigError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> TempoResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| TempoError::ConfigError(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> TempoResult<T> {
        self.ok_or_else(|| TempoError::ConfigError(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> TempoResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| TempoError::ConfigError(f()))
    }
}

#[macro_export]
macro_rules! tempo_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::TempoError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::TempoError::$error_type(format!($fmt, $($arg)*))
    };
}

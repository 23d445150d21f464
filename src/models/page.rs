use serde::Deserialize;

/// Paged list envelope used by the Tempo v4 endpoints.
#[derive(Debug, Deserialize)]
pub struct ResultsPage<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#![warn(missing_docs)]
//! HTTP todo source backed by a public read-only endpoint.
//!
//! The round-trip is a single blocking GET; parsing is split out into
//! [`parse_batch`] so the wire handling is testable without a network.

use tracing::debug;
use vrtodo_core::{FetchError, Todo, TodoSource, FETCH_BATCH_LIMIT};

/// Default endpoint serving the initial todo batch.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Todo source that issues one blocking GET per fetch.
///
/// Status interpretation happens here, not in ureq: the agent is configured
/// with `http_status_as_error(false)` so a 4xx/5xx arrives as data and is
/// mapped to [`FetchError::Status`].
#[derive(Debug, Clone)]
pub struct HttpTodoSource {
    endpoint: String,
    agent: ureq::Agent,
}

impl Default for HttpTodoSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl HttpTodoSource {
    /// Create a source against `endpoint`.
    pub fn new(endpoint: impl Into<String>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            endpoint: endpoint.into(),
            agent,
        }
    }

    /// The endpoint this source fetches from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TodoSource for HttpTodoSource {
    fn fetch_batch(&self) -> Result<Vec<Todo>, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching todo batch");

        let mut response = self
            .agent
            .get(&self.endpoint)
            .call()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(FetchError::Status { status });
        }

        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_batch(&body)
    }
}

/// Decode a JSON array of todo objects, keeping only the first
/// [`FETCH_BATCH_LIMIT`] entries in server order.
pub fn parse_batch(body: &str) -> Result<Vec<Todo>, FetchError> {
    let mut todos: Vec<Todo> =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    todos.truncate(FETCH_BATCH_LIMIT);
    Ok(todos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vrtodo_core::TodoId;

    fn batch_json(count: usize) -> String {
        let items: Vec<String> = (0..count)
            .map(|i| {
                format!(
                    r#"{{"userId":1,"id":{},"title":"item {}","completed":{}}}"#,
                    i + 1,
                    i + 1,
                    i % 2 == 0
                )
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    #[test]
    fn parse_keeps_first_ten_in_server_order() {
        let todos = parse_batch(&batch_json(12)).unwrap();
        assert_eq!(todos.len(), 10);
        assert_eq!(todos[0].id, TodoId(1));
        assert_eq!(todos[9].id, TodoId(10));
    }

    #[test]
    fn parse_accepts_short_batches() {
        let todos = parse_batch(&batch_json(3)).unwrap();
        assert_eq!(todos.len(), 3);
        assert_eq!(todos[2].title, "item 3");
    }

    #[test]
    fn parse_accepts_an_empty_array() {
        assert!(parse_batch("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_non_array_bodies() {
        let err = parse_batch(r#"{"error":"nope"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        let err = parse_batch("not json").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn default_source_points_at_the_public_endpoint() {
        let source = HttpTodoSource::default();
        assert_eq!(source.endpoint(), DEFAULT_ENDPOINT);
    }
}

//! Request boundary
//!
//! Validates a find request, runs the query engine and maps the outcome to a
//! status code plus JSON body. Transport-agnostic: the CLI `serve` loop drives
//! it over stdin/stdout.

use crate::finder::{QueryEngine, WordGroups};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Client-facing message when `letters` is missing
pub const MISSING_LETTERS_MESSAGE: &str = "Harfler gerekli";

/// Client-facing message for any internal failure
pub const INTERNAL_FAILURE_MESSAGE: &str = "İşlem başarısız";

/// Incoming find request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub letters: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
}

/// Boundary failure categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryError {
    /// Missing or empty `letters`
    InvalidInput(String),
    /// Unreadable request body, or a failure while matching or serializing
    Internal(String),
}

impl BoundaryError {
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::InvalidInput(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Message safe to show callers; internal details stay in the log
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => MISSING_LETTERS_MESSAGE,
            Self::Internal(_) => INTERNAL_FAILURE_MESSAGE,
        }
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(detail) => write!(f, "invalid input: {detail}"),
            Self::Internal(detail) => write!(f, "internal failure: {detail}"),
        }
    }
}

impl std::error::Error for BoundaryError {}

/// Status code and JSON body for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoundaryResponse {
    pub status: u16,
    pub body: Value,
}

impl BoundaryResponse {
    fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    fn from_error(error: &BoundaryError) -> Self {
        match error {
            BoundaryError::InvalidInput(_) => tracing::warn!(%error, "rejected request"),
            BoundaryError::Internal(_) => tracing::error!(%error, "request failed"),
        }

        Self {
            status: error.status(),
            body: json!({ "error": error.public_message() }),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Request handler wrapping a shared query engine
#[derive(Debug, Clone)]
pub struct FindService {
    engine: QueryEngine,
    result_limit: Option<usize>,
}

impl FindService {
    /// `result_limit` caps each length group after sorting
    #[must_use]
    pub const fn new(engine: QueryEngine, result_limit: Option<usize>) -> Self {
        Self {
            engine,
            result_limit,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &QueryEngine {
        &self.engine
    }

    /// Handle a raw JSON request body
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use word_finder::dictionary::Dictionary;
    /// use word_finder::finder::QueryEngine;
    /// use word_finder::service::FindService;
    ///
    /// let engine = QueryEngine::new(Arc::new(Dictionary::from_words(["kat"])));
    /// let service = FindService::new(engine, None);
    ///
    /// assert_eq!(service.handle_json(r#"{"letters": "tak"}"#).status, 200);
    /// assert_eq!(service.handle_json(r#"{"suffix": "at"}"#).status, 400);
    /// assert_eq!(service.handle_json("not json").status, 500);
    /// ```
    #[must_use]
    pub fn handle_json(&self, body: &str) -> BoundaryResponse {
        match serde_json::from_str::<FindRequest>(body) {
            Ok(request) => self.handle(&request),
            Err(e) => BoundaryResponse::from_error(&BoundaryError::Internal(format!(
                "unreadable request body: {e}"
            ))),
        }
    }

    /// Handle a parsed request
    #[must_use]
    pub fn handle(&self, request: &FindRequest) -> BoundaryResponse {
        let outcome = self
            .find(request)
            .and_then(|groups| {
                serde_json::to_value(&groups)
                    .map_err(|e| BoundaryError::Internal(format!("serialization failed: {e}")))
            });

        match outcome {
            Ok(body) => BoundaryResponse::ok(body),
            Err(error) => BoundaryResponse::from_error(&error),
        }
    }

    /// Validate the request and run the query
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when `letters` is missing or empty (the engine is
    /// not invoked), and `Internal` if the engine panics.
    pub fn find(&self, request: &FindRequest) -> Result<WordGroups, BoundaryError> {
        let letters = request
            .letters
            .as_deref()
            .filter(|letters| !letters.is_empty())
            .ok_or_else(|| BoundaryError::InvalidInput("letters missing".to_string()))?;
        let suffix = request.suffix.as_deref();

        let mut groups = panic::catch_unwind(AssertUnwindSafe(|| {
            self.engine.execute(letters, suffix)
        }))
        .map_err(|payload| BoundaryError::Internal(panic_message(payload.as_ref())))?;

        if let Some(limit) = self.result_limit {
            groups.truncate_each(limit);
        }

        tracing::info!(
            letters,
            suffix = suffix.unwrap_or(""),
            matches = groups.total(),
            "request served"
        );

        Ok(groups)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "engine panicked".to_string()
    }
}

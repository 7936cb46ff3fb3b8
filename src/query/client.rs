//! Retrying client for the assistant question panel.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::backoff::BackoffPolicy;
use super::payload::{ApiErrorBody, GenerateRequest, GenerateResponse};
use crate::adapters::{ReqwestHttpClient, TokioSleeper};
use crate::config::QueryConfig;
use crate::error::{QueryError, TransientFailure};
use crate::traits::{Headers, HttpClient, HttpError, Response, Sleeper};

const UNKNOWN_API_ERROR: &str = "An unknown API error occurred.";

/// Result of one question.
pub type QueryResult = Result<String, QueryError>;

/// Trims the question and rejects it if nothing is left.
pub fn validate_question(text: &str) -> Result<&str, QueryError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(QueryError::InvalidInput)
    } else {
        Ok(trimmed)
    }
}

/// What to do after one attempt.
enum AttemptOutcome {
    Done(QueryResult),
    Retry(TransientFailure),
}

/// Sends questions to the generative-text endpoint, retrying transient
/// failures with exponential backoff.
///
/// Cheap to clone; clones share the HTTP client and sleeper.
#[derive(Clone)]
pub struct QueryClient {
    config: QueryConfig,
    policy: BackoffPolicy,
    http: Arc<dyn HttpClient>,
    sleeper: Arc<dyn Sleeper>,
}

impl std::fmt::Debug for QueryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryClient")
            .field("endpoint", &self.config.api_url)
            .field("model", &self.config.model)
            .field("policy", &self.policy)
            .finish()
    }
}

impl QueryClient {
    pub fn new(config: QueryConfig, http: Arc<dyn HttpClient>, sleeper: Arc<dyn Sleeper>) -> Self {
        Self {
            policy: BackoffPolicy::from_config(&config),
            config,
            http,
            sleeper,
        }
    }

    /// Production client: reqwest with the configured timeout, tokio timer.
    pub fn from_config(config: QueryConfig) -> Result<Self, HttpError> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(config, Arc::new(http), Arc::new(TokioSleeper)))
    }

    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Ask one question.
    ///
    /// Empty input fails without touching the network. Transport errors,
    /// 429 and 5xx are retried up to `max_attempts` in total; any other
    /// status or an unusable 2xx body ends the call immediately.
    pub async fn query(&self, user_text: &str) -> QueryResult {
        let question = validate_question(user_text)?;

        let body = serde_json::to_string(&GenerateRequest::new(question, &self.config.persona))
            .map_err(|e| QueryError::InvalidEndpoint(e.to_string()))?;
        let url = self.config.endpoint_url();
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut retry = self.policy.start();
        loop {
            debug!(attempt = retry.attempt() + 1, "Sending assistant query");

            let outcome = match self.http.post(&url, &body, &headers).await {
                Ok(response) => Self::classify_response(&response),
                Err(err) if err.is_transient() => {
                    AttemptOutcome::Retry(TransientFailure::Transport(err))
                }
                Err(err) => AttemptOutcome::Done(Err(QueryError::InvalidEndpoint(err.to_string()))),
            };

            let failure = match outcome {
                AttemptOutcome::Done(result) => {
                    match &result {
                        Ok(_) => info!(attempts = retry.attempts_made(), "Assistant query answered"),
                        Err(err) => warn!(
                            code = err.error_code(),
                            category = %err.category(),
                            "Assistant query failed: {}",
                            err
                        ),
                    }
                    return result;
                }
                AttemptOutcome::Retry(failure) => failure,
            };

            if !retry.has_remaining() {
                let attempts = retry.attempts_made();
                warn!(attempts, "Assistant query gave up: {}", failure);
                return Err(QueryError::ExhaustedRetries {
                    attempts,
                    last: failure,
                });
            }

            let delay = retry.advance();
            warn!(
                "Attempt {} failed ({}), retrying after {}ms",
                retry.attempt(),
                failure,
                delay.as_millis()
            );
            self.sleeper.sleep(delay).await;
        }
    }

    fn classify_response(response: &Response) -> AttemptOutcome {
        if response.is_success() {
            let parsed: GenerateResponse = match response.json() {
                Ok(parsed) => parsed,
                Err(e) => {
                    return AttemptOutcome::Done(Err(QueryError::MalformedResponse {
                        detail: e.to_string(),
                    }))
                }
            };
            return AttemptOutcome::Done(match parsed.first_text() {
                Some(text) => Ok(text.to_string()),
                None => Err(QueryError::MalformedResponse {
                    detail: "missing candidates[0].content.parts[0].text".to_string(),
                }),
            });
        }

        if response.is_retryable_status() {
            return AttemptOutcome::Retry(TransientFailure::Status {
                status: response.status,
                message: Self::error_message(response),
            });
        }

        AttemptOutcome::Done(Err(QueryError::Rejected {
            status: response.status,
            message: Self::error_message(response),
        }))
    }

    fn error_message(response: &Response) -> String {
        match response
            .json::<ApiErrorBody>()
            .ok()
            .and_then(|body| body.message().map(str::to_string))
        {
            Some(message) => message,
            None => {
                debug!(
                    status = response.status,
                    body = %response.text_lossy(),
                    "Error response without a message"
                );
                UNKNOWN_API_ERROR.to_string()
            }
        }
    }
}

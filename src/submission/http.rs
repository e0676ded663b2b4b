//! HTTP submission handler backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use super::{RatingSubmission, RatingSubmitter, SubmissionError, SubmissionReceipt};
use crate::rating::CurrentRating;

/// Longest rejection detail kept from a response body, in characters.
const MAX_REJECTION_CHARS: usize = 120;

/// Optional response body returned by the rating endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptBody {
    average_rating: Option<f64>,
}

/// Posts ratings as JSON to a configured endpoint.
///
/// Any 2xx response is treated as success. When the body is a JSON object
/// with an `averageRating` number, it is returned as the refreshed course
/// average.
#[derive(Debug, Clone)]
pub struct HttpRatingSubmitter {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpRatingSubmitter {
    /// Creates a submitter posting to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::InvalidEndpoint`] when `endpoint` is not an
    /// absolute HTTP(S) URL, or [`SubmissionError::Network`] when the HTTP
    /// client cannot be built.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubmissionError> {
        let parsed = Url::parse(endpoint).map_err(|error| SubmissionError::InvalidEndpoint {
            message: error.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SubmissionError::InvalidEndpoint {
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| SubmissionError::Network {
                message: error.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: parsed,
        })
    }

    /// Returns the endpoint receiving submissions.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RatingSubmitter for HttpRatingSubmitter {
    async fn submit(
        &self,
        submission: &RatingSubmission,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await
            .map_err(|error| SubmissionError::Network {
                message: error.to_string(),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| SubmissionError::Network {
                message: error.to_string(),
            })?;

        if !status.is_success() {
            let message = rejection_detail(&body).unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("no response body")
                    .to_owned()
            });
            return Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(parse_receipt(&body))
    }
}

/// Keeps the first non-blank line of an error body, shortened to fit under
/// the form.
fn rejection_detail(body: &str) -> Option<String> {
    let line = body.lines().map(str::trim).find(|line| !line.is_empty())?;
    if line.chars().count() <= MAX_REJECTION_CHARS {
        return Some(line.to_owned());
    }
    let mut detail: String = line.chars().take(MAX_REJECTION_CHARS).collect();
    detail.push('…');
    Some(detail)
}

/// Reads an optional refreshed average from a success body.
fn parse_receipt(body: &str) -> SubmissionReceipt {
    if body.trim().is_empty() {
        return SubmissionReceipt::default();
    }

    match serde_json::from_str::<ReceiptBody>(body) {
        Ok(ReceiptBody {
            average_rating: Some(average),
        }) => SubmissionReceipt::with_updated_rating(CurrentRating::new(average)),
        Ok(_) => SubmissionReceipt::default(),
        Err(error) => {
            tracing::debug!("ignoring unparseable rating receipt: {error}");
            SubmissionReceipt::default()
        }
    }
}

//! Single-shot page retrieval bridged to the request handler.
//!
//! The retrieval and extraction run on a background task that resolves a
//! one-shot completion channel; the caller waits on that channel under a
//! wall-clock deadline. Exactly one terminal outcome is observed per
//! invocation: completed, failed, or timed out.

use std::time::Duration;

use tokio::sync::oneshot;

use crate::error::ScrapeError;
use crate::extract::{extract_product, ExtractionResult};

/// Fetches a product page once and extracts its price and image fields.
///
/// Holds a configured `reqwest::Client`; cheap to share behind an `Arc`.
pub struct QuoteFetcher {
    client: reqwest::Client,
    deadline: Duration,
}

impl QuoteFetcher {
    /// Creates a `QuoteFetcher` with the given deadline and `User-Agent`.
    ///
    /// The client-level request timeout trails the deadline so the
    /// orchestrator, not `reqwest`, decides the timeout outcome; the
    /// client timeout only reaps retrievals abandoned after the deadline
    /// so they cannot linger for the lifetime of the connection.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(deadline_secs: u64, user_agent: &str) -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(deadline_secs + 5))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            deadline: Duration::from_secs(deadline_secs),
        })
    }

    /// Performs exactly one retrieval/extraction pass over `url`.
    ///
    /// The fetch runs on a spawned task so the deadline wait runs
    /// concurrently with it. When the deadline fires first, the receiver
    /// is dropped and this returns [`ScrapeError::Timeout`]; the worker's
    /// late `send` then fails and the result is discarded. The in-flight
    /// request is not aborted explicitly.
    ///
    /// A page where neither selector matches is a completed fetch with
    /// empty fields, not an error.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Timeout`] — deadline elapsed before completion.
    /// - [`ScrapeError::UnexpectedStatus`] — non-2xx response.
    /// - [`ScrapeError::Http`] — transport failure (unreachable host, TLS).
    /// - [`ScrapeError::Worker`] — background task died without resolving.
    pub async fn fetch_page(&self, url: &str) -> Result<ExtractionResult, ScrapeError> {
        let (tx, rx) = oneshot::channel();
        let client = self.client.clone();
        let target = url.to_owned();

        tokio::spawn(async move {
            let outcome = fetch_and_extract(&client, &target).await;
            // Fails when the deadline already fired and the receiver is
            // gone; the late result is dropped here.
            let _ = tx.send(outcome);
        });

        match tokio::time::timeout(self.deadline, rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => Err(ScrapeError::Worker),
            Err(_) => Err(ScrapeError::Timeout {
                url: url.to_owned(),
                deadline_secs: self.deadline.as_secs(),
            }),
        }
    }
}

async fn fetch_and_extract(
    client: &reqwest::Client,
    url: &str,
) -> Result<ExtractionResult, ScrapeError> {
    tracing::info!(%url, "fetching product page");

    let response = client
        .get(url)
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
        )
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text().await?;
    let result = extract_product(&body);
    tracing::debug!(
        price = %result.price_text,
        image = %result.image_url,
        "extraction finished"
    );
    Ok(result)
}

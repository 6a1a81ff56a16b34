use std::future::Future;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("quotedesk/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by all upstream calls.
///
/// `timeout` bounds the whole request, connect included.
pub fn build_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Runs `operation` up to `1 + retries` times, sleeping `delay_ms` between
/// attempts, and returns the first success or the last transport error.
///
/// Only errors raised before a response arrives are retried; a response with
/// any status counts as a success here.
pub async fn with_retry<F, Fut, T>(
    mut operation: F,
    retries: usize,
    delay_ms: u64,
) -> Result<T, reqwest::Error>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, reqwest::Error>>,
{
    let mut remaining = retries;
    loop {
        match operation().await {
            Err(err) if remaining > 0 => {
                debug!(error = %err, remaining, "Transport error, retrying");
                remaining -= 1;
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
            result => return result,
        }
    }
}

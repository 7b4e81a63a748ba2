use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::Client;
use tokio::sync::Mutex;
use tokio::time::sleep;

/// HTTP client that enforces a minimum interval between requests, shared
/// across clones so concurrent fetches still respect the API quota.
#[derive(Clone)]
pub struct RateLimitedClient {
    client: Client,
    min_interval: Duration,
    last_request: Arc<Mutex<Option<Instant>>>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            min_interval: Duration::from_millis(rate_limit_ms),
            last_request: Arc::new(Mutex::new(None)),
        })
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.throttle().await;
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }

    // Holding the lock across the sleep serializes callers, which is exactly
    // the throttle we want.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < self.min_interval {
                sleep(self.min_interval - elapsed).await;
            }
        }

        *last = Some(Instant::now());
    }
}

use anyhow::{Context, Result};
use log::{error, info, warn};
use serde_json::Value;
use tokio::time::{Duration, sleep};

use crate::api::models::{SpreadsheetMeta, ValueRange};
use crate::cache::Cache;
use crate::config::settings::{FetchSettings, SheetsSettings};
use crate::domain::RowSet;
use crate::http::RateLimitedClient;

/// Read-only client for the Google Sheets REST API (v4). Clones share one
/// rate limiter, so week tabs can be fetched concurrently without blowing
/// the per-minute quota.
#[derive(Clone)]
pub struct SheetsClient {
    client: RateLimitedClient,
    base_url: String,
    spreadsheet_id: String,
    api_key: String,
    max_fetch_attempts: u32,
    retry_delay: Duration,
}

impl SheetsClient {
    /// Build a client from settings. The API key and spreadsheet id come
    /// from the environment so they never live in the repo.
    pub fn new(sheets: &SheetsSettings, fetch: &FetchSettings) -> Result<Self> {
        let api_key = std::env::var(sheets.api_key_env)
            .with_context(|| format!("{} not set", sheets.api_key_env))?;
        let spreadsheet_id = std::env::var(sheets.spreadsheet_id_env)
            .with_context(|| format!("{} not set", sheets.spreadsheet_id_env))?;

        let client = RateLimitedClient::new(
            sheets.user_agent,
            sheets.timeout_secs,
            sheets.rate_limit_ms,
        )?;

        Ok(Self {
            client,
            base_url: sheets.api_base_url.to_string(),
            spreadsheet_id,
            api_key,
            max_fetch_attempts: fetch.max_fetch_attempts,
            retry_delay: Duration::from_millis(fetch.retry_delay_ms),
        })
    }

    /// All tab titles of the spreadsheet.
    pub async fn list_tabs(&self) -> Result<Vec<String>> {
        info!("Listing tabs for spreadsheet {}", self.spreadsheet_id);

        let url = self.build_metadata_url();
        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!("Sheets API returned status: {}", response.status());
        }

        let meta: SpreadsheetMeta = response
            .json()
            .await
            .context("Failed to parse spreadsheet metadata")?;

        Ok(meta
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect())
    }

    /// Fetch one tab's rows. An empty tab yields an empty row-set.
    pub async fn fetch_rows(&self, tab: &str, cell_range: &str) -> Result<RowSet> {
        info!("Fetching rows from tab '{}'", tab);

        let url = self.build_values_url(tab, cell_range);
        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Sheets API returned status {} for tab '{}'",
                response.status(),
                tab
            );
        }

        let value_range: ValueRange = response
            .json()
            .await
            .with_context(|| format!("Failed to parse values for tab '{}'", tab))?;

        Ok(value_range.values)
    }

    /// Fetch a tab a dependent report cannot run without. Bounded retry with
    /// a fixed delay, then a hard error; this replaces an earlier design
    /// that rescheduled itself forever when the data was not ready.
    pub async fn fetch_rows_with_retry(&self, tab: &str, cell_range: &str) -> Result<RowSet> {
        let mut last_error = None;

        for attempt in 1..=self.max_fetch_attempts {
            match self.fetch_rows(tab, cell_range).await {
                Ok(rows) => return Ok(rows),
                Err(e) => {
                    warn!(
                        "Fetch attempt {}/{} for tab '{}' failed: {:?}",
                        attempt, self.max_fetch_attempts, tab, e
                    );
                    last_error = Some(e);
                    if attempt < self.max_fetch_attempts {
                        sleep(self.retry_delay).await;
                    }
                }
            }
        }

        error!(
            "Giving up on tab '{}' after {} attempts",
            tab, self.max_fetch_attempts
        );
        Err(last_error
            .unwrap_or_else(|| anyhow::anyhow!("no fetch attempts made"))
            .context(format!("Failed to fetch tab '{}'", tab)))
    }

    /// Fetch with cache integration: the full raw JSON is saved before
    /// parsing, so a later schema change can re-read old responses.
    pub async fn fetch_and_cache_rows(
        &self,
        tab: &str,
        cell_range: &str,
        cache: &Cache,
    ) -> Result<RowSet> {
        if let Some(value) = cache.load_raw(tab)? {
            let value_range: ValueRange = serde_json::from_value(value)
                .with_context(|| format!("Failed to map cached JSON for tab '{}'", tab))?;
            return Ok(value_range.values);
        }

        let url = self.build_values_url(tab, cell_range);
        let response = self.client.get(&url).await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Sheets API returned status {} for tab '{}'",
                response.status(),
                tab
            );
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse JSON for tab '{}'", tab))?;

        if let Err(e) = cache.save_raw(tab, &value) {
            warn!("Failed to save tab '{}' to cache: {:?}", tab, e);
        }

        let value_range: ValueRange = serde_json::from_value(value)
            .with_context(|| format!("Failed to map JSON to ValueRange for tab '{}'", tab))?;
        Ok(value_range.values)
    }

    // --- Helper Methods ---

    fn build_metadata_url(&self) -> String {
        format!(
            "{}/{}?key={}&fields=sheets(properties(title))",
            self.base_url, self.spreadsheet_id, self.api_key
        )
    }

    fn build_values_url(&self, tab: &str, cell_range: &str) -> String {
        // Tab names carry spaces, so the A1 range is percent-encoded.
        let range = format!("'{}'!{}", tab, cell_range);
        format!(
            "{}/{}/values/{}?key={}",
            self.base_url,
            self.spreadsheet_id,
            urlencoding::encode(&range),
            self.api_key
        )
    }
}

use anyhow::Result;
use log::{info, warn};
use tokio::task::JoinSet;

use crate::api::SheetsClient;
use crate::cache::Cache;
use crate::config::{AppConfig, SheetSchema};
use crate::domain::WeekSnapshot;

const CACHE_DIR: &str = "cache";
pub const WEEKS_KEY: &str = "weeks";
pub const PRS_KEY: &str = "prs";
pub const RACES_KEY: &str = "race_results";

pub struct IngestionService {
    cache: Cache,
    client: SheetsClient,
    config: AppConfig,
    schema: SheetSchema,
}

impl IngestionService {
    pub fn new(config: AppConfig, schema: SheetSchema) -> Result<Self> {
        let client = SheetsClient::new(&config.sheets, &config.fetch)?;

        Ok(Self {
            cache: Cache::new(CACHE_DIR)?,
            client,
            config,
            schema,
        })
    }

    pub async fn run(&self) -> Result<()> {
        info!("=== Starting Sheet Ingestion ===\n");

        // Step 1: Discover week tabs
        let week_tabs = self.discover_week_tabs().await?;
        info!("  → Found {} week tabs\n", week_tabs.len());

        // Step 2: Fetch every week tab concurrently
        let weeks = fetch_week_tabs(&self.client, &self.schema, week_tabs).await?;
        self.cache.save_parsed(WEEKS_KEY, &weeks)?;
        info!("  → Cached {} week snapshots\n", weeks.len());

        // Step 3: Personal records (reports depend on it; bounded retry)
        let prs = self
            .client
            .fetch_rows_with_retry(self.config.tabs.pr_tab, self.schema.pr_range)
            .await?;
        self.cache.save_parsed(PRS_KEY, &prs)?;
        info!("  → Cached {} PR rows\n", prs.len());

        // Step 4: Race results, falling back to the older tab name
        let races = self.fetch_race_rows().await?;
        self.cache.save_parsed(RACES_KEY, &races)?;
        info!("  → Cached {} race result rows\n", races.len());

        info!("=== Ingestion Complete ===");
        Ok(())
    }

    async fn discover_week_tabs(&self) -> Result<Vec<String>> {
        info!("Step 1: Discovering week tabs...");

        let tabs = self.client.list_tabs().await?;
        Ok(filter_week_tabs(tabs, self.config.tabs.week_marker))
    }

    async fn fetch_race_rows(&self) -> Result<crate::domain::RowSet> {
        let tabs = &self.config.tabs;

        match self
            .client
            .fetch_and_cache_rows(tabs.race_tab, self.schema.race_range, &self.cache)
            .await
        {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!(
                    "Tab '{}' unavailable ({:?}); trying legacy tab '{}'",
                    tabs.race_tab, e, tabs.legacy_race_tab
                );
                self.client
                    .fetch_and_cache_rows(tabs.legacy_race_tab, self.schema.race_range, &self.cache)
                    .await
            }
        }
    }
}

/// Week tabs are recognized by a configured marker substring in the title.
pub fn filter_week_tabs(tabs: Vec<String>, marker: &str) -> Vec<String> {
    tabs.into_iter()
        .filter(|title| title.contains(marker))
        .collect()
}

/// Fetch all week tabs concurrently and join on the full set.
///
/// A failed tab is logged and skipped so one bad week cannot take the whole
/// season down; only a fully failed fetch round is an error. Results come
/// back in sheet order regardless of completion order, since the season fold
/// depends on week ordering.
pub async fn fetch_week_tabs(
    client: &SheetsClient,
    schema: &SheetSchema,
    week_tabs: Vec<String>,
) -> Result<Vec<WeekSnapshot>> {
    if week_tabs.is_empty() {
        return Ok(Vec::new());
    }

    let total = week_tabs.len();
    let mut join_set = JoinSet::new();

    for (idx, title) in week_tabs.into_iter().enumerate() {
        let client = client.clone();
        let range = schema.attendance_range;
        join_set.spawn(async move {
            let result = client.fetch_rows(&title, range).await;
            (idx, title, result)
        });
    }

    let mut slots: Vec<Option<WeekSnapshot>> = (0..total).map(|_| None).collect();

    while let Some(joined) = join_set.join_next().await {
        let (idx, title, result) = joined?;
        match result {
            Ok(rows) => slots[idx] = Some(WeekSnapshot { title, rows }),
            Err(e) => warn!("Skipping week tab '{}': {:?}", title, e),
        }
    }

    let weeks: Vec<WeekSnapshot> = slots.into_iter().flatten().collect();

    if weeks.is_empty() {
        anyhow::bail!("Every week tab fetch failed");
    }

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_week_tabs() {
        let tabs = vec![
            "Week 1".to_string(),
            "PRs".to_string(),
            "Week 2".to_string(),
            "Race_Results".to_string(),
        ];

        assert_eq!(filter_week_tabs(tabs, "Week"), vec!["Week 1", "Week 2"]);
    }
}

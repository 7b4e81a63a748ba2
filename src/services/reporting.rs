use anyhow::{Context, Result};
use log::info;

use crate::analytics::aggregate_season;
use crate::api::SheetsClient;
use crate::cache::Cache;
use crate::config::{AppConfig, SheetSchema};
use crate::domain::{RowSet, WeekSnapshot, parse_race_rows};
use crate::records::{PrEvent, PrRegistry};
use crate::render;
use crate::reports::{
    MeetTab, SortState, group_leaders, meet_names, meet_view, pr_table_view, season_leaderboard,
    weekly_table,
};
use crate::services::ingestion::{self, PRS_KEY, RACES_KEY, WEEKS_KEY};

const CACHE_DIR: &str = "cache";

/// Builds and renders the dashboard reports, preferring cached snapshots and
/// fetching on miss.
pub struct ReportingService {
    cache: Cache,
    config: AppConfig,
    schema: SheetSchema,
}

impl ReportingService {
    pub fn new(config: AppConfig, schema: SheetSchema) -> Result<Self> {
        Ok(Self {
            cache: Cache::new(CACHE_DIR)?,
            config,
            schema,
        })
    }

    /// Season-long aggregation: totals, leaderboard, group leaders.
    pub async fn season(&self) -> Result<()> {
        let weeks = self.load_weeks().await?;
        info!("Aggregating season over {} weeks", weeks.len());

        let row_sets: Vec<RowSet> = weeks.into_iter().map(|week| week.rows).collect();
        let report = aggregate_season(&row_sets, &self.schema);

        let ranked = season_leaderboard(&report);
        let leaders = group_leaders(&report);
        render::print_season(&report, &ranked, &leaders);
        Ok(())
    }

    /// Weekly mileage table for one tab.
    pub async fn week(&self, tab: &str) -> Result<()> {
        let rows = self.load_week_rows(tab).await?;
        let table = weekly_table(&rows, &self.schema);
        render::print_weekly(tab, &table);
        Ok(())
    }

    /// PR table with optional sort column, direction and name filter.
    pub async fn prs(
        &self,
        sort_by: Option<PrEvent>,
        descending: bool,
        filter: Option<&str>,
    ) -> Result<()> {
        let registry = self.load_registry().await?;

        let mut sort = SortState::new();
        if let Some(event) = sort_by {
            sort.toggle(event);
            if descending {
                sort.toggle(event);
            }
        }

        let view = pr_table_view(&registry, &sort, filter);
        render::print_pr_table(&view, &sort);
        Ok(())
    }

    /// Race results for one meet, defaulting to the most recent meet in the
    /// sheet. The PR registry is loaded first; the meet view depends on it.
    pub async fn meet(&self, name: Option<&str>, tab: MeetTab) -> Result<()> {
        let registry = self.load_registry().await?;
        let race_rows = self.load_race_rows().await?;
        let rows = parse_race_rows(&race_rows, &self.schema);

        let known = meet_names(&rows);
        let selected = match name {
            Some(name) => name.to_string(),
            None => known
                .last()
                .cloned()
                .context("No meets found in the race results tab")?,
        };

        let view = meet_view(&rows, &selected, tab, &registry);
        render::print_meet(&view, &known);
        Ok(())
    }

    // --- Data loading (cache first, fetch on miss) ---

    fn build_client(&self) -> Result<SheetsClient> {
        SheetsClient::new(&self.config.sheets, &self.config.fetch)
    }

    async fn load_weeks(&self) -> Result<Vec<WeekSnapshot>> {
        if let Some(weeks) = self.cache.load_parsed::<Vec<WeekSnapshot>>(WEEKS_KEY)? {
            info!("Loaded {} week snapshots from cache", weeks.len());
            return Ok(weeks);
        }

        let client = self.build_client()?;
        let tabs = client.list_tabs().await?;
        let week_tabs = ingestion::filter_week_tabs(tabs, self.config.tabs.week_marker);
        let weeks = ingestion::fetch_week_tabs(&client, &self.schema, week_tabs).await?;

        self.cache.save_parsed(WEEKS_KEY, &weeks)?;
        Ok(weeks)
    }

    async fn load_week_rows(&self, tab: &str) -> Result<RowSet> {
        if let Some(weeks) = self.cache.load_parsed::<Vec<WeekSnapshot>>(WEEKS_KEY)? {
            if let Some(week) = weeks.into_iter().find(|week| week.title == tab) {
                return Ok(week.rows);
            }
        }

        let client = self.build_client()?;
        client.fetch_rows(tab, self.schema.attendance_range).await
    }

    async fn load_registry(&self) -> Result<PrRegistry> {
        let rows = self.load_pr_rows().await?;
        let registry = PrRegistry::from_rows(&rows, &self.schema);
        info!("PR registry holds {} athletes", registry.len());
        Ok(registry)
    }

    async fn load_pr_rows(&self) -> Result<RowSet> {
        if let Some(rows) = self.cache.load_parsed::<RowSet>(PRS_KEY)? {
            return Ok(rows);
        }

        let client = self.build_client()?;
        let rows = client
            .fetch_rows_with_retry(self.config.tabs.pr_tab, self.schema.pr_range)
            .await?;
        self.cache.save_parsed(PRS_KEY, &rows)?;
        Ok(rows)
    }

    async fn load_race_rows(&self) -> Result<RowSet> {
        if let Some(rows) = self.cache.load_parsed::<RowSet>(RACES_KEY)? {
            return Ok(rows);
        }

        let client = self.build_client()?;
        let tabs = &self.config.tabs;
        let rows = match client
            .fetch_rows(tabs.race_tab, self.schema.race_range)
            .await
        {
            Ok(rows) => rows,
            Err(_) => {
                client
                    .fetch_rows(tabs.legacy_race_tab, self.schema.race_range)
                    .await?
            }
        };

        self.cache.save_parsed(RACES_KEY, &rows)?;
        Ok(rows)
    }
}

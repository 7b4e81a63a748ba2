pub struct SheetsSettings {
    pub api_base_url: &'static str,
    pub api_key_env: &'static str,
    pub spreadsheet_id_env: &'static str,
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SheetsSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://sheets.googleapis.com/v4/spreadsheets",
            api_key_env: "SHEETS_API_KEY",
            spreadsheet_id_env: "SPREADSHEET_ID",
            rate_limit_ms: 100, // 10 req/sec, well under the per-minute quota
            user_agent: "XcTeamDashboard/1.0",
            timeout_secs: 30,
        }
    }
}

pub struct TabSettings {
    /// Substring that marks a mileage tab ("Week 1", "Week 2", ...).
    pub week_marker: &'static str,
    pub pr_tab: &'static str,
    pub race_tab: &'static str,
    /// Tab name used by older copies of the sheet.
    pub legacy_race_tab: &'static str,
}

impl Default for TabSettings {
    fn default() -> Self {
        Self {
            week_marker: "Week",
            pr_tab: "PRs",
            race_tab: "Race_Results",
            legacy_race_tab: "Race Results",
        }
    }
}

pub struct FetchSettings {
    /// Bounded retry for tabs a report depends on (replaces the old
    /// retry-forever readiness poll).
    pub max_fetch_attempts: u32,
    pub retry_delay_ms: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            max_fetch_attempts: 3,
            retry_delay_ms: 500,
        }
    }
}

pub struct AppConfig {
    pub sheets: SheetsSettings,
    pub tabs: TabSettings,
    pub fetch: FetchSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            sheets: SheetsSettings::default(),
            tabs: TabSettings::default(),
            fetch: FetchSettings::default(),
        }
    }
}

use chrono::{DateTime, Utc};

use crate::domain::Gender;

/// Per-athlete season accumulator.
///
/// Invariant: `absences == absent + excused + injured`.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTotal {
    /// Raw sheet name, tag included; the cross-tab lookup key.
    pub name: String,
    pub display_name: String,
    pub gender: Gender,
    /// Last non-empty group seen across the processed weeks.
    pub group: String,
    pub miles: f64,
    pub absences: u32,
    pub absent: u32,
    pub excused: u32,
    pub injured: u32,
}

impl SeasonTotal {
    pub fn new(name: String, display_name: String, gender: Gender, group: String) -> Self {
        Self {
            name,
            display_name,
            gender,
            group,
            miles: 0.0,
            absences: 0,
            absent: 0,
            excused: 0,
            injured: 0,
        }
    }
}

/// Season-wide aggregation over every week tab. Rebuilt from scratch on each
/// run; never persisted.
#[derive(Debug, Clone)]
pub struct SeasonReport {
    /// First-seen order across the fold; leaderboard tie-breaking relies on
    /// this ordering staying put.
    pub totals: Vec<SeasonTotal>,
    pub team_miles: f64,
    pub total_absences: u32,
    /// Athlete-rows times active columns: the attendance-health denominator,
    /// not merely "days that exist".
    pub total_active_days: u32,
    pub weeks_processed: usize,
    pub generated_at: DateTime<Utc>,
}

impl SeasonReport {
    /// Percentage of active athlete-days not lost to an absence. Defined as
    /// 100% when there is no denominator yet.
    pub fn attendance_health(&self) -> f64 {
        if self.total_active_days == 0 {
            return 100.0;
        }

        (1.0 - f64::from(self.total_absences) / f64::from(self.total_active_days)) * 100.0
    }
}

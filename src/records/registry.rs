use std::collections::HashMap;

use crate::config::SheetSchema;
use crate::domain::{RowSet, normalize_name, split_athlete_name};

/// First-column value that marks an optional header row on the PRs tab.
const HEADER_SENTINEL: &str = "Name";

pub const PR_EVENT_LABELS: [&str; 3] = ["800m", "1600m", "3200m"];

/// The three individual events a PR row can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrEvent {
    M800,
    M1600,
    M3200,
}

impl PrEvent {
    pub fn index(&self) -> usize {
        match self {
            PrEvent::M800 => 0,
            PrEvent::M1600 => 1,
            PrEvent::M3200 => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        PR_EVENT_LABELS[self.index()]
    }

    /// Accepts the forms athletes actually type: "800", "800m", "1600", ...
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().trim_end_matches(['m', 'M']) {
            "800" => Some(PrEvent::M800),
            "1600" => Some(PrEvent::M1600),
            "3200" => Some(PrEvent::M3200),
            _ => None,
        }
    }
}

/// One athlete's best recorded times, verbatim from the sheet. A cell may be
/// a time string or a "no time recorded" sentinel.
#[derive(Debug, Clone)]
pub struct PrRecord {
    pub name: String,
    pub times: [String; 3],
}

impl PrRecord {
    pub fn display_name(&self) -> String {
        split_athlete_name(&self.name).0
    }

    pub fn time_for(&self, event: PrEvent) -> &str {
        &self.times[event.index()]
    }
}

/// Athlete -> best-times mapping, keyed case-insensitively on the trimmed
/// name. Replaced wholesale on every fetch; views reorder copies of it but
/// never mutate the registry itself.
#[derive(Debug, Clone, Default)]
pub struct PrRegistry {
    records: Vec<PrRecord>,
    index: HashMap<String, usize>,
}

impl PrRegistry {
    /// Build the registry from raw PR-tab rows. The optional header row is
    /// excluded by its sentinel first cell; duplicate names keep the first
    /// occurrence so exactly one record exists per athlete.
    pub fn from_rows(rows: &RowSet, schema: &SheetSchema) -> Self {
        let mut registry = Self::default();

        for row in rows {
            let name = row
                .get(schema.pr_name_col)
                .map(|c| c.trim())
                .unwrap_or_default();

            if name.is_empty() || name == HEADER_SENTINEL {
                continue;
            }

            let key = normalize_name(name);
            if registry.index.contains_key(&key) {
                continue;
            }

            let mut times: [String; 3] = Default::default();
            for (slot, &col) in times.iter_mut().zip(schema.pr_event_cols.iter()) {
                *slot = row.get(col).map(|c| c.trim().to_string()).unwrap_or_default();
            }

            registry.index.insert(key, registry.records.len());
            registry.records.push(PrRecord {
                name: name.to_string(),
                times,
            });
        }

        registry
    }

    /// Case- and whitespace-insensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&PrRecord> {
        self.index
            .get(&normalize_name(name))
            .map(|&idx| &self.records[idx])
    }

    /// Prior time for one athlete/event; empty string when the athlete has
    /// no record at all (treated as a debut downstream).
    pub fn prior_time(&self, name: &str, event: PrEvent) -> &str {
        self.lookup(name)
            .map(|record| record.time_for(event))
            .unwrap_or("")
    }

    pub fn records(&self) -> &[PrRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use std::collections::HashSet;

use crate::domain::{RaceResultRow, RelayLeg, split_athlete_name};
use crate::records::{PrEvent, PrRegistry, format_improvement, is_new_personal_record};
use crate::values::is_no_time;

/// Which result subset of a meet is being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetTab {
    Individual,
    Relay,
}

/// One event cell of an individual result, PR-checked against the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetEventCell {
    pub time: String,
    pub is_pr: bool,
    pub improvement: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetIndividualRow {
    pub display_name: String,
    /// Cells in 800m / 1600m / 3200m order.
    pub cells: [MeetEventCell; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetRelayRow {
    pub display_name: String,
    pub legs: Vec<RelayLeg>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MeetSummary {
    Individual {
        prs: u32,
        valid_performances: u32,
        pr_rate: f64,
    },
    Relay {
        participations: u32,
        distinct_teams: u32,
    },
}

#[derive(Debug, Clone)]
pub struct MeetView {
    pub meet: String,
    pub tab: MeetTab,
    pub individual: Vec<MeetIndividualRow>,
    pub relay: Vec<MeetRelayRow>,
    pub summary: MeetSummary,
}

/// Distinct meet names in sheet order (first appearance wins).
pub fn meet_names(rows: &[RaceResultRow]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for row in rows {
        if !row.meet.is_empty() && seen.insert(row.meet.clone()) {
            names.push(row.meet.clone());
        }
    }

    names
}

/// Build one meet's result view: rows filtered to the meet, split into the
/// selected subset, every individual cell cross-referenced against the PR
/// registry (case/trim-insensitive on the athlete name).
pub fn meet_view(
    rows: &[RaceResultRow],
    meet: &str,
    tab: MeetTab,
    registry: &PrRegistry,
) -> MeetView {
    let at_meet: Vec<&RaceResultRow> = rows.iter().filter(|row| row.meet == meet).collect();

    let mut individual = Vec::new();
    let mut relay = Vec::new();
    let mut prs = 0u32;
    let mut valid_performances = 0u32;
    let mut participations = 0u32;
    let mut teams: HashSet<(String, String)> = HashSet::new();

    for row in &at_meet {
        if row.events.iter().any(|time| !is_no_time(time)) {
            let cells = build_event_cells(row, registry, &mut prs, &mut valid_performances);
            individual.push(MeetIndividualRow {
                display_name: split_athlete_name(&row.name).0,
                cells,
            });
        }

        let valid_legs: Vec<RelayLeg> = row
            .relay_legs
            .iter()
            .filter(|leg| !is_no_time(&leg.time))
            .cloned()
            .collect();

        if !valid_legs.is_empty() {
            participations += valid_legs.len() as u32;
            for leg in &valid_legs {
                teams.insert((leg.time.clone(), leg.event.clone()));
            }
            relay.push(MeetRelayRow {
                display_name: split_athlete_name(&row.name).0,
                legs: valid_legs,
            });
        }
    }

    let summary = match tab {
        MeetTab::Individual => MeetSummary::Individual {
            prs,
            valid_performances,
            pr_rate: if valid_performances == 0 {
                0.0
            } else {
                f64::from(prs) / f64::from(valid_performances) * 100.0
            },
        },
        MeetTab::Relay => MeetSummary::Relay {
            participations,
            distinct_teams: teams.len() as u32,
        },
    };

    MeetView {
        meet: meet.to_string(),
        tab,
        individual,
        relay,
        summary,
    }
}

fn build_event_cells(
    row: &RaceResultRow,
    registry: &PrRegistry,
    prs: &mut u32,
    valid_performances: &mut u32,
) -> [MeetEventCell; 3] {
    let events = [PrEvent::M800, PrEvent::M1600, PrEvent::M3200];

    events.map(|event| {
        let time = row.events[event.index()].clone();
        if is_no_time(&time) {
            return MeetEventCell {
                time,
                is_pr: false,
                improvement: String::new(),
            };
        }

        *valid_performances += 1;
        let prior = registry.prior_time(&row.name, event);
        let is_pr = is_new_personal_record(&time, prior);
        if is_pr {
            *prs += 1;
        }

        MeetEventCell {
            improvement: if is_pr {
                format_improvement(prior, &time)
            } else {
                String::new()
            },
            time,
            is_pr,
        }
    })
}
